code_enum! {
    /// Голос в опросе
    pub enum VoteType {
        Unknown = 0 => "Не голосовал",
        Agree = 1 => "За",
        Disagree = 2 => "Против",
        Abstained = 3 => "Воздержался",
    }
}
