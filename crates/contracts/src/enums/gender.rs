code_enum! {
    pub enum Gender {
        Unknown = 0 => "Не указан",
        Male = 1 => "Мужской",
        Female = 2 => "Женский",
    }
}
