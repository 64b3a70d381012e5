code_enum! {
    /// Назначение счёта объединения
    pub enum PaymentType {
        Savings = 0 => "Накопительный",
        Deposit = 1 => "Депозитный",
    }
}
