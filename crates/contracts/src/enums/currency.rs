code_enum! {
    /// Валюта
    pub enum Currency {
        Usd = 0 => "USD",
        Eur = 1 => "EUR",
        Uah = 2 => "UAH",
        Pln = 3 => "PLN",
    }
}
