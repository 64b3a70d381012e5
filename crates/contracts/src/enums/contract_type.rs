code_enum! {
    /// Вид договора
    pub enum ContractType {
        Civil = 0 => "Гражданско-правовой",
        Sale = 1 => "Купли-продажи",
        Supply = 2 => "Поставки",
        Executive = 3 => "Подряда",
        Liability = 4 => "О материальной ответственности",
        Cooperation = 5 => "О сотрудничестве",
        Management = 6 => "Управления",
        Memorandum = 7 => "Меморандум",
        Lease = 8 => "Аренды",
    }
}
