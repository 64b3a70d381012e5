code_enum! {
    /// Услуга, по которой ведётся лицевой счёт и выставляются квитанции
    pub enum ServiceType {
        BuildingMaintenance = 0 => "Содержание дома",
        RemovalOfWaste = 1 => "Вывоз мусора",
        WaterSupply = 2 => "Водоснабжение",
        ElectricitySupply = 3 => "Электроснабжение",
    }
}
