//! Характеристики здания

code_enum! {
    /// Тип отопления
    pub enum Heating {
        Unknown = 0 => "Не указано",
        Centralized = 1 => "Централизованное",
        Individual = 2 => "Индивидуальное",
        Autonomous = 3 => "Автономное",
    }
}

code_enum! {
    /// Утепление фасада
    pub enum Warming {
        Unknown = 0 => "Не указано",
        Polystyrene = 1 => "Пенополистирол",
        MineralWool = 2 => "Минеральная вата",
        BasaltWool = 3 => "Базальтовая вата",
    }
}

code_enum! {
    /// Конструкция
    pub enum Construction {
        Unknown = 0 => "Не указано",
        MonolithicFrame = 1 => "Монолитный каркас",
        Brick = 2 => "Кирпич",
    }
}

code_enum! {
    /// Материал стен
    pub enum Wall {
        Unknown = 0 => "Не указано",
        Brick = 1 => "Кирпич",
        Keramoblok = 2 => "Керамоблок",
        Aeroblock = 3 => "Газоблок",
        Ferroconcrete = 4 => "Железобетон",
        Another = 5 => "Другое",
    }
}

code_enum! {
    /// Придомовая территория
    pub enum Territory {
        Unknown = 0 => "Не указано",
        Open = 1 => "Открытая",
        ClosedFromCarsAndStrangers = 2 => "Закрыта от машин и посторонних",
        ClosedFromCars = 3 => "Закрыта от машин",
    }
}

code_enum! {
    /// Парковка
    pub enum Parking {
        Unknown = 0 => "Не указано",
        Ground = 1 => "Наземная",
        Underground = 2 => "Подземная",
        UndergroundWithElevator = 3 => "Подземная с лифтом",
        GarageBoxes = 4 => "Гаражные боксы",
        GroundMultiLevel = 5 => "Наземная многоуровневая",
    }
}

code_enum! {
    /// Лифт
    pub enum Elevator {
        Unknown = 0 => "Не указано",
        Available = 1 => "Есть",
        NotAvailable = 2 => "Нет",
        TemporarilyNotWorking = 3 => "Временно не работает",
    }
}
