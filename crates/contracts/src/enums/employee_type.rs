code_enum! {
    /// Форма занятости сотрудника
    pub enum EmployeeType {
        Unknown = 0 => "Не указано",
        Individual = 1 => "Физическое лицо",
        Entrepreneur = 2 => "Предприниматель",
    }
}
