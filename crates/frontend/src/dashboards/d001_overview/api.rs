use crate::shared::api_client;
use chrono::NaiveDate;
use contracts::dashboards::d001_overview::{
    upcoming_birthdays, AgeGroups, Birthday, Debtor, GenderSplit, OverviewCounts,
};
use contracts::domain::a001_building::Building;
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a003_person::Person;
use contracts::domain::a004_account::Account;
use contracts::domain::a006_contract::Contract;
use contracts::domain::a007_employee::Employee;
use contracts::domain::a009_payment::Payment;

/// Дни вперёд, за которые показываются дни рождения
pub const BIRTHDAY_HORIZON_DAYS: u32 = 30;

/// Коллекции, из которых собирается главная панель
#[derive(Debug, Clone, Default)]
pub struct OverviewData {
    pub buildings: Vec<Building>,
    pub apartments: Vec<Apartment>,
    pub persons: Vec<Person>,
    pub accounts: Vec<Account>,
    pub contracts: Vec<Contract>,
    pub employees: Vec<Employee>,
    pub payments: Vec<Payment>,
}

impl OverviewData {
    pub fn counts(&self) -> OverviewCounts {
        OverviewCounts {
            persons: self.persons.len(),
            apartments: self.apartments.len(),
            buildings: self.buildings.len(),
            payments: self.payments.len(),
            employees: self.employees.len(),
            contracts: self.contracts.len(),
        }
    }

    pub fn age_groups(&self, today: NaiveDate) -> AgeGroups {
        AgeGroups::from_persons(&self.persons, today)
    }

    pub fn gender_split(&self) -> GenderSplit {
        GenderSplit::from_persons(&self.persons)
    }

    pub fn debtors(&self) -> Vec<Debtor> {
        Debtor::collect(&self.accounts, &self.apartments, &self.buildings)
    }

    pub fn birthdays(&self, today: NaiveDate) -> Vec<Birthday> {
        upcoming_birthdays(&self.persons, today, BIRTHDAY_HORIZON_DAYS)
    }
}

/// Загрузить все коллекции панели; первая ошибка прерывает загрузку
pub async fn load_overview() -> Result<OverviewData, String> {
    Ok(OverviewData {
        buildings: api_client::list::<Building>().await?,
        apartments: api_client::list::<Apartment>().await?,
        persons: api_client::list::<Person>().await?,
        accounts: api_client::list::<Account>().await?,
        contracts: api_client::list::<Contract>().await?,
        employees: api_client::list::<Employee>().await?,
        payments: api_client::list::<Payment>().await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ServiceType;

    #[test]
    fn test_counts_and_debtors_from_collections() {
        let data = OverviewData {
            buildings: vec![Building {
                id: "b1".into(),
                legal_address: "вул. Хрещатик, 1".into(),
                ..Default::default()
            }],
            apartments: vec![Apartment {
                id: "ap1".into(),
                building_id: "b1".into(),
                apartment_number: "12".into(),
                ..Default::default()
            }],
            accounts: vec![Account {
                id: "acc1".into(),
                apartment_id: "ap1".into(),
                account_number: "1001".into(),
                service_type: ServiceType::BuildingMaintenance,
                balance: -320.0,
            }],
            ..Default::default()
        };

        let counts = data.counts();
        assert_eq!(counts.buildings, 1);
        assert_eq!(counts.apartments, 1);
        assert_eq!(counts.persons, 0);

        let debtors = data.debtors();
        assert_eq!(debtors.len(), 1);
        assert_eq!(debtors[0].address, "вул. Хрещатик, 1, №12");
        assert_eq!(debtors[0].balance, -320.0);
    }
}
