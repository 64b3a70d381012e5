//! Сводка главной страницы.
//!
//! Все расчёты выполняются на клиенте по спискам коллекций: счётчики
//! записей, возрастные группы жильцов, соотношение мужчин и женщин,
//! должники по содержанию дома и ближайшие дни рождения.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::a001_building::Building;
use crate::domain::a002_apartment::Apartment;
use crate::domain::a003_person::Person;
use crate::domain::a004_account::Account;
use crate::domain::a006_contract::Contract;
use crate::domain::a007_employee::Employee;
use crate::domain::a009_payment::Payment;
use crate::domain::common::Record;
use crate::enums::{Gender, ServiceType};
use crate::shared::format::parse_iso_date;

/// Плитка со счётчиком
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widget {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: usize,
}

/// Количество записей в коллекциях, которые показывает главная страница
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewCounts {
    pub persons: usize,
    pub apartments: usize,
    pub buildings: usize,
    pub payments: usize,
    pub employees: usize,
    pub contracts: usize,
}

impl OverviewCounts {
    /// Плитки в порядке вывода: жилфонд, затем финансы и обслуживание
    pub fn widgets(&self) -> [Widget; 6] {
        [
            Widget { title: Person::list_name(), icon: "users", value: self.persons },
            Widget { title: Apartment::list_name(), icon: "home", value: self.apartments },
            Widget { title: Building::list_name(), icon: "building", value: self.buildings },
            Widget { title: Payment::list_name(), icon: "credit-card", value: self.payments },
            Widget { title: Employee::list_name(), icon: "user", value: self.employees },
            Widget { title: Contract::list_name(), icon: "file-text", value: self.contracts },
        ]
    }
}

/// Жильцы по возрасту. Записи без даты рождения не попадают ни в одну группу.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroups {
    /// Старше 55
    pub elderly: usize,
    /// 26-55
    pub adults: usize,
    /// 17-25
    pub youth: usize,
    /// До 17
    pub children: usize,
}

impl AgeGroups {
    pub fn from_persons(persons: &[Person], today: NaiveDate) -> Self {
        let mut groups = Self::default();
        for age in persons.iter().filter_map(|person| person.age(today)) {
            match age {
                56..=u32::MAX => groups.elderly += 1,
                26..=55 => groups.adults += 1,
                17..=25 => groups.youth += 1,
                _ => groups.children += 1,
            }
        }
        groups
    }

    /// Строки списка: подпись, диапазон, количество
    pub fn rows(&self) -> [(&'static str, &'static str, usize); 4] {
        [
            ("Пенсионеры", "старше 55 лет", self.elderly),
            ("Взрослые", "от 26 до 55 лет", self.adults),
            ("Молодёжь", "от 17 до 25 лет", self.youth),
            ("Дети", "до 17 лет", self.children),
        ]
    }
}

/// Соотношение мужчин и женщин среди жильцов
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderSplit {
    pub men: usize,
    pub women: usize,
}

impl GenderSplit {
    pub fn from_persons(persons: &[Person]) -> Self {
        persons.iter().fold(Self::default(), |mut split, person| {
            match person.gender {
                Gender::Male => split.men += 1,
                Gender::Female => split.women += 1,
                Gender::Unknown => {}
            }
            split
        })
    }

    /// Доля мужчин в процентах; `None`, если пол не указан ни у кого
    pub fn men_percent(&self) -> Option<f64> {
        let total = self.men + self.women;
        (total > 0).then(|| self.men as f64 * 100.0 / total as f64)
    }

    pub fn women_percent(&self) -> Option<f64> {
        self.men_percent().map(|men| 100.0 - men)
    }
}

/// Строка таблицы должников
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debtor {
    pub account_id: String,
    /// "адрес дома, №квартиры"
    pub address: String,
    pub balance: f64,
}

impl Debtor {
    /// Лицевые счета по содержанию дома с отрицательным балансом, самый
    /// крупный долг первым
    pub fn collect(accounts: &[Account], apartments: &[Apartment], buildings: &[Building]) -> Vec<Self> {
        let mut debtors: Vec<Self> = accounts
            .iter()
            .filter(|account| {
                account.service_type == ServiceType::BuildingMaintenance && account.is_in_debt()
            })
            .map(|account| {
                let apartment = apartments.iter().find(|a| a.id == account.apartment_id);
                let building = apartment
                    .and_then(|apartment| buildings.iter().find(|b| b.id == apartment.building_id));
                let address = match (building, apartment) {
                    (Some(building), Some(apartment)) => {
                        format!("{}, №{}", building.legal_address, apartment.apartment_number)
                    }
                    (None, Some(apartment)) => format!("№{}", apartment.apartment_number),
                    _ => account.account_number.clone(),
                };
                Self {
                    account_id: account.id.clone(),
                    address,
                    balance: account.balance,
                }
            })
            .collect();
        debtors.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        debtors
    }
}

/// Ближайший день рождения жильца
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    pub person_id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub next: NaiveDate,
    /// Сколько исполнится
    pub turns: u32,
}

/// Годовщина `birth` в году `year`. 29 февраля в невисокосный год
/// переносится на 1 марта.
fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Дни рождения в ближайшие `within_days` дней, начиная с `today`,
/// по возрастанию даты
pub fn upcoming_birthdays(persons: &[Person], today: NaiveDate, within_days: u32) -> Vec<Birthday> {
    let mut birthdays: Vec<Birthday> = persons
        .iter()
        .filter_map(|person| {
            let birth = person.date_of_birth.as_deref().and_then(parse_iso_date)?;
            let this_year = anniversary(birth, today.year())?;
            let next = if this_year < today {
                anniversary(birth, today.year().checked_add(1)?)?
            } else {
                this_year
            };
            if (next - today).num_days() > i64::from(within_days) || next <= birth {
                return None;
            }
            Some(Birthday {
                person_id: person.id.clone(),
                name: person.title(),
                date_of_birth: birth,
                next,
                turns: u32::try_from(next.year() - birth.year()).ok()?,
            })
        })
        .collect();
    birthdays.sort_by(|a, b| a.next.cmp(&b.next));
    birthdays
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn person(id: &str, born: Option<&str>, gender: Gender) -> Person {
        Person {
            id: id.into(),
            first_name: "Тарас".into(),
            second_name: format!("Коваль-{}", id),
            gender,
            date_of_birth: born.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_widgets_follow_counts() {
        let counts = OverviewCounts {
            persons: 5,
            apartments: 4,
            buildings: 2,
            payments: 1,
            employees: 3,
            contracts: 6,
        };
        let widgets = counts.widgets();
        assert_eq!(widgets.map(|w| w.value), [5, 4, 2, 1, 3, 6]);
        assert_eq!(widgets[2].title, Building::list_name());
    }

    #[test]
    fn test_age_group_boundaries() {
        let today = date(2024, 6, 15);
        let persons = vec![
            person("1", Some("1968-06-15"), Gender::Male),
            person("2", Some("1968-06-16"), Gender::Male),
            person("3", Some("1998-06-15"), Gender::Female),
            person("4", Some("1998-06-16"), Gender::Female),
            person("5", Some("2007-06-15"), Gender::Female),
            person("6", Some("2007-06-16"), Gender::Unknown),
            person("7", None, Gender::Male),
        ];
        let groups = AgeGroups::from_persons(&persons, today);
        assert_eq!(
            groups,
            AgeGroups {
                elderly: 1,
                adults: 2,
                youth: 2,
                children: 1,
            }
        );
        assert_eq!(groups.rows()[0].2, 1);
    }

    #[test]
    fn test_gender_split() {
        let persons = vec![
            person("1", None, Gender::Male),
            person("2", None, Gender::Female),
            person("3", None, Gender::Female),
            person("4", None, Gender::Female),
            person("5", None, Gender::Unknown),
        ];
        let split = GenderSplit::from_persons(&persons);
        assert_eq!((split.men, split.women), (1, 3));
        assert_eq!(split.men_percent(), Some(25.0));
        assert_eq!(split.women_percent(), Some(75.0));
        assert_eq!(GenderSplit::default().men_percent(), None);
    }

    #[test]
    fn test_debtors_only_maintenance_in_debt() {
        let buildings = vec![Building {
            id: "b1".into(),
            legal_address: "вул. Шевченка, 12".into(),
            ..Default::default()
        }];
        let apartments = vec![Apartment {
            id: "ap1".into(),
            building_id: "b1".into(),
            apartment_number: "7".into(),
            ..Default::default()
        }];
        let account = |id: &str, service_type: ServiceType, balance: f64| Account {
            id: id.into(),
            apartment_id: "ap1".into(),
            account_number: format!("00{}", id),
            service_type,
            balance,
        };
        let accounts = vec![
            account("1", ServiceType::BuildingMaintenance, -50.0),
            account("2", ServiceType::WaterSupply, -900.0),
            account("3", ServiceType::BuildingMaintenance, 10.0),
            account("4", ServiceType::BuildingMaintenance, -120.5),
        ];
        let debtors = Debtor::collect(&accounts, &apartments, &buildings);
        assert_eq!(
            debtors.iter().map(|d| d.account_id.as_str()).collect::<Vec<_>>(),
            vec!["4", "1"]
        );
        assert_eq!(debtors[0].address, "вул. Шевченка, 12, №7");

        let orphan = Debtor::collect(&accounts[..1], &[], &buildings);
        assert_eq!(orphan[0].address, "001");
    }

    #[test]
    fn test_upcoming_birthdays_wrap_year() {
        let today = date(2024, 12, 20);
        let persons = vec![
            person("1", Some("1990-01-05"), Gender::Male),
            person("2", Some("1985-12-20"), Gender::Female),
            person("3", Some("1970-03-01"), Gender::Male),
            person("4", None, Gender::Male),
        ];
        let birthdays = upcoming_birthdays(&persons, today, 30);
        assert_eq!(
            birthdays.iter().map(|b| b.person_id.as_str()).collect::<Vec<_>>(),
            vec!["2", "1"]
        );
        assert_eq!(birthdays[0].turns, 39);
        assert_eq!(birthdays[1].next, date(2025, 1, 5));
        assert_eq!(birthdays[1].turns, 35);
    }

    #[test]
    fn test_leap_day_birthday_moves_to_march() {
        let persons = vec![person("1", Some("2000-02-29"), Gender::Female)];
        let birthdays = upcoming_birthdays(&persons, date(2023, 2, 20), 14);
        assert_eq!(birthdays[0].next, date(2023, 3, 1));
        assert_eq!(birthdays[0].turns, 23);
    }
}
