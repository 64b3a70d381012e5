//! Ключи и заголовки табов коллекций.
//!
//! Ключ таба совпадает с `Record::full_name()` (например, "a001_buildings"),
//! заголовок берётся из `Record::list_name()`. Главная панель открывается
//! отдельным ключом [`DASHBOARD_KEY`].

use contracts::domain::a001_building::Building;
use contracts::domain::a002_apartment::Apartment;
use contracts::domain::a003_person::Person;
use contracts::domain::a004_account::Account;
use contracts::domain::a005_invoice::Invoice;
use contracts::domain::a006_contract::Contract;
use contracts::domain::a007_employee::Employee;
use contracts::domain::a008_tool::Tool;
use contracts::domain::a009_payment::Payment;
use contracts::domain::a010_arrangement::Arrangement;
use contracts::domain::a011_poll::Poll;
use contracts::domain::a012_vote::Vote;
use contracts::domain::a013_publication::Publication;
use contracts::domain::a014_service::Service;
use contracts::domain::a015_snapshot::Snapshot;
use contracts::domain::common::{Record, Resource};

/// Подставляет тип записи коллекции как `$record` и вычисляет `$body`
macro_rules! with_record_type {
    ($resource:expr, $record:ident => $body:expr) => {
        match $resource {
            Resource::Buildings => {
                type $record = Building;
                $body
            }
            Resource::Apartments => {
                type $record = Apartment;
                $body
            }
            Resource::Persons => {
                type $record = Person;
                $body
            }
            Resource::Accounts => {
                type $record = Account;
                $body
            }
            Resource::Invoices => {
                type $record = Invoice;
                $body
            }
            Resource::Contracts => {
                type $record = Contract;
                $body
            }
            Resource::Employees => {
                type $record = Employee;
                $body
            }
            Resource::Tools => {
                type $record = Tool;
                $body
            }
            Resource::Payments => {
                type $record = Payment;
                $body
            }
            Resource::Arrangements => {
                type $record = Arrangement;
                $body
            }
            Resource::Polls => {
                type $record = Poll;
                $body
            }
            Resource::Votes => {
                type $record = Vote;
                $body
            }
            Resource::Publications => {
                type $record = Publication;
                $body
            }
            Resource::Services => {
                type $record = Service;
                $body
            }
            Resource::Snapshots => {
                type $record = Snapshot;
                $body
            }
        }
    };
}

pub const DASHBOARD_KEY: &str = "d001_overview";
pub const DASHBOARD_LABEL: &str = "Главная";

pub fn tab_key(resource: Resource) -> String {
    with_record_type!(resource, R => R::full_name())
}

pub fn resource_for_key(key: &str) -> Option<Resource> {
    Resource::ALL.into_iter().find(|resource| tab_key(*resource) == key)
}

/// Заголовок таба по ключу. Для неизвестных ключей - общий заголовок.
pub fn tab_label_for_key(key: &str) -> &'static str {
    if key == DASHBOARD_KEY {
        return DASHBOARD_LABEL;
    }
    match resource_for_key(key) {
        Some(resource) => with_record_type!(resource, R => R::list_name()),
        None => "Раздел",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_aggregate_index() {
        assert_eq!(tab_key(Resource::Buildings), "a001_buildings");
        assert_eq!(tab_key(Resource::Publications), "a013_publications");
        for resource in Resource::ALL {
            assert_eq!(resource_for_key(&tab_key(resource)), Some(resource));
        }
        assert_eq!(resource_for_key("buildings"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a005_invoices"), "Счета");
        assert_eq!(tab_label_for_key("a006_contracts"), "Договоры");
        assert_eq!(tab_label_for_key("unknown"), "Раздел");
    }

    #[test]
    fn test_dashboard_and_billing_setup_keys() {
        assert_eq!(tab_label_for_key(DASHBOARD_KEY), "Главная");
        assert_eq!(resource_for_key(DASHBOARD_KEY), None);
        assert_eq!(tab_key(Resource::Services), "a014_services");
        assert_eq!(tab_key(Resource::Snapshots), "a015_snapshots");
        assert_eq!(tab_label_for_key("a015_snapshots"), "Расчётные периоды");
    }
}
