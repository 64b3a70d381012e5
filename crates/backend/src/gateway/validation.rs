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
use serde_json::Value;

use super::ApiError;

fn check<T: Record>(body: &Value) -> Result<(), ApiError> {
    let record: T = serde_json::from_value(body.clone()).map_err(|e| {
        ApiError::BadRequest(format!("{}: {}", T::element_name(), e))
    })?;
    record.validate().map_err(ApiError::BadRequest)
}

/// Проверка тела POST/PUT по типизированной записи коллекции
///
/// Тело уходит в источник данных без изменений: поля, которых нет в записи,
/// сохраняются.
pub fn validate_body(resource: Resource, body: &Value) -> Result<(), ApiError> {
    if !body.is_object() {
        return Err(ApiError::BadRequest("record must be a JSON object".into()));
    }

    match resource {
        Resource::Buildings => check::<Building>(body),
        Resource::Apartments => check::<Apartment>(body),
        Resource::Persons => check::<Person>(body),
        Resource::Accounts => check::<Account>(body),
        Resource::Invoices => check::<Invoice>(body),
        Resource::Contracts => check::<Contract>(body),
        Resource::Employees => check::<Employee>(body),
        Resource::Tools => check::<Tool>(body),
        Resource::Payments => check::<Payment>(body),
        Resource::Arrangements => check::<Arrangement>(body),
        Resource::Polls => check::<Poll>(body),
        Resource::Votes => check::<Vote>(body),
        Resource::Publications => check::<Publication>(body),
        Resource::Services => check::<Service>(body),
        Resource::Snapshots => check::<Snapshot>(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_contract() {
        let body = json!({
            "buildingId": "b1",
            "contractNumber": "17/24",
            "title": "Вывоз мусора",
            "type": 3,
            "dateOfSigning": "2024-03-05T00:00:00Z",
            "extra": "kept"
        });
        assert!(validate_body(Resource::Contracts, &body).is_ok());
    }

    #[test]
    fn test_rejects_bad_bodies() {
        assert!(matches!(
            validate_body(Resource::Polls, &json!([])),
            Err(ApiError::BadRequest(_))
        ));
        // Missing required field
        assert!(matches!(
            validate_body(Resource::Polls, &json!({ "title": "Ремонт" })),
            Err(ApiError::BadRequest(_))
        ));
        // Unknown enum code
        let vote = json!({ "pollId": "p1", "apartmentNumber": "3", "type": 9 });
        assert!(validate_body(Resource::Votes, &vote).is_err());
        // Business rule from the record
        let building = json!({ "legalAddress": "  " });
        match validate_body(Resource::Buildings, &building) {
            Err(ApiError::BadRequest(message)) => assert_eq!(message, "Адрес не может быть пустым"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
