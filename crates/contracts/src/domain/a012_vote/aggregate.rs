use serde::{Deserialize, Serialize};

use crate::domain::common::record::require;
use crate::domain::common::{Record, Resource};
use crate::enums::VoteType;

/// Голос квартиры в опросе
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub poll_id: String,
    pub apartment_number: String,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub voter: String,
    #[serde(default)]
    pub ownership_percentage: f64,
    #[serde(rename = "type", default)]
    pub vote_type: VoteType,
}

impl Vote {
    /// Площадь, которой голосует собственник
    pub fn weighted_area(&self) -> f64 {
        self.area * self.ownership_percentage / 100.0
    }
}

/// Итоги опроса по площади, м²
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VoteTally {
    pub agree: f64,
    pub disagree: f64,
    pub abstained: f64,
    pub unknown: f64,
}

impl VoteTally {
    pub fn from_votes(votes: &[Vote]) -> Self {
        votes.iter().fold(Self::default(), |mut tally, vote| {
            let area = vote.weighted_area();
            match vote.vote_type {
                VoteType::Agree => tally.agree += area,
                VoteType::Disagree => tally.disagree += area,
                VoteType::Abstained => tally.abstained += area,
                VoteType::Unknown => tally.unknown += area,
            }
            tally
        })
    }

    pub fn total(&self) -> f64 {
        self.agree + self.disagree + self.abstained + self.unknown
    }
}

impl Record for Vote {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        format!("№ {} {}", self.apartment_number, self.voter)
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.apartment_number, self.voter)
    }

    fn sort_key(&self) -> String {
        self.apartment_number.clone()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.poll_id, "Не выбран опрос")?;
        require(&self.apartment_number, "Номер квартиры не может быть пустым")
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn resource() -> Resource {
        Resource::Votes
    }

    fn element_name() -> &'static str {
        "Голос"
    }

    fn list_name() -> &'static str {
        "Голоса"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(area: f64, share: f64, vote_type: VoteType) -> Vote {
        Vote {
            poll_id: "poll1".into(),
            apartment_number: "1".into(),
            area,
            ownership_percentage: share,
            vote_type,
            ..Default::default()
        }
    }

    #[test]
    fn test_tally_weights_by_ownership() {
        let votes = vec![
            vote(60.0, 100.0, VoteType::Agree),
            vote(80.0, 50.0, VoteType::Agree),
            vote(80.0, 50.0, VoteType::Disagree),
            vote(40.0, 100.0, VoteType::Unknown),
        ];
        let tally = VoteTally::from_votes(&votes);
        assert_eq!(tally.agree, 100.0);
        assert_eq!(tally.disagree, 40.0);
        assert_eq!(tally.abstained, 0.0);
        assert_eq!(tally.unknown, 40.0);
        assert_eq!(tally.total(), 180.0);
    }

    #[test]
    fn test_vote_type_on_wire() {
        let json = r#"{"pollId":"poll1","apartmentNumber":"12","area":54,"voter":"Коваль","ownershipPercentage":100,"type":3}"#;
        let vote: Vote = serde_json::from_str(json).unwrap();
        assert_eq!(vote.vote_type, VoteType::Abstained);
        assert_eq!(vote.title(), "№ 12 Коваль");
    }
}
