use serde::{Deserialize, Serialize};

/// Коллекции удалённого API (`/api/{resource}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Buildings,
    Apartments,
    Persons,
    Accounts,
    Invoices,
    Contracts,
    Employees,
    Tools,
    Payments,
    Arrangements,
    Polls,
    Votes,
    Publications,
    Services,
    Snapshots,
}

impl Resource {
    pub const ALL: [Resource; 15] = [
        Resource::Buildings,
        Resource::Apartments,
        Resource::Persons,
        Resource::Accounts,
        Resource::Invoices,
        Resource::Contracts,
        Resource::Employees,
        Resource::Tools,
        Resource::Payments,
        Resource::Arrangements,
        Resource::Polls,
        Resource::Votes,
        Resource::Publications,
        Resource::Services,
        Resource::Snapshots,
    ];

    /// Сегмент пути в API
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Buildings => "buildings",
            Resource::Apartments => "apartments",
            Resource::Persons => "persons",
            Resource::Accounts => "accounts",
            Resource::Invoices => "invoices",
            Resource::Contracts => "contracts",
            Resource::Employees => "employees",
            Resource::Tools => "tools",
            Resource::Payments => "payments",
            Resource::Arrangements => "arrangements",
            Resource::Polls => "polls",
            Resource::Votes => "votes",
            Resource::Publications => "publications",
            Resource::Services => "services",
            Resource::Snapshots => "snapshots",
        }
    }

    /// Разбор сегмента пути; неизвестные коллекции отклоняются
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == value)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        for resource in Resource::ALL {
            assert_eq!(Resource::parse(resource.path()), Some(resource));
        }
        assert_eq!(Resource::parse("snapshots"), Some(Resource::Snapshots));
        assert_eq!(Resource::parse("communities"), None);
        assert_eq!(Resource::parse("Buildings"), None);
    }

    #[test]
    fn test_serde_matches_path() {
        let json = serde_json::to_string(&Resource::Publications).unwrap();
        assert_eq!(json, "\"publications\"");
    }
}
