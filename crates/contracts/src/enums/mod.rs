//! Категориальные поля записей. На проводе каждое значение передаётся целочисленным кодом.

/// Объявляет enum с целочисленным кодом, подписью для UI и serde через `i32`.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $code:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Код значения в API
            pub fn code(&self) -> i32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Подпись для UI
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn all() -> Vec<$name> {
                vec![$($name::$variant,)+]
            }

            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Пары (код строкой, подпись) для `<option>`
            pub fn options() -> Vec<(String, &'static str)> {
                Self::all()
                    .into_iter()
                    .map(|value| (value.code().to_string(), value.label()))
                    .collect()
            }

            /// Значение из `<select>`, где код хранится строкой
            pub fn parse_code(value: &str) -> Option<Self> {
                value.trim().parse::<i32>().ok().and_then(Self::from_code)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::all()[0]
            }
        }

        impl TryFrom<i32> for $name {
            type Error = String;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                $name::from_code(code)
                    .ok_or_else(|| format!("Unknown {} code: {}", stringify!($name), code))
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub mod building;
pub mod contract_type;
pub mod currency;
pub mod employee_type;
pub mod gender;
pub mod payment_type;
pub mod service_type;
pub mod vote_type;

pub use building::{Construction, Elevator, Heating, Parking, Territory, Wall, Warming};
pub use contract_type::ContractType;
pub use currency::Currency;
pub use employee_type::EmployeeType;
pub use gender::Gender;
pub use payment_type::PaymentType;
pub use service_type::ServiceType;
pub use vote_type::VoteType;

/// Вид начисления в счёте совпадает с видом услуги лицевого счёта
pub type InvoiceType = ServiceType;

#[cfg(test)]
mod tests {
    use super::contract_type::ContractType;
    use super::currency::Currency;
    use super::vote_type::VoteType;

    #[test]
    fn test_serialize_as_code() {
        assert_eq!(serde_json::to_string(&ContractType::Lease).unwrap(), "8");
        assert_eq!(serde_json::to_string(&Currency::Uah).unwrap(), "2");
    }

    #[test]
    fn test_deserialize_rejects_unknown_code() {
        assert_eq!(serde_json::from_str::<VoteType>("1").unwrap(), VoteType::Agree);
        assert!(serde_json::from_str::<VoteType>("9").is_err());
    }

    #[test]
    fn test_codes_are_consistent() {
        for value in ContractType::all() {
            assert_eq!(ContractType::from_code(value.code()), Some(value));
        }
        assert_eq!(ContractType::default(), ContractType::Civil);
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }

    #[test]
    fn test_parse_code_from_select_value() {
        assert_eq!(ContractType::parse_code("8"), Some(ContractType::Lease));
        assert_eq!(VoteType::parse_code(" 1 "), Some(VoteType::Agree));
        assert_eq!(VoteType::parse_code("9"), None);
        assert_eq!(VoteType::parse_code("yes"), None);
        for (code, label) in ContractType::options() {
            let value = ContractType::parse_code(&code).unwrap();
            assert_eq!(value.label(), label);
        }
    }
}
