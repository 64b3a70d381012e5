pub mod aggregate;

pub use aggregate::Apartment;
