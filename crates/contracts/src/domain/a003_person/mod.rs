pub mod aggregate;

pub use aggregate::Person;
