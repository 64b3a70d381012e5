pub mod aggregate;

pub use aggregate::Contract;
