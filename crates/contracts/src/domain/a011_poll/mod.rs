pub mod aggregate;

pub use aggregate::Poll;
