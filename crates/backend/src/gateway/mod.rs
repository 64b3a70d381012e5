//! Доступ к данным ОСББ: удалённый REST API или хранилище в памяти
//! за общим трейтом [`DataService`].

pub mod error;
pub mod memory;
pub mod service;
pub mod upstream;
pub mod validation;

pub use error::ApiError;
pub use memory::MemoryService;
pub use service::DataService;
pub use upstream::UpstreamService;
