//! Общие типы и алгоритмы для backend и frontend.
//!
//! Крейт не зависит от платформы: собирается и для нативной цели,
//! и для `wasm32`.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
