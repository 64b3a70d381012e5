//! Табы центральной зоны
//!
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View
//! - `tab_labels` - ключи и заголовки табов

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{
    resource_for_key, tab_key, tab_label_for_key, DASHBOARD_KEY, DASHBOARD_LABEL,
};
