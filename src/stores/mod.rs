//! Stores
//!
//! Item and category stores backing
//! [`MenuAggregator`](crate::domain::menu::MenuAggregator).

use serde::{Deserialize, Serialize};

use crate::domain::{categories::records::CategoryRecord, menu::records::MenuItemRecord};

mod errors;
pub mod file;
pub mod memory;

pub use errors::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Menu Document
///
/// Every category and item, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDocument {
    /// Categories
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,

    /// Menu items
    #[serde(default)]
    pub items: Vec<MenuItemRecord>,
}
