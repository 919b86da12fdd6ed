//! Menuboard
//!
//! Restaurant menu aggregation: joins menu items with their categories,
//! derives promotion state, and picks the featured dish of the day.

pub mod domain;
pub mod featured;
pub mod stores;
pub mod uuids;

pub use domain::{categories, menu};
