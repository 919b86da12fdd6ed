//! Menuboard Domain Concerns

pub mod categories;
pub mod menu;
