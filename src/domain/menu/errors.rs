//! Menu service errors.

use thiserror::Error;

use crate::stores::StoreError;

/// Errors raised by [`MenuService`](crate::domain::menu::MenuService).
#[derive(Debug, Error)]
pub enum MenuServiceError {
    /// The requested item does not exist.
    #[error("menu item not found")]
    NotFound,

    /// A store failed; passed through untouched.
    #[error(transparent)]
    Store(#[from] StoreError),
}
