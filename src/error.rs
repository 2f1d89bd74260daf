//! Widget Errors

use thiserror::Error;

use crate::models::ItemId;

pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("item not found: {0}")]
    NotFound(ItemId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid widget config: {0}")]
    Config(#[from] serde_json::Error),
}
