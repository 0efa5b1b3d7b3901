//! Layout error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("unknown packing mode: {0}")]
    UnknownMode(String),

    #[error("unknown align mode: {0}")]
    UnknownAlign(String),

    #[error("expand mode requires a target length on the packing axis")]
    ExpandWithoutTotal,

    #[error("expand mode requires at least two items, got {0}")]
    ExpandNeedsTwoItems(usize),

    #[error("{0} does not implement extent_offsets")]
    MissingLayout(&'static str),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
