use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("No cell exists at the given coordinates")]
    UnknownCell,
    #[error("Target cell already holds a tile")]
    CellOccupied,
}

pub type Result<T> = core::result::Result<T, BoardError>;
