use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be a non-empty rectangle of at most 255 rows and columns")]
    InvalidBoardShape,
    #[error("Invalid cell {0:?}, expected '#' (lit) or '.' (unlit)")]
    InvalidCell(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
