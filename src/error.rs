use thiserror::Error;

#[derive(Error, Debug)]
pub enum RectError {
    #[error("expected 2 components for a pair, got {0}")]
    InvalidPair(usize),

    #[error("expected 4 components (x, y, w, h), got {0}")]
    InvalidQuad(usize),
}
