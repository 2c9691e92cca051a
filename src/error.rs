use thiserror::Error;

/// Top-level error type for the Prophecy math and geometry layer.
#[derive(Debug, Error, PartialEq)]
pub enum ProphecyError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Element-wise matrix operations that require matching shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementwiseOp {
    Add,
    Subtract,
    Multiply,
}

impl ElementwiseOp {
    /// Message reported when the operands of this operation differ in shape.
    #[must_use]
    pub fn mismatch_message(self) -> &'static str {
        match self {
            Self::Add => "Cannot add matrices together that don't share the same size.",
            Self::Subtract => {
                "Cannot subtract matrices from each other that don't share the same size."
            }
            Self::Multiply => {
                "Cannot multiply matrices with each other that don't share the same size."
            }
        }
    }
}

/// Errors related to matrix arithmetic and cell access.
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("{}", .op.mismatch_message())]
    ShapeMismatch {
        op: ElementwiseOp,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Convenience type alias for results using [`ProphecyError`].
pub type Result<T> = std::result::Result<T, ProphecyError>;
