use std::ops::{Index, IndexMut};

use crate::error::{ElementwiseOp, MatrixError, Result};

use super::{DMatrix, Operand};

/// A dense `rows × cols` grid of `f64` values.
///
/// Cells are stored contiguously in row-major order. The shape is fixed at
/// construction; every operation keeps `rows * cols` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    fill: f64,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        let len = rows.checked_mul(cols).unwrap_or_else(|| {
            panic!("a {rows}x{cols} matrix has more cells than fit in usize")
        });
        Self {
            rows,
            cols,
            fill,
            data: vec![fill; len],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The value the matrix was filled with at construction.
    #[must_use]
    pub fn fill(&self) -> f64 {
        self.fill
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Borrows the live grid in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the grid out as one `Vec` per row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Reads one cell.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `row` or `col` is outside the grid.
    pub fn value_at(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Writes one cell and returns the matrix for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `row` or `col` is outside the grid.
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) -> Result<&mut Self> {
        let idx = self.offset(row, col)?;
        self.data[idx] = value;
        Ok(self)
    }

    /// Adds a scalar to every cell, or another matrix cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `rhs` is a matrix of a different
    /// shape. The receiver is left untouched in that case.
    pub fn add<'a>(&mut self, rhs: impl Into<Operand<&'a Matrix>>) -> Result<&mut Self> {
        self.apply(ElementwiseOp::Add, rhs.into(), |a, b| a + b)
    }

    /// Subtracts a scalar from every cell, or another matrix cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `rhs` is a matrix of a different shape.
    pub fn subtract<'a>(&mut self, rhs: impl Into<Operand<&'a Matrix>>) -> Result<&mut Self> {
        self.apply(ElementwiseOp::Subtract, rhs.into(), |a, b| a - b)
    }

    /// Multiplies every cell by a scalar, or by the matching cell of another
    /// matrix (Hadamard product, not the linear-algebra product).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `rhs` is a matrix of a different shape.
    pub fn multiply<'a>(&mut self, rhs: impl Into<Operand<&'a Matrix>>) -> Result<&mut Self> {
        self.apply(ElementwiseOp::Multiply, rhs.into(), |a, b| a * b)
    }

    fn apply(
        &mut self,
        op: ElementwiseOp,
        rhs: Operand<&Matrix>,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<&mut Self> {
        match rhs {
            Operand::Scalar(n) => {
                for cell in &mut self.data {
                    *cell = f(*cell, n);
                }
            }
            Operand::Value(other) => {
                if other.shape() != self.shape() {
                    tracing::debug!(
                        ?op,
                        lhs = ?self.shape(),
                        rhs = ?other.shape(),
                        "rejected element-wise matrix operation"
                    );
                    return Err(MatrixError::ShapeMismatch {
                        op,
                        lhs: self.shape(),
                        rhs: other.shape(),
                    }
                    .into());
                }
                for (cell, &b) in self.data.iter_mut().zip(&other.data) {
                    *cell = f(*cell, b);
                }
            }
        }
        Ok(self)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            tracing::debug!(
                row,
                col,
                rows = self.rows,
                cols = self.cols,
                "matrix index out of bounds"
            );
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }
            .into());
        }
        Ok(row * self.cols + col)
    }
}

impl From<f64> for Operand<&Matrix> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a Matrix> for Operand<&'a Matrix> {
    fn from(value: &'a Matrix) -> Self {
        Operand::Value(value)
    }
}

/// Panics if the cell is outside the grid. See [`Matrix::value_at`] for the
/// checked form.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl From<&Matrix> for DMatrix {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_row_slice(m.rows, m.cols, &m.data)
    }
}

/// The construction fill of the result is `0`.
impl From<&DMatrix> for Matrix {
    fn from(m: &DMatrix) -> Self {
        let (rows, cols) = m.shape();
        let data = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| m[(r, c)]))
            .collect();
        Self {
            rows,
            cols,
            fill: 0.0,
            data,
        }
    }
}
