//! Dense row-major matrix of `f64`.
//!
//! Column vectors are `n x 1` matrices. Positions handed to the rasterizer are
//! column vectors with at least two rows (x, y); colors are exactly `3 x 1`
//! (red, green, blue).
//!
//! Every element access is bounds-checked and reports a [`MatrixError`]
//! instead of returning a sentinel, so malformed input surfaces at the call
//! site rather than as silently zeroed values.

use std::fmt;

use super::vec2::Vec2;
use super::vec3::Vec3;
use crate::error::MatrixError;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from row-major values.
    ///
    /// `values.len()` must equal `rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: &[f64]) -> Result<Self, MatrixError> {
        if values.len() != rows * cols {
            return Err(MatrixError::ValueCount {
                expected: rows * cols,
                got: values.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: values.to_vec(),
        })
    }

    /// Creates an `n x 1` column vector.
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True if this is an `n x 1` column vector.
    pub fn is_column(&self, n: usize) -> bool {
        self.rows == n && self.cols == 1
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.index(row, col).map(|i| self.data[i])
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        let i = self.index(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Matrix product `self * rhs`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(self.mismatch("multiplication", rhs));
        }

        let mut result = Matrix::new(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                let mut element = 0.0;
                for k in 0..self.cols {
                    element += self.data[row * self.cols + k] * rhs.data[k * rhs.cols + col];
                }
                result.data[row * rhs.cols + col] = element;
            }
        }
        Ok(result)
    }

    /// Element-wise difference `self - rhs`.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(self.mismatch("subtraction", rhs));
        }

        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(l, r)| l - r)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Cross product of two `3 x 1` vectors.
    pub fn cross(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if !self.is_column(3) || !rhs.is_column(3) {
            return Err(self.mismatch("cross product", rhs));
        }

        let (l, r) = (&self.data, &rhs.data);
        Ok(Matrix::column(&[
            l[1] * r[2] - l[2] * r[1],
            l[2] * r[0] - l[0] * r[2],
            l[0] * r[1] - l[1] * r[0],
        ]))
    }

    /// Dot product of two column vectors of equal length.
    pub fn dot(&self, rhs: &Matrix) -> Result<f64, MatrixError> {
        if self.cols != 1 || rhs.cols != 1 || self.rows != rhs.rows {
            return Err(self.mismatch("dot product", rhs));
        }

        Ok(self.data.iter().zip(&rhs.data).map(|(l, r)| l * r).sum())
    }

    /// Scales every column to unit length in place.
    ///
    /// Zero-length columns are left untouched.
    pub fn normalize(&mut self) {
        for col in 0..self.cols {
            let length = (0..self.rows)
                .map(|row| self.data[row * self.cols + col].powi(2))
                .sum::<f64>()
                .sqrt();
            if length == 0.0 {
                continue;
            }
            for row in 0..self.rows {
                self.data[row * self.cols + col] /= length;
            }
        }
    }

    /// Reads the first two rows of a column vector as a screen point.
    pub fn to_vec2(&self) -> Result<Vec2, MatrixError> {
        if self.rows < 2 || self.cols != 1 {
            return Err(MatrixError::Shape {
                expected: "Nx1 (N >= 2)",
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Vec2::new(self.data[0], self.data[1]))
    }

    /// Reads a `3 x 1` column vector as a color triple.
    pub fn to_vec3(&self) -> Result<Vec3, MatrixError> {
        if !self.is_column(3) {
            return Err(MatrixError::Shape {
                expected: "3x1",
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Vec3::new(self.data[0], self.data[1], self.data[2]))
    }

    fn mismatch(&self, op: &'static str, rhs: &Matrix) -> MatrixError {
        MatrixError::Mismatch {
            op,
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: rhs.rows,
            right_cols: rhs.cols,
        }
    }
}

impl From<Vec2> for Matrix {
    fn from(v: Vec2) -> Self {
        Matrix::column(&[v.x, v.y])
    }
}

impl From<Vec3> for Matrix {
    fn from(v: Vec3) -> Self {
        Matrix::column(&[v.x, v.y, v.z])
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} matrix", self.rows, self.cols)?;
        for row in self.data.chunks(self.cols.max(1)) {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:7.3}")).collect();
            writeln!(f, "  [{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
