use std::fmt;
use std::ops::{Index, IndexMut};

/// Matrix is implemented as a single dimensional vector of f32s.
/// This implementation of Matrix is row-major.
/// Every stage of the pipeline owns its matrix outright, so there is no shared storage.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f32>
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && column < self.columns, "Tried to index outside of the matrix.");
        &self.values[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows && column < self.columns, "Tried to index outside of the matrix.");
        &mut self.values[row * self.columns + column]
    }
}

impl Matrix {
    /// Returns (rows, columns).
    pub fn shape(&self) -> (usize, usize) { (self.rows, self.columns) }

    /// Returns a slice of the values this matrix has.
    pub fn read_values(&self) -> &[f32] { &self.values }

    /// Returns a new Matrix.
    /// Values are expected in row-major order.
    pub fn new(rows: usize, columns: usize, values: Vec<f32>) -> Self {
        assert_eq!(rows * columns, values.len(), "Matrix values must fill every row and column.");

        Self {
            rows, columns, values
        }
    }

    /// Returns a contiguous slice of data representing columns in the matrix.
    pub fn row(&self, row_index: usize) -> &[f32] {
        assert!(row_index < self.rows, "Tried to get a row that was out of bounds.");

        let start = row_index * self.columns;
        let end = start + self.columns;
        &self.values[start..end]
    }

    /// Surrounds the matrix with a border of zeroes `padding` wide on every side.
    /// A padding of 0 hands back an identical copy.
    pub fn pad(&self, padding: usize) -> Self {
        let padded_rows = self.rows + padding * 2;
        let padded_columns = self.columns + padding * 2;

        let mut values = vec![0.; padded_rows * padded_columns];
        for row in 0..self.rows {
            let start = (padding + row) * padded_columns + padding;
            values[start..start + self.columns].copy_from_slice(self.row(row));
        }

        Self::new(padded_rows, padded_columns, values)
    }

    /// Slides the kernel over self, `stride` cells at a time, without flipping it.
    /// Each output cell is the sum of element-wise products of the kernel and the window under it,
    /// accumulated kernel row by kernel row, left to right.
    ///
    /// Callers are expected to have verified that the kernel fits inside self.
    pub fn strided_cross_correlation(&self, kernel: &Matrix, stride: usize) -> Self {
        assert!(stride > 0, "Stride must be at least 1.");
        assert!(
            kernel.rows <= self.rows && kernel.columns <= self.columns,
            "Kernel must fit inside the image for a valid cross correlation.");

        let feature_rows = (self.rows - kernel.rows) / stride + 1;
        let feature_columns = (self.columns - kernel.columns) / stride + 1;

        let mut values = Vec::with_capacity(feature_rows * feature_columns);

        // Slides the kernel from top to bottom
        for feature_row in 0..feature_rows {
            // Slides the kernel from left to right
            for feature_column in 0..feature_columns {
                let mut c_accum = 0.0f32;

                for kernel_row in 0..kernel.rows {
                    let input_row_start_index = (feature_row * stride + kernel_row) * self.columns + feature_column * stride;
                    let x = &self.values[input_row_start_index..input_row_start_index + kernel.columns];
                    let y = kernel.row(kernel_row);

                    // Kept as a plain loop so the summation order is fixed.
                    for (a, b) in x.iter().zip(y) {
                        c_accum += a * b;
                    }
                }

                values.push(c_accum);
            }
        }

        Self::new(feature_rows, feature_columns, values)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "({}x{}):", self.rows, self.columns)?;
        for row in 0..self.rows {
            let line = self.row(row)
                .iter()
                .map(|value| format!("{value:.6}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
