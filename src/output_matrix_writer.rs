use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ConvolutionError;
use crate::geoalg::f32_math::matrix::Matrix;

/// Formats a value with exactly four digits after the decimal point.
/// Extra digits are dropped, never rounded, and the arithmetic stays in f32 so results match
/// digit for digit with other single precision implementations.
///
/// Negative zero prints without a sign. The integer part keeps every digit however large it is;
/// from 2^24 up an f32 has no fraction left, so the decimals are all zero there.
pub fn format_truncated(value: f32) -> String {
    let (sign, magnitude) = if value < 0. { ("-", -value) } else { ("", value) };

    let integer_part = magnitude.trunc();
    let fraction = (magnitude - integer_part) * 10000.;
    let decimal_part = fraction as u16;

    format!("{sign}{integer_part:.0}.{decimal_part:04}")
}

/// Row-major, single space between values, nothing after the last one.
pub fn format_matrix(matrix: &Matrix) -> String {
    matrix.read_values()
        .iter()
        .map(|&value| format_truncated(value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The output file carries either the result matrix or a single diagnostic, never both.
pub struct OutputMatrixWriter {
    file: File
}

impl OutputMatrixWriter {
    /// Creates the file, discarding whatever a previous run left behind.
    pub fn create(file_path: impl AsRef<Path>) -> Result<OutputMatrixWriter, ConvolutionError> {
        let file = File::create(file_path).map_err(ConvolutionError::OutputUnavailable)?;

        Ok(OutputMatrixWriter { file })
    }

    pub fn write_matrix(&mut self, matrix: &Matrix) -> Result<(), ConvolutionError> {
        self.write_text(&format_matrix(matrix))
    }

    pub fn write_error(&mut self, error: &ConvolutionError) -> Result<(), ConvolutionError> {
        self.write_text(&error.to_string())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ConvolutionError> {
        self.file.write_all(text.as_bytes()).map_err(ConvolutionError::OutputUnavailable)?;
        self.file.flush().map_err(ConvolutionError::OutputUnavailable)
    }
}
