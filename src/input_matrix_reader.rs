use std::fs;
use std::num::IntErrorKind;
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::debug;

use crate::error::{ConvolutionError, MatrixRole};
use crate::geoalg::f32_math::matrix::Matrix;
use crate::parameters::Parameters;

/// Everything an input file holds: the header and both square matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionInput {
    pub parameters: Parameters,
    pub image: Matrix,
    pub kernel: Matrix
}

/// Reads whitespace separated tokens, so line layout of the file does not matter.
pub struct InputMatrixReader {
    text: String
}

impl InputMatrixReader {
    /// Opens file and loads its contents.
    /// Bytes that are not UTF-8 only matter if they land inside a token that has to be parsed.
    pub fn open(file_path: impl AsRef<Path>) -> Result<InputMatrixReader, ConvolutionError> {
        let bytes = fs::read(file_path).map_err(ConvolutionError::InputUnavailable)?;

        Ok(Self::from_text(String::from_utf8_lossy(&bytes).into_owned()))
    }

    pub fn from_text(text: impl Into<String>) -> InputMatrixReader {
        InputMatrixReader {
            text: text.into()
        }
    }

    /// Parses header, image and kernel in that order.
    /// Anything after the kernel is ignored.
    pub fn read(&self) -> Result<ConvolutionInput, ConvolutionError> {
        let mut tokens = self.text.split_whitespace();

        let header = read_header(&mut tokens)?;
        let [n, m, p, s] = header;
        let parameters = Parameters::validated(n, m, p, s)?;
        debug!(image_size = n, kernel_size = m, padding = p, stride = s, "read parameters");

        let image = read_square_matrix(&mut tokens, parameters.image_size(), MatrixRole::Image)?;
        let kernel = read_square_matrix(&mut tokens, parameters.kernel_size(), MatrixRole::Kernel)?;

        Ok(ConvolutionInput { parameters, image, kernel })
    }
}

fn read_header(tokens: &mut SplitWhitespace<'_>) -> Result<[i64; 4], ConvolutionError> {
    let mut header = [0i64; 4];
    for value in header.iter_mut() {
        let token = tokens.next().ok_or(ConvolutionError::MalformedHeader)?;
        *value = parse_header_integer(token)?;
    }

    Ok(header)
}

/// Integers too large for an i64 still count as integers, they clamp and then fail the range check.
fn parse_header_integer(token: &str) -> Result<i64, ConvolutionError> {
    match token.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ConvolutionError::MalformedHeader)
        }
    }
}

fn read_square_matrix(tokens: &mut SplitWhitespace<'_>, size: usize, matrix: MatrixRole) -> Result<Matrix, ConvolutionError> {
    let values = tokens
        .take(size * size)
        .map(|token| token.parse::<f32>().ok())
        .collect::<Option<Vec<_>>>()
        .filter(|values| values.len() == size * size)
        .ok_or(ConvolutionError::MalformedMatrix { matrix })?;

    Ok(Matrix::new(size, size, values))
}
