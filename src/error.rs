//! Failures a convolution run can end with.
//!
//! The `Display` text of every variant is the diagnostic that ends up in the output file,
//! so it is kept short and free of any io detail.

use std::fmt;
use std::io;

use thiserror::Error;

/// Which of the two input matrices failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixRole {
    Image,
    Kernel
}

impl fmt::Display for MatrixRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixRole::Image => write!(f, "image"),
            MatrixRole::Kernel => write!(f, "kernel")
        }
    }
}

/// Why a validated set of parameters still cannot be convolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infeasibility {
    /// The padded image is smaller than the kernel.
    ImageTooSmall,
    /// The stride leaves no room for a single output cell.
    StrideTooLarge
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infeasibility::ImageTooSmall => write!(f, "image too small"),
            Infeasibility::StrideTooLarge => write!(f, "stride too large")
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvolutionError {
    #[error("Error opening input file")]
    InputUnavailable(#[source] io::Error),

    #[error("Error reading parameters from input file")]
    MalformedHeader,

    #[error("Invalid parameters")]
    OutOfRange,

    #[error("Error reading {matrix} matrix")]
    MalformedMatrix { matrix: MatrixRole },

    #[error("Convolution not possible: {reason}")]
    Infeasible { reason: Infeasibility },

    #[error("Error opening output file")]
    OutputUnavailable(#[source] io::Error)
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_diagnostic_messages() {
        let not_found = || io::Error::new(io::ErrorKind::NotFound, "missing");

        assert_eq!(ConvolutionError::InputUnavailable(not_found()).to_string(), "Error opening input file");
        assert_eq!(ConvolutionError::MalformedHeader.to_string(), "Error reading parameters from input file");
        assert_eq!(ConvolutionError::OutOfRange.to_string(), "Invalid parameters");
        assert_eq!(
            ConvolutionError::MalformedMatrix { matrix: MatrixRole::Image }.to_string(),
            "Error reading image matrix");
        assert_eq!(
            ConvolutionError::MalformedMatrix { matrix: MatrixRole::Kernel }.to_string(),
            "Error reading kernel matrix");
        assert_eq!(
            ConvolutionError::Infeasible { reason: Infeasibility::ImageTooSmall }.to_string(),
            "Convolution not possible: image too small");
        assert_eq!(
            ConvolutionError::Infeasible { reason: Infeasibility::StrideTooLarge }.to_string(),
            "Convolution not possible: stride too large");
        assert_eq!(ConvolutionError::OutputUnavailable(not_found()).to_string(), "Error opening output file");
    }

    #[test]
    fn test_io_error_is_kept_as_source() {
        let error = ConvolutionError::InputUnavailable(io::Error::new(io::ErrorKind::NotFound, "missing"));

        let source = error.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("missing"));
    }
}
