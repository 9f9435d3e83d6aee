//! Reader, padding, convolution and formatter wired together for a single run.

use std::process::ExitCode;

use tracing::{debug, trace, warn};

use crate::config::RunConfig;
use crate::error::ConvolutionError;
use crate::geoalg::f32_math::matrix::Matrix;
use crate::input_matrix_reader::{ConvolutionInput, InputMatrixReader};
use crate::output_matrix_writer::OutputMatrixWriter;

/// Pads the image, checks the kernel can be placed, then cross correlates.
pub fn convolve(input: &ConvolutionInput) -> Result<Matrix, ConvolutionError> {
    let parameters = &input.parameters;

    let padded = input.image.pad(parameters.padding());
    debug!(padded_size = parameters.padded_size(), "padded image");
    trace!("padded image {padded}");

    let output_size = parameters.output_size()?;
    debug!(output_size, "convolving");

    let result = padded.strided_cross_correlation(&input.kernel, parameters.stride());
    debug_assert_eq!(result.shape(), (output_size, output_size));
    trace!("result {result}");

    Ok(result)
}

/// Reads the input file, convolves it and writes the formatted result.
/// Nothing is written on failure, see [`execute`] for the diagnostic path.
pub fn run(config: &RunConfig) -> Result<Matrix, ConvolutionError> {
    let input = InputMatrixReader::open(&config.input_path)?.read()?;
    let result = convolve(&input)?;

    OutputMatrixWriter::create(&config.output_path)?.write_matrix(&result)?;

    Ok(result)
}

/// Runs once and turns the outcome into a process exit code.
/// Failures replace the output file contents with the diagnostic message.
pub fn execute(config: &RunConfig) -> ExitCode {
    match run(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            warn!(%error, "convolution failed");

            let written = OutputMatrixWriter::create(&config.output_path)
                .and_then(|mut writer| writer.write_error(&error));
            if let Err(write_error) = written {
                warn!(error = %write_error, "could not record diagnostic");
            }

            ExitCode::FAILURE
        }
    }
}
