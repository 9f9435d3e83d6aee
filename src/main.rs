use std::io;
use std::process::ExitCode;

use convolution::config::RunConfig;
use convolution::pipeline;
use tracing::Level;

// Reads input_matrix.txt and writes output_matrix.txt in the working directory.
fn main() -> ExitCode {
    // stderr only, the output file is reserved for results and diagnostics.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    pipeline::execute(&RunConfig::default())
}
