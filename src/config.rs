use std::path::{Path, PathBuf};

pub const INPUT_FILE_NAME: &str = "input_matrix.txt";
pub const OUTPUT_FILE_NAME: &str = "output_matrix.txt";

/// Where a run reads its input and writes its result.
/// The same output file carries diagnostics when the run fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf
}

impl Default for RunConfig {
    /// Both files relative to the working directory.
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_FILE_NAME),
            output_path: PathBuf::from(OUTPUT_FILE_NAME)
        }
    }
}

impl RunConfig {
    /// Default file names, placed inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            input_path: dir.join(INPUT_FILE_NAME),
            output_path: dir.join(OUTPUT_FILE_NAME)
        }
    }
}
