// Writes random inputs and the outputs this crate produces for them, for cross checking another implementation.
// cargo run --release --example generate_cases

use std::fs;
use std::path::Path;

use convolution::case_generator::generate_case;
use convolution::input_matrix_reader::InputMatrixReader;
use convolution::output_matrix_writer::format_matrix;
use convolution::pipeline::convolve;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CASE_COUNT: usize = 100;
const SEED: u64 = 2024;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_dir = Path::new("input_matrices");
    let expected_dir = Path::new("expected_matrices");
    fs::create_dir_all(input_dir)?;
    fs::create_dir_all(expected_dir)?;

    let mut rng = StdRng::seed_from_u64(SEED);
    for index in 1..=CASE_COUNT {
        let text = generate_case(&mut rng).to_input_text();

        // Convolve what the file says, not the unrounded values that were generated.
        let input = InputMatrixReader::from_text(text.as_str()).read()?;
        let expected = format_matrix(&convolve(&input)?);

        fs::write(input_dir.join(format!("input_matrix_{index}.txt")), &text)?;
        fs::write(expected_dir.join(format!("expected_matrix_{index}.txt")), expected)?;
    }

    println!("Wrote {CASE_COUNT} cases to {} and {}", input_dir.display(), expected_dir.display());
    Ok(())
}
