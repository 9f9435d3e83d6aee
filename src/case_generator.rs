//! Random but always feasible inputs, for checking other implementations against this one.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::geoalg::f32_math::matrix::Matrix;
use crate::parameters::{Parameters, IMAGE_SIZE_RANGE, KERNEL_SIZE_RANGE, PADDING_RANGE, STRIDE_RANGE};

/// A generated input file before it is rendered to text.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCase {
    pub parameters: Parameters,
    pub image: Matrix,
    pub kernel: Matrix
}

/// Draws every parameter uniformly from its range, redrawing until the kernel fits at least once.
pub fn generate_parameters<R: Rng>(rng: &mut R) -> Parameters {
    loop {
        let drawn = Parameters::validated(
            rng.gen_range(IMAGE_SIZE_RANGE),
            rng.gen_range(KERNEL_SIZE_RANGE),
            rng.gen_range(PADDING_RANGE),
            rng.gen_range(STRIDE_RANGE));

        if let Ok(parameters) = drawn {
            if parameters.output_size().is_ok() {
                return parameters;
            }
        }
    }
}

/// Feasible parameters with image and kernel values drawn from [0, 1).
pub fn generate_case<R: Rng>(rng: &mut R) -> GeneratedCase {
    let parameters = generate_parameters(rng);
    let unit = Uniform::new(0.0f32, 1.0);

    let image_size = parameters.image_size();
    let kernel_size = parameters.kernel_size();

    let image = (0..image_size * image_size).map(|_| unit.sample(rng)).collect();
    let kernel = (0..kernel_size * kernel_size).map(|_| unit.sample(rng)).collect();

    GeneratedCase {
        parameters,
        image: Matrix::new(image_size, image_size, image),
        kernel: Matrix::new(kernel_size, kernel_size, kernel)
    }
}

impl GeneratedCase {
    /// Header on the first line, image on the second and kernel on the third.
    /// Values carry six decimals and the text has no trailing newline.
    pub fn to_input_text(&self) -> String {
        let p = &self.parameters;
        let join = |matrix: &Matrix| {
            matrix.read_values()
                .iter()
                .map(|value| format!("{value:.6}"))
                .collect::<Vec<_>>()
                .join(" ")
        };

        format!(
            "{} {} {} {}\n{}\n{}",
            p.image_size(), p.kernel_size(), p.padding(), p.stride(),
            join(&self.image),
            join(&self.kernel))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::input_matrix_reader::InputMatrixReader;

    #[test]
    fn test_generated_parameters_are_feasible() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let parameters = generate_parameters(&mut rng);
            assert!(parameters.output_size().is_ok(), "{parameters:?} cannot be convolved");
        }
    }

    #[test]
    fn test_generated_values_are_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let case = generate_case(&mut rng);
            let values = case.image.read_values().iter().chain(case.kernel.read_values());

            for &value in values {
                assert!((0.0..1.0).contains(&value), "{value} outside of [0, 1)");
            }
        }
    }

    #[test]
    fn test_same_seed_same_case() {
        let first = generate_case(&mut StdRng::seed_from_u64(3));
        let second = generate_case(&mut StdRng::seed_from_u64(3));

        assert_eq!(first, second);
    }

    #[test]
    fn test_to_input_text() {
        let case = GeneratedCase {
            parameters: Parameters::validated(3, 2, 1, 2).unwrap(),
            image: Matrix::new(3, 3, vec![0.5, 0.25, 0., 1., 0.125, 0., 0., 0., 0.75]),
            kernel: Matrix::new(2, 2, vec![0.5, 0.5, 0.5, 0.5])
        };

        let expected = "3 2 1 2\n\
            0.500000 0.250000 0.000000 1.000000 0.125000 0.000000 0.000000 0.000000 0.750000\n\
            0.500000 0.500000 0.500000 0.500000";

        assert_eq!(case.to_input_text(), expected);
    }

    #[test]
    fn test_rendered_text_reads_back() {
        let case = generate_case(&mut StdRng::seed_from_u64(21));

        let actual = InputMatrixReader::from_text(case.to_input_text()).read().unwrap();

        assert_eq!(actual.parameters, case.parameters);
        assert_eq!(actual.image.shape(), case.image.shape());
        assert_eq!(actual.kernel.shape(), case.kernel.shape());
    }
}
