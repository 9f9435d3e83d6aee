use std::ops::RangeInclusive;

use crate::error::{ConvolutionError, Infeasibility};

pub const IMAGE_SIZE_RANGE: RangeInclusive<i64> = 3..=7;
pub const KERNEL_SIZE_RANGE: RangeInclusive<i64> = 2..=4;
pub const PADDING_RANGE: RangeInclusive<i64> = 0..=4;
pub const STRIDE_RANGE: RangeInclusive<i64> = 1..=3;

/// The four header values of an input file, already range checked.
/// Immutable once read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    image_size: usize,
    kernel_size: usize,
    padding: usize,
    stride: usize
}

impl Parameters {
    /// Checks raw header values against their allowed ranges.
    pub fn validated(image_size: i64, kernel_size: i64, padding: i64, stride: i64) -> Result<Self, ConvolutionError> {
        let in_range = IMAGE_SIZE_RANGE.contains(&image_size)
            && KERNEL_SIZE_RANGE.contains(&kernel_size)
            && PADDING_RANGE.contains(&padding)
            && STRIDE_RANGE.contains(&stride);

        if !in_range {
            return Err(ConvolutionError::OutOfRange);
        }

        // Every range is small and non-negative, so the casts are lossless.
        Ok(Self {
            image_size: image_size as usize,
            kernel_size: kernel_size as usize,
            padding: padding as usize,
            stride: stride as usize
        })
    }

    pub fn image_size(&self) -> usize { self.image_size }

    pub fn kernel_size(&self) -> usize { self.kernel_size }

    pub fn padding(&self) -> usize { self.padding }

    pub fn stride(&self) -> usize { self.stride }

    /// Side length of the image once the zero border is added.
    pub fn padded_size(&self) -> usize {
        self.image_size + 2 * self.padding
    }

    /// Side length of the convolution result.
    /// Fails when the kernel cannot be placed even once.
    pub fn output_size(&self) -> Result<usize, ConvolutionError> {
        let padded_size = self.padded_size() as i64;
        let kernel_size = self.kernel_size as i64;

        if padded_size < kernel_size {
            return Err(ConvolutionError::Infeasible { reason: Infeasibility::ImageTooSmall });
        }

        let output_size = (padded_size - kernel_size) / self.stride as i64 + 1;
        if output_size <= 0 {
            return Err(ConvolutionError::Infeasible { reason: Infeasibility::StrideTooLarge });
        }

        Ok(output_size as usize)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_validated() {
        let actual = Parameters::validated(5, 3, 1, 2).unwrap();

        assert_eq!(actual.image_size(), 5);
        assert_eq!(actual.kernel_size(), 3);
        assert_eq!(actual.padding(), 1);
        assert_eq!(actual.stride(), 2);
        assert_eq!(actual.padded_size(), 7);
        assert_eq!(actual.output_size().unwrap(), 3);
    }

    #[test]
    fn test_out_of_range() {
        let cases = [
            (2, 2, 0, 1),
            (8, 2, 0, 1),
            (3, 1, 0, 1),
            (3, 5, 0, 1),
            (3, 2, -1, 1),
            (3, 2, 5, 1),
            (3, 2, 0, 0),
            (3, 2, 0, 4),
        ];

        for (n, m, p, s) in cases {
            let actual = Parameters::validated(n, m, p, s);
            assert!(
                matches!(actual, Err(ConvolutionError::OutOfRange)),
                "{n} {m} {p} {s} should have been rejected");
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Parameters::validated(3, 2, 0, 1).is_ok());
        assert!(Parameters::validated(7, 4, 4, 3).is_ok());
    }

    #[test]
    fn test_image_too_small() {
        let tc = Parameters::validated(3, 4, 0, 1).unwrap();

        assert!(matches!(
            tc.output_size(),
            Err(ConvolutionError::Infeasible { reason: Infeasibility::ImageTooSmall })));
    }

    #[test]
    fn test_padding_makes_room_for_kernel() {
        let tc = Parameters::validated(3, 4, 1, 3).unwrap();

        // (5 - 4) / 3 + 1
        assert_eq!(tc.output_size().unwrap(), 1);
    }

    proptest! {
        #[test]
        fn output_size_follows_formula(
            n in IMAGE_SIZE_RANGE,
            m in KERNEL_SIZE_RANGE,
            p in PADDING_RANGE,
            s in STRIDE_RANGE
        ) {
            let parameters = Parameters::validated(n, m, p, s).unwrap();
            let padded = n + 2 * p;

            match parameters.output_size() {
                Ok(size) => {
                    prop_assert!(padded >= m);
                    prop_assert_eq!(size as i64, (padded - m) / s + 1);
                }
                Err(_) => prop_assert!(padded < m),
            }
        }
    }
}
