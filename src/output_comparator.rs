/// Largest absolute difference tolerated between two result values.
pub const DEFAULT_EPSILON: f32 = 1e-4;

/// Compares the contents of two output files.
///
/// An expected text without any digit is a diagnostic and must match case-insensitively.
/// Otherwise both sides are parsed as whitespace separated numbers and compared pairwise.
pub fn outputs_match(expected: &str, actual: &str, epsilon: f32) -> bool {
    let expected = expected.trim();
    let actual = actual.trim();

    if !contains_digit(expected) {
        return expected.to_lowercase() == actual.to_lowercase();
    }

    if !contains_digit(actual) {
        return false;
    }

    let (Some(expected), Some(actual)) = (parse_values(expected), parse_values(actual)) else {
        return false;
    };

    expected.len() == actual.len()
        && expected.iter().zip(&actual).all(|(e, a)| (e - a).abs() <= epsilon)
}

fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

fn parse_values(text: &str) -> Option<Vec<f32>> {
    text.split_whitespace()
        .map(|token| token.parse::<f32>().ok())
        .collect()
}
