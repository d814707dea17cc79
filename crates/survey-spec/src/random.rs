use rand::Rng;

use crate::spec::{Question, ValueType};

/// Span added above `minLength` when no usable `maxLength` is declared.
const DEFAULT_LENGTH_SPAN: usize = 10;

/// Inclusive length window used for synthesis.
pub fn length_bounds(question: &Question) -> (usize, usize) {
    let min_len = question.min_length;
    let max_len = if question.max_length <= min_len {
        min_len.saturating_add(DEFAULT_LENGTH_SPAN)
    } else {
        question.max_length
    };
    (min_len, max_len)
}

/// Produces a random value for `question` that honors its length constraints.
pub fn synthesize<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> String {
    let (min_len, max_len) = length_bounds(question);

    match question.value_type {
        ValueType::Int => {
            let (min, max) = int_range(min_len, max_len);
            rng.gen_range(min..=max).to_string()
        }
        ValueType::Boolean => {
            if rng.gen_bool(0.5) {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }
        ValueType::String => {
            let length = rng.gen_range(min_len..=max_len);
            (0..length)
                .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
                .collect()
        }
    }
}

/// Integer window whose digit count roughly tracks the length window.
pub fn int_range(min_len: usize, max_len: usize) -> (i64, i64) {
    let min = if min_len > 0 {
        pow10(exponent(min_len) - 1)
    } else {
        0
    };
    let mut max = if max_len > 0 {
        pow10(exponent(max_len)).saturating_sub(1)
    } else {
        9999
    };
    if max < min {
        max = min.saturating_mul(10);
    }
    (min, max)
}

fn exponent(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

/// `10^n`, saturating at `i64::MAX`; zero and negative exponents give `1`.
pub fn pow10(n: i64) -> i64 {
    if n <= 0 {
        return 1;
    }
    let exponent = u32::try_from(n).unwrap_or(u32::MAX);
    10i64.saturating_pow(exponent)
}
