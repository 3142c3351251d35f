//! Property-based tests for radix decoding.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    // Strategy for generating a base together with a digit string valid in it
    fn literal() -> impl Strategy<Value = (u32, Vec<u32>)> {
        (2u32..=36).prop_flat_map(|base| {
            let digits = proptest::collection::vec(0..base, 1..24);
            (Just(base), digits)
        })
    }

    // Reference decoding by Horner accumulation over i128-sized chunks
    fn horner(base: u32, digits: &[u32]) -> Integer {
        let radix = Integer::new(i64::from(base));
        let mut acc = Integer::zero();
        for &d in digits {
            acc = acc * radix.clone() + Integer::new(i64::from(d));
        }
        acc
    }

    fn render(digits: &[u32]) -> String {
        digits
            .iter()
            .map(|&d| char::from(DIGITS[d as usize]))
            .collect()
    }

    proptest! {
        #[test]
        fn decode_matches_horner_accumulation((base, digits) in literal()) {
            let text = render(&digits);
            let decoded = Integer::from_str_radix(&text, base).unwrap();
            prop_assert_eq!(decoded, horner(base, &digits));
        }

        #[test]
        fn decode_ignores_digit_case((base, digits) in literal()) {
            let lower = render(&digits);
            let upper = lower.to_ascii_uppercase();
            prop_assert_eq!(
                Integer::from_str_radix(&lower, base).unwrap(),
                Integer::from_str_radix(&upper, base).unwrap()
            );
        }

        #[test]
        fn decode_round_trips_decimal(value in 0i64..=i64::MAX) {
            let text = value.to_string();
            let decoded = Integer::from_str_radix(&text, 10).unwrap();
            prop_assert_eq!(decoded.to_i64(), Some(value));
        }

        #[test]
        fn addition_has_inverse(value in -1_000_000i64..1_000_000) {
            let v = Integer::new(value);
            prop_assert!((v.clone() + (-v)).is_zero());
        }
    }
}
