//! Digit draws on top of an injected [`rand::Rng`].

use rand::Rng;

/// Draw a uniform digit in `[min, max]`, optionally excluding one value.
///
/// Exactly one draw per call: when `exclude` falls inside the range, the
/// draw runs over a range one value short and remaps past the hole instead
/// of rejection-sampling. `min == max` is a valid degenerate range as long
/// as its only value is not excluded.
pub(crate) fn random_digit<R: Rng + ?Sized>(
    rng: &mut R,
    min: u8,
    max: u8,
    exclude: Option<u8>,
) -> u8 {
    debug_assert!(min <= max);
    match exclude {
        Some(ex) if (min..=max).contains(&ex) => {
            debug_assert!(min < max, "cannot exclude the only value in the range");
            let v = rng.random_range(min..max);
            if v >= ex { v + 1 } else { v }
        }
        _ => rng.random_range(min..=max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let d = random_digit(&mut rng, 2, 7, None);
            assert!((2..=7).contains(&d));
        }
    }

    #[test]
    fn never_returns_excluded_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for ex in 0..=9 {
            for _ in 0..500 {
                let d = random_digit(&mut rng, 0, 9, Some(ex));
                assert!((0..=9).contains(&d));
                assert_ne!(d, ex);
            }
        }
    }

    #[test]
    fn exclusion_outside_range_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let d = random_digit(&mut rng, 1, 4, Some(9));
            assert!((1..=4).contains(&d));
        }
    }

    #[test]
    fn degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(random_digit(&mut rng, 6, 6, None), 6);
        assert_eq!(random_digit(&mut rng, 6, 6, Some(3)), 6);
    }

    #[test]
    fn excluded_value_reachable_neighbors() {
        // The remap must still reach both neighbors of the hole.
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = [false; 10];
        for _ in 0..2000 {
            seen[random_digit(&mut rng, 0, 9, Some(5)) as usize] = true;
        }
        assert!(seen[4] && seen[6]);
        assert!(!seen[5]);
    }
}
