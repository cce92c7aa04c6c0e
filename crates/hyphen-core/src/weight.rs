// Hyphenation weight scalar and the narrowing policy for accumulated scores.

/// Hyphenation desirability score.
///
/// Positive values encourage a break, negative values discourage it, and
/// zero is neutral/unknown. The type matches the on-disk representation of
/// the weight matrices (raw signed 8-bit values).
pub type Weight = i8;

/// Neutral weight returned by every table lookup whose input falls outside
/// the table domain (non-letter bytes, out-of-range indices).
pub const NEUTRAL: Weight = 0;

/// Narrow a wide accumulated total back to the [`Weight`] range.
///
/// Scores from several tables are summed in `i32` so that intermediate
/// totals cannot wrap. The final value saturates at the `i8` bounds; a
/// word whose combined signals exceed the representable range simply pins
/// at the strongest expressible score.
#[inline]
pub fn narrow(total: i32) -> Weight {
    total.clamp(Weight::MIN as i32, Weight::MAX as i32) as Weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_passes_in_range_values() {
        assert_eq!(narrow(0), 0);
        assert_eq!(narrow(42), 42);
        assert_eq!(narrow(-42), -42);
        assert_eq!(narrow(127), 127);
        assert_eq!(narrow(-128), -128);
    }

    #[test]
    fn narrow_saturates_above() {
        assert_eq!(narrow(128), 127);
        assert_eq!(narrow(1_000_000), 127);
    }

    #[test]
    fn narrow_saturates_below() {
        assert_eq!(narrow(-129), -128);
        assert_eq!(narrow(-1_000_000), -128);
    }
}
