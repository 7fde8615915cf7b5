//! Token amount formatting.

const GROUP_SEPARATOR: char = '\u{2019}';
const MIN_FRACTION_DIGITS: usize = 2;
// u128 holds 10^38
const MAX_DECIMALS: u32 = 38;

///
/// FormatTokenOptions
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FormatTokenOptions {
    /// Show every significant decimal instead of rounding to two.
    pub detailed: bool,
}

impl FormatTokenOptions {
    #[must_use]
    pub const fn detailed() -> Self {
        Self { detailed: true }
    }
}

/// Format `amount` base units of a token with `decimals` decimals.
///
/// Zero renders as `"0"`. Otherwise at least two fraction digits are shown;
/// amounts below `0.01` and `detailed` output keep every significant digit,
/// everything else is rounded half-up to two. Thousands are grouped with `’`.
#[must_use]
pub fn format_token(amount: u64, decimals: u8, options: FormatTokenOptions) -> String {
    if amount == 0 {
        return "0".to_string();
    }

    let decimals = u32::from(decimals).min(MAX_DECIMALS);
    let scale = 10u128.pow(decimals);
    let amount = u128::from(amount);

    let mut whole = amount / scale;
    let frac = amount % scale;

    let tiny = decimals > 2 && amount < 10u128.pow(decimals - 2);
    let fraction = if options.detailed || tiny || decimals <= 2 {
        let width = usize::try_from(decimals).unwrap_or(MIN_FRACTION_DIGITS);
        let digits = if width == 0 {
            String::new()
        } else {
            format!("{frac:0width$}")
        };
        let trimmed = digits.trim_end_matches('0');

        format!("{trimmed:0<MIN_FRACTION_DIGITS$}")
    } else {
        let divisor = 10u128.pow(decimals - 2);
        let mut cents = frac / divisor;
        if (frac % divisor) * 2 >= divisor {
            cents += 1;
        }
        if cents == 100 {
            whole += 1;
            cents = 0;
        }

        format!("{cents:02}")
    };

    format!("{}.{fraction}", group_thousands(whole))
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }

    out
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals_by_default() {
        let opts = FormatTokenOptions::default();

        assert_eq!(format_token(314_000_000, 8, opts), "3.14");
        assert_eq!(format_token(114_000_000, 8, opts), "1.14");
        assert_eq!(format_token(100_000_000, 8, opts), "1.00");
        assert_eq!(format_token(123_456_789, 8, opts), "1.23");
        assert_eq!(format_token(99_999_999, 8, opts), "1.00");
        assert_eq!(format_token(0, 8, opts), "0");
    }

    #[test]
    fn keeps_significant_digits_for_tiny_amounts() {
        let opts = FormatTokenOptions::default();

        assert_eq!(format_token(1, 8, opts), "0.00000001");
        assert_eq!(format_token(500_000, 8, opts), "0.005");
    }

    #[test]
    fn detailed_shows_all_significant_digits() {
        let opts = FormatTokenOptions::detailed();

        assert_eq!(format_token(123_456_789, 8, opts), "1.23456789");
        assert_eq!(format_token(150_000_000, 8, opts), "1.50");
    }

    #[test]
    fn groups_thousands() {
        let opts = FormatTokenOptions::default();

        assert_eq!(
            format_token(123_456_789_010_000, 8, opts),
            "1\u{2019}234\u{2019}567.89"
        );
        assert_eq!(format_token(100_000_000_000, 8, opts), "1\u{2019}000.00");
    }

    #[test]
    fn handles_small_decimal_counts() {
        let opts = FormatTokenOptions::default();

        assert_eq!(format_token(1_234, 2, opts), "12.34");
        assert_eq!(format_token(5, 0, opts), "5.00");
    }
}
