//! Integer to numeral string.

use num_bigint::{BigInt, Sign};

use crate::check_base;
use crate::constants::DIGITS_BYTES;
use crate::BaseReprError;

/// Returns the representation of `number` in the `base` numeral system.
///
/// The digits are left-padded with `'0'` up to `padding` digits. Negative
/// numbers get a `-` prefix in front of the padded digits.
///
/// # Errors
///
/// Returns [`BaseReprError::InvalidBase`] if `base` is outside 2..=62.
///
/// # Example
///
/// ```
/// use base_repr::int_to_repr;
///
/// assert_eq!(int_to_repr(1234, 62, 0).unwrap(), "Ju");
/// assert_eq!(int_to_repr(7, 2, 4).unwrap(), "0111");
/// assert_eq!(int_to_repr(-255, 16, 5).unwrap(), "-000FF");
/// ```
pub fn int_to_repr<N: Into<BigInt>>(
    number: N,
    base: u32,
    padding: usize,
) -> Result<String, BaseReprError> {
    check_base(base)?;

    let number = number.into();
    let digits = number.magnitude().to_radix_be(base);

    let negative = number.sign() == Sign::Minus;
    let fill = padding.saturating_sub(digits.len());
    let mut out = String::with_capacity(usize::from(negative) + fill + digits.len());

    if negative {
        out.push('-');
    }
    out.extend(std::iter::repeat('0').take(fill));
    for digit in digits {
        out.push(DIGITS_BYTES[digit as usize] as char);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        for base in 2..=62 {
            assert_eq!(int_to_repr(0, base, 0).unwrap(), "0");
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(int_to_repr(1234, 62, 0).unwrap(), "Ju");
        assert_eq!(int_to_repr(1234, 36, 0).unwrap(), "YA");
        assert_eq!(int_to_repr(1234, 16, 0).unwrap(), "4D2");
        assert_eq!(int_to_repr(1234, 2, 0).unwrap(), "10011010010");
        assert_eq!(int_to_repr(61, 62, 0).unwrap(), "z");
        assert_eq!(int_to_repr(61, 36, 0).unwrap(), "1P");
    }

    #[test]
    fn test_padding() {
        assert_eq!(int_to_repr(0, 2, 8).unwrap(), "00000000");
        assert_eq!(int_to_repr(1234, 62, 2).unwrap(), "Ju");
        assert_eq!(int_to_repr(1234, 62, 5).unwrap(), "000Ju");
    }

    #[test]
    fn test_negative() {
        assert_eq!(int_to_repr(-255, 62, 5).unwrap(), "-00047");
        assert_eq!(int_to_repr(-255, 2, 5).unwrap(), "-11111111");
        assert_eq!(int_to_repr(-1, 10, 0).unwrap(), "-1");
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(int_to_repr(1, 1, 0), Err(BaseReprError::InvalidBase(1)));
        assert_eq!(int_to_repr(1, 63, 0), Err(BaseReprError::InvalidBase(63)));
        assert_eq!(int_to_repr(1, 0, 0), Err(BaseReprError::InvalidBase(0)));
    }
}
