//! Numeral string to integer.

use num_bigint::BigUint;

use crate::check_base;
use crate::constants::digit_value;
use crate::BaseReprError;

/// Parses a numeral string in the `base` system, most significant digit first.
///
/// Only the first `base` alphabet characters are accepted. There is no sign
/// handling, so a leading `-` is an invalid digit. An empty string is zero.
///
/// # Errors
///
/// Returns [`BaseReprError::InvalidBase`] if `base` is outside 2..=62 and
/// [`BaseReprError::InvalidDigit`] for the first character that is not a
/// digit of `base`.
///
/// # Example
///
/// ```
/// use base_repr::repr_to_int;
/// use num_bigint::BigUint;
///
/// assert_eq!(repr_to_int("Ju", 62).unwrap(), BigUint::from(1234u32));
/// assert_eq!(repr_to_int("0111", 2).unwrap(), BigUint::from(7u32));
/// assert!(repr_to_int("-1", 10).is_err());
/// ```
pub fn repr_to_int(string: &str, base: u32) -> Result<BigUint, BaseReprError> {
    check_base(base)?;

    let mut digits = Vec::with_capacity(string.len());
    for (position, c) in string.chars().enumerate() {
        match digit_value(c, base) {
            Some(value) => digits.push(value),
            None => {
                return Err(BaseReprError::InvalidDigit {
                    digit: c,
                    position,
                    base,
                })
            }
        }
    }

    if digits.is_empty() {
        return Ok(BigUint::default());
    }

    // Every digit is below `base`, so this cannot fail.
    BigUint::from_radix_be(&digits, base).ok_or(BaseReprError::InvalidBase(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(repr_to_int("", 62).unwrap(), BigUint::from(0u8));
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert_eq!(repr_to_int("000Ju", 62).unwrap(), BigUint::from(1234u32));
    }

    #[test]
    fn test_digit_outside_base() {
        assert_eq!(
            repr_to_int("1012", 2),
            Err(BaseReprError::InvalidDigit {
                digit: '2',
                position: 3,
                base: 2
            })
        );
        assert_eq!(
            repr_to_int("z", 36),
            Err(BaseReprError::InvalidDigit {
                digit: 'z',
                position: 0,
                base: 36
            })
        );
    }

    #[test]
    fn test_sign_not_parsed() {
        assert_eq!(
            repr_to_int("-00047", 62),
            Err(BaseReprError::InvalidDigit {
                digit: '-',
                position: 0,
                base: 62
            })
        );
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(repr_to_int("1", 1), Err(BaseReprError::InvalidBase(1)));
        assert_eq!(repr_to_int("1", 63), Err(BaseReprError::InvalidBase(63)));
    }
}
