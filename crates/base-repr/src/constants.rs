/// Digit alphabet. The index of a character is its digit value.
pub const DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digit alphabet as a byte array (used for byte-level operations and const evaluation).
pub const DIGITS_BYTES: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;

/// Largest supported radix, one per alphabet character.
pub const MAX_BASE: u32 = DIGITS_BYTES.len() as u32;

/// Sentinel for characters outside the alphabet.
const NO_DIGIT: u8 = 0xFF;

/// Reverse lookup from ASCII code to digit value.
pub(crate) static DIGIT_VALUES: [u8; 128] = {
    let mut table = [NO_DIGIT; 128];
    let mut i = 0;
    while i < DIGITS_BYTES.len() {
        table[DIGITS_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the value of `c` as a digit in `base`, if it is one.
pub(crate) fn digit_value(c: char, base: u32) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let value = DIGIT_VALUES[c as usize];
    if value == NO_DIGIT || u32::from(value) >= base {
        return None;
    }
    Some(value)
}
