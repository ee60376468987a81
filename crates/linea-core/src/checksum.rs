//! GS1 weighted mod-10 check digit
//!
//! Positions are 0-indexed over the 12-digit payload: even indices
//! (0, 2, ..., 10) carry weight 1, odd indices (1, 3, ..., 11) weight 3.
//! The check digit brings the weighted sum to a multiple of 10.

use crate::identifier::PAYLOAD_DIGITS;

/// Compute the check digit for a 12-digit payload.
pub fn check_digit(payload: &[u8; PAYLOAD_DIGITS]) -> u8 {
    let weighted: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d as u32 } else { 3 * d as u32 })
        .sum();
    // The outer mod folds the weighted-sum-divisible-by-10 case back to 0.
    ((10 - weighted % 10) % 10) as u8
}

/// Check that 13 digits end with their correct check digit.
pub fn verify(digits: &[u8; PAYLOAD_DIGITS + 1]) -> bool {
    let mut payload = [0u8; PAYLOAD_DIGITS];
    payload.copy_from_slice(&digits[..PAYLOAD_DIGITS]);
    check_digit(&payload) == digits[PAYLOAD_DIGITS]
}
