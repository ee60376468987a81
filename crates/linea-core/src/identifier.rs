//! The validated 13-digit identifier

use std::fmt;
use std::str::FromStr;

use crate::checksum;
use crate::error::{LineaError, LineaResult};

/// Number of payload digits, check digit excluded
pub const PAYLOAD_DIGITS: usize = 12;

/// Total number of digits including the trailing check digit
pub const TOTAL_DIGITS: usize = 13;

/// A validated EAN-13 identifier: 12 payload digits plus their check digit.
///
/// The invariant `digits[12] == check_digit(digits[0..12])` holds for every
/// constructed value; the type is immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier([u8; TOTAL_DIGITS]);

impl Identifier {
    /// Build from a 12-digit payload; the check digit is computed and
    /// appended. Digit values must be 0-9.
    pub fn from_payload(payload: [u8; PAYLOAD_DIGITS]) -> LineaResult<Self> {
        if let Some(&bad) = payload.iter().find(|&&d| d > 9) {
            return Err(LineaError::BadDigit(bad));
        }
        let mut digits = [0u8; TOTAL_DIGITS];
        digits[..PAYLOAD_DIGITS].copy_from_slice(&payload);
        digits[PAYLOAD_DIGITS] = checksum::check_digit(&payload);
        Ok(Identifier(digits))
    }

    /// All 13 digit values.
    #[inline]
    pub fn digits(&self) -> &[u8; TOTAL_DIGITS] {
        &self.0
    }

    /// The 12 payload digits.
    pub fn payload(&self) -> [u8; PAYLOAD_DIGITS] {
        let mut p = [0u8; PAYLOAD_DIGITS];
        p.copy_from_slice(&self.0[..PAYLOAD_DIGITS]);
        p
    }

    /// The trailing check digit.
    #[inline]
    pub fn check_digit(&self) -> u8 {
        self.0[PAYLOAD_DIGITS]
    }

    /// The first digit, which selects the parity layout of the symbol.
    #[inline]
    pub fn leading_digit(&self) -> u8 {
        self.0[0]
    }

    /// The printed label form, `D-DDDDDD-DDDDDD`.
    pub fn dashed(&self) -> String {
        let s = self.to_string();
        format!("{}-{}-{}", &s[..1], &s[1..7], &s[7..13])
    }
}

impl FromStr for Identifier {
    type Err = LineaError;

    /// Parse a digit string: 12 digits get their check digit computed and
    /// appended; 13 digits are verified against their final digit. Any
    /// other length or a non-digit character is a validation error.
    fn from_str(s: &str) -> LineaResult<Self> {
        if let Some((position, found)) =
            s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(LineaError::NonDigit { position, found });
        }
        let values: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
        match values.len() {
            PAYLOAD_DIGITS => {
                let mut payload = [0u8; PAYLOAD_DIGITS];
                payload.copy_from_slice(&values);
                Identifier::from_payload(payload)
            }
            TOTAL_DIGITS => {
                let mut payload = [0u8; PAYLOAD_DIGITS];
                payload.copy_from_slice(&values[..PAYLOAD_DIGITS]);
                let expected = checksum::check_digit(&payload);
                let actual = values[PAYLOAD_DIGITS];
                if expected != actual {
                    return Err(LineaError::ChecksumMismatch { expected, actual });
                }
                let mut digits = [0u8; TOTAL_DIGITS];
                digits.copy_from_slice(&values);
                Ok(Identifier(digits))
            }
            other => Err(LineaError::BadLength(other)),
        }
    }
}

impl TryFrom<u64> for Identifier {
    type Error = LineaError;

    /// Build from a non-negative integer, left-zero-padded to 12 digits
    /// when shorter than 13. A 13-digit value is verified like a string.
    fn try_from(value: u64) -> LineaResult<Self> {
        if value >= 10_000_000_000_000 {
            return Err(LineaError::ValueTooLarge(value));
        }
        format!("{value:012}").parse()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_payload_construction() {
        let id = Identifier::from_payload([9, 7, 8, 2, 9, 4, 0, 1, 9, 9, 6, 1]).unwrap();
        assert_eq!(id.check_digit(), 7);
        assert_eq!(id.to_string(), "9782940199617");
        assert_eq!(id.leading_digit(), 9);
    }

    #[test]
    fn test_payload_rejects_bad_digit() {
        let err = Identifier::from_payload([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 12]).unwrap_err();
        assert_eq!(err, LineaError::BadDigit(12));
    }

    #[test]
    fn test_parse_12_digits_appends_check() {
        let id: Identifier = "978294019961".parse().unwrap();
        assert_eq!(id.to_string(), "9782940199617");
    }

    #[test]
    fn test_parse_13_digits_verifies_check() {
        assert!("9782940199617".parse::<Identifier>().is_ok());
        assert_eq!(
            "9782940199618".parse::<Identifier>().unwrap_err(),
            LineaError::ChecksumMismatch { expected: 7, actual: 8 }
        );
    }

    #[test]
    fn test_parse_rejects_wrong_lengths() {
        assert_eq!(
            "12345".parse::<Identifier>().unwrap_err(),
            LineaError::BadLength(5)
        );
        assert_eq!(
            "97829401996170".parse::<Identifier>().unwrap_err(),
            LineaError::BadLength(14)
        );
        assert_eq!("".parse::<Identifier>().unwrap_err(), LineaError::BadLength(0));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            "04125986301x3".parse::<Identifier>().unwrap_err(),
            LineaError::NonDigit { position: 11, found: 'x' }
        );
    }

    #[test]
    fn test_from_integer_pads() {
        let id = Identifier::try_from(12345u64).unwrap();
        assert_eq!(id.payload(), [0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_integer_too_large() {
        assert_eq!(
            Identifier::try_from(10_000_000_000_000u64).unwrap_err(),
            LineaError::ValueTooLarge(10_000_000_000_000)
        );
    }

    #[test]
    fn test_dashed_label() {
        let id: Identifier = "9782940199617".parse().unwrap();
        assert_eq!(id.dashed(), "9-782940-199617");
    }

    proptest! {
        #[test]
        fn prop_payload_roundtrips_through_string(payload in prop::array::uniform12(0u8..10)) {
            let id = Identifier::from_payload(payload).unwrap();
            let reparsed: Identifier = id.to_string().parse().unwrap();
            prop_assert_eq!(id, reparsed);
            prop_assert_eq!(reparsed.payload(), payload);
        }

        #[test]
        fn prop_check_digit_is_stable(payload in prop::array::uniform12(0u8..10)) {
            let id = Identifier::from_payload(payload).unwrap();
            prop_assert_eq!(
                id.check_digit(),
                crate::checksum::check_digit(&id.payload())
            );
        }
    }
}
