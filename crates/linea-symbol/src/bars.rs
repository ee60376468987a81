//! Bar sequences: the two-valued alphabet of the symbology
//!
//! A dedicated value type rather than a bit-string: concatenation,
//! repetition, and inversion are explicit operations, and no characters
//! outside {white, black} can sneak in.

use std::fmt;

use linea_core::{LineaError, LineaResult};

/// A single bar module, the atomic element of a symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bar {
    White,
    Black,
}

impl Bar {
    /// The opposite color.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Bar::White => Bar::Black,
            Bar::Black => Bar::White,
        }
    }

    /// Text form: `'0'` for white, `'1'` for black.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Bar::White => '0',
            Bar::Black => '1',
        }
    }

    /// Parse the text form.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bar::White),
            '1' => Some(Bar::Black),
            _ => None,
        }
    }
}

/// An ordered sequence of bars
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BarSequence(Vec<Bar>);

impl BarSequence {
    /// The empty sequence.
    #[inline]
    pub fn new() -> Self {
        BarSequence(Vec::new())
    }

    /// A one-bar sequence.
    #[inline]
    pub fn single(bar: Bar) -> Self {
        BarSequence(vec![bar])
    }

    /// Parse a literal `0`/`1` pattern such as `"101"`.
    pub fn from_pattern(pattern: &str) -> LineaResult<Self> {
        pattern
            .chars()
            .enumerate()
            .map(|(position, c)| {
                Bar::from_char(c).ok_or(LineaError::BadBar { position, found: c })
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying bars, in order.
    #[inline]
    pub fn bars(&self) -> &[Bar] {
        &self.0
    }

    /// `self` followed by `other`.
    pub fn concat(mut self, other: &BarSequence) -> Self {
        self.0.extend_from_slice(&other.0);
        self
    }

    /// Append `other` in place.
    pub fn extend(&mut self, other: &BarSequence) {
        self.0.extend_from_slice(&other.0);
    }

    /// `self` concatenated with itself `n` times; `n = 0` is empty.
    pub fn repeat(&self, n: usize) -> Self {
        let mut out = Vec::with_capacity(self.0.len() * n);
        for _ in 0..n {
            out.extend_from_slice(&self.0);
        }
        BarSequence(out)
    }

    /// Every bar flipped.
    pub fn inverted(&self) -> Self {
        self.0.iter().map(|b| b.invert()).collect()
    }
}

impl FromIterator<Bar> for BarSequence {
    fn from_iter<I: IntoIterator<Item = Bar>>(iter: I) -> Self {
        BarSequence(iter.into_iter().collect())
    }
}

impl fmt::Display for BarSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bar in &self.0 {
            write!(f, "{}", bar.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_invert() {
        assert_eq!(Bar::White.invert(), Bar::Black);
        assert_eq!(Bar::Black.invert(), Bar::White);
    }

    #[test]
    fn test_pattern_roundtrip() {
        let seq = BarSequence::from_pattern("01010").unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "01010");
    }

    #[test]
    fn test_pattern_rejects_other_characters() {
        assert_eq!(
            BarSequence::from_pattern("10x").unwrap_err(),
            LineaError::BadBar { position: 2, found: 'x' }
        );
    }

    #[test]
    fn test_concat_and_extend_agree() {
        let a = BarSequence::from_pattern("101").unwrap();
        let b = BarSequence::from_pattern("01").unwrap();

        let joined = a.clone().concat(&b);
        assert_eq!(joined.to_string(), "10101");

        let mut grown = a;
        grown.extend(&b);
        assert_eq!(grown, joined);
    }

    #[test]
    fn test_repeat() {
        let unit = BarSequence::single(Bar::Black);
        assert_eq!(unit.repeat(3).to_string(), "111");
        assert!(unit.repeat(0).is_empty());
    }

    #[test]
    fn test_inverted() {
        let seq = BarSequence::from_pattern("1100").unwrap();
        assert_eq!(seq.inverted().to_string(), "0011");
        assert_eq!(seq.inverted().inverted(), seq);
    }
}
