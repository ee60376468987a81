//! Static EAN-13 symbol tables
//!
//! All tables are literals from the symbology definition. They are expanded
//! into bar sequences exactly once by `SymbolTable::build` and shared
//! process-wide through `SymbolTable::global`.
//!
//! Read:
//! <https://en.wikipedia.org/wiki/International_Article_Number>

use std::sync::OnceLock;

use linea_core::{LineaError, LineaResult};

use crate::bars::{Bar, BarSequence};

/// Modules per encoded digit
pub const DIGIT_BARS: usize = 7;

/// The three digit encoding sets.
///
/// A and B start with a white module and differ in their run tables;
/// C uses A's runs starting with a black module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParitySet {
    A,
    B,
    C,
}

/// Run lengths for set A (and, color-flipped, set C), per digit 0-9.
/// Each entry is four runs of alternating color summing to 7 modules.
const SET_A_RUNS: [[u8; 4]; 10] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
];

/// Run lengths for set B, per digit 0-9.
const SET_B_RUNS: [[u8; 4]; 10] = [
    [1, 1, 2, 3],
    [1, 2, 2, 2],
    [2, 2, 1, 2],
    [1, 1, 4, 1],
    [2, 3, 1, 1],
    [1, 3, 2, 1],
    [4, 1, 1, 1],
    [2, 1, 3, 1],
    [3, 1, 2, 1],
    [2, 1, 1, 3],
];

impl ParitySet {
    /// The four run lengths encoding `digit` in this set.
    pub fn runs(self, digit: u8) -> [u8; 4] {
        match self {
            ParitySet::A | ParitySet::C => SET_A_RUNS[digit as usize],
            ParitySet::B => SET_B_RUNS[digit as usize],
        }
    }

    /// Color of the first run.
    #[inline]
    pub fn first_bar(self) -> Bar {
        match self {
            ParitySet::A | ParitySet::B => Bar::White,
            ParitySet::C => Bar::Black,
        }
    }

    /// Single-letter name, as used in structure layouts.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            ParitySet::A => 'A',
            ParitySet::B => 'B',
            ParitySet::C => 'C',
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            ParitySet::A => 0,
            ParitySet::B => 1,
            ParitySet::C => 2,
        }
    }
}

/// Parity layout of the first digit group, selected by the leading digit.
/// The second group is always set C.
const FIRST_GROUP_LAYOUT: [[ParitySet; 6]; 10] = {
    use ParitySet::{A, B};
    [
        [A, A, A, A, A, A],
        [A, A, B, A, B, B],
        [A, A, B, B, A, B],
        [A, A, B, B, B, A],
        [A, B, A, A, B, B],
        [A, B, B, A, A, B],
        [A, B, B, B, A, A],
        [A, B, A, B, A, B],
        [A, B, A, B, B, A],
        [A, B, B, A, B, A],
    ]
};

/// One slot of the 15-symbol structure template
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateSymbol {
    NormalGuard,
    CentralGuard,
    /// A digit slot, encoded with the named parity set
    Digit(ParitySet),
}

/// Number of template symbols: 3 guards plus 12 digit slots
pub const TEMPLATE_SYMBOLS: usize = 15;

/// The full structure template for a symbol with the given leading digit:
/// normal guard, six digits per the leading digit's layout, central guard,
/// six digits in set C, normal guard.
pub fn structure_template(leading_digit: u8) -> [TemplateSymbol; TEMPLATE_SYMBOLS] {
    let layout = FIRST_GROUP_LAYOUT[leading_digit as usize];
    let mut template = [TemplateSymbol::NormalGuard; TEMPLATE_SYMBOLS];
    for (i, &set) in layout.iter().enumerate() {
        template[1 + i] = TemplateSymbol::Digit(set);
    }
    template[7] = TemplateSymbol::CentralGuard;
    for slot in template.iter_mut().take(14).skip(8) {
        *slot = TemplateSymbol::Digit(ParitySet::C);
    }
    template
}

/// Expanded bar sequences for every digit in every set, plus the guards.
/// Built once from the literal tables; immutable afterwards.
#[derive(Debug)]
pub struct SymbolTable {
    digits: [[BarSequence; 10]; 3],
    normal_guard: BarSequence,
    central_guard: BarSequence,
}

impl SymbolTable {
    /// Expand the literal run tables into bar sequences.
    ///
    /// Fails only if a run table entry does not cover exactly 7 modules
    /// or contains a zero-length run, which the fixed literals never do.
    pub fn build() -> LineaResult<SymbolTable> {
        let mut digits: [[BarSequence; 10]; 3] = Default::default();
        for set in [ParitySet::A, ParitySet::B, ParitySet::C] {
            for digit in 0u8..10 {
                digits[set.index()][digit as usize] = expand_runs(set, digit)?;
            }
        }
        Ok(SymbolTable {
            digits,
            normal_guard: BarSequence::from_pattern("101")?,
            central_guard: BarSequence::from_pattern("01010")?,
        })
    }

    /// The shared table. An inconsistent literal table is a programming
    /// defect, treated as fatal here rather than propagated.
    pub fn global() -> &'static SymbolTable {
        static TABLE: OnceLock<SymbolTable> = OnceLock::new();
        TABLE.get_or_init(|| match SymbolTable::build() {
            Ok(table) => table,
            Err(e) => panic!("inconsistent symbol table literals: {e}"),
        })
    }

    /// Bar sequence for `digit` in `set`. `digit` must be 0-9.
    #[inline]
    pub fn digit(&self, set: ParitySet, digit: u8) -> &BarSequence {
        &self.digits[set.index()][digit as usize]
    }

    /// The `101` side guard.
    #[inline]
    pub fn normal_guard(&self) -> &BarSequence {
        &self.normal_guard
    }

    /// The `01010` central guard.
    #[inline]
    pub fn central_guard(&self) -> &BarSequence {
        &self.central_guard
    }
}

/// Expand one run table entry: runs of alternating color, starting from
/// the set's first color.
fn expand_runs(set: ParitySet, digit: u8) -> LineaResult<BarSequence> {
    let runs = set.runs(digit);
    let total: u8 = runs.iter().sum();
    if total as usize != DIGIT_BARS || runs.contains(&0) {
        return Err(LineaError::BadRunPattern { set: set.letter(), digit, runs });
    }

    let mut seq = BarSequence::new();
    let mut color = set.first_bar();
    for &run in &runs {
        seq.extend(&BarSequence::single(color).repeat(run as usize));
        color = color.invert();
    }
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_is_seven_bars() {
        let table = SymbolTable::global();
        for set in [ParitySet::A, ParitySet::B, ParitySet::C] {
            for digit in 0u8..10 {
                assert_eq!(table.digit(set, digit).len(), DIGIT_BARS);
            }
        }
    }

    #[test]
    fn test_known_digit_expansions() {
        let table = SymbolTable::global();
        // A0: runs 3211 from white
        assert_eq!(table.digit(ParitySet::A, 0).to_string(), "0001101");
        // B0: runs 1123 from white
        assert_eq!(table.digit(ParitySet::B, 0).to_string(), "0100111");
        // C is A with the colors flipped
        assert_eq!(table.digit(ParitySet::C, 0).to_string(), "1110010");
        assert_eq!(
            table.digit(ParitySet::C, 9),
            &table.digit(ParitySet::A, 9).inverted()
        );
    }

    #[test]
    fn test_guards() {
        let table = SymbolTable::global();
        assert_eq!(table.normal_guard().to_string(), "101");
        assert_eq!(table.central_guard().to_string(), "01010");
    }

    #[test]
    fn test_structure_template_shape() {
        for leading in 0u8..10 {
            let template = structure_template(leading);
            assert_eq!(template[0], TemplateSymbol::NormalGuard);
            assert_eq!(template[7], TemplateSymbol::CentralGuard);
            assert_eq!(template[14], TemplateSymbol::NormalGuard);

            let digit_slots = template
                .iter()
                .filter(|s| matches!(s, TemplateSymbol::Digit(_)))
                .count();
            assert_eq!(digit_slots, 12);

            // Second group is always set C
            for slot in &template[8..14] {
                assert_eq!(*slot, TemplateSymbol::Digit(ParitySet::C));
            }
        }
    }

    #[test]
    fn test_leading_zero_layout_is_all_a() {
        let template = structure_template(0);
        for slot in &template[1..7] {
            assert_eq!(*slot, TemplateSymbol::Digit(ParitySet::A));
        }
    }

    #[test]
    fn test_leading_four_layout() {
        use ParitySet::{A, B};
        let template = structure_template(4);
        let layout: Vec<ParitySet> = template[1..7]
            .iter()
            .map(|s| match s {
                TemplateSymbol::Digit(set) => *set,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(layout, [A, B, A, A, B, B]);
    }
}
