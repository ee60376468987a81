//! EAN-13 encoder: identifier to bar sequence
//!
//! The leading digit selects the structure template; the remaining 12
//! digits (including the check digit) fill the template's digit slots in
//! order. Consumption symmetry is structural: every template has exactly
//! 12 digit slots, so no runtime count check is needed.

use linea_core::Identifier;

use crate::bars::BarSequence;
use crate::symbols::{structure_template, ParitySet, SymbolTable, TemplateSymbol};

/// Total number of bar modules in a full symbol: 3 + 6*7 + 5 + 6*7 + 3
pub const TOTAL_BARS: usize = 95;

/// Number of elements: three guards plus twelve digit symbols
pub const ELEMENT_COUNT: usize = 15;

/// What one encoded element represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    NormalGuard,
    CentralGuard,
    Digit { value: u8, set: ParitySet },
}

/// One of the 15 sub-sequences of an encoded symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub bars: BarSequence,
}

/// The encoded form of an identifier: the full bar sequence plus the
/// ordered elements whose concatenation equals it. Computed once,
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedCode {
    identifier: Identifier,
    bars: BarSequence,
    elements: Vec<Element>,
}

impl EncodedCode {
    /// Encode a validated identifier.
    pub fn from_identifier(identifier: &Identifier) -> EncodedCode {
        let table = SymbolTable::global();
        let digits = identifier.digits();

        let mut bars = BarSequence::new();
        let mut elements = Vec::with_capacity(ELEMENT_COUNT);
        // The leading digit only selects the template; slots consume
        // digits 2..13, check digit included.
        let mut next_digit = 1;

        for symbol in structure_template(identifier.leading_digit()) {
            let element = match symbol {
                TemplateSymbol::NormalGuard => Element {
                    kind: ElementKind::NormalGuard,
                    bars: table.normal_guard().clone(),
                },
                TemplateSymbol::CentralGuard => Element {
                    kind: ElementKind::CentralGuard,
                    bars: table.central_guard().clone(),
                },
                TemplateSymbol::Digit(set) => {
                    let value = digits[next_digit];
                    next_digit += 1;
                    Element {
                        kind: ElementKind::Digit { value, set },
                        bars: table.digit(set, value).clone(),
                    }
                }
            };
            bars.extend(&element.bars);
            elements.push(element);
        }

        EncodedCode {
            identifier: *identifier,
            bars,
            elements,
        }
    }

    /// The encoded identifier.
    #[inline]
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// The full 95-bar sequence.
    #[inline]
    pub fn bars(&self) -> &BarSequence {
        &self.bars
    }

    /// The 15 tagged elements, in symbol order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The printed label form, `D-DDDDDD-DDDDDD`.
    pub fn label(&self) -> String {
        self.identifier.dashed()
    }

    /// Element bar strings joined by dashes, e.g. `101-0001101-...-101`.
    pub fn dashed_bars(&self) -> String {
        self.elements
            .iter()
            .map(|e| e.bars.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}
