//! Odometer-order enumeration of fixed-length words
//!
//! Words over a finite ordered alphabet are stepped like a mechanical
//! odometer: the rightmost position advances fastest, a completed position
//! carries one step into its left neighbor, and the maximal word wraps to
//! the minimal one. The walker is an explicit state machine over an index
//! array, so word length never shows up as recursion depth.

use linea_core::{LineaError, LineaResult};

/// A finite ordered alphabet of distinct symbols
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build from an ordered symbol sequence. Must be non-empty and
    /// duplicate-free.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> LineaResult<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(LineaError::BadAlphabet("no symbols".into()));
        }
        for (i, &c) in symbols.iter().enumerate() {
            if symbols[..i].contains(&c) {
                return Err(LineaError::BadAlphabet(format!("duplicate symbol {c:?}")));
            }
        }
        Ok(Alphabet { symbols })
    }

    /// The decimal digits `0` through `9`.
    pub fn decimal() -> Self {
        Alphabet { symbols: ('0'..='9').collect() }
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at ordinal `index`.
    #[inline]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Ordinal of `symbol`, if it belongs to the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    /// Translate a word into its per-position ordinals.
    fn word_to_indices(&self, word: &str) -> LineaResult<Vec<usize>> {
        if word.is_empty() {
            return Err(LineaError::EmptyWord);
        }
        word.chars()
            .map(|c| {
                self.index_of(c).ok_or_else(|| LineaError::WordOutsideAlphabet {
                    word: word.to_owned(),
                    symbol: c,
                })
            })
            .collect()
    }

    fn indices_to_word(&self, indices: &[usize]) -> String {
        indices.iter().map(|&i| self.symbols[i]).collect()
    }
}

/// Infinite cyclic enumerator over fixed-length words, starting at an
/// arbitrary word. As an iterator it yields the start word first and never
/// ends; a full period visits every word of that length exactly once.
#[derive(Clone, Debug)]
pub struct Odometer {
    alphabet: Alphabet,
    positions: Vec<usize>,
    started: bool,
}

impl Odometer {
    /// Start a walker at `start`, validated against the alphabet.
    pub fn new(alphabet: Alphabet, start: &str) -> LineaResult<Self> {
        let positions = alphabet.word_to_indices(start)?;
        Ok(Odometer {
            alphabet,
            positions,
            started: false,
        })
    }

    /// The word the walker currently points at.
    pub fn current(&self) -> String {
        self.alphabet.indices_to_word(&self.positions)
    }

    /// Step to the successor word. O(length) worst case when every
    /// position carries, amortized O(1).
    pub fn advance(&mut self) {
        let base = self.alphabet.len();
        for position in self.positions.iter_mut().rev() {
            *position += 1;
            if *position < base {
                return;
            }
            // Carry into the next position; the maximal word wraps to
            // the minimal one when the carry falls off the left end.
            *position = 0;
        }
    }
}

impl Iterator for Odometer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        Some(self.current())
    }
}

/// One bounded round of the cycle: yields `start`, then successors, ending
/// just before the first recurrence of the stop word (by default `start`
/// itself). A default round therefore visits every word of the start's
/// length exactly once.
pub fn walk_round(alphabet: Alphabet, start: &str) -> LineaResult<WalkRound> {
    let odometer = Odometer::new(alphabet, start)?;
    let stop = start.to_owned();
    Ok(WalkRound {
        odometer,
        stop,
        include_last: false,
        yielded_any: false,
        done: false,
    })
}

/// Bounded iterator produced by [`walk_round`]
#[derive(Clone, Debug)]
pub struct WalkRound {
    odometer: Odometer,
    stop: String,
    include_last: bool,
    yielded_any: bool,
    done: bool,
}

impl WalkRound {
    /// Stop at the first recurrence of `stop` instead of the start word.
    /// Must have the start word's length and lie within the alphabet.
    pub fn stop_at(mut self, stop: &str) -> LineaResult<Self> {
        let indices = self.odometer.alphabet.word_to_indices(stop)?;
        if indices.len() != self.odometer.positions.len() {
            return Err(LineaError::WordLengthMismatch {
                expected: self.odometer.positions.len(),
                actual: indices.len(),
            });
        }
        self.stop = stop.to_owned();
        Ok(self)
    }

    /// Also yield the closing stop word itself.
    pub fn include_last(mut self, include: bool) -> Self {
        self.include_last = include;
        self
    }
}

impl Iterator for WalkRound {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let word = self.odometer.next()?;
        if self.yielded_any && word == self.stop {
            self.done = true;
            return self.include_last.then_some(word);
        }
        self.yielded_any = true;
        Some(word)
    }
}
