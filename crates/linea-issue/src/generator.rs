//! Collision-free code issuance under a fixed prefix

use std::collections::HashSet;

use rand::rngs::OsRng;
use rand::Rng;
use tracing::{debug, trace};

use linea_core::{Identifier, LineaError, LineaResult, PAYLOAD_DIGITS};

use crate::odometer::{walk_round, Alphabet};

/// Issues fresh identifiers whose payload starts with a fixed digit prefix.
///
/// The suffix space is walked in odometer order starting from a random
/// candidate, so a `generate` call either finds a free suffix or proves
/// the whole space occupied. The caller owns the used set and must record
/// each issued code before the next call that has to avoid it.
#[derive(Clone, Debug)]
pub struct CodeGenerator {
    prefix: String,
}

impl CodeGenerator {
    /// A generator for `prefix`: a digit string shorter than the 12-digit
    /// payload. The empty prefix spans the whole payload space.
    pub fn new(prefix: &str) -> LineaResult<Self> {
        if prefix.len() >= PAYLOAD_DIGITS || prefix.chars().any(|c| !c.is_ascii_digit()) {
            return Err(LineaError::BadPrefix(prefix.to_owned()));
        }
        Ok(CodeGenerator { prefix: prefix.to_owned() })
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Length of the free suffix, 1 to 12 digits.
    #[inline]
    pub fn suffix_len(&self) -> usize {
        PAYLOAD_DIGITS - self.prefix.len()
    }

    /// Draw a fresh identifier not present in `used`.
    ///
    /// Only codes in `used` that share the prefix matter; the rest are
    /// ignored. Fails with the exhaustion error once the odometer round
    /// returns to the initial candidate with every suffix taken.
    pub fn generate<'a, R, I>(&self, rng: &mut R, used: I) -> LineaResult<Identifier>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Identifier>,
    {
        let taken = self.project_used(used);
        let candidate = self.draw_suffix(rng);

        let mut steps = 0usize;
        for suffix in walk_round(Alphabet::decimal(), &candidate)? {
            if taken.contains(&suffix) {
                trace!(%suffix, "suffix already issued, stepping");
                steps += 1;
                continue;
            }
            debug!(steps, %suffix, prefix = %self.prefix, "issued fresh suffix");
            return format!("{}{}", self.prefix, suffix).parse();
        }
        Err(LineaError::SpaceExhausted { prefix: self.prefix.clone() })
    }

    /// `generate` with the operating system RNG.
    pub fn generate_with_os_rng<'a, I>(&self, used: I) -> LineaResult<Identifier>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        self.generate(&mut OsRng, used)
    }

    /// Project the used set onto this prefix: keep payloads that share it,
    /// stripped of both the prefix and the trailing check digit.
    fn project_used<'a, I>(&self, used: I) -> HashSet<String>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        used.into_iter()
            .filter_map(|id| {
                let payload: String =
                    id.payload().iter().map(|&d| char::from(b'0' + d)).collect();
                payload
                    .strip_prefix(self.prefix.as_str())
                    .map(str::to_owned)
            })
            .collect()
    }

    fn draw_suffix<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.suffix_len())
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}
