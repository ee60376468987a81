//! In-memory issued-code registry and sheet-filling simulation

use rand::Rng;

use linea_core::{Identifier, LineaResult};
use linea_issue::CodeGenerator;
use linea_symbol::EncodedCode;

/// A registry of issued identifiers, standing in for the caller's
/// database. Inserts are serialized between `generate` calls, matching
/// the generator's contract.
#[derive(Clone, Debug, Default)]
pub struct CodeRegistry {
    issued: Vec<Identifier>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        CodeRegistry { issued: Vec::new() }
    }

    /// Record an issued identifier.
    pub fn insert(&mut self, id: Identifier) {
        self.issued.push(id);
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.issued.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.issued.iter()
    }

    /// Issue and encode `count` fresh codes, recording each before the
    /// next draw — the batch flow a sheet layout collaborator runs.
    pub fn fill_sheet<R: Rng + ?Sized>(
        &mut self,
        generator: &CodeGenerator,
        rng: &mut R,
        count: usize,
    ) -> LineaResult<Vec<EncodedCode>> {
        let mut sheet = Vec::with_capacity(count);
        for _ in 0..count {
            let id = generator.generate(rng, self.issued.iter())?;
            self.insert(id);
            sheet.push(EncodedCode::from_identifier(&id));
        }
        Ok(sheet)
    }
}
