//! Table construction from parsed records.
//!
//! The forward map is filled from the records; the inverse map is then
//! derived from the forward map alone so both directions always agree.

use std::collections::{BTreeMap, BTreeSet};

use adcat_model::{SourceCode, TaxonomyCategory};

use crate::parser::CorrespondenceRecord;

/// Source codes below this are stored in a dense table indexed by code.
/// Larger codes go to a sorted map, so one huge code costs one entry.
pub const DENSE_SOURCE_LIMIT: SourceCode = 1 << 16;

/// Per-source-code storage: a dense vector for small codes, a map above
/// [`DENSE_SOURCE_LIMIT`].
#[derive(Debug, Clone)]
pub struct SourceTable<T> {
    dense: Vec<T>,
    sparse: BTreeMap<SourceCode, T>,
}

impl<T: Default + Clone> SourceTable<T> {
    /// Empty table whose dense part covers every observed code below the limit.
    fn for_codes<'a>(codes: impl IntoIterator<Item = &'a SourceCode>) -> Self {
        let dense_len = codes
            .into_iter()
            .filter(|code| **code < DENSE_SOURCE_LIMIT)
            .max()
            .map_or(0, |max| *max as usize + 1);

        Self {
            dense: vec![T::default(); dense_len],
            sparse: BTreeMap::new(),
        }
    }

    fn slot_mut(&mut self, code: SourceCode) -> &mut T {
        match self.dense.get_mut(code as usize) {
            Some(slot) => slot,
            None => self.sparse.entry(code).or_default(),
        }
    }
}

impl<T> SourceTable<T> {
    pub fn get(&self, code: SourceCode) -> Option<&T> {
        self.dense
            .get(code as usize)
            .or_else(|| self.sparse.get(&code))
    }

    /// Every slot in code order, including empty dense slots.
    pub fn iter(&self) -> impl Iterator<Item = (SourceCode, &T)> + '_ {
        self.dense
            .iter()
            .enumerate()
            .map(|(index, value)| (index as SourceCode, value))
            .chain(self.sparse.iter().map(|(code, value)| (*code, value)))
    }

    /// Length of the dense part (largest small code + 1, or 0).
    pub fn dense_len(&self) -> usize {
        self.dense.len()
    }

    /// Number of codes stored in the sparse part.
    pub fn sparse_len(&self) -> usize {
        self.sparse.len()
    }

    /// Largest code with a slot.
    pub fn max_code(&self) -> Option<SourceCode> {
        self.sparse
            .last_key_value()
            .map(|(code, _)| *code)
            .or_else(|| self.dense.len().checked_sub(1).map(|max| max as SourceCode))
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty() && self.sparse.is_empty()
    }
}

/// The four frozen lookup structures.
#[derive(Debug, Clone)]
pub struct MappingTables<C> {
    /// Destination category -> source codes.
    pub(crate) forward: BTreeMap<C, BTreeSet<SourceCode>>,
    /// Source code -> destination categories.
    pub(crate) inverse: SourceTable<BTreeSet<C>>,
    pub(crate) category_descriptions: BTreeMap<C, String>,
    /// Empty where no record named the code.
    pub(crate) source_descriptions: SourceTable<String>,
}

impl<C: TaxonomyCategory> MappingTables<C> {
    /// Build all tables from validated records.
    ///
    /// Duplicate (category, code) pairs collapse into one entry. When several
    /// records describe the same category or source code, the last one wins.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CorrespondenceRecord<C>>,
    {
        let mut forward: BTreeMap<C, BTreeSet<SourceCode>> = BTreeMap::new();
        let mut category_descriptions = BTreeMap::new();
        let mut observed_sources: BTreeMap<SourceCode, String> = BTreeMap::new();

        for record in records {
            forward
                .entry(record.category)
                .or_default()
                .insert(record.source_code);
            category_descriptions.insert(record.category, record.category_description);
            observed_sources.insert(record.source_code, record.source_description);
        }

        let inverse = invert(&forward);

        let mut source_descriptions = SourceTable::for_codes(observed_sources.keys());
        for (code, description) in observed_sources {
            *source_descriptions.slot_mut(code) = description;
        }

        Self {
            forward,
            inverse,
            category_descriptions,
            source_descriptions,
        }
    }

    /// Number of distinct source codes named by any record.
    pub fn source_count(&self) -> usize {
        self.inverse
            .iter()
            .filter(|(_, categories)| !categories.is_empty())
            .count()
    }

    /// Number of (category, source code) pairs.
    pub fn pair_count(&self) -> usize {
        self.forward.values().map(BTreeSet::len).sum()
    }
}

/// Turn the forward multimap into a table keyed by source code.
fn invert<C: TaxonomyCategory>(
    forward: &BTreeMap<C, BTreeSet<SourceCode>>,
) -> SourceTable<BTreeSet<C>> {
    let mut inverse: SourceTable<BTreeSet<C>> = SourceTable::for_codes(forward.values().flatten());
    for (category, codes) in forward {
        for code in codes {
            inverse.slot_mut(*code).insert(*category);
        }
    }
    inverse
}
