use super::normalizer::normalize;
use super::types::BuildingRecord;

/// A record with its display address and the normalized form used for scoring.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub record: BuildingRecord,
    pub address: String,
    pub normalized_address: String,
}

impl IndexEntry {
    fn new(record: BuildingRecord) -> Self {
        let address = record.formatted_address();
        let normalized_address = normalize(&address);
        Self {
            record,
            address,
            normalized_address,
        }
    }
}

/// The searchable view of the dataset, in dataset order.
///
/// Built once before serving and only read afterwards, so it is shared
/// between request handlers behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Indexes every record, keeping input order and any duplicates.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = BuildingRecord>,
    {
        let entries: Vec<IndexEntry> = records.into_iter().map(IndexEntry::new).collect();
        tracing::debug!("Built search index with {} entries", entries.len());
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
