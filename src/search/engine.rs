use super::index::{IndexEntry, SearchIndex};
use super::normalizer::normalize;
use super::similarity::score;
use super::types::{BuildingRecord, SearchError};

/// A scored index entry borrowed from the index.
#[derive(Debug, Clone, Copy)]
pub struct ScoredEntry<'a> {
    pub entry: &'a IndexEntry,
    pub score: f64,
}

impl<'a> ScoredEntry<'a> {
    pub fn record(&self) -> &'a BuildingRecord {
        &self.entry.record
    }
}

fn normalized_query(query: &str) -> Result<String, SearchError> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Err(SearchError::InvalidQuery);
    }
    Ok(normalized)
}

/// Scores every entry against `query` and returns the best `k`, highest first.
///
/// Entries with equal scores keep their index order.
pub fn rank<'a>(
    index: &'a SearchIndex,
    query: &str,
    k: usize,
) -> Result<Vec<ScoredEntry<'a>>, SearchError> {
    let query = normalized_query(query)?;

    let mut scored: Vec<ScoredEntry<'a>> = index
        .entries()
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score(&query, &entry.normalized_address),
        })
        .collect();

    // stable: ties stay in dataset order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);

    tracing::debug!(
        "Ranked {} entries for query '{}', returning {}",
        index.len(),
        query,
        scored.len()
    );
    Ok(scored)
}

/// First record whose id equals `id` exactly.
pub fn find_by_id<'a>(index: &'a SearchIndex, id: &str) -> Option<&'a BuildingRecord> {
    index
        .entries()
        .iter()
        .map(|entry| &entry.record)
        .find(|record| record.id == id)
}

/// The single highest-scoring entry; the earliest one wins a tie.
///
/// No minimum score is applied, so any non-empty index yields a match.
pub fn find_best<'a>(
    index: &'a SearchIndex,
    query: &str,
) -> Result<Option<ScoredEntry<'a>>, SearchError> {
    let query = normalized_query(query)?;

    let mut best: Option<ScoredEntry<'a>> = None;
    for entry in index.entries() {
        let s = score(&query, &entry.normalized_address);
        match best {
            Some(current) if s <= current.score => {}
            _ => best = Some(ScoredEntry { entry, score: s }),
        }
    }

    Ok(best)
}
