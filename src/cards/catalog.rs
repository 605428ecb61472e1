//! Card catalog for rank → attribute lookup.
//!
//! The `CardCatalog` is the engine's view of the external card table.
//! Supplying one before a game starts makes deck composition and scoring
//! data-driven; without one the engine falls back to the plain 1..=N rank
//! range with rank-valued scoring.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::data::CardData;

/// Lookup table from card rank to descriptive attributes.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{CardCatalog, CardData};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(1, CardData::new("Goblin", 2));
/// catalog.insert(2, CardData::new("Dragon", 9));
///
/// assert_eq!(catalog.power(2), Some(9));
/// assert_eq!(catalog.power(3), None);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardCatalog {
    rows: FxHashMap<u32, CardData>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row for a rank, replacing any existing row.
    pub fn insert(&mut self, rank: u32, data: CardData) {
        self.rows.insert(rank, data);
    }

    /// Get the row for a rank.
    #[must_use]
    pub fn get(&self, rank: u32) -> Option<&CardData> {
        self.rows.get(&rank)
    }

    /// Get the scoring power for a rank, if the rank has a row.
    #[must_use]
    pub fn power(&self, rank: u32) -> Option<i32> {
        self.rows.get(&rank).map(|data| data.power)
    }

    /// All ranks in the catalog, sorted ascending.
    ///
    /// Sorted so that deck construction from a catalog is deterministic
    /// for a given RNG seed regardless of map iteration order.
    #[must_use]
    pub fn ranks(&self) -> Vec<u32> {
        let mut ranks: Vec<u32> = self.rows.keys().copied().collect();
        ranks.sort_unstable();
        ranks
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the catalog has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over (rank, row) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &CardData)> {
        self.rows.iter().map(|(&rank, data)| (rank, data))
    }
}
