//! Leg catalog — snapshot queries and the in-memory store.
//!
//! The engine itself only ever reads a [`Catalog`] snapshot handed in by the
//! caller. [`CatalogStore`] is the in-process persistence collaborator:
//! it owns the leg records, assigns `IG######` identifiers, and produces
//! snapshots for the combinator to search.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{ComputedLeg, LegType};

/// Id prefix for catalog legs.
const ID_PREFIX: &str = "IG";

/// Width of the zero-padded numeric suffix in a leg id.
const ID_DIGITS: usize = 6;

/// Optional filters for a catalog query. Unset fields match everything.
/// Origin/destination/client comparisons expect normalized (uppercased)
/// labels, which is what the calculator produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegQuery {
    pub leg_type: Option<LegType>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub client: Option<String>,
}

impl LegQuery {
    fn matches(&self, leg: &ComputedLeg) -> bool {
        if let Some(t) = self.leg_type {
            if leg.leg_type != t {
                return false;
            }
        }
        if let Some(origin) = &self.origin {
            if &leg.origin != origin {
                return false;
            }
        }
        if let Some(destination) = &self.destination {
            if &leg.destination != destination {
                return false;
            }
        }
        if let Some(client) = &self.client {
            if leg.client.as_deref() != Some(client.as_str()) {
                return false;
            }
        }
        true
    }
}

/// A read-only snapshot of priced legs.
///
/// Iteration order is insertion order, which fixes the combinator's
/// candidate discovery order (and therefore its tie-breaking).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    legs: Vec<ComputedLeg>,
}

impl Catalog {
    pub fn new(legs: Vec<ComputedLeg>) -> Self {
        Self { legs }
    }

    /// Every leg in the snapshot, in insertion order.
    pub fn all(&self) -> &[ComputedLeg] {
        &self.legs
    }

    /// Legs matching the query, in insertion order.
    pub fn query<'a>(&'a self, query: &'a LegQuery) -> impl Iterator<Item = &'a ComputedLeg> {
        self.legs.iter().filter(move |leg| query.matches(leg))
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl FromIterator<ComputedLeg> for Catalog {
    fn from_iter<I: IntoIterator<Item = ComputedLeg>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Thread-safe in-memory leg store.
///
/// Owns the leg records and the id sequence. Ids are `IG` plus a zero-padded
/// sequential integer derived from the maximum existing suffix; assignment
/// re-checks for a collision before committing, matching the persistence
/// contract the hosted store follows.
#[derive(Debug, Default)]
pub struct CatalogStore {
    legs: RwLock<Vec<ComputedLeg>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unassigned id given the legs currently held.
    fn next_id(legs: &[ComputedLeg]) -> String {
        let max_suffix = legs
            .iter()
            .filter_map(|leg| leg.id.as_deref())
            .filter_map(|id| id.strip_prefix(ID_PREFIX))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("{ID_PREFIX}{:0width$}", max_suffix + 1, width = ID_DIGITS)
    }

    /// Insert a computed leg, assigning and returning its id.
    ///
    /// Any id already present on the leg is discarded; the store is the only
    /// id authority.
    pub fn insert(&self, mut leg: ComputedLeg) -> String {
        let mut legs = self.legs.write();
        let mut id = Self::next_id(&legs);
        // Collision re-check before commit
        while legs.iter().any(|l| l.id.as_deref() == Some(id.as_str())) {
            warn!(id = %id, "id collision on insert, advancing sequence");
            let suffix: u64 = id[ID_PREFIX.len()..].parse().unwrap_or(0);
            id = format!("{ID_PREFIX}{:0width$}", suffix + 1, width = ID_DIGITS);
        }
        leg.id = Some(id.clone());
        debug!(id = %id, leg_type = %leg.leg_type, origin = %leg.origin, destination = %leg.destination, "leg inserted");
        legs.push(leg);
        id
    }

    /// Replace the leg with the given id. The stored id is preserved;
    /// returns false when the id is unknown.
    pub fn update(&self, id: &str, mut leg: ComputedLeg) -> bool {
        let mut legs = self.legs.write();
        match legs.iter_mut().find(|l| l.id.as_deref() == Some(id)) {
            Some(slot) => {
                leg.id = Some(id.to_string());
                *slot = leg;
                debug!(id, "leg updated");
                true
            }
            None => false,
        }
    }

    /// Remove the leg with the given id; returns false when unknown.
    pub fn delete(&self, id: &str) -> bool {
        let mut legs = self.legs.write();
        let before = legs.len();
        legs.retain(|l| l.id.as_deref() != Some(id));
        let removed = legs.len() < before;
        if removed {
            debug!(id, "leg deleted");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<ComputedLeg> {
        self.legs
            .read()
            .iter()
            .find(|l| l.id.as_deref() == Some(id))
            .cloned()
    }

    /// A point-in-time snapshot for querying and combination search.
    pub fn snapshot(&self) -> Catalog {
        Catalog::new(self.legs.read().clone())
    }

    pub fn len(&self) -> usize {
        self.legs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.read().is_empty()
    }
}
