//! Optimistic vote toggle state for one mounted queue view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store records which vote controls the local listener has switched on.
//! It is never reconciled with the ranking service; a submission failure
//! leaves the toggle as clicked.

#[cfg(test)]
#[path = "votes_test.rs"]
mod votes_test;

use std::collections::HashMap;

use crate::net::types::VoteDirection;

/// Toggle state for a single track.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteRecord {
    pub track_name: String,
    pub upvoted: bool,
    pub downvoted: bool,
}

impl VoteRecord {
    fn new(track_name: &str) -> Self {
        Self { track_name: track_name.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn get(&self, direction: VoteDirection) -> bool {
        match direction {
            VoteDirection::Up => self.upvoted,
            VoteDirection::Down => self.downvoted,
        }
    }

    fn flip(&mut self, direction: VoteDirection) -> bool {
        let field = match direction {
            VoteDirection::Up => &mut self.upvoted,
            VoteDirection::Down => &mut self.downvoted,
        };
        *field = !*field;
        *field
    }
}

/// Per-session vote toggles keyed by track name.
///
/// Records are created lazily on the first toggle of either direction and
/// live as long as the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteStateStore {
    records: HashMap<String, VoteRecord>,
}

impl VoteStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current toggle for `track_name` in `direction`. Unknown tracks are `false`.
    #[must_use]
    pub fn is_active(&self, track_name: &str, direction: VoteDirection) -> bool {
        self.records
            .get(track_name)
            .is_some_and(|record| record.get(direction))
    }

    /// Flip `direction` for `track_name` and return the new value.
    ///
    /// Only the named direction changes. The first toggle on a track creates
    /// its record with that direction on.
    pub fn toggle(&mut self, track_name: &str, direction: VoteDirection) -> bool {
        self.records
            .entry(track_name.to_owned())
            .or_insert_with(|| VoteRecord::new(track_name))
            .flip(direction)
    }

    #[must_use]
    pub fn record(&self, track_name: &str) -> Option<&VoteRecord> {
        self.records.get(track_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
