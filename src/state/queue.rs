//! Render model and click wiring for the queue view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `queue_rows` is a pure function of the ordered track list and the vote
//! store, so the component only has to re-run it when either changes.
//! `VoteClickHandler` carries its session explicitly instead of capturing
//! room code and user from the surrounding component.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use std::collections::HashMap;

use super::votes::VoteStateStore;
use crate::net::types::{RankingMutation, Session, Track, VoteDirection};
use crate::util::color::{ColorToken, color_for};

/// One rendered queue row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueRow {
    pub track_name: String,
    pub artwork_url: String,
    pub up_color: ColorToken,
    pub down_color: ColorToken,
}

/// Derive one row per track, in queue order.
pub fn queue_rows(tracks: &[Track], store: &VoteStateStore) -> Vec<QueueRow> {
    tracks
        .iter()
        .map(|track| QueueRow {
            track_name: track.name.clone(),
            artwork_url: track.artwork_url.clone(),
            up_color: color_for(store.is_active(&track.name, VoteDirection::Up)),
            down_color: color_for(store.is_active(&track.name, VoteDirection::Down)),
        })
        .collect()
}

/// Track names that appear more than once, in first-seen order.
///
/// Votes are keyed by name, so duplicated tracks share one toggle state.
pub fn duplicate_track_names(tracks: &[Track]) -> Vec<&str> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut dupes = Vec::new();
    for track in tracks {
        let count = seen.entry(track.name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            dupes.push(track.name.as_str());
        }
    }
    dupes
}

/// Click handler for one vote control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteClickHandler {
    direction: VoteDirection,
    session: Session,
}

impl VoteClickHandler {
    pub fn new(direction: VoteDirection, session: Session) -> Self {
        Self { direction, session }
    }

    #[must_use]
    pub fn direction(&self) -> VoteDirection {
        self.direction
    }

    /// Toggle this handler's direction for `track_name` and return the
    /// mutation to submit for the click.
    pub fn apply(&self, store: &mut VoteStateStore, track_name: &str) -> RankingMutation {
        store.toggle(track_name, self.direction);
        RankingMutation::for_vote(track_name, self.direction, &self.session)
    }
}
