//! # spothouse-queue
//!
//! Leptos frontend for a shared listening room's song queue. Renders the
//! ordered queue supplied by the host page and lets the local listener cast
//! upvotes and downvotes on each track.
//!
//! Votes are optimistic: the local toggle state flips immediately and drives
//! icon colors, while the ranking service is notified in the background.
//! Nothing here reads server state back; the host re-syncs by refreshing the
//! queue it passes in.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;
