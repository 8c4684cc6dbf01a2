//! Client-side state for the queue view.
//!
//! DESIGN
//! ======
//! `votes` owns the optimistic per-track toggle state; `queue` derives the
//! rendered rows from it and turns clicks into ranking mutations.

pub mod queue;
pub mod votes;
