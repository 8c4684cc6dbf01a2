//! Leptos components for the queue view.

pub mod queue_view;
