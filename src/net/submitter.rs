//! Vote submission to the ranking service.
//!
//! ERROR HANDLING
//! ==============
//! Submission failures are caught here, logged, and handed back as a
//! `Result`. Nothing retries, and the optimistic toggle in the vote store is
//! never rolled back; the UI and the service may disagree until the host
//! refreshes the queue.

#[cfg(test)]
#[path = "submitter_test.rs"]
mod submitter_test;

use super::transport::RankingTransport;
use super::types::{RankingMutation, RankingResponse, Session, SubmitError, VoteDirection};

/// Builds and sends ranking mutations over a [`RankingTransport`].
pub struct VoteSubmitter<T> {
    transport: T,
}

impl<T: RankingTransport> VoteSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submit a click on `direction` for `track_name` within `session`.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`SubmitError`] after logging it.
    pub async fn submit(
        &self,
        track_name: &str,
        direction: VoteDirection,
        session: &Session,
    ) -> Result<RankingResponse, SubmitError> {
        self.send(&RankingMutation::for_vote(track_name, direction, session))
            .await
    }

    /// Send an already-built mutation and log the outcome.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`SubmitError`] after logging it.
    pub async fn send(&self, mutation: &RankingMutation) -> Result<RankingResponse, SubmitError> {
        match self.transport.post_mutation(mutation).await {
            Ok(resp) => {
                leptos::logging::log!(
                    "vote submitted: track={} is_increase={} user_list={:?}",
                    mutation.to_change,
                    mutation.is_increase,
                    resp.user_list
                );
                Ok(resp)
            }
            Err(e) => {
                leptos::logging::warn!(
                    "vote submission failed: track={} is_increase={} error={e}",
                    mutation.to_change,
                    mutation.is_increase
                );
                Err(e)
            }
        }
    }
}

/// Spawn a submission on the UI task queue without waiting for it.
///
/// `on_error` receives the error message after it has been logged.
#[cfg(feature = "hydrate")]
pub fn dispatch<T>(
    submitter: VoteSubmitter<T>,
    mutation: RankingMutation,
    on_error: Option<leptos::prelude::Callback<String>>,
) where
    T: RankingTransport + 'static,
{
    use leptos::prelude::*;

    leptos::task::spawn_local(async move {
        if let Err(e) = submitter.send(&mutation).await {
            if let Some(on_error) = on_error {
                on_error.run(e.to_string());
            }
        }
    });
}
