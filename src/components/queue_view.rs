//! Song queue table with per-track vote controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns the queue and the room session and passes both in as
//! props. This component owns the vote store for as long as it is mounted;
//! clicks toggle the store first and then hand the ranking mutation to a
//! [`VoteSink`]. Hosts may provide their own sink through context; otherwise
//! the hydrated build posts with the browser transport.

#[cfg(test)]
#[path = "queue_view_test.rs"]
mod queue_view_test;

use leptos::prelude::*;

use crate::config::RankingConfig;
use crate::net::types::{RankingMutation, Session, Track, VoteDirection};
use crate::state::queue::{QueueRow, VoteClickHandler, duplicate_track_names, queue_rows};
use crate::state::votes::VoteStateStore;

/// SVG path for a vote arrow pointing in `direction`.
fn arrow_path(direction: VoteDirection) -> &'static str {
    match direction {
        VoteDirection::Up => "M2 26h32L18 10 2 26z",
        VoteDirection::Down => "M2 10h32L18 26 2 10z",
    }
}

fn vote_control_class(direction: VoteDirection) -> &'static str {
    match direction {
        VoteDirection::Up => "queue__vote queue__vote--up",
        VoteDirection::Down => "queue__vote queue__vote--down",
    }
}

/// Receives every vote mutation produced by a click.
///
/// Provide one with `provide_context` to route submissions through a custom
/// transport (native hosts, tests). The sink must not block; it is called
/// from the click handler after the store has been toggled.
#[derive(Clone, Copy)]
pub struct VoteSink(pub Callback<RankingMutation>);

/// The ordered queue with upvote/downvote controls per track.
///
/// Reads an optional [`VoteSink`] and [`RankingConfig`] from context. Without
/// a sink, the default one uses the config's endpoint (default endpoint if
/// absent). An empty queue renders only the heading.
#[component]
pub fn QueueView(
    #[prop(into)] room_code: String,
    #[prop(into)] user: String,
    #[prop(into)] song_queue: Signal<Vec<Track>>,
    #[prop(optional)] on_submit_error: Option<Callback<String>>,
) -> impl IntoView {
    let session = Session::new(room_code, user);
    let votes = RwSignal::new(VoteStateStore::new());
    let sink = use_context::<VoteSink>().unwrap_or_else(|| {
        default_sink(use_context::<RankingConfig>().unwrap_or_default(), on_submit_error)
    });

    let on_up = vote_callback(votes, VoteClickHandler::new(VoteDirection::Up, session.clone()), sink);
    let on_down = vote_callback(votes, VoteClickHandler::new(VoteDirection::Down, session), sink);

    Effect::new(move || {
        song_queue.with(|tracks| {
            for name in duplicate_track_names(tracks) {
                leptos::logging::warn!("duplicate track name in queue, rows share vote state: {name}");
            }
        });
    });

    view! {
        <div class="queue">
            <h2 class="queue__title">"Queue"</h2>
            <Show when=move || song_queue.with(|tracks| !tracks.is_empty())>
                <table class="queue__table">
                    <tbody>
                        {move || {
                            votes
                                .with(|store| song_queue.with(|tracks| queue_rows(tracks, store)))
                                .into_iter()
                                .map(|row| view! { <QueueRowView row=row on_up=on_up on_down=on_down/> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn QueueRowView(row: QueueRow, on_up: Callback<String>, on_down: Callback<String>) -> impl IntoView {
    let up_name = row.track_name.clone();
    let down_name = row.track_name.clone();
    let up_style = row.up_color.fill_style();
    let down_style = row.down_color.fill_style();

    view! {
        <tr class="queue__row">
            <td class="queue__votes">
                <span class=vote_control_class(VoteDirection::Up) on:click=move |_| on_up.run(up_name.clone())>
                    <svg width="36" height="36" aria-hidden="true">
                        <path d=arrow_path(VoteDirection::Up) style=up_style></path>
                    </svg>
                </span>
                <span class=vote_control_class(VoteDirection::Down) on:click=move |_| on_down.run(down_name.clone())>
                    <svg width="36" height="36" aria-hidden="true">
                        <path d=arrow_path(VoteDirection::Down) style=down_style></path>
                    </svg>
                </span>
            </td>
            <td class="queue__artwork">
                <img src=row.artwork_url width="50" alt=""/>
            </td>
            <td class="queue__name">{row.track_name}</td>
        </tr>
    }
}

fn vote_callback(votes: RwSignal<VoteStateStore>, handler: VoteClickHandler, sink: VoteSink) -> Callback<String> {
    Callback::new(move |track_name: String| {
        let mut mutation = None;
        votes.update(|store| mutation = Some(handler.apply(store, &track_name)));
        if let Some(mutation) = mutation {
            sink.0.run(mutation);
        }
    })
}

/// Sink used when the host provides none.
///
/// Hydrated builds dispatch through the browser transport. Other builds
/// have no UI task queue to submit on, so the vote is logged as unsent and
/// reported through `on_error`.
fn default_sink(config: RankingConfig, on_error: Option<Callback<String>>) -> VoteSink {
    VoteSink(Callback::new(move |mutation: RankingMutation| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::submitter::{VoteSubmitter, dispatch};
            use crate::net::transport::BrowserTransport;

            dispatch(VoteSubmitter::new(BrowserTransport::new(config.endpoint.clone())), mutation, on_error);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let message = unsent_vote_message(&config, &mutation);
            leptos::logging::warn!("{message}");
            if let Some(on_error) = on_error {
                on_error.run(message);
            }
        }
    }))
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unsent_vote_message(config: &RankingConfig, mutation: &RankingMutation) -> String {
    format!(
        "vote for '{}' not sent to {}: no ranking transport in this build",
        mutation.to_change, config.endpoint
    )
}
