use super::*;
use leptos::prelude::*;
use std::sync::{Arc, Mutex};

fn session() -> Session {
    Session::new("4821", "alice")
}

fn recording_sink() -> (VoteSink, Arc<Mutex<Vec<RankingMutation>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let sink_sent = Arc::clone(&sent);
    let sink = VoteSink(Callback::new(move |mutation: RankingMutation| {
        sink_sent.lock().unwrap().push(mutation);
    }));
    (sink, sent)
}

// =============================================================
// static markup helpers
// =============================================================

#[test]
fn arrow_paths_point_in_vote_direction() {
    assert_eq!(arrow_path(VoteDirection::Up), "M2 26h32L18 10 2 26z");
    assert_eq!(arrow_path(VoteDirection::Down), "M2 10h32L18 26 2 10z");
}

#[test]
fn vote_control_classes_share_base_and_differ_by_modifier() {
    let up = vote_control_class(VoteDirection::Up);
    let down = vote_control_class(VoteDirection::Down);
    assert!(up.starts_with("queue__vote "));
    assert!(down.starts_with("queue__vote "));
    assert!(up.ends_with("--up"));
    assert!(down.ends_with("--down"));
}

// =============================================================
// vote_callback: toggle then submit
// =============================================================

#[test]
fn vote_callback_toggles_store_then_submits() {
    let owner = Owner::new();
    owner.set();
    let votes = RwSignal::new(VoteStateStore::new());
    let (sink, sent) = recording_sink();
    let on_up = vote_callback(votes, VoteClickHandler::new(VoteDirection::Up, session()), sink);

    on_up.run("Song A".to_owned());

    assert!(votes.with_untracked(|store| store.is_active("Song A", VoteDirection::Up)));
    assert!(!votes.with_untracked(|store| store.is_active("Song A", VoteDirection::Down)));
    let sent_now = sent.lock().unwrap().clone();
    assert_eq!(sent_now, vec![RankingMutation::for_vote("Song A", VoteDirection::Up, &session())]);
}

#[test]
fn vote_callback_reclick_untoggles_and_submits_again() {
    let owner = Owner::new();
    owner.set();
    let votes = RwSignal::new(VoteStateStore::new());
    let (sink, sent) = recording_sink();
    let on_up = vote_callback(votes, VoteClickHandler::new(VoteDirection::Up, session()), sink);

    on_up.run("Song A".to_owned());
    on_up.run("Song A".to_owned());

    assert!(!votes.with_untracked(|store| store.is_active("Song A", VoteDirection::Up)));
    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|m| m.is_increase && m.to_change == "Song A"));
}

#[test]
fn vote_callback_downvote_sends_decrease() {
    let owner = Owner::new();
    owner.set();
    let votes = RwSignal::new(VoteStateStore::new());
    let (sink, sent) = recording_sink();
    let on_down = vote_callback(votes, VoteClickHandler::new(VoteDirection::Down, session()), sink);

    on_down.run("Song B".to_owned());

    assert!(votes.with_untracked(|store| store.is_active("Song B", VoteDirection::Down)));
    assert!(!sent.lock().unwrap()[0].is_increase);
}

// =============================================================
// default sink
// =============================================================

#[test]
fn unsent_vote_message_names_track_and_endpoint() {
    let mutation = RankingMutation::for_vote("Song A", VoteDirection::Up, &session());
    let message = unsent_vote_message(&RankingConfig::default(), &mutation);
    assert!(message.contains("'Song A'"));
    assert!(message.contains("http://localhost:4567/rankings"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn default_sink_without_transport_reports_unsent_vote() {
    let owner = Owner::new();
    owner.set();
    let errors = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink_errors = Arc::clone(&errors);
    let on_error = Callback::new(move |message: String| sink_errors.lock().unwrap().push(message));
    let sink = default_sink(RankingConfig::default(), Some(on_error));

    sink.0
        .run(RankingMutation::for_vote("Song A", VoteDirection::Up, &session()));

    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Song A"));
}

// =============================================================
// server-rendered markup
// =============================================================

#[cfg(feature = "ssr")]
fn render_queue(tracks: Vec<Track>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        view! {
            <QueueView room_code="4821" user="alice" song_queue=Signal::derive(move || tracks.clone())/>
        }
        .to_html()
    })
}

#[cfg(feature = "ssr")]
#[test]
fn empty_queue_renders_heading_without_table() {
    let html = render_queue(Vec::new());
    assert!(html.contains("Queue"));
    assert!(!html.contains("<table"));
}

#[cfg(feature = "ssr")]
#[test]
fn untouched_track_renders_neutral_icons() {
    let html = render_queue(vec![Track::new("Song A", "https://img.test/a.jpg")]);
    assert!(html.contains("<table"));
    assert!(html.contains("Song A"));
    assert!(html.contains("https://img.test/a.jpg"));
    assert_eq!(html.matches("fill: #687074").count(), 2);
    assert!(!html.contains(ACCENT));
    assert!(!html.contains(";;"));
}

#[cfg(feature = "ssr")]
const ACCENT: &str = "fill: #f48024";

#[cfg(feature = "ssr")]
#[test]
fn upvoted_row_renders_accent_up_and_neutral_down() {
    use crate::state::queue::queue_rows;

    let mut store = VoteStateStore::new();
    VoteClickHandler::new(VoteDirection::Up, session()).apply(&mut store, "Song A");
    let row = queue_rows(&[Track::new("Song A", "https://img.test/a.jpg")], &store).remove(0);

    let owner = Owner::new();
    let html = owner.with(|| {
        let noop = Callback::new(|_: String| {});
        view! { <QueueRowView row=row on_up=noop on_down=noop/> }.to_html()
    });

    let up = html.find(ACCENT).unwrap();
    let down = html.find("fill: #687074").unwrap();
    assert!(up < down);
    assert_eq!(html.matches(ACCENT).count(), 1);
}
