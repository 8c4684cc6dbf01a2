//! Wire types shared between the queue view and the ranking service.
//!
//! DESIGN
//! ======
//! Inbound queue items use the host page's prop shape (`name`, `artwork`).
//! Outbound votes use the ranking service's camelCase keys verbatim so the
//! JSON body matches what `/rankings` expects.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while submitting a vote to the ranking service.
///
/// Submission failures are logged and otherwise ignored by the queue view;
/// they never roll back the local toggle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("ranking request failed: {0}")]
    Request(String),

    /// The ranking service returned a non-success HTTP status.
    #[error("ranking response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body was not valid ranking JSON.
    #[error("ranking response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

// =============================================================================
// QUEUE INPUT
// =============================================================================

/// A queue item as supplied by the host page.
///
/// `name` doubles as the track identifier; the queue assumes it is unique
/// among the tracks currently displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(rename = "artwork")]
    pub artwork_url: String,
}

impl Track {
    pub fn new(name: impl Into<String>, artwork_url: impl Into<String>) -> Self {
        Self { name: name.into(), artwork_url: artwork_url.into() }
    }
}

/// The voter context attached to every outgoing vote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub room_code: String,
    pub user_name: String,
}

impl Session {
    pub fn new(room_code: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self { room_code: room_code.into(), user_name: user_name.into() }
    }
}

/// Which vote control was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// `true` for the upvote control. Sent as `isIncrease`.
    #[must_use]
    pub fn is_increase(self) -> bool {
        matches!(self, Self::Up)
    }
}

// =============================================================================
// RANKING WIRE TYPES
// =============================================================================

/// Body of `POST /rankings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingMutation {
    pub to_change: String,
    pub is_increase: bool,
    pub is_reset: bool,
    pub r_code: String,
    pub user: String,
}

impl RankingMutation {
    /// Build the mutation for a click on `direction` for `track_name`.
    ///
    /// `is_increase` follows the control that was clicked, not the toggle
    /// state it produced: un-voting an upvote still sends `isIncrease: true`.
    pub fn for_vote(track_name: &str, direction: VoteDirection, session: &Session) -> Self {
        Self {
            to_change: track_name.to_owned(),
            is_increase: direction.is_increase(),
            is_reset: false,
            r_code: session.room_code.clone(),
            user: session.user_name.clone(),
        }
    }
}

/// Response from the ranking service.
///
/// `/rankings` answers with `songList` and `name`; other room endpoints
/// answer with `userList`. All fields are optional and only ever logged.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    #[serde(default)]
    pub user_list: Option<serde_json::Value>,
    #[serde(default)]
    pub song_list: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
}
