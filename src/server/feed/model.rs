//! Wire types for the external cricket match feed.

use serde::Deserialize;

/// Response envelope every feed endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct FeedEnvelope<T> {
    pub status: String,
    pub data: Option<T>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl<T> FeedEnvelope<T> {
    pub fn failure_reason(&self) -> String {
        self.reason
            .clone()
            .unwrap_or_else(|| format!("feed status '{}'", self.status))
    }
}

/// Coarse match phase tag carried in the feed's `ms` field.
///
/// The feed occasionally introduces new tags; anything unrecognized maps to
/// [`MatchPhase::Unknown`], which the synchronizer treats as no information
/// rather than a signal to move a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    Fixture,
    Live,
    Result,
    #[serde(other)]
    #[default]
    Unknown,
}

/// One match as reported by the feed's score listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedMatch {
    pub id: String,
    pub t1: String,
    pub t2: String,
    #[serde(default)]
    pub t1s: Option<String>,
    #[serde(default)]
    pub t2s: Option<String>,
    #[serde(default)]
    pub ms: MatchPhase,
    #[serde(rename = "dateTimeGMT")]
    pub start_time: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(rename = "matchType", default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One side's squad as reported by the feed's squad endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSquad {
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(default)]
    pub players: Vec<FeedSquadPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedSquadPlayer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}
