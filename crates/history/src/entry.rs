use serde::{Deserialize, Serialize};

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: String,
    pub score: u32,
    /// Milliseconds since the Unix epoch when the game ended
    pub timestamp_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

impl ScoreEntry {
    pub fn new(id: impl Into<String>, score: u32, timestamp_ms: u64) -> Self {
        Self {
            id: id.into(),
            score,
            timestamp_ms,
            player_name: None,
        }
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }
}
