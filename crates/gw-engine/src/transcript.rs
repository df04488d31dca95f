//! A record of the questions answered in a session.

use serde::{Deserialize, Serialize};

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// 1-based question number.
    pub number: u32,
    /// The prompt as shown to the player.
    pub prompt: String,
    /// The validated answer.
    pub answer: String,
    /// Candidates left after the answer was applied.
    pub remaining: usize,
}

/// Chronological list of answered questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// All entries in order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was answered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as plain text, one line per question.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            out.push_str(&format!(
                "{:>2}. {} {} -> {} left\n",
                e.number, e.prompt, e.answer, e.remaining
            ));
        }
        out
    }

    /// Render as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
