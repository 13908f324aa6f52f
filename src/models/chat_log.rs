use serde::{Deserialize, Serialize};

/// Line prefix marking a user turn
pub const USER_PREFIX: &str = "User:";
/// Line prefix marking an assistant turn
pub const AI_PREFIX: &str = "AI:";

/// The two speakers a chat log line can be attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Ai,
}

impl Speaker {
    /// Split a trimmed line into its speaker and utterance text.
    ///
    /// Prefixes are matched case-sensitively; anything else is not a turn.
    pub fn classify(line: &str) -> Option<(Speaker, &str)> {
        if let Some(rest) = line.strip_prefix(USER_PREFIX) {
            Some((Speaker::User, rest.trim()))
        } else if let Some(rest) = line.strip_prefix(AI_PREFIX) {
            Some((Speaker::Ai, rest.trim()))
        } else {
            None
        }
    }
}

/// Utterances of one chat log, split by speaker and kept in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLog {
    /// User utterances, prefix stripped
    pub user: Vec<String>,
    /// AI utterances, prefix stripped
    pub ai: Vec<String>,
}

impl ChatLog {
    pub fn push(&mut self, speaker: Speaker, text: &str) {
        match speaker {
            Speaker::User => self.user.push(text.to_string()),
            Speaker::Ai => self.ai.push(text.to_string()),
        }
    }

    /// Number of utterances from both speakers
    pub fn total(&self) -> usize {
        self.user.len() + self.ai.len()
    }

    /// All utterances, user turns first, then AI turns
    pub fn all_messages(&self) -> Vec<String> {
        self.user.iter().chain(self.ai.iter()).cloned().collect()
    }
}
