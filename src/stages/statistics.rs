use crate::models::{ChatLog, MessageStats};

/// Count utterances per speaker
pub fn message_stats(log: &ChatLog) -> MessageStats {
    MessageStats {
        total: log.total(),
        user: log.user.len(),
        ai: log.ai.len(),
    }
}
