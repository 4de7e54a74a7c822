//! Case chat.

use dispute_types::{ChatMessage, Timestamp};

/// Sender name for messages typed on this device.
pub const LOCAL_SENDER: &str = "You";

/// Turn typed text into a message, or `None` if there is nothing to send.
pub fn compose_message(id: impl Into<String>, text: &str, at: Timestamp) -> Option<ChatMessage> {
    if text.trim().is_empty() {
        return None;
    }
    Some(ChatMessage {
        id: id.into(),
        sender: LOCAL_SENDER.to_string(),
        text: text.to_string(),
        timestamp: at.datetime_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_not_sent() {
        assert!(compose_message("1", "", Timestamp::EPOCH).is_none());
        assert!(compose_message("1", " \t ", Timestamp::EPOCH).is_none());
    }

    #[test]
    fn message_keeps_text_as_typed() {
        let msg = compose_message("7", "Sure, what would you like to know? ", Timestamp::EPOCH)
            .unwrap();
        assert_eq!(msg.sender, LOCAL_SENDER);
        assert_eq!(msg.text, "Sure, what would you like to know? ");
        assert_eq!(msg.timestamp, "1970-01-01 00:00");
    }
}
