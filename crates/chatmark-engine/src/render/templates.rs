//! Markup fragments for each node kind. Class names match the chat page
//! stylesheet.

use crate::{models::Sender, parsing::inline::Style};

pub const MESSAGE_CONTAINER_CLASS: &str = "message_container";
pub const MESSAGE_TIME_CLASS: &str = "message_time";
pub const REPLY_PREVIEW_CLASS: &str = "reply_preview";
pub const DATE_DIVIDER_CLASS: &str = "date_divider";
pub const LINE_BREAK: &str = "<br>";

/// Flex alignment of a message bubble.
pub fn alignment(sender: Sender) -> &'static str {
    match sender {
        Sender::Outgoing => "flex-end",
        Sender::Incoming => "flex-start",
    }
}

pub fn sender_class(sender: Sender) -> &'static str {
    match sender {
        Sender::Outgoing => "outgoing_msg",
        Sender::Incoming => "incoming_msg",
    }
}

/// Element wrapping text in `style`.
pub fn wrapper(style: Style) -> &'static str {
    match style {
        Style::Strong => "strong",
        Style::Emphasis => "em",
        Style::Strikethrough => "del",
        Style::Code => "code",
    }
}
