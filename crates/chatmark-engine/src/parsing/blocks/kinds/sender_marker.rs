use crate::models::Sender;

/// Sender marker with owned delimiter constants.
///
/// All sender-marker syntax knowledge lives here, not scattered in
/// classifier code.
pub struct SenderMarker;

impl SenderMarker {
    /// Marks an outgoing message.
    pub const OUTGOING: char = '>';
    /// Marks an incoming message.
    pub const INCOMING: char = '<';

    /// Strips a leading sender marker and the whitespace after it.
    ///
    /// # Returns
    /// - `sender`: Who the marker denotes
    /// - `byte_offset`: Index into `s` where content begins
    ///
    /// `None` if `s` does not start with a marker. Leading whitespace before
    /// the marker is not skipped.
    pub fn strip_prefix(s: &str) -> Option<(Sender, usize)> {
        let sender = match s.chars().next()? {
            Self::OUTGOING => Sender::Outgoing,
            Self::INCOMING => Sender::Incoming,
            _ => return None,
        };
        let rest = &s[1..];
        Some((sender, s.len() - rest.trim_start().len()))
    }
}
