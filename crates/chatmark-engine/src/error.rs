use thiserror::Error;

/// Errors raised when constructing model values from untrusted input.
///
/// The parser itself never fails; it degrades instead (see
/// [`crate::models::Diagnostic`]). These errors surface only through the
/// explicit conversions such as `"09:30".parse::<ClockTime>()` or
/// `Sender::try_from(2)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid time {value:?}: expected HH:MM with hours 00-23 and minutes 00-59")]
    InvalidTime { value: String },

    #[error("invalid sender code {code}: expected 0 (outgoing) or 1 (incoming)")]
    InvalidSender { code: u8 },
}
