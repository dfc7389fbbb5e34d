pub mod date_directive;
pub mod sender_marker;

pub use date_directive::DateDirective;
pub use sender_marker::SenderMarker;
