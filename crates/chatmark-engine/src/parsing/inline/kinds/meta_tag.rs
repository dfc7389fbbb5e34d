/// Inline metadata tag `[key:value]`.
///
/// Tags are raw zones for the style tokenizer: markers inside a tag are never
/// treated as style delimiters, so ids like `[id:msg_1]` survive tokenizing.
/// The grammar matches the block parser's tag regex.
pub struct MetaTag;

impl MetaTag {
    pub const OPEN: u8 = b'[';
    pub const SEP: u8 = b':';
    pub const CLOSE: u8 = b']';

    /// Sets the node id.
    pub const ID: &'static str = "id";
    /// Sets the node time (`HH:MM`).
    pub const TIME: &'static str = "time";
    /// Names the id of the node being replied to.
    pub const REPLY: &'static str = "reply";

    fn is_key_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }

    /// Length in bytes of the tag starting at `b[0]`, if one starts there.
    pub fn match_len(b: &[u8]) -> Option<usize> {
        if b.first() != Some(&Self::OPEN) {
            return None;
        }
        let mut i = 1;
        while i < b.len() && Self::is_key_byte(b[i]) {
            i += 1;
        }
        if i == 1 || b.get(i) != Some(&Self::SEP) {
            return None;
        }
        i += 1;
        let value_start = i;
        while i < b.len() && b[i] != Self::CLOSE {
            i += 1;
        }
        if i == value_start || i == b.len() {
            return None;
        }
        Some(i + 1)
    }
}
