use serde::{Deserialize, Serialize};

/// Which node keeps an id that several nodes declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateIdPolicy {
    /// The last node with the id is the reply target.
    #[default]
    LastWins,
    /// The first node with the id is the reply target.
    FirstWins,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub duplicate_ids: DuplicateIdPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_uses_kebab_case_names() {
        let policy: DuplicateIdPolicy = serde_json::from_str("\"first-wins\"").unwrap();
        assert_eq!(policy, DuplicateIdPolicy::FirstWins);
        assert_eq!(
            serde_json::to_string(&DuplicateIdPolicy::LastWins).unwrap(),
            "\"last-wins\""
        );
    }

    #[test]
    fn missing_fields_default() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.duplicate_ids, DuplicateIdPolicy::LastWins);
    }
}
