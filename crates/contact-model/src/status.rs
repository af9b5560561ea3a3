use std::fmt;

use serde::{Deserialize, Serialize};

/// Strongest criterion that placed records into one group.
///
/// Variants are declared weakest first so that `Ord` follows precedence:
/// `Email > Linkedin > FirstNameLastName > Unmatched`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MatchStatus {
    #[default]
    #[serde(rename = "UNMATCHED")]
    Unmatched,
    #[serde(rename = "MATCHED_ON_FIRST_NAME_LAST_NAME")]
    FirstNameLastName,
    #[serde(rename = "MATCHED_ON_LINKEDIN")]
    Linkedin,
    #[serde(rename = "MATCHED_ON_EMAIL")]
    Email,
}

impl MatchStatus {
    /// All statuses, strongest first.
    pub const ALL: [MatchStatus; 4] = [
        MatchStatus::Email,
        MatchStatus::Linkedin,
        MatchStatus::FirstNameLastName,
        MatchStatus::Unmatched,
    ];

    /// Value written to the `MATCH_STATUS` output column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unmatched => "UNMATCHED",
            Self::FirstNameLastName => "MATCHED_ON_FIRST_NAME_LAST_NAME",
            Self::Linkedin => "MATCHED_ON_LINKEDIN",
            Self::Email => "MATCHED_ON_EMAIL",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_follows_ord() {
        assert!(MatchStatus::Email > MatchStatus::Linkedin);
        assert!(MatchStatus::Linkedin > MatchStatus::FirstNameLastName);
        assert!(MatchStatus::FirstNameLastName > MatchStatus::Unmatched);
        assert_eq!(
            MatchStatus::Unmatched.max(MatchStatus::Linkedin),
            MatchStatus::Linkedin
        );
    }

    #[test]
    fn all_is_strongest_first() {
        let mut sorted = MatchStatus::ALL;
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, MatchStatus::ALL);
    }

    #[test]
    fn display_matches_output_labels() {
        assert_eq!(MatchStatus::Email.to_string(), "MATCHED_ON_EMAIL");
        assert_eq!(
            MatchStatus::FirstNameLastName.to_string(),
            "MATCHED_ON_FIRST_NAME_LAST_NAME"
        );
    }
}
