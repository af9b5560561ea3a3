//! Tiered match predicate between two records.

use contact_model::{IdentityFields, MatchStatus, Record};

/// Removes every `www.` occurrence, not only a leading one.
///
/// `https://www.linkedin.com/in/jdoe` and `https://linkedin.com/in/jdoe`
/// compare equal afterwards. A `www.` in the middle of a path is removed too.
pub fn strip_www(url: &str) -> String {
    url.replace("www.", "")
}

fn both_equal(left: Option<&str>, right: Option<&str>) -> bool {
    matches!((left, right), (Some(left), Some(right)) if left == right)
}

fn email_matches(left: &IdentityFields, right: &IdentityFields) -> bool {
    both_equal(left.email.as_deref(), right.email.as_deref())
}

fn linkedin_matches(left: &IdentityFields, right: &IdentityFields) -> bool {
    match (left.linkedin.as_deref(), right.linkedin.as_deref()) {
        (Some(left), Some(right)) => strip_www(left) == strip_www(right),
        _ => false,
    }
}

fn name_matches(left: &IdentityFields, right: &IdentityFields) -> bool {
    both_equal(left.first_name.as_deref(), right.first_name.as_deref())
        && both_equal(left.last_name.as_deref(), right.last_name.as_deref())
}

/// Strongest criterion on which `candidate` matches `anchor`, if any.
///
/// Criteria are tried strongest first, so a pair sharing both an email and a
/// name reports [`MatchStatus::Email`]. Comparison is exact on the trimmed
/// standardized fields; absent fields never match.
pub fn match_criterion(anchor: &Record, candidate: &Record) -> Option<MatchStatus> {
    let (left, right) = (&anchor.identity, &candidate.identity);
    if email_matches(left, right) {
        Some(MatchStatus::Email)
    } else if linkedin_matches(left, right) {
        Some(MatchStatus::Linkedin)
    } else if name_matches(left, right) {
        Some(MatchStatus::FirstNameLastName)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        email: Option<&str>,
        first: Option<&str>,
        last: Option<&str>,
        linkedin: Option<&str>,
    ) -> Record {
        Record {
            source_id: "test".to_string(),
            columns: Vec::new(),
            identity: IdentityFields {
                email: email.map(str::to_string),
                first_name: first.map(str::to_string),
                last_name: last.map(str::to_string),
                linkedin: linkedin.map(str::to_string),
            },
        }
    }

    #[test]
    fn email_takes_precedence() {
        let a = record(Some("x@y.com"), Some("Jane"), Some("Doe"), Some("in/jdoe"));
        let b = record(Some("x@y.com"), Some("Jane"), Some("Doe"), Some("in/jdoe"));
        assert_eq!(match_criterion(&a, &b), Some(MatchStatus::Email));
    }

    #[test]
    fn email_is_case_sensitive() {
        let a = record(Some("X@y.com"), None, None, None);
        let b = record(Some("x@y.com"), None, None, None);
        assert_eq!(match_criterion(&a, &b), None);
    }

    #[test]
    fn absent_fields_never_match() {
        let a = record(None, None, None, None);
        let b = record(None, None, None, None);
        assert_eq!(match_criterion(&a, &b), None);
    }

    #[test]
    fn linkedin_ignores_www() {
        let a = record(None, None, None, Some("https://www.linkedin.com/in/jdoe"));
        let b = record(None, None, None, Some("https://linkedin.com/in/jdoe"));
        assert_eq!(match_criterion(&a, &b), Some(MatchStatus::Linkedin));
    }

    #[test]
    fn strip_www_removes_every_occurrence() {
        assert_eq!(
            strip_www("https://www.example.com/www.page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn name_requires_both_parts() {
        let a = record(None, Some("Jane"), Some("Doe"), None);
        let b = record(None, Some("Jane"), Some("Doe"), None);
        let first_only = record(None, Some("Jane"), None, None);
        assert_eq!(
            match_criterion(&a, &b),
            Some(MatchStatus::FirstNameLastName)
        );
        assert_eq!(match_criterion(&first_only, &first_only.clone()), None);
        assert_eq!(match_criterion(&a, &first_only), None);
    }

    #[test]
    fn different_emails_fall_through_to_name() {
        let a = record(Some("a@y.com"), Some("Jane"), Some("Doe"), None);
        let b = record(Some("b@y.com"), Some("Jane"), Some("Doe"), None);
        assert_eq!(
            match_criterion(&a, &b),
            Some(MatchStatus::FirstNameLastName)
        );
    }
}
