//! Lexicon-based text classifier gating every public submission.
//!
//! Centralized so all submission endpoints (incidents, forum posts) apply
//! the same list.

/// Disallowed terms, scanned in order; the first hit wins.
const BLOCKED_TERMS: &[&str] = &[
    "abuse", "idiot", "stupid", "fake report", "prank", "sexual", "harass", "kill", "bomb",
    "terror", "xxx", "nsfw", "hate", "racist", "violence", "threat", "spam", "scam", "fraud",
    "illegal", "drugs", "weapon", "suicide",
];

/// Outcome of classifying a piece of user-submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Allowed,
    Blocked(&'static str),
}

impl Classification {
    pub fn blocked_term(self) -> Option<&'static str> {
        match self {
            Classification::Allowed => None,
            Classification::Blocked(term) => Some(term),
        }
    }
}

/// Classify free text against the lexicon.
///
/// Case-insensitive substring match; empty text is allowed.
pub fn classify(text: &str) -> Classification {
    if text.is_empty() {
        return Classification::Allowed;
    }

    let lowered = text.to_lowercase();
    for term in BLOCKED_TERMS {
        if lowered.contains(term) {
            return Classification::Blocked(term);
        }
    }

    Classification::Allowed
}

/// Scan several gated fields; returns the first blocked term found.
///
/// Fields are checked in the order given, so a submission is rejected as a
/// whole before anything is written.
pub fn first_blocked_term(fields: &[&str]) -> Option<&'static str> {
    fields
        .iter()
        .find_map(|field| classify(field).blocked_term())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_allowed() {
        assert_eq!(
            classify("Transformer sparked near gate"),
            Classification::Allowed
        );
    }

    #[test]
    fn test_empty_text_allowed() {
        assert_eq!(classify(""), Classification::Allowed);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(classify("this is SPAM"), Classification::Blocked("spam"));
        assert_eq!(classify("Fake Report here"), Classification::Blocked("fake report"));
    }

    #[test]
    fn test_match_inside_longer_word() {
        // Substring semantics: "killed" contains "kill"
        assert_eq!(
            classify("power line killed the lights"),
            Classification::Blocked("kill")
        );
    }

    #[test]
    fn test_first_match_follows_lexicon_order() {
        // "abuse" precedes "threat" in the lexicon regardless of position in
        // the input
        assert_eq!(
            classify("a threat and abuse"),
            Classification::Blocked("abuse")
        );
    }

    #[test]
    fn test_first_blocked_term_checks_fields_in_order() {
        assert_eq!(
            first_blocked_term(&["all good here", "such a scam"]),
            Some("scam")
        );
        assert_eq!(first_blocked_term(&["fine", "also fine"]), None);
    }
}
