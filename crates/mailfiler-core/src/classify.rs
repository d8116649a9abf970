//! Keyword classification of message envelopes
//!
//! An ordered rule table keeps the priority auditable: the first rule whose
//! condition holds decides the label, and Filed keywords beat the
//! attachment/claim rule even when both would match.

/// Classification label for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Filed,
    Triage,
    Skipped,
}

impl Classification {
    /// Capitalized display string, as consumed by the dashboard template
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Filed => "Filed",
            Classification::Triage => "Triage",
            Classification::Skipped => "Skipped",
        }
    }
}

/// Subjects containing any of these are filed outright
const FILED_KEYWORDS: [&str; 4] = ["quote", "policy", "binder", "endorsement"];

fn matches_filed(subject: &str, _has_attachments: bool) -> bool {
    FILED_KEYWORDS.iter().any(|k| subject.contains(k))
}

fn matches_triage(subject: &str, has_attachments: bool) -> bool {
    has_attachments || subject.contains("claim")
}

/// Rules in priority order; the fallback label applies when none match
const RULES: [(fn(&str, bool) -> bool, Classification); 2] = [
    (matches_filed, Classification::Filed),
    (matches_triage, Classification::Triage),
];

/// Classify a message by subject and attachment flag.
///
/// Matching is case-insensitive substring containment; a missing subject is
/// treated as empty.
pub fn classify(subject: Option<&str>, has_attachments: bool) -> Classification {
    let subject = subject.unwrap_or("").to_lowercase();
    for (condition, label) in RULES {
        if condition(&subject, has_attachments) {
            return label;
        }
    }
    Classification::Skipped
}
