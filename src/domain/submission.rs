/// Identifier the contact endpoint hands back for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionId(String);

impl AsRef<str> for SubmissionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SubmissionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a single submission attempt stands.
///
/// `Pending` is the only non-terminal state: every attempt leaves it exactly
/// once, either for `Succeeded` or for `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Pending,
    Succeeded(SubmissionId),
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionOutcome::Pending)
    }
}
