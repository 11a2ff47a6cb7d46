use serde::Serialize;

/// Calendar item kind without domain-crate dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    #[serde(rename = "task")]
    Task,
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "schedule")]
    ClassSession,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Event => "event",
            Self::ClassSession => "schedule",
        }
    }

    /// Recurring items are re-derived from schedule rules on every
    /// recompute; they carry no persistent identity of their own.
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        matches!(self, Self::ClassSession)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
