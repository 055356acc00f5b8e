use std::time::Instant;

/// The single in-flight expectation of a follow-up key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOperation {
    #[default]
    None,
    AwaitingChordKey { deadline: Instant },
    AwaitingColonKey { deadline: Instant },
}

/// Which follow-up is awaited, without the deadline. Used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    Chord,
    Colon,
}

impl PendingKind {
    pub fn label(&self) -> &'static str {
        match self {
            PendingKind::Chord => "SPC",
            PendingKind::Colon => ":",
        }
    }
}

impl PendingOperation {
    pub fn deadline(&self) -> Option<Instant> {
        match self {
            PendingOperation::None => None,
            PendingOperation::AwaitingChordKey { deadline }
            | PendingOperation::AwaitingColonKey { deadline } => Some(*deadline),
        }
    }

    pub fn kind(&self) -> Option<PendingKind> {
        match self {
            PendingOperation::None => None,
            PendingOperation::AwaitingChordKey { .. } => Some(PendingKind::Chord),
            PendingOperation::AwaitingColonKey { .. } => Some(PendingKind::Colon),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PendingOperation::None)
    }

    /// A follow-up arriving exactly at the deadline still counts.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now > deadline)
    }

    pub fn take(&mut self) -> PendingOperation {
        std::mem::take(self)
    }
}
