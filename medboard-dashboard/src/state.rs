//! Session state for the admin dashboard.

use medboard_form::FormDraft;
use medboard_types::{RecordId, SectionKind};

/// Whether the open modal creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
}

/// An open modal: its mode, the draft under edit, and — in edit mode — the
/// identifier of the record being edited. The target id is what survives
/// into the committed record; whatever the draft carries never displaces
/// it.
#[derive(Debug, Clone)]
pub struct ModalSession {
    pub mode: ModalMode,
    pub draft: FormDraft,
    pub target: Option<RecordId>,
}

/// Session-lifetime dashboard state.
///
/// Constructed fresh per session with no active section and empty search,
/// mutated only through [`Dashboard`](crate::Dashboard) operations, and
/// discarded at session end. No persistence.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub active_section: Option<SectionKind>,
    pub search_term: String,
    pub modal: Option<ModalSession>,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a modal is open, in either mode.
    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }
}
