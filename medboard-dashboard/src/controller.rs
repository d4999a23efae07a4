use crate::search::record_matches;
use crate::state::{DashboardState, ModalMode, ModalSession};
use medboard_form::{FieldInput, FormDraft, FormResult};
use medboard_model::{Column, FieldMap, Record, SchemaRegistry};
use medboard_store::Collections;
use medboard_types::{RecordId, SectionKind};
use tracing::{debug, warn};

/// Orchestrates sections, search, the modal editor and the collection
/// stores.
///
/// All mutations run synchronously to completion in response to a single
/// intent; there is never a partially applied transition.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    state: DashboardState,
    collections: Collections,
}

impl Dashboard {
    /// A fresh session: all collections empty, no active section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session with a section already active, as the console shows
    /// after login.
    #[must_use]
    pub fn with_section(kind: SectionKind) -> Self {
        let mut dash = Self::new();
        dash.select_section(kind);
        dash
    }

    // ── Read surface ─────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub fn active_section(&self) -> Option<SectionKind> {
        self.state.active_section
    }

    #[must_use]
    pub fn collections(&self) -> &Collections {
        &self.collections
    }

    /// Columns of the active section's list view; empty without a section.
    #[must_use]
    pub fn columns(&self) -> &'static [Column] {
        match self.state.active_section {
            Some(kind) => &SchemaRegistry::get(kind).columns,
            None => &[],
        }
    }

    /// The displayed record set: the active collection filtered by the
    /// current search term, insertion order preserved.
    #[must_use]
    pub fn rows(&self) -> Vec<&Record> {
        let Some(kind) = self.state.active_section else {
            return Vec::new();
        };
        let term = self.state.search_term.as_str();
        self.collections
            .store(kind)
            .filter(|record| record_matches(record, term))
            .collect()
    }

    /// Title for the modal shell, e.g. `Add New service` / `Edit service`.
    #[must_use]
    pub fn modal_title(&self) -> Option<String> {
        let kind = self.state.active_section?;
        let modal = self.state.modal.as_ref()?;
        Some(match modal.mode {
            ModalMode::Create => format!("Add New {}", kind.singular()),
            ModalMode::Edit => format!("Edit {}", kind.singular()),
        })
    }

    /// The open draft, if any. Render it via [`FormDraft::render`].
    #[must_use]
    pub fn draft(&self) -> Option<&FormDraft> {
        self.state.modal.as_ref().map(|modal| &modal.draft)
    }

    // ── Transitions ──────────────────────────────────────────────

    /// Activates a section. The search term resets and any open modal is
    /// discarded.
    pub fn select_section(&mut self, kind: SectionKind) {
        debug!(section = kind.singular(), "section selected");
        self.state.active_section = Some(kind);
        self.state.search_term.clear();
        self.state.modal = None;
    }

    /// Updates the search term for the active section.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    /// Opens the modal in create mode with a blank draft.
    pub fn add_new(&mut self) {
        let Some(kind) = self.state.active_section else {
            warn!("add-new intent with no active section");
            return;
        };
        self.state.modal = Some(ModalSession {
            mode: ModalMode::Create,
            draft: FormDraft::open(kind, None),
            target: None,
        });
    }

    /// Opens the modal in edit mode for the given record.
    ///
    /// A stale identifier is logged and the modal stays closed — the action
    /// has no visible effect but remains diagnosable.
    pub fn edit(&mut self, id: &RecordId) {
        let Some(kind) = self.state.active_section else {
            warn!(%id, "edit intent with no active section");
            return;
        };
        match self.collections.store(kind).get(id) {
            Some(record) => {
                self.state.modal = Some(ModalSession {
                    mode: ModalMode::Edit,
                    draft: FormDraft::open(kind, Some(record)),
                    target: Some(id.clone()),
                });
            }
            None => warn!(%id, section = kind.singular(), "edit target not found"),
        }
    }

    /// Applies one field edit to the open draft.
    pub fn edit_field(&mut self, field: &str, input: FieldInput) -> FormResult<()> {
        match self.state.modal.as_mut() {
            Some(modal) => modal.draft.set(field, input),
            None => {
                warn!(field, "field edit with no open modal");
                Ok(())
            }
        }
    }

    /// Commits the open draft and closes the modal.
    ///
    /// Validation failures leave the modal open and the stores untouched;
    /// the error lists the offending fields for inline display. In create
    /// mode a fresh identifier is assigned; in edit mode the target's
    /// identifier is preserved.
    pub fn submit(&mut self) -> FormResult<()> {
        let Some(kind) = self.state.active_section else {
            warn!("submit intent with no active section");
            return Ok(());
        };
        let Some(modal) = self.state.modal.as_ref() else {
            warn!("submit intent with no open modal");
            return Ok(());
        };
        let fields = modal.draft.submit()?;
        match (modal.mode, modal.target.clone()) {
            (ModalMode::Edit, Some(id)) => {
                if let Err(err) = self.collections.store_mut(kind).update_by_id(&id, fields) {
                    warn!(%err, "update rejected");
                }
            }
            _ => self.insert_with_fresh_id(kind, fields),
        }
        self.state.modal = None;
        Ok(())
    }

    /// Closes the modal, discarding the draft unconditionally.
    pub fn cancel(&mut self) {
        self.state.modal = None;
    }

    /// Deletes a record. Call only after the shell has confirmed with the
    /// user; a stale identifier is logged and nothing changes.
    pub fn delete_confirmed(&mut self, id: &RecordId) {
        let Some(kind) = self.state.active_section else {
            warn!(%id, "delete intent with no active section");
            return;
        };
        match self.collections.store_mut(kind).delete_by_id(id) {
            Ok(record) => debug!(id = %record.id, section = kind.singular(), "record deleted"),
            Err(err) => warn!(%err, "delete rejected"),
        }
    }

    /// Inserts under a freshly allocated identifier, reallocating on the
    /// rare collision. Existing records are never overwritten.
    fn insert_with_fresh_id(&mut self, kind: SectionKind, fields: FieldMap) {
        let mut id = RecordId::allocate(kind);
        while self.collections.store(kind).contains(&id) {
            warn!(%id, "identifier collision, reallocating");
            id = RecordId::allocate(kind);
        }
        if let Err(err) = self
            .collections
            .store_mut(kind)
            .insert(Record::new(id, kind, fields))
        {
            warn!(%err, "insert rejected");
        }
    }
}
