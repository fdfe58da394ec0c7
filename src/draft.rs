//! The shared draft/commit controller.
//!
//! One state machine serves every managed domain: Idle (list shown),
//! DraftingNew (draft = schema defaults) and DraftingEdit (draft = copy of
//! an existing record with list fields flattened for editing). Submit runs
//! the central validation pass and either appends a new record or replaces
//! the matching one; cancel discards the draft.

use serde_json::Value;

use crate::forms::{image_from_value, FormDomain};
use crate::model::ImageRef;
use crate::schema::{validate, FormValues, ValidationReport};
use crate::store::{MemStore, Repository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftState {
    Idle,
    DraftingNew,
    DraftingEdit { id: String },
}

impl DraftState {
    pub fn label(&self) -> &'static str {
        match self {
            DraftState::Idle => "idle",
            DraftState::DraftingNew => "draftingNew",
            DraftState::DraftingEdit { .. } => "draftingEdit",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DraftError {
    /// Operation needs a draft but the controller is Idle.
    NoDraft,
    /// Record id did not match anything in the collection.
    NotFound,
    /// Delete was requested without confirmation.
    ConfirmRequired,
    /// Submit rejected; the draft stays open so the caller can fix it.
    Validation(ValidationReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    pub id: String,
    pub created: bool,
}

pub struct DomainController<D: FormDomain> {
    state: DraftState,
    draft: FormValues,
    _domain: std::marker::PhantomData<D>,
}

impl<D: FormDomain> DomainController<D> {
    pub fn new() -> Self {
        Self {
            state: DraftState::Idle,
            draft: FormValues::new(),
            _domain: std::marker::PhantomData,
        }
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn draft(&self) -> &FormValues {
        &self.draft
    }

    /// Any state -> DraftingNew; the draft is reset to defaults.
    pub fn begin_create(&mut self) -> &FormValues {
        self.state = DraftState::DraftingNew;
        self.draft = D::defaults();
        &self.draft
    }

    /// Any state -> DraftingEdit; the draft is a flattened copy of the
    /// record, list fields rendered as delimited text.
    pub fn begin_edit(
        &mut self,
        store: &MemStore<D::Record>,
        id: &str,
    ) -> Result<&FormValues, DraftError> {
        let record = store.get(id).ok_or(DraftError::NotFound)?;
        self.state = DraftState::DraftingEdit { id: id.to_string() };
        self.draft = D::to_form(record);
        Ok(&self.draft)
    }

    /// Merge field values into the open draft.
    pub fn update(&mut self, fields: &FormValues) -> Result<&FormValues, DraftError> {
        if self.state == DraftState::Idle {
            return Err(DraftError::NoDraft);
        }
        for (name, value) in fields {
            self.draft.insert(name.clone(), value.clone());
        }
        Ok(&self.draft)
    }

    pub fn attach_image(&mut self, image: ImageRef) -> Result<(), DraftError> {
        if self.state == DraftState::Idle {
            return Err(DraftError::NoDraft);
        }
        // Every domain form names its image field "image".
        let value = serde_json::to_value(&image).unwrap_or(Value::Null);
        self.draft.insert("image".to_string(), value);
        Ok(())
    }

    /// Drafting-* -> Idle, draft discarded, store untouched.
    pub fn cancel(&mut self) {
        self.state = DraftState::Idle;
        self.draft = FormValues::new();
    }

    /// Validate and commit the draft. On success the controller returns to
    /// Idle; on a validation failure it stays in its drafting state.
    pub fn submit(&mut self, store: &mut MemStore<D::Record>) -> Result<CommitOutcome, DraftError> {
        if self.state == DraftState::Idle {
            return Err(DraftError::NoDraft);
        }

        let mut report = validate(&self.draft, D::schema());
        D::validate_extra(&self.draft, &mut report);
        if !report.is_clean() {
            return Err(DraftError::Validation(report));
        }

        let mut record = D::from_form(&self.draft);
        let outcome = match &self.state {
            DraftState::DraftingEdit { id } => {
                use crate::model::HasId;
                record.set_id(id.clone());
                if !store.replace(record) {
                    return Err(DraftError::NotFound);
                }
                CommitOutcome {
                    id: id.clone(),
                    created: false,
                }
            }
            _ => {
                let id = store.insert(record);
                CommitOutcome { id, created: true }
            }
        };

        self.cancel();
        Ok(outcome)
    }
}

impl<D: FormDomain> Default for DomainController<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deletion is store-level: it never involves a draft, but it shares the
/// domain error vocabulary. Declining confirmation leaves the collection
/// unchanged.
pub fn delete_record<T: crate::model::HasId>(
    store: &mut MemStore<T>,
    id: &str,
    confirmed: bool,
) -> Result<(), DraftError> {
    if !confirmed {
        return Err(DraftError::ConfirmRequired);
    }
    if store.remove(id) {
        Ok(())
    } else {
        Err(DraftError::NotFound)
    }
}

/// A domain's store plus its controller, the unit each admin page owns.
pub struct DomainState<D: FormDomain> {
    pub store: MemStore<D::Record>,
    pub controller: DomainController<D>,
}

impl<D: FormDomain> DomainState<D> {
    pub fn seeded(records: Vec<D::Record>) -> Self {
        Self {
            store: MemStore::seeded(records),
            controller: DomainController::new(),
        }
    }

    /// Helper for attach-image previews and similar draft reads.
    pub fn draft_image(&self) -> Option<ImageRef> {
        image_from_value(self.controller.draft().get("image"))
    }
}
