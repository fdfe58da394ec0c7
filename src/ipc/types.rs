use std::path::PathBuf;

use serde::Deserialize;

use crate::contact::Outbox;
use crate::draft::DomainState;
use crate::fixtures;
use crate::forms::{AcademicResults, Achievements, Gallery, StudentResults, Teachers};
use crate::storage::ClientStorage;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub storage: Option<ClientStorage>,
    pub teachers: DomainState<Teachers>,
    pub gallery: DomainState<Gallery>,
    pub academic_results: DomainState<AcademicResults>,
    pub achievements: DomainState<Achievements>,
    pub student_results: DomainState<StudentResults>,
    pub contact: Outbox,
}

impl AppState {
    /// Fresh state with fixture-seeded collections. Everything here except
    /// the session flag (which lives in client storage, not in this
    /// struct) is rebuilt on every start.
    pub fn new() -> Self {
        Self {
            workspace: None,
            storage: None,
            teachers: DomainState::seeded(fixtures::teachers()),
            gallery: DomainState::seeded(fixtures::gallery_items()),
            academic_results: DomainState::seeded(fixtures::academic_results()),
            achievements: DomainState::seeded(fixtures::achievements()),
            student_results: DomainState::seeded(fixtures::student_results()),
            contact: Outbox::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
