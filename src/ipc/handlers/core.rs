use std::path::PathBuf;

use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::require_admin;
use crate::ipc::types::{AppState, Request};
use crate::storage::ClientStorage;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string())
        }),
    )
}

fn handle_workspace_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = path else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    match ClientStorage::open(&path) {
        Ok(storage) => {
            tracing::info!(workspace = %path.display(), "workspace opened");
            state.workspace = Some(path.clone());
            state.storage = Some(storage);
            ok(&req.id, json!({ "workspacePath": path.to_string_lossy() }))
        }
        Err(e) => err(&req.id, "storage_failed", format!("{e:?}"), None),
    }
}

fn handle_dashboard_stats(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Some(blocked) = require_admin(state, req) {
        return blocked;
    }
    ok(
        &req.id,
        json!({
            "teachers": state.teachers.store.len(),
            "galleryItems": state.gallery.store.len(),
            "academicResults": state.academic_results.store.len(),
            "achievements": state.achievements.store.len(),
            "studentResults": state.student_results.store.len(),
            "contactMessages": state.contact.len(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "workspace.select" => Some(handle_workspace_select(state, req)),
        "dashboard.stats" => Some(handle_dashboard_stats(state, req)),
        _ => None,
    }
}
