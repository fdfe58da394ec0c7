use serde_json::json;

use crate::forms::StudentResults;
use crate::ipc::error::{err, ok};
use crate::ipc::handlers::form_ops;
use crate::ipc::helpers::{param_str, require_admin};
use crate::ipc::types::{AppState, Request};
use crate::model::slugify;
use crate::store::Repository;

/// Public per-student detail lookup by name slug.
fn handle_by_slug(state: &AppState, req: &Request) -> serde_json::Value {
    let Some(slug) = param_str(req, "slug") else {
        return err(&req.id, "bad_params", "missing slug", None);
    };
    match state
        .student_results
        .store
        .list()
        .iter()
        .find(|result| slugify(&result.student_name) == slug)
    {
        Some(result) => ok(&req.id, json!({ "student": result })),
        None => err(&req.id, "not_found", "student not found", None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let verb = req.method.strip_prefix("studentResults.")?;
    match verb {
        "list" => Some(ok(
            &req.id,
            json!({ "results": state.student_results.store.list() }),
        )),
        "bySlug" => Some(handle_by_slug(state, req)),
        _ if form_ops::is_form_verb(verb) => {
            if let Some(blocked) = require_admin(state, req) {
                return Some(blocked);
            }
            Some(form_ops::handle::<StudentResults>(
                &mut state.student_results,
                verb,
                req,
            ))
        }
        _ => None,
    }
}
