use serde_json::json;

use crate::forms::AcademicResults;
use crate::ipc::error::ok;
use crate::ipc::handlers::form_ops;
use crate::ipc::helpers::require_admin;
use crate::ipc::types::{AppState, Request};
use crate::store::Repository;

/// Toppers across all years, for the public toppers page.
fn handle_toppers(state: &AppState, req: &Request) -> serde_json::Value {
    let toppers: Vec<serde_json::Value> = state
        .academic_results
        .store
        .list()
        .iter()
        .flat_map(|result| {
            result.toppers.iter().map(|topper| {
                json!({
                    "year": result.year,
                    "name": topper.name,
                    "percentage": topper.percentage,
                    "stream": topper.stream,
                    "rank": topper.rank,
                    "image": topper.image,
                })
            })
        })
        .collect();
    ok(&req.id, json!({ "toppers": toppers }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let verb = req.method.strip_prefix("academicResults.")?;
    match verb {
        "list" => Some(ok(
            &req.id,
            json!({ "results": state.academic_results.store.list() }),
        )),
        "toppers" => Some(handle_toppers(state, req)),
        _ if form_ops::is_form_verb(verb) => {
            if let Some(blocked) = require_admin(state, req) {
                return Some(blocked);
            }
            Some(form_ops::handle::<AcademicResults>(
                &mut state.academic_results,
                verb,
                req,
            ))
        }
        _ => None,
    }
}
