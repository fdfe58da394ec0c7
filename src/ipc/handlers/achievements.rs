use serde_json::json;

use crate::forms::Achievements;
use crate::ipc::error::ok;
use crate::ipc::handlers::form_ops;
use crate::ipc::helpers::require_admin;
use crate::ipc::types::{AppState, Request};
use crate::store::Repository;

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let verb = req.method.strip_prefix("achievements.")?;
    match verb {
        "list" => Some(ok(
            &req.id,
            json!({ "achievements": state.achievements.store.list() }),
        )),
        _ if form_ops::is_form_verb(verb) => {
            if let Some(blocked) = require_admin(state, req) {
                return Some(blocked);
            }
            Some(form_ops::handle::<Achievements>(
                &mut state.achievements,
                verb,
                req,
            ))
        }
        _ => None,
    }
}
