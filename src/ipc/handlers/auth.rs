use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::param_str;
use crate::ipc::types::{AppState, Request};
use crate::session;

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(storage) = state.storage.as_mut() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let (Some(username), Some(password)) = (param_str(req, "username"), param_str(req, "password"))
    else {
        return err(&req.id, "bad_params", "missing username or password", None);
    };

    match session::login(storage, &username, &password) {
        Ok(true) => {
            tracing::info!("admin login");
            ok(&req.id, json!({ "authenticated": true }))
        }
        Ok(false) => {
            tracing::warn!("rejected admin login");
            err(&req.id, "invalid_credentials", session::LOGIN_ERROR, None)
        }
        Err(e) => err(&req.id, "storage_failed", format!("{e:?}"), None),
    }
}

fn handle_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(storage) = state.storage.as_mut() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    match session::logout(storage) {
        Ok(()) => {
            tracing::info!("admin logout");
            ok(&req.id, json!({ "authenticated": false }))
        }
        Err(e) => err(&req.id, "storage_failed", format!("{e:?}"), None),
    }
}

fn handle_status(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(storage) = state.storage.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    ok(
        &req.id,
        json!({ "authenticated": session::is_authenticated(storage) }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "auth.login" => Some(handle_login(state, req)),
        "auth.logout" => Some(handle_logout(state, req)),
        "auth.status" => Some(handle_status(state, req)),
        _ => None,
    }
}
