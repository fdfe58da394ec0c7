use super::handlers;
use super::types::{AppState, Request};
use crate::ipc::error::err;

pub fn handle_request(state: &mut AppState, req: Request) -> serde_json::Value {
    if let Some(resp) = handlers::core::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::auth::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::teachers::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::gallery::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::academic::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::achievements::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::student_results::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::contact::try_handle(state, &req) {
        return resp;
    }

    err(
        &req.id,
        "not_implemented",
        format!("unknown method: {}", req.method),
        None,
    )
}
