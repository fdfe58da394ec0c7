use chrono::Utc;
use serde_json::json;

use crate::contact::{validate_submission, STATUS_PENDING};
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::param_str;
use crate::ipc::types::{AppState, Request};
use crate::model::ContactMessage;
use crate::store::new_record_id;

fn handle_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let field = |name: &str| param_str(req, name).unwrap_or_default();
    let (name, email, phone, message) =
        (field("name"), field("email"), field("phone"), field("message"));

    let report = validate_submission(&name, &email, &phone, &message);
    if !report.is_clean() {
        return err(
            &req.id,
            "validation_failed",
            "contact form has validation errors",
            Some(report.to_details()),
        );
    }

    let entry = ContactMessage {
        id: new_record_id(),
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        phone: phone.trim().to_string(),
        message: message.trim().to_string(),
        received_at: Utc::now(),
    };
    let message_id = entry.id.clone();
    tracing::info!(id = %message_id, "contact message queued");
    state.contact.submit(entry);

    ok(
        &req.id,
        json!({ "messageId": message_id, "status": STATUS_PENDING }),
    )
}

fn handle_status(state: &AppState, req: &Request) -> serde_json::Value {
    let Some(message_id) = param_str(req, "messageId") else {
        return err(&req.id, "bad_params", "missing messageId", None);
    };
    match state.contact.status(&message_id) {
        Some(status) => ok(&req.id, json!({ "messageId": message_id, "status": status })),
        None => err(&req.id, "not_found", "message not found", None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "contact.submit" => Some(handle_submit(state, req)),
        "contact.status" => Some(handle_status(state, req)),
        _ => None,
    }
}
