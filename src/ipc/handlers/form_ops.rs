//! Generic handling of the draft/commit verbs every managed domain shares.
//!
//! A domain handler routes `<domain>.<verb>` here after passing the admin
//! gate; only list/detail verbs and cross-domain extras live in the
//! per-domain files.

use serde_json::{json, Value};

use crate::draft::{delete_record, DomainState, DraftError};
use crate::forms::FormDomain;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{image_from_params, param_bool, param_str};
use crate::ipc::types::Request;

pub fn is_form_verb(verb: &str) -> bool {
    matches!(
        verb,
        "beginCreate" | "beginEdit" | "updateDraft" | "attachImage" | "submit" | "cancel"
            | "delete"
    )
}

fn draft_err(req: &Request, error: DraftError) -> Value {
    match error {
        DraftError::NoDraft => err(&req.id, "no_draft", "no draft in progress", None),
        DraftError::NotFound => err(&req.id, "not_found", "record not found", None),
        DraftError::ConfirmRequired => err(
            &req.id,
            "confirm_required",
            "deletion requires confirmation",
            None,
        ),
        DraftError::Validation(report) => err(
            &req.id,
            "validation_failed",
            "draft has validation errors",
            Some(report.to_details()),
        ),
    }
}

pub fn handle<D: FormDomain>(domain: &mut DomainState<D>, verb: &str, req: &Request) -> Value {
    match verb {
        "beginCreate" => {
            domain.controller.begin_create();
            ok(
                &req.id,
                json!({
                    "state": domain.controller.state().label(),
                    "draft": domain.controller.draft(),
                }),
            )
        }
        "beginEdit" => {
            let Some(id) = param_str(req, "id") else {
                return err(&req.id, "bad_params", "missing id", None);
            };
            if let Err(e) = domain.controller.begin_edit(&domain.store, &id) {
                return draft_err(req, e);
            }
            ok(
                &req.id,
                json!({
                    "state": domain.controller.state().label(),
                    "draft": domain.controller.draft(),
                }),
            )
        }
        "updateDraft" => {
            let Some(fields) = req.params.get("fields").and_then(Value::as_object) else {
                return err(&req.id, "bad_params", "missing fields object", None);
            };
            match domain.controller.update(fields) {
                Ok(draft) => ok(&req.id, json!({ "draft": draft })),
                Err(e) => draft_err(req, e),
            }
        }
        "attachImage" => {
            let image = match image_from_params(req) {
                Ok(image) => image,
                Err(resp) => return resp,
            };
            match domain.controller.attach_image(image) {
                Ok(()) => ok(&req.id, json!({ "image": domain.draft_image() })),
                Err(e) => draft_err(req, e),
            }
        }
        "submit" => match domain.controller.submit(&mut domain.store) {
            Ok(outcome) => {
                tracing::debug!(
                    domain = D::NAME,
                    id = %outcome.id,
                    created = outcome.created,
                    "draft committed"
                );
                ok(
                    &req.id,
                    json!({
                        "id": outcome.id,
                        "created": outcome.created,
                        "count": domain.store.len(),
                    }),
                )
            }
            Err(e) => draft_err(req, e),
        },
        "cancel" => {
            domain.controller.cancel();
            ok(&req.id, json!({ "state": domain.controller.state().label() }))
        }
        "delete" => {
            let Some(id) = param_str(req, "id") else {
                return err(&req.id, "bad_params", "missing id", None);
            };
            match delete_record(&mut domain.store, &id, param_bool(req, "confirm")) {
                Ok(()) => {
                    tracing::info!(domain = D::NAME, id = %id, "record deleted");
                    ok(&req.id, json!({ "count": domain.store.len() }))
                }
                Err(e) => draft_err(req, e),
            }
        }
        _ => err(&req.id, "not_implemented", format!("unknown verb: {verb}"), None),
    }
}
