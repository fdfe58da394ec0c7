use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;

use crate::ipc::error::err;
use crate::ipc::types::{AppState, Request};
use crate::model::ImageRef;
use crate::session;

pub fn param_str(req: &Request, key: &str) -> Option<String> {
    req.params
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub fn param_bool(req: &Request, key: &str) -> bool {
    req.params
        .get(key)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Admin gate: a workspace must be selected and the stored session flag
/// must be exactly the sentinel. Returns the error envelope to send when
/// the request is blocked.
pub fn require_admin(state: &AppState, req: &Request) -> Option<serde_json::Value> {
    let Some(storage) = state.storage.as_ref() else {
        return Some(err(&req.id, "no_workspace", "select a workspace first", None));
    };
    if !session::is_authenticated(storage) {
        return Some(err(&req.id, "unauthorized", "admin session required", None));
    }
    None
}

/// Image attach params: either `{url}` or `{file: {mime, data}}` with a
/// base64 payload. Both resolve to the tagged `ImageRef` union.
pub fn image_from_params(req: &Request) -> Result<ImageRef, serde_json::Value> {
    if let Some(url) = param_str(req, "url") {
        let url = url.trim().to_string();
        if url.is_empty() {
            return Err(err(&req.id, "bad_params", "url must not be empty", None));
        }
        return Ok(ImageRef::Url { url });
    }

    let Some(file) = req.params.get("file") else {
        return Err(err(
            &req.id,
            "bad_params",
            "expected params.url or params.file",
            None,
        ));
    };
    let mime = file
        .get("mime")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let data = file
        .get("data")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    if !mime.starts_with("image/") {
        return Err(err(
            &req.id,
            "bad_params",
            "file.mime must be an image type",
            None,
        ));
    }
    if BASE64.decode(data.as_bytes()).is_err() {
        return Err(err(
            &req.id,
            "bad_params",
            "file.data is not valid base64",
            None,
        ));
    }
    Ok(ImageRef::Inline { mime, data })
}
