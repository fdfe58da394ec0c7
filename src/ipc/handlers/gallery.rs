use serde_json::json;

use crate::forms::Gallery;
use crate::ipc::error::ok;
use crate::ipc::handlers::form_ops;
use crate::ipc::helpers::{param_str, require_admin};
use crate::ipc::types::{AppState, Request};
use crate::model::{GalleryItem, GalleryKind};
use crate::store::Repository;

/// The public gallery filter: "All" shows everything, "Photos"/"Videos"
/// match by media kind as well as category, anything else matches the
/// category label exactly.
fn matches_filter(item: &GalleryItem, filter: &str) -> bool {
    match filter {
        "All" => true,
        "Photos" => item.category.label() == "Photos" || item.kind == GalleryKind::Photo,
        "Videos" => item.kind == GalleryKind::Video,
        other => item.category.label() == other,
    }
}

fn handle_filter(state: &AppState, req: &Request) -> serde_json::Value {
    let filter = param_str(req, "category").unwrap_or_else(|| "All".to_string());
    let items: Vec<&GalleryItem> = state
        .gallery
        .store
        .list()
        .iter()
        .filter(|item| matches_filter(item, &filter))
        .collect();
    ok(&req.id, json!({ "category": filter, "items": items }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let verb = req.method.strip_prefix("gallery.")?;
    match verb {
        "list" => Some(ok(&req.id, json!({ "items": state.gallery.store.list() }))),
        "filter" => Some(handle_filter(state, req)),
        _ if form_ops::is_form_verb(verb) => {
            if let Some(blocked) = require_admin(state, req) {
                return Some(blocked);
            }
            Some(form_ops::handle::<Gallery>(&mut state.gallery, verb, req))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn filter_subsets() {
        let items = fixtures::gallery_items();
        let photo = &items[0];
        let video = &items[1];

        assert!(matches_filter(photo, "All") && matches_filter(video, "All"));
        assert!(matches_filter(photo, "Photos"));
        assert!(!matches_filter(video, "Photos"));
        assert!(matches_filter(video, "Videos"));
        assert!(!matches_filter(photo, "Videos"));
        assert!(matches_filter(photo, "Events") && matches_filter(video, "Events"));
        assert!(!matches_filter(photo, "Activities"));
    }
}
