use crate::layout::global_context::AppGlobalContext;
use content::samples::{SampleCatalog, SampleQuery, SampleSelection};
use serde::{Deserialize, Serialize};
use web_sys::window;

pub const VIEW_STATE_KEY: &str = "language_code_examples";

/// Snapshot of the panel saved into the global view-state map so the tab
/// survives leaving the language page and coming back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeExamplesViewState {
    pub selected: String,
}

/// Builds the initial selection for the panel.
///
/// Restore precedence: URL query, then saved view state, then the
/// catalog default. Keys not present in the catalog never win.
pub fn restore_selection(
    catalog: &'static SampleCatalog,
    ctx: &AppGlobalContext,
) -> SampleSelection {
    let mut selection = SampleSelection::new(catalog);

    if let Some(saved) = saved_key(ctx) {
        selection.select(catalog, &saved);
    }

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if let Some(from_query) = selected_from_query(catalog, &search) {
        selection.select(catalog, from_query);
    }

    selection
}

fn saved_key(ctx: &AppGlobalContext) -> Option<String> {
    ctx.get_view_state(VIEW_STATE_KEY)
        .and_then(|value| serde_json::from_value::<CodeExamplesViewState>(value).ok())
        .map(|saved| saved.selected)
}

/// Parses `?example=<key>` and validates the key against the catalog.
pub fn selected_from_query(catalog: &SampleCatalog, search: &str) -> Option<&'static str> {
    let query: SampleQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query.selected_in(catalog)
}

/// Persists the selected key into the global view-state map.
pub fn persist_selection(ctx: &AppGlobalContext, key: &str) {
    let snapshot = CodeExamplesViewState {
        selected: key.to_string(),
    };
    if let Ok(value) = serde_json::to_value(&snapshot) {
        ctx.set_view_state(VIEW_STATE_KEY.to_string(), value);
    }
}

/// Reflects the selected key into the URL query string.
pub fn sync_query(key: &str) {
    let query_string = serde_qs::to_string(&SampleQuery::for_key(key)).unwrap_or_default();
    let new_url = format!("?{}", query_string);

    let current_search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    // Only update the URL if it actually changed.
    if current_search != new_url {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::samples::replica_samples;

    #[test]
    fn query_with_known_key_is_restored() {
        let catalog = replica_samples();
        assert_eq!(
            selected_from_query(catalog, "?example=distributed"),
            Some("distributed")
        );
        assert_eq!(
            selected_from_query(catalog, "example=single"),
            Some("single")
        );
    }

    #[test]
    fn query_with_unknown_or_missing_key_is_ignored() {
        let catalog = replica_samples();
        assert_eq!(selected_from_query(catalog, "?example=warp"), None);
        assert_eq!(selected_from_query(catalog, "?other=basic"), None);
        assert_eq!(selected_from_query(catalog, ""), None);
        assert_eq!(selected_from_query(catalog, "?not a query"), None);
    }
}
