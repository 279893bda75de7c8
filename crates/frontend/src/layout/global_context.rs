use content::navigation::Page;
use content::site;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub view_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Platform),
            view_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get_view_state(&self, view_key: &str) -> Option<serde_json::Value> {
        self.view_states
            .with_untracked(|states| states.get(view_key).cloned())
    }

    pub fn set_view_state(&self, view_key: String, state: serde_json::Value) {
        self.view_states.update(|states| {
            states.insert(view_key, state);
        });
    }

    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("navigate: {:?}", page);
        self.page.set(page);
    }

    pub fn init_router_integration(&self) {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        match Page::from_path(&path) {
            Some(page) => self.page.set(page),
            None => {
                leptos::logging::log!("unknown path '{}', opening home page", path);
                self.page.set(Page::Platform);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let meta = site::page_meta(page);

            let Some(w) = window() else { return };

            if let Some(document) = w.document() {
                document.set_title(meta.title);
            }

            // Use untracked reads of the location to avoid creating
            // unnecessary reactive dependencies.
            let current_path = w.location().pathname().unwrap_or_default();

            // Only touch the history if the path actually changed.
            if current_path != page.path() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(page.path()),
                    );
                }
            }
        });
    }
}
