use content::samples::{replica_samples, CodeSample, SampleSelection};
use leptos::prelude::*;

/// One button of the tab bar.
#[component]
pub fn SampleTab(sample: CodeSample, selection: RwSignal<SampleSelection>) -> impl IntoView {
    let is_active = Memo::new(move |_| selection.get().selected() == sample.key);

    let on_click = move |_| {
        selection.update(|current| {
            if !current.select(replica_samples(), sample.key) {
                leptos::logging::log!("ignoring unknown sample key '{}'", sample.key);
            }
        });
    };

    view! {
        <button
            class="code-tabs__tab"
            class=("code-tabs__tab--active", move || is_active.get())
            on:click=on_click
        >
            {sample.title}
        </button>
    }
}
