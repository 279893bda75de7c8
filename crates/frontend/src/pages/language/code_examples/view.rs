use super::state;
use super::tab::SampleTab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::CodeBlock;
use content::samples::replica_samples;
use leptos::prelude::*;

/// Tabbed code sample panel.
///
/// Selection state lives in a signal wrapping `SampleSelection`; every
/// change is reflected into the view-state map and the URL query so the
/// active tab survives page switches and reloads.
#[component]
pub fn CodeExamples() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let catalog = replica_samples();
    let selection = RwSignal::new(state::restore_selection(catalog, &ctx));

    Effect::new(move |_| {
        let key = selection.get().selected();
        state::persist_selection(&ctx, key);
        state::sync_query(key);
    });

    view! {
        <section id="examples" class="section">
            <div class="section__content section__content--narrow">
                <h2 class="section__heading">"Code Examples"</h2>
                <div class="code-tabs">
                    <div class="code-tabs__bar">
                        {catalog
                            .iter()
                            .map(|sample| {
                                view! { <SampleTab sample=*sample selection=selection /> }
                            })
                            .collect_view()}
                    </div>
                    {move || match selection.get().current(catalog) {
                        Some(sample) => view! { <CodeBlock code=sample.source /> }.into_any(),
                        None => {
                            leptos::logging::log!("sample catalog is empty, nothing to display");
                            view! { <div class="placeholder">"No examples available"</div> }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}
