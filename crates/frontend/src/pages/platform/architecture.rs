use content::features::ARCHITECTURE_LAYERS;
use leptos::prelude::*;

/// Layered architecture section, top of the stack first.
#[component]
pub fn Architecture() -> impl IntoView {
    view! {
        <section id="architecture" class="section">
            <div class="section__content">
                <h2 class="section__heading">"Architecture"</h2>
                <div class="layer-stack">
                    {ARCHITECTURE_LAYERS
                        .iter()
                        .map(|layer| {
                            view! {
                                <div class="layer-stack__row">
                                    <h3 class="layer-stack__name">{layer.name}</h3>
                                    <p class="layer-stack__summary">{layer.summary}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
