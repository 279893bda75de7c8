use crate::shared::components::FeatureCard;
use content::features::TYPE_SYSTEM_POINTS;
use leptos::prelude::*;

#[component]
pub fn TypeSystem() -> impl IntoView {
    view! {
        <section id="type-system" class="section section--muted">
            <div class="section__content">
                <h2 class="section__heading">"Type System"</h2>
                <div class="feature-grid feature-grid--wide">
                    {TYPE_SYSTEM_POINTS
                        .iter()
                        .map(|point| view! { <FeatureCard feature=*point /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
