use crate::shared::components::FeatureCard;
use content::features::PLATFORM_FEATURES;
use leptos::prelude::*;

#[component]
pub fn PlatformFeatures() -> impl IntoView {
    view! {
        <section id="features" class="section section--muted">
            <div class="section__content">
                <h2 class="section__heading">"Platform Features"</h2>
                <div class="feature-grid">
                    {PLATFORM_FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
