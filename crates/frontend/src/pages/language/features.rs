use crate::shared::components::FeatureCard;
use content::features::LANGUAGE_FEATURES;
use leptos::prelude::*;

#[component]
pub fn LanguageFeatures() -> impl IntoView {
    view! {
        <section id="key-features" class="section section--muted">
            <div class="section__content">
                <h2 class="section__heading">"Key Features"</h2>
                <div class="feature-grid">
                    {LANGUAGE_FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
