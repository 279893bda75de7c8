use crate::shared::icons::icon;
use content::features::Feature;
use leptos::prelude::*;

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__icon">{icon(feature.icon)}</div>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
}
