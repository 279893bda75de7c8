use content::features::TECH_TIERS;
use leptos::prelude::*;

/// Technical details tier grid (compute / network / storage).
#[component]
pub fn TechnicalDetails() -> impl IntoView {
    view! {
        <section id="technical-details" class="section section--muted">
            <div class="section__content">
                <h2 class="section__heading">"Technical Details"</h2>
                <div class="tier-grid">
                    {TECH_TIERS
                        .iter()
                        .map(|tier| {
                            view! {
                                <div class="tier-card">
                                    <h3 class="tier-card__name">{tier.name}</h3>
                                    <p class="tier-card__tagline">{tier.tagline}</p>
                                    <ul class="tier-card__points">
                                        {tier
                                            .points
                                            .iter()
                                            .map(|point| view! { <li>{*point}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
