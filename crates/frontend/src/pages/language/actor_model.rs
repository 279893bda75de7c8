use content::features::{ACTOR_MODEL_INTRO, ACTOR_MODEL_POINTS};
use leptos::prelude::*;

#[component]
pub fn ActorModelSection() -> impl IntoView {
    view! {
        <section id="actor-model" class="section">
            <div class="section__content section__content--narrow">
                <h2 class="section__heading">"The Actor Model"</h2>
                <p class="section__lead">{ACTOR_MODEL_INTRO}</p>
                <ul class="actor-points">
                    {ACTOR_MODEL_POINTS
                        .iter()
                        .map(|point| view! { <li class="actor-points__item">{*point}</li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
