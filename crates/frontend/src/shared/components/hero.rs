use content::site::HeroCopy;
use leptos::prelude::*;

/// Gradient banner at the top of a page.
#[component]
pub fn Hero(copy: HeroCopy, #[prop(default = false)] compact: bool) -> impl IntoView {
    view! {
        <div class="hero" class=("hero--compact", move || compact)>
            <div class="hero__content">
                <h1 class="hero__heading">{copy.heading}</h1>
                <p class="hero__tagline">{copy.tagline}</p>
            </div>
        </div>
    }
}
