use super::architecture::Architecture;
use super::features::PlatformFeatures;
use super::technical_details::TechnicalDetails;
use crate::shared::components::Hero;
use content::navigation::Page;
use content::site::hero_copy;
use leptos::prelude::*;

/// Landing page of the platform (`/`).
#[component]
pub fn PlatformPage() -> impl IntoView {
    view! {
        <Hero copy=hero_copy(Page::Platform) />
        <PlatformFeatures />
        <Architecture />
        <TechnicalDetails />
    }
}
