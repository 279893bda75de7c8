use super::actor_model::ActorModelSection;
use super::code_examples::CodeExamples;
use super::features::LanguageFeatures;
use super::type_system::TypeSystem;
use crate::shared::components::Hero;
use content::navigation::Page;
use content::site::hero_copy;
use leptos::prelude::*;

/// Replica language page (`/replica`).
#[component]
pub fn LanguagePage() -> impl IntoView {
    view! {
        <Hero copy=hero_copy(Page::Language) compact=true />
        <LanguageFeatures />
        <CodeExamples />
        <TypeSystem />
        <ActorModelSection />
    }
}
