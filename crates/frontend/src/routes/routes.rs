use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::pages::language::LanguagePage;
use crate::pages::platform::PlatformPage;
use content::navigation::Page;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize browser integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell>
            {move || match ctx.page.get() {
                Page::Platform => view! { <PlatformPage /> }.into_any(),
                Page::Language => view! { <LanguagePage /> }.into_any(),
            }}
        </Shell>
    }
}
