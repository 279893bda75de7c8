use crate::layout::global_context::AppGlobalContext;
use content::navigation::Page;
use content::site::SITE_NAME;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content">
                <div class="footer__brand">
                    <span class="footer__title">{SITE_NAME}</span>
                    <span class="footer__note">
                        "Distributed computing on an open overlay."
                    </span>
                </div>
                <nav class="footer__nav">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            view! {
                                <a
                                    class="footer__link"
                                    href=page.path()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(page);
                                    }
                                >
                                    {page.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
