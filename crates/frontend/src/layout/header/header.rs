use crate::layout::global_context::AppGlobalContext;
use content::navigation::Page;
use content::site::SITE_NAME;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a
                    class="header__title"
                    href="/"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Platform);
                    }
                >
                    {SITE_NAME}
                </a>
                <nav class="header__nav">
                    {Page::ALL
                        .into_iter()
                        .map(|page| {
                            let is_active = Memo::new(move |_| ctx.page.get() == page);
                            view! {
                                <a
                                    class="header__link"
                                    class=("header__link--active", move || is_active.get())
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
        </header>
    }
}
