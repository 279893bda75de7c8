use crate::layout::global_context::AppGlobalContext;
use content::navigation::{breadcrumb_trail, Page};
use leptos::prelude::*;

/// Breadcrumb strip under the header: the site name, then one crumb per
/// path segment of the active page, the last one unlinked.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="breadcrumbs">
            <div class="breadcrumbs__content">
                {move || {
                    breadcrumb_trail(ctx.page.get().path())
                        .into_iter()
                        .enumerate()
                        .map(|(index, crumb)| {
                            let separator = (index > 0)
                                .then(|| view! { <span class="breadcrumbs__separator">"/"</span> });
                            let item = if crumb.is_last {
                                view! {
                                    <span class="breadcrumbs__current">{crumb.label}</span>
                                }
                                .into_any()
                            } else {
                                let target = Page::from_path(&crumb.path);
                                view! {
                                    <a
                                        class="breadcrumbs__link"
                                        href=crumb.path
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            if let Some(page) = target {
                                                ctx.navigate(page);
                                            }
                                        }
                                    >
                                        {crumb.label}
                                    </a>
                                }
                                .into_any()
                            };
                            view! {
                                <span class="breadcrumbs__item">
                                    {separator}
                                    {item}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
