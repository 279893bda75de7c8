pub mod breadcrumbs;
pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page chrome shared by both routes.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |               Breadcrumbs                 |
/// +------------------------------------------+
/// |              page content                 |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <header::Header />
            <breadcrumbs::Breadcrumbs />
            <main data-zone="main" class="site-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
