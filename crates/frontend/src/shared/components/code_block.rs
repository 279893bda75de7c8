use leptos::prelude::*;

/// Dark monospace panel for source listings.
#[component]
pub fn CodeBlock(
    #[prop(into)] code: String,
    #[prop(default = "replica")] language: &'static str,
) -> impl IntoView {
    view! {
        <div class="code-block" data-language=language>
            <pre class="code-block__pre">{code}</pre>
        </div>
    }
}
