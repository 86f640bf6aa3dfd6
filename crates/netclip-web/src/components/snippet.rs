use leptos::prelude::*;

/// Snippet container: one `<pre>` wrapped in `.snippet`.
/// The copy button is added client-side by `initialize`.
#[component]
pub fn Snippet(
    /// Snippet text, rendered escaped
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <div class="snippet">
            <pre>{text}</pre>
        </div>
    }
}

/// Saved snippets in order, or a placeholder when there are none
#[component]
pub fn SnippetList(snippets: Vec<String>) -> impl IntoView {
    if snippets.is_empty() {
        return view! { <p class="snippets-empty">"No snippets yet"</p> }.into_any();
    }

    view! {
        <div class="snippets">
            {snippets.into_iter().map(|text| view! { <Snippet text=text /> }).collect_view()}
        </div>
    }
    .into_any()
}
