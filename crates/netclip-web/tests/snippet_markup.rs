//! Server-rendered snippet markup must match what the injector looks for.

#[cfg(feature = "ssr")]
mod ssr {
    use leptos::prelude::*;
    use netclip_web::components::{Snippet, SnippetList};

    #[test]
    fn snippet_wraps_pre_in_container() {
        let html = view! { <Snippet text="print(1)" /> }.to_html();

        assert!(html.contains("<div class=\"snippet\">"), "got {}", html);
        assert!(html.contains("<pre>print(1)</pre>"), "got {}", html);
    }

    #[test]
    fn snippet_text_is_escaped() {
        let html = view! { <Snippet text="<b>bold</b>" /> }.to_html();

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"), "got {}", html);
        assert!(!html.contains("<b>"), "got {}", html);
    }

    #[test]
    fn list_keeps_order() {
        let snippets = vec!["first".to_string(), "second".to_string()];
        let html = view! { <SnippetList snippets=snippets /> }.to_html();

        let first = html.find("first").expect("first snippet rendered");
        let second = html.find("second").expect("second snippet rendered");
        assert!(first < second);
        assert_eq!(html.matches("class=\"snippet\"").count(), 2);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = view! { <SnippetList snippets=Vec::new() /> }.to_html();

        assert!(html.contains("No snippets yet"));
        assert!(!html.contains("class=\"snippet\""));
    }
}
