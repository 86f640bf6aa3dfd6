mod snippet;

pub use snippet::{Snippet, SnippetList};
