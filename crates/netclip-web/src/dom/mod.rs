//! Browser side: button injection, click handling and the markup pass.
//! Only built with the `hydrate` feature.

mod button;
pub mod clipboard;
mod inject;
mod markup;

pub use button::{CopyButton, release};
pub use inject::{INJECTED_ATTR, inject};
pub use markup::{REVEALED_ATTR, reveal_markup};
