/* src/server/engine/rust/src/lib.rs */

pub mod blocks;
pub mod document;
pub mod escape;
pub mod labels;
pub mod not_found;
pub mod page;
pub mod rich_text;

// Public API re-exports
pub use blocks::{BlockDispatcher, BlockRenderer, ButtonLink, RenderContext, button_href, hex_to_rgba};
pub use document::render_document;
pub use escape::{ascii_escape_json, escape_html};
pub use labels::Labels;
pub use not_found::render_not_found;
pub use page::{Chrome, compose_page, locale_links, render_page};
pub use rich_text::render_rich_text;
