mod error;
pub mod menu_page;
pub(crate) mod static_selector;
mod text;

pub use error::Error;
pub use text::collapsed_text;
