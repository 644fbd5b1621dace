//! Services layer
//!
//! This module contains the logic between the content gateway and the pages:
//! - Typed content access with local ordering rules
//! - The three-state loader used by every page
//! - Pure list filters and rich text rendering
//! - Brazilian date formatting

pub mod content;
pub mod dates;
pub mod filters;
pub mod loadable;
pub mod rich_text;

pub use content::ContentService;
pub use filters::{BroadcastFilter, ListFilter, MediaFilter, WritingFilter};
pub use loadable::{load_within, Loadable};
pub use rich_text::RichTextRenderer;
