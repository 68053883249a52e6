pub mod block_quote;
pub mod code_fence;
pub mod header;
pub mod html_block;
pub mod indented_code;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use header::Header;
pub use html_block::HtmlBlock;
pub use indented_code::IndentedCode;
pub use list_item::{ListItem, ListMarker};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
