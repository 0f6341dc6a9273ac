//! The built-in layouts. Each is a pure `fn(&ResumeDocument, &AccentColor) -> Element`.

pub mod academic;
pub mod classic;
pub mod corporate;
pub mod executive;
pub mod minimalist;
pub mod tech;
pub mod timeline;
pub mod two_column;
