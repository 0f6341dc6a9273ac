//! Form editing: the merge engine, pure edit operations and the session that
//! ties them together.

pub mod editor;
pub mod handlers;
pub mod merge;
pub mod paths;
pub mod session;

pub use editor::EditError;
pub use session::{EditorSession, StyleSelection};
