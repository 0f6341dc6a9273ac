//! Rendering: a document plus style choices in, a deterministic tree out.

pub mod handlers;
pub mod helpers;
pub mod html;
pub mod registry;
pub mod style;
pub mod templates;
pub mod tree;

pub use registry::TemplateRegistry;
