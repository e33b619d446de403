//! Render model layer
//!
//! Extensions describe their UI as an untyped JSON tree. This module turns
//! that tree into a closed, typed `RenderModel` the host UI can render, or an
//! explicit `Invalid` variant when the tree is malformed. Malformed input is
//! always a representable outcome, never a panic.
//!
//! # Module Structure
//!
//! - `tree` - typed field accessors over untyped JSON objects
//! - `model` - the RenderModel tagged union and item payload types
//! - `color_like` - ordered-precedence color resolution
//! - `parser` - the tree -> RenderModel entry point

pub mod color_like;
mod model;
mod parser;
pub mod tree;

pub use model::{Icon, ListItem, RenderModel};
pub use parser::parse;
