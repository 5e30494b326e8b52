//! Rendering output
//!
//! Games emit vector shapes into a [`DrawList`]; presenting the list on a
//! real surface is left to the platform layer.

pub mod draw_list;

pub use draw_list::{DrawList, DrawShape};
