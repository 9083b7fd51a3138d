//! keymap-expand: widen the layers of a ZMK keymap in place.
//!
//! The keymap is never parsed as devicetree. A run normalises the physical layout
//! reference, matches the braces of the `keymap` section, finds each layer's
//! `bindings = < ... >;` list with a pattern, and splices filler bindings into the
//! first rows before writing the file back.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod layout;
pub mod row;
pub mod section;
pub mod tokens;
pub mod transform;
pub mod value_list;
