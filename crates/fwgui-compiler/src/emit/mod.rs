//! Binary and text emission.
//!
//! This module handles:
//! - Primitive field encoding and the relocatable object graph
//! - Offset assignment and packing
//! - The bootloader byte-pattern workaround
//! - C text fragments (identifiers, enums, byte arrays)
//! - Debug dumps of packed documents

mod dump;
mod error;
mod field;
mod fixup;
mod graph;
pub mod text;

#[cfg(test)]
mod graph_tests;

pub use dump::dump;
pub use error::EmitError;
pub use field::{Field, encode_string, pack_i16, pack_u16};
pub use fixup::{Fixed, contains_triple_bang, fix_triple_bang};
pub use graph::{Layout, Object, ObjectGraph, ObjectId, Struct};
