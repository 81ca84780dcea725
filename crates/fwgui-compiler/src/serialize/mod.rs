//! Project serializers.
//!
//! Each entry point fills a fresh [`ObjectGraph`] from the project and
//! returns it with its root, ready to be laid out and packed. Unresolved
//! references are reported to the caller's [`Diagnostics`] and pack as 0.

mod context;
mod document;
mod font;
mod resolve;
mod style;
mod widget;


use fwgui_core::{DataContext, Orientation, Project};
use indexmap::IndexSet;

use crate::diagnostics::Diagnostics;
use crate::emit::{EmitError, Layout, ObjectGraph, ObjectId};
use context::Context;

pub use font::font_data;
pub use widget::{type_code, unescape_text};

/// An object graph together with the root it is packed from.
#[derive(Debug, Clone)]
pub struct Serialized {
    pub graph: ObjectGraph,
    pub root: ObjectId,
}

impl Serialized {
    pub fn layout(&self) -> Result<Layout, EmitError> {
        self.graph.finish(self.root)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EmitError> {
        self.graph.pack_from(self.root)
    }
}

/// The document for one display orientation.
pub fn document(
    project: &Project,
    orientation: Orientation,
    data: &dyn DataContext,
    diagnostics: &mut Diagnostics,
) -> Serialized {
    let mut cx = Context::new(project, data, diagnostics);
    let root = cx.document(orientation);
    Serialized {
        graph: cx.into_graph(),
        root,
    }
}

/// The style table, plus every RGB565 color it uses.
pub fn styles(project: &Project, diagnostics: &mut Diagnostics) -> (Serialized, IndexSet<u16>) {
    let mut colors = IndexSet::new();
    let mut cx = Context::new(project, &project.data, diagnostics);
    let root = cx.style_table(&mut colors);
    let serialized = Serialized {
        graph: cx.into_graph(),
        root,
    };
    (serialized, colors)
}
