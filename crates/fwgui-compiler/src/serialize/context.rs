//! Shared state of one serialization pass.

use fwgui_core::{DataContext, Project};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::ObjectGraph;

/// Serialization state: the project being read, the graph being filled, and
/// the object path used to locate diagnostics.
pub(crate) struct Context<'a> {
    pub(crate) project: &'a Project,
    pub(crate) data: &'a dyn DataContext,
    pub(crate) graph: ObjectGraph,
    diagnostics: &'a mut Diagnostics,
    path: Vec<String>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        project: &'a Project,
        data: &'a dyn DataContext,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            project,
            data,
            graph: ObjectGraph::new(),
            diagnostics,
            path: Vec::new(),
        }
    }

    /// Run `f` with `segment` appended to the object path.
    pub(crate) fn at<T>(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.into());
        let result = f(self);
        self.path.pop();
        result
    }

    pub(crate) fn path(&self) -> String {
        self.path.join("/")
    }

    /// Report at `<path>/<property>`; without detail the kind's default message is used.
    pub(crate) fn report(&mut self, kind: DiagnosticKind, property: &str, detail: Option<&str>) {
        let path = match (self.path.is_empty(), property.is_empty()) {
            (true, _) => property.to_string(),
            (false, true) => self.path(),
            (false, false) => format!("{}/{property}", self.path()),
        };
        let builder = self.diagnostics.report(kind, path);
        match detail {
            Some(detail) => builder.message(detail).emit(),
            None => builder.emit(),
        }
    }

    pub(crate) fn into_graph(self) -> ObjectGraph {
        self.graph
    }
}
