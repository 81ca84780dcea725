use std::path::PathBuf;

use fwgui_compiler::{Diagnostics, emit, serialize};
use fwgui_core::{Colors, Orientation};

use super::project_loader::load_project;
use super::{fail, report_diagnostics};

pub struct DumpArgs {
    pub project_path: PathBuf,
    pub orientation: Orientation,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let project = load_project(&args.project_path).unwrap_or_else(|e| fail(e));

    let mut diagnostics = Diagnostics::new();
    let document = serialize::document(&project, args.orientation, &project.data, &mut diagnostics);
    let layout = document.layout().unwrap_or_else(|e| fail(e));

    print!(
        "{}",
        emit::dump(&document.graph, &layout, Colors::new(args.color))
    );

    // Unresolved references still pack, so the dump is shown regardless.
    report_diagnostics(&diagnostics, &args.project_path, false, args.color);
}
