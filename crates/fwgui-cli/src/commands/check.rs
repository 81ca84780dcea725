use std::path::PathBuf;

use fwgui_compiler::BuildConfig;

use super::project_loader::{FileBitmapLoader, load_project};
use super::{block_on, fail, report_diagnostics};

pub struct CheckArgs {
    pub project_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let project = load_project(&args.project_path).unwrap_or_else(|e| fail(e));
    let loader = FileBitmapLoader::for_project(&args.project_path);

    let output = block_on(fwgui_compiler::build(
        &project,
        None,
        &BuildConfig::default(),
        &loader,
    ))
    .unwrap_or_else(|e| fail(e));

    if !report_diagnostics(&output.diagnostics, &args.project_path, args.strict, args.color) {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
