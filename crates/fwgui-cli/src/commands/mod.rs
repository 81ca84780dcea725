pub mod build;
pub mod check;
pub mod dump;
pub mod project_loader;
pub mod rects;

#[cfg(test)]
mod build_tests;

use std::fmt::Display;
use std::future::Future;
use std::path::Path;

use fwgui_compiler::Diagnostics;

/// Print `error: ...` and exit with status 1.
pub fn fail(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

/// Run `future` to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> F::Output {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| fail(format!("failed to start runtime: {e}")));
    runtime.block_on(future)
}

/// Print diagnostics to stderr; returns whether they allow the build to pass.
pub fn report_diagnostics(
    diagnostics: &Diagnostics,
    project_path: &Path,
    strict: bool,
    color: bool,
) -> bool {
    if !diagnostics.is_empty() {
        let name = project_path.to_string_lossy();
        eprint!(
            "{}",
            diagnostics.printer().project_name(&name).colored(color).render()
        );
    }
    if strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        !diagnostics.has_errors()
    }
}
