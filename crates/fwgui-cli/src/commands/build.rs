use std::fs;
use std::path::{Path, PathBuf};

use fwgui_compiler::{BuildOutput, SectionName};

use super::project_loader::{FileBitmapLoader, load_config, load_project};
use super::{block_on, fail, report_diagnostics};

pub struct BuildArgs {
    pub project_path: PathBuf,
    pub sections: Option<Vec<SectionName>>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: BuildArgs) {
    let project = load_project(&args.project_path).unwrap_or_else(|e| fail(e));
    let config = load_config(args.config.as_deref()).unwrap_or_else(|e| fail(e));
    let loader = FileBitmapLoader::for_project(&args.project_path);

    let output = block_on(fwgui_compiler::build(
        &project,
        args.sections.as_deref(),
        &config,
        &loader,
    ))
    .unwrap_or_else(|e| fail(e));

    if !report_diagnostics(&output.diagnostics, &args.project_path, args.strict, args.color) {
        std::process::exit(1);
    }

    match &args.output {
        Some(dir) => write_sections(dir, &output).unwrap_or_else(|e| fail(e)),
        None => print!("{}", render_sections(&output)),
    }
}

/// All sections as one stream, each under a `// <SECTION>` marker.
pub fn render_sections(output: &BuildOutput) -> String {
    let mut out = String::new();
    for (name, text) in &output.sections {
        out.push_str(&format!("// {name}\n{text}\n\n"));
    }
    out
}

fn write_sections(dir: &Path, output: &BuildOutput) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("failed to create '{}': {}", dir.display(), e))?;
    for (name, text) in &output.sections {
        let path = dir.join(format!("{name}.h"));
        fs::write(&path, format!("{text}\n"))
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
