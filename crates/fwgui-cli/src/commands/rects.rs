use std::path::PathBuf;

use fwgui_compiler::page;
use fwgui_core::{Project, Rect};

use super::fail;
use super::project_loader::load_project;

pub struct RectsArgs {
    pub project_path: PathBuf,
    pub page: String,
}

pub fn run(args: RectsArgs) {
    let project = load_project(&args.project_path).unwrap_or_else(|e| fail(e));
    let rects = page_rects(&project, &args.page).unwrap_or_else(|e| fail(e));
    print!("{}", format_rects(&rects));
}

/// Transparent rectangles of the page named `name`.
pub fn page_rects(project: &Project, name: &str) -> Result<Vec<Rect>, String> {
    let page = project
        .page(name)
        .ok_or_else(|| format!("page `{name}` not found"))?;
    Ok(page::transparent_rectangles(&page.frame(), &project.data))
}

pub fn format_rects(rects: &[Rect]) -> String {
    let mut out = String::new();
    for rect in rects {
        out.push_str(&format!("{rect}\n"));
    }
    out
}
