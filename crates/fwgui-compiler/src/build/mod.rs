//! Section orchestration.
//!
//! [`build`] produces the requested sections in their fixed order. Packing is
//! synchronous; the only suspension point is loading bitmap pixels, which are
//! requested together before the bitmap definitions are written. A bitmap
//! failure aborts the build; a section whose data does not fit 16-bit offsets
//! is reported and left out.

mod sections;

#[cfg(test)]
mod build_tests;

use futures::future::try_join_all;
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, warn};

use fwgui_core::{Orientation, Project};

use crate::BuildError;
use crate::bitmap::{BitmapData, BitmapLoader};
use crate::config::BuildConfig;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::EmitError;
use crate::section::SectionName;
use crate::serialize;

/// Everything one build produced.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    /// Generated text, in section order.
    pub sections: IndexMap<SectionName, String>,
    pub diagnostics: Diagnostics,
    /// RGB565 colors used by the style table; empty unless styles were built.
    pub colors: IndexSet<u16>,
}

impl BuildOutput {
    pub fn section(&self, name: SectionName) -> Option<&str> {
        self.sections.get(&name).map(String::as_str)
    }
}

/// Build `requested` sections of `project`, or all of them when `None`.
pub async fn build<L: BitmapLoader>(
    project: &Project,
    requested: Option<&[SectionName]>,
    config: &BuildConfig,
    loader: &L,
) -> Result<BuildOutput, BuildError> {
    let mut output = BuildOutput::default();

    let wanted = SectionName::ALL
        .into_iter()
        .filter(|section| requested.is_none_or(|list| list.contains(section)));

    for section in wanted {
        debug!("building section {section}");
        let diagnostics = &mut output.diagnostics;
        let text = match section {
            SectionName::FontsEnum => sections::fonts_enum(project, config),
            SectionName::BitmapsEnum => sections::bitmaps_enum(project, config),
            SectionName::StylesEnum => sections::styles_enum(project, config),
            SectionName::PagesEnum => sections::pages_enum(project, config),
            SectionName::FontsDecl => sections::FONTS_DECL.to_string(),
            SectionName::FontsDef => sections::fonts_def(project, config, diagnostics),
            SectionName::BitmapsDecl => sections::bitmaps_decl(config),
            SectionName::BitmapsDef => {
                let bitmaps = load_bitmaps(project, loader).await?;
                sections::bitmaps_def(project, &bitmaps, config, diagnostics)
            }
            SectionName::StylesDecl => sections::STYLES_DECL.to_string(),
            SectionName::StylesDef => {
                let (styles, colors) = serialize::styles(project, diagnostics);
                let Some(data) = packed(styles.to_bytes(), section, "styles", diagnostics) else {
                    continue;
                };
                sections::check_data(&data, "styles", diagnostics);
                output.colors = colors;
                sections::styles_def(&data, config)
            }
            SectionName::DocumentDecl => sections::DOCUMENT_DECL.to_string(),
            SectionName::DocumentPortraitDef => {
                match document_def(project, Orientation::Portrait, config, diagnostics) {
                    Some(text) => text,
                    None => continue,
                }
            }
            SectionName::DocumentLandscapeDef => {
                match document_def(project, Orientation::Landscape, config, diagnostics) {
                    Some(text) => text,
                    None => continue,
                }
            }
        };
        output.sections.insert(section, text);
    }

    info!(
        "built {} sections with {} errors and {} warnings",
        output.sections.len(),
        output.diagnostics.error_count(),
        output.diagnostics.warning_count()
    );
    Ok(output)
}

async fn load_bitmaps<L: BitmapLoader>(
    project: &Project,
    loader: &L,
) -> Result<Vec<BitmapData>, BuildError> {
    if project.bitmaps.is_empty() {
        return Ok(Vec::new());
    }
    debug!("loading {} bitmaps", project.bitmaps.len());
    let bitmaps = try_join_all(project.bitmaps.iter().map(|bitmap| loader.load(bitmap))).await?;
    Ok(bitmaps)
}

/// Report a packing failure against `path`; the section is left out.
fn packed<T>(
    result: Result<T, EmitError>,
    section: SectionName,
    path: &str,
    diagnostics: &mut Diagnostics,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(EmitError::DocumentTooLarge(offset)) => {
            warn!("skipping section {section}: object at offset {offset}");
            diagnostics
                .report(DiagnosticKind::DocumentTooLarge, path)
                .message(format!("object at offset {offset}"))
                .emit();
            None
        }
    }
}

fn document_def(
    project: &Project,
    orientation: Orientation,
    config: &BuildConfig,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    let document = serialize::document(project, orientation, &project.data, diagnostics);
    let section = match orientation {
        Orientation::Portrait => SectionName::DocumentPortraitDef,
        Orientation::Landscape => SectionName::DocumentLandscapeDef,
    };
    let layout = packed(document.layout(), section, "document", diagnostics)?;
    debug!(
        "{orientation} document: {} objects, {} bytes",
        layout.objects().len(),
        layout.size()
    );
    let data = document.graph.pack(&layout);
    sections::check_data(&data, "document", diagnostics);
    Some(sections::document_def(&data, config))
}
