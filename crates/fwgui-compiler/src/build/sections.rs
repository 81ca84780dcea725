//! C text for each output section.

use fwgui_core::Project;

use crate::bitmap::BitmapData;
use crate::config::BuildConfig;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::text::{NamingConvention, byte_array, c_name, enum_decl, orientation_guard};
use crate::emit::{contains_triple_bang, fix_triple_bang};
use crate::serialize::font_data;

pub(crate) const FONTS_DECL: &str = "extern const uint8_t *fonts[];";
pub(crate) const STYLES_DECL: &str = "extern const uint8_t styles[];";
pub(crate) const DOCUMENT_DECL: &str = "extern const uint8_t document[];";

fn enum_with_none<'a>(
    enum_name: &str,
    prefix: &str,
    names: impl IntoIterator<Item = &'a str>,
    config: &BuildConfig,
) -> String {
    let items: Vec<String> = std::iter::once(format!("{prefix}NONE"))
        .chain(
            names
                .into_iter()
                .map(|name| c_name(prefix, name, NamingConvention::UpperSnake)),
        )
        .collect();
    enum_decl(enum_name, &items, config)
}

pub(crate) fn fonts_enum(project: &Project, config: &BuildConfig) -> String {
    enum_with_none(
        "FontsEnum",
        "FONT_ID_",
        project.fonts.iter().map(|f| f.name.as_str()),
        config,
    )
}

pub(crate) fn bitmaps_enum(project: &Project, config: &BuildConfig) -> String {
    enum_with_none(
        "BitmapsEnum",
        "BITMAP_ID_",
        project.bitmaps.iter().map(|b| b.name.as_str()),
        config,
    )
}

pub(crate) fn styles_enum(project: &Project, config: &BuildConfig) -> String {
    enum_with_none(
        "StylesEnum",
        "STYLE_ID_",
        project.styles.iter().map(|s| s.name.as_str()),
        config,
    )
}

/// Screen pages only; there is no `PAGE_ID_NONE`.
pub(crate) fn pages_enum(project: &Project, config: &BuildConfig) -> String {
    let items: Vec<String> = project
        .screen_pages()
        .map(|p| c_name("PAGE_ID_", &p.name, NamingConvention::UpperSnake))
        .collect();
    enum_decl("PagesEnum", &items, config)
}

/// Rewrite "!!!" runs, warning when anything changed.
pub(crate) fn fixed_data(data: &[u8], path: &str, diagnostics: &mut Diagnostics) -> Vec<u8> {
    let fixed = fix_triple_bang(data);
    if fixed.replaced {
        log::warn!("{path}: \"!!!\" replaced with \"!! \"");
        diagnostics
            .report(DiagnosticKind::BootloaderPatternFixed, path)
            .emit();
    }
    fixed.bytes
}

/// Report "!!!" runs in data that cannot be rewritten.
pub(crate) fn check_data(data: &[u8], path: &str, diagnostics: &mut Diagnostics) {
    if contains_triple_bang(data) {
        diagnostics
            .report(DiagnosticKind::BootloaderPatternDetected, path)
            .emit();
    }
}

pub(crate) fn fonts_def(project: &Project, config: &BuildConfig, diagnostics: &mut Diagnostics) -> String {
    let tab = config.tab();
    let mut arrays = Vec::with_capacity(project.fonts.len());
    let mut items = Vec::with_capacity(project.fonts.len());

    for font in &project.fonts {
        let name = c_name("font_data_", &font.name, NamingConvention::LowerSnake);
        let data = fixed_data(&font_data(font), &format!("fonts[{}]", font.name), diagnostics);
        let array = byte_array(&name, &data, config);
        let item = format!("{tab}{name},");

        match font.screen_orientation.guard() {
            Some(orientation) => {
                arrays.push(orientation_guard(orientation, &array));
                items.push(orientation_guard(orientation, &format!("{item}\n#else\n{tab}0,")));
            }
            None => {
                arrays.push(array);
                items.push(item);
            }
        }
    }

    format!(
        "// FONT DEFINITIONS\n\n{}\n\nconst uint8_t *fonts[] = {{\n{}\n}};",
        arrays.join("\n\n"),
        items.join("\n")
    )
}

pub(crate) fn bitmaps_decl(config: &BuildConfig) -> String {
    let tab = config.tab();
    format!(
        "struct Bitmap {{\n{tab}uint16_t w;\n{tab}uint16_t h;\n{tab}const uint8_t *pixels;\n}};\n\nextern Bitmap bitmaps[];"
    )
}

/// `bitmaps` holds the loaded data of every project bitmap, in project order.
pub(crate) fn bitmaps_def(
    project: &Project,
    bitmaps: &[BitmapData],
    config: &BuildConfig,
    diagnostics: &mut Diagnostics,
) -> String {
    let tab = config.tab();
    if project.bitmaps.is_empty() {
        return format!("Bitmap bitmaps[] = {{\n{tab}{{ 0, 0, NULL }}\n}};");
    }

    let mut arrays = Vec::with_capacity(bitmaps.len());
    let mut items = Vec::with_capacity(bitmaps.len());
    for (bitmap, data) in project.bitmaps.iter().zip(bitmaps) {
        let name = c_name("bitmap_pixel_data_", &bitmap.name, NamingConvention::LowerSnake);
        let pixels = fixed_data(&data.pixels, &format!("bitmaps[{}]", bitmap.name), diagnostics);
        arrays.push(byte_array(&name, &pixels, config));
        items.push(format!("{tab}{{ {}, {}, {name} }}", data.width, data.height));
    }

    format!(
        "// BITMAP DEFINITIONS\n\n{}\n\nBitmap bitmaps[] = {{\n{}\n}};",
        arrays.join("\n\n"),
        items.join(",\n")
    )
}

pub(crate) fn styles_def(data: &[u8], config: &BuildConfig) -> String {
    format!("// STYLES DEFINITION\n{}", byte_array("styles", data, config))
}

pub(crate) fn document_def(data: &[u8], config: &BuildConfig) -> String {
    format!("// DOCUMENT DEFINITION\n{}", byte_array("document", data, config))
}
