use std::path::Path;

use fwgui_compiler::bitmap::{BitmapError, BitmapLoader, InlineBitmapLoader};
use fwgui_compiler::{BuildConfig, SectionName};
use fwgui_core::{Bitmap, parse_project};

use super::block_on;
use super::build::render_sections;
use super::project_loader::{FileBitmapLoader, load_config};

fn bitmap(image: Option<&str>, size: Option<u16>, pixels: Option<Vec<u8>>) -> Bitmap {
    Bitmap {
        name: "logo".to_string(),
        image: image.map(str::to_string),
        width: size,
        height: size,
        pixels,
    }
}

#[test]
fn sections_are_marked() {
    let project = parse_project(r#"{ "pages": [{ "name": "main" }] }"#).unwrap();
    let sections = [SectionName::DocumentDecl, SectionName::PagesEnum];

    let output = block_on(fwgui_compiler::build(
        &project,
        Some(&sections),
        &BuildConfig::default(),
        &InlineBitmapLoader,
    ))
    .unwrap();

    assert_eq!(
        render_sections(&output),
        "// GUI_PAGES_ENUM\nenum PagesEnum {\n    PAGE_ID_MAIN\n};\n\n\
         // GUI_DOCUMENT_DECL\nextern const uint8_t document[];\n\n"
    );
}

#[test]
fn file_loader_falls_back_to_inline_pixels() {
    let loader = FileBitmapLoader::for_project(Path::new("/nonexistent/gui.json"));

    let data = block_on(loader.load(&bitmap(None, Some(1), Some(vec![9, 9])))).unwrap();

    assert_eq!(data.pixels, [9, 9]);
    assert_eq!((data.width, data.height), (1, 1));
}

#[test]
fn file_loader_missing_file() {
    let loader = FileBitmapLoader::for_project(Path::new("/nonexistent/gui.json"));

    let err = block_on(loader.load(&bitmap(Some("logo.bin"), Some(1), None))).unwrap_err();

    assert!(matches!(err, BitmapError::Io { ref name, .. } if name == "logo"));
}

#[test]
fn file_loader_needs_dimensions() {
    let loader = FileBitmapLoader::for_project(Path::new("/nonexistent/gui.json"));

    let err = block_on(loader.load(&bitmap(Some("logo.bin"), None, None))).unwrap_err();

    assert_eq!(
        err.to_string(),
        "bitmap `logo` is invalid: width and height are required"
    );
}

#[test]
fn missing_config_uses_defaults() {
    assert_eq!(load_config(None).unwrap(), BuildConfig::default());
    assert!(load_config(Some(Path::new("/nonexistent/format.json"))).is_err());
}
