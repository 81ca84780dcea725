use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use fwgui_core::{Bitmap, Project, parse_project};
use indoc::indoc;

use super::build;
use crate::bitmap::{BitmapData, BitmapError, BitmapLoader, InlineBitmapLoader};
use crate::config::BuildConfig;
use crate::diagnostics::DiagnosticKind;
use crate::section::SectionName;
use crate::BuildError;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const PROJECT: &str = indoc! {r##"
    {
      "styles": [
        { "name": "default", "color": "#ffffff" },
        { "name": "alert", "inheritFrom": "default", "color": "#ff0000" }
      ],
      "fonts": [{ "name": "small", "glyphs": [{ "encoding": 48, "dx": 4, "pixels": [7] }] }],
      "bitmaps": [{ "name": "logo", "width": 1, "height": 1, "pixels": [5, 6] }],
      "globalVariables": [{ "name": "voltage" }],
      "pages": [{
        "name": "main", "width": 480, "height": 272,
        "widgets": [
          { "type": "DisplayData", "data": "voltage", "style": "alert", "width": 100, "height": 20 },
          { "type": "Text", "text": "V", "style": "missing", "top": 20, "width": 20, "height": 20 }
        ]
      }]
    }
"##};

fn project() -> Project {
    parse_project(PROJECT).unwrap()
}

/// Counts calls and fails for bitmaps named `broken`.
#[derive(Default)]
struct CountingLoader {
    calls: AtomicUsize,
}

impl BitmapLoader for CountingLoader {
    fn load(&self, bitmap: &Bitmap) -> impl Future<Output = Result<BitmapData, BitmapError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = bitmap.name.clone();
        async move {
            if name == "broken" {
                return Err(BitmapError::Io {
                    name,
                    source: std::io::Error::other("unreadable"),
                });
            }
            Ok(BitmapData {
                width: 1,
                height: 1,
                pixels: vec![0],
            })
        }
    }
}

#[tokio::test]
async fn builds_every_section_in_order() {
    init_logging();
    let project = project();

    let output = build(&project, None, &BuildConfig::default(), &InlineBitmapLoader)
        .await
        .unwrap();

    let names: Vec<SectionName> = output.sections.keys().copied().collect();
    assert_eq!(names, SectionName::ALL);
    assert_eq!(
        output.section(SectionName::FontsDecl),
        Some("extern const uint8_t *fonts[];")
    );
    assert!(
        output
            .section(SectionName::BitmapsDef)
            .unwrap()
            .contains("{ 1, 1, bitmap_pixel_data_logo }")
    );
    assert_eq!(output.colors.iter().copied().collect::<Vec<_>>(), [0x0000, 0xffff, 0xf800]);
}

#[tokio::test]
async fn unresolved_references_are_reported_per_document() {
    let project = project();

    let output = build(&project, None, &BuildConfig::default(), &InlineBitmapLoader)
        .await
        .unwrap();

    assert_eq!(output.diagnostics.count_of(DiagnosticKind::UnresolvedStyle), 2);
    assert_eq!(output.diagnostics.len(), 2);
    assert_eq!(
        output.diagnostics.as_slice()[0].path(),
        "pages[main]/widgets[1]/style"
    );
}

#[tokio::test]
async fn requested_sections_keep_fixed_order() {
    let project = project();
    let requested = [SectionName::StylesDef, SectionName::FontsEnum];

    let output = build(&project, Some(&requested), &BuildConfig::default(), &InlineBitmapLoader)
        .await
        .unwrap();

    let names: Vec<SectionName> = output.sections.keys().copied().collect();
    assert_eq!(names, [SectionName::FontsEnum, SectionName::StylesDef]);
    assert!(output.diagnostics.is_empty());
    assert!(!output.colors.is_empty());
}

#[tokio::test]
async fn colors_only_come_from_styles() {
    let project = project();

    let output = build(
        &project,
        Some(&[SectionName::DocumentPortraitDef]),
        &BuildConfig::default(),
        &InlineBitmapLoader,
    )
    .await
    .unwrap();

    assert!(output.colors.is_empty());
}

#[tokio::test]
async fn minimal_document() {
    let project = parse_project(r#"{ "pages": [{ "name": "main", "width": 10, "height": 10 }] }"#).unwrap();

    let output = build(
        &project,
        Some(&[SectionName::DocumentLandscapeDef]),
        &BuildConfig::default(),
        &InlineBitmapLoader,
    )
    .await
    .unwrap();

    insta::assert_snapshot!(output.section(SectionName::DocumentLandscapeDef).unwrap(), @r"
    // DOCUMENT DEFINITION
    const uint8_t document[35] = {
        0, 0, 0, 1, 6, 0, 1, 0, 0, 0, 0, 0, 0, 10, 0, 10,
        0, 0, 20, 0, 0, 0, 0, 1, 27, 0, 0, 0, 0, 0, 0, 10,
        0, 10, 0
    };
    ");
}

#[tokio::test]
async fn bitmaps_load_only_when_requested() {
    let project = project();
    let loader = CountingLoader::default();

    build(&project, Some(&[SectionName::BitmapsEnum]), &BuildConfig::default(), &loader)
        .await
        .unwrap();
    assert_eq!(loader.calls.load(Ordering::SeqCst), 0);

    build(&project, Some(&[SectionName::BitmapsDef]), &BuildConfig::default(), &loader)
        .await
        .unwrap();
    assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bitmap_failure_fails_the_build() {
    let mut project = project();
    project.bitmaps.push(Bitmap {
        name: "broken".to_string(),
        image: None,
        width: None,
        height: None,
        pixels: None,
    });

    let err = build(&project, None, &BuildConfig::default(), &CountingLoader::default())
        .await
        .unwrap_err();

    assert!(matches!(err, BuildError::Bitmap(BitmapError::Io { ref name, .. }) if name == "broken"));
    assert_eq!(err.to_string(), "failed to read bitmap `broken`: unreadable");
}

#[tokio::test]
async fn inline_bitmap_without_pixels() {
    let project = parse_project(r#"{ "bitmaps": [{ "name": "logo", "width": 2, "height": 2 }] }"#).unwrap();

    let err = build(&project, None, &BuildConfig::default(), &InlineBitmapLoader)
        .await
        .unwrap_err();

    assert!(matches!(err, BuildError::Bitmap(BitmapError::NotFound(ref name)) if name == "logo"));
}

#[tokio::test]
async fn oversized_document_skips_only_its_section() {
    let text = "x".repeat(70_000);
    let project = parse_project(
        &serde_json::json!({
            "fonts": [{ "name": "small" }],
            "pages": [{
                "name": "main",
                "widgets": [
                    { "type": "Text", "text": text },
                    { "type": "Text", "text": "after" }
                ]
            }]
        })
        .to_string(),
    )
    .unwrap();

    let output = build(&project, None, &BuildConfig::default(), &InlineBitmapLoader)
        .await
        .unwrap();

    let names: Vec<SectionName> = output.sections.keys().copied().collect();
    assert_eq!(names, &SectionName::ALL[..11]);
    assert!(output.section(SectionName::FontsEnum).unwrap().contains("FONT_ID_SMALL"));
    assert_eq!(output.diagnostics.count_of(DiagnosticKind::DocumentTooLarge), 2);
    let message = &output.diagnostics.as_slice()[0];
    assert_eq!(message.path(), "document");
    assert!(message.is_error());
    assert!(message.message().starts_with("data too large for 16-bit offsets: object at offset "));
}

#[tokio::test]
async fn config_changes_array_layout() {
    let project = project();
    let config = BuildConfig {
        indent: 2,
        bytes_per_line: 8,
    };

    let output = build(&project, Some(&[SectionName::StylesDef]), &config, &InlineBitmapLoader)
        .await
        .unwrap();

    let text = output.section(SectionName::StylesDef).unwrap();
    let first_row = text.lines().nth(2).unwrap();
    assert!(first_row.starts_with("  ") && !first_row.starts_with("   "));
    assert!(text.lines().skip(2).all(|line| line == "};" || line.split(", ").count() <= 8));
}

#[test]
fn section_names_round_trip_through_text() {
    for section in SectionName::ALL {
        assert_eq!(section.as_str().parse::<SectionName>(), Ok(section));
    }

    let err = "GUI_NOTHING".parse::<SectionName>().unwrap_err();
    assert_eq!(err.to_string(), "unknown section `GUI_NOTHING`");
}
