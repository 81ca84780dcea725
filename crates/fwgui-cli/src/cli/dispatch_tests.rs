use std::path::PathBuf;

use fwgui_compiler::SectionName;
use fwgui_core::Orientation;

use super::*;
use crate::cli::commands::{build_command, check_command, dump_command, rects_command};

#[test]
fn build_defaults() {
    let m = build_command()
        .try_get_matches_from(["build", "gui.json"])
        .unwrap();
    let params = BuildParams::from_matches(&m);

    assert_eq!(params.project_path, PathBuf::from("gui.json"));
    assert_eq!(params.sections, None);
    assert_eq!(params.output, None);
    assert_eq!(params.config, None);
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn build_collects_sections() {
    let m = build_command()
        .try_get_matches_from([
            "build",
            "gui.json",
            "-s",
            "GUI_STYLES_DEF",
            "--section",
            "GUI_FONTS_ENUM",
            "-o",
            "out",
            "--color",
            "never",
        ])
        .unwrap();
    let params = BuildParams::from_matches(&m);

    assert_eq!(
        params.sections,
        Some(vec![SectionName::StylesDef, SectionName::FontsEnum])
    );
    assert_eq!(params.output, Some(PathBuf::from("out")));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn build_rejects_unknown_section() {
    let result = build_command().try_get_matches_from(["build", "gui.json", "-s", "GUI_NOPE"]);

    let err = result.err().unwrap();
    assert!(err.to_string().contains("unknown section `GUI_NOPE`"));
}

#[test]
fn build_requires_project() {
    assert!(build_command().try_get_matches_from(["build"]).is_err());
}

#[test]
fn check_strict_flag() {
    let m = check_command()
        .try_get_matches_from(["check", "gui.json", "--strict", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn dump_orientation() {
    let m = dump_command()
        .try_get_matches_from(["dump", "gui.json"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).orientation, Orientation::Portrait);

    let m = dump_command()
        .try_get_matches_from(["dump", "gui.json", "--orientation", "landscape"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).orientation, Orientation::Landscape);

    let result = dump_command().try_get_matches_from(["dump", "gui.json", "--orientation", "sideways"]);
    assert!(result.is_err());
}

#[test]
fn rects_requires_page() {
    assert!(
        rects_command()
            .try_get_matches_from(["rects", "gui.json"])
            .is_err()
    );

    let m = rects_command()
        .try_get_matches_from(["rects", "gui.json", "--page", "main"])
        .unwrap();
    assert_eq!(RectsParams::from_matches(&m).page, "main");
}

#[test]
fn verbosity_is_counted() {
    let m = check_command()
        .try_get_matches_from(["check", "gui.json", "-vv"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);
}

#[test]
fn cli_has_all_subcommands() {
    let cli = build_cli();
    let names: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();
    assert_eq!(names, ["build", "check", "dump", "rects"]);
}
