//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fwgui")
        .about("Pack GUI projects into C sections for the legacy firmware")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(build_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(rects_command())
}

/// Generate C sections.
pub fn build_command() -> Command {
    Command::new("build")
        .about("Generate C sections from a project")
        .after_help(
            r#"EXAMPLES:
  fwgui build gui.json                       # all sections to stdout
  fwgui build gui.json -s GUI_STYLES_DEF     # one section
  fwgui build gui.json -o src/gui            # one header per section
  fwgui build gui.json --config format.json  # custom indentation"#,
        )
        .arg(project_path_arg())
        .arg(section_arg())
        .arg(output_dir_arg())
        .arg(config_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Report diagnostics without writing output.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a project")
        .after_help(
            r#"EXAMPLES:
  fwgui check gui.json           # errors only
  fwgui check gui.json --strict  # warnings fail too"#,
        )
        .arg(project_path_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Show the packed document object table.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the packed document layout")
        .after_help(
            r#"EXAMPLES:
  fwgui dump gui.json
  fwgui dump gui.json --orientation landscape"#,
        )
        .arg(project_path_arg())
        .arg(orientation_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Show the transparent regions of a page.
pub fn rects_command() -> Command {
    Command::new("rects")
        .about("Show the transparent rectangles of a page")
        .after_help(
            r#"EXAMPLES:
  fwgui rects gui.json --page main"#,
        )
        .arg(project_path_arg())
        .arg(page_arg())
        .arg(verbose_arg())
}
