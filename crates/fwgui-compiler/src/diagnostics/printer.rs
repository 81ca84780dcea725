//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use fwgui_core::Colors;

use super::Diagnostics;
use super::message::Severity;

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    project_name: Option<&'d str>,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            project_name: None,
            colored: false,
        }
    }

    /// Prefix object paths with the project file name.
    pub fn project_name(mut self, name: &'d str) -> Self {
        self.project_name = Some(name);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = Colors::new(self.colored);

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let severity_color = match diag.severity() {
                Severity::Error => c.red,
                Severity::Warning => c.yellow,
            };
            writeln!(
                w,
                "{}{}{}: {}",
                severity_color,
                diag.severity(),
                c.reset,
                diag.message()
            )?;

            match self.project_name {
                Some(name) => writeln!(w, "  {}-->{} {}:{}", c.dim, c.reset, name, diag.path())?,
                None => writeln!(w, "  {}-->{} {}", c.dim, c.reset, diag.path())?,
            }
        }

        Ok(())
    }
}
