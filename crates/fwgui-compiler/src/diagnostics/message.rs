/// Diagnostic kinds raised while packing a project.
///
/// Reference lookups that fail produce a diagnostic and pack as index 0;
/// indices above 255 also pack as 0 but stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Symbolic references that did not resolve
    UnresolvedStyle,
    UnresolvedFont,
    UnresolvedBitmap,
    UnresolvedAction,
    UnresolvedVariable,
    UnresolvedPageLayout,

    // Incomplete widget definitions
    MissingListItemWidget,

    // Firmware bootloader "!!!" sequence
    BootloaderPatternFixed,
    BootloaderPatternDetected,

    // Packed data beyond 16-bit offsets; the section is skipped
    DocumentTooLarge,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::BootloaderPatternFixed => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnresolvedStyle => "style not found",
            Self::UnresolvedFont => "font not found",
            Self::UnresolvedBitmap => "bitmap not found",
            Self::UnresolvedAction => "action not found",
            Self::UnresolvedVariable => "global variable not found",
            Self::UnresolvedPageLayout => "user widget page not found",
            Self::MissingListItemWidget => "list item widget is missing",
            Self::BootloaderPatternFixed => "\"!!!\" detected and replaced with \"!! \"",
            Self::BootloaderPatternDetected => "\"!!!\" detected in data, not possible to fix",
            Self::DocumentTooLarge => "data too large for 16-bit offsets",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnresolvedStyle => "style `{}` is not defined".to_string(),
            Self::UnresolvedFont => "font `{}` is not defined".to_string(),
            Self::UnresolvedBitmap => "bitmap `{}` is not defined".to_string(),
            Self::UnresolvedAction => "action `{}` is not defined".to_string(),
            Self::UnresolvedVariable => "global variable `{}` is not defined".to_string(),
            Self::UnresolvedPageLayout => "`{}` is not a user widget page".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Object path inside the project, e.g. `pages[Main]/widgets[2]/style`.
    pub(crate) path: String,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, path: impl Into<String>) -> Self {
        Self::new(kind, path, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}: {}", self.severity(), self.path, self.message)
    }
}
