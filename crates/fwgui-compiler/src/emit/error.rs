//! Error types for document packing.

/// Error during packing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmitError {
    /// An object starts beyond what a 16-bit pointer can address.
    DocumentTooLarge(usize),
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DocumentTooLarge(offset) => {
                write!(f, "document too large: object at offset {offset} (max 65535)")
            }
        }
    }
}

impl std::error::Error for EmitError {}
