//! Output section names.

/// A named fragment of generated C text.
///
/// Sections are always produced in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionName {
    FontsEnum,
    BitmapsEnum,
    StylesEnum,
    PagesEnum,
    FontsDecl,
    FontsDef,
    BitmapsDecl,
    BitmapsDef,
    StylesDecl,
    StylesDef,
    DocumentDecl,
    DocumentPortraitDef,
    DocumentLandscapeDef,
}

impl SectionName {
    pub const ALL: [SectionName; 13] = [
        Self::FontsEnum,
        Self::BitmapsEnum,
        Self::StylesEnum,
        Self::PagesEnum,
        Self::FontsDecl,
        Self::FontsDef,
        Self::BitmapsDecl,
        Self::BitmapsDef,
        Self::StylesDecl,
        Self::StylesDef,
        Self::DocumentDecl,
        Self::DocumentPortraitDef,
        Self::DocumentLandscapeDef,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FontsEnum => "GUI_FONTS_ENUM",
            Self::BitmapsEnum => "GUI_BITMAPS_ENUM",
            Self::StylesEnum => "GUI_STYLES_ENUM",
            Self::PagesEnum => "GUI_PAGES_ENUM",
            Self::FontsDecl => "GUI_FONTS_DECL",
            Self::FontsDef => "GUI_FONTS_DEF",
            Self::BitmapsDecl => "GUI_BITMAPS_DECL",
            Self::BitmapsDef => "GUI_BITMAPS_DEF",
            Self::StylesDecl => "GUI_STYLES_DECL",
            Self::StylesDef => "GUI_STYLES_DEF",
            Self::DocumentDecl => "GUI_DOCUMENT_DECL",
            Self::DocumentPortraitDef => "GUI_DOCUMENT_PORTRAIT_DEF",
            Self::DocumentLandscapeDef => "GUI_DOCUMENT_LANDSCAPE_DEF",
        }
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}`")]
pub struct ParseSectionError(pub String);

impl std::str::FromStr for SectionName {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}
