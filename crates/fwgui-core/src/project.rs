//! Top-level project collections.

use serde::Deserialize;

use crate::data::StaticData;
use crate::geometry::Rect;
use crate::style::{ResolvedStyle, Style};
use crate::widget::{StyleRef, Widget};

/// A GUI project: everything the packer reads.
///
/// Collection order matters: reference indices are 1-based positions in
/// these vectors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub styles: Vec<Style>,
    #[serde(default)]
    pub fonts: Vec<Font>,
    #[serde(default)]
    pub bitmaps: Vec<Bitmap>,
    #[serde(default)]
    pub global_variables: Vec<GlobalVariable>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub data: StaticData,
}

impl Project {
    /// Pages rendered as screens, in declaration order.
    pub fn screen_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| !p.used_as_user_widget)
    }

    /// Pages used as user-widget layouts, in declaration order.
    pub fn user_widget_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| p.used_as_user_widget)
    }

    pub fn page(&self, name: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.name == name)
    }

    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Resolve every property of `style` through its `inheritFrom` chain.
    pub fn resolve_style<'a>(&'a self, style: &'a Style) -> ResolvedStyle<'a> {
        let mut chain: Vec<&'a Style> = vec![style];
        let mut current = style;
        while let Some(parent) = current.inherit_from.as_deref().and_then(|n| self.style(n)) {
            if chain.iter().any(|s| std::ptr::eq(*s, parent)) {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        ResolvedStyle::from_chain(&chain)
    }
}

/// Display orientation of a document build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(format!("unknown orientation `{s}`")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub used_as_user_widget: bool,
    #[serde(default)]
    pub close_page_if_touched_outside: bool,
    /// Page background style; the `default` style applies when unset.
    #[serde(default)]
    pub style: Option<StyleRef>,
    /// Geometry and widgets used instead of the page's own in portrait builds.
    #[serde(default)]
    pub portrait: Option<PageLayout>,
    /// Geometry and widgets used instead of the page's own in landscape builds.
    #[serde(default)]
    pub landscape: Option<PageLayout>,
}

/// Orientation-specific replacement of a page's geometry and widgets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

/// The page content a document build actually serializes.
#[derive(Debug, Clone, Copy)]
pub struct PageFrame<'a> {
    pub name: &'a str,
    pub rect: Rect,
    pub widgets: &'a [Widget],
    pub close_page_if_touched_outside: bool,
    pub style: Option<&'a StyleRef>,
}

impl Page {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// The default frame, ignoring orientation overrides.
    pub fn frame(&self) -> PageFrame<'_> {
        PageFrame {
            name: &self.name,
            rect: self.rect(),
            widgets: &self.widgets,
            close_page_if_touched_outside: self.close_page_if_touched_outside,
            style: self.style.as_ref(),
        }
    }

    /// The frame for `orientation`, falling back to the page itself.
    pub fn frame_for(&self, orientation: Orientation) -> PageFrame<'_> {
        let layout = match orientation {
            Orientation::Portrait => self.portrait.as_ref(),
            Orientation::Landscape => self.landscape.as_ref(),
        };
        match layout {
            Some(l) => PageFrame {
                name: &self.name,
                rect: Rect::new(l.left, l.top, l.width, l.height),
                widgets: &l.widgets,
                close_page_if_touched_outside: self.close_page_if_touched_outside,
                style: self.style.as_ref(),
            },
            None => self.frame(),
        }
    }
}

/// Orientation a font is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenOrientation {
    #[default]
    All,
    Portrait,
    Landscape,
}

impl ScreenOrientation {
    /// Preprocessor suffix, `None` for fonts compiled into every build.
    pub fn guard(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Portrait => Some("PORTRAIT"),
            Self::Landscape => Some("LANDSCAPE"),
        }
    }
}

fn one_bpp() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub name: String,
    #[serde(default)]
    pub ascent: i32,
    #[serde(default)]
    pub descent: i32,
    /// Bits per pixel, 1 or 8.
    #[serde(default = "one_bpp")]
    pub bpp: u8,
    #[serde(default)]
    pub screen_orientation: ScreenOrientation,
    #[serde(default)]
    pub glyphs: Vec<Glyph>,
}

/// BDF-style glyph metrics plus packed pixel rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    pub encoding: i32,
    #[serde(default)]
    pub dx: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default, alias = "pixelArray")]
    pub pixels: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bitmap {
    pub name: String,
    /// Path of the pixel source, resolved by the bitmap loader.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub height: Option<u16>,
    /// Pixel bytes embedded directly in the project.
    #[serde(default)]
    pub pixels: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalVariable {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    pub name: String,
}
