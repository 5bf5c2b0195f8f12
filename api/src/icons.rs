//! The static set of icons shown on the desktop home screen.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde::Serialize;

use crate::icon_color::IconColor;

/// One clickable icon on the desktop grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopIconConfig {
    pub id: String,
    pub label: String,
    /// Where the icon leads. Icons without a link open in a desktop window.
    pub href: Option<String>,
    /// A self-contained `data:` URI, so icons never hit the network.
    pub image: String,
    pub col: u32,
    pub row: u32,
}

/// The optional parts of a `DesktopIconConfig`. Missing grid positions are 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconOptions {
    pub href: Option<String>,
    pub col: Option<u32>,
    pub row: Option<u32>,
}

impl IconOptions {
    pub fn at(col: u32, row: u32) -> Self {
        Self {
            href: None,
            col: Some(col),
            row: Some(row),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

const ICON_SIZE: u32 = 96;
const ICON_CORNER_RADIUS: u32 = 18;
const ICON_FONT: &str = "Inter,Segoe UI,Arial";

/// Renders the tile artwork: a rounded square in `color` with `letter` centred on it.
fn icon_svg(letter: &str, color: IconColor) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}' viewBox='0 0 {size} {size}'>\
         <rect width='{size}' height='{size}' rx='{ICON_CORNER_RADIUS}' fill='{color}'/>\
         <text x='50%' y='55%' dominant-baseline='middle' text-anchor='middle' \
         font-family='{ICON_FONT}' font-size='38' font-weight='600' fill='{fg}'>{letter}</text>\
         </svg>",
        size = ICON_SIZE,
        fg = IconColor::WHITE,
        letter = escape_xml(letter),
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Wraps an SVG document in an inline `data:` URI.
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Builds an icon with generated artwork.
///
/// This is a pure function: the same arguments always produce the same config.
pub fn make_icon(
    id: &str,
    label: &str,
    letter: &str,
    color: IconColor,
    options: IconOptions,
) -> DesktopIconConfig {
    DesktopIconConfig {
        id: id.to_owned(),
        label: label.to_owned(),
        href: options.href,
        image: svg_data_uri(&icon_svg(letter, color)),
        col: options.col.unwrap_or(0),
        row: options.row.unwrap_or(0),
    }
}

/// The icons of the home screen, generated on first access.
pub static INITIAL_ICONS: LazyLock<Vec<DesktopIconConfig>> = LazyLock::new(|| {
    vec![
        make_icon(
            "portfolio",
            "Portfolio",
            "P",
            IconColor::rgb(0x4c, 0xc9, 0xf0),
            IconOptions::at(0, 0).with_href("https://example.com"),
        ),
        make_icon(
            "github",
            "GitHub",
            "G",
            IconColor::rgb(0xff, 0x6b, 0x6b),
            IconOptions::at(1, 0).with_href("https://github.com"),
        ),
        make_icon(
            "linkedin",
            "LinkedIn",
            "L",
            IconColor::rgb(0x7b, 0x68, 0xee),
            IconOptions::at(0, 1).with_href("https://linkedin.com"),
        ),
        make_icon(
            "contact",
            "Contact",
            "C",
            IconColor::rgb(0xff, 0xd1, 0x66),
            IconOptions::at(1, 1).with_href("mailto:hello@example.com"),
        ),
        make_icon(
            "about",
            "About",
            "A",
            IconColor::rgb(0x06, 0xd6, 0xa0),
            IconOptions::at(0, 2),
        ),
    ]
});
