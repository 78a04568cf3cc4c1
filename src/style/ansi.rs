// Style descriptor to ANSI escape rendering
//
// Descriptors are space-separated words: "#rrggbb" foreground, "bg:#rrggbb"
// background, "bold"/"nobold"/"underline" attributes. "noinherit" is a
// layering hint for the resolver and renders as nothing. Unknown words are
// ignored.

use crossterm::style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor};
use std::fmt::Write as _;

pub fn escape(descriptor: &str) -> String {
    let mut out = String::new();
    for word in descriptor.split_whitespace() {
        match word {
            "bold" => {
                let _ = write!(out, "{}", SetAttribute(Attribute::Bold));
            }
            "nobold" => {
                let _ = write!(out, "{}", SetAttribute(Attribute::NormalIntensity));
            }
            "underline" => {
                let _ = write!(out, "{}", SetAttribute(Attribute::Underlined));
            }
            "noinherit" => {}
            _ => {
                if let Some(color) = word.strip_prefix("bg:") {
                    if let Some(color) = parse_hex(color) {
                        let _ = write!(out, "{}", SetBackgroundColor(color));
                    }
                } else if let Some(color) = parse_hex(word) {
                    let _ = write!(out, "{}", SetForegroundColor(color));
                }
            }
        }
    }
    out
}

pub fn reset() -> String {
    format!("{}", SetAttribute(Attribute::Reset))
}

fn parse_hex(word: &str) -> Option<Color> {
    let hex = word.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}
