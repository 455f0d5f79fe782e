//! Host font discovery and descriptor-to-face resolution.
//!
//! FLTK exposes every loaded face as a flat, indexed list of names. Styled
//! variants are separate entries, named either with a one-letter attribute
//! prefix (`' '` regular, `B` bold, `I` italic, `P` bold italic) or with
//! trailing face words (`"DejaVu Sans Bold"`, `"DejaVu Sans Book"`). This
//! module groups them back into families.

use std::collections::HashSet;

use fltk::{app, enums::Font};

use crate::app::domain::{FontCatalog, FontDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    /// Position in FLTK's font table.
    pub index: usize,
    pub family: String,
    pub bold: bool,
    pub italic: bool,
    /// False for near matches such as "Medium" or "Semibold"; a canonical
    /// face of the same style wins over them.
    pub canonical: bool,
}

/// Words naming the plain face of a family.
const REGULAR_WORDS: [&str; 4] = ["Regular", "Book", "Roman", "Normal"];
const NEAR_REGULAR_WORDS: [&str; 1] = ["Medium"];
const BOLD_WORDS: [&str; 1] = ["Bold"];
const NEAR_BOLD_WORDS: [&str; 4] = ["Semibold", "SemiBold", "Demibold", "DemiBold"];
const ITALIC_WORDS: [&str; 2] = ["Italic", "Oblique"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFace {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
    pub canonical: bool,
}

/// Strip trailing face words. The first word is always kept, so a family
/// literally called "Book" stays "Book".
fn strip_face_words(name: &str) -> ParsedFace {
    let mut family = name.trim();
    let (mut bold, mut italic, mut canonical) = (false, false, true);
    while let Some((head, last)) = family.rsplit_once(' ') {
        if BOLD_WORDS.contains(&last) {
            bold = true;
        } else if NEAR_BOLD_WORDS.contains(&last) {
            bold = true;
            canonical = false;
        } else if ITALIC_WORDS.contains(&last) {
            italic = true;
        } else if NEAR_REGULAR_WORDS.contains(&last) {
            canonical = false;
        } else if !REGULAR_WORDS.contains(&last) {
            break;
        }
        family = head.trim_end();
    }
    ParsedFace { family: family.to_string(), bold, italic, canonical }
}

/// Split a raw FLTK face name into family and style.
///
/// A leading space always marks the attribute-prefix convention. A leading
/// `B`, `I` or `P` only counts as a prefix when the remainder names a family
/// that also has a space-prefixed regular entry in `regular_families`;
/// otherwise the letter belongs to the name ("Bitstream Charter", "Impact").
pub fn parse_face_name(raw: &str, regular_families: &HashSet<String>) -> ParsedFace {
    let mut chars = raw.chars();
    let (prefix_bold, prefix_italic) = match chars.next() {
        Some(' ') => (false, false),
        Some('B') => (true, false),
        Some('I') => (false, true),
        Some('P') => (true, true),
        _ => return strip_face_words(raw),
    };
    let rest = chars.as_str();
    let mut parsed = strip_face_words(rest);
    let is_prefixed = raw.starts_with(' ') || regular_families.contains(&parsed.family);
    if !is_prefixed {
        return strip_face_words(raw);
    }
    parsed.bold |= prefix_bold;
    parsed.italic |= prefix_italic;
    parsed
}

/// Families that appear with the space-prefixed regular marker.
fn prefixed_regular_families(names: &[String]) -> HashSet<String> {
    names
        .iter()
        .filter_map(|n| n.strip_prefix(' '))
        .map(|rest| strip_face_words(rest).family)
        .filter(|family| !family.is_empty())
        .collect()
}

/// Pick the first canonical face, else the first face at all.
fn best_face<'a>(faces: impl Iterator<Item = &'a FontFace>) -> Option<usize> {
    let mut fallback = None;
    for face in faces {
        if face.canonical {
            return Some(face.index);
        }
        fallback.get_or_insert(face.index);
    }
    fallback
}

/// Faces known to FLTK, grouped by family. Loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct SystemFonts {
    faces: Vec<FontFace>,
    families: Vec<String>,
}

impl SystemFonts {
    /// Read FLTK's font table. Call after `App::load_system_fonts()`.
    pub fn load() -> Self {
        let fonts = Self::from_names(&app::fonts());
        if fonts.families.is_empty() {
            eprintln!("WARN: no fonts reported by the system, Format/Font will be empty");
        }
        fonts
    }

    pub fn from_names(names: &[String]) -> Self {
        let regular_families = prefixed_regular_families(names);
        let faces: Vec<FontFace> = names
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let parsed = parse_face_name(raw, &regular_families);
                (!parsed.family.is_empty()).then_some(FontFace {
                    index,
                    family: parsed.family,
                    bold: parsed.bold,
                    italic: parsed.italic,
                    canonical: parsed.canonical,
                })
            })
            .collect();

        let mut families: Vec<String> = faces.iter().map(|f| f.family.clone()).collect();
        families.sort();
        families.dedup();

        Self { faces, families }
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// Index of the face that renders `font`.
    ///
    /// An exact style match is preferred. A bold or italic request the family
    /// has no face for falls back to the family's regular face. A regular
    /// request never lands on a styled face: with no regular face it
    /// resolves to nothing and the default face is used.
    pub fn resolve_index(&self, font: &FontDescriptor) -> Option<usize> {
        let in_family = || self.faces.iter().filter(move |f| f.family == font.family);
        let exact = best_face(in_family().filter(|f| f.bold == font.bold && f.italic == font.italic));
        if exact.is_some() || !(font.bold || font.italic) {
            return exact;
        }
        best_face(in_family().filter(|f| !f.bold && !f.italic))
    }

    /// FLTK face for `font`. Anything unresolved goes through FLTK's own
    /// lookup, which falls back to its default face.
    pub fn resolve(&self, font: &FontDescriptor) -> Font {
        match self.resolve_index(font) {
            Some(index) => Font::by_index(index),
            None => Font::by_name(&font.family),
        }
    }
}

impl FontCatalog for SystemFonts {
    fn list_available_font_families(&self) -> Vec<String> {
        self.families.clone()
    }
}
