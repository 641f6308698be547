// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The keyword table: two inverse maps between color keyword names and
//! canonical 8-hex-digit lowercase RGBA strings.
//!
//! A process-wide default registry backs the convenience entry points
//! ([`ColorValue::parse`], [`add_keyword`]); an explicit [`KeywordRegistry`]
//! can be injected instead for test isolation or copy-on-write setups.
//!
//! [`ColorValue::parse`]: crate::ColorValue::parse

use crate::{ColorError, ColorResult, ColorValue};
use std::{collections::HashMap,
          sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard}};

/// The canonical fully-transparent color. Any color whose alpha is exactly
/// zero reverse-maps to this entry.
pub(crate) const TRANSPARENT_KEY: &str = "00000000";

/// Keyword names and their canonical colors, including the CSS2-era extras
/// (`feldspar`, `lightslateblue`, `violetred`) and every `gray`/`grey`
/// spelling alias. Aliases share a canonical value; the `gray` spelling is
/// declared first so reverse lookups prefer it.
pub const CSS_COLOR_KEYWORDS: &[(&str, &str)] = &[
    ("aliceblue", "f0f8ffff"),
    ("antiquewhite", "faebd7ff"),
    ("aqua", "00ffffff"),
    ("aquamarine", "7fffd4ff"),
    ("azure", "f0ffffff"),
    ("beige", "f5f5dcff"),
    ("bisque", "ffe4c4ff"),
    ("black", "000000ff"),
    ("blanchedalmond", "ffebcdff"),
    ("blue", "0000ffff"),
    ("blueviolet", "8a2be2ff"),
    ("brown", "a52a2aff"),
    ("burlywood", "deb887ff"),
    ("cadetblue", "5f9ea0ff"),
    ("chartreuse", "7fff00ff"),
    ("chocolate", "d2691eff"),
    ("coral", "ff7f50ff"),
    ("cornflowerblue", "6495edff"),
    ("cornsilk", "fff8dcff"),
    ("crimson", "dc143cff"),
    ("darkblue", "00008bff"),
    ("darkcyan", "008b8bff"),
    ("darkgoldenrod", "b8860bff"),
    ("darkgray", "a9a9a9ff"),
    ("darkgreen", "006400ff"),
    ("darkgrey", "a9a9a9ff"),
    ("darkkhaki", "bdb76bff"),
    ("darkmagenta", "8b008bff"),
    ("darkolivegreen", "556b2fff"),
    ("darkorange", "ff8c00ff"),
    ("darkorchid", "9932ccff"),
    ("darkred", "8b0000ff"),
    ("darksalmon", "e9967aff"),
    ("darkseagreen", "8fbc8fff"),
    ("darkslateblue", "483d8bff"),
    ("darkslategray", "2f4f4fff"),
    ("darkslategrey", "2f4f4fff"),
    ("darkturquoise", "00ced1ff"),
    ("darkviolet", "9400d3ff"),
    ("deeppink", "ff1493ff"),
    ("deepskyblue", "00bfffff"),
    ("dimgray", "696969ff"),
    ("dimgrey", "696969ff"),
    ("dodgerblue", "1e90ffff"),
    ("feldspar", "d19275ff"),
    ("firebrick", "b22222ff"),
    ("floralwhite", "fffaf0ff"),
    ("forestgreen", "228b22ff"),
    ("fuchsia", "ff00ffff"),
    ("gainsboro", "dcdcdcff"),
    ("ghostwhite", "f8f8ffff"),
    ("gold", "ffd700ff"),
    ("goldenrod", "daa520ff"),
    ("gray", "808080ff"),
    ("green", "008000ff"),
    ("greenyellow", "adff2fff"),
    ("grey", "808080ff"),
    ("honeydew", "f0fff0ff"),
    ("hotpink", "ff69b4ff"),
    ("indianred", "cd5c5cff"),
    ("indigo", "4b0082ff"),
    ("ivory", "fffff0ff"),
    ("khaki", "f0e68cff"),
    ("lavender", "e6e6faff"),
    ("lavenderblush", "fff0f5ff"),
    ("lawngreen", "7cfc00ff"),
    ("lemonchiffon", "fffacdff"),
    ("lightblue", "add8e6ff"),
    ("lightcoral", "f08080ff"),
    ("lightcyan", "e0ffffff"),
    ("lightgoldenrodyellow", "fafad2ff"),
    ("lightgray", "d3d3d3ff"),
    ("lightgreen", "90ee90ff"),
    ("lightgrey", "d3d3d3ff"),
    ("lightpink", "ffb6c1ff"),
    ("lightsalmon", "ffa07aff"),
    ("lightseagreen", "20b2aaff"),
    ("lightskyblue", "87cefaff"),
    ("lightslateblue", "8470ffff"),
    ("lightslategray", "778899ff"),
    ("lightslategrey", "778899ff"),
    ("lightsteelblue", "b0c4deff"),
    ("lightyellow", "ffffe0ff"),
    ("lime", "00ff00ff"),
    ("limegreen", "32cd32ff"),
    ("linen", "faf0e6ff"),
    ("maroon", "800000ff"),
    ("mediumaquamarine", "66cdaaff"),
    ("mediumblue", "0000cdff"),
    ("mediumorchid", "ba55d3ff"),
    ("mediumpurple", "9370d8ff"),
    ("mediumseagreen", "3cb371ff"),
    ("mediumslateblue", "7b68eeff"),
    ("mediumspringgreen", "00fa9aff"),
    ("mediumturquoise", "48d1ccff"),
    ("mediumvioletred", "c71585ff"),
    ("midnightblue", "191970ff"),
    ("mintcream", "f5fffaff"),
    ("mistyrose", "ffe4e1ff"),
    ("moccasin", "ffe4b5ff"),
    ("navajowhite", "ffdeadff"),
    ("navy", "000080ff"),
    ("oldlace", "fdf5e6ff"),
    ("olive", "808000ff"),
    ("olivedrab", "6b8e23ff"),
    ("orange", "ffa500ff"),
    ("orangered", "ff4500ff"),
    ("orchid", "da70d6ff"),
    ("palegoldenrod", "eee8aaff"),
    ("palegreen", "98fb98ff"),
    ("paleturquoise", "afeeeeff"),
    ("palevioletred", "d87093ff"),
    ("papayawhip", "ffefd5ff"),
    ("peachpuff", "ffdab9ff"),
    ("peru", "cd853fff"),
    ("pink", "ffc0cbff"),
    ("plum", "dda0ddff"),
    ("powderblue", "b0e0e6ff"),
    ("purple", "800080ff"),
    ("red", "ff0000ff"),
    ("rebeccapurple", "663399ff"),
    ("rosybrown", "bc8f8fff"),
    ("royalblue", "4169e1ff"),
    ("saddlebrown", "8b4513ff"),
    ("salmon", "fa8072ff"),
    ("sandybrown", "f4a460ff"),
    ("seagreen", "2e8b57ff"),
    ("seashell", "fff5eeff"),
    ("sienna", "a0522dff"),
    ("silver", "c0c0c0ff"),
    ("skyblue", "87ceebff"),
    ("slateblue", "6a5acdff"),
    ("slategray", "708090ff"),
    ("slategrey", "708090ff"),
    ("snow", "fffafaff"),
    ("springgreen", "00ff7fff"),
    ("steelblue", "4682b4ff"),
    ("tan", "d2b48cff"),
    ("teal", "008080ff"),
    ("thistle", "d8bfd8ff"),
    ("tomato", "ff6347ff"),
    ("transparent", "00000000"),
    ("turquoise", "40e0d0ff"),
    ("violet", "ee82eeff"),
    ("violetred", "d02090ff"),
    ("wheat", "f5deb3ff"),
    ("white", "ffffffff"),
    ("whitesmoke", "f5f5f5ff"),
    ("yellow", "ffff00ff"),
    ("yellowgreen", "9acd32ff"),
];

/// Forward (name → canonical color) and inverse (canonical color → name)
/// keyword maps. `Default` seeds both from [`CSS_COLOR_KEYWORDS`].
#[derive(Debug, Clone)]
pub struct KeywordRegistry {
    name_to_color: HashMap<String, String>,
    color_to_name: HashMap<String, String>,
}

impl Default for KeywordRegistry {
    fn default() -> Self {
        let mut name_to_color = HashMap::with_capacity(CSS_COLOR_KEYWORDS.len());
        let mut color_to_name = HashMap::with_capacity(CSS_COLOR_KEYWORDS.len());
        for &(name, canonical) in CSS_COLOR_KEYWORDS {
            name_to_color.insert(name.to_owned(), canonical.to_owned());
            // First declaration wins, so spelling aliases reverse-map to the
            // name declared first.
            color_to_name
                .entry(canonical.to_owned())
                .or_insert_with(|| name.to_owned());
        }
        Self {
            name_to_color,
            color_to_name,
        }
    }
}

impl KeywordRegistry {
    /// A registry with no seeded keywords.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            name_to_color: HashMap::new(),
            color_to_name: HashMap::new(),
        }
    }

    /// Resolve a (case-normalized) keyword name to its canonical color.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.name_to_color.get(name).map(String::as_str)
    }

    /// Reverse-resolve a canonical color to its keyword name.
    #[must_use]
    pub fn keyword_for(&self, canonical: &str) -> Option<&str> {
        self.color_to_name.get(canonical).map(String::as_str)
    }

    /// Register `name` for an already parsed color. Both directions are
    /// inserted; existing entries for the name or the color are overwritten
    /// silently, last write wins.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidKeywordName`] when `name` is empty or blank.
    pub fn add_keyword(&mut self, name: &str, color: &ColorValue) -> ColorResult<()> {
        if name.trim().is_empty() {
            return Err(ColorError::InvalidKeywordName);
        }
        let name = name.to_lowercase();
        let canonical = color
            .to_hexa()
            .as_str()
            .trim_start_matches('#')
            .to_lowercase();
        self.name_to_color.insert(name.clone(), canonical.clone());
        self.color_to_name.insert(canonical, name);
        Ok(())
    }

    /// Register `name` for a color given as a string, parsed against this
    /// registry (without a `currentcolor` context).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidKeywordName`] for an empty name, or
    /// [`ColorError::UnresolvableKeywordColor`] carrying the parse failure.
    pub fn add_keyword_str(&mut self, name: &str, color: &str) -> ColorResult<()> {
        let parsed = ColorValue::parse_with(color, self, None)
            .map_err(|err| ColorError::UnresolvableKeywordColor(Box::new(err)))?;
        self.add_keyword(name, &parsed)
    }
}

static GLOBAL_KEYWORDS: LazyLock<RwLock<KeywordRegistry>> =
    LazyLock::new(|| RwLock::new(KeywordRegistry::default()));

/// Read access to the process-wide default registry.
pub(crate) fn global_keywords() -> RwLockReadGuard<'static, KeywordRegistry> {
    GLOBAL_KEYWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Register `name` as a keyword for `color` (a color string) in the
/// process-wide table.
///
/// # Errors
///
/// [`ColorError::InvalidKeywordName`] for an empty name, or
/// [`ColorError::UnresolvableKeywordColor`] when `color` does not parse.
pub fn add_keyword(name: &str, color: &str) -> ColorResult<()> {
    let parsed = ColorValue::parse(color)
        .map_err(|err| ColorError::UnresolvableKeywordColor(Box::new(err)))?;
    add_keyword_color(name, &parsed)
}

/// Register `name` as a keyword for an already parsed color in the
/// process-wide table.
///
/// # Errors
///
/// [`ColorError::InvalidKeywordName`] when `name` is empty or blank.
pub fn add_keyword_color(name: &str, color: &ColorValue) -> ColorResult<()> {
    let mut registry = GLOBAL_KEYWORDS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.add_keyword(name, color)
}
