//! Font identity and the font-loading capability supplied by the host.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A `{family, style}` pair, e.g. `Inter Bold`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Font {0} is not available")]
pub struct FontLoadError(pub FontName);

/// Loads fonts on behalf of the converter
///
/// Text nodes call this before their characters are set. The call may block
/// while the host fetches the font; the traversal does not continue until it
/// returns.
pub trait FontLoader {
    fn load_font(&mut self, font: &FontName) -> Result<(), FontLoadError>;
}

/// In-process font loader backed by a set of available families
///
/// Every request is recorded in order, which is how callers observe the font
/// side effects of a conversion.
#[derive(Debug, Clone, Default)]
pub struct FontBook {
    /// `None` means every family is available
    families: Option<HashSet<String>>,
    requested: Vec<FontName>,
}

impl FontBook {
    /// A font book where every font loads
    pub fn permissive() -> Self {
        Self::default()
    }

    /// A font book restricted to the given families (any style)
    ///
    /// The base family is always available so the fallback chain cannot fail.
    pub fn with_families<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: HashSet<String> = families.into_iter().map(Into::into).collect();
        set.insert(crate::types::BASE_FONT_FAMILY.to_string());
        Self {
            families: Some(set),
            requested: Vec::new(),
        }
    }

    /// Every font requested so far, in request order
    pub fn requested(&self) -> &[FontName] {
        &self.requested
    }
}

impl FontLoader for FontBook {
    fn load_font(&mut self, font: &FontName) -> Result<(), FontLoadError> {
        self.requested.push(font.clone());
        match &self.families {
            Some(families) if !families.contains(&font.family) => {
                Err(FontLoadError(font.clone()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_loads_everything() {
        let mut book = FontBook::permissive();
        assert!(book.load_font(&FontName::new("Comic Neue", "Bold")).is_ok());
        assert_eq!(book.requested().len(), 1);
    }

    #[test]
    fn test_restricted_book() {
        let mut book = FontBook::with_families(["Roboto"]);

        assert!(book.load_font(&FontName::new("Roboto", "Light")).is_ok());
        assert!(book.load_font(&FontName::new("Inter", "Regular")).is_ok());

        let result = book.load_font(&FontName::new("Helvetica", "Regular"));
        match result {
            Err(FontLoadError(font)) => assert_eq!(font.family, "Helvetica"),
            _ => panic!("Expected FontLoadError"),
        }

        assert_eq!(book.requested().len(), 3);
    }

    #[test]
    fn test_font_name_display() {
        assert_eq!(FontName::new("Inter", "SemiBold").to_string(), "Inter SemiBold");
    }
}
