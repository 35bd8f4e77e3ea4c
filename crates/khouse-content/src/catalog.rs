//! Catalog lookup and structural validation.

use crate::error::{Error, Result};
use crate::language::LanguageCode;
use crate::locales;
use crate::property::{FACILITY_ICONS, ROOM_CARDS};
use crate::tree::ContentTree;

/// Number of columns of the rate table header.
pub const RATE_TABLE_COLUMNS: usize = 4;

/// Number of contract options of the reservation form.
pub const CONTRACT_OPTIONS: usize = 3;

/// Entry point to the static translation tables.
pub struct Catalog;

impl Catalog {
    /// Content tree for a supported language.
    pub fn get(lang: LanguageCode) -> &'static ContentTree {
        match lang {
            LanguageCode::Th => &locales::th::CONTENT,
            LanguageCode::En => &locales::en::CONTENT,
            LanguageCode::Jp => &locales::jp::CONTENT,
            LanguageCode::Cn => &locales::cn::CONTENT,
            LanguageCode::Ar => &locales::ar::CONTENT,
        }
    }

    /// Content tree for a raw code; the English tree when the code is not
    /// recognized. Never fails.
    pub fn resolve(code: &str) -> &'static ContentTree {
        Self::get(LanguageCode::parse_or_fallback(code))
    }

    /// The fallback tree.
    pub fn fallback() -> &'static ContentTree {
        Self::get(LanguageCode::FALLBACK)
    }

    /// Check the positional invariants of every tree against the property
    /// tables: one room type per room card, one facility item per icon, a
    /// full rate table header, and no empty gallery.
    pub fn validate() -> Result<()> {
        for card in &ROOM_CARDS {
            if card.images.is_empty() {
                return Err(Error::EmptyGallery(card.id));
            }
        }

        for lang in LanguageCode::ALL {
            Self::validate_tree(lang.as_str(), Self::get(lang))?;
        }
        Ok(())
    }

    /// Check one tree against the property tables.
    pub fn validate_tree(language: &'static str, tree: &ContentTree) -> Result<()> {
        check_len(language, "rooms.types", ROOM_CARDS.len(), tree.rooms.types.len())?;
        check_len(
            language,
            "facilities.items",
            FACILITY_ICONS.len(),
            tree.facilities.items.len(),
        )?;
        check_len(
            language,
            "rooms.table_headers",
            RATE_TABLE_COLUMNS,
            tree.rooms.table_headers.len(),
        )?;
        check_len(
            language,
            "reservation.contract_options",
            CONTRACT_OPTIONS,
            tree.reservation.contract_options.len(),
        )?;
        Ok(())
    }
}

fn check_len(
    language: &'static str,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<()> {
    if expected != actual {
        return Err(Error::LengthMismatch {
            language,
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Shorthand for [`Catalog::resolve`].
pub fn resolve(code: &str) -> &'static ContentTree {
    Catalog::resolve(code)
}

impl LanguageCode {
    /// Content tree of this language.
    pub fn content(&self) -> &'static ContentTree {
        Catalog::get(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FacilitiesText, FacilityItem};

    #[test]
    fn test_resolve_known_code() {
        assert_eq!(resolve("th").label, "ไทย");
        assert_eq!(resolve("ar").label, "العربية");
    }

    #[test]
    fn test_resolve_unknown_code_is_english() {
        assert!(std::ptr::eq(resolve("xx"), Catalog::fallback()));
        assert!(std::ptr::eq(resolve(""), &locales::en::CONTENT));
    }

    #[test]
    fn test_catalog_is_consistent() {
        assert_eq!(Catalog::validate(), Ok(()));
    }

    #[test]
    fn test_validate_tree_reports_short_list() {
        static SHORT: [FacilityItem; 1] = [FacilityItem { name: "WiFi" }];
        let en = Catalog::fallback();
        let broken = ContentTree {
            facilities: FacilitiesText {
                title: en.facilities.title,
                subtitle: en.facilities.subtitle,
                items: &SHORT,
            },
            ..en.clone()
        };

        let err = Catalog::validate_tree("en", &broken).unwrap_err();
        assert_eq!(
            err,
            Error::LengthMismatch {
                language: "en",
                field: "facilities.items",
                expected: 6,
                actual: 1,
            }
        );
    }
}
