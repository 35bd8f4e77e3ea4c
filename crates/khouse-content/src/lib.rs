//! # khouse-content
//!
//! Static, compiled-in content of the K-House 71 brochure site: every
//! user-visible string in five languages plus the language independent
//! property data (room cards, rate table, facility icons, links).
//!
//! ## Quick Start
//!
//! ```rust
//! use khouse_content::{Catalog, LanguageCode, Direction};
//!
//! let tree = Catalog::resolve("jp");
//! assert_eq!(tree.nav.home, "ホーム");
//!
//! // Unknown codes fall back to English
//! assert_eq!(Catalog::resolve("fr").nav.home, "Home");
//!
//! assert_eq!(LanguageCode::Ar.direction(), Direction::Rtl);
//! ```
//!
//! ## Layout
//!
//! ```text
//! Catalog ──┬── locales::{th,en,jp,cn,ar}::CONTENT   (ContentTree)
//!           └── property::{ROOM_CARDS, RATES, FACILITY_ICONS}
//! ```
//!
//! `rooms.types[i]` describes `ROOM_CARDS[i]` and `facilities.items[i]` is
//! drawn with `FACILITY_ICONS[i]`. [`Catalog::validate`] checks those pairings.

#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod language;
pub mod locales;
pub mod property;
pub mod tree;

// Re-exports for convenience
pub use catalog::{resolve, Catalog, CONTRACT_OPTIONS, RATE_TABLE_COLUMNS};
pub use error::{Error, Result};
pub use language::{direction_for, Direction, LanguageCode, LanguageOption, LANGUAGE_OPTIONS};
pub use property::{
    mailto_href, room_card, tel_href, FacilityIcon, Rate, RateRow, RateTerms, RoomCard,
    FACILITY_ICONS, PROMO_FLOOR_PRICE, RATES, ROOM_CARDS,
};
pub use tree::ContentTree;
