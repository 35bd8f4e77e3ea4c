//! Language independent property data: room cards, rate table, facility
//! icons and outbound links.

use serde::Serialize;

/// A room type card of the rooms section.
#[derive(Debug, PartialEq, Serialize)]
pub struct RoomCard {
    pub id: u32,
    /// Floor area label, e.g. "28 sq.m."
    pub size: &'static str,
    /// Lowest monthly promotion price, already formatted
    pub start_price: &'static str,
    /// Gallery images, first one is the card cover
    pub images: &'static [&'static str],
    pub hot_promo: bool,
}

impl RoomCard {
    /// Cover image of the card.
    pub fn cover(&self) -> Option<&'static str> {
        self.images.first().copied()
    }
}

/// A struck-through list price next to the promotion price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rate {
    pub old: &'static str,
    pub new: &'static str,
}

/// Contract lengths offered in the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateTerms {
    pub y1: Rate,
    pub m6: Rate,
    /// Short contracts are not offered for studios
    pub m3: Option<Rate>,
}

/// A row of the rate table.
#[derive(Debug, PartialEq, Serialize)]
pub struct RateRow {
    pub name: &'static str,
    pub size: &'static str,
    pub rates: RateTerms,
}

/// Icons of the facilities grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FacilityIcon {
    Wifi,
    Shield,
    Car,
    Star,
    Coffee,
    Home,
}

impl FacilityIcon {
    /// Glyph used when rendering the icon inline.
    pub fn glyph(&self) -> &'static str {
        match self {
            FacilityIcon::Wifi => "📶",
            FacilityIcon::Shield => "🛡",
            FacilityIcon::Car => "🚗",
            FacilityIcon::Star => "★",
            FacilityIcon::Coffee => "☕",
            FacilityIcon::Home => "⌂",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FacilityIcon::Wifi => "wifi",
            FacilityIcon::Shield => "shield",
            FacilityIcon::Car => "car",
            FacilityIcon::Star => "star",
            FacilityIcon::Coffee => "coffee",
            FacilityIcon::Home => "home",
        }
    }
}

/// Paired by position with `facilities.items` of every content tree.
pub const FACILITY_ICONS: [FacilityIcon; 6] = [
    FacilityIcon::Wifi,
    FacilityIcon::Shield,
    FacilityIcon::Car,
    FacilityIcon::Star,
    FacilityIcon::Coffee,
    FacilityIcon::Home,
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80";
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1493809842364-78817add7ffb?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/p/K-House-Apartment-100063709861884/";
pub const MAP_URL: &str = "https://maps.app.goo.gl/2Z5Mir77TxRSJdoj8";

/// Accepted card brands shown under the rate table.
pub const CARD_LOGOS: [(&str, &str); 3] = [
    ("VISA", "https://upload.wikimedia.org/wikipedia/commons/0/04/Visa.svg"),
    (
        "MasterCard",
        "https://upload.wikimedia.org/wikipedia/commons/2/2a/Mastercard-logo.svg",
    ),
    ("JCB", "https://upload.wikimedia.org/wikipedia/commons/4/40/JCB_logo.svg"),
];

/// Lowest 1-year price, shown on the promotion banner.
pub const PROMO_FLOOR_PRICE: &str = "5,900";

/// Cards of the rooms grid. Card N takes its title and features from
/// `rooms.types[N]` of the active language.
pub static ROOM_CARDS: [RoomCard; 4] = [
    RoomCard {
        id: 0,
        size: "28 sq.m.",
        start_price: "6,400",
        images: &[
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1554995207-c18c203602cb?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        hot_promo: false,
    },
    RoomCard {
        id: 1,
        size: "26 sq.m.",
        start_price: "5,900",
        images: &[
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1505691938895-1758d7feb511?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        hot_promo: false,
    },
    RoomCard {
        id: 2,
        size: "52 - 56 sq.m.",
        start_price: "12,000",
        images: &[
            "https://images.unsplash.com/photo-1505693314120-0d443867891c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        hot_promo: true,
    },
    RoomCard {
        id: 3,
        size: "52 - 54 sq.m.",
        start_price: "13,000",
        images: &[
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            "https://images.unsplash.com/photo-1507089947368-19c1da9775ae?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ],
        hot_promo: true,
    },
];

const fn rate(old: &'static str, new: &'static str) -> Rate {
    Rate { old, new }
}

/// Rows of the rate table, in display order.
pub static RATES: [RateRow; 7] = [
    RateRow {
        name: "Studio A (Big Balcony)",
        size: "(28 Sqm.)",
        rates: RateTerms {
            y1: rate("6,900", "6,400"),
            m6: rate("7,200", "6,800"),
            m3: None,
        },
    },
    RateRow {
        name: "Studio B (Small Balcony)",
        size: "(26 Sqm.)",
        rates: RateTerms {
            y1: rate("6,500", "5,900"),
            m6: rate("6,800", "6,400"),
            m3: None,
        },
    },
    RateRow {
        name: "Sweet Corner / Front",
        size: "(52 Sqm.)",
        rates: RateTerms {
            y1: rate("15,000", "12,000"),
            m6: rate("16,000", "13,000"),
            m3: Some(rate("18,000", "14,000")),
        },
    },
    RateRow {
        name: "Sweet Corner / Front",
        size: "(54 Sqm.)",
        rates: RateTerms {
            y1: rate("16,000", "13,000"),
            m6: rate("17,000", "14,000"),
            m3: Some(rate("19,000", "15,000")),
        },
    },
    RateRow {
        name: "Sweet Corner / Back",
        size: "(56 Sqm.)",
        rates: RateTerms {
            y1: rate("17,000", "14,000"),
            m6: rate("18,000", "15,000"),
            m3: Some(rate("20,000", "16,000")),
        },
    },
    RateRow {
        name: "Suite 1 Bedroom Corner",
        size: "(52 Sqm.)",
        rates: RateTerms {
            y1: rate("16,000", "13,000"),
            m6: rate("17,000", "14,000"),
            m3: Some(rate("19,000", "15,000")),
        },
    },
    RateRow {
        name: "Suite 1 Bedroom Corner",
        size: "(54 Sqm.)",
        rates: RateTerms {
            y1: rate("17,000", "14,000"),
            m6: rate("18,000", "15,000"),
            m3: Some(rate("20,000", "16,000")),
        },
    },
];

/// Look up a room card by id.
pub fn room_card(id: u32) -> Option<&'static RoomCard> {
    ROOM_CARDS.iter().find(|card| card.id == id)
}

/// `tel:` link for a displayed phone number. Everything except digits and
/// `+` is dropped.
pub fn tel_href(phone_display: &str) -> String {
    let digits: String = phone_display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

/// `mailto:` link for an address.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+66 88-524-5959"), "tel:+66885245959");
        assert_eq!(tel_href("088-524-5959"), "tel:0885245959");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(
            mailto_href("contact@k-house71.com"),
            "mailto:contact@k-house71.com"
        );
    }

    #[test]
    fn test_room_card_lookup() {
        assert_eq!(room_card(2).map(|c| c.start_price), Some("12,000"));
        assert!(room_card(42).is_none());
    }

    #[test]
    fn test_every_card_has_a_cover() {
        for card in &ROOM_CARDS {
            assert!(card.cover().is_some(), "card {} has no cover", card.id);
        }
    }

    #[test]
    fn test_promo_floor_is_lowest_yearly_rate() {
        let lowest = RATES
            .iter()
            .map(|row| row.rates.y1.new.replace(',', "").parse::<u32>().unwrap())
            .min()
            .unwrap();
        assert_eq!(lowest.to_string(), PROMO_FLOOR_PRICE.replace(',', ""));
    }
}
