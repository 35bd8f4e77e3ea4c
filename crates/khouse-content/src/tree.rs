//! The localized content tree.
//!
//! One [`ContentTree`] exists per language. All trees share the same shape;
//! lists that are paired by position with the property tables
//! (`rooms.types`, `facilities.items`, `rooms.table_headers`) must keep the
//! same length in every language.

use serde::Serialize;

/// Every user-visible string of the page for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentTree {
    /// Native name of the language
    pub label: &'static str,
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub facilities: FacilitiesText,
    pub rooms: RoomsText,
    pub contact: ContactText,
    pub promotion: PromotionText,
    pub promotion_banner: PromotionBannerText,
    pub room_matcher: RoomMatcherText,
    pub chatbot: ChatbotText,
    pub reservation: ReservationText,
    pub footer: FooterText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavText {
    pub home: &'static str,
    pub about: &'static str,
    pub rooms: &'static str,
    pub facilities: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroText {
    pub location_badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_rooms: &'static str,
    pub cta_contact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutText {
    pub welcome: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub points: &'static [&'static str],
    pub location_card: LocationCard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationCard {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilitiesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Paired by position with [`crate::FACILITY_ICONS`]
    pub items: &'static [FacilityItem],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityItem {
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub disclaimer: &'static str,
    pub price_start: &'static str,
    pub unit: &'static str,
    pub unit_label: &'static str,
    /// Room type, 1 year, 6 months, 3 months
    pub table_headers: &'static [&'static str],
    pub extra_charges: &'static str,
    pub tv: &'static str,
    pub fridge: &'static str,
    pub cc: &'static str,
    pub view_photos: &'static str,
    pub ai_help_btn: &'static str,
    /// Paired by position with [`crate::ROOM_CARDS`]
    pub types: &'static [RoomType],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomType {
    pub title: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactText {
    pub title: &'static str,
    pub desc: &'static str,
    pub address_title: &'static str,
    pub address_val: &'static str,
    pub phone_title: &'static str,
    pub phone_display: &'static str,
    pub phone_action: &'static str,
    pub email_title: &'static str,
    pub email_val: &'static str,
    pub social_title: &'static str,
    pub social_label: &'static str,
    pub map_btn: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionText {
    pub title: &'static str,
    pub detail: &'static str,
    pub cta: &'static str,
    pub limited: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionBannerText {
    pub starting_from: &'static str,
    pub unit_mo: &'static str,
    pub contract_1yr: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomMatcherText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub analyze_btn: &'static str,
    pub result_title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatbotText {
    pub open_btn: &'static str,
    pub title: &'static str,
    pub greeting: &'static str,
    pub placeholder: &'static str,
    pub send_btn: &'static str,
    pub busy: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationText {
    pub open_btn: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub room_type: &'static str,
    pub move_in: &'static str,
    pub contract: &'static str,
    /// 1 year, 6 months, 3 months
    pub contract_options: &'static [&'static str],
    pub message: &'static str,
    pub required_hint: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success_title: &'static str,
    pub success_detail: &'static str,
    pub close: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterText {
    pub rights: &'static str,
}

impl RoomsText {
    /// Localized room type for the card at `index`, if the tree has one.
    pub fn room_type(&self, index: usize) -> Option<&'static RoomType> {
        self.types.get(index)
    }
}

impl NavText {
    /// Section anchors and their labels, in navbar order.
    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("home", self.home),
            ("about", self.about),
            ("rooms", self.rooms),
            ("facilities", self.facilities),
            ("contact", self.contact),
        ]
    }
}
