//! English content, also the fallback tree.

use crate::tree::*;

pub static CONTENT: ContentTree = ContentTree {
    label: "English",
    nav: NavText {
        home: "Home",
        about: "About Us",
        rooms: "Rooms & Rates",
        facilities: "Facilities",
        contact: "Contact",
    },
    hero: HeroText {
        location_badge: "Sukhumvit 71 • Pridi Banomyong 14",
        title: "Luxury Apartment Condo Style",
        subtitle: "Experience perfect urban living. Quiet, private, and green. Near BTS Phra Khanong with full facilities.",
        cta_rooms: "View Rooms",
        cta_contact: "Contact Us",
    },
    about: AboutText {
        welcome: "Welcome to K-House 71",
        title: "Perfect Living in the City Center",
        desc: "K-House Sukhumvit 71 is a luxury serviced apartment decorated in modern-condo style. We select Grade A materials to serve the new generation and working people who need peace and privacy.",
        points: &[
            "Near BTS Phra Khanong (24hr Motorbike taxi service)",
            "Near Chalong Rat Expressway (Easy access to city)",
            "Near Bangkok Prep & St. Andrews International Schools",
            "Foodie Heaven! Near MaxValu, Lotus & Famous Street Food (Pridi Banomyong 2)",
            "Multiple access routes (Sukhumvit 71, Khlong Tan, Phetchaburi)",
        ],
        location_card: LocationCard {
            label: "Prime Location",
            value: "Near Expressway & Street Food",
        },
    },
    facilities: FacilitiesText {
        title: "Facilities",
        subtitle: "Complete with functions to make your stay as comfortable as possible.",
        items: &[
            FacilityItem { name: "Free High-Speed WiFi" },
            FacilityItem { name: "CCTV & 24hr Security" },
            FacilityItem { name: "Indoor Parking" },
            FacilityItem { name: "Key Card Access" },
            FacilityItem { name: "Lobby Area" },
            FacilityItem { name: "Elevator" },
        ],
    },
    rooms: RoomsText {
        title: "Room Types & Rates",
        subtitle: "HOT PROMOTION! Special discount available for short term and long term agreements.",
        disclaimer: "*** Prices are subjected to change without prior notice.",
        price_start: "Promo starts at",
        unit: "Baht/Month",
        unit_label: "Unit: Baht",
        table_headers: &[
            "Room Type",
            "1 Year Contract",
            "6 Months Contract",
            "3 Months Contract",
        ],
        extra_charges: "Extra Charges",
        tv: "Television 500 Baht / month",
        fridge: "Refrigerator 500 Baht / month",
        cc: "We accept major Credit Cards",
        view_photos: "View Photos",
        ai_help_btn: "Help Me Choose (AI)",
        types: &[
            RoomType {
                title: "Studio A (Big Balcony)",
                features: &["Big Balcony", "Built-in Furniture", "AC & Water Heater"],
            },
            RoomType {
                title: "Studio B (Small Balcony)",
                features: &["Small Balcony", "King Size Bed", "AC & Water Heater"],
            },
            RoomType {
                title: "Sweet Corner (Front/Back)",
                features: &["1 Bed 1 Living", "Nice Corner View", "52 - 56 sq.m."],
            },
            RoomType {
                title: "Suite 1 Bedroom Corner",
                features: &["1 Bedroom Suite", "Spacious", "52 - 54 sq.m."],
            },
        ],
    },
    contact: ContactText {
        title: "Contact Us",
        desc: "Interested in visiting or need more info? Contact us via channels below. Open 24/7.",
        address_title: "Address",
        address_val: "54 Soi Pridi Banomyong 14, Sukhumvit 71 Rd, Watthana, Bangkok 10110",
        phone_title: "Phone",
        phone_display: "+66 88-524-5959",
        phone_action: "Tap to call",
        email_title: "Email",
        email_val: "contact@k-house71.com",
        social_title: "Facebook",
        social_label: "K-House Apartment",
        map_btn: "View Google Maps",
    },
    promotion: PromotionText {
        title: "Special Promotion! 🔥",
        detail: "Special discount for 6-month & 1-year contracts.",
        cta: "See Rates & Book",
        limited: "Hurry! Limited Availability",
    },
    promotion_banner: PromotionBannerText {
        starting_from: "Starting from",
        unit_mo: "/mo",
        contract_1yr: "1 Year Contract",
    },
    room_matcher: RoomMatcherText {
        title: "AI Room Matcher ✨",
        subtitle: "Unsure which room fits you best? Tell us your needs and let AI decide!",
        placeholder: "e.g., I need a quiet room for 6 months, budget around 7,000 THB...",
        analyze_btn: "Find My Room",
        result_title: "AI Recommendation:",
    },
    chatbot: ChatbotText {
        open_btn: "Chat with us",
        title: "K-House Assistant",
        greeting: "Hello! Ask me anything about our rooms, rates or the neighbourhood.",
        placeholder: "Type your question...",
        send_btn: "Send",
        busy: "The assistant is still answering your previous message.",
    },
    reservation: ReservationText {
        open_btn: "Book a Viewing",
        title: "Reserve Your Room",
        subtitle: "Leave your details and our team will contact you to confirm.",
        name: "Full Name",
        email: "Email",
        phone: "Phone",
        room_type: "Room Type",
        move_in: "Move-in Date",
        contract: "Contract Length",
        contract_options: &["1 Year", "6 Months", "3 Months"],
        message: "Message (optional)",
        required_hint: "Please fill in this field.",
        submit: "Send Reservation",
        submitting: "Sending...",
        success_title: "Thank you!",
        success_detail: "We have received your request and will contact you shortly.",
        close: "Close",
    },
    footer: FooterText {
        rights: "K-House Sukhumvit 71. All rights reserved.",
    },
};
