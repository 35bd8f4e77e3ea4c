//! Fixed system prompts of the two AI widgets.

use khouse_content::{Catalog, RATES};
use std::fmt::Write;
use std::sync::LazyLock;

/// Instructions sent with every room matcher question.
pub const ROOM_MATCHER_PROMPT: &str = "You are an AI Room Matcher for K-House 71.
Available Rooms:
1. Studio A (28sqm, Big Balcony): 1yr=6400, 6mo=6800. Good for fresh air lovers.
2. Studio B (26sqm, Small Balcony): 1yr=5900, 6mo=6400. Budget friendly.
3. Sweet Corner (52-56sqm): 1yr=12000+. 1 Bedroom, separate living room. Good for couples/space lovers.
4. Suite (52-54sqm): 1yr=13000+. 1 Bedroom.

Task: Analyze user requirements and suggest ONE best room option with a short reason.
Language: Match user language.";

/// Instructions sent with every chatbot message, built from the rate table
/// and the English contact details.
pub static CHATBOT_PROMPT: LazyLock<String> = LazyLock::new(build_chatbot_prompt);

fn build_chatbot_prompt() -> String {
    let en = Catalog::fallback();
    let mut prompt = String::from(
        "You are the friendly front desk assistant of K-House 71, a serviced apartment \
         on Sukhumvit 71 in Bangkok, near BTS Phra Khanong.\n\nMonthly rates in Baht \
         (list price -> promotion price):\n",
    );

    for row in &RATES {
        let _ = write!(
            prompt,
            "- {} {}: 1 year {} -> {}, 6 months {} -> {}",
            row.name, row.size, row.rates.y1.old, row.rates.y1.new, row.rates.m6.old, row.rates.m6.new
        );
        match row.rates.m3 {
            Some(m3) => {
                let _ = writeln!(prompt, ", 3 months {} -> {}", m3.old, m3.new);
            }
            None => prompt.push_str(", no 3 month contract\n"),
        }
    }

    let _ = write!(
        prompt,
        "\nExtra charges: {}; {}. {}.\n\nNearby: {}\n\nContact: {} / {} / {}. Open 24 hours.\n\n\
         Answer briefly and only about K-House 71, its rooms, prices and the neighbourhood. \
         If you do not know, suggest contacting the staff.\nLanguage: Match user language.",
        en.rooms.tv,
        en.rooms.fridge,
        en.rooms.cc,
        en.about.points.join("; "),
        en.contact.address_val,
        en.contact.phone_display,
        en.contact.email_val,
    );

    prompt
}

/// An AI widget of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    /// The room matcher modal
    Matcher,
    /// The floating chat widget
    Chat,
}

impl Widget {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Widget::Matcher => ROOM_MATCHER_PROMPT,
            Widget::Chat => CHATBOT_PROMPT.as_str(),
        }
    }

    /// Shown instead of an answer when the backend cannot be reached.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Widget::Matcher => "Error connecting to AI.",
            Widget::Chat => "Sorry, I can't reach the assistant right now.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Widget::Matcher => "room_matcher",
            Widget::Chat => "chatbot",
        }
    }
}
