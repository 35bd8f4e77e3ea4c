//! `catalog` subcommands.

use super::output::Output;
use khouse_content::{Catalog, LanguageCode, LANGUAGE_OPTIONS, RATES, ROOM_CARDS};

/// Check every language and the property tables. Returns false on the
/// first inconsistency of each language.
pub fn check(output: &Output) -> bool {
    output.header("Content catalog");

    let mut ok = true;
    for card in &ROOM_CARDS {
        if card.images.is_empty() {
            output.error(&format!("Room card {} has no images", card.id));
            ok = false;
        }
    }

    for lang in LanguageCode::ALL {
        let tree = Catalog::get(lang);
        match Catalog::validate_tree(lang.as_str(), tree) {
            Ok(()) => output.success(&format!(
                "{} {} ({})",
                lang.as_str(),
                tree.label,
                lang.direction()
            )),
            Err(e) => {
                output.error(&e.to_string());
                ok = false;
            }
        }
    }

    output.newline();
    output.kv("Room cards", &ROOM_CARDS.len().to_string());
    output.kv("Rate rows", &RATES.len().to_string());
    ok
}

/// Print the main strings of one language.
pub fn show(code: &str, output: &Output) {
    let lang = LanguageCode::parse_or_fallback(code);
    if lang.as_str() != code.trim().to_ascii_lowercase() {
        output.warning(&format!(
            "Unknown language '{}', showing {}",
            code,
            lang.as_str()
        ));
    }
    let t = lang.content();
    let full_label = LANGUAGE_OPTIONS
        .iter()
        .find(|option| option.code == lang)
        .map(|option| option.full_label)
        .unwrap_or(t.label);

    output.header(full_label);
    output.kv("Code", lang.as_str());
    output.kv("Direction", lang.direction().as_str());
    output.kv("HTML lang", lang.html_lang());

    output.subheader("Navigation");
    for (anchor, label) in t.nav.entries() {
        output.kv(anchor, label);
    }

    output.subheader("Hero");
    output.list_item(t.hero.title);
    output.list_item(t.hero.subtitle);

    output.subheader("Rooms");
    output.table_header(&["Id", "Size", "From", "Title"]);
    for (card, room) in ROOM_CARDS.iter().zip(t.rooms.types) {
        output.table_row(&[&card.id.to_string(), card.size, card.start_price, room.title]);
    }

    output.subheader("Facilities");
    for item in t.facilities.items {
        output.list_item(item.name);
    }
}
