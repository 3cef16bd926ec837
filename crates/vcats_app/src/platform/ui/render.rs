use std::fmt::Write as _;

use vcats_core::{AppViewModel, CatCardView, APP_TITLE};

/// Renders the whole card list as text, one block per cat in list order.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{APP_TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(APP_TITLE.chars().count()));

    if view.cards.is_empty() {
        let _ = writeln!(out, "(no cats)");
        return out;
    }

    for card in &view.cards {
        out.push('\n');
        out.push_str(&format_card(card));
    }
    out
}

fn format_card(card: &CatCardView) -> String {
    let id = card.cat_id;
    format!(
        "[#{id}] {name}\n  image:    {src} ({alt})\n  birthday: {birthday}\n  sex:      {sex}\n  fed:      {count} {times}\n  controls: feed {id} | delete {id}\n",
        name = card.name,
        src = card.image_src,
        alt = card.image_alt,
        birthday = card.birthday,
        sex = card.sex,
        count = card.feed_count,
        times = if card.feed_count == 1 { "time" } else { "times" },
    )
}

pub fn format_alert(text: &str) -> String {
    format!("[alert] {text}")
}
