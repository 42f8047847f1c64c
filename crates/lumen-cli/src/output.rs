//! Human and JSON renderings of resolver state.

use console::{style, Style};
use lumen::{parse_hex_color, rgb_to_ansi256, Preference, ResolvedMode, ThemeSnapshot};
use serde_json::json;

pub fn preference(preference: Preference, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(&json!({ "preference": preference }))
    } else {
        Ok(preference.to_string())
    }
}

pub fn status(
    snapshot: &ThemeSnapshot,
    system: ResolvedMode,
    json: bool,
) -> serde_json::Result<String> {
    if json {
        let mut value = serde_json::to_value(snapshot)?;
        value["system"] = json!(system);
        return serde_json::to_string_pretty(&value);
    }

    let label = Style::new().dim();
    let mut lines = vec![
        format!(
            "{}  {}",
            label.apply_to("preference"),
            style(snapshot.preference).bold()
        ),
        format!(
            "{}    {}",
            label.apply_to("resolved"),
            style(snapshot.resolved).cyan().bold()
        ),
        format!("{}      {}", label.apply_to("system"), system),
    ];
    for (name, value) in snapshot.binding.tokens() {
        lines.push(format!(
            "{}       {} {}: {}",
            label.apply_to("toast"),
            swatch(value),
            name,
            value
        ));
    }
    Ok(lines.join("\n"))
}

pub fn mode_change(mode: ResolvedMode, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(&json!({ "resolved": mode }))
    } else {
        Ok(format!("resolved mode is now {}", style(mode).cyan().bold()))
    }
}

/// A two-cell color block, or blanks when the value is not a hex color.
fn swatch(value: &str) -> String {
    match parse_hex_color(value) {
        Some(rgb) => Style::new()
            .on_color256(rgb_to_ansi256(rgb))
            .apply_to("  ")
            .to_string(),
        None => "  ".to_string(),
    }
}
