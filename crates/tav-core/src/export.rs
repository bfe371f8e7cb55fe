use std::fmt;
use std::str::FromStr;

use crate::ability::Ability;
use crate::character::Character;
use crate::error::{CoreError, CoreResult};

/// Output format for a rendered character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain text sheet.
    Text,
    /// Pretty-printed JSON record.
    Json,
    /// Standalone HTML page.
    Html,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// Render a character in this format.
    pub fn render(self, character: &Character) -> CoreResult<String> {
        match self {
            Self::Text => Ok(to_text(character)),
            Self::Json => to_json(character),
            Self::Html => Ok(to_html(character)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            other => Err(CoreError::UnknownFormat(other.to_string())),
        }
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Plain-text character sheet.
pub fn to_text(character: &Character) -> String {
    let mut out = String::new();

    out.push_str(&format!("Name: {}\n", character.name));
    out.push_str(&format!("Origin: {}\n", character.origin));
    out.push_str(&format!("Race: {}\n", character.race));
    out.push_str(&format!(
        "Class: {} ({})\n",
        character.character_class, character.subclass
    ));
    out.push_str(&format!("Background: {}\n", character.background));
    out.push('\n');

    out.push_str("Ability Scores:\n");
    for (ability, value) in character.ability_scores.iter() {
        match character.ability_bonus(ability) {
            0 => out.push_str(&format!("  {ability}: {value}\n")),
            bonus => out.push_str(&format!("  {ability}: {value} (includes +{bonus})\n")),
        }
    }
    out.push('\n');

    out.push_str("Skills:\n");
    out.push_str(&format!("  {}\n", list_or_none(&character.skills)));
    out.push_str("Feats:\n");
    out.push_str(&format!("  {}\n", list_or_none(&character.feats)));

    out
}

/// Pretty-printed JSON record, the same layout the store writes.
pub fn to_json(character: &Character) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(character)?)
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Standalone HTML page with an ability table.
pub fn to_html(character: &Character) -> String {
    let name = escape_html(&character.name);
    let skills = escape_html(&list_or_none(&character.skills));
    let feats = escape_html(&list_or_none(&character.feats));

    let mut rows = String::new();
    for ability in Ability::ALL {
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            ability,
            character.ability_scores.get(ability),
            character.ability_bonus(ability)
        ));
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str(&format!(
        "  <meta charset=\"utf-8\">\n  <title>Character: {name}</title>\n"
    ));
    html.push_str("  <style>\n");
    html.push_str("    body { font-family: Georgia, serif; max-width: 640px; margin: 2em auto; padding: 0 1em; color: #333; }\n");
    html.push_str("    table { border-collapse: collapse; }\n");
    html.push_str("    th, td { border: 1px solid #999; padding: 4px 10px; text-align: left; }\n");
    html.push_str("  </style>\n</head>\n<body>\n");
    html.push_str(&format!("  <h1>{name}</h1>\n"));
    html.push_str(&format!(
        "  <p><strong>Origin:</strong> {}</p>\n",
        escape_html(&character.origin)
    ));
    html.push_str(&format!(
        "  <p><strong>Race:</strong> {}</p>\n",
        escape_html(&character.race)
    ));
    html.push_str(&format!(
        "  <p><strong>Class:</strong> {} ({})</p>\n",
        escape_html(&character.character_class),
        escape_html(&character.subclass)
    ));
    html.push_str(&format!(
        "  <p><strong>Background:</strong> {}</p>\n",
        escape_html(&character.background)
    ));
    html.push_str("  <h2>Ability Scores</h2>\n  <table>\n");
    html.push_str("    <thead><tr><th>Ability</th><th>Score</th><th>Bonus</th></tr></thead>\n");
    html.push_str("    <tbody>\n");
    html.push_str(&rows);
    html.push_str("    </tbody>\n  </table>\n");
    html.push_str(&format!("  <h2>Skills</h2>\n  <p>{skills}</p>\n"));
    html.push_str(&format!("  <h2>Feats</h2>\n  <p>{feats}</p>\n"));
    html.push_str("</body>\n</html>\n");

    html
}

/// Turn a character name into a filesystem-safe slug.
///
/// Lower-cases, collapses every run of non-alphanumeric characters into a
/// single `-`, and trims dashes from both ends. Falls back to
/// `"character"` when nothing usable is left.
pub fn safe_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "character".to_string()
    } else {
        slug.to_string()
    }
}

/// Default output file name for a character export, e.g. `"shadowheart.html"`.
pub fn default_export_filename(name: &str, format: ExportFormat) -> String {
    format!("{}.{}", safe_filename(name), format.extension())
}
