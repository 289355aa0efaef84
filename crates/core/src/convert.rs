//! Notion-export to Starlight component rewrites.
//!
//! Notion marks callouts with a leading emoji and a bold title, either as a
//! blockquote or as an `<aside>` tag; collapsible blocks come out as
//! `<details>`/`<summary>`. These all map onto the Starlight `Aside` and
//! `Details` components, with the emoji deciding the aside severity.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Emoji character class used by the callout patterns. The variation
/// selector is included so `⚠️`-style emoji are captured whole.
const EMOJI: &str = "[\\x{1F300}-\\x{1F64F}\\x{1F680}-\\x{1F6FF}\\x{2600}-\\x{26FF}\\x{2700}-\\x{27BF}\\x{FE0F}]+";

static BLOCKQUOTE_CALLOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?m)^> ({EMOJI})\\s*\\*\\*(.*?)\\*\\*\\n((?:> .*\\n?)*)"
    ))
    .unwrap()
});

static ASIDE_TAG_CALLOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?s)<aside>\\s*({EMOJI})\\s*\\n+\\s*\\*\\*(.*?):?\\*\\*\\s*\\n(.*?)\\s*</aside>"
    ))
    .unwrap()
});

static TOGGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<details><summary>(.*?)</summary>(.*?)</details>").unwrap());

static QUOTE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> ").unwrap());

/// Severity of a Starlight `Aside`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsideKind {
    /// Informational aside.
    Note,
    /// Helpful suggestion.
    Tip,
    /// Warning the reader should heed.
    Caution,
    /// Serious warning.
    Danger,
}

impl AsideKind {
    /// The value of the `type` attribute Starlight expects.
    pub fn as_str(self) -> &'static str {
        match self {
            AsideKind::Note => "note",
            AsideKind::Tip => "tip",
            AsideKind::Caution => "caution",
            AsideKind::Danger => "danger",
        }
    }
}

/// Maps a Notion callout emoji to an aside severity.
///
/// The variation selector (U+FE0F) is stripped before the lookup so both
/// `⚠` and `⚠️` land on the same entry. Anything unrecognized falls back to
/// [`AsideKind::Note`].
pub fn aside_kind_for_emoji(emoji: &str) -> AsideKind {
    let base: String = emoji.chars().filter(|c| *c != '\u{FE0F}').collect();
    match base.as_str() {
        "💡" => AsideKind::Tip,
        "⚠" => AsideKind::Caution,
        "🔥" | "❌" => AsideKind::Danger,
        "ℹ" | "📝" | "✅" | "❓" | "👉" | "🎯" => AsideKind::Note,
        _ => AsideKind::Note,
    }
}

/// Converts blockquote callouts (`> emoji **Title**` plus quoted body lines)
/// into `<Aside>` blocks with the body dedented.
pub fn convert_blockquote_callouts(text: &str) -> String {
    BLOCKQUOTE_CALLOUT
        .replace_all(text, |caps: &Captures<'_>| {
            let kind = aside_kind_for_emoji(&caps[1]);
            let title = caps[2].trim();
            let body = QUOTE_PREFIX.replace_all(&caps[3], "");
            format!(
                "<Aside type=\"{}\" title=\"{}\">\n{}\n</Aside>",
                kind.as_str(),
                title,
                body.trim()
            )
        })
        .into_owned()
}

/// Converts `<aside>` tag callouts with the same emoji/title/body structure,
/// trimming a trailing colon from the title.
pub fn convert_aside_tag_callouts(text: &str) -> String {
    ASIDE_TAG_CALLOUT
        .replace_all(text, |caps: &Captures<'_>| {
            let kind = aside_kind_for_emoji(&caps[1]);
            format!(
                "<Aside type=\"{}\" title=\"{}\">\n{}\n</Aside>",
                kind.as_str(),
                caps[2].trim(),
                caps[3].trim()
            )
        })
        .into_owned()
}

/// Converts `<details><summary>…</summary>…</details>` into `<Details>`.
pub fn convert_toggles(text: &str) -> String {
    TOGGLE
        .replace_all(text, "<Details summary=\"${1}\">${2}</Details>")
        .into_owned()
}

/// Builds the Starlight import line for the components present in `text`,
/// or `None` when no component is used.
pub fn starlight_import_line(text: &str) -> Option<String> {
    let mut components = Vec::new();
    if text.contains("<Aside") {
        components.push("Aside");
    }
    if text.contains("<Details") {
        components.push("Details");
    }
    if components.is_empty() {
        return None;
    }
    Some(format!(
        "import {{ {} }} from '@astrojs/starlight/components';\n\n",
        components.join(", ")
    ))
}

/// Runs the three rewrites in order, then prepends the import line when any
/// component was produced.
pub fn convert_notion(input: &str) -> String {
    let step = convert_blockquote_callouts(input);
    let step = convert_aside_tag_callouts(&step);
    let mut out = convert_toggles(&step);
    if let Some(import) = starlight_import_line(&out) {
        log::debug!("adding Starlight import: {}", import.trim_end());
        out.insert_str(0, &import);
    }
    out
}
