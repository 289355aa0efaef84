//! Ordered French typographic rewrite rules.
//!
//! Each rule is one global substitution. The sequence is load-bearing:
//! quote conversion must see the spacing already fixed by the earlier
//! rules, and none of the rules is reapplied, so [`TYPO_RULES`] is the one
//! place where the order lives. Every rule is idempotent: its output never
//! matches its own trigger, so a second run of the full list is a no-op.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Non-breaking space, used before double punctuation.
pub const NBSP: char = '\u{00A0}';
/// Narrow non-breaking space, used inside guillemets.
pub const NNBSP: char = '\u{202F}';
/// Typographic apostrophe.
pub const TYPO_APOSTROPHE: char = '\u{2019}';

/// A run of collapsible spacing followed by a double punctuation mark.
static DOUBLE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new("([ \t\u{00A0}\u{202F}]*)([:;?!»])").unwrap());

/// An opening guillemet and any spacing that follows it.
static OPENING_GUILLEMET: Lazy<Regex> =
    Lazy::new(|| Regex::new("«[ \t\u{00A0}\u{202F}]*").unwrap());

/// A straight-double-quoted span on a single line.
static STRAIGHT_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new("\"([^\"\n]*)\"").unwrap());

/// A curly-double-quoted span.
static CURLY_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new("\u{201C}(.+?)\u{201D}").unwrap());

/// Bold markers wrapping a heading's text.
static BOLD_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#+[ \t]*)\*\*(.*?)\*\*").unwrap());

/// A single named rewrite rule.
pub struct TypoRule {
    /// Stable identifier used in debug logs.
    pub name: &'static str,
    run: fn(&str) -> String,
}

impl TypoRule {
    /// Applies this rule's substitution once, globally.
    pub fn apply(&self, text: &str) -> String {
        (self.run)(text)
    }
}

/// The full rule list, in application order.
pub static TYPO_RULES: &[TypoRule] = &[
    TypoRule {
        name: "nbsp-before-double-punctuation",
        run: nbsp_before_double_punctuation,
    },
    TypoRule {
        name: "nnbsp-after-opening-guillemet",
        run: nnbsp_after_opening_guillemet,
    },
    TypoRule {
        name: "straight-quotes-to-guillemets",
        run: straight_quotes_to_guillemets,
    },
    TypoRule {
        name: "curly-quotes-to-guillemets",
        run: curly_quotes_to_guillemets,
    },
    TypoRule {
        name: "typographic-apostrophe",
        run: typographic_apostrophe,
    },
    TypoRule {
        name: "strip-heading-bold",
        run: strip_heading_bold,
    },
];

/// Runs every rule of [`TYPO_RULES`] once, in order.
pub fn apply_typo_rules(text: &str) -> String {
    let mut current = text.to_string();
    for rule in TYPO_RULES {
        let next = rule.apply(&current);
        if next != current {
            log::debug!("rule {} changed the text", rule.name);
        }
        current = next;
    }
    current
}

/// Collapses spacing before `:` `;` `?` `!` `»` into one NBSP, inserting one
/// when the mark has no spacing at all. A lone NNBSP is left alone: that is
/// the spacing the guillemet rules emit, and it is already correct.
fn nbsp_before_double_punctuation(text: &str) -> String {
    DOUBLE_PUNCTUATION
        .replace_all(text, |caps: &Captures<'_>| {
            let spacing = if &caps[1] == "\u{202F}" { NNBSP } else { NBSP };
            format!("{spacing}{}", &caps[2])
        })
        .into_owned()
}

/// Normalizes the spacing after `«` to exactly one NNBSP.
fn nnbsp_after_opening_guillemet(text: &str) -> String {
    OPENING_GUILLEMET
        .replace_all(text, |_: &Captures<'_>| format!("«{NNBSP}"))
        .into_owned()
}

/// Converts `"…"` pairs into `«…»` with NNBSP just inside each guillemet.
fn straight_quotes_to_guillemets(text: &str) -> String {
    STRAIGHT_QUOTED
        .replace_all(text, |caps: &Captures<'_>| {
            format!("«{NNBSP}{}{NNBSP}»", &caps[1])
        })
        .into_owned()
}

/// Converts `“…”` pairs the same way.
fn curly_quotes_to_guillemets(text: &str) -> String {
    CURLY_QUOTED
        .replace_all(text, |caps: &Captures<'_>| {
            format!("«{NNBSP}{}{NNBSP}»", &caps[1])
        })
        .into_owned()
}

/// Replaces every straight apostrophe with U+2019.
fn typographic_apostrophe(text: &str) -> String {
    text.replace('\'', "\u{2019}")
}

/// Strips `**` wrapping a heading's text, keeping the heading marker.
fn strip_heading_bold(text: &str) -> String {
    BOLD_HEADING
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], &caps[2])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_nbsp_before_double_punctuation() {
        assert_eq!(apply_typo_rules("Vraiment ?"), "Vraiment\u{00A0}?");
        assert_eq!(apply_typo_rules("Oui\t !"), "Oui\u{00A0}!");
        // Missing spacing is added, not just collapsed.
        assert_eq!(apply_typo_rules("Attention:"), "Attention\u{00A0}:");
    }

    #[test]
    fn collapses_whitespace_runs_to_one_nbsp() {
        assert_eq!(apply_typo_rules("Fin  \t ;"), "Fin\u{00A0};");
        assert_eq!(apply_typo_rules("Fin\u{00A0} ;"), "Fin\u{00A0};");
    }

    #[test]
    fn normalizes_spacing_after_opening_guillemet() {
        assert_eq!(apply_typo_rules("« mot"), "«\u{202F}mot");
        assert_eq!(apply_typo_rules("«mot"), "«\u{202F}mot");
    }

    #[test]
    fn converts_straight_quote_pairs() {
        assert_eq!(
            apply_typo_rules("He said \"hello\""),
            "He said «\u{202F}hello\u{202F}»"
        );
    }

    #[test]
    fn converts_curly_quote_pairs() {
        assert_eq!(
            apply_typo_rules("Il dit \u{201C}bonjour\u{201D}"),
            "Il dit «\u{202F}bonjour\u{202F}»"
        );
    }

    #[test]
    fn straight_quotes_do_not_pair_across_lines() {
        let input = "un \"mot\nautre\" ligne";
        assert_eq!(apply_typo_rules(input), input);
    }

    #[test]
    fn replaces_apostrophes() {
        assert_eq!(apply_typo_rules("l'arbre"), "l\u{2019}arbre");
    }

    #[test]
    fn strips_bold_from_headings() {
        assert_eq!(apply_typo_rules("# **Titre**"), "# Titre");
        assert_eq!(apply_typo_rules("### **Gras** reste"), "### Gras reste");
        // Bold elsewhere in the body is untouched.
        assert_eq!(apply_typo_rules("du **gras** ici"), "du **gras** ici");
    }

    #[test]
    fn rule_list_is_idempotent() {
        let input =
            "# **Guide**\n\nIl a dit \"l'essentiel\" : « oui » ou \u{201C}non\u{201D} ?\n";
        let once = apply_typo_rules(input);
        let twice = apply_typo_rules(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn spacing_inside_converted_guillemets_survives_reapplication() {
        let once = apply_typo_rules("\"mot\"");
        assert_eq!(once, "«\u{202F}mot\u{202F}»");
        assert_eq!(apply_typo_rules(&once), once);
    }

    #[test]
    fn rules_ignore_placeholder_tokens() {
        let token = format!("__MASK_{}__", "ab12".repeat(8));
        assert_eq!(apply_typo_rules(&token), token);
    }
}
