//! Protection and restoration of regions the rewrite rules must not touch.
//!
//! Front matter, code, URLs, table delimiter rows, and `:::` directive lines
//! are swapped for placeholder tokens before any typographic rule runs, and
//! swapped back afterwards. Tokens are built exclusively from `[a-z0-9_]`,
//! an alphabet disjoint from every rule's trigger characters, so the rules
//! treat them as inert text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use uuid::Uuid;

use crate::error::MaskError;

/// Leading YAML front matter fenced by `---` lines, at document start only.
static FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A\s*---\s*\n.*?\n---\s*\n").unwrap());

/// Fenced code blocks, greedy across lines.
static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?ms)^\s*```.*?```").unwrap());

/// Inline code spans on a single line.
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`\n]+`").unwrap());

/// `scheme://` URLs up to the next whitespace.
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9+.-]*://\S*").unwrap());

/// Markdown table delimiter rows such as `| :--- | ---: |`.
static TABLE_DELIMITER_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\|[: \t|-]+\|[ \t]*$").unwrap());

/// Directive/callout marker lines (`:::`, `::: note`, `:::tip{icon=...}`).
static DIRECTIVE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*:::[^\n]*$").unwrap());

/// The placeholder token grammar. Input matching this is rejected outright.
static TOKEN_GRAMMAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"__MASK_[0-9a-f]{32}__").unwrap());

/// Insertion-ordered mapping from placeholder token to the original text it
/// replaced. One table lives for the duration of one document's run.
#[derive(Debug, Default)]
pub struct MaskTable {
    entries: Vec<MaskEntry>,
}

#[derive(Debug)]
struct MaskEntry {
    token: String,
    original: String,
}

impl MaskTable {
    /// Number of masked regions recorded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any region was masked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, token: String, original: String) {
        self.entries.push(MaskEntry { token, original });
    }

    /// Substitutes every token back with its original content.
    ///
    /// Sweeps over all entries until a full sweep changes nothing. Because
    /// [`mask_protected_regions`] refuses input that collides with the token
    /// grammar, a single sweep resolves everything in practice; the fixed
    /// point is the termination guard.
    pub fn restore(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let mut swept = current.clone();
            for entry in &self.entries {
                if swept.contains(&entry.token) {
                    swept = swept.replace(&entry.token, &entry.original);
                }
            }
            if swept == current {
                return swept;
            }
            current = swept;
        }
    }
}

fn fresh_token() -> String {
    format!("__MASK_{}__", Uuid::new_v4().simple())
}

/// Masks every protected region in `input` behind a unique placeholder.
///
/// Region classes are applied in precedence order: front matter, fenced code
/// blocks, inline code, URLs, table delimiter rows, directive lines. Later
/// classes scan text that already carries earlier placeholders; the token
/// alphabet guarantees no pattern matches inside a token.
///
/// Returns the masked text plus the table needed to restore it, or
/// [`MaskError::TokenCollision`] when the input itself contains text shaped
/// like a token.
pub fn mask_protected_regions(input: &str) -> Result<(String, MaskTable), MaskError> {
    if let Some(found) = TOKEN_GRAMMAR.find(input) {
        return Err(MaskError::TokenCollision {
            token: found.as_str().to_string(),
        });
    }

    let mut table = MaskTable::default();
    let mut text = mask_first(&FRONT_MATTER, input, &mut table);
    for class in [
        &*CODE_BLOCK,
        &*INLINE_CODE,
        &*URL,
        &*TABLE_DELIMITER_ROW,
        &*DIRECTIVE_LINE,
    ] {
        text = mask_all(class, &text, &mut table);
    }

    if text.contains("```") {
        // Unbalanced fence: the stray delimiter stays unmasked and the rules
        // will see its contents. Accepted, not corrected.
        log::debug!("unbalanced code fence left unmasked");
    }
    log::debug!("masked {} protected regions", table.len());

    Ok((text, table))
}

fn mask_all(pattern: &Regex, text: &str, table: &mut MaskTable) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let token = fresh_token();
            table.push(token.clone(), caps[0].to_string());
            token
        })
        .into_owned()
}

fn mask_first(pattern: &Regex, text: &str, table: &mut MaskTable) -> String {
    pattern
        .replacen(text, 1, |caps: &Captures<'_>| {
            let token = fresh_token();
            table.push(token.clone(), caps[0].to_string());
            token
        })
        .into_owned()
}
