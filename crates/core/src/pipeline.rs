//! Protect/transform/restore orchestration for the typographic corrector.

use crate::error::MaskError;
use crate::mask::mask_protected_regions;
use crate::rules::apply_typo_rules;

/// Applies the French typographic rules to a Markdown/MDX document.
///
/// Protected regions (front matter, code, URLs, table delimiter rows,
/// directive lines) are masked first and restored byte-for-byte afterwards,
/// so the rules only ever see prose.
pub fn correct_typography(input: &str) -> Result<String, MaskError> {
    let (masked, table) = mask_protected_regions(input)?;
    let transformed = apply_typo_rules(&masked);
    Ok(table.restore(&transformed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correct(input: &str) -> String {
        correct_typography(input).expect("correction should succeed")
    }

    #[test]
    fn fixes_spacing_before_question_mark() {
        assert_eq!(correct("Vraiment ?"), "Vraiment\u{00A0}?");
    }

    #[test]
    fn converts_quotes_in_prose() {
        assert_eq!(
            correct("He said \"hello\""),
            "He said «\u{202F}hello\u{202F}»"
        );
    }

    #[test]
    fn code_block_bytes_survive_untouched() {
        let block = "```js\nlet s = \"x\" + 'y'; // why ?\n```";
        let input = format!("Avant\n{block}\nApres ?\n");
        let output = correct(&input);
        assert!(output.contains(block));
        assert!(output.ends_with("Apres\u{00A0}?\n"));
    }

    #[test]
    fn front_matter_is_untouched() {
        let input = "---\ntitle: \"L'exemple\"\n---\nC'est tout ?\n";
        let output = correct(input);
        assert!(output.starts_with("---\ntitle: \"L'exemple\"\n---\n"));
        assert!(output.ends_with("C\u{2019}est tout\u{00A0}?\n"));
    }

    #[test]
    fn urls_keep_their_colons() {
        let input = "Voir https://exemple.fr/a?b=c maintenant !";
        let output = correct(input);
        assert!(output.contains("https://exemple.fr/a?b=c"));
        assert!(output.ends_with("maintenant\u{00A0}!"));
    }

    #[test]
    fn inline_code_keeps_quotes_and_spacing() {
        let input = "Tapez `printf(\"%d\", x);` ici.";
        let output = correct(input);
        assert!(output.contains("`printf(\"%d\", x);`"));
    }

    #[test]
    fn table_delimiter_rows_are_untouched() {
        let input = "| nom | prix |\n| :--- | ---: |\n| Pain | 2 |\n";
        let output = correct(input);
        assert!(output.contains("| :--- | ---: |"));
    }

    #[test]
    fn directive_lines_get_no_extra_spacing() {
        let input = "::: note\nUn conseil ?\n:::\n";
        let output = correct(input);
        assert!(output.starts_with("::: note\n"));
        assert!(output.contains("Un conseil\u{00A0}?"));
        assert!(output.ends_with(":::\n"));
    }

    #[test]
    fn correction_is_idempotent() {
        let input = "---\ntitre: \"Guide\"\n---\n# **Intro**\n\nIl a dit \"l'heure\" : oui ?\nVoir https://a.fr/x et `let s = \"y\";` aussi !\n\n::: tip\nAstuce !\n:::\n";
        let once = correct(input);
        let twice = correct(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_input_that_collides_with_token_grammar() {
        let input = format!("avant __MASK_{}__ apres", "deadbeef".repeat(4));
        assert!(correct_typography(&input).is_err());
    }
}
