//! Line-oriented diff preview for dry runs.
//!
//! The changed region is found by trimming the common prefix and suffix and
//! printed as one hunk. That is coarser than a minimal edit script, but the
//! preview only has to show what a write would touch.

use std::path::Path;

/// Renders a unified-diff-style preview of `old` → `new` for `path`.
///
/// Returns an empty string when the contents are identical.
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let mut prefix = 0;
    while prefix < old_lines.len()
        && prefix < new_lines.len()
        && old_lines[prefix] == new_lines[prefix]
    {
        prefix += 1;
    }

    let mut suffix = 0;
    while suffix < old_lines.len() - prefix
        && suffix < new_lines.len() - prefix
        && old_lines[old_lines.len() - 1 - suffix] == new_lines[new_lines.len() - 1 - suffix]
    {
        suffix += 1;
    }

    let removed = &old_lines[prefix..old_lines.len() - suffix];
    let added = &new_lines[prefix..new_lines.len() - suffix];

    let mut out = String::new();
    out.push_str(&format!("--- {}\n", path.display()));
    out.push_str(&format!("+++ {} (updated)\n", path.display()));
    out.push_str(&format!(
        "@@ -{},{} +{},{} @@\n",
        prefix + 1,
        removed.len(),
        prefix + 1,
        added.len()
    ));
    for line in removed {
        out.push('-');
        out.push_str(line);
        out.push('\n');
    }
    for line in added {
        out.push('+');
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_produce_nothing() {
        assert_eq!(unified_diff(Path::new("x.md"), "a\n", "a\n"), "");
    }

    #[test]
    fn shows_only_the_changed_region() {
        let out = unified_diff(Path::new("x.md"), "a\nb\nc\n", "a\nX\nc\n");
        assert!(out.starts_with("--- x.md\n+++ x.md (updated)\n"));
        assert!(out.contains("@@ -2,1 +2,1 @@\n"));
        assert!(out.contains("-b\n"));
        assert!(out.contains("+X\n"));
        assert!(!out.contains("-a"));
        assert!(!out.contains("-c"));
    }

    #[test]
    fn handles_pure_insertion() {
        let out = unified_diff(Path::new("x.md"), "a\nc\n", "a\nb\nc\n");
        assert!(out.contains("@@ -2,0 +2,1 @@\n"));
        assert!(out.contains("+b\n"));
        let removals = out
            .lines()
            .filter(|l| l.starts_with('-') && !l.starts_with("---"))
            .count();
        assert_eq!(removals, 0);
    }
}
