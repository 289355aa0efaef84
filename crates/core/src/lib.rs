#![deny(missing_docs)]
//! Plume core: regex-based text transformations for Markdown/MDX documents.
//!
//! Everything here operates on whole documents held in memory as strings;
//! there is no AST and no structural validation. The centerpiece is the
//! protect/transform/restore pipeline used by the typographic corrector:
//! regions that must survive untouched are swapped for opaque placeholder
//! tokens, the rewrite rules run over the masked text, and the placeholders
//! are substituted back at the end.

/// Notion-export to Starlight component rewrites.
pub mod convert;
/// Core error types.
pub mod error;
/// Protection and restoration of regions opaque to the rewrite rules.
pub mod mask;
/// Protect/transform/restore orchestration.
pub mod pipeline;
/// Unconditional find-replace substitutions.
pub mod replace;
/// Ordered French typographic rewrite rules.
pub mod rules;

pub use convert::{
    AsideKind, aside_kind_for_emoji, convert_notion, starlight_import_line,
};
pub use error::MaskError;
pub use mask::{MaskTable, mask_protected_regions};
pub use pipeline::correct_typography;
pub use replace::apply_replacements;
pub use rules::{NBSP, NNBSP, TYPO_APOSTROPHE, TYPO_RULES, TypoRule, apply_typo_rules};
