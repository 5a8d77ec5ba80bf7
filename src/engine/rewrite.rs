//! engine::rewrite
//!
//! Format-aware substitution of one configuration for another.
//!
//! # Overview
//!
//! The rewriter works on exact serialized substrings, not on a parsed
//! syntax tree: a bundle embedding the placeholder carries it byte-for-byte
//! in whichever dialect its toolchain generation emitted. Matching is
//! therefore sensitive to any change in the minifier's output format; the
//! dialect writers are pinned by regression tests for exactly that reason.
//!
//! # Invariants
//!
//! - Every occurrence of the matched form is replaced, not just the first
//! - The object-literal form is tried before the JSON form
//! - Content without either placeholder form is returned unchanged

use crate::core::placeholder::ConfigForms;

/// Result of a rewrite attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The (possibly rewritten) file content.
    pub content: String,
    /// Whether any substitution occurred.
    pub replaced: bool,
}

/// Replace every embedded placeholder serialization in `content` with the
/// corresponding replacement serialization.
///
/// Newer toolchains minify the configuration into the object-literal form
/// while older ones leave the JSON form intact; the literal form is tried
/// first so a file carrying both is never mistaken for JSON-only. A bundle
/// may embed the configuration more than once (once per route chunk
/// referencing shared data), hence replace-all.
pub fn rewrite(content: &str, placeholder: &ConfigForms, replacement: &ConfigForms) -> RewriteOutcome {
    if content.contains(&placeholder.js_literal) {
        return RewriteOutcome {
            content: content.replace(&placeholder.js_literal, &replacement.js_literal),
            replaced: true,
        };
    }

    if content.contains(&placeholder.json) {
        return RewriteOutcome {
            content: content.replace(&placeholder.json, &replacement.json),
            replaced: true,
        };
    }

    RewriteOutcome {
        content: content.to_string(),
        replaced: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn demo_forms() -> (ConfigForms, ConfigForms) {
        (
            ConfigForms::derive(&json!({"pageId": "demo"})),
            ConfigForms::derive(&json!({"pageId": "demo2"})),
        )
    }

    #[test]
    fn replaces_literal_form() {
        let (placeholder, replacement) = demo_forms();
        let content = r#"self.push({data:{pageId:"demo"},x:1})"#;

        let outcome = rewrite(content, &placeholder, &replacement);
        assert!(outcome.replaced);
        assert_eq!(outcome.content, r#"self.push({data:{pageId:"demo2"},x:1})"#);
    }

    #[test]
    fn falls_back_to_json_form() {
        let (placeholder, replacement) = demo_forms();
        let content = r#"var data = JSON.parse('{"pageId":"demo"}');"#;

        let outcome = rewrite(content, &placeholder, &replacement);
        assert!(outcome.replaced);
        assert_eq!(
            outcome.content,
            r#"var data = JSON.parse('{"pageId":"demo2"}');"#
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let (placeholder, replacement) = demo_forms();
        let content = format!(
            "a{}b{}c{}",
            placeholder.js_literal, placeholder.js_literal, placeholder.js_literal
        );

        let outcome = rewrite(&content, &placeholder, &replacement);
        assert!(outcome.replaced);
        assert_eq!(outcome.content.matches(&replacement.js_literal).count(), 3);
        assert_eq!(outcome.content.matches(&placeholder.js_literal).count(), 0);
    }

    #[test]
    fn literal_form_takes_precedence_when_both_present() {
        let (placeholder, replacement) = demo_forms();
        let content = format!("{} and {}", placeholder.js_literal, placeholder.json);

        let outcome = rewrite(&content, &placeholder, &replacement);
        assert!(outcome.replaced);
        // Only the literal branch ran; the JSON occurrence is untouched.
        assert!(outcome.content.contains(&replacement.js_literal));
        assert!(outcome.content.contains(&placeholder.json));
    }

    #[test]
    fn unmatched_content_is_unchanged() {
        let (placeholder, replacement) = demo_forms();
        let content = "nothing of interest";

        let outcome = rewrite(content, &placeholder, &replacement);
        assert!(!outcome.replaced);
        assert_eq!(outcome.content, content);
    }
}
