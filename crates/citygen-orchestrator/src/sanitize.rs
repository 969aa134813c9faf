//! Reply cleanup before JSON decoding.

use regex::Regex;
use std::sync::LazyLock;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").expect("code fence pattern is valid"));

/// Strip markdown code fences (with an optional `json` tag) and surrounding
/// whitespace from a model reply.
///
/// Every fence marker is removed, not only a leading/trailing pair.
pub fn sanitize_reply(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_fence() {
        assert_eq!(sanitize_reply("```json\n{\"a\":1}\n```"), r#"{"a":1}"#);
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(sanitize_reply("```\n[\"house\"]\n```\n"), r#"["house"]"#);
    }

    #[test]
    fn test_plain_text_only_trimmed() {
        assert_eq!(sanitize_reply("  {\"a\": 1}  \n"), r#"{"a": 1}"#);
    }

    #[test]
    fn test_unterminated_fence() {
        assert_eq!(sanitize_reply("```json\n{\"a\":1}"), r#"{"a":1}"#);
    }

    #[test]
    fn test_other_language_tag_is_kept() {
        // Only the `json` tag is part of the fence pattern.
        assert_eq!(sanitize_reply("```yaml\na: 1\n```"), "yaml\na: 1");
    }

    #[test]
    fn test_empty_reply() {
        assert_eq!(sanitize_reply("``````"), "");
        assert_eq!(sanitize_reply(""), "");
    }
}
