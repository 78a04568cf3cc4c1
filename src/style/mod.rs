// Style resolution
//
// Three layers, later wins token-by-token: the built-in defaults, the
// current prompt's per-token styles, and the user's override map from the
// environment. Every call builds a fresh table; the defaults are never
// mutated in place.

pub mod ansi;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::prompt::PromptSpec;

/// Built-in style descriptors for the widget's display tokens.
pub static DEFAULT_STYLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("completion-menu.completion.current", "bg:#00aaaa #000000"),
        ("completion-menu.completion", "bg:#008888 #ffffff"),
        ("completion-menu.meta.current", "bg:#00aaaa #000000"),
        ("completion-menu.meta", "bg:#00aaaa #ffffff"),
        ("completion-menu.progress-button", "bg:#003333"),
        ("completion-menu.progress-bar", "bg:#00aaaa"),
        ("toolbar", "bg:#222222 #cccccc"),
        ("toolbar.off", "bg:#222222 #696969"),
        ("toolbar.on", "bg:#222222 #ffffff"),
        ("toolbar.search", "noinherit bold"),
        ("toolbar.search.text", "nobold"),
        ("toolbar.system", "noinherit bold"),
        ("toolbar.arg", "noinherit bold"),
        ("toolbar.arg.text", "nobold"),
        ("scrollbar", "bg:#00aaaa"),
        ("scrollbar.button", "bg:#003333"),
        ("auto-suggestion", "#666666"),
        ("aborted", "#888888"),
    ])
});

/// Effective style table for one prompt. Pure: defaults, then the prompt's
/// token styles (even over a same-named default), then the user overrides.
pub fn resolve(
    prompt: &PromptSpec,
    user_overrides: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut table: HashMap<String, String> = DEFAULT_STYLES
        .iter()
        .map(|(token, style)| (token.to_string(), style.to_string()))
        .collect();

    for segment in prompt.segments() {
        if let Some(style) = &segment.style {
            table.insert(segment.token.clone(), style.clone());
        }
    }

    if let Some(overrides) = user_overrides {
        for (token, style) in overrides {
            table.insert(token.clone(), style.clone());
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_with(styles: &[(&str, &str)]) -> PromptSpec {
        let mut spec = PromptSpec::new();
        for (token, style) in styles {
            spec.push(*token, "x", Some(style.to_string()));
        }
        spec
    }

    #[test]
    fn test_layer_precedence() {
        // Prompt styles A and B, user overrides A: user wins on A, prompt
        // wins on B, everything else keeps its default.
        let prompt = prompt_with(&[("A", "x"), ("B", "y")]);
        let mut user = HashMap::new();
        user.insert("A".to_string(), "z".to_string());

        let table = resolve(&prompt, Some(&user));
        assert_eq!(table.get("A").unwrap(), "z");
        assert_eq!(table.get("B").unwrap(), "y");
        for (token, style) in DEFAULT_STYLES.iter() {
            assert_eq!(table.get(*token).unwrap(), style);
        }
    }

    #[test]
    fn test_prompt_overrides_builtin_token() {
        let prompt = prompt_with(&[("aborted", "#123456")]);
        let table = resolve(&prompt, None);
        assert_eq!(table.get("aborted").unwrap(), "#123456");
    }

    #[test]
    fn test_partial_user_map_only_touches_named_tokens() {
        let mut user = HashMap::new();
        user.insert("toolbar".to_string(), "bg:#000000".to_string());
        let table = resolve(&PromptSpec::new(), Some(&user));
        assert_eq!(table.get("toolbar").unwrap(), "bg:#000000");
        assert_eq!(table.len(), DEFAULT_STYLES.len());
        assert_eq!(table.get("scrollbar").unwrap(), "bg:#00aaaa");
    }

    #[test]
    fn test_absent_user_map_is_skipped() {
        let table = resolve(&PromptSpec::new(), None);
        assert_eq!(table.len(), DEFAULT_STYLES.len());
    }

    #[test]
    fn test_unstyled_prompt_segments_add_nothing() {
        let mut spec = PromptSpec::new();
        spec.push("prompt", "> ", None);
        let table = resolve(&spec, None);
        assert!(!table.contains_key("prompt"));
    }
}
