// Prompt specification and template expansion
//
// A prompt is an ordered run of (token, text) segments, each optionally
// carrying a style descriptor. Sources produce a fresh specification every
// iteration, since tokens like {cwd} change between commands.

use std::collections::HashMap;
use std::path::Path;

/// One positional piece of the prompt. Token name and text stay aligned by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSegment {
    pub token: String,
    pub text: String,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptSpec {
    segments: Vec<PromptSegment>,
}

impl PromptSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        token: impl Into<String>,
        text: impl Into<String>,
        style: Option<String>,
    ) {
        self.segments.push(PromptSegment {
            token: token.into(),
            text: text.into(),
            style,
        });
    }

    pub fn segments(&self) -> &[PromptSegment] {
        &self.segments
    }

    /// The plain prompt text, all segments concatenated.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Produces the prompt for the next read. Called fresh on every loop
/// iteration.
pub trait PromptSource {
    fn current_prompt(&self) -> PromptSpec;
}

pub const DEFAULT_TEMPLATE: &str = "{user}@{host} {cwd} {end}";

/// Template-driven prompt source. Placeholders `{user}`, `{host}`, `{cwd}`
/// and `{end}` expand at call time; literal runs pass through unstyled.
pub struct TemplatePrompt {
    template: String,
    token_styles: HashMap<String, String>,
}

impl TemplatePrompt {
    pub fn new(template: impl Into<String>) -> Self {
        let mut token_styles = HashMap::new();
        token_styles.insert("user".to_string(), "bold #00aa00".to_string());
        token_styles.insert("host".to_string(), "bold #00aa00".to_string());
        token_styles.insert("cwd".to_string(), "bold #0055aa".to_string());
        Self {
            template: template.into(),
            token_styles,
        }
    }

    /// Replaces or adds the style attached to one token.
    pub fn with_style(mut self, token: impl Into<String>, style: impl Into<String>) -> Self {
        self.token_styles.insert(token.into(), style.into());
        self
    }
}

impl PromptSource for TemplatePrompt {
    fn current_prompt(&self) -> PromptSpec {
        let mut spec = PromptSpec::new();
        let mut literal = String::new();
        let mut chars = self.template.chars();

        while let Some(c) = chars.next() {
            if c != '{' {
                literal.push(c);
                continue;
            }
            let mut name = String::new();
            let mut closed = false;
            for n in chars.by_ref() {
                if n == '}' {
                    closed = true;
                    break;
                }
                name.push(n);
            }
            if !closed {
                // Unterminated brace: keep it literally.
                literal.push('{');
                literal.push_str(&name);
                continue;
            }
            if !literal.is_empty() {
                spec.push("prompt", std::mem::take(&mut literal), None);
            }
            let text = expand_token(&name);
            spec.push(&name, text, self.token_styles.get(&name).cloned());
        }
        if !literal.is_empty() {
            spec.push("prompt", literal, None);
        }
        spec
    }
}

fn expand_token(name: &str) -> String {
    match name {
        "user" => std::env::var("USER").unwrap_or_else(|_| "wren".to_string()),
        "host" => hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string()),
        "cwd" => std::env::current_dir()
            .map(|dir| shorten_home(&dir))
            .unwrap_or_else(|_| "?".to_string()),
        "end" => "$ ".to_string(),
        // Unknown placeholders stay visible rather than vanishing.
        other => format!("{{{other}}}"),
    }
}

fn shorten_home(dir: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = dir.strip_prefix(&home) {
            return if rest.as_os_str().is_empty() {
                "~".to_string()
            } else {
                format!("~/{}", rest.display())
            };
        }
    }
    dir.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_segments_stay_aligned() {
        let source = TemplatePrompt::new("{user}:{end}");
        let spec = source.current_prompt();
        let tokens: Vec<&str> = spec.segments().iter().map(|s| s.token.as_str()).collect();
        assert_eq!(tokens, ["user", "prompt", "end"]);
        assert_eq!(spec.segments()[1].text, ":");
        assert_eq!(spec.text(), format!("{}:$ ", spec.segments()[0].text));
    }

    #[test]
    fn test_token_styles_attach_to_tokens_only() {
        let source = TemplatePrompt::new("{user} {end}").with_style("end", "#ffffff");
        let spec = source.current_prompt();
        let user = &spec.segments()[0];
        let literal = &spec.segments()[1];
        let end = &spec.segments()[2];
        assert_eq!(user.style.as_deref(), Some("bold #00aa00"));
        assert_eq!(literal.style, None);
        assert_eq!(end.style.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_unknown_placeholder_kept_literally() {
        let source = TemplatePrompt::new("{mystery}> ");
        let spec = source.current_prompt();
        assert_eq!(spec.segments()[0].text, "{mystery}");
    }

    #[test]
    fn test_unterminated_brace_is_literal() {
        let source = TemplatePrompt::new("oops {user");
        let spec = source.current_prompt();
        assert_eq!(spec.text(), "oops {user");
    }

    #[test]
    fn test_shorten_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(shorten_home(&home), "~");
            assert_eq!(shorten_home(&home.join("src")), "~/src");
        }
        assert_eq!(shorten_home(Path::new("/etc")), "/etc");
    }
}
