use once_cell::sync::Lazy;
use regex::Regex;
use crate::traits::declaration_pattern::{Declaration, DeclarationPattern};

static AUTO_PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public\s+(\w+)\s+(\w+)\s*\{\s*get;\s*set;\s*\}").expect("invalid regex")
});

/// NinjaScript / C# auto-implemented properties: `public <type> <name> { get; set; }`.
///
/// Defaults are the first `<name> = <expr>;` anywhere in the text. The name is not
/// anchored to a word boundary, so `SlowFastMA = 3;` also counts as a default for
/// `FastMA`, and reuse of the name elsewhere can report an unrelated value.
#[derive(Debug, Clone, Default)]
pub struct AutoPropertyPattern;

impl AutoPropertyPattern {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationPattern for AutoPropertyPattern {
    fn dialect(&self) -> &str {
        "ninjascript"
    }

    fn declarations(&self, source: &str) -> Vec<Declaration> {
        AUTO_PROPERTY_RE
            .captures_iter(source)
            .map(|caps| Declaration {
                param_type: caps[1].to_string(),
                name: caps[2].to_string(),
            })
            .collect()
    }

    fn default_value(&self, source: &str, name: &str) -> Option<String> {
        let assignment = Regex::new(&format!(r"{}\s*=\s*([^;]+);", regex::escape(name))).ok()?;
        assignment
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|value| value.as_str().to_string())
    }
}
