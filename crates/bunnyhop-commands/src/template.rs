use crate::error::Result;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

/// Matches `{{ name }}`, capturing the trimmed name
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").unwrap());

/// Placeholder handling for path-template URLs
pub struct TemplateProcessor;

impl TemplateProcessor {
    /// Extract placeholder names in first-occurrence order, without duplicates
    pub fn extract_keywords(template: &str) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();

        for cap in PLACEHOLDER.captures_iter(template) {
            let name = cap.get(1).map(|m| m.as_str()).unwrap_or_default();
            if !keywords.iter().any(|k| k == name) {
                keywords.push(name.to_string());
            }
        }

        keywords
    }

    /// Remove every placeholder from a template
    pub fn strip_placeholders(template: &str) -> String {
        PLACEHOLDER.replace_all(template, "").into_owned()
    }

    /// Replace every occurrence of `{{ keyword }}`, ignoring case and the
    /// whitespace inside the braces. The value is inserted literally.
    pub fn substitute(template: &str, keyword: &str, value: &str) -> Result<String> {
        let pattern = RegexBuilder::new(&format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(keyword)))
            .case_insensitive(true)
            .build()?;

        Ok(pattern.replace_all(template, NoExpand(value)).into_owned())
    }

    /// Cut a template at its first remaining `{{`, keeping it whole if there is none
    pub fn truncate_at_placeholder(template: &mut String) {
        if let Some(pos) = template.find("{{") {
            template.truncate(pos);
        }
    }
}
