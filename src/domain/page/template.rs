//! Page template parsing and rendering
//!
//! Supports variable syntax: `${var:variable-name:default-value}`
//! - `${var:name}` - Required variable, error if not provided
//! - `${var:name:default}` - Optional variable with default value
//!
//! Injected values are HTML-escaped; the surrounding document is emitted
//! verbatim.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Regex to match variable patterns: ${var:name} or ${var:name:default}
static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{var:([a-zA-Z0-9][-a-zA-Z0-9]*)(?::([^}]*))?\}").unwrap());

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },
}

/// A variable slot parsed out of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariable {
    pub name: String,
    pub default: Option<String>,
    pub required: bool,
}

impl TemplateVariable {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            required: true,
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
            required: false,
        }
    }
}

/// A parsed page template
#[derive(Debug, Clone)]
pub struct PageTemplate {
    content: String,
    variables: Vec<TemplateVariable>,
}

impl PageTemplate {
    /// Parse a template document and extract its variable slots
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut variables = Vec::new();
        let mut seen_names = std::collections::HashSet::new();

        for cap in VARIABLE_PATTERN.captures_iter(&content) {
            let name = cap.get(1).unwrap().as_str().to_string();

            if seen_names.contains(&name) {
                continue;
            }
            seen_names.insert(name.clone());

            let variable = match cap.get(2) {
                Some(default) => TemplateVariable::with_default(&name, default.as_str()),
                None => TemplateVariable::required(&name),
            };

            variables.push(variable);
        }

        Self { content, variables }
    }

    /// The original template document
    pub fn content(&self) -> &str {
        &self.content
    }

    /// All parsed variable slots
    pub fn variables(&self) -> &[TemplateVariable] {
        &self.variables
    }

    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }

    /// Render the template with the provided values.
    ///
    /// Values are HTML-escaped before injection. Variables without a value
    /// fall back to their default; required variables without a value are
    /// an error.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut result = self.content.clone();

        for var in &self.variables {
            let value = match (values.get(&var.name), &var.default) {
                (Some(v), _) => escape_html(v),
                (None, Some(default)) => escape_html(default),
                (None, None) => {
                    return Err(TemplateError::MissingVariable {
                        name: var.name.clone(),
                    });
                }
            };

            let pattern = match &var.default {
                Some(default) => format!("${{var:{}:{}}}", var.name, default),
                None => format!("${{var:{}}}", var.name),
            };
            result = result.replace(&pattern, &value);
        }

        Ok(result)
    }
}

/// Escape a value for injection into an HTML document
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_variables() {
        let template = PageTemplate::parse("<h1>Vendas</h1>");
        assert!(!template.has_variables());
        assert!(template.variables().is_empty());
    }

    #[test]
    fn test_parse_required_variable() {
        let template = PageTemplate::parse("<p>${var:message}</p>");
        assert_eq!(template.variables().len(), 1);

        let var = &template.variables()[0];
        assert_eq!(var.name, "message");
        assert!(var.required);
        assert!(var.default.is_none());
    }

    #[test]
    fn test_parse_variable_with_empty_default() {
        let template = PageTemplate::parse("<p>${var:error:}</p>");
        let var = &template.variables()[0];
        assert_eq!(var.name, "error");
        assert!(!var.required);
        assert_eq!(var.default, Some(String::new()));
    }

    #[test]
    fn test_parse_duplicate_variables() {
        let template = PageTemplate::parse("${var:flash:} and ${var:flash:} again");
        assert_eq!(template.variables().len(), 1);
    }

    #[test]
    fn test_render_with_value() {
        let template = PageTemplate::parse("<p class=\"error\">${var:error:}</p>");

        let mut values = HashMap::new();
        values.insert("error".to_string(), "Usuário ou senha incorretos!".to_string());

        let result = template.render(&values).unwrap();
        assert_eq!(result, "<p class=\"error\">Usuário ou senha incorretos!</p>");
    }

    #[test]
    fn test_render_falls_back_to_default() {
        let template = PageTemplate::parse("<p>${var:error:}</p>");
        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "<p></p>");
    }

    #[test]
    fn test_render_missing_required_variable() {
        let template = PageTemplate::parse("<p>${var:message}</p>");

        let result = template.render(&HashMap::new());
        assert_eq!(
            result,
            Err(TemplateError::MissingVariable {
                name: "message".to_string()
            })
        );
    }

    #[test]
    fn test_render_escapes_html() {
        let template = PageTemplate::parse("<p>${var:error:}</p>");

        let mut values = HashMap::new();
        values.insert("error".to_string(), "<script>alert(1)</script>".to_string());

        let result = template.render(&values).unwrap();
        assert_eq!(result, "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"x\"='y'"), "&quot;x&quot;=&#39;y&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
