//! Template registry
//!
//! The page documents ship embedded in the binary and are parsed once at
//! startup. Template ids keep the original `views/templates` paths
//! (`login.html`, `vendas/index.html`, ...).

use std::collections::HashMap;

use super::template::{PageTemplate, TemplateError};
use crate::domain::DomainError;

/// Template id for the login page
pub const LOGIN: &str = "login.html";
/// Template id for the main panel
pub const MAIN: &str = "main.html";
/// Template id for the not-found page
pub const NOT_FOUND: &str = "404.html";

/// Section page template ids
pub const VENDAS: &str = "vendas/index.html";
pub const PRODUTOS: &str = "produtos/index.html";
pub const ESTOQUE: &str = "estoque/index.html";
pub const CLIENTES: &str = "clientes/index.html";
pub const RELATORIOS: &str = "relatorios/index.html";
pub const QUALIDADE: &str = "qualidade/index.html";

/// The six static section pages, in route order
pub const SECTIONS: [(&str, &str); 6] = [
    ("vendas", VENDAS),
    ("produtos", PRODUTOS),
    ("estoque", ESTOQUE),
    ("clientes", CLIENTES),
    ("relatorios", RELATORIOS),
    ("qualidade", QUALIDADE),
];

/// Registry of parsed page templates keyed by template id
#[derive(Debug)]
pub struct PageRegistry {
    templates: HashMap<String, PageTemplate>,
}

impl PageRegistry {
    /// Build the registry from the embedded page documents
    pub fn embedded() -> Self {
        let documents: [(&str, &str); 9] = [
            (LOGIN, include_str!("../../../templates/login.html")),
            (MAIN, include_str!("../../../templates/main.html")),
            (NOT_FOUND, include_str!("../../../templates/404.html")),
            (VENDAS, include_str!("../../../templates/vendas/index.html")),
            (PRODUTOS, include_str!("../../../templates/produtos/index.html")),
            (ESTOQUE, include_str!("../../../templates/estoque/index.html")),
            (CLIENTES, include_str!("../../../templates/clientes/index.html")),
            (RELATORIOS, include_str!("../../../templates/relatorios/index.html")),
            (QUALIDADE, include_str!("../../../templates/qualidade/index.html")),
        ];

        let mut templates = HashMap::new();

        for (id, content) in documents {
            templates.insert(id.to_string(), PageTemplate::parse(content));
        }

        Self { templates }
    }

    /// Get a parsed template by id
    pub fn get(&self, id: &str) -> Option<&PageTemplate> {
        self.templates.get(id)
    }

    /// Render a template by id with the provided values
    pub fn render(
        &self,
        id: &str,
        values: &HashMap<String, String>,
    ) -> Result<String, DomainError> {
        let template = self
            .templates
            .get(id)
            .ok_or_else(|| DomainError::template(format!("Unknown template '{}'", id)))?;

        template.render(values).map_err(|e| match e {
            TemplateError::MissingVariable { name } => DomainError::template(format!(
                "Template '{}' is missing required variable '{}'",
                id, name
            )),
        })
    }

    /// Render a template that takes no values
    pub fn render_static(&self, id: &str) -> Result<String, DomainError> {
        self.render(id, &HashMap::new())
    }
}
