//! Page templates and the template registry

mod registry;
mod template;

pub use registry::{
    PageRegistry, CLIENTES, ESTOQUE, LOGIN, MAIN, NOT_FOUND, PRODUTOS, QUALIDADE, RELATORIOS,
    SECTIONS, VENDAS,
};
pub use template::{escape_html, PageTemplate, TemplateError, TemplateVariable};
