//! Theme engine
//!
//! This module provides template rendering using Tera.
//! Features:
//! - Templates embedded in the binary
//! - Standard template variables (site name, navigation, color scheme)
//! - Light/dark color scheme resolution
//! - Plain error page when a template fails

use anyhow::Result;
use chrono::Datelike;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::error::Error as StdError;
use tera::{Context as TeraContext, Tera};

mod color_scheme;
mod error;
mod nav;

pub use color_scheme::{
    html_class, toggle_label, ColorScheme, COOKIE_MAX_AGE_SECS, COOKIE_NAME, SYSTEM_HINT_HEADER,
    SYSTEM_TOGGLE_LABEL,
};
pub use error::ThemeError;
pub use nav::{navigation, NavLink, MEMBERS_LINK};

/// Page templates compiled into the binary
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Theme engine for rendering templates
pub struct ThemeEngine {
    /// Tera template engine instance
    tera: Tera,
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}

impl ThemeEngine {
    /// Create a theme engine from the embedded templates
    pub fn new() -> Result<Self> {
        let mut templates = Vec::new();
        for name in EmbeddedTemplates::iter() {
            let Some(file) = EmbeddedTemplates::get(&name) else {
                continue;
            };
            let content = String::from_utf8(file.data.into_owned()).map_err(|e| {
                ThemeError::TemplateError(format!("Template {name} is not UTF-8: {e}"))
            })?;
            templates.push((name.to_string(), content));
        }

        let engine = Self::from_templates(templates)?;
        tracing::info!(
            templates = engine.tera.get_template_names().count(),
            "Loaded embedded templates"
        );
        Ok(engine)
    }

    /// Create a theme engine from `(name, source)` pairs
    pub fn from_templates<I, N, S>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut templates: Vec<(String, String)> = templates
            .into_iter()
            .map(|(name, source)| (name.into(), source.into()))
            .collect();

        // Sort templates so base templates are loaded first
        templates.sort_by(|a, b| {
            let a_is_base = a.0 == "base.html" || a.0.ends_with("/base.html");
            let b_is_base = b.0 == "base.html" || b.0.ends_with("/base.html");
            b_is_base.cmp(&a_is_base)
        });

        let mut tera = Tera::default();
        for (name, content) in templates {
            tera.add_raw_template(&name, &content).map_err(|e| {
                ThemeError::TemplateError(format!("Failed to add template {}: {}", name, e))
            })?;
        }

        // Build inheritance chains after adding all templates
        tera.build_inheritance_chains().map_err(|e| {
            ThemeError::TemplateError(format!("Failed to build template inheritance: {}", e))
        })?;

        Ok(Self { tera })
    }

    /// Render a template with context
    ///
    /// # Arguments
    /// * `template` - Template name (e.g., "pastores.html")
    /// * `context` - Tera context with template variables
    pub fn render(&self, template: &str, context: &TeraContext) -> Result<String> {
        self.tera.render(template, context).map_err(|e| {
            let mut error_msg = format!("Failed to render '{}': {}", template, e);
            let mut source = e.source();
            while let Some(s) = source {
                error_msg.push_str(&format!("\n  Caused by: {}", s));
                source = s.source();
            }
            ThemeError::TemplateError(error_msg).into()
        })
    }

    /// Render a template with standard variables automatically added
    pub fn render_with_standard_vars(
        &self,
        template: &str,
        context: &TeraContext,
        standard_vars: &StandardTemplateVars,
    ) -> Result<String> {
        let mut full_context = context.clone();

        full_context.insert("site_name", &standard_vars.site_name);
        full_context.insert("site_tagline", &standard_vars.site_tagline);
        full_context.insert("request_path", &standard_vars.request_path);
        full_context.insert("year", &standard_vars.year);
        full_context.insert("color_scheme", &standard_vars.color_scheme);
        full_context.insert("html_class", html_class(standard_vars.color_scheme));
        full_context.insert("toggle_label", toggle_label(standard_vars.color_scheme));
        full_context.insert("nav_links", &standard_vars.nav_links);
        full_context.insert("members_link", &MEMBERS_LINK);

        self.render(template, &full_context)
    }
}

/// Last-resort page when a template cannot be rendered
pub fn simple_error_page() -> String {
    r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Erro</title>
</head>
<body>
    <h1>Erro</h1>
    <p>Não foi possível exibir esta página. Tente novamente mais tarde.</p>
    <p><a href="/">Voltar para o início</a></p>
</body>
</html>"#
        .to_string()
}

/// Variables every page template receives
#[derive(Debug, Clone, Serialize)]
pub struct StandardTemplateVars {
    pub site_name: String,
    pub site_tagline: String,
    /// Current request path, used to mark the active link
    pub request_path: String,
    /// Current year (for copyright)
    pub year: i32,
    /// `None` when neither the cookie nor the client hint tells
    pub color_scheme: Option<ColorScheme>,
    pub nav_links: Vec<NavLink>,
}

impl StandardTemplateVars {
    pub fn new(
        site_name: impl Into<String>,
        site_tagline: impl Into<String>,
        request_path: impl Into<String>,
        color_scheme: Option<ColorScheme>,
    ) -> Self {
        let request_path = request_path.into();
        Self {
            site_name: site_name.into(),
            site_tagline: site_tagline.into(),
            nav_links: navigation(&request_path),
            request_path,
            year: chrono::Utc::now().year(),
            color_scheme,
        }
    }
}

#[cfg(test)]
mod tests;
