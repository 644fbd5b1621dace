//! Tests for the theme engine

use super::*;
use tera::Context as TeraContext;

/// Pages every route renders
const PAGE_TEMPLATES: &[&str] = &[
    "home.html",
    "historia.html",
    "pastores.html",
    "pastor.html",
    "ministerios.html",
    "eventos.html",
    "galeria.html",
    "artigos.html",
    "artigo.html",
    "noticias.html",
    "lives_podcasts.html",
    "contato.html",
    "area_membros.html",
    "not_found.html",
];

fn test_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "index.html",
            r#"{% extends "base.html" %}
{% block content %}<h1>{{ site_name }}</h1><p>{{ site_tagline }}</p>{% endblock %}"#,
        ),
        (
            "base.html",
            r#"<html class="{{ html_class }}"><body>{% block content %}{% endblock %}</body></html>"#,
        ),
        (
            "nav.html",
            r#"{% for link in nav_links %}<a href="{{ link.href }}"{% if link.active %} aria-current="page"{% endif %}>{{ link.label }}</a>{% endfor %}"#,
        ),
        ("raw.html", "{{ body }}|{{ body | safe }}"),
    ]
}

fn engine() -> ThemeEngine {
    ThemeEngine::from_templates(test_templates()).unwrap()
}

#[test]
fn test_base_template_loaded_first() {
    // index.html comes before base.html in the input and still resolves
    let html = engine().render("index.html", &{
        let mut ctx = TeraContext::new();
        ctx.insert("site_name", "Igreja");
        ctx.insert("site_tagline", "Amor");
        ctx.insert("html_class", "");
        ctx
    });
    assert_eq!(html.unwrap(), r#"<html class=""><body><h1>Igreja</h1><p>Amor</p></body></html>"#);
}

#[test]
fn test_render_with_standard_vars() {
    let vars = StandardTemplateVars::new("Igreja", "Amor", "/", Some(ColorScheme::Dark));
    let html = engine()
        .render_with_standard_vars("index.html", &TeraContext::new(), &vars)
        .unwrap();
    assert!(html.starts_with(r#"<html class="dark">"#));
    assert!(html.contains("<h1>Igreja</h1>"));
}

#[test]
fn test_navigation_marks_current_path() {
    let vars = StandardTemplateVars::new("Igreja", "", "/eventos", None);
    let html = engine()
        .render_with_standard_vars("nav.html", &TeraContext::new(), &vars)
        .unwrap();
    assert_eq!(html.matches("aria-current").count(), 1);
    assert!(html.contains(r#"<a href="&#x2F;eventos" aria-current="page">Eventos</a>"#));
}

#[test]
fn test_html_is_escaped_unless_safe() {
    let mut ctx = TeraContext::new();
    ctx.insert("body", "<b>");
    let html = engine().render("raw.html", &ctx).unwrap();
    assert_eq!(html, "&lt;b&gt;|<b>");
}

#[test]
fn test_missing_template_is_error() {
    let err = engine().render("nope.html", &TeraContext::new()).unwrap_err();
    assert!(err.to_string().contains("nope.html"));
}

#[test]
fn test_invalid_template_rejected() {
    let result = ThemeEngine::from_templates(vec![("bad.html", "{% if %}")]);
    assert!(result.is_err());
}

#[test]
fn test_broken_inheritance_rejected() {
    let result = ThemeEngine::from_templates(vec![("page.html", r#"{% extends "missing.html" %}"#)]);
    assert!(result.is_err());
}

#[test]
fn test_embedded_templates_cover_every_page() {
    let engine = ThemeEngine::new().unwrap();
    let names: Vec<&str> = engine.tera.get_template_names().collect();
    assert!(names.contains(&"base.html"));
    for page in PAGE_TEMPLATES {
        assert!(names.contains(page), "missing template {page}");
    }
}
