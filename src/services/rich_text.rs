//! Rich text rendering service
//!
//! Turns Portable Text blocks into HTML. Rendering is a pure function of
//! the blocks: no I/O, no failure. Unrenderable pieces (unknown block
//! types, images without a resolvable asset) produce no output.
//!
//! # Example
//!
//! ```
//! use igreja_unida::content::ImageAssets;
//! use igreja_unida::models::Block;
//! use igreja_unida::services::rich_text::RichTextRenderer;
//!
//! let renderer = RichTextRenderer::new(ImageAssets::new("8u8f8r8d", "production"));
//! let blocks: Vec<Block> = serde_json::from_str(
//!     r#"[{"_type": "block", "style": "h2", "children": [{"text": "Olá"}]}]"#,
//! ).unwrap();
//! assert_eq!(renderer.render(&blocks), "<h2>Olá</h2>");
//! ```

use crate::content::ImageAssets;
use crate::models::rich_text::{Block, ImageBlock, MarkDef, Span, TextBlock};
use tera::escape_html;

/// Alt text for images that have none
const DEFAULT_IMAGE_ALT: &str = "Imagem do artigo";

/// `rel` for links leaving the site
const EXTERNAL_LINK_REL: &str = "noindex nofollow noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from_item(item: &str) -> Self {
        match item {
            "number" => Self::Number,
            _ => Self::Bullet,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Bullet => "ul",
            Self::Number => "ol",
        }
    }
}

/// Stack of open lists; every open list has one open `<li>`
#[derive(Default)]
struct ListStack(Vec<ListKind>);

impl ListStack {
    fn pop_into(&mut self, out: &mut String) {
        if let Some(kind) = self.0.pop() {
            out.push_str("</li></");
            out.push_str(kind.tag());
            out.push('>');
        }
    }

    fn close_all(&mut self, out: &mut String) {
        while !self.0.is_empty() {
            self.pop_into(out);
        }
    }

    /// Open the `<li>` for an item of `kind` at nesting `level`
    fn open_item(&mut self, kind: ListKind, level: usize, out: &mut String) {
        while self.0.len() > level {
            self.pop_into(out);
        }
        if self.0.len() == level && self.0.last() != Some(&kind) {
            self.pop_into(out);
        }
        if self.0.len() == level {
            out.push_str("</li>");
        }
        while self.0.len() < level {
            out.push('<');
            out.push_str(kind.tag());
            out.push('>');
            self.0.push(kind);
            if self.0.len() < level {
                out.push_str("<li>");
            }
        }
        out.push_str("<li>");
    }
}

/// Renders Portable Text to HTML
#[derive(Debug, Clone)]
pub struct RichTextRenderer {
    assets: ImageAssets,
}

impl RichTextRenderer {
    pub fn new(assets: ImageAssets) -> Self {
        Self { assets }
    }

    /// Render a whole document
    pub fn render(&self, blocks: &[Block]) -> String {
        let mut out = String::new();
        let mut lists = ListStack::default();

        for block in blocks {
            match block {
                Block::Text(text) if text.list_item.is_some() => {
                    let kind = ListKind::from_item(text.list_item.as_deref().unwrap_or_default());
                    let level = text.level.unwrap_or(1).max(1) as usize;
                    lists.open_item(kind, level, &mut out);
                    out.push_str(&self.render_spans(text));
                }
                other => {
                    lists.close_all(&mut out);
                    out.push_str(&self.render_block(other));
                }
            }
        }

        lists.close_all(&mut out);
        out
    }

    /// Render one block outside of any list
    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Text(text) => {
                let tag = style_tag(&text.style);
                format!("<{tag}>{}</{tag}>", self.render_spans(text))
            }
            Block::Image(image) => self.render_image(image),
            Block::Unknown => String::new(),
        }
    }

    fn render_spans(&self, block: &TextBlock) -> String {
        block
            .children
            .iter()
            .map(|span| render_span(span, &block.mark_defs))
            .collect()
    }

    fn render_image(&self, image: &ImageBlock) -> String {
        let Some(src) = self.image_url(image) else {
            return String::new();
        };
        let alt = image
            .alt
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_IMAGE_ALT);

        let mut html = format!(
            r#"<figure><img src="{}" alt="{}" loading="lazy">"#,
            escape_html(&src),
            escape_html(alt)
        );
        if let Some(caption) = image.caption.as_deref().filter(|c| !c.trim().is_empty()) {
            html.push_str("<figcaption>");
            html.push_str(&escape_html(caption));
            html.push_str("</figcaption>");
        }
        html.push_str("</figure>");
        html
    }

    fn image_url(&self, image: &ImageBlock) -> Option<String> {
        let asset = image.asset.as_ref()?;
        if let Some(url) = asset.url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Some(url.to_string());
        }
        self.assets.url_for_ref(asset.reference.as_deref()?)
    }
}

fn style_tag(style: &str) -> &'static str {
    match style {
        "h1" => "h1",
        "h2" => "h2",
        "h3" => "h3",
        "h4" => "h4",
        "h5" => "h5",
        "h6" => "h6",
        "blockquote" => "blockquote",
        _ => "p",
    }
}

fn render_span(span: &Span, mark_defs: &[MarkDef]) -> String {
    let text = escape_html(&span.text).replace('\n', "<br>");

    let mut open = String::new();
    let mut close = Vec::new();
    for mark in &span.marks {
        let (start, end) = match mark.as_str() {
            "strong" => ("<strong>".to_string(), "</strong>"),
            "em" => ("<em>".to_string(), "</em>"),
            "code" => ("<code>".to_string(), "</code>"),
            "underline" => ("<u>".to_string(), "</u>"),
            "strike-through" => ("<s>".to_string(), "</s>"),
            key => match link_open_tag(key, mark_defs) {
                Some(tag) => (tag, "</a>"),
                None => continue,
            },
        };
        open.push_str(&start);
        close.push(end);
    }

    let mut html = open;
    html.push_str(&text);
    for end in close.iter().rev() {
        html.push_str(end);
    }
    html
}

/// Schemes a link annotation may use; anything else renders as plain text
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// `<a ...>` for a mark key that points at a link annotation
fn link_open_tag(key: &str, mark_defs: &[MarkDef]) -> Option<String> {
    let def = mark_defs.iter().find(|d| d.key == key && d.kind == "link")?;
    let href = def.href.as_deref().map(str::trim).unwrap_or_default();
    match link_scheme(href) {
        Some(scheme) if scheme == "http" || scheme == "https" => Some(format!(
            r#"<a href="{}" target="_blank" rel="{EXTERNAL_LINK_REL}">"#,
            escape_html(href)
        )),
        Some(scheme) if !ALLOWED_SCHEMES.contains(&scheme.as_str()) => None,
        _ => Some(format!(r#"<a href="{}">"#, escape_html(href))),
    }
}

/// Lowercased scheme of `href`, `None` for relative references
fn link_scheme(href: &str) -> Option<String> {
    let end = href.find(|c: char| matches!(c, ':' | '/' | '?' | '#'))?;
    if !href[end..].starts_with(':') {
        return None;
    }
    // Browsers drop tabs and newlines inside the scheme
    Some(
        href[..end]
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect::<String>()
            .to_ascii_lowercase(),
    )
}
