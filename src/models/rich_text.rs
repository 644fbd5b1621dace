//! Portable Text documents
//!
//! Rich text arrives as a list of blocks discriminated by `_type`. Text
//! blocks and images are understood; anything else decodes to
//! [`Block::Unknown`] and renders as nothing.

use super::null_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(rename = "image")]
    Image(ImageBlock),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// `normal`, `h1`..`h6`, `blockquote`
    #[serde(default, deserialize_with = "null_default")]
    pub style: String,
    #[serde(default, deserialize_with = "null_default")]
    pub children: Vec<Span>,
    #[serde(default, deserialize_with = "null_default", rename = "markDefs")]
    pub mark_defs: Vec<MarkDef>,
    /// `bullet` or `number` when the block is a list item
    #[serde(default, rename = "listItem")]
    pub list_item: Option<String>,
    /// Nesting depth of a list item, starting at 1
    #[serde(default)]
    pub level: Option<u32>,
}

/// Run of text sharing the same marks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default, deserialize_with = "null_default")]
    pub text: String,
    /// Decorator names or keys into the block's `markDefs`
    #[serde(default, deserialize_with = "null_default")]
    pub marks: Vec<String>,
}

/// Annotation referenced from a span's marks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(default, deserialize_with = "null_default", rename = "_key")]
    pub key: String,
    #[serde(default, deserialize_with = "null_default", rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Either a bare reference or an expanded asset document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(default, rename = "_ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_mixed_blocks() {
        let blocks: Vec<Block> = serde_json::from_value(json!([
            {
                "_type": "block",
                "_key": "a",
                "style": "h2",
                "children": [{"_type": "span", "text": "Título", "marks": []}],
                "markDefs": []
            },
            {"_type": "image", "_key": "b", "asset": {"_type": "reference", "_ref": "image-x-1x1-png"}},
            {"_type": "youtubeEmbed", "_key": "c", "url": "https://youtu.be/x"}
        ]))
        .unwrap();

        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], Block::Text(t) if t.style == "h2" && t.children[0].text == "Título"));
        assert!(matches!(&blocks[1], Block::Image(i) if i.asset.as_ref().and_then(|a| a.reference.as_deref()) == Some("image-x-1x1-png")));
        assert_eq!(blocks[2], Block::Unknown);
    }

    #[test]
    fn test_text_block_defaults() {
        let block: Block = serde_json::from_value(json!({"_type": "block"})).unwrap();
        let Block::Text(text) = block else { panic!("expected text block") };
        assert!(text.style.is_empty());
        assert!(text.children.is_empty());
        assert!(text.list_item.is_none());
    }
}
