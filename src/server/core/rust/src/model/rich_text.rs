/* src/server/core/rust/src/model/rich_text.rs */

use serde::{Deserialize, Serialize};

use super::de::null_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
  Ordered,
  Unordered,
}

/// One node of the CMS "blocks" rich text format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RichTextNode {
  Paragraph {
    #[serde(default, deserialize_with = "null_default")]
    children: Vec<RichTextNode>,
  },
  Heading {
    #[serde(default)]
    level: Option<u8>,
    #[serde(default, deserialize_with = "null_default")]
    children: Vec<RichTextNode>,
  },
  List {
    #[serde(default)]
    format: Option<ListFormat>,
    #[serde(default, deserialize_with = "null_default")]
    children: Vec<RichTextNode>,
  },
  ListItem {
    #[serde(default, deserialize_with = "null_default")]
    children: Vec<RichTextNode>,
  },
  Quote {
    #[serde(default, deserialize_with = "null_default")]
    children: Vec<RichTextNode>,
  },
  Code {
    #[serde(default, deserialize_with = "null_default")]
    children: Vec<RichTextNode>,
  },
  Link {
    #[serde(default, deserialize_with = "null_default")]
    url: String,
    #[serde(default, deserialize_with = "null_default")]
    children: Vec<RichTextNode>,
  },
  Text {
    #[serde(default, deserialize_with = "null_default")]
    text: String,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
    #[serde(default)]
    strikethrough: bool,
    #[serde(default)]
    code: bool,
  },
  #[serde(other)]
  Unsupported,
}

impl RichTextNode {
  pub fn text(text: impl Into<String>) -> Self {
    RichTextNode::Text {
      text: text.into(),
      bold: false,
      italic: false,
      underline: false,
      strikethrough: false,
      code: false,
    }
  }

  pub fn paragraph(text: impl Into<String>) -> Self {
    RichTextNode::Paragraph { children: vec![RichTextNode::text(text)] }
  }

  pub fn children(&self) -> &[RichTextNode] {
    match self {
      RichTextNode::Paragraph { children }
      | RichTextNode::Heading { children, .. }
      | RichTextNode::List { children, .. }
      | RichTextNode::ListItem { children }
      | RichTextNode::Quote { children }
      | RichTextNode::Code { children }
      | RichTextNode::Link { children, .. } => children,
      RichTextNode::Text { .. } | RichTextNode::Unsupported => &[],
    }
  }

  /// Concatenated text of this node and its descendants.
  pub fn plain_text(&self) -> String {
    match self {
      RichTextNode::Text { text, .. } => text.clone(),
      other => other.children().iter().map(RichTextNode::plain_text).collect(),
    }
  }
}

/// Plain text of a rich text document, one line per top-level node.
pub fn plain_text(nodes: &[RichTextNode]) -> String {
  nodes.iter().map(RichTextNode::plain_text).collect::<Vec<_>>().join("\n")
}

/// Fields the CMS may store either as a plain string or as rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
  Plain(String),
  Rich(Vec<RichTextNode>),
}

impl Default for TextValue {
  fn default() -> Self {
    TextValue::Plain(String::new())
  }
}

impl TextValue {
  pub fn plain_text(&self) -> String {
    match self {
      TextValue::Plain(s) => s.clone(),
      TextValue::Rich(nodes) => plain_text(nodes),
    }
  }

  pub fn is_blank(&self) -> bool {
    self.plain_text().trim().is_empty()
  }
}

impl From<&str> for TextValue {
  fn from(s: &str) -> Self {
    TextValue::Plain(s.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_nested_document() {
    let json = r#"[
      {"type":"heading","level":3,"children":[{"type":"text","text":"Title"}]},
      {"type":"paragraph","children":[
        {"type":"text","text":"Hello "},
        {"type":"text","text":"world","bold":true},
        {"type":"link","url":"https://x.test","children":[{"type":"text","text":"!"}]}
      ]},
      {"type":"list","format":"ordered","children":[
        {"type":"list-item","children":[{"type":"text","text":"one"}]}
      ]}
    ]"#;
    let nodes: Vec<RichTextNode> = serde_json::from_str(json).unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(matches!(nodes[0], RichTextNode::Heading { level: Some(3), .. }));
    assert!(matches!(nodes[2], RichTextNode::List { format: Some(ListFormat::Ordered), .. }));
    assert_eq!(plain_text(&nodes), "Title\nHello world!\none");
  }

  #[test]
  fn unknown_node_types_are_tolerated() {
    let nodes: Vec<RichTextNode> =
      serde_json::from_str(r#"[{"type":"image","image":{"url":"/x.png"}},{"type":"paragraph"}]"#)
        .unwrap();
    assert_eq!(nodes[0], RichTextNode::Unsupported);
    assert_eq!(nodes[1], RichTextNode::Paragraph { children: vec![] });
  }

  #[test]
  fn text_value_accepts_both_shapes() {
    let plain: TextValue = serde_json::from_str(r#""Accueil""#).unwrap();
    assert_eq!(plain.plain_text(), "Accueil");
    let rich: TextValue =
      serde_json::from_str(r#"[{"type":"paragraph","children":[{"type":"text","text":"Hi"}]}]"#)
        .unwrap();
    assert_eq!(rich.plain_text(), "Hi");
    assert!(TextValue::default().is_blank());
  }
}
