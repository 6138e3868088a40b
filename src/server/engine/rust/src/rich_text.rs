/* src/server/engine/rust/src/rich_text.rs */

use vitrine_server::model::{ListFormat, RichTextNode};

use crate::escape::escape_html;

/// Render CMS rich text to HTML. Unsupported nodes render nothing.
pub fn render_rich_text(nodes: &[RichTextNode]) -> String {
  let mut out = String::new();
  for node in nodes {
    render_node(node, &mut out);
  }
  out
}

fn render_children(node: &RichTextNode, out: &mut String) {
  for child in node.children() {
    render_node(child, out);
  }
}

fn wrap(tag: &str, node: &RichTextNode, out: &mut String) {
  out.push('<');
  out.push_str(tag);
  out.push('>');
  render_children(node, out);
  out.push_str("</");
  out.push_str(tag);
  out.push('>');
}

fn render_node(node: &RichTextNode, out: &mut String) {
  match node {
    RichTextNode::Paragraph { .. } => wrap("p", node, out),
    RichTextNode::Heading { level, .. } => {
      let level = level.unwrap_or(2).clamp(1, 6);
      wrap(&format!("h{level}"), node, out);
    }
    RichTextNode::List { format, .. } => {
      let tag = match format {
        Some(ListFormat::Ordered) => "ol",
        _ => "ul",
      };
      wrap(tag, node, out);
    }
    RichTextNode::ListItem { .. } => wrap("li", node, out),
    RichTextNode::Quote { .. } => wrap("blockquote", node, out),
    RichTextNode::Code { .. } => {
      out.push_str("<pre><code>");
      out.push_str(&escape_html(&node.plain_text()));
      out.push_str("</code></pre>");
    }
    RichTextNode::Link { url, .. } => {
      if is_safe_href(url) {
        out.push_str(&format!("<a href=\"{}\">", escape_html(url)));
        render_children(node, out);
        out.push_str("</a>");
      } else {
        render_children(node, out);
      }
    }
    RichTextNode::Text { text, bold, italic, underline, strikethrough, code } => {
      let marks: [(bool, &str); 5] =
        [(*code, "code"), (*bold, "strong"), (*italic, "em"), (*underline, "u"), (*strikethrough, "s")];
      for (_, tag) in marks.iter().filter(|(on, _)| *on) {
        out.push_str(&format!("<{tag}>"));
      }
      out.push_str(&escape_html(text).replace('\n', "<br>"));
      for (_, tag) in marks.iter().rev().filter(|(on, _)| *on) {
        out.push_str(&format!("</{tag}>"));
      }
    }
    RichTextNode::Unsupported => {}
  }
}

/// Rejects script URLs in content-supplied links.
pub(crate) fn is_safe_href(url: &str) -> bool {
  let lower = url.trim().to_ascii_lowercase();
  !lower.is_empty() && !lower.starts_with("javascript:") && !lower.starts_with("data:")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn nodes(json: &str) -> Vec<RichTextNode> {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn paragraph_with_marks() {
    let html = render_rich_text(&nodes(
      r#"[{"type":"paragraph","children":[
        {"type":"text","text":"Hello "},
        {"type":"text","text":"bold","bold":true,"italic":true},
        {"type":"text","text":" <x>"}
      ]}]"#,
    ));
    assert_eq!(html, "<p>Hello <strong><em>bold</em></strong> &lt;x&gt;</p>");
  }

  #[test]
  fn heading_defaults_to_level_two() {
    let html = render_rich_text(&nodes(
      r#"[{"type":"heading","children":[{"type":"text","text":"A"}]},
          {"type":"heading","level":9,"children":[{"type":"text","text":"B"}]}]"#,
    ));
    assert_eq!(html, "<h2>A</h2><h6>B</h6>");
  }

  #[test]
  fn lists() {
    let html = render_rich_text(&nodes(
      r#"[{"type":"list","format":"ordered","children":[
        {"type":"list-item","children":[{"type":"text","text":"one"}]},
        {"type":"list-item","children":[{"type":"text","text":"two"}]}
      ]},{"type":"list","children":[]}]"#,
    ));
    assert_eq!(html, "<ol><li>one</li><li>two</li></ol><ul></ul>");
  }

  #[test]
  fn links_are_escaped_and_filtered() {
    let html = render_rich_text(&nodes(
      r#"[{"type":"paragraph","children":[
        {"type":"link","url":"https://x.test/?a=1&b=2","children":[{"type":"text","text":"ok"}]},
        {"type":"link","url":"javascript:alert(1)","children":[{"type":"text","text":"bad"}]}
      ]}]"#,
    ));
    assert_eq!(html, "<p><a href=\"https://x.test/?a=1&amp;b=2\">ok</a>bad</p>");
  }

  #[test]
  fn unsupported_nodes_are_skipped() {
    let html = render_rich_text(&nodes(r#"[{"type":"image"},{"type":"quote","children":[{"type":"text","text":"q"}]}]"#));
    assert_eq!(html, "<blockquote>q</blockquote>");
  }
}
