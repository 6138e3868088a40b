/* src/server/engine/rust/src/escape.rs */

/// Escape text for HTML content and double- or single-quoted attributes.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// Escape JSON for embedding in a `<script>` element: `<`, `>` and `&` plus
/// any non-ASCII character become `\uXXXX` so the payload cannot close the tag.
pub fn ascii_escape_json(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '<' | '>' | '&' => out.push_str(&format!("\\u{:04x}", ch as u32)),
      c if c.is_ascii() => out.push(c),
      c => {
        let mut buf = [0u16; 2];
        for unit in c.encode_utf16(&mut buf) {
          out.push_str(&format!("\\u{unit:04x}"));
        }
      }
    }
  }
  out
}

/// Join non-empty class names with single spaces.
pub fn class_list(classes: &[&str]) -> String {
  classes.iter().copied().filter(|c| !c.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Characters allowed in a CSS value taken from content. Anything that could
/// break out of a declaration is rejected.
pub fn safe_css_value(value: &str) -> Option<&str> {
  let value = value.trim();
  let forbidden = |c: char| matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\\');
  (!value.is_empty() && !value.contains(forbidden)).then_some(value)
}
