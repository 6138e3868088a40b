/* src/server/engine/rust/src/blocks/background.rs */

use vitrine_server::model::{BackgroundBlock, BackgroundKind, BackgroundScope, Block};

use super::RenderContext;
use crate::escape::{escape_html, safe_css_value};

/// `#rgb` / `#rrggbb` to `rgba(r, g, b, opacity)`. Anything else is returned
/// unchanged, so named colors and `rgb()` values still work.
pub fn hex_to_rgba(color: &str, opacity: f64) -> String {
  let Some(hex) = color.strip_prefix('#') else { return color.to_string() };
  let expanded: String = match hex.len() {
    3 => hex.chars().flat_map(|c| [c, c]).collect(),
    6 => hex.to_string(),
    _ => return color.to_string(),
  };
  let Ok(value) = u32::from_str_radix(&expanded, 16) else { return color.to_string() };
  let (r, g, b) = ((value >> 16) & 255, (value >> 8) & 255, value & 255);
  format!("rgba({r}, {g}, {b}, {opacity})")
}

/// CSS declarations painting the background, overlay included.
fn declarations(bg: &BackgroundBlock, image: Option<&str>) -> Vec<String> {
  let mut decls = Vec::new();
  let mut layers: Vec<String> = Vec::new();

  let overlay = bg
    .overlay_color
    .as_deref()
    .and_then(safe_css_value)
    .filter(|_| bg.overlay_opacity() > 0.0)
    .map(|c| hex_to_rgba(c, bg.overlay_opacity()));
  if let Some(overlay) = &overlay {
    layers.push(format!("linear-gradient({overlay}, {overlay})"));
  }

  match bg.kind() {
    BackgroundKind::Color => {
      if let Some(color) = bg.color.as_deref().and_then(safe_css_value) {
        decls.push(format!("background-color:{color}"));
      }
    }
    BackgroundKind::Gradient => {
      if let Some(gradient) = bg.gradient.as_deref().and_then(safe_css_value) {
        layers.push(gradient.to_string());
      }
    }
    BackgroundKind::Image => {
      if let Some(src) = image {
        layers.push(format!("url('{}')", src.replace('\'', "%27")));
        decls.push(format!("background-position:{}", bg.position().as_str()));
        decls.push(format!("background-size:{}", bg.size().as_str()));
        decls.push(format!("background-repeat:{}", bg.repeat().as_str()));
        decls.push(format!(
          "background-attachment:{}",
          if bg.fixed() { "fixed" } else { "scroll" }
        ));
      }
    }
  }

  // An overlay alone only makes sense on top of a color.
  let has_base = layers.len() > usize::from(overlay.is_some());
  if has_base || (overlay.is_some() && bg.kind() == BackgroundKind::Color) {
    decls.push(format!("background-image:{}", layers.join(", ")));
  }
  decls
}

pub(super) fn render(block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
  let Block::Background(bg) = block else { return None };

  let mobile = bg.image.as_ref().and_then(|m| ctx.media_url(m));
  let desktop = bg.image_desktop.as_ref().and_then(|m| ctx.media_url(m));

  if bg.scope() == BackgroundScope::Global {
    let mut css = format!("body{{{}}}", declarations(bg, mobile.as_deref()).join(";"));
    if let Some(desktop) = desktop.as_deref().filter(|_| bg.kind() == BackgroundKind::Image) {
      css.push_str(&format!(
        "@media (min-width: 768px){{body{{{}}}}}",
        declarations(bg, Some(desktop)).join(";")
      ));
    }
    return Some(format!("<style data-vt-background>{css}</style>"));
  }

  let position = if bg.fixed() { "vt-bg--fixed" } else { "vt-bg--absolute" };
  let layer = |src: Option<&str>, extra: &str| {
    let style = escape_html(&declarations(bg, src).join(";"));
    format!("<div class=\"vt-bg {position}{extra}\" aria-hidden=\"true\" style=\"{style}\"></div>")
  };

  // Desktop artwork, when provided, is swapped in with CSS.
  match desktop.as_deref().filter(|_| bg.kind() == BackgroundKind::Image) {
    Some(desktop) => Some(format!(
      "{}{}",
      layer(mobile.as_deref(), " vt-only-mobile"),
      layer(Some(desktop), " vt-only-desktop")
    )),
    None => Some(layer(mobile.as_deref(), "")),
  }
}
