/* src/server/engine/rust/src/document.rs */

use serde_json::json;
use vitrine_server::seo::Metadata;

use crate::blocks::CONTACT_FORM_MARKER;
use crate::escape::{ascii_escape_json, escape_html};

const BASE_CSS: &str = concat!(
  "<style>",
  "*,*::before,*::after{box-sizing:border-box}",
  "body{margin:0;font-family:system-ui,sans-serif;line-height:1.6;color:#111827}",
  "img{max-width:100%;height:auto}",
  ".vt-container{max-width:72rem;margin:0 auto;padding:0 1rem}",
  ".vt-header,.vt-footer{display:flex;justify-content:space-between;align-items:center;padding:1rem}",
  ".vt-locales{display:flex;gap:.5rem;list-style:none;margin:0;padding:0}",
  ".vt-section{position:relative}",
  ".vt-pt-none{padding-top:0}.vt-pt-small{padding-top:1rem}.vt-pt-medium{padding-top:2.5rem}.vt-pt-large{padding-top:5rem}",
  ".vt-pb-none{padding-bottom:0}.vt-pb-small{padding-bottom:1rem}.vt-pb-medium{padding-bottom:2.5rem}.vt-pb-large{padding-bottom:5rem}",
  ".vt-hero{display:flex;align-items:center}",
  ".vt-hero--little{min-height:30vh}.vt-hero--medium{min-height:50vh}.vt-hero--large{min-height:75vh}.vt-hero--full{min-height:100vh}",
  ".vt-align-left{text-align:left}.vt-align-center{text-align:center}.vt-align-right{text-align:right}",
  ".vt-cards,.vt-work__grid{display:grid;gap:1.5rem}",
  ".vt-cols-1{grid-template-columns:1fr}.vt-cols-2{grid-template-columns:repeat(2,1fr)}",
  ".vt-cols-3{grid-template-columns:repeat(3,1fr)}.vt-cols-4{grid-template-columns:repeat(4,1fr)}",
  ".vt-cards--overlap{display:flex}",
  ".vt-buttons{display:flex;gap:1rem;flex-wrap:wrap}.vt-buttons--vertical{flex-direction:column}",
  ".vt-bg{inset:0;z-index:-1}.vt-bg--absolute{position:absolute}.vt-bg--fixed{position:fixed}",
  ".vt-only-desktop{display:none}",
  "@media (min-width:768px){.vt-only-mobile{display:none}.vt-only-desktop{display:block}}",
  "@media (max-width:767px){.vt-cols-2,.vt-cols-3,.vt-cols-4{grid-template-columns:1fr}}",
  ".vt-visually-hidden{position:absolute;left:-10000px;width:1px;height:1px;overflow:hidden}",
  "</style>"
);

const CONTACT_SCRIPT: &str = concat!(
  r#"<script>document.querySelectorAll("form[data-vt-contact]").forEach(function(f){"#,
  r#"var s=f.querySelector(".vt-contact__status"),b=f.querySelector("button[type=submit]");"#,
  r#"f.addEventListener("submit",function(e){e.preventDefault();"#,
  r#"var d=Object.fromEntries(new FormData(f));d.consent=!!f.consent.checked;"#,
  r#"if(!d.consent){s.textContent=f.dataset.consentRequired;return}"#,
  r#"var l=b.textContent;b.disabled=true;b.textContent=f.dataset.submitting;"#,
  r#"fetch(f.action,{method:"POST",headers:{"content-type":"application/json"},body:JSON.stringify(d)})"#,
  r#".then(function(r){return r.json()}).then(function(r){"#,
  r#"if(r.ok){f.reset();s.textContent=f.dataset.success}else{s.textContent=f.dataset.error}})"#,
  r#".catch(function(){s.textContent=f.dataset.error})"#,
  r#".finally(function(){b.disabled=false;b.textContent=l})})});"#,
  r#"document.querySelectorAll("[data-vt-dialog]").forEach(function(b){b.addEventListener("click",function(){"#,
  r#"var d=document.getElementById(b.dataset.vtDialog);if(d)d.showModal()})})</script>"#
);

/// `WebPage` structured data for the head.
pub fn json_ld(meta: &Metadata, lang: &str, site_name: &str) -> String {
  let mut value = json!({
    "@context": "https://schema.org",
    "@type": "WebPage",
    "name": meta.title,
    "url": meta.canonical,
    "inLanguage": lang,
    "isPartOf": { "@type": "WebSite", "name": site_name },
  });
  if let Some(description) = &meta.description {
    value["description"] = json!(description);
  }
  if let Some(image) = &meta.og_image {
    value["image"] = json!(image);
  }
  ascii_escape_json(&value.to_string())
}

fn head(meta: &Metadata, lang: &str, site_name: &str) -> String {
  let mut head = String::from("<meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
  head.push_str(&format!("<title>{}</title>", escape_html(&meta.title)));
  if let Some(description) = &meta.description {
    head.push_str(&format!("<meta name=\"description\" content=\"{}\">", escape_html(description)));
  }
  if let Some(robots) = meta.robots {
    head.push_str(&format!("<meta name=\"robots\" content=\"{robots}\">"));
  }
  if !meta.canonical.is_empty() {
    head.push_str(&format!("<link rel=\"canonical\" href=\"{}\">", escape_html(&meta.canonical)));
  }
  for alt in &meta.alternates {
    head.push_str(&format!(
      "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
      escape_html(&alt.hreflang),
      escape_html(&alt.href)
    ));
  }

  head.push_str(&format!("<meta property=\"og:title\" content=\"{}\">", escape_html(&meta.title)));
  head.push_str(&format!("<meta property=\"og:site_name\" content=\"{}\">", escape_html(site_name)));
  head.push_str(&format!("<meta property=\"og:locale\" content=\"{}\">", escape_html(lang)));
  if let Some(description) = &meta.description {
    head.push_str(&format!("<meta property=\"og:description\" content=\"{}\">", escape_html(description)));
  }
  if let Some(image) = &meta.og_image {
    head.push_str(&format!("<meta property=\"og:image\" content=\"{}\">", escape_html(image)));
  }

  for url in &meta.preload {
    head.push_str(&format!(
      "<link rel=\"preload\" as=\"image\" href=\"{}\" fetchpriority=\"high\">",
      escape_html(url)
    ));
  }
  if !meta.canonical.is_empty() {
    head.push_str(&format!(
      "<script type=\"application/ld+json\">{}</script>",
      json_ld(meta, lang, site_name)
    ));
  }
  head.push_str(BASE_CSS);
  head
}

/// Wrap a rendered page body in a complete HTML5 document.
/// The contact script is only shipped when the body contains a contact form.
pub fn render_document(meta: &Metadata, lang: &str, site_name: &str, body: &str) -> String {
  let mut doc = format!("<!DOCTYPE html><html lang=\"{}\"><head>", escape_html(lang));
  doc.push_str(&head(meta, lang, site_name));
  doc.push_str("</head><body>");
  doc.push_str(body);
  if body.contains(CONTACT_FORM_MARKER) {
    doc.push_str(CONTACT_SCRIPT);
  }
  doc.push_str("</body></html>");
  doc
}

#[cfg(test)]
mod tests {
  use vitrine_server::seo::Alternate;

  use super::*;

  fn meta() -> Metadata {
    Metadata {
      title: "Studio | Accueil".into(),
      description: Some("Agence <web>".into()),
      robots: None,
      canonical: "https://studio.test/fr".into(),
      alternates: vec![
        Alternate { hreflang: "fr".into(), href: "https://studio.test/fr".into() },
        Alternate { hreflang: "x-default".into(), href: "https://studio.test/fr".into() },
      ],
      og_image: Some("https://cms.test/og.png".into()),
      preload: vec!["https://cms.test/hero.jpg".into()],
    }
  }

  #[test]
  fn head_carries_seo_tags() {
    let doc = render_document(&meta(), "fr", "Studio", "<main></main>");
    assert!(doc.starts_with("<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\">"));
    assert!(doc.contains("<title>Studio | Accueil</title>"));
    assert!(doc.contains("<meta name=\"description\" content=\"Agence &lt;web&gt;\">"));
    assert!(doc.contains("<link rel=\"canonical\" href=\"https://studio.test/fr\">"));
    assert!(doc.contains("<link rel=\"alternate\" hreflang=\"x-default\" href=\"https://studio.test/fr\">"));
    assert!(doc.contains("<meta property=\"og:image\" content=\"https://cms.test/og.png\">"));
    assert!(doc.contains("<link rel=\"preload\" as=\"image\" href=\"https://cms.test/hero.jpg\" fetchpriority=\"high\">"));
    assert!(!doc.contains("name=\"robots\""));
    assert!(doc.ends_with("<main></main></body></html>"));
  }

  #[test]
  fn robots_when_no_index() {
    let mut m = meta();
    m.robots = Some("noindex,nofollow");
    let doc = render_document(&m, "fr", "Studio", "");
    assert!(doc.contains("<meta name=\"robots\" content=\"noindex,nofollow\">"));
  }

  #[test]
  fn json_ld_is_script_safe() {
    let mut m = meta();
    m.title = "</script><script>alert(1)".into();
    let ld = json_ld(&m, "fr", "Studio");
    assert!(!ld.contains("</script>"));
    assert!(ld.contains("\"@type\":\"WebPage\""));
    assert!(ld.contains("\\u003c/script\\u003e"));
  }

  #[test]
  fn contact_script_only_with_form() {
    let plain = render_document(&meta(), "fr", "Studio", "<p>Hi</p>");
    assert!(!plain.contains("data-vt-contact]"));
    let with_form = render_document(&meta(), "fr", "Studio", "<form data-vt-contact></form>");
    assert!(with_form.contains("form[data-vt-contact]"));
  }
}
