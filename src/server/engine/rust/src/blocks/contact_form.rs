/* src/server/engine/rust/src/blocks/contact_form.rs */

use vitrine_server::model::{Block, ContactFormBlock};

use super::RenderContext;
use crate::escape::{class_list, escape_html};
use crate::labels::Labels;
use crate::rich_text::render_rich_text;

/// Marker attribute the document uses to decide whether to ship the
/// submission script.
pub const CONTACT_FORM_MARKER: &str = "data-vt-contact";

fn field(id: &str, label: &str, control: &str, labels: &Labels) -> String {
  format!(
    "<div class=\"vt-field\"><label for=\"{id}\">{} <abbr title=\"{}\">*</abbr></label>{control}</div>",
    escape_html(label),
    labels.required,
  )
}

fn privacy_dialog(form: &ContactFormBlock, id: &str) -> String {
  let Some(policy) = &form.privacy_policy else { return String::new() };
  let title = policy.title.as_deref().unwrap_or(form.policy_link_text());
  let close = policy.close_button_text.as_deref().unwrap_or("Fermer");
  format!(
    "<dialog id=\"{id}-policy\" class=\"vt-dialog\"><h2>{}</h2><div class=\"vt-dialog__content\">{}</div><form method=\"dialog\"><button class=\"vt-button vt-button--secondary\">{}</button></form></dialog>",
    escape_html(title),
    render_rich_text(&policy.content),
    escape_html(close)
  )
}

pub(super) fn render(block: &Block, ctx: &RenderContext<'_>) -> Option<String> {
  let Block::ContactForm(form) = block else { return None };
  let labels = Labels::for_locale(ctx.locale);
  let id = "vt-contact";

  let description = form
    .description
    .as_deref()
    .filter(|d| !d.trim().is_empty())
    .map(|d| format!("<p class=\"vt-contact__description\">{}</p>", escape_html(d)))
    .unwrap_or_default();

  let name = field(
    &format!("{id}-name"),
    form.name_label(),
    &format!(
      "<input id=\"{id}-name\" name=\"name\" type=\"text\" required maxlength=\"200\" autocomplete=\"name\" placeholder=\"{}\">",
      escape_html(form.name_placeholder())
    ),
    labels,
  );
  let email = field(
    &format!("{id}-email"),
    form.email_label(),
    &format!(
      "<input id=\"{id}-email\" name=\"email\" type=\"email\" required maxlength=\"320\" autocomplete=\"email\" placeholder=\"{}\">",
      escape_html(form.email_placeholder())
    ),
    labels,
  );
  let message = field(
    &format!("{id}-message"),
    form.message_label(),
    &format!(
      "<textarea id=\"{id}-message\" name=\"message\" rows=\"6\" required maxlength=\"5000\" placeholder=\"{}\"></textarea>",
      escape_html(form.message_placeholder())
    ),
    labels,
  );

  // Hidden from people, visible to naive bots.
  let honeypot = "<div class=\"vt-visually-hidden\" aria-hidden=\"true\"><label for=\"vt-contact-website\">Website</label><input id=\"vt-contact-website\" name=\"website\" type=\"text\" tabindex=\"-1\" autocomplete=\"off\"></div>";

  let policy_link = if form.privacy_policy.is_some() {
    format!(
      "<button type=\"button\" class=\"vt-link\" data-vt-dialog=\"{id}-policy\">{}</button>",
      escape_html(form.policy_link_text())
    )
  } else {
    escape_html(form.policy_link_text())
  };
  let consent = format!(
    "<div class=\"vt-field vt-field--consent\"><input id=\"{id}-consent\" name=\"consent\" type=\"checkbox\" value=\"true\" required><label for=\"{id}-consent\">{} {policy_link}</label></div>",
    escape_html(form.consent_text())
  );
  let rgpd = form
    .rgpd_info_text
    .as_deref()
    .filter(|t| !t.trim().is_empty())
    .map(|t| format!("<p class=\"vt-contact__rgpd\">{}</p>", escape_html(t)))
    .unwrap_or_default();

  let class = class_list(&[
    "vt-contact",
    &format!("vt-block-align-{}", form.block_alignment().as_str()),
    &format!("vt-width-{}", form.max_width().as_str()),
  ]);
  Some(format!(
    "<div class=\"{class}\"><h2 class=\"vt-contact__title\">{title}</h2>{description}\
<form id=\"{id}\" class=\"vt-contact__form\" method=\"post\" action=\"/api/contact\" {CONTACT_FORM_MARKER} \
data-success=\"{success}\" data-error=\"{error}\" data-submitting=\"{submitting}\" data-consent-required=\"{consent_required}\">\
<input type=\"hidden\" name=\"locale\" value=\"{locale}\">{name}{email}{message}{honeypot}{consent}{rgpd}\
<button type=\"submit\" class=\"vt-button vt-button--primary\">{submit}</button>\
<p class=\"vt-contact__status\" role=\"status\" aria-live=\"polite\"></p></form>{dialog}</div>",
    title = escape_html(form.title()),
    success = escape_html(form.success_message()),
    error = escape_html(form.error_message()),
    submitting = escape_html(form.submitting_text()),
    consent_required = escape_html(
      form.consent_required_text.as_deref().unwrap_or("Vous devez accepter la politique de confidentialité.")
    ),
    locale = escape_html(ctx.locale),
    submit = escape_html(form.submit_button_text()),
    dialog = privacy_dialog(form, id),
  ))
}
