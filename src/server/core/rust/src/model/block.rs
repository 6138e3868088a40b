/* src/server/core/rust/src/model/block.rs */

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use super::de::{lenient, null_default};
use super::media::{self, Media};
use super::rich_text::RichTextNode;
use super::work::{WorkCategory, WorkItem};

/// Component tags as emitted by the CMS in `__component`.
pub mod tags {
  pub const HERO: &str = "blocks.hero-block-simple-text";
  pub const TEXT: &str = "blocks.text-block";
  pub const IMAGE: &str = "blocks.image-block";
  pub const TEXT_IMAGE: &str = "blocks.text-image-block";
  pub const CARDS: &str = "blocks.cards-block";
  pub const BUTTONS: &str = "blocks.button-block";
  pub const BACKGROUND: &str = "blocks.background-block";
  pub const WORK: &str = "blocks.work-block";
  pub const CONTACT_FORM: &str = "blocks.contact-form-block";
}

// -- Shared enumerations --

macro_rules! content_enum {
  ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum $name {
      $(#[serde(rename = $wire)] $variant),+
    }

    impl $name {
      pub fn as_str(self) -> &'static str {
        match self {
          $($name::$variant => $wire),+
        }
      }
    }
  };
}

content_enum!(HorizontalAlign { Left => "left", Center => "center", Right => "right" });
content_enum!(TextAlign { Left => "left", Center => "center", Right => "right", Justify => "justify" });
content_enum!(BlockAlign { Left => "left", Center => "center", Right => "right", Full => "full" });
content_enum!(Width { Small => "small", Medium => "medium", Large => "large", Full => "full" });
content_enum!(ImageSize { Small => "small", Medium => "medium", Large => "large" });
content_enum!(HeroHeight { Little => "little", Medium => "medium", Large => "large", Full => "full" });
content_enum!(ImagePosition { Left => "left", Right => "right" });
content_enum!(VerticalAlign { Top => "top", Center => "center", Bottom => "bottom" });
content_enum!(Columns { One => "1", Two => "2", Three => "3", Four => "4" });
content_enum!(ButtonAlign {
  Left => "left",
  Center => "center",
  Right => "right",
  SpaceBetween => "space-between",
});
content_enum!(ButtonLayout { Horizontal => "horizontal", Vertical => "vertical" });
content_enum!(ButtonVariant {
  Primary => "primary",
  Secondary => "secondary",
  Outline => "outline",
  Ghost => "ghost",
});
content_enum!(BackgroundKind { Color => "color", Image => "image", Gradient => "gradient" });
content_enum!(BackgroundPosition {
  CenterCenter => "center center",
  TopCenter => "top center",
  BottomCenter => "bottom center",
  LeftCenter => "left center",
  RightCenter => "right center",
});
content_enum!(BackgroundSize { Cover => "cover", Contain => "contain", Auto => "auto" });
content_enum!(BackgroundRepeat {
  NoRepeat => "no-repeat",
  Repeat => "repeat",
  RepeatX => "repeat-x",
  RepeatY => "repeat-y",
});
content_enum!(BackgroundScope { Section => "section", Global => "global" });
content_enum!(WorkLayout { Grid => "grid", Masonry => "masonry", List => "list" });

// -- Block variants --
//
// Enumerated attributes are optional on the wire; accessors apply the
// defaults declared by the CMS component schemas.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "null_default")]
  pub content: String,
  #[serde(default, deserialize_with = "lenient")]
  pub height: Option<HeroHeight>,
  #[serde(default, deserialize_with = "lenient")]
  pub text_alignment: Option<HorizontalAlign>,
}

impl HeroBlock {
  pub fn height(&self) -> HeroHeight {
    self.height.unwrap_or(HeroHeight::Large)
  }

  pub fn text_alignment(&self) -> HorizontalAlign {
    self.text_alignment.unwrap_or(HorizontalAlign::Center)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
  #[serde(default, deserialize_with = "null_default")]
  pub content: Vec<RichTextNode>,
  #[serde(default, deserialize_with = "lenient")]
  pub block_alignment: Option<BlockAlign>,
  #[serde(default, deserialize_with = "lenient")]
  pub max_width: Option<Width>,
  #[serde(default, deserialize_with = "lenient")]
  pub text_alignment: Option<TextAlign>,
}

impl TextBlock {
  pub fn block_alignment(&self) -> BlockAlign {
    self.block_alignment.unwrap_or(BlockAlign::Full)
  }

  pub fn max_width(&self) -> Width {
    self.max_width.unwrap_or(Width::Full)
  }

  pub fn text_alignment(&self) -> TextAlign {
    self.text_alignment.unwrap_or(TextAlign::Left)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
  #[serde(default, deserialize_with = "media::optional")]
  pub image: Option<Media>,
  #[serde(default)]
  pub caption: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub alignment: Option<BlockAlign>,
  #[serde(default, deserialize_with = "lenient")]
  pub size: Option<Width>,
}

impl ImageBlock {
  pub fn alignment(&self) -> BlockAlign {
    self.alignment.unwrap_or(BlockAlign::Center)
  }

  pub fn size(&self) -> Width {
    self.size.unwrap_or(Width::Medium)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextImageBlock {
  #[serde(default, deserialize_with = "null_default")]
  pub content: Vec<RichTextNode>,
  #[serde(default, deserialize_with = "media::optional")]
  pub image: Option<Media>,
  #[serde(default, deserialize_with = "lenient")]
  pub image_position: Option<ImagePosition>,
  #[serde(default, deserialize_with = "lenient")]
  pub image_size: Option<ImageSize>,
  #[serde(default, deserialize_with = "lenient")]
  pub vertical_alignment: Option<VerticalAlign>,
  #[serde(default, deserialize_with = "lenient")]
  pub text_alignment: Option<TextAlign>,
  #[serde(default)]
  pub rounded_image: Option<bool>,
}

impl TextImageBlock {
  pub fn image_position(&self) -> ImagePosition {
    self.image_position.unwrap_or(ImagePosition::Right)
  }

  pub fn image_size(&self) -> ImageSize {
    self.image_size.unwrap_or(ImageSize::Medium)
  }

  pub fn vertical_alignment(&self) -> VerticalAlign {
    self.vertical_alignment.unwrap_or(VerticalAlign::Center)
  }

  pub fn text_alignment(&self) -> TextAlign {
    self.text_alignment.unwrap_or(TextAlign::Left)
  }

  pub fn rounded_image(&self) -> bool {
    self.rounded_image.unwrap_or(false)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default, deserialize_with = "null_default")]
  pub title: String,
  #[serde(default)]
  pub subtitle: Option<String>,
  #[serde(default, deserialize_with = "null_default")]
  pub content: Vec<RichTextNode>,
  #[serde(default, deserialize_with = "media::optional")]
  pub image: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsBlock {
  #[serde(default, deserialize_with = "null_default")]
  pub cards: Vec<Card>,
  #[serde(default, deserialize_with = "lenient")]
  pub columns: Option<Columns>,
  #[serde(default, deserialize_with = "lenient")]
  pub alignment: Option<HorizontalAlign>,
  #[serde(default)]
  pub overlap: Option<bool>,
}

impl CardsBlock {
  pub fn columns(&self) -> Columns {
    self.columns.unwrap_or(Columns::Three)
  }

  pub fn alignment(&self) -> HorizontalAlign {
    self.alignment.unwrap_or(HorizontalAlign::Center)
  }

  pub fn overlap(&self) -> bool {
    self.overlap.unwrap_or(false)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
  #[serde(default, deserialize_with = "null_default")]
  pub label: String,
  #[serde(default)]
  pub url: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub variant: Option<ButtonVariant>,
  #[serde(default)]
  pub is_external: Option<bool>,
  #[serde(default, deserialize_with = "media::optional")]
  pub file: Option<Media>,
  #[serde(default)]
  pub icon: Option<String>,
}

impl Button {
  pub fn variant(&self) -> ButtonVariant {
    self.variant.unwrap_or(ButtonVariant::Primary)
  }

  pub fn is_external(&self) -> bool {
    self.is_external.unwrap_or(false)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonBlock {
  #[serde(default, deserialize_with = "null_default")]
  pub buttons: Vec<Button>,
  #[serde(default, deserialize_with = "lenient")]
  pub alignment: Option<ButtonAlign>,
  #[serde(default, deserialize_with = "lenient")]
  pub layout: Option<ButtonLayout>,
  #[serde(default)]
  pub equal_width: Option<bool>,
}

impl ButtonBlock {
  pub fn alignment(&self) -> ButtonAlign {
    self.alignment.unwrap_or(ButtonAlign::Center)
  }

  pub fn layout(&self) -> ButtonLayout {
    self.layout.unwrap_or(ButtonLayout::Horizontal)
  }

  pub fn equal_width(&self) -> bool {
    self.equal_width.unwrap_or(false)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundBlock {
  #[serde(default, rename = "type", deserialize_with = "lenient")]
  pub kind: Option<BackgroundKind>,
  #[serde(default)]
  pub color: Option<String>,
  #[serde(default)]
  pub gradient: Option<String>,
  #[serde(default, deserialize_with = "media::optional")]
  pub image: Option<Media>,
  #[serde(default, deserialize_with = "media::optional")]
  pub image_desktop: Option<Media>,
  #[serde(default, deserialize_with = "lenient")]
  pub position: Option<BackgroundPosition>,
  #[serde(default, deserialize_with = "lenient")]
  pub size: Option<BackgroundSize>,
  #[serde(default, deserialize_with = "lenient")]
  pub repeat: Option<BackgroundRepeat>,
  #[serde(default)]
  pub fixed: Option<bool>,
  #[serde(default)]
  pub overlay_color: Option<String>,
  #[serde(default)]
  pub overlay_opacity: Option<f64>,
  #[serde(default, deserialize_with = "lenient")]
  pub scope: Option<BackgroundScope>,
}

impl BackgroundBlock {
  pub fn kind(&self) -> BackgroundKind {
    self.kind.unwrap_or(BackgroundKind::Color)
  }

  pub fn position(&self) -> BackgroundPosition {
    self.position.unwrap_or(BackgroundPosition::CenterCenter)
  }

  pub fn size(&self) -> BackgroundSize {
    self.size.unwrap_or(BackgroundSize::Cover)
  }

  pub fn repeat(&self) -> BackgroundRepeat {
    self.repeat.unwrap_or(BackgroundRepeat::NoRepeat)
  }

  pub fn fixed(&self) -> bool {
    self.fixed.unwrap_or(false)
  }

  pub fn overlay_opacity(&self) -> f64 {
    self.overlay_opacity.unwrap_or(0.0)
  }

  pub fn scope(&self) -> BackgroundScope {
    self.scope.unwrap_or(BackgroundScope::Section)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkBlock {
  #[serde(default, deserialize_with = "null_default")]
  pub filter_by_categories: Vec<WorkCategory>,
  #[serde(default)]
  pub show_all_categories: Option<bool>,
  #[serde(default)]
  pub show_featured_only: Option<bool>,
  #[serde(default)]
  pub limit: Option<u32>,
  #[serde(default, deserialize_with = "lenient")]
  pub columns: Option<Columns>,
  #[serde(default)]
  pub show_filters: Option<bool>,
  #[serde(default, deserialize_with = "lenient")]
  pub layout: Option<WorkLayout>,
  /// Items attached by the page handler before rendering.
  #[serde(default, deserialize_with = "null_default")]
  pub work_items: Vec<WorkItem>,
}

impl WorkBlock {
  pub fn show_all_categories(&self) -> bool {
    self.show_all_categories.unwrap_or(true)
  }

  pub fn show_featured_only(&self) -> bool {
    self.show_featured_only.unwrap_or(false)
  }

  pub fn limit(&self) -> u32 {
    self.limit.unwrap_or(12)
  }

  pub fn columns(&self) -> Columns {
    self.columns.unwrap_or(Columns::Three)
  }

  pub fn show_filters(&self) -> bool {
    self.show_filters.unwrap_or(true)
  }

  pub fn layout(&self) -> WorkLayout {
    self.layout.unwrap_or(WorkLayout::Grid)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyPolicy {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default, deserialize_with = "null_default")]
  pub content: Vec<RichTextNode>,
  #[serde(default)]
  pub close_button_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormBlock {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub submit_button_text: Option<String>,
  #[serde(default)]
  pub name_placeholder: Option<String>,
  #[serde(default)]
  pub email_placeholder: Option<String>,
  #[serde(default)]
  pub message_placeholder: Option<String>,
  #[serde(default)]
  pub name_label: Option<String>,
  #[serde(default)]
  pub email_label: Option<String>,
  #[serde(default)]
  pub message_label: Option<String>,
  #[serde(default)]
  pub consent_text: Option<String>,
  #[serde(default)]
  pub policy_link_text: Option<String>,
  #[serde(default)]
  pub success_message: Option<String>,
  #[serde(default)]
  pub error_message: Option<String>,
  #[serde(default)]
  pub submitting_text: Option<String>,
  #[serde(default)]
  pub rgpd_info_text: Option<String>,
  #[serde(default)]
  pub consent_required_text: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub block_alignment: Option<BlockAlign>,
  #[serde(default, deserialize_with = "lenient")]
  pub max_width: Option<Width>,
  #[serde(default)]
  pub privacy_policy: Option<PrivacyPolicy>,
}

macro_rules! text_with_default {
  ($($field:ident => $default:expr),+ $(,)?) => {
    impl ContactFormBlock {
      $(
        pub fn $field(&self) -> &str {
          self.$field.as_deref().unwrap_or($default)
        }
      )+
    }
  };
}

text_with_default! {
  title => "Contactez-nous",
  submit_button_text => "Envoyer",
  name_placeholder => "Votre nom",
  email_placeholder => "votre@email.com",
  message_placeholder => "Votre message...",
  name_label => "Votre nom",
  email_label => "Votre email",
  message_label => "Votre message",
  consent_text => "J'accepte que mes données personnelles soient traitées conformément à la",
  policy_link_text => "politique de confidentialité",
  success_message => "\u{2713} Votre message a été envoyé avec succès !",
  error_message => "\u{2717} Une erreur est survenue. Veuillez réessayer.",
  submitting_text => "Envoi en cours...",
}

impl ContactFormBlock {
  pub fn block_alignment(&self) -> BlockAlign {
    self.block_alignment.unwrap_or(BlockAlign::Center)
  }

  pub fn max_width(&self) -> Width {
    self.max_width.unwrap_or(Width::Medium)
  }
}

// -- Block union --

/// A typed unit of page content, keyed by the CMS component tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
  Hero(HeroBlock),
  Text(TextBlock),
  Image(ImageBlock),
  TextImage(TextImageBlock),
  Cards(CardsBlock),
  Buttons(ButtonBlock),
  Background(BackgroundBlock),
  Work(WorkBlock),
  ContactForm(ContactFormBlock),
  /// Unrecognized tag, or a known tag whose attributes failed to decode.
  Unknown { component: String },
}

fn decode<T: DeserializeOwned>(component: &str, value: serde_json::Value) -> Option<T> {
  serde_json::from_value(value)
    .inspect_err(|error| warn!(component, %error, "dropping malformed block"))
    .ok()
}

impl Block {
  /// Decode a raw CMS component object. Never fails: anything that cannot be
  /// decoded becomes `Block::Unknown`.
  pub fn from_value(value: serde_json::Value) -> Self {
    let component =
      value.get("__component").and_then(serde_json::Value::as_str).unwrap_or_default().to_string();

    let decoded = match component.as_str() {
      tags::HERO => decode(&component, value).map(Block::Hero),
      tags::TEXT => decode(&component, value).map(Block::Text),
      tags::IMAGE => decode(&component, value).map(Block::Image),
      tags::TEXT_IMAGE => decode(&component, value).map(Block::TextImage),
      tags::CARDS => decode(&component, value).map(Block::Cards),
      tags::BUTTONS => decode(&component, value).map(Block::Buttons),
      tags::BACKGROUND => decode(&component, value).map(Block::Background),
      tags::WORK => decode(&component, value).map(Block::Work),
      tags::CONTACT_FORM => decode(&component, value).map(Block::ContactForm),
      _ => None,
    };

    decoded.unwrap_or(Block::Unknown { component })
  }

  /// The CMS component tag this block was decoded from.
  pub fn component(&self) -> &str {
    match self {
      Block::Hero(_) => tags::HERO,
      Block::Text(_) => tags::TEXT,
      Block::Image(_) => tags::IMAGE,
      Block::TextImage(_) => tags::TEXT_IMAGE,
      Block::Cards(_) => tags::CARDS,
      Block::Buttons(_) => tags::BUTTONS,
      Block::Background(_) => tags::BACKGROUND,
      Block::Work(_) => tags::WORK,
      Block::ContactForm(_) => tags::CONTACT_FORM,
      Block::Unknown { component } => component,
    }
  }

  /// First image a visitor sees for this block, used for preload hints.
  pub fn lead_image(&self) -> Option<&Media> {
    match self {
      Block::Image(b) => b.image.as_ref(),
      Block::TextImage(b) => b.image.as_ref(),
      Block::Background(b) => b.image.as_ref(),
      Block::Work(b) => b.work_items.first().and_then(|w| w.image.as_ref()),
      _ => None,
    }
  }
}

impl<'de> Deserialize<'de> for Block {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Block::from_value(value))
  }
}

impl Serialize for Block {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::Error;

    let value = match self {
      Block::Hero(b) => serde_json::to_value(b),
      Block::Text(b) => serde_json::to_value(b),
      Block::Image(b) => serde_json::to_value(b),
      Block::TextImage(b) => serde_json::to_value(b),
      Block::Cards(b) => serde_json::to_value(b),
      Block::Buttons(b) => serde_json::to_value(b),
      Block::Background(b) => serde_json::to_value(b),
      Block::Work(b) => serde_json::to_value(b),
      Block::ContactForm(b) => serde_json::to_value(b),
      Block::Unknown { .. } => Ok(serde_json::Value::Object(Default::default())),
    };
    let mut value = value.map_err(S::Error::custom)?;
    if let serde_json::Value::Object(ref mut map) = value {
      map.insert("__component".into(), serde_json::Value::String(self.component().to_string()));
    }
    value.serialize(serializer)
  }
}
