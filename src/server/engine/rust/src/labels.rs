/* src/server/engine/rust/src/labels.rs */

/// Interface strings rendered by the server itself (content strings come
/// from the CMS). French unless the locale is English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
  pub all_categories: &'static str,
  pub no_work_items: &'static str,
  pub no_work_in_category: &'static str,
  pub more: &'static str,
  pub not_found_message: &'static str,
  pub back_home: &'static str,
  pub languages: &'static str,
  pub required: &'static str,
}

const FR: Labels = Labels {
  all_categories: "Tous",
  no_work_items: "Aucun élément de travail disponible.",
  no_work_in_category: "Aucun élément trouvé pour cette catégorie.",
  more: "En savoir plus",
  not_found_message: "Cette page n'existe pas.",
  back_home: "Retour à l'accueil",
  languages: "Langues",
  required: "obligatoire",
};

const EN: Labels = Labels {
  all_categories: "All",
  no_work_items: "No work items available.",
  no_work_in_category: "No items found for this category.",
  more: "Learn more",
  not_found_message: "This page doesn't exist.",
  back_home: "Back to home",
  languages: "Languages",
  required: "required",
};

impl Labels {
  pub fn for_locale(locale: &str) -> &'static Labels {
    if locale == "en" || locale.starts_with("en-") { &EN } else { &FR }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn english_and_french_fallback() {
    assert_eq!(Labels::for_locale("en").back_home, "Back to home");
    assert_eq!(Labels::for_locale("en-GB").all_categories, "All");
    assert_eq!(Labels::for_locale("fr").back_home, "Retour à l'accueil");
    assert_eq!(Labels::for_locale("de").all_categories, "Tous");
  }
}
