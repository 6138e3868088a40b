/* src/cli/core/src/config/tests/loader.rs */

use super::*;

#[test]
fn parse_full_config() {
  let config = parse_config(
    r#"
[site]
name = "Atelier"
url = "https://atelier.example"

[server]
port = 8080
revalidate_secs = 120

[cms]
url = "https://cms.atelier.example"
public_url = "https://media.atelier.example"
timeout_secs = 5

[i18n]
locales = ["fr", "en", "de"]
default = "fr"

[draft]
secret = "s3cret"

[placeholder]
title = "Coming soon"
"#,
    no_env,
  )
  .unwrap();

  assert_eq!(config.site.name, "Atelier");
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.server.revalidate_secs, 120);
  assert_eq!(config.cms.media_base(), "https://media.atelier.example");
  assert_eq!(config.cms.timeout_secs, 5);
  assert_eq!(config.i18n.locales, vec!["fr", "en", "de"]);
  assert_eq!(config.draft.secret.as_deref(), Some("s3cret"));
  assert_eq!(config.placeholder.title, "Coming soon");
  assert_eq!(config.placeholder.seo_title, "Accueil");
}

#[test]
fn empty_file_uses_defaults() {
  let config = parse_config("", no_env).unwrap();
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.cms.url, "http://localhost:1337");
  assert_eq!(config.i18n.default, "fr");
  assert!(config.draft.secret.is_none());
}

#[test]
fn env_overrides_file_values() {
  let env = env_of(&[
    ("VITRINE_CMS_URL", "https://cms.prod.example"),
    ("VITRINE_CMS_TOKEN", "tok"),
    ("VITRINE_DRAFT_SECRET", "from-env"),
    ("PORT", "9000"),
  ]);
  let config = parse_config("[draft]\nsecret = \"from-file\"\n", env).unwrap();
  assert_eq!(config.cms.url, "https://cms.prod.example");
  assert_eq!(config.cms.api_token.as_deref(), Some("tok"));
  assert_eq!(config.draft.secret.as_deref(), Some("from-env"));
  assert_eq!(config.server.port, 9000);
}

#[test]
fn rejects_default_locale_outside_list() {
  let err = parse_config("[i18n]\nlocales = [\"en\"]\ndefault = \"fr\"\n", no_env).unwrap_err();
  assert!(format!("{err:#}").contains("i18n.default"), "{err:#}");
}

#[test]
fn rejects_malformed_toml() {
  let err = parse_config("[server\nport = 1", no_env).unwrap_err();
  assert!(format!("{err:#}").contains("invalid config"), "{err:#}");
}

#[test]
fn tokens_are_redacted_in_debug() {
  let config = parse_config("[cms]\napi_token = \"very-secret\"\n", no_env).unwrap();
  assert!(!format!("{config:?}").contains("very-secret"));
}

#[test]
fn finds_config_in_parent_directory() {
  let tmp = tempfile::tempdir().unwrap();
  let nested = tmp.path().join("site/pages/deep");
  std::fs::create_dir_all(&nested).unwrap();
  std::fs::write(tmp.path().join("site").join(CONFIG_FILE), "[site]\nname = \"Nested\"\n").unwrap();

  let found = find_vitrine_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join("site").join(CONFIG_FILE));
  let config = load_vitrine_config(&found).unwrap();
  assert_eq!(config.site.name, "Nested");
}

#[test]
fn missing_config_is_an_error() {
  let tmp = tempfile::tempdir().unwrap();
  // Guard against a vitrine.toml somewhere above the temp dir.
  if tmp.path().ancestors().skip(1).any(|dir| dir.join(CONFIG_FILE).is_file()) {
    return;
  }
  let err = find_vitrine_config(tmp.path()).unwrap_err();
  assert!(err.to_string().contains("not found"));
}
