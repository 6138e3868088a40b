/* src/server/core/rust/src/locale/negotiate.rs */

// Request-level locale negotiation: each strategy inspects one signal and
// yields a supported locale or passes.

pub const LOCALE_COOKIE: &str = "locale";

/// Request signals available to strategies.
#[derive(Debug, Clone, Copy)]
pub struct ResolveData<'a> {
  /// Path and query of the request.
  pub url: &'a str,
  /// Locale already extracted from the route, if any.
  pub path_locale: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub locales: &'a [String],
  pub default_locale: &'a str,
}

impl ResolveData<'_> {
  fn supported(&self, candidate: &str) -> Option<String> {
    self.locales.iter().find(|l| l.as_str() == candidate).cloned()
  }
}

pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData<'_>) -> Option<String>;
}

struct UrlPrefix;

impl ResolveStrategy for UrlPrefix {
  fn kind(&self) -> &'static str {
    "url_prefix"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    if let Some(locale) = data.path_locale {
      return data.supported(locale);
    }
    let path = data.url.split(['?', '#']).next().unwrap_or_default();
    let first = path.trim_start_matches('/').split('/').next()?;
    data.supported(first)
  }
}

struct Cookie {
  name: String,
}

impl ResolveStrategy for Cookie {
  fn kind(&self) -> &'static str {
    "cookie"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    let value = read_cookie(data.cookie_header?, &self.name)?;
    data.supported(value)
  }
}

struct AcceptLanguage;

impl ResolveStrategy for AcceptLanguage {
  fn kind(&self) -> &'static str {
    "accept_language"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    let header = data.accept_language?;
    let mut entries: Vec<(&str, f32)> = header
      .split(',')
      .filter_map(|part| {
        let mut pieces = part.trim().split(';');
        let tag = pieces.next()?.trim();
        if tag.is_empty() {
          return None;
        }
        let q = pieces
          .find_map(|p| p.trim().strip_prefix("q="))
          .and_then(|q| q.trim().parse::<f32>().ok())
          .unwrap_or(1.0);
        Some((tag, q))
      })
      .filter(|(_, q)| *q > 0.0)
      .collect();
    // Stable sort keeps header order among equal weights.
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    entries.into_iter().find_map(|(tag, _)| {
      let exact = data.locales.iter().find(|l| l.eq_ignore_ascii_case(tag));
      let prefix = || {
        let primary = tag.split('-').next().unwrap_or(tag);
        data.locales.iter().find(|l| l.eq_ignore_ascii_case(primary))
      };
      exact.or_else(prefix).cloned()
    })
  }
}

/// Locale from the first path segment.
pub fn from_url_prefix() -> Box<dyn ResolveStrategy> {
  Box::new(UrlPrefix)
}

/// Locale from a named cookie.
pub fn from_cookie(name: &str) -> Box<dyn ResolveStrategy> {
  Box::new(Cookie { name: name.to_string() })
}

/// Locale from `Accept-Language`, honouring q-values. `en-US` matches `en`.
pub fn from_accept_language() -> Box<dyn ResolveStrategy> {
  Box::new(AcceptLanguage)
}

/// URL prefix, then the `locale` cookie, then `Accept-Language`.
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_prefix(), from_cookie(LOCALE_COOKIE), from_accept_language()]
}

/// First locale any strategy yields, else the default.
pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData<'_>) -> String {
  strategies
    .iter()
    .find_map(|s| s.resolve(data))
    .unwrap_or_else(|| data.default_locale.to_string())
}

/// Value of cookie `name` in a `Cookie` header.
pub fn read_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
  header.split(';').find_map(|pair| {
    let (key, value) = pair.trim().split_once('=')?;
    (key.trim() == name).then(|| value.trim())
  })
}
