/* src/cli/core/src/config/tests/mod.rs */

use std::collections::HashMap;

use super::loader::{CONFIG_FILE, find_vitrine_config, load_vitrine_config, parse_config};

mod loader;

fn no_env(_: &str) -> Option<String> {
  None
}

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
  let map: HashMap<String, String> =
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
  move |key| map.get(key).cloned()
}
