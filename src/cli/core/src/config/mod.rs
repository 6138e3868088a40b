/* src/cli/core/src/config/mod.rs */

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{find_vitrine_config, load_vitrine_config};
