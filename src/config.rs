use std::path::PathBuf;

use home::home_dir;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use toml;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub catalog: Catalog,
}

#[serde_inline_default]
#[derive(Deserialize, Debug)]
pub struct Catalog {
    /// The catalog credential is injected here rather than baked into the
    /// binary; there is no default.
    pub api_key: String,
    #[serde_inline_default("https://api.rawg.io/api".to_string())]
    pub base_url: String,
    #[serde_inline_default(12)]
    pub page_size: u32,
    #[serde_inline_default("-rating".to_string())]
    pub ordering: String,
}

pub fn read(path: Option<&PathBuf>) -> Config {
    let f = path.cloned().unwrap_or_else(|| {
        let mut f = home_dir().expect("Failed to load config: could not determine home dir");
        f.push(".stackplay/config.toml");
        f
    });

    let raw = std::fs::read_to_string(&f).expect("Failed to read config file");
    toml::from_str(&raw).expect("Failed to parse config file")
}
