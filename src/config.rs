use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Docs root: http(s) URL or local directory
    #[serde(default = "default_docs_root")]
    pub docs_root: String,

    /// Index file name relative to the docs root
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Search input debounce in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub vim_mode: bool,
}

fn default_docs_root() -> String {
    ".".to_string()
}

fn default_index_file() -> String {
    "docs_index.json".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            index_file: default_index_file(),
            debounce_ms: default_debounce_ms(),
            vim_mode: false,
        }
    }
}
