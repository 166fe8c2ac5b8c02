use serde::{Deserialize, Serialize};

/// Six-color chart palette used when neither the request nor the config supplies one.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#f38020", "#3b82f6", "#22c55e", "#ef4444", "#a855f7", "#eab308",
];

/// Named report colors plus the chart palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_card")]
    pub card: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_muted")]
    pub muted: String,
    #[serde(default = "default_border")]
    pub border: String,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            background: default_background(),
            card: default_card(),
            text: default_text(),
            muted: default_muted(),
            border: default_border(),
            palette: default_palette(),
        }
    }
}

fn default_primary() -> String {
    "#f38020".to_string()
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_card() -> String {
    "#f8fafc".to_string()
}

fn default_text() -> String {
    "#1e293b".to_string()
}

fn default_muted() -> String {
    "#64748b".to_string()
}

fn default_border() -> String {
    "#e2e8f0".to_string()
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(ToString::to_string).collect()
}
