use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// TrueType font for PDF exports; the built-in Latin font is used when unset
    pub export_font_path: Option<PathBuf>,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://videoteka.db?mode=rwc".to_string());

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            export_font_path: env::var("EXPORT_FONT_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            seed_demo: env::var("SEED_DEMO")
                .map(|v| is_enabled(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            port: 8000,
            cors_allowed_origins: Vec::new(),
            export_font_path: None,
            seed_demo: false,
        }
    }
}

/// Flag values: anything but blank, `0`, `false`, `no` or `off` enables.
fn is_enabled(raw: &str) -> bool {
    let value = raw.trim().to_ascii_lowercase();
    !matches!(value.as_str(), "" | "0" | "false" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        for on in ["1", "true", "TRUE", "yes", " on "] {
            assert!(is_enabled(on), "{on:?} should enable");
        }
        for off in ["", "0", "false", "False", "no", "off"] {
            assert!(!is_enabled(off), "{off:?} should disable");
        }
    }

    #[test]
    fn test_default_does_not_seed() {
        assert!(!Config::default().seed_demo);
    }
}
