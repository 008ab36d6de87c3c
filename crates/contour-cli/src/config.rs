use contour_catalog::Gender;
use contour_core::LandmarkScheme;

/// CLI defaults, loaded from environment variables. Flags override these.
pub struct Config {
    /// Audience for haircut suggestions (default: women).
    pub gender: Gender,
    /// Maximum suggestions per category (default: 5).
    pub limit: usize,
    /// Landmark layout expected in input files (default: dlib68).
    pub scheme: LandmarkScheme,
}

impl Config {
    /// Load configuration from `CONTOUR_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            gender: env_parse("CONTOUR_GENDER", Gender::Women),
            limit: env_parse("CONTOUR_LIMIT", 5),
            scheme: scheme_from_env(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn scheme_from_env() -> LandmarkScheme {
    match std::env::var("CONTOUR_SCHEME").ok().as_deref() {
        Some("mediapipe468") => LandmarkScheme::mediapipe468(),
        _ => LandmarkScheme::dlib68(),
    }
}
