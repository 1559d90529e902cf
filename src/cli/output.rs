use serde::Serialize;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ThemeJson {
    pub mode: &'static str,
    pub dark_mode: bool,
    pub persisted: bool,
}

#[derive(Debug, Serialize)]
pub struct PathsJson {
    pub config_dir: String,
    pub config_file: String,
    pub prefs_file: String,
}

/// Human name of a display mode
pub fn mode_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
