/// Nexus AI Chat — centralized constants.
/// Endpoints, names, and defaults live here; never hardcode them elsewhere.

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Query parameter carrying the credential.
    pub const KEY_PARAM: &str = "key";
}

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    pub const DEFAULT_GEMINI_MODEL: &str = "gemma-3n-e4b-it";
}

// ─── Configuration ────────────────────────────────────────────────────────────

pub mod config {
    /// Directory under the platform config dir.
    pub const APP_DIR: &str = "nexus-chat";
    pub const FILE_NAME: &str = "config.toml";
    pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const THEME: &str = "dark";
    pub const PANEL_TITLE: &str = "Nexus AI Chat";
}

// ─── Notifications ────────────────────────────────────────────────────────────

pub mod messages {
    pub const MISSING_CREDENTIAL: &str = "Please set your Gemini API key in settings";
}
