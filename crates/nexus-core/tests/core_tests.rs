use nexus_core::config::Settings;
use nexus_core::*;
use tempfile::TempDir;

// ========================================================================
// Settings Tests (config/mod.rs)
// ========================================================================

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert!(settings.chat.api_key.is_none());
    assert_eq!(settings.chat.api_key_env, "GEMINI_API_KEY");
    assert_eq!(settings.chat.model, "gemma-3n-e4b-it");
    assert_eq!(
        settings.chat.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(settings.panel.theme, "dark");
    assert_eq!(settings.panel.title, "Nexus AI Chat");
}

#[test]
fn test_settings_load_from_missing_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&temp_dir.path().join("absent.toml"));
    assert_eq!(settings.chat.model, "gemma-3n-e4b-it");
}

#[test]
fn test_settings_load_from_garbage_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.panel.theme, "dark");
}

#[test]
fn test_settings_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[chat]\nmodel = \"gemini-2.0-flash\"\n").unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.chat.model, "gemini-2.0-flash");
    assert_eq!(settings.chat.api_key_env, "GEMINI_API_KEY");
    assert_eq!(settings.panel.title, "Nexus AI Chat");
}

#[test]
fn test_settings_inline_api_key_wins_over_env() {
    std::env::set_var("NEXUS_TEST_INLINE_WINS", "from-env");
    let mut settings = Settings::default();
    settings.chat.api_key = Some("inline".to_string());
    settings.chat.api_key_env = "NEXUS_TEST_INLINE_WINS".to_string();

    assert_eq!(settings.api_key().as_deref(), Some("inline"));
}

#[test]
fn test_settings_api_key_falls_back_to_env() {
    std::env::set_var("NEXUS_TEST_ENV_FALLBACK", "from-env");
    let mut settings = Settings::default();
    settings.chat.api_key = Some("   ".to_string());
    settings.chat.api_key_env = "NEXUS_TEST_ENV_FALLBACK".to_string();

    assert_eq!(settings.api_key().as_deref(), Some("from-env"));
}

#[test]
fn test_settings_empty_values_mean_no_credential() {
    std::env::set_var("NEXUS_TEST_EMPTY_ENV", "");
    let mut settings = Settings::default();
    settings.chat.api_key = Some(String::new());
    settings.chat.api_key_env = "NEXUS_TEST_EMPTY_ENV".to_string();
    assert!(settings.api_key().is_none());

    settings.chat.api_key_env = String::new();
    assert!(settings.api_key().is_none());
}

#[test]
fn test_settings_build_client_uses_configured_endpoint() {
    let mut settings = Settings::default();
    settings.chat.base_url = "http://127.0.0.1:1/v1beta".to_string();
    settings.chat.model = "tiny".to_string();

    let client = settings.build_client();
    assert_eq!(client.model(), "tiny");
    assert_eq!(
        client.endpoint(),
        "http://127.0.0.1:1/v1beta/models/tiny:generateContent"
    );
}

// ========================================================================
// Credential Lookup Tests (config/mod.rs)
// ========================================================================

#[test]
fn test_settings_credentials_reread_file_on_every_lookup() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let credentials = SettingsCredentials::new(&path);

    std::fs::write(&path, "[chat]\napi_key_env = \"\"\n").unwrap();
    assert!(credentials.api_key().is_none());

    std::fs::write(&path, "[chat]\napi_key = \"first\"\n").unwrap();
    assert_eq!(credentials.api_key().as_deref(), Some("first"));

    std::fs::write(&path, "[chat]\napi_key = \"second\"\n").unwrap();
    assert_eq!(credentials.api_key().as_deref(), Some("second"));
}

#[test]
fn test_settings_credentials_never_write_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let credentials = SettingsCredentials::new(&path);

    let _ = credentials.api_key();
    assert!(!path.exists());
    assert_eq!(credentials.path(), path.as_path());
}
