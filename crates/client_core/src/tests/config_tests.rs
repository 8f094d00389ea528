use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_config(tag: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("params_editor_config_{tag}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_to_local_backend_without_file_or_env() {
    let config = load_config_from(Path::new("/nonexistent/params_editor.toml"), no_env);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn file_then_env_then_flag_take_precedence() {
    let path = temp_config("precedence", r#"api_url = "http://file.example:9000""#);

    let from_file = load_config_from(&path, no_env);
    assert_eq!(from_file.api_url, "http://file.example:9000");

    let from_env = load_config_from(&path, |key| {
        (key == "PARAMS_EDITOR_API_URL").then(|| "http://env.example".to_string())
    });
    assert_eq!(from_env.api_url, "http://env.example");

    let from_flag = from_env.with_api_url(Some("http://flag.example".to_string()));
    assert_eq!(from_flag.api_url, "http://flag.example");

    if let Some(dir) = path.parent() {
        fs::remove_dir_all(dir).expect("cleanup");
    }
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    let path = temp_config("unreadable", "api_url = [");
    let config = load_config_from(&path, no_env);
    assert_eq!(config, EditorConfig::default());

    if let Some(dir) = path.parent() {
        fs::remove_dir_all(dir).expect("cleanup");
    }
}

#[test]
fn base_url_gets_trailing_slash_for_joining() {
    let url = EditorConfig {
        api_url: "http://host:3001/api".to_string(),
    }
    .base_url()
    .expect("url");
    assert_eq!(url.join("model").expect("join").as_str(), "http://host:3001/api/model");

    let url = EditorConfig::default().base_url().expect("url");
    assert_eq!(url.join("params").expect("join").as_str(), "http://localhost:3001/params");
}

#[test]
fn rejects_non_http_urls() {
    let err = parse_base_url("ftp://host").expect_err("scheme");
    assert!(matches!(err, LoadError::InvalidUrl { .. }));
    assert!(parse_base_url("not a url").is_err());
}
