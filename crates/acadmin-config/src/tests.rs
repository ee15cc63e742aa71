use super::*;

#[test]
fn test_defaults_point_at_local_api() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.server.port, 3002);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: Config = toml::from_str(
        r#"
        [api]
        base_url = "http://records.example.edu/api"
        "#,
    )
    .unwrap();
    assert_eq!(config.api.base_url, "http://records.example.edu/api");
    assert_eq!(config.api.timeout_secs, default_timeout_secs());
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::from_path("/definitely/not/here/acadmin.toml").unwrap();
    assert_eq!(config.api.base_url, default_base_url());
}
