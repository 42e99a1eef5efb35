use docroot::config::Config;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::load_with(vars(&[])).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.read_timeout(), Duration::from_secs(5));
    assert_eq!(cfg.static_files.root, Path::new("./www"));
}

#[test]
fn test_config_listen_override_from_env() {
    let cfg = Config::load_with(vars(&[("LISTEN", "0.0.0.0:3000")])).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_root_override_from_env() {
    let cfg = Config::load_with(vars(&[("DOCROOT_ROOT", "/srv/site")])).unwrap();

    assert_eq!(cfg.static_files.root, Path::new("/srv/site"));
}

#[test]
fn test_config_from_yaml() {
    let yaml = r#"
server:
  listen_addr: "127.0.0.1:9000"
  read_timeout_secs: 2
static_files:
  root: "/var/www"
"#;
    let cfg = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.server.read_timeout(), Duration::from_secs(2));
    assert_eq!(cfg.static_files.root, Path::new("/var/www"));
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let yaml = "static_files:\n  root: public\n";
    let cfg = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, Path::new("public"));
}

#[test]
fn test_config_empty_yaml_is_default() {
    let cfg = Config::from_yaml_str("").unwrap();
    assert_eq!(cfg.server.read_timeout_secs, 5);
}

#[test]
fn test_config_invalid_yaml_is_error() {
    assert!(Config::from_yaml_str("server: [not, a, map]").is_err());
}

#[test]
fn test_config_file_then_env_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  listen_addr: \"127.0.0.1:7000\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cfg = Config::load_with(vars(&[
        ("DOCROOT_CONFIG", path.as_str()),
        ("DOCROOT_ROOT", "/tmp/site"),
    ]))
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:7000");
    assert_eq!(cfg.static_files.root, Path::new("/tmp/site"));
}

#[test]
fn test_config_missing_file_is_error() {
    let result = Config::load_with(vars(&[("DOCROOT_CONFIG", "/nonexistent/docroot.yaml")]));
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::load_with(vars(&[])).unwrap();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
