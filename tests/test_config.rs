use staticd::config::Config;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::from_args(args(&[dir.path().to_str().unwrap()])).unwrap();

    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert!(cfg.root.is_dir());
}

#[test]
fn test_config_host_and_port_override() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::from_args(args(&[dir.path().to_str().unwrap(), "0.0.0.0", "9090"])).unwrap();

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 9090);
}

#[test]
fn test_config_host_only() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::from_args(args(&[dir.path().to_str().unwrap(), "localhost"])).unwrap();

    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.port, 8080);
}

#[test]
fn test_config_no_args_is_usage_error() {
    let err = Config::from_args(args(&[])).unwrap_err();

    assert!(err.to_string().contains("usage"));
}

#[test]
fn test_config_too_many_args_is_usage_error() {
    let err = Config::from_args(args(&["a", "b", "c", "d"])).unwrap_err();

    assert!(err.to_string().contains("usage"));
}

#[test]
fn test_config_rejects_missing_webdir() {
    let result = Config::from_args(args(&["/definitely/not/a/real/dir"]));

    assert!(result.is_err());
}

#[test]
fn test_config_rejects_file_as_webdir() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("f.txt");
    std::fs::write(&file, b"x").unwrap();

    let result = Config::from_args(args(&[file.to_str().unwrap()]));

    assert!(result.is_err());
}

#[test]
fn test_config_rejects_bad_port() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_args(args(&[dir.path().to_str().unwrap(), "127.0.0.1", "notaport"]));

    assert!(result.is_err());
}

#[test]
fn test_config_canonicalizes_root() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::from_args(args(&[dir.path().to_str().unwrap()])).unwrap();

    assert_eq!(cfg.root, dir.path().canonicalize().unwrap());
}
