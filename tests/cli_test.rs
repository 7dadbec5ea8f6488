use std::io::Write;
use std::process::Command;

use tempfile::{tempdir, NamedTempFile};

fn write_config(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_webpage"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_render_to_stdout() {
    let config = write_config(
        r#"
        title = "Accueil"
        icon = "/favicon.ico"
        content = ["<h1>Bonjour</h1>"]
        timestamp = "fixed"
        fixed_timestamp = "2024-03-05 14:07:09"
        "#,
    );
    let output = run(&["--config", config.path().to_str().unwrap()]);
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with("<!DOCTYPE HTML>\n<html lang=\"fr\">"));
    assert!(html.contains("<title>Accueil</title>"));
    assert!(html.contains("    <link rel=\"icon\" href=\"/favicon.ico\">\n  <body>"));
    assert!(html.contains("<h1>Bonjour</h1>"));
    assert!(html.contains("Last modification: 05 March 2024 - 14:07:09"));
    assert!(html.ends_with("</html>"));
}

#[test]
fn test_render_to_file() {
    let config = write_config("title = \"Fichier\"\ntimestamp = \"process_start\"");
    let dir = tempdir().unwrap();
    let out = dir.path().join("page.html");
    let output = run(&[
        "--config",
        config.path().to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Fichier</title>"));
}

#[test]
fn test_missing_config_fails() {
    let output = run(&["--config", "/no/such/page.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_log_config_still_renders() {
    let config = write_config("title = \"Sans journal\"");
    let output = run(&[
        "--config",
        config.path().to_str().unwrap(),
        "--log-config",
        "/no/such/log4rs.yaml",
    ]);
    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<title>Sans journal</title>"));
}

#[test]
fn test_bundled_development_config() {
    // 测试进程的工作目录是包根目录，与可执行程序的默认路径一致
    let output = run(&[]);
    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<title>Accueil</title>"));
    assert!(html.contains("<main>"));
}
