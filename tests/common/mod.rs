use assert_cmd::Command;
use std::path::Path;

pub fn weekplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("weekplan").unwrap();
    cmd.env_remove("WEEKPLAN_ROOT");
    cmd.env_remove("WEEKPLAN_LOCALE");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `weekplan init` in the given directory
#[allow(dead_code)]
pub fn init_planner(path: &Path, locale: &str) {
    weekplan_cmd()
        .arg("init")
        .arg(path)
        .arg("--locale")
        .arg(locale)
        .assert()
        .success();
}
