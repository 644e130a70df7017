//! Localinstall integration tests
//!
//! Local rpm file intake, the localinstall-only argument rules and how
//! unmatched files are reported under each policy.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn rpkg_cmd() -> Command {
    Command::cargo_bin("rpkg").unwrap()
}

#[test]
fn test_localinstall_stages_local_file() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(true);
    root.write_rpm("hello-1.0-1.x86_64.rpm");

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "./hello-1.0-1.x86_64.rpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello-1.0-1.x86_64"));
}

#[test]
fn test_localinstall_missing_file_non_strict_succeeds() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(false);

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "./a-1.0-1.x86_64.rpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match for argument:"))
        .stdout(predicate::str::contains("Nothing to do."));
}

#[test]
fn test_localinstall_missing_file_strict_fails() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(true);

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "./a-1.0-1.x86_64.rpm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to find a match: ./a-1.0-1.x86_64.rpm",
        ));
}

#[test]
fn test_localinstall_unparseable_file_name_is_unmatched() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(false);
    root.write_rpm("garbage.rpm");

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "./garbage.rpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match for argument:"))
        .stdout(predicate::str::contains("Nothing to do."));
}

#[test]
fn test_localinstall_with_package_spec_strict_is_usage_error() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(true);
    root.write_rpm("hello-1.0-1.x86_64.rpm");

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "vim", "./hello-1.0-1.x86_64.rpm"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Not a valid rpm file path: vim"))
        .stderr(predicate::str::contains("Nothing to do."));
}

#[test]
fn test_localinstall_with_group_spec_strict_is_usage_error() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(true);

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "@core"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Not a valid rpm file path: @core"))
        .stderr(predicate::str::contains("Nothing to do."));
}

#[test]
fn test_localinstall_mixed_args_non_strict_still_installs_file() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(false);
    root.write_rpm("hello-1.0-1.x86_64.rpm");

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "vim", "./hello-1.0-1.x86_64.rpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a valid rpm file path: vim"))
        .stdout(predicate::str::contains("hello-1.0-1.x86_64"));
}

#[test]
fn test_localinstall_never_resolves_package_specs() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(false);

    // vim exists in the index, but localinstall must not touch it.
    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "localinstall", "vim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do."))
        .stdout(predicate::str::contains("vim-9.1.0-1.x86_64").not());
}

#[test]
fn test_install_accepts_files_alongside_specs() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(true);
    root.write_rpm("hello-1.0-1.x86_64.rpm");

    rpkg_cmd()
        .current_dir(&root.path)
        .args(["-y", "install", "vim", "./hello-1.0-1.x86_64.rpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vim-9.1.0-1.x86_64"))
        .stdout(predicate::str::contains("hello-1.0-1.x86_64"))
        .stdout(predicate::str::contains("Transaction staged: 2 action(s)."));
}

#[test]
fn test_remote_url_is_unmatched() {
    let root = common::TestRoot::new();
    root.write_base_index();
    root.write_config(true);

    rpkg_cmd()
        .current_dir(&root.path)
        .args([
            "-y",
            "localinstall",
            "https://example.com/hello-1.0-1.x86_64.rpm",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No match for argument:"))
        .stderr(predicate::str::contains("Unable to find a match"));
}
