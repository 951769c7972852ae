//! Integration tests for omnipm

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn omnipm() -> Command {
        let mut cmd = cargo_bin_cmd!("omnipm");
        cmd.env_remove("OMNIPM_DEFAULT_PM");
        cmd.env_remove("OMNIPM_GLOBAL_PM");
        cmd
    }

    fn omnipx() -> Command {
        let mut cmd = cargo_bin_cmd!("omnipx");
        cmd.env_remove("OMNIPM_DEFAULT_PM");
        cmd
    }

    #[test]
    fn help_displays() {
        omnipm()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Universal front-end"));
    }

    #[test]
    fn version_displays() {
        omnipm()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("omnipm"));

        omnipm()
            .arg("-v")
            .assert()
            .success()
            .stdout(predicate::str::contains("omnipm"));
    }

    #[test]
    fn fails_outside_project() {
        let dir = TempDir::new().unwrap();
        omnipm()
            .current_dir(dir.path())
            .args(["--dry-run", "install"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No project root found"));
    }

    #[test]
    fn npm_install_dry_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

        omnipm()
            .current_dir(dir.path())
            .args(["--dry-run", "install", "express"])
            .assert()
            .success()
            .stdout(predicate::str::contains("npm install express"));
    }

    #[test]
    fn manifest_script_wraps_in_run() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "app", "scripts": {"build": "tsc"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

        omnipm()
            .current_dir(dir.path())
            .args(["--dry-run", "build"])
            .assert()
            .success()
            .stdout(predicate::str::contains("npm run build"));
    }

    #[test]
    fn pnpm_dev_install_dry_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();

        omnipm()
            .current_dir(dir.path())
            .args(["--dry-run", "install", "-D", "eslint"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pnpm add --save-dev eslint"));
    }

    #[test]
    fn no_verb_forces_full_install() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
        fs::write(dir.path().join("yarn.lock"), "").unwrap();

        omnipm()
            .current_dir(dir.path())
            .arg("--dry-run")
            .assert()
            .success()
            .stdout(predicate::str::contains("yarn install"));
    }

    #[test]
    fn auto_sync_precedes_scripts() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"scripts": {"lint": "eslint ."}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

        // Never synced: the dry run reports the install before the script
        omnipm()
            .current_dir(dir.path())
            .args(["--dry-run", "lint"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("npm install")
                    .and(predicate::str::contains("npm run lint")),
            );
    }

    #[test]
    fn set_config_rejects_unknown_manager() {
        omnipm()
            .args(["set-config", "default-package-manager", "cargo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown package manager: cargo"));
    }

    #[test]
    fn set_config_rejects_unknown_key() {
        omnipm()
            .args(["set-config", "favourite-color", "npm"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn global_requires_a_command() {
        omnipm()
            .arg("-g")
            .assert()
            .failure()
            .stderr(predicate::str::contains("required with --global"));
    }

    #[test]
    fn global_routes_to_env_manager() {
        let dir = TempDir::new().unwrap();
        omnipm()
            .current_dir(dir.path())
            .env("OMNIPM_GLOBAL_PM", "npm")
            .args(["--dry-run", "-g", "install", "typescript"])
            .assert()
            .success()
            .stdout(predicate::str::contains("npm install typescript -g"));
    }

    #[test]
    fn default_manager_env_override() {
        let dir = TempDir::new().unwrap();
        // Python marker without any manager-discriminating file
        fs::create_dir(dir.path().join("__pycache__")).unwrap();

        omnipm()
            .current_dir(dir.path())
            .env("OMNIPM_DEFAULT_PM", "uv")
            .args(["--dry-run", "install"])
            .assert()
            .success()
            .stdout(predicate::str::contains("uv sync"));
    }

    #[test]
    fn omnipx_help_displays() {
        omnipx()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("package runner"));
    }

    #[test]
    fn omnipx_maps_pnpm_to_dlx() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();

        omnipx()
            .current_dir(dir.path())
            .args(["--dry-run", "prettier", "--write", "."])
            .assert()
            .success()
            .stdout(predicate::str::contains("pnpm dlx prettier --write ."));
    }
}
