use crate::{stdout_of, Project};
use appicons_core::config::AppConfig;

#[test]
fn should_print_defaults_without_config_file() {
    let project = Project::new();

    let stdout = stdout_of(project.appicons().arg("config").assert().success());

    assert!(stdout.contains("imagemagick-binary = 'convert'"));
    assert!(stdout.contains("rsvg-binary = 'rsvg-convert'"));
    assert!(stdout.contains("density = 300"));
    assert_eq!(
        toml::from_str::<AppConfig>(&stdout).unwrap(),
        AppConfig::default()
    );
}

#[test]
fn should_print_project_config_file() {
    let project = Project::new().with_config("density = 96");

    let stdout = stdout_of(project.appicons().arg("config").assert().success());

    assert!(stdout.contains("density = 96"));
}

#[test]
fn should_prefer_explicit_config_file() {
    let project = Project::new().with_config("density = 96");
    let explicit = project.path().join("other.toml");
    std::fs::write(&explicit, "density = 1200").unwrap();

    let stdout = stdout_of(
        project
            .appicons()
            .arg("--config-file")
            .arg(&explicit)
            .arg("config")
            .assert()
            .success(),
    );

    assert!(stdout.contains("density = 1200"));
}
