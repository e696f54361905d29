use crate::{stdout_of, Project};

fn container_entries(project: &Project) -> Vec<(u32, u32)> {
    let file = std::fs::File::open(project.layout().container()).unwrap();
    ico::IconDir::read(file)
        .unwrap()
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect()
}

#[test]
fn should_pack_existing_candidates_largest_first() {
    let project = Project::new()
        .with_png("icon_16x16.png", 16, 16)
        .with_png("icon_64x64.png", 64, 64)
        .with_png("icon_256x256.png", 256, 256)
        .with_png("icon_512x512.png", 512, 512);

    let stdout = stdout_of(project.appicons().arg("pack").assert().success());

    assert_eq!(
        container_entries(&project),
        vec![(256, 256), (64, 64), (16, 16)]
    );
    assert!(stdout.contains("Added icon_256x256.png"));
    assert!(!stdout.contains("Added icon_512x512.png"));
    assert!(stdout.contains("Created "));
}

#[test]
fn should_not_create_container_without_candidates() {
    let project = Project::new();

    let stdout = stdout_of(project.appicons().arg("pack").assert().success());

    assert!(stdout.contains("No PNG files found!"));
    assert!(!project.layout().container().exists());
}

#[test]
fn should_pack_without_valid_config_file() {
    let project = Project::new()
        .with_png("icon_32x32.png", 32, 32)
        .with_config("density = \"not a number\"");

    project.appicons().arg("pack").assert().success();

    assert_eq!(container_entries(&project), vec![(32, 32)]);
}

#[test]
fn should_fail_on_candidate_too_large_for_container() {
    let project = Project::new().with_png("icon_256x256.png", 512, 512);

    project.appicons().arg("pack").assert().failure();

    assert!(!project.layout().container().exists());
}
