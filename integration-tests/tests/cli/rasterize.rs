use crate::{stdout_of, Project};
use appicons_core::sizes::SIZES;
use integration_tests::Workdir;

#[test]
fn should_fail_without_output_if_source_is_missing() {
    let converter = Workdir::new();
    let project =
        Project::new().with_converters(&converter.test_binary(), &converter.test_binary());

    project.appicons().arg("rasterize").assert().failure();

    assert!(project.pngs().is_empty());
    assert!(converter.invocations().is_empty());
}

#[test]
fn should_fail_with_install_hints_if_no_converter_is_available() {
    let project = Project::new().with_source();
    let missing = project.path().join("missing-converter");
    let project = project.with_converters(&missing, &missing);

    let stdout = stdout_of(project.appicons().arg("rasterize").assert().failure());

    assert!(stdout.contains("No suitable SVG to PNG converter found."));
    assert!(stdout.contains("  - ImageMagick: "));
    assert!(stdout.contains("  - librsvg: "));
    assert!(project.pngs().is_empty());
}

#[test]
fn should_run_imagemagick_once_per_size() {
    let imagemagick = Workdir::new();
    let rsvg = Workdir::new();
    let project = Project::new()
        .with_source()
        .with_converters(&imagemagick.test_binary(), &rsvg.test_binary());

    project.appicons().arg("rasterize").assert().success();

    let source = project.layout().source();
    let invocations = imagemagick.invocations();
    assert_eq!(invocations.len(), 1 + SIZES.len());
    invocations.assert_args(0, &["-version"]);
    for (index, entry) in SIZES.iter().enumerate() {
        let output = project.layout().raster(entry.filename);
        let size = format!("{0}x{0}", entry.size);
        invocations.assert_args(
            index + 1,
            &[
                "-background",
                "transparent",
                "-density",
                "300",
                source.to_str().unwrap(),
                "-resize",
                size.as_str(),
                output.to_str().unwrap(),
            ],
        );
    }
    assert!(rsvg.invocations().is_empty());
}

#[test]
fn should_pass_configured_density_to_imagemagick() {
    let imagemagick = Workdir::new();
    let project = Project::new().with_source().with_config(&format!(
        "imagemagick-binary = '{}'\ndensity = 600\n",
        imagemagick.test_binary().display()
    ));

    project.appicons().arg("rasterize").assert().success();

    let invocations = imagemagick.invocations();
    let source = project.layout().source();
    let output = project.layout().raster("icon_16x16.png");
    invocations.assert_args(
        1,
        &[
            "-background",
            "transparent",
            "-density",
            "600",
            source.to_str().unwrap(),
            "-resize",
            "16x16",
            output.to_str().unwrap(),
        ],
    );
}

#[test]
fn should_fall_back_to_rsvg_if_imagemagick_is_missing() {
    let rsvg = Workdir::new();
    let project = Project::new().with_source();
    let missing = project.path().join("missing-converter");
    let project = project.with_converters(&missing, &rsvg.test_binary());

    project.appicons().arg("rasterize").assert().success();

    let source = project.layout().source();
    let invocations = rsvg.invocations();
    assert_eq!(invocations.len(), 1 + SIZES.len());
    invocations.assert_args(0, &["--version"]);
    for (index, entry) in SIZES.iter().enumerate() {
        let output = project.layout().raster(entry.filename);
        let size = entry.size.to_string();
        invocations.assert_args(
            index + 1,
            &[
                "-w",
                size.as_str(),
                "-h",
                size.as_str(),
                "-o",
                output.to_str().unwrap(),
                source.to_str().unwrap(),
            ],
        );
    }
}

#[test]
fn should_fall_back_to_rsvg_if_imagemagick_probe_fails() {
    let imagemagick = Workdir::new().with_exit_status(1);
    let rsvg = Workdir::new();
    let project = Project::new()
        .with_source()
        .with_converters(&imagemagick.test_binary(), &rsvg.test_binary());

    project.appicons().arg("rasterize").assert().success();

    assert_eq!(imagemagick.invocations().len(), 1);
    imagemagick.invocations().assert_args(0, &["-version"]);
    assert_eq!(rsvg.invocations().len(), 1 + SIZES.len());
}

#[test]
fn should_attempt_every_size_and_exit_successfully_despite_failures() {
    let imagemagick = Workdir::new().failing_on("128x128");
    let project = Project::new()
        .with_source()
        .with_converters(&imagemagick.test_binary(), &imagemagick.test_binary());

    let stdout = stdout_of(project.appicons().arg("rasterize").assert().success());

    assert_eq!(imagemagick.invocations().len(), 1 + SIZES.len());
    assert!(stdout.contains("Failed to generate icon_128x128.png"));
    assert!(stdout.contains("Generating icon_96x96.png (96x96)..."));
    assert!(stdout.contains("Icons saved to: "));
}
