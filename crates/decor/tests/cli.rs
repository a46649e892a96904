use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_decor"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute decor");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("window frame"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_decor"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute decor");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("decor"));
}

#[test]
fn info_subcommand_reports_border_width() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_decor"));
    cmd.arg("info");

    // Act
    let output = cmd.output().expect("failed to execute decor");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Resize border width: 8 px"));
    assert!(stdout.contains("Default caption height"));
}

#[test]
fn demo_help_lists_options() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_decor"));
    cmd.args(["demo", "--help"]);

    // Act
    let output = cmd.output().expect("failed to execute decor");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--caption-height"));
    assert!(stdout.contains("--buttons"));
}

#[test]
fn demo_rejects_unknown_mode() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_decor"));
    cmd.args(["demo", "--mode", "fancy"]);

    // Act
    let output = cmd.output().expect("failed to execute decor");

    // Assert
    assert!(!output.status.success());
}
