//! Integration tests: drive the built binary through its CLI and stdin.

use assert_cmd::Command;

fn bmpshell() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bmpshell"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Test: valid canvas prints the banner and `quit` exits with 0
#[test]
fn test_banner_and_quit() {
    let output = bmpshell()
        .args(["100", "50"])
        .write_stdin("quit\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("100 x 50"));
    assert!(stdout.ends_with(" > "));
}

/// Test: `quit` exits with 0 after any sequence of earlier commands
#[test]
fn test_quit_after_other_commands() {
    let output = bmpshell()
        .args(["8", "8"])
        .write_stdin("help\nload a.bmp\nnonsense\ncrop 1 2\nplace 1 0 0 normal\nquit\nhelp\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Available commands:"));
    assert!(stdout.contains("load mode selected"));
    assert!(stdout.contains("place mode selected"));
    assert_eq!(stdout.matches("[ERROR] Command unknown!").count(), 2);
    assert_eq!(stdout.matches("Available commands:").count(), 1);
}

/// Test: every placeholder command acknowledges its mode
#[test]
fn test_placeholder_acknowledgements() {
    let script = "load pic.bmp\ncrop 1 0 0 4 4\nplace 1 2 3 overlay\nundo\nprint\nswitch 0\ntree\nbmps\nsave out.bmp\nquit\n";
    let output = bmpshell().args(["640", "480"]).write_stdin(script).output().unwrap();

    let stdout = stdout_of(&output);
    for name in ["load", "crop", "place", "undo", "print", "switch", "tree", "bmps", "save"] {
        assert!(stdout.contains(&format!("{} mode selected", name)), "missing {}", name);
    }
    assert!(!stdout.contains("[ERROR]"));
}

/// Test: `quitnow` is matched by prefix and terminates the shell
#[test]
fn test_prefix_quit() {
    let output = bmpshell()
        .args(["10", "10"])
        .write_stdin("quitnow\nhelp\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout_of(&output).contains("Available commands:"));
}

/// Test: closing stdin ends the shell normally
#[test]
fn test_end_of_input() {
    let output = bmpshell().args(["10", "10"]).write_stdin("tree\n").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("tree mode selected"));
}

/// Test: a very long line is read whole
#[test]
fn test_long_input_line() {
    let script = format!("load {}\nquit\n", "p".repeat(10_000));
    let output = bmpshell().args(["10", "10"]).write_stdin(script).output().unwrap();
    assert!(stdout_of(&output).contains("load mode selected"));
    assert_eq!(output.status.code(), Some(0));
}

/// Test: a negative width is an invalid canvas size
#[test]
fn test_negative_canvas() {
    let output = bmpshell().args(["-1", "50"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("[ERROR] Invalid canvas size specified!"));
    assert!(!stdout.contains("Canvas size"));
}

/// Test: a zero-sized canvas is rejected
#[test]
fn test_zero_canvas() {
    let output = bmpshell().args(["0", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(!stdout_of(&output).contains("Canvas size"));
}

/// Test: non-digit characters anywhere make the size invalid
#[test]
fn test_non_numeric_canvas() {
    let output = bmpshell().args(["100", "5O"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

/// Test: dash-led values that are not numbers are invalid canvas sizes
#[test]
fn test_dash_led_canvas_values() {
    for args in [["-x", "50"], ["50", "-abc"], ["-l", "50"]] {
        let output = bmpshell().args(args).output().unwrap();
        assert_eq!(output.status.code(), Some(3), "{:?}", args);
        let stdout = stdout_of(&output);
        assert!(stdout.contains("[ERROR] Invalid canvas size specified!"), "{:?}", args);
        assert!(!stdout.contains("Canvas size"), "{:?}", args);
    }
}

/// Test: the long log-level flag still works next to the canvas size
#[test]
fn test_log_level_flag() {
    let output = bmpshell()
        .args(["--log-level", "error", "20", "10"])
        .write_stdin("quit\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("20 x 10"));
}

/// Test: missing and extra arguments report the usage error
#[test]
fn test_wrong_argument_count() {
    let output = bmpshell().arg("100").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("[ERROR] Wrong number of parameters!"));
    assert!(!stdout.contains("Canvas size"));

    let output = bmpshell().output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let output = bmpshell().args(["1", "2", "3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
