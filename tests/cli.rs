use std::process::Command;

fn run_demo() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_typeid_demo"))
        .output()
        .expect("failed to spawn typeid_demo")
}

#[test]
fn test_exit_status_is_zero() {
    assert!(run_demo().status.success());
}

#[test]
fn test_stdout_is_one_type_line() {
    let output = run_demo();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.lines().count(), 1);

    let name = stdout
        .trim_end_matches('\n')
        .strip_prefix("type: ")
        .expect("line starts with the type prefix");
    assert!(!name.is_empty());
    assert!(name.ends_with("Derived"));
}

#[test]
fn test_stderr_is_quiet_on_success() {
    assert!(run_demo().stderr.is_empty());
}

#[test]
fn test_arguments_are_ignored() {
    let plain = run_demo();
    let with_args = Command::new(env!("CARGO_BIN_EXE_typeid_demo"))
        .args(["--verbose", "extra"])
        .output()
        .expect("failed to spawn typeid_demo");
    assert!(with_args.status.success());
    assert_eq!(plain.stdout, with_args.stdout);
}
