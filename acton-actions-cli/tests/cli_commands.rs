//! Integration tests for the CLI commands

use std::fs;

use acton_actions::ScaffoldError;
use acton_actions_cli_lib::{run, Command, MakeCommand, PublishTarget};
use clap::Parser;
use tempfile::TempDir;

/// Mirrors the binary's argument surface
#[derive(Parser)]
struct TestCli {
    #[command(subcommand)]
    command: Command,
}

fn parse(args: &[&str]) -> Command {
    let argv = std::iter::once("acton-actions").chain(args.iter().copied());
    TestCli::try_parse_from(argv).unwrap().command
}

#[test]
fn test_parse_make_action() {
    let command = parse(&["make", "action", "CreateUser", "--force"]);
    match command {
        Command::Make {
            command:
                MakeCommand::Action {
                    name,
                    force,
                    namespace,
                    output,
                },
        } => {
            assert_eq!(name, "CreateUser");
            assert!(force);
            assert!(namespace.is_none());
            assert!(output.is_none());
        }
        Command::Publish(_) => panic!("expected make command"),
    }
}

#[test]
fn test_make_action_requires_name() {
    let result = TestCli::try_parse_from(["acton-actions", "make", "action"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_publish_tag() {
    match parse(&["publish", "--tag", "stub"]) {
        Command::Publish(publish) => {
            assert_eq!(publish.tag, Some(PublishTarget::Stub));
            assert!(!publish.force);
        }
        Command::Make { .. } => panic!("expected publish command"),
    }
}

#[test]
fn test_run_make_action_writes_file() {
    let project = TempDir::new().unwrap();

    run(project.path(), parse(&["make", "action", "CreateUser"])).unwrap();

    let path = project.path().join("src/actions/CreateUser.rs");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("pub struct CreateUser;"));
    assert!(contents.contains("crate::actions"));
}

#[test]
fn test_run_make_action_twice_fails_without_force() {
    let project = TempDir::new().unwrap();
    let path = project.path().join("src/actions/CreateUser.rs");

    run(project.path(), parse(&["make", "action", "CreateUser"])).unwrap();
    fs::write(&path, "// edited").unwrap();

    let err = run(project.path(), parse(&["make", "action", "CreateUser"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::AlreadyExists(_))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "// edited");

    run(project.path(), parse(&["make", "action", "CreateUser", "-f"])).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("pub struct CreateUser;"));
}

#[test]
fn test_run_make_action_invalid_name() {
    let project = TempDir::new().unwrap();

    let err = run(project.path(), parse(&["make", "action", "123bad"])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::InvalidName { .. })
    ));
    assert!(!project.path().join("src").exists());
}

#[test]
fn test_run_make_action_with_overrides() {
    let project = TempDir::new().unwrap();

    run(
        project.path(),
        parse(&[
            "make",
            "action",
            "Refund",
            "--namespace",
            "crate::billing",
            "--output",
            "src/billing",
        ]),
    )
    .unwrap();

    let contents = fs::read_to_string(project.path().join("src/billing/Refund.rs")).unwrap();
    assert!(contents.contains("crate::billing"));
}

#[test]
fn test_run_publish_then_generate_from_published_stub() {
    let project = TempDir::new().unwrap();

    run(project.path(), parse(&["publish"])).unwrap();
    assert!(project.path().join("config/actions.toml").is_file());
    assert!(project.path().join("stubs/action.stub").is_file());

    fs::write(
        project.path().join("stubs/action.stub"),
        "pub struct {{name}}; // {{namespace}}\n",
    )
    .unwrap();
    run(project.path(), parse(&["make", "action", "Audit"])).unwrap();

    assert_eq!(
        fs::read_to_string(project.path().join("src/actions/Audit.rs")).unwrap(),
        "pub struct Audit; // crate::actions\n"
    );
}

#[test]
fn test_run_with_broken_config_fails() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("config")).unwrap();
    fs::write(project.path().join("config/actions.toml"), "output_dir = [").unwrap();

    let err = run(project.path(), parse(&["make", "action", "CreateUser"])).unwrap_err();
    assert!(err.to_string().contains("Failed to load action configuration"));
}
