use std::io::Write;

use pathsh::core::mock::ScriptedInput;
use pathsh::{Shell, ShellExit};
use pathsh_cli::terminal::ConsoleWriter;
use pathsh_cli::{Catalog, CatalogClient};

const CATALOG: &str = r#"{
  "shell": { "prompt": "%PATH%$ ", "quit_tokens": ["q"] },
  "patterns": ["disk.list", "disk.mount.?disks_id", "net.up"],
  "fields": { "disks": { "id": ["sda", "sdb"] } }
}"#;

fn load() -> Catalog {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    Catalog::load(file.path()).unwrap()
}

#[test]
fn test_session_over_catalog_file() {
    let catalog = load();
    let client = CatalogClient::new(&catalog, Vec::new()).unwrap();
    let mut shell = Shell::new(client, catalog.shell.clone());
    shell.set_commands(&catalog.patterns).unwrap();

    let mut input = ScriptedInput::new(["disk", "mount", "sdc", "sdb", "?", "q"]);
    let mut writer = ConsoleWriter::new(Vec::new(), false);

    let exit = shell.run(&mut input, &mut writer).unwrap();

    assert_eq!(exit, ShellExit::Quit);
    assert_eq!(
        input.prompts(),
        vec!["$ ", "disk$ ", "disk mount$ ", "disk mount$ ", "disk mount$ ", "disk mount$ "]
    );
    assert_eq!(input.completions()[2], vec!["sda", "sdb"]);
    assert_eq!(
        String::from_utf8(writer.into_inner()).unwrap(),
        "disk mount sdc: command not found\nsda\nsdb\n"
    );

    let executed = shell.into_client().into_inner();
    assert_eq!(String::from_utf8(executed).unwrap(), "executing: disk mount sdb\n");
}

#[test]
fn test_prefix_typed_in_one_line() {
    let catalog = load();
    let client = CatalogClient::new(&catalog, Vec::new()).unwrap();
    let mut shell = Shell::new(client, catalog.shell.clone());
    shell.set_commands(&catalog.patterns).unwrap();

    // "disk mount" is a valid prefix typed in one go
    let mut input = ScriptedInput::new(["disk mount"]);
    let mut writer = ConsoleWriter::new(Vec::new(), false);
    shell.run(&mut input, &mut writer).unwrap();

    assert_eq!(shell.path().as_str(), "disk.mount");
    assert_eq!(shell.prompt(), "disk mount$ ");
}

#[test]
fn test_unknown_root_hint() {
    let catalog = load();
    let client = CatalogClient::new(&catalog, Vec::new()).unwrap();
    let mut shell = Shell::new(client, catalog.shell.clone());
    shell.set_commands(&catalog.patterns).unwrap();

    let mut input = ScriptedInput::new(["reboot"]);
    let mut writer = ConsoleWriter::new(Vec::new(), false);
    let exit = shell.run(&mut input, &mut writer).unwrap();

    assert_eq!(exit, ShellExit::EndOfInput);
    assert_eq!(
        String::from_utf8(writer.into_inner()).unwrap(),
        "Use '?' to list available commands\n"
    );
}
