use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout, table};

const LOGIN_SOURCE: &str = r#"
- (void)viewDidLoad {
    self.title = NSLocalizedString(@"Log in", @"Login screen title");
    self.button.title = NSLocalizedStringFromTable(@"Submit", @"Forms", @"Submit button");
}
"#;

#[test]
fn test_sync_writes_tables() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Login.m", LOGIN_SOURCE)?;

    let output = test.sync_command(&[]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_strings("out/Localizable.strings")?,
        table(&[("Log in", "Log in", "Login screen title")])
    );
    assert_eq!(
        test.read_strings("out/Forms.strings")?,
        table(&[("Submit", "Submit", "Submit button")])
    );
    assert!(test.read_strings("out/UI_Autogenerated.strings")?.is_empty());

    let out = stdout(&output);
    assert!(out.contains("Summary\n    2 entries added\n"), "stdout: {}", out);
    assert!(out.contains("Scanned 1 source file, 0 interface files - wrote 3 strings files"));
    Ok(())
}

#[test]
fn test_sync_verbose_reports_each_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Login.m", LOGIN_SOURCE)?;

    let output = test.sync_command(&["-v"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("UI_Autogenerated.strings: (0 entries)\n    No changes made\n"));
    assert!(out.contains("Forms.strings: (1 entry)\n    1 entry added\n"));
    assert!(out.contains("Localizable.strings: (1 entry)\n    1 entry added\n"));
    assert!(out.contains("src/Login.m: 2 macro calls\n"));
    assert!(out.contains("2 macro calls in total\n"));
    Ok(())
}

#[test]
fn test_sync_conflict_aborts_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/A.m", r#"NSLocalizedString(@"OK", @"Confirm action");"#)?;
    test.write_file("src/B.m", r#"NSLocalizedString(@"OK", @"Different comment");"#)?;

    let output = test.sync_command(&[]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("\"OK\""), "stderr: {}", err);
    assert!(err.contains("Confirm action"));
    assert!(err.contains("Different comment"));
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[test]
fn test_comment_with_terminator_aborts_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/A.m", r#"NSLocalizedString(@"Mult", @"shows a */ b");"#)?;

    for _ in 0..2 {
        let output = test.sync_command(&[]).output()?;
        assert_eq!(output.status.code(), Some(1));
        let err = stderr(&output);
        assert!(err.contains("\"Mult\""), "stderr: {}", err);
        assert!(err.contains("*/"), "stderr: {}", err);
        assert!(!test.root().join("out").exists());
    }
    Ok(())
}

#[test]
fn test_table_name_outside_output_dir_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/A.m",
        r#"NSLocalizedStringFromTable(@"OK", @"../Shared", nil);"#,
    )?;

    let output = test.sync_command(&[]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("../Shared"));
    assert!(!test.root().join("Shared.strings").exists());
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[test]
fn test_insert_only_keeps_translations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings(
        "out/Localizable.strings",
        &[("Hello", "Bonjour", "greeting"), ("Old", "Vieux", "unused")],
    )?;
    test.write_file(
        "src/Home.m",
        r#"
        NSLocalizedString(@"Hello", @"changed greeting");
        NSLocalizedString(@"Bye", @"farewell");
        "#,
    )?;

    let output = test.sync_command(&["-mi"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.read_strings("out/Localizable.strings")?,
        table(&[
            ("Bye", "Bye", "farewell"),
            ("Hello", "Bonjour", "greeting"),
            ("Old", "Vieux", "unused"),
        ])
    );
    Ok(())
}

#[test]
fn test_minimal_merge_refreshes_changed_comments() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings(
        "out/Localizable.strings",
        &[("Hello", "Bonjour", "greeting"), ("Old", "Vieux", "unused")],
    )?;
    test.write_file(
        "src/Home.m",
        r#"NSLocalizedString(@"Hello", @"changed greeting");"#,
    )?;

    let output = test.sync_command(&["-mb"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.read_strings("out/Localizable.strings")?,
        table(&[
            ("Hello", "Hello", "changed greeting"),
            ("Old", "Vieux", "unused"),
        ])
    );
    Ok(())
}

#[test]
fn test_full_merge_removes_unreferenced_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings(
        "out/Localizable.strings",
        &[("Hello", "Bonjour", "greeting"), ("Old", "Vieux", "unused")],
    )?;
    test.write_file("src/Home.m", r#"NSLocalizedString(@"Hello", @"greeting");"#)?;

    let output = test.sync_command(&["--merge", "full-merge"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.read_strings("out/Localizable.strings")?,
        table(&[("Hello", "Bonjour", "greeting")])
    );
    assert!(stdout(&output).contains("1 entry removed"));
    Ok(())
}

#[test]
fn test_overwrite_discards_existing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings(
        "out/Localizable.strings",
        &[("Hello", "Bonjour", "greeting"), ("Old", "Vieux", "unused")],
    )?;
    test.write_file("src/Home.m", r#"NSLocalizedString(@"Hello", @"greeting");"#)?;

    let output = test.sync_command(&["-mo"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.read_strings("out/Localizable.strings")?,
        table(&[("Hello", "Hello", "greeting")])
    );
    let out = stdout(&output);
    assert!(out.contains("1 entry updated"), "stdout: {}", out);
    assert!(out.contains("1 entry removed"), "stdout: {}", out);
    Ok(())
}

#[test]
fn test_recursive_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/Controllers/Settings.m",
        r#"NSLocalizedString(@"Settings", nil);"#,
    )?;

    let output = test.sync_command(&[]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("out/Localizable.strings").exists());

    let output = test.sync_command(&["-r"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.read_strings("out/Localizable.strings")?.contains_key("Settings"));
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Login.m", LOGIN_SOURCE)?;

    let output = test.sync_command(&["--dry-run"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("dry run, no files written"));
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[test]
fn test_malformed_existing_file_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Home.m", r#"NSLocalizedString(@"Hello", @"greeting");"#)?;
    // Plain UTF-8 text with an odd byte count is not a valid UTF-16 file.
    test.write_file("out/Localizable.strings", "\"Hello\" = \"Hi\";")?;

    let output = test.sync_command(&[]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Localizable.strings"));
    assert!(!test.root().join("out/UI_Autogenerated.strings").exists());
    Ok(())
}

#[test]
fn test_config_default_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lochelperrc.json", r#"{ "defaultTable": "Main" }"#)?;
    test.write_file("src/Home.m", r#"NSLocalizedString(@"Hello", @"greeting");"#)?;

    let output = test.sync_command(&[]).output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.read_strings("out/Main.strings")?.contains_key("Hello"));
    assert!(!test.root().join("out/Localizable.strings").exists());
    Ok(())
}

#[test]
fn test_missing_exporter_fails_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lochelperrc.json",
        r#"{ "exporter": "/nonexistent/ibtool" }"#,
    )?;
    test.write_file("src/Home.m", r#"NSLocalizedString(@"Hello", @"greeting");"#)?;
    test.write_file("src/Main.storyboard", "<document/>")?;

    let output = test.sync_command(&[]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("/nonexistent/ibtool"));
    assert!(!test.root().join("out").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_interface_strings_from_exporter() -> Result<()> {
    use std::{fs, os::unix::fs::PermissionsExt};

    let test = CliTest::new()?;
    test.write_strings(
        "fixtures/exported.strings",
        &[(
            "Xyz-1a.text",
            "Welcome",
            "Class = \"UILabel\"; text = \"Welcome\"; ObjectID = \"Xyz-1a\";",
        )],
    )?;
    // Mimics `ibtool --export-strings-file <dest> <file>` by copying the fixture.
    test.write_file(
        "fixtures/fake-ibtool",
        &format!(
            "#!/bin/sh\n/bin/cp \"{}\" \"$2\"\n",
            test.root().join("fixtures/exported.strings").display()
        ),
    )?;
    let exporter = test.root().join("fixtures/fake-ibtool");
    fs::set_permissions(&exporter, fs::Permissions::from_mode(0o755))?;
    test.write_file(
        ".lochelperrc.json",
        &format!(r#"{{ "exporter": "{}" }}"#, exporter.display()),
    )?;
    test.write_file("src/Welcome.xib", "<document/>")?;

    let output = test.sync_command(&[]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let ui = test.read_strings("out/UI_Autogenerated.strings")?;
    assert_eq!(ui["Xyz-1a.text"].value, "Welcome");
    assert!(stdout(&output).contains("Scanned 0 source files, 1 interface file"));
    Ok(())
}
