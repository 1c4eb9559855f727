use assert_cmd::Command;

/*-------------------------------------------------------------------------------------------------
  asnranges Binary Tests
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("asnranges")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Help
--------------------------------------------------------------------------------------*/

#[test]
fn command_help() {
    Command::cargo_bin("asnranges")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  No Arguments - Interactive Session Ends Cleanly on EOF
--------------------------------------------------------------------------------------*/

#[test]
fn command_no_args_empty_stdin() {
    Command::cargo_bin("asnranges")
        .unwrap()
        .write_stdin("")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Invalid Batch Arguments Fail Before Any Fetch
--------------------------------------------------------------------------------------*/

#[test]
fn command_invalid_asn_argument() {
    Command::cargo_bin("asnranges")
        .unwrap()
        .arg("--asn")
        .arg("not-a-number")
        .assert()
        .failure();
}

#[test]
fn command_invalid_page_range() {
    Command::cargo_bin("asnranges")
        .unwrap()
        .arg("--pages")
        .arg("9-1")
        .assert()
        .failure();
}

#[test]
fn command_missing_asn_file() {
    Command::cargo_bin("asnranges")
        .unwrap()
        .arg("--asn-file")
        .arg("./does-not-exist.txt")
        .assert()
        .failure();
}
