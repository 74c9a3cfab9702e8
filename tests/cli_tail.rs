use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use filetime::FileTime;
use flate2::Compression;
use flate2::write::GzEncoder;

fn logtail() -> Command {
    Command::cargo_bin("logtail").expect("binary built")
}

fn append(path: &Path, content: &str) {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .expect("open for append");
    file.write_all(content.as_bytes()).expect("append");
}

fn gz_file(path: &Path, content: &[u8]) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content).expect("compress");
    fs::write(path, encoder.finish().expect("finish")).expect("write gz");
}

fn set_mtime(path: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0)).expect("set mtime");
}

#[test]
fn repeated_runs_deliver_appends_exactly_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log = temp.path().join("app.log");
    fs::write(&log, "one\n").expect("write");

    logtail().arg(&log).assert().success().stdout("one\n");
    logtail().arg(&log).assert().success().stdout("");

    append(&log, "two\n");
    logtail().arg(&log).assert().success().stdout("two\n");
}

#[test]
fn rename_rotation_is_reconciled_across_runs() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log = temp.path().join("app.log");
    fs::write(&log, "alpha\n").expect("write");

    logtail().arg(&log).assert().success().stdout("alpha\n");

    append(&log, "beta\n");
    fs::rename(&log, temp.path().join("app.log.1")).expect("rotate");
    fs::write(&log, "gamma\n").expect("recreate");

    logtail().arg(&log).assert().success().stdout("beta\ngamma\n");
    logtail().arg(&log).assert().success().stdout("");

    append(&log, "delta\n");
    logtail().arg(&log).assert().success().stdout("delta\n");
}

#[test]
fn savelog_pair_with_fresh_zero_is_drained() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log = temp.path().join("app.log");
    fs::write(&log, "kept\n").expect("write");

    logtail().arg(&log).assert().success().stdout("kept\n");

    append(&log, "unread\n");
    let zero = temp.path().join("app.log.0");
    fs::rename(&log, &zero).expect("rotate to .0");
    gz_file(&temp.path().join("app.log.1.gz"), b"long gone\n");
    set_mtime(&zero, 2_000);
    set_mtime(&temp.path().join("app.log.1.gz"), 1_000);
    fs::write(&log, "fresh\n").expect("recreate");

    logtail().arg(&log).assert().success().stdout("unread\nfresh\n");
}

#[test]
fn copytruncate_content_is_not_redelivered() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log = temp.path().join("app.log");
    fs::write(&log, "first-take\n").expect("write");

    logtail().arg(&log).assert().success().stdout("first-take\n");

    fs::copy(&log, temp.path().join("app.log.1")).expect("copy aside");
    fs::write(&log, "second\n").expect("truncate in place");

    logtail().arg(&log).assert().success().stdout("second\n");
}

#[test]
fn offset_file_flag_relocates_the_sidecar() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log = temp.path().join("app.log");
    let state = temp.path().join("app.state");
    fs::write(&log, "payload\n").expect("write");

    logtail()
        .arg(&log)
        .arg("--offset-file")
        .arg(&state)
        .assert()
        .success()
        .stdout("payload\n");
    assert!(state.exists(), "sidecar lands at the explicit path");
    assert!(
        !temp.path().join("app.log.offset").exists(),
        "default sidecar stays absent"
    );

    logtail()
        .arg(&log)
        .arg("--offset-file")
        .arg(&state)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn extra_pattern_flag_probes_custom_names() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log = temp.path().join("app.log");
    fs::write(&log, "one\n").expect("write");

    logtail().arg(&log).assert().success().stdout("one\n");

    append(&log, "two\n");
    fs::rename(&log, temp.path().join("app.log.archived")).expect("rotate");
    fs::write(&log, "three\n").expect("recreate");

    logtail()
        .arg(&log)
        .args(["--pattern", r"\.archived"])
        .assert()
        .success()
        .stdout("two\nthree\n");
}

#[test]
fn gzip_log_is_decompressed_transparently() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log = temp.path().join("app.log.gz");
    gz_file(&log, b"zipped\n");

    logtail().arg(&log).assert().success().stdout("zipped\n");
    logtail().arg(&log).assert().success().stdout("");
}
