use std::fs;
use std::path::{Path, PathBuf};

use access::{FileAccess, LocalFs};
use cursor::Cursor;
use filetime::FileTime;

use crate::{PatternSet, Rotation, RotationError, classify, find_predecessor, suspect_rotation};

fn set_mtime(path: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0)).expect("set mtime");
}

fn inode_of(path: &Path) -> u64 {
    LocalFs::new().inode(path).expect("inode")
}

fn probe(dir: &Path) -> Option<PathBuf> {
    find_predecessor(&LocalFs::new(), dir, "app.log", &PatternSet::builtin()).expect("probe")
}

#[test]
fn suspicion_requires_inode_change_or_shrink() {
    let cursor = Cursor {
        inode: 7,
        offset: 100,
    };
    assert!(!suspect_rotation(7, 100, cursor), "steady state");
    assert!(!suspect_rotation(7, 150, cursor), "growth is not rotation");
    assert!(suspect_rotation(8, 150, cursor), "inode change");
    assert!(suspect_rotation(7, 99, cursor), "shrink below offset");
}

#[test]
fn fresh_cursor_never_suspects_rotation() {
    assert!(!suspect_rotation(42, 10, Cursor::start()));
}

#[test]
fn numeric_pair_with_fresh_zero_wins() {
    let temp = tempfile::tempdir().expect("tempdir");
    let zero = temp.path().join("app.log.0");
    let one_gz = temp.path().join("app.log.1.gz");
    fs::write(&zero, b"rotated").expect("write .0");
    fs::write(&one_gz, b"older").expect("write .1.gz");
    set_mtime(&zero, 2_000);
    set_mtime(&one_gz, 1_000);

    assert_eq!(probe(temp.path()), Some(zero));
}

#[test]
fn stale_numeric_zero_falls_through_to_compressed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let zero = temp.path().join("app.log.0");
    let one_gz = temp.path().join("app.log.1.gz");
    fs::write(&zero, b"old").expect("write .0");
    fs::write(&one_gz, b"newer").expect("write .1.gz");
    set_mtime(&zero, 1_000);
    set_mtime(&one_gz, 2_000);

    assert_eq!(probe(temp.path()), Some(one_gz));
}

#[test]
fn equal_mtimes_do_not_select_numeric_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    let zero = temp.path().join("app.log.0");
    let one_gz = temp.path().join("app.log.1.gz");
    fs::write(&zero, b"tied").expect("write .0");
    fs::write(&one_gz, b"tied").expect("write .1.gz");
    set_mtime(&zero, 1_500);
    set_mtime(&one_gz, 1_500);

    assert_eq!(probe(temp.path()), Some(one_gz));
}

#[test]
fn lone_numeric_zero_matches_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log.0"), b"orphan").expect("write .0");

    assert_eq!(probe(temp.path()), None);
}

#[test]
fn plain_one_beats_compressed_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    let one = temp.path().join("app.log.1");
    fs::write(&one, b"delaycompress").expect("write .1");
    fs::write(temp.path().join("app.log.1.gz"), b"compressed").expect("write .1.gz");

    assert_eq!(probe(temp.path()), Some(one));
}

#[test]
fn dated_suffix_picks_lexicographically_greatest() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log-20250101"), b"jan").expect("write jan");
    fs::write(temp.path().join("app.log-20250302"), b"mar").expect("write mar");
    fs::write(temp.path().join("app.log-20241231"), b"dec").expect("write dec");

    assert_eq!(probe(temp.path()), Some(temp.path().join("app.log-20250302")));
}

#[test]
fn earlier_template_shadows_later_ones() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log-20250101"), b"dateext").expect("write dateext");
    fs::write(temp.path().join("app.log.2025-06-30"), b"timed").expect("write timed");

    assert_eq!(probe(temp.path()), Some(temp.path().join("app.log-20250101")));
}

#[test]
fn compressed_dateext_matches_its_own_template() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log-20250101.gz"), b"gz").expect("write");

    assert_eq!(
        probe(temp.path()),
        Some(temp.path().join("app.log-20250101.gz"))
    );
}

#[test]
fn epoch_stamped_names_match() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log-20250101-1735689600"), b"a").expect("write plain");

    assert_eq!(
        probe(temp.path()),
        Some(temp.path().join("app.log-20250101-1735689600"))
    );
}

#[test]
fn timed_handler_suffix_matches() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log.2025-01-05"), b"t").expect("write");

    assert_eq!(
        probe(temp.path()),
        Some(temp.path().join("app.log.2025-01-05"))
    );
}

#[test]
fn templates_match_whole_names_only() {
    let temp = tempfile::tempdir().expect("tempdir");
    for name in [
        "app.log.backup",
        "app.log-2025010",
        "app.log-20250101x",
        "xapp.log-20250101",
        "app.log2-20250101",
    ] {
        fs::write(temp.path().join(name), b"noise").expect("write noise");
    }

    assert_eq!(probe(temp.path()), None);
}

#[test]
fn extras_run_after_builtins() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log-old"), b"custom").expect("write custom");

    let provider = LocalFs::new();
    let patterns = PatternSet::with_extras(["-old"]).expect("patterns");
    assert!(patterns.has_extras());

    let found = find_predecessor(&provider, temp.path(), "app.log", &patterns).expect("probe");
    assert_eq!(found, Some(temp.path().join("app.log-old")));

    // A built-in hit still shadows the extra template.
    fs::write(temp.path().join("app.log-20250101"), b"dateext").expect("write dateext");
    let found = find_predecessor(&provider, temp.path(), "app.log", &patterns).expect("probe");
    assert_eq!(found, Some(temp.path().join("app.log-20250101")));
}

#[test]
fn invalid_extra_is_rejected_eagerly() {
    let error = PatternSet::with_extras(["("]).expect_err("bad pattern should fail");
    assert!(matches!(error, RotationError::InvalidPattern { .. }));
    assert!(error.to_string().contains('('));
}

#[test]
fn file_names_with_regex_metacharacters_are_literal() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("app.log-20250101"), b"dot is literal").expect("write");
    // Would match "app.log" too if the dot were a wildcard.
    fs::write(temp.path().join("appxlog-20250101"), b"decoy").expect("write decoy");

    assert_eq!(
        find_predecessor(
            &LocalFs::new(),
            temp.path(),
            "app.log",
            &PatternSet::builtin()
        )
        .expect("probe"),
        Some(temp.path().join("app.log-20250101"))
    );
}

#[test]
fn classify_pure_rotation_on_rename() {
    let temp = tempfile::tempdir().expect("tempdir");
    let live = temp.path().join("app.log");
    let rotated = temp.path().join("app.log.1");
    fs::write(&live, b"first incarnation").expect("write");
    let old_inode = inode_of(&live);
    fs::rename(&live, &rotated).expect("rotate");
    fs::write(&live, b"second").expect("recreate");

    let event = classify(
        &LocalFs::new(),
        temp.path(),
        "app.log",
        &PatternSet::builtin(),
        Cursor {
            inode: old_inode,
            offset: 5,
        },
        inode_of(&live),
    )
    .expect("classify");
    assert_eq!(event, Rotation::Pure { predecessor: rotated });
    assert!(event.occurred());
}

#[test]
fn classify_copytruncate_when_live_inode_matches() {
    let temp = tempfile::tempdir().expect("tempdir");
    let live = temp.path().join("app.log");
    fs::write(&live, b"a longer first incarnation").expect("write");
    let inode = inode_of(&live);
    fs::write(&live, b"short").expect("truncate in place");

    let event = classify(
        &LocalFs::new(),
        temp.path(),
        "app.log",
        &PatternSet::builtin(),
        Cursor { inode, offset: 26 },
        inode_of(&live),
    )
    .expect("classify");
    assert_eq!(event, Rotation::Copytruncate);
}

#[test]
fn classify_copytruncate_ignores_foreign_predecessor() {
    let temp = tempfile::tempdir().expect("tempdir");
    let live = temp.path().join("app.log");
    fs::write(&live, b"original content").expect("write");
    let inode = inode_of(&live);
    // The copy gets its own inode, so it can never satisfy the pure check.
    fs::copy(&live, temp.path().join("app.log.1")).expect("copy");
    fs::write(&live, b"").expect("truncate");

    let event = classify(
        &LocalFs::new(),
        temp.path(),
        "app.log",
        &PatternSet::builtin(),
        Cursor { inode, offset: 16 },
        inode_of(&live),
    )
    .expect("classify");
    assert_eq!(event, Rotation::Copytruncate);
}

#[test]
fn classify_unknown_when_nothing_matches() {
    let temp = tempfile::tempdir().expect("tempdir");
    let live = temp.path().join("app.log");
    let hidden = temp.path().join("app.log.bak");
    fs::write(&live, b"first").expect("write");
    let old_inode = inode_of(&live);
    // `.bak` matches no probe, so the old inode is unreachable.
    fs::rename(&live, &hidden).expect("hide");
    fs::write(&live, b"second").expect("recreate");

    let event = classify(
        &LocalFs::new(),
        temp.path(),
        "app.log",
        &PatternSet::builtin(),
        Cursor {
            inode: old_inode,
            offset: 5,
        },
        inode_of(&live),
    )
    .expect("classify");
    assert_eq!(event, Rotation::Unknown);
}
