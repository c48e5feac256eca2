use listcat::{ListcatBuilder, ListcatError, create_listing};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_two_runs_append() {
    let src = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("listing.txt");
    fs::write(src.path().join("main.rs"), "fn main() {}").unwrap();
    fs::create_dir(src.path().join("src")).unwrap();
    fs::write(src.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    let options = ListcatBuilder::new(src.path()).output(&out).build();
    let first = create_listing(&options).unwrap();
    assert_eq!(first.written(), 2);
    let after_first = fs::read_to_string(&out).unwrap();
    create_listing(&options).unwrap();
    let after_second = fs::read_to_string(&out).unwrap();
    assert!(after_second.starts_with(&after_first));
    assert_eq!(after_second.len(), after_first.len() * 2);
}
#[test]
fn integration_existing_content_is_kept() {
    let src = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("listing.txt");
    fs::write(&out, "previous run\n").unwrap();
    fs::write(src.path().join("a.txt"), "new").unwrap();
    let options = ListcatBuilder::new(src.path()).output(&out).build();
    create_listing(&options).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("previous run\n"));
    assert!(content.ends_with("new"));
}
#[test]
fn integration_output_inside_root_is_skipped() {
    let src = tempdir().unwrap();
    let out = src.path().join("out.txt");
    fs::write(src.path().join("a.txt"), "alpha").unwrap();
    let options = ListcatBuilder::new(src.path())
        .output(&out)
        .skip_output_file(true)
        .build();
    let summary = create_listing(&options).unwrap();
    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.skipped, 1);
    let content = fs::read_to_string(&out).unwrap();
    assert!(!content.contains(&out.to_string_lossy().into_owned()));
}
#[test]
fn integration_output_inside_root_is_listed_by_default() {
    let src = tempdir().unwrap();
    let out = src.path().join("out.txt");
    fs::write(&out, "previous run").unwrap();
    fs::write(src.path().join("a.txt"), "alpha").unwrap();
    let options = ListcatBuilder::new(src.path()).output(&out).build();
    let summary = create_listing(&options).unwrap();
    assert_eq!(summary.discovered, 2);
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, 0);
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("previous run"));
    assert!(content.contains(&out.to_string_lossy().into_owned()));
    assert!(content.contains("alpha"));
}
#[test]
fn integration_failed_file_does_not_abort_run() {
    let src = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("listing.txt");
    fs::write(src.path().join("a.txt"), "first").unwrap();
    fs::write(src.path().join("b.txt"), [0x80, 0x81]).unwrap();
    fs::write(src.path().join("c.txt"), "third").unwrap();
    let options = ListcatBuilder::new(src.path()).output(&out).build();
    let summary = create_listing(&options).unwrap();
    assert_eq!(summary.failed, 1);
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("first"));
    assert!(content.contains("third"));
    assert!(!content.contains("b.txt"));
}
#[test]
fn integration_unopenable_output_is_fatal() {
    let src = tempdir().unwrap();
    fs::write(src.path().join("a.txt"), "a").unwrap();
    let out = src.path().join("missing-dir").join("out.txt");
    let options = ListcatBuilder::new(src.path()).output(&out).build();
    let err = create_listing(&options).unwrap_err();
    assert!(matches!(err, ListcatError::Output { .. }));
}
#[test]
fn integration_missing_root_creates_no_output() {
    let src = tempdir().unwrap();
    let out = src.path().join("out.txt");
    let options = ListcatBuilder::new(src.path().join("gone"))
        .output(&out)
        .build();
    assert!(create_listing(&options).is_err());
    assert!(!out.exists());
}
