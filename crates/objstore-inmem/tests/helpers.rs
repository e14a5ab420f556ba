use std::fs;
use std::io::Read;

use objstore::acceptance::list;
use objstore::{
    delete_dir, download_dir, download_file, upload_dir, upload_file, Bucket, BucketReader,
    ObjStoreError,
};
use objstore_inmem::InMemBucket;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn bucket_with(objects: &[(&str, &str)]) -> InMemBucket {
    let bkt = InMemBucket::new();
    for (name, data) in objects {
        bkt.upload(name, &mut data.as_bytes()).unwrap();
    }
    bkt
}

fn read_string(bkt: &InMemBucket, name: &str) -> String {
    let mut out = String::new();
    bkt.get(name).unwrap().read_to_string(&mut out).unwrap();
    out
}

#[test]
fn delete_dir_removes_everything_below_prefix() {
    init_tracing();
    let bkt = bucket_with(&[
        ("a/1", "x"),
        ("a/b/2", "x"),
        ("a/b/c/3", "x"),
        ("a/", "dir marker"),
        ("ab/4", "x"),
        ("z", "x"),
    ]);

    delete_dir(&bkt, "a").unwrap();

    let mut remaining: Vec<String> = bkt.objects_snapshot().unwrap().into_keys().collect();
    remaining.sort();
    assert_eq!(remaining, vec!["a/", "ab/4", "z"]);
}

#[test]
fn delete_dir_on_empty_prefix_clears_bucket() {
    init_tracing();
    let bkt = bucket_with(&[("x/y/", "marker"), ("x/y/z", "1"), ("w", "2")]);
    delete_dir(&bkt, "").unwrap();
    assert!(bkt.objects_snapshot().unwrap().is_empty());
}

#[test]
fn delete_dir_of_missing_prefix_is_noop() {
    let bkt = bucket_with(&[("keep/me", "1")]);
    delete_dir(&bkt, "nothing/here/").unwrap();
    assert!(bkt.exists("keep/me").unwrap());
}

#[test]
fn upload_and_download_single_file() {
    init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src.txt");
    fs::write(&src, "file contents").unwrap();

    let bkt = InMemBucket::new();
    upload_file(&bkt, &src, "docs/src.txt").unwrap();
    assert_eq!(read_string(&bkt, "docs/src.txt"), "file contents");

    let out_dir = tmp.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    // Existing directory: base name is appended.
    let written = download_file(&bkt, "docs/src.txt", &out_dir).unwrap();
    assert_eq!(written, out_dir.join("src.txt"));
    assert_eq!(
        fs::read_to_string(out_dir.join("src.txt")).unwrap(),
        "file contents"
    );

    let renamed = tmp.path().join("renamed.txt");
    let written = download_file(&bkt, "docs/src.txt", &renamed).unwrap();
    assert_eq!(written, renamed);
    assert_eq!(fs::read_to_string(renamed).unwrap(), "file contents");
}

#[test]
fn upload_missing_file_fails_with_io() {
    let tmp = tempfile::tempdir().unwrap();
    let bkt = InMemBucket::new();
    let err = upload_file(&bkt, &tmp.path().join("absent"), "k").unwrap_err();
    assert!(matches!(err, ObjStoreError::Io(_)));
    assert!(!bkt.exists("k").unwrap());
}

#[test]
fn download_missing_object_leaves_no_file() {
    let tmp = tempfile::tempdir().unwrap();
    let bkt = InMemBucket::new();
    let dst = tmp.path().join("missing.txt");

    let err = download_file(&bkt, "missing.txt", &dst).unwrap_err();
    assert!(bkt.is_obj_not_found_err(&err));
    assert!(!dst.exists());
}

#[test]
fn upload_dir_and_download_dir_round_trip() {
    init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir_all(src.join("nested").join("deeper")).unwrap();
    fs::write(src.join("top.txt"), "top").unwrap();
    fs::write(src.join("nested").join("mid.txt"), "mid").unwrap();
    fs::write(src.join("nested").join("deeper").join("low.txt"), "low").unwrap();

    let bkt = InMemBucket::new();
    upload_dir(&bkt, &src, "backup").unwrap();

    assert_eq!(list(&bkt, "backup/").unwrap(), vec!["backup/nested/", "backup/top.txt"]);
    assert_eq!(read_string(&bkt, "backup/nested/deeper/low.txt"), "low");

    let dst = tmp.path().join("dst");
    download_dir(&bkt, "backup", &dst).unwrap();
    assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
    assert_eq!(
        fs::read_to_string(dst.join("nested").join("mid.txt")).unwrap(),
        "mid"
    );
    assert_eq!(
        fs::read_to_string(dst.join("nested").join("deeper").join("low.txt")).unwrap(),
        "low"
    );
}

#[test]
fn upload_dir_rejects_file_source() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    let bkt = InMemBucket::new();
    let err = upload_dir(&bkt, &file, "dst").unwrap_err();
    assert!(matches!(err, ObjStoreError::InvalidArgument(_)));
}

#[test]
fn download_dir_cleans_up_on_failure() {
    init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let dst = tmp.path().join("dst");
    fs::create_dir_all(&dst).unwrap();
    // A plain file where "d/x/" needs a directory: "d/a/1" is downloaded
    // first, then creating the directory for "d/x/" fails.
    fs::write(dst.join("x"), "in the way").unwrap();
    let bkt = bucket_with(&[("d/a/1", "1"), ("d/x/y", "2")]);

    let err = download_dir(&bkt, "d/", &dst).unwrap_err();
    assert!(matches!(err, ObjStoreError::Io(_)));
    assert!(!dst.join("a").join("1").exists());
    assert_eq!(fs::read_to_string(dst.join("x")).unwrap(), "in the way");
}

#[test]
fn download_dir_cleans_up_leaf_written_inside_directory() {
    init_tracing();
    let tmp = tempfile::tempdir().unwrap();
    let dst = tmp.path().join("dst");
    // "d/a/" creates dst/a, so the leaf "d/a" lands at dst/a/a. The
    // directory at dst/b/b makes the later "d/b" download fail.
    fs::create_dir_all(dst.join("b").join("b")).unwrap();
    let bkt = bucket_with(&[("d/a/1", "1"), ("d/a", "2"), ("d/b", "3")]);

    let err = download_dir(&bkt, "d/", &dst).unwrap_err();
    assert!(matches!(err, ObjStoreError::Io(_)));
    assert!(!dst.join("a").join("1").exists());
    assert!(!dst.join("a").join("a").exists());
}
