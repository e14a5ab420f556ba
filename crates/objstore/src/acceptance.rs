//! Backend-agnostic acceptance suite.
//!
//! Every [`Bucket`] implementation should pass [`acceptance_test`] when
//! handed an empty bucket. Failures panic, so call it from a `#[test]`.

use std::io::Read;

use crate::error::ObjStoreResult;
use crate::traits::Bucket;

/// Collect the entries visited by `iter`.
pub fn list(bkt: &dyn Bucket, dir: &str) -> ObjStoreResult<Vec<String>> {
    let mut seen = Vec::new();
    bkt.iter(dir, &mut |name| {
        seen.push(name.to_string());
        Ok(())
    })?;
    Ok(seen)
}

fn read_all(bkt: &dyn Bucket, name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    bkt.get(name)
        .expect("get should succeed")
        .read_to_end(&mut buf)
        .expect("reader should drain");
    buf
}

fn read_range(bkt: &dyn Bucket, name: &str, off: u64, length: u64) -> Vec<u8> {
    let mut buf = Vec::new();
    bkt.get_range(name, off, length)
        .expect("get_range should succeed")
        .read_to_end(&mut buf)
        .expect("reader should drain");
    buf
}

/// Run the shared bucket contract against an empty `bkt`.
pub fn acceptance_test(bkt: &dyn Bucket) {
    let missing = "id1/obj_1.some";

    let err = bkt.get(missing).expect_err("missing object");
    assert!(bkt.is_obj_not_found_err(&err), "get: {err}");
    let err = bkt.get_range(missing, 1, 2).expect_err("missing object");
    assert!(bkt.is_obj_not_found_err(&err), "get_range: {err}");
    assert!(!bkt.exists(missing).unwrap());

    bkt.upload(missing, &mut &b"@test-data@"[..]).unwrap();
    assert!(bkt.exists(missing).unwrap());
    assert_eq!(read_all(bkt, missing), b"@test-data@");

    assert_eq!(read_range(bkt, missing, 1, 3), b"tes");
    assert_eq!(read_range(bkt, missing, 3, 100), b"st-data@");
    assert_eq!(read_range(bkt, missing, 11, 5), b"");
    assert!(!bkt.is_obj_not_found_err(
        &bkt.get_range(missing, 12, 1).expect_err("offset past end")
    ));

    // Overwrite with identical and different content.
    bkt.upload(missing, &mut &b"@test-data@"[..]).unwrap();
    assert_eq!(read_all(bkt, missing), b"@test-data@");
    bkt.upload(missing, &mut &b"@test-data2@"[..]).unwrap();
    assert_eq!(read_all(bkt, missing), b"@test-data2@");

    bkt.upload("id1/obj_2.some", &mut &b"@test-data2@"[..]).unwrap();
    bkt.upload("id1/obj_3.some", &mut &b"@test-data3@"[..]).unwrap();
    bkt.upload("id1/sub/subobj_1.some", &mut &b"@test-data4@"[..]).unwrap();
    bkt.upload("id2/obj_4.some", &mut &b"@test-data4@"[..]).unwrap();
    bkt.upload("obj_5.some", &mut &b"@test-data5@"[..]).unwrap();

    assert_eq!(list(bkt, "").unwrap(), vec!["id1/", "id2/", "obj_5.some"]);
    assert_eq!(
        list(bkt, "id1/").unwrap(),
        vec![
            "id1/sub/",
            "id1/obj_1.some",
            "id1/obj_2.some",
            "id1/obj_3.some"
        ]
    );
    assert_eq!(list(bkt, "id1/sub/").unwrap(), vec!["id1/sub/subobj_1.some"]);
    assert!(list(bkt, "id0/").unwrap().is_empty());

    bkt.delete("id1/obj_2.some").unwrap();
    let err = bkt.delete("id1/obj_2.some").expect_err("already deleted");
    assert!(bkt.is_obj_not_found_err(&err), "delete: {err}");
    assert!(!bkt.exists("id1/obj_2.some").unwrap());
    assert_eq!(
        list(bkt, "id1/").unwrap(),
        vec!["id1/sub/", "id1/obj_1.some", "id1/obj_3.some"]
    );

    bkt.close().unwrap();
}
