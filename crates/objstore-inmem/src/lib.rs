//! In-memory object storage bucket.
//!
//! [`InMemBucket`] implements [`objstore::Bucket`] on top of a local map so
//! code written against object storage can run in tests without a network
//! or a storage service.
//!
//! # Directory emulation
//!
//! Keys are flat. [`objstore::BucketReader::iter`] derives one level of
//! hierarchy per call from the keys sharing a prefix:
//!
//! ```
//! use objstore::{Bucket, BucketReader};
//! use objstore_inmem::InMemBucket;
//!
//! let bkt = InMemBucket::new();
//! bkt.upload("dir1/obj1", &mut &b"hello"[..]).unwrap();
//! bkt.upload("dir1/obj2", &mut &b"world"[..]).unwrap();
//! bkt.upload("dir2/obj3", &mut &b"!"[..]).unwrap();
//!
//! let mut top = Vec::new();
//! bkt.iter("", &mut |name| {
//!     top.push(name.to_string());
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(top, ["dir1/", "dir2/"]);
//! ```

pub mod config;
pub mod listing;
pub mod memory;

pub use config::{new_bucket, BucketConfig, Provider};
pub use memory::{InMemBucket, BUCKET_NAME};
