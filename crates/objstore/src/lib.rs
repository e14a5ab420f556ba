//! Object storage bucket abstraction.
//!
//! Object stores expose a flat namespace of opaque keys. This crate defines
//! the capability every backend provides on top of that namespace, plus the
//! directory-style helpers that only need the capability itself.
//!
//! # Modules
//!
//! - [`error`] — [`ObjStoreError`] taxonomy, including the not-found sentinel
//! - [`traits`] — [`BucketReader`] and [`Bucket`]
//! - [`reader`] — [`ObjectReader`], the byte stream returned by reads
//! - [`helpers`] — recursive delete, file and directory upload/download
//!
//! # Keys
//!
//! Keys are segments joined by [`DIR_DELIM`]. Directories are never stored;
//! listing derives them from the keys that share a prefix.

#[cfg(feature = "testing")]
pub mod acceptance;
pub mod error;
pub mod helpers;
pub mod reader;
pub mod traits;

pub use error::{ObjStoreError, ObjStoreResult};
pub use helpers::{delete_dir, download_dir, download_file, upload_dir, upload_file};
pub use reader::ObjectReader;
pub use traits::{Bucket, BucketReader};

/// Delimiter separating the segments of an object key.
pub const DIR_DELIM: &str = "/";
