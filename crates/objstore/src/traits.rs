//! The bucket capability implemented by every storage backend.

use std::io::Read;

use crate::error::{ObjStoreError, ObjStoreResult};
use crate::reader::ObjectReader;

/// Read side of a bucket.
///
/// Implementations must be thread-safe (`Send + Sync`). Keys are flat; the
/// only hierarchy is the one [`BucketReader::iter`] derives from
/// [`crate::DIR_DELIM`].
pub trait BucketReader: Send + Sync {
    /// Call `f` for each entry directly under `dir`.
    ///
    /// The argument to `f` is the full entry name including `dir`. Entries
    /// ending in the delimiter are directories. Iteration stops at the first
    /// error returned by `f`, and that error is returned unchanged.
    fn iter(&self, dir: &str, f: &mut dyn FnMut(&str) -> ObjStoreResult<()>)
        -> ObjStoreResult<()>;

    /// Return a reader over the whole object.
    fn get(&self, name: &str) -> ObjStoreResult<ObjectReader>;

    /// Return a reader over `length` bytes starting at `off`.
    ///
    /// Ranges running past the end of the object are truncated.
    fn get_range(&self, name: &str, off: u64, length: u64) -> ObjStoreResult<ObjectReader>;

    /// Check whether an object with exactly this key exists.
    fn exists(&self, name: &str) -> ObjStoreResult<bool>;

    /// Returns `true` if `err` is this backend's not-found error.
    fn is_obj_not_found_err(&self, err: &ObjStoreError) -> bool;
}

/// Full read-write bucket.
pub trait Bucket: BucketReader {
    /// Store the entire contents of `r` under `name`, replacing any
    /// existing object.
    fn upload(&self, name: &str, r: &mut dyn Read) -> ObjStoreResult<()>;

    /// Remove the object stored under exactly `name`.
    fn delete(&self, name: &str) -> ObjStoreResult<()>;

    /// Identifier of the backend, used for logging.
    fn name(&self) -> &str;

    /// Release backend resources.
    fn close(&self) -> ObjStoreResult<()>;
}
