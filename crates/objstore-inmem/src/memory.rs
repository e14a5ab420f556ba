//! In-memory bucket for tests and embedding.
//!
//! [`InMemBucket`] keeps every object in a `HashMap` behind a `RwLock`. It
//! implements the full [`Bucket`] trait, including directory-style listing,
//! and loses all data when dropped.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bytes::Bytes;
use objstore::{Bucket, BucketReader, ObjStoreError, ObjStoreResult, ObjectReader};
use tracing::debug;

use crate::listing;

/// Name reported by every [`InMemBucket`].
pub const BUCKET_NAME: &str = "inmem";

/// A naive in-memory [`Bucket`].
///
/// Objects are stored as [`Bytes`], so readers handed out by `get` and
/// `get_range` are snapshots that later uploads or deletes cannot change.
pub struct InMemBucket {
    objects: RwLock<HashMap<String, Bytes>>,
}

impl InMemBucket {
    /// Create a new empty bucket.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// The stored objects, for assertions in tests.
    ///
    /// The returned guard holds the read lock; drop it before mutating the
    /// bucket from the same thread.
    pub fn objects(&self) -> ObjStoreResult<RwLockReadGuard<'_, HashMap<String, Bytes>>> {
        self.objects
            .read()
            .map_err(|e| ObjStoreError::LockPoisoned(e.to_string()))
    }

    /// A copy of the stored objects that holds no lock.
    ///
    /// Payloads are reference-counted, so this only clones keys.
    pub fn objects_snapshot(&self) -> ObjStoreResult<HashMap<String, Bytes>> {
        Ok(self.objects()?.clone())
    }

    fn objects_mut(&self) -> ObjStoreResult<RwLockWriteGuard<'_, HashMap<String, Bytes>>> {
        self.objects
            .write()
            .map_err(|e| ObjStoreError::LockPoisoned(e.to_string()))
    }

    fn payload(&self, name: &str) -> ObjStoreResult<Bytes> {
        if name.is_empty() {
            return Err(ObjStoreError::InvalidArgument(
                "object name is empty".into(),
            ));
        }
        self.objects()?
            .get(name)
            .cloned()
            .ok_or(ObjStoreError::NotFound)
    }
}

impl Default for InMemBucket {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketReader for InMemBucket {
    fn iter(
        &self,
        dir: &str,
        f: &mut dyn FnMut(&str) -> ObjStoreResult<()>,
    ) -> ObjStoreResult<()> {
        // Release the lock before visiting so `f` may mutate the bucket.
        let entries = {
            let objects = self.objects()?;
            listing::list_entries(objects.keys().map(String::as_str), dir)
        };
        debug!(dir, entries = entries.len(), "listing bucket");

        for entry in &entries {
            f(entry)?;
        }
        Ok(())
    }

    fn get(&self, name: &str) -> ObjStoreResult<ObjectReader> {
        Ok(ObjectReader::new(self.payload(name)?))
    }

    fn get_range(&self, name: &str, off: u64, length: u64) -> ObjStoreResult<ObjectReader> {
        let data = self.payload(name)?;
        let len = data.len() as u64;
        if len < off {
            return Err(ObjStoreError::InvalidArgument(format!(
                "offset larger than content length. Len {len}. Offset: {off}"
            )));
        }

        let mut length = length;
        if len <= off.saturating_add(length) {
            // Just return the maximum of what we have.
            length = len - off;
        }

        let start = off as usize;
        let end = start + length as usize;
        Ok(ObjectReader::new(data.slice(start..end)))
    }

    fn exists(&self, name: &str) -> ObjStoreResult<bool> {
        Ok(self.objects()?.contains_key(name))
    }

    fn is_obj_not_found_err(&self, err: &ObjStoreError) -> bool {
        matches!(err, ObjStoreError::NotFound)
    }
}

impl Bucket for InMemBucket {
    fn upload(&self, name: &str, r: &mut dyn Read) -> ObjStoreResult<()> {
        let mut body = Vec::new();
        r.read_to_end(&mut body).map_err(ObjStoreError::UploadRead)?;

        let size = body.len();
        self.objects_mut()?.insert(name.to_string(), Bytes::from(body));
        debug!(name, size, "uploaded object");
        Ok(())
    }

    fn delete(&self, name: &str) -> ObjStoreResult<()> {
        if self.objects_mut()?.remove(name).is_none() {
            return Err(ObjStoreError::NotFound);
        }
        debug!(name, "deleted object");
        Ok(())
    }

    fn name(&self) -> &str {
        BUCKET_NAME
    }

    fn close(&self) -> ObjStoreResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for InMemBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.objects.read().map(|m| m.len()).ok();
        f.debug_struct("InMemBucket")
            .field("object_count", &count)
            .finish()
    }
}
