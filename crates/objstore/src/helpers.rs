//! Directory-style operations built on top of any [`Bucket`].
//!
//! Buckets only know flat keys. These helpers use [`BucketReader::iter`] to
//! walk the derived hierarchy and move whole trees between a bucket and the
//! local filesystem.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ObjStoreError, ObjStoreResult};
use crate::traits::{Bucket, BucketReader};
use crate::DIR_DELIM;

/// Recursively delete every object under `dir`.
///
/// Unlike [`Bucket::delete`], which removes one exact key, this removes
/// everything the listing of `dir` reaches, descending into directory
/// entries.
pub fn delete_dir(bkt: &dyn Bucket, dir: &str) -> ObjStoreResult<()> {
    let dir = dir_prefix(dir);
    bkt.iter(&dir, &mut |name| {
        if name.ends_with(DIR_DELIM) {
            delete_dir(bkt, name)?;
            // A key may itself end in the delimiter; listing never yields it
            // as its own child.
            return match bkt.delete(name) {
                Err(e) if bkt.is_obj_not_found_err(&e) => Ok(()),
                res => res,
            };
        }
        bkt.delete(name)?;
        debug!(file = name, bucket = bkt.name(), "deleted file");
        Ok(())
    })
}

/// Upload a single local file to `dst`.
pub fn upload_file(bkt: &dyn Bucket, src: &Path, dst: &str) -> ObjStoreResult<()> {
    let mut file = File::open(src)?;
    bkt.upload(dst, &mut file)?;
    debug!(src = %src.display(), dst, bucket = bkt.name(), "uploaded file");
    Ok(())
}

/// Upload every regular file below `src_dir` to `dst_dir`.
///
/// Relative paths are converted to keys using [`DIR_DELIM`], so
/// `src_dir/a/b.txt` lands at `dst_dir/a/b.txt`.
pub fn upload_dir(bkt: &dyn Bucket, src_dir: &Path, dst_dir: &str) -> ObjStoreResult<()> {
    if !src_dir.is_dir() {
        return Err(ObjStoreError::InvalidArgument(format!(
            "{} is not a directory",
            src_dir.display()
        )));
    }

    for entry in WalkDir::new(src_dir).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(|e| ObjStoreError::InvalidArgument(e.to_string()))?;
        upload_file(bkt, entry.path(), &join_key(dst_dir, &path_to_key(rel)))?;
    }
    Ok(())
}

/// Download the object `src` into the local file `dst`.
///
/// If `dst` is an existing directory the object's base name is appended.
/// Returns the path actually written. A partially written file is removed
/// on failure.
pub fn download_file(bkt: &dyn Bucket, src: &str, dst: &Path) -> ObjStoreResult<PathBuf> {
    let dst = if dst.is_dir() {
        dst.join(base_name(src))
    } else {
        dst.to_path_buf()
    };

    let mut reader = bkt.get(src)?;
    let mut file = File::create(&dst)?;
    if let Err(e) = io::copy(&mut reader, &mut file).and_then(|_| file.sync_all()) {
        drop(file);
        if let Err(rm) = fs::remove_file(&dst) {
            warn!(path = %dst.display(), error = %rm, "failed to remove partial download");
        }
        return Err(e.into());
    }

    debug!(src, dst = %dst.display(), bucket = bkt.name(), "downloaded file");
    Ok(dst)
}

/// Download every object under `src` into `dst`, recreating the hierarchy.
///
/// On failure, files written by this call are removed again.
pub fn download_dir(bkt: &dyn Bucket, src: &str, dst: &Path) -> ObjStoreResult<()> {
    let mut downloaded = Vec::new();
    let res = download_dir_into(bkt, src, dst, &mut downloaded);
    if res.is_err() {
        for path in &downloaded {
            if let Err(rm) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %rm, "failed to clean up download");
            }
        }
    }
    res
}

fn download_dir_into(
    bkt: &dyn Bucket,
    src: &str,
    dst: &Path,
    downloaded: &mut Vec<PathBuf>,
) -> ObjStoreResult<()> {
    fs::create_dir_all(dst)?;

    let src = dir_prefix(src);
    bkt.iter(&src, &mut |name| {
        let target = dst.join(base_name(name));
        if name.ends_with(DIR_DELIM) {
            return download_dir_into(bkt, name, &target, downloaded);
        }
        downloaded.push(download_file(bkt, name, &target)?);
        Ok(())
    })
}

/// Ensure a non-empty directory name ends with the delimiter.
fn dir_prefix(dir: &str) -> String {
    if dir.is_empty() || dir.ends_with(DIR_DELIM) {
        dir.to_string()
    } else {
        format!("{dir}{DIR_DELIM}")
    }
}

fn join_key(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches(DIR_DELIM);
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}{DIR_DELIM}{name}")
    }
}

/// Last segment of a key, ignoring a trailing delimiter.
fn base_name(key: &str) -> &str {
    let trimmed = key.trim_end_matches(DIR_DELIM);
    trimmed.rsplit(DIR_DELIM).next().unwrap_or(trimmed)
}

fn path_to_key(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(DIR_DELIM)
}
