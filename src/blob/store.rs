use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use log::debug;
use md5::{Digest, Md5};

use crate::schema::{BlobRef, ByteOrder, GZIP_EXTENSION};

use super::config::CompressionType;
use super::error::BlobError;

/// Hex MD5 of `bytes`; the blob id and file name
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}

/// Counters accumulated by a [`BlobStore`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobStoreStats {
    /// Number of new blobs published
    pub blobs_written: usize,
    /// Number of writes skipped because the blob already existed
    pub blobs_reused: usize,
    /// Uncompressed bytes handed to the store, including reused blobs
    pub raw_bytes: u64,
    /// Bytes actually written to disk
    pub stored_bytes: u64,
}

impl fmt::Display for BlobStoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} blobs written, {} reused, {} raw bytes, {} stored bytes",
            self.blobs_written, self.blobs_reused, self.raw_bytes, self.stored_bytes
        )
    }
}

/// Content-addressed blob pool for one dataset directory
#[derive(Debug)]
pub struct BlobStore {
    /// Directory holding the blobs
    data_dir: PathBuf,

    /// `data_dir` relative to the dataset directory, recorded in every ref
    basepath: String,

    /// Compression applied before publishing
    compression: CompressionType,

    /// Byte order recorded in every ref for this run
    byte_order: ByteOrder,

    /// Accumulated counters
    stats: BlobStoreStats,
}

impl BlobStore {
    /// Open a store over an existing directory
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Directory the blobs are written to
    /// * `basepath` - The same directory relative to the dataset root
    /// * `compression` - Compression for every blob of this run
    /// * `byte_order` - Byte order recorded in every blob reference
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::MissingDirectory`] if `data_dir` is not a directory.
    pub fn new<P: AsRef<Path>>(
        data_dir: P,
        basepath: impl Into<String>,
        compression: CompressionType,
        byte_order: ByteOrder,
    ) -> Result<Self, BlobError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.is_dir() {
            return Err(BlobError::MissingDirectory(
                data_dir.to_string_lossy().to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            basepath: basepath.into(),
            compression,
            byte_order,
            stats: BlobStoreStats::default(),
        })
    }

    /// Directory holding the blobs
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Compression applied to new blobs
    pub fn compression(&self) -> CompressionType {
        self.compression
    }

    /// Byte order recorded in blob references
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Counters so far
    pub fn stats(&self) -> BlobStoreStats {
        self.stats
    }

    /// On-disk path of the blob with the given id
    pub fn blob_path(&self, id: &str) -> PathBuf {
        if self.compression.is_compressed() {
            self.data_dir.join(format!("{}.{}", id, GZIP_EXTENSION))
        } else {
            self.data_dir.join(id)
        }
    }

    /// Store `bytes` unless a blob with the same content already exists.
    ///
    /// The blob is encoded into a temporary file next to its destination and
    /// renamed into place, so only complete blobs are ever visible under
    /// their hash name.
    pub fn write(&mut self, bytes: &[u8]) -> Result<BlobRef, BlobError> {
        let id = content_hash(bytes);
        let target = self.blob_path(&id);
        self.stats.raw_bytes += bytes.len() as u64;

        if target.exists() {
            self.stats.blobs_reused += 1;
            debug!("Blob {} already present, skipping write", id);
            self.remove_uncompressed_sibling(&id)?;
            return Ok(self.blob_ref(id));
        }

        let mut staged = tempfile::Builder::new()
            .prefix(".blob-")
            .suffix(".tmp")
            .tempfile_in(&self.data_dir)?;

        match self.compression {
            CompressionType::Gzip(_) => {
                let mut encoder =
                    GzEncoder::new(staged.as_file_mut(), self.compression.to_flate2());
                encoder.write_all(bytes)?;
                encoder.finish()?;
            }
            CompressionType::Uncompressed => staged.write_all(bytes)?,
        }

        let stored = staged.as_file().metadata()?.len();
        staged.persist(&target).map_err(|e| e.error)?;
        self.remove_uncompressed_sibling(&id)?;

        self.stats.blobs_written += 1;
        self.stats.stored_bytes += stored;
        debug!(
            "Stored blob {} ({} bytes, {} on disk)",
            id,
            bytes.len(),
            stored
        );

        Ok(self.blob_ref(id))
    }

    /// With compression on, drop a bare `<hash>` left by an uncompressed run
    /// so only `.gz` blobs remain
    fn remove_uncompressed_sibling(&self, id: &str) -> Result<(), BlobError> {
        if !self.compression.is_compressed() {
            return Ok(());
        }
        match fs::remove_file(self.data_dir.join(id)) {
            Ok(()) => {
                debug!("Removed uncompressed copy of blob {}", id);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn blob_ref(&self, id: String) -> BlobRef {
        BlobRef {
            id,
            encode: self.byte_order,
            basepath: self.basepath.clone(),
        }
    }
}
