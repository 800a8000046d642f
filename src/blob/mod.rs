//! # Content-Addressed Blob Store
//!
//! Every array is written once into the dataset's `data/` directory under
//! the hex MD5 of its bytes:
//!
//! ```text
//! data/
//! ├── 5d41402abc4b2a76b9719d911017c592      # CompressionType::Uncompressed
//! └── 7d793037a0760186574b0282f2f435e7.gz   # CompressionType::Gzip(_)
//! ```
//!
//! ## Store-if-absent
//!
//! Identical bytes always hash to the same id, so a blob that is already
//! present is not rewritten. New blobs are encoded into a temporary file in
//! the same directory and renamed onto their final name, so a reader never
//! observes a partially written or a half-compressed blob.

mod config;
mod error;
mod store;


pub use config::CompressionType;
pub use error::BlobError;
pub use store::{content_hash, BlobStore, BlobStoreStats};
