// Copyright 2023-2025 Irreducible Inc.

//! Incremental SHA-1 hashing.
//!
//! [`Sha1`] absorbs input in arbitrarily sized chunks and produces the 160-bit digest as raw
//! bytes, as a [`HexDigest`], or appended to a caller's `String`.
//!
//! ```
//! use sha1kit_hash::Sha1;
//!
//! let mut hasher = Sha1::new();
//! hasher.update(b"a").update(b"bc");
//! assert_eq!(hasher.finalize_hex(b""), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! assert_eq!(Sha1::eval(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

pub mod hasher;
pub mod sha1;

pub use digest;
pub use hasher::*;
pub use sha1::{
	CoreSha1, HexDigest, Sha1, Sha1Core, BLOCK_LEN, DIGEST_BITS, DIGEST_LEN, HEX_DIGEST_LEN,
};
