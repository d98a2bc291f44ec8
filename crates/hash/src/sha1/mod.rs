// Copyright 2025 Irreducible Inc.

//! Incremental SHA-1 as specified in [FIPS 180-4](https://csrc.nist.gov/pubs/fips/180-4/upd1/final).

mod compression;
mod digest;
mod encoding;
mod padding;

pub use compression::{compress, compress_blocks, INITIAL_STATE, STATE_WORDS};
pub use self::digest::{CoreSha1, Sha1Core};
pub use encoding::HexDigest;

use self::{encoding::state_to_bytes, padding::FinalBlocks};
use crate::hasher::{HashError, Hasher};

/// Digest size in bits.
pub const DIGEST_BITS: usize = 160;
/// Digest size in bytes.
pub const DIGEST_LEN: usize = DIGEST_BITS / 8;
/// Number of hexadecimal characters in a rendered digest.
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_LEN;
/// Size of the blocks consumed by the compression function.
pub const BLOCK_LEN: usize = 64;

/// A streaming SHA-1 engine.
///
/// Input may be supplied in any number of chunks of any size via [`Sha1::update`]; the result
/// only depends on the concatenation of everything supplied. Every `finalize_*` method resets
/// the engine, so the same instance can immediately hash an unrelated message.
///
/// Cloning an engine forks the computation: both copies behave as if they had received the
/// same input so far.
#[derive(Debug, Clone)]
pub struct Sha1 {
	state: [u32; STATE_WORDS],
	len: u64,
	buffer: [u8; BLOCK_LEN],
	buffered: usize,
}

impl Default for Sha1 {
	fn default() -> Self {
		Self {
			state: INITIAL_STATE,
			len: 0,
			buffer: [0; BLOCK_LEN],
			buffered: 0,
		}
	}
}

impl Sha1 {
	pub fn new() -> Self {
		Self::default()
	}

	/// Hashes `data` in one shot and returns the hex digest.
	pub fn eval(data: impl AsRef<[u8]>) -> HexDigest {
		Self::new().finalize_hex(data)
	}

	/// Discards any absorbed input and returns to the initial state.
	pub fn clear(&mut self) -> &mut Self {
		self.state = INITIAL_STATE;
		self.len = 0;
		self.buffered = 0;
		self
	}

	/// Number of message bytes absorbed since the last reset.
	pub fn len(&self) -> u64 {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Number of bytes held back waiting for a complete block. Always below [`BLOCK_LEN`].
	pub fn buffered(&self) -> usize {
		self.buffered
	}

	pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
		self.absorb(data.as_ref());
		self
	}

	fn absorb(&mut self, mut data: &[u8]) {
		self.len = self.len.wrapping_add(data.len() as u64);

		if self.buffered > 0 {
			let to_copy = (BLOCK_LEN - self.buffered).min(data.len());
			self.buffer[self.buffered..self.buffered + to_copy].copy_from_slice(&data[..to_copy]);
			self.buffered += to_copy;
			data = &data[to_copy..];

			if self.buffered < BLOCK_LEN {
				return;
			}
			compress(&mut self.state, &self.buffer);
			self.buffered = 0;
		}

		let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
		compress_blocks(&mut self.state, blocks);

		self.buffer[..tail.len()].copy_from_slice(tail);
		self.buffered = tail.len();
	}

	/// Absorbs `data`, pads the message, and returns the raw digest. The engine is reset.
	fn finish(&mut self, data: &[u8]) -> [u8; DIGEST_LEN] {
		self.absorb(data);

		let final_blocks = FinalBlocks::new(&self.buffer[..self.buffered], self.len);
		tracing::trace!(
			message_len = self.len,
			final_blocks = final_blocks.block_count(),
			"finalizing SHA-1 digest"
		);
		compress_blocks(&mut self.state, final_blocks.as_blocks());

		let out = state_to_bytes(&self.state);
		self.clear();
		out
	}

	/// Finishes the message with `data` and returns the hex digest.
	pub fn finalize_hex(&mut self, data: impl AsRef<[u8]>) -> HexDigest {
		HexDigest::from_bytes(&self.finish(data.as_ref()))
	}

	/// Finishes the message with `data` and returns the raw digest.
	pub fn finalize_bytes(&mut self, data: impl AsRef<[u8]>) -> [u8; DIGEST_LEN] {
		self.finish(data.as_ref())
	}

	/// Finishes the message with `data`, writes the raw digest into `out` and returns the hex
	/// digest.
	pub fn finalize_raw_into(
		&mut self,
		data: impl AsRef<[u8]>,
		out: &mut [u8; DIGEST_LEN],
	) -> HexDigest {
		*out = self.finish(data.as_ref());
		HexDigest::from_bytes(out)
	}

	/// Finishes the message with `data` and appends the hex digest to `dst`, returning the
	/// whole contents of `dst`. The digest is the last [`HEX_DIGEST_LEN`] bytes of the returned
	/// string.
	///
	/// Room for the digest is reserved before anything else happens: if `dst` cannot grow, the
	/// error is returned with both `dst` and the engine left untouched.
	pub fn finalize_append_hex<'a>(
		&mut self,
		data: impl AsRef<[u8]>,
		dst: &'a mut String,
	) -> Result<&'a str, HashError> {
		if let Err(err) = dst.try_reserve(HEX_DIGEST_LEN) {
			tracing::debug!(current_len = dst.len(), "cannot grow hex output buffer");
			return Err(err.into());
		}

		let digest = self.finalize_hex(data);
		dst.push_str(digest.as_str());
		Ok(dst.as_str())
	}
}

impl Hasher<u8> for Sha1 {
	type Digest = [u8; DIGEST_LEN];

	fn new() -> Self {
		Self::default()
	}

	fn update(&mut self, data: impl AsRef<[u8]>) {
		self.absorb(data.as_ref());
	}

	fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		self.absorb(data.as_ref());
		self
	}

	fn finalize(mut self) -> Self::Digest {
		self.finish(&[])
	}

	fn finalize_into(mut self, out: &mut Self::Digest) {
		*out = self.finish(&[]);
	}

	fn finalize_reset(&mut self) -> Self::Digest {
		self.finish(&[])
	}

	fn finalize_into_reset(&mut self, out: &mut Self::Digest) {
		*out = self.finish(&[]);
	}

	fn reset(&mut self) {
		self.clear();
	}
}
