// Copyright 2025 Irreducible Inc.

//! Serialization of the final chaining state into raw and hexadecimal digests.

use std::fmt;

use super::{compression::STATE_WORDS, DIGEST_LEN, HEX_DIGEST_LEN};

const HEX_TABLE: &[u8; 16] = b"0123456789abcdef";

/// Serializes the chaining state big-endian, word 0 first.
pub fn state_to_bytes(state: &[u32; STATE_WORDS]) -> [u8; DIGEST_LEN] {
	let mut out = [0u8; DIGEST_LEN];
	for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
		chunk.copy_from_slice(&word.to_be_bytes());
	}
	out
}

/// A SHA-1 digest rendered as 40 lowercase hexadecimal characters.
///
/// The characters live inline, so producing one never allocates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexDigest([u8; HEX_DIGEST_LEN]);

impl HexDigest {
	/// Renders `bytes` as lowercase hex, high nibble first.
	pub fn from_bytes(bytes: &[u8; DIGEST_LEN]) -> Self {
		let mut out = [0u8; HEX_DIGEST_LEN];
		for (pair, byte) in out.chunks_exact_mut(2).zip(bytes) {
			pair[0] = HEX_TABLE[(byte >> 4) as usize];
			pair[1] = HEX_TABLE[(byte & 0x0f) as usize];
		}
		Self(out)
	}

	pub fn as_str(&self) -> &str {
		std::str::from_utf8(&self.0).expect("hex digits are ASCII")
	}
}

impl From<&[u8; DIGEST_LEN]> for HexDigest {
	fn from(bytes: &[u8; DIGEST_LEN]) -> Self {
		Self::from_bytes(bytes)
	}
}

impl From<HexDigest> for String {
	fn from(digest: HexDigest) -> Self {
		digest.as_str().to_owned()
	}
}

impl AsRef<str> for HexDigest {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl PartialEq<str> for HexDigest {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for HexDigest {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

impl fmt::Display for HexDigest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Debug for HexDigest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HexDigest({})", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_state_to_bytes_is_big_endian() {
		let bytes = state_to_bytes(&[0x01020304, 0x05060708, 0x090a0b0c, 0x0d0e0f10, 0x11121314]);
		let expected: Vec<u8> = (1..=20).collect();
		assert_eq!(bytes.as_slice(), expected.as_slice());
	}

	#[test]
	fn test_hex_is_lowercase_high_nibble_first() {
		let mut bytes = [0u8; DIGEST_LEN];
		bytes[0] = 0xab;
		bytes[1] = 0x0f;
		bytes[19] = 0xf0;
		let hex = HexDigest::from_bytes(&bytes);
		assert_eq!(hex, "ab0f0000000000000000000000000000000000f0");
		assert_eq!(hex.as_str().len(), HEX_DIGEST_LEN);
	}

	#[test]
	fn test_hex_decodes_to_raw() {
		let bytes: [u8; DIGEST_LEN] = std::array::from_fn(|i| (i as u8).wrapping_mul(37));
		let digest = HexDigest::from_bytes(&bytes);
		assert_eq!(hex::decode(digest.as_str()).unwrap(), bytes);
		assert_eq!(digest.as_str(), hex::encode(bytes));
	}

	#[test]
	fn test_display_and_string_conversion() {
		let hex = HexDigest::from_bytes(&[0xff; DIGEST_LEN]);
		assert_eq!(hex.to_string(), "f".repeat(HEX_DIGEST_LEN));
		assert_eq!(String::from(hex), "f".repeat(HEX_DIGEST_LEN));
	}
}
