// Copyright 2025 Irreducible Inc.

use super::BLOCK_LEN;

/// Size of the big-endian message bit length that terminates the padding.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Offset inside a block at which the length field starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// Number of terminator and zero bytes that must follow a tail of `tail_len` bytes so that
/// the length field ends on a block boundary.
///
/// The result is always in `1..=BLOCK_LEN`: at least the `0x80` terminator is written, and a
/// tail that already ends exactly at the length offset gets a whole extra block.
pub fn pad_len(tail_len: usize) -> usize {
	let rem = tail_len % BLOCK_LEN;
	let pads = if rem > LENGTH_OFFSET {
		BLOCK_LEN + LENGTH_OFFSET - rem
	} else {
		LENGTH_OFFSET - rem
	};
	if pads == 0 {
		BLOCK_LEN
	} else {
		pads
	}
}

/// The final one or two blocks of a message: the unprocessed tail followed by the padding.
#[derive(Debug, Clone)]
pub struct FinalBlocks {
	bytes: [u8; 2 * BLOCK_LEN],
	len: usize,
}

impl FinalBlocks {
	/// Pads `tail` (shorter than one block) for a message of `message_len` bytes in total.
	pub fn new(tail: &[u8], message_len: u64) -> Self {
		debug_assert!(tail.len() < BLOCK_LEN);

		let mut bytes = [0u8; 2 * BLOCK_LEN];
		let pads = pad_len(tail.len());
		let len = tail.len() + pads + LENGTH_FIELD_LEN;

		bytes[..tail.len()].copy_from_slice(tail);
		bytes[tail.len()] = 0x80;
		let bit_len = message_len.wrapping_mul(8);
		bytes[len - LENGTH_FIELD_LEN..len].copy_from_slice(&bit_len.to_be_bytes());

		Self { bytes, len }
	}

	/// The padded bytes; always one or two whole blocks.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.len]
	}

	pub fn as_blocks(&self) -> &[[u8; BLOCK_LEN]] {
		self.as_bytes().as_chunks::<BLOCK_LEN>().0
	}

	pub fn block_count(&self) -> usize {
		self.len / BLOCK_LEN
	}
}
