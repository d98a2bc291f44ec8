// Copyright 2025 Irreducible Inc.

//! The SHA-1 block compression function, as specified in FIPS 180-4 section 6.1.2.

use super::BLOCK_LEN;

/// Number of 32-bit words in the chaining state.
pub const STATE_WORDS: usize = 5;

/// Initial chaining value `H(0)`.
pub const INITIAL_STATE: [u32; STATE_WORDS] =
	[0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const ROUND_CONSTANTS: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

#[inline(always)]
fn choose(x: u32, y: u32, z: u32) -> u32 {
	(x & y) | (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
	x ^ y ^ z
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
	(x & y) | (x & z) | (y & z)
}

/// Expands a block into the 80-word message schedule.
fn message_schedule(block: &[u8; BLOCK_LEN]) -> [u32; 80] {
	let mut w = [0u32; 80];
	for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
	}
	for i in 16..80 {
		w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
	}
	w
}

/// Applies the compression function for a single 64-byte block to `state`.
pub fn compress(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_LEN]) {
	let w = message_schedule(block);

	let [mut a, mut b, mut c, mut d, mut e] = *state;

	for (i, &wi) in w.iter().enumerate() {
		let f = match i / 20 {
			0 => choose(b, c, d),
			2 => majority(b, c, d),
			_ => parity(b, c, d),
		};
		let t = a
			.rotate_left(5)
			.wrapping_add(f)
			.wrapping_add(e)
			.wrapping_add(ROUND_CONSTANTS[i / 20])
			.wrapping_add(wi);
		e = d;
		d = c;
		c = b.rotate_left(30);
		b = a;
		a = t;
	}

	for (h, v) in state.iter_mut().zip([a, b, c, d, e]) {
		*h = h.wrapping_add(v);
	}
}

/// Compresses each block of `blocks` into `state`, in order.
pub fn compress_blocks(state: &mut [u32; STATE_WORDS], blocks: &[[u8; BLOCK_LEN]]) {
	for block in blocks {
		compress(state, block);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn padded_abc() -> [u8; BLOCK_LEN] {
		let mut block = [0u8; BLOCK_LEN];
		block[..3].copy_from_slice(b"abc");
		block[3] = 0x80;
		block[63] = 24;
		block
	}

	#[test]
	fn test_compress_single_block_abc() {
		let mut state = INITIAL_STATE;
		compress(&mut state, &padded_abc());
		assert_eq!(state, [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
	}

	#[test]
	fn test_message_schedule_expansion() {
		let w = message_schedule(&padded_abc());
		assert_eq!(w[0], 0x61626380);
		assert_eq!(w[15], 0x00000018);
		for i in 16..80 {
			assert_eq!(w[i], (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1));
		}
	}

	#[test]
	fn test_compress_blocks_matches_repeated_compress() {
		let blocks: [[u8; BLOCK_LEN]; 3] =
			std::array::from_fn(|b| std::array::from_fn(|i| ((b * BLOCK_LEN + i) * 7) as u8));

		let mut batched = INITIAL_STATE;
		compress_blocks(&mut batched, &blocks);

		let mut one_by_one = INITIAL_STATE;
		for block in &blocks {
			compress(&mut one_by_one, block);
		}
		assert_eq!(batched, one_by_one);
	}

	#[test]
	fn test_compress_blocks_empty_is_noop() {
		let mut state = INITIAL_STATE;
		compress_blocks(&mut state, &[]);
		assert_eq!(state, INITIAL_STATE);
	}

	#[test]
	fn test_partial_trailing_block_is_not_compressed() {
		// 100 bytes split into whole blocks leave a 36-byte remainder outside the compressor
		let data = [0u8; 100];
		let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
		assert_eq!(blocks.len(), 1);
		assert_eq!(rest.len(), 36);

		let mut state = INITIAL_STATE;
		compress_blocks(&mut state, blocks);

		let mut zero_block = INITIAL_STATE;
		compress(&mut zero_block, &[0u8; BLOCK_LEN]);
		assert_eq!(state, zero_block);
	}

	#[test]
	fn test_mixing_functions() {
		assert_eq!(choose(0xffff0000, 0x12345678, 0x9abcdef0), 0x1234def0);
		assert_eq!(parity(0xf0f0f0f0, 0x0f0f0f0f, 0xffffffff), 0);
		assert_eq!(majority(0b1100, 0b1010, 0b0110), 0b1110);
	}
}
