// Copyright 2025 Irreducible Inc.

//! Adapter exposing the SHA-1 compression function through the RustCrypto `digest` core API.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
		FixedOutputCore, OutputSizeUser, UpdateCore,
	},
	typenum::{Unsigned, U20, U64},
	HashMarker, Output, Reset,
};

use super::{compress_blocks, BLOCK_LEN, INITIAL_STATE, STATE_WORDS};

/// Lowest-level core hasher state of SHA-1.
#[derive(Clone)]
pub struct Sha1Core {
	state: [u32; STATE_WORDS],
	blocks_len: u64,
}

/// SHA-1 hasher implementing [`digest::Digest`].
pub type CoreSha1 = CoreWrapper<Sha1Core>;

impl HashMarker for Sha1Core {}

impl BlockSizeUser for Sha1Core {
	type BlockSize = U64;
}

impl BufferKindUser for Sha1Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Sha1Core {
	type OutputSize = U20;
}

impl UpdateCore for Sha1Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len += blocks.len() as u64;
		for block in blocks {
			compress_blocks(&mut self.state, block.as_slice().as_chunks::<BLOCK_LEN>().0);
		}
	}
}

impl FixedOutputCore for Sha1Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let block_len = <Self as BlockSizeUser>::BlockSize::U64;
		let bit_len = 8 * (buffer.get_pos() as u64 + block_len * self.blocks_len);
		let mut state = self.state;
		buffer.len64_padding_be(bit_len, |block| {
			compress_blocks(&mut state, block.as_slice().as_chunks::<BLOCK_LEN>().0)
		});
		for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
	}
}

impl Default for Sha1Core {
	#[inline]
	fn default() -> Self {
		Self {
			state: INITIAL_STATE,
			blocks_len: 0,
		}
	}
}

impl Reset for Sha1Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Sha1Core {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha1")
	}
}

impl fmt::Debug for Sha1Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha1Core { ... }")
	}
}
