// Copyright 2023-2025 Irreducible Inc.

use std::collections::TryReserveError;

/// Trait representing cryptographic hash functions which is generic over the input type.
///
/// This interface is largely based on the [`digest::Digest`] trait, except that instead of
/// requiring a `GenericArray` as output, the digest type is chosen by the implementation.
pub trait Hasher<T> {
	/// The hash function output type.
	type Digest;

	fn new() -> Self;
	fn update(&mut self, data: impl AsRef<[T]>);
	fn chain_update(self, data: impl AsRef<[T]>) -> Self;
	fn finalize(self) -> Self::Digest;
	fn finalize_into(self, out: &mut Self::Digest);

	fn finalize_reset(&mut self) -> Self::Digest;
	fn finalize_into_reset(&mut self, out: &mut Self::Digest);
	fn reset(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("Unable to grow the output buffer for the hex digest: {0}")]
	OutputAlloc(#[from] TryReserveError),
}

pub fn hash<T, H: Hasher<T>>(data: impl AsRef<[T]>) -> H::Digest {
	H::new().chain_update(data).finalize()
}
