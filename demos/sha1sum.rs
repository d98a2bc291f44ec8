// Copyright 2025 Irreducible Inc.

use std::num::NonZeroUsize;

use anyhow::Result;
use clap::Parser;
use sha1kit_hash::{HexDigest, Sha1};
use sha1kit_utils::{env::boolean_env_flag_set, tracing::init_tracing};

/// Prints the SHA-1 digest of the command-line arguments joined by single spaces.
#[derive(Debug, Parser)]
struct Args {
	/// Words to hash. With none, the empty string is hashed.
	words: Vec<String>,
	/// Feed the message to the hasher in chunks of this many bytes instead of all at once.
	#[arg(long)]
	chunk_size: Option<NonZeroUsize>,
}

fn digest(message: &[u8], chunk_size: Option<NonZeroUsize>) -> HexDigest {
	match chunk_size {
		Some(size) => {
			let mut hasher = Sha1::new();
			for chunk in message.chunks(size.get()) {
				hasher.update(chunk);
			}
			hasher.finalize_hex(b"")
		}
		None => Sha1::eval(message),
	}
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();
	let message = args.words.join(" ");
	tracing::debug!(len = message.len(), chunk_size = ?args.chunk_size, "hashing arguments");

	let hex = digest(message.as_bytes(), args.chunk_size);
	if boolean_env_flag_set("SHA1SUM_UPPERCASE") {
		println!("{}", hex.as_str().to_ascii_uppercase());
	} else {
		println!("{hex}");
	}
	Ok(())
}
