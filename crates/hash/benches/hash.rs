// Copyright 2024-2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use digest::Digest;
use rand::{thread_rng, RngCore};
use sha1kit_hash::{CoreSha1, Sha1};

fn bench_sha1(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-1");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(N as u64));

	group.bench_function("Sha1", |bench| bench.iter(|| Sha1::new().finalize_bytes(&data)));

	group.bench_function("Sha1 chunked", |bench| {
		bench.iter(|| {
			let mut hasher = Sha1::new();
			for chunk in data.chunks(1000) {
				hasher.update(chunk);
			}
			hasher.finalize_bytes(b"")
		})
	});

	group.bench_function("Sha1 hex", |bench| bench.iter(|| Sha1::eval(&data)));

	group.bench_function("CoreSha1", |bench| bench.iter(|| <CoreSha1 as Digest>::digest(&data)));

	group.bench_function("Sha1-RustCrypto", |bench| {
		bench.iter(|| <sha1_crypto::Sha1 as Digest>::digest(&data))
	});

	group.finish()
}

fn bench_short_messages(c: &mut Criterion) {
	let mut group = c.benchmark_group("SHA-1 short");

	for len in [0usize, 55, 56, 64, 119] {
		let data = vec![0xa5u8; len];
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_function(format!("Sha1/{len}"), |bench| {
			let mut hasher = Sha1::new();
			bench.iter(|| hasher.finalize_bytes(&data))
		});
	}

	group.finish()
}

criterion_group!(hash, bench_sha1, bench_short_messages);
criterion_main!(hash);
