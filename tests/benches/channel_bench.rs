use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vau::channel::SeededEntropy;
use vau::prelude::*;
use vau_tests::fixtures::backend_keypair;

fn bench_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("VAU request");
    let backend = CryptoBackend::with_entropy(SeededEntropy::from_u64(5)).unwrap();
    let channel = VauChannel::new(&backend);
    let backend_key = backend_keypair().unwrap();
    let fetcher = StaticKeyFetcher::new(*backend_key.public());

    for size in [64usize, 1024, 16384] {
        let data = vec![0x42u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &data, |b, data| {
            b.iter(|| channel.encrypt_for_backend(black_box(data), &fetcher).unwrap());
        });

        let wire = channel.encrypt_for_backend(&data, &fetcher).unwrap().encode();
        group.bench_with_input(BenchmarkId::new("decrypt_as_backend", size), &wire, |b, wire| {
            b.iter(|| VauChannel::decrypt_as_backend(&backend_key, black_box(wire)).unwrap());
        });
    }
    group.finish();
}

fn bench_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("VAU response");
    let key = [7u8; 16];
    let cipher = vau::channel::aead::AeadCipher::new(&SymmetricKey::new(key)).unwrap();
    let nonce = vau::algorithms::Nonce::new([9u8; 12]);

    for size in [64usize, 1024, 16384] {
        let mut blob = nonce.to_vec();
        blob.extend(cipher.encrypt(&nonce, &vec![0u8; size], None).unwrap());
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &blob, |b, blob| {
            b.iter(|| VauChannel::decrypt_with_session_key(&key, black_box(blob)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_request, bench_response);
criterion_main!(benches);
