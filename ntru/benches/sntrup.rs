use criterion::{Criterion, criterion_group, criterion_main};
use ntru::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();

    // Key generation
    c.bench_function("keygen", |b| {
        b.iter(|| {
            let (sk, pk) = key_gen::<Sntrup761, _>(&mut rng);
            let _sk_bytes = sk.to_bytes();
            let _pk_bytes = pk.as_bytes().len();
        })
    });

    let (sk, pk) = key_gen::<Sntrup761, _>(&mut rng);
    let sk_bytes = sk.to_bytes();

    // Encapsulation
    c.bench_function("encapsulate", |b| b.iter(|| encap(&mut rng, &pk)));
    let (ct, _ss) = encap(&mut rng, &pk);

    // Decapsulation
    let sk = SecretKey::<Sntrup761>::from_bytes(&sk_bytes).unwrap();
    c.bench_function("decapsulate", |b| b.iter(|| decap(&ct, &sk)));

    // Round trip through the byte-buffer interface
    c.bench_function("round_trip", |b| {
        let mut pk = vec![0u8; Sntrup761::PUBLIC_KEY_BYTES];
        let mut sk = vec![0u8; Sntrup761::SECRET_KEY_BYTES];
        let mut ct = vec![0u8; Sntrup761::CIPHERTEXT_BYTES];
        let mut ss = [0u8; 32];
        b.iter(|| {
            Sntrup761::keypair(&mut rng, &mut pk, &mut sk).unwrap();
            Sntrup761::encapsulate(&mut rng, &mut ct, &mut ss, &pk).unwrap();
            Sntrup761::decapsulate(&mut ss, &ct, &sk).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
