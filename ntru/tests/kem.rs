//! The byte-buffer KEM interface over every parameter set
use ntru::{
    Error, Kem, Sntrup653, Sntrup761, Sntrup857, Sntrup953, Sntrup1013, Sntrup1277,
};
use rand::{SeedableRng, rngs::StdRng};
use rstest::*;

fn round_trip<K: Kem>() {
    let mut rng = rand::rng();
    let mut pk = vec![0u8; K::PUBLIC_KEY_BYTES];
    let mut sk = vec![0u8; K::SECRET_KEY_BYTES];
    let mut ct = vec![0u8; K::CIPHERTEXT_BYTES];
    let mut ss_send = vec![0u8; K::BYTES];
    let mut ss_recv = vec![0u8; K::BYTES];

    K::keypair(&mut rng, &mut pk, &mut sk).unwrap();
    K::encapsulate(&mut rng, &mut ct, &mut ss_send, &pk).unwrap();
    K::decapsulate(&mut ss_recv, &ct, &sk).unwrap();
    assert_eq!(ss_send, ss_recv);
    assert_ne!(ss_send, vec![0u8; K::BYTES]);
}

fn tampered<K: Kem>() {
    let mut rng = StdRng::seed_from_u64(K::PUBLIC_KEY_BYTES as u64);
    let mut pk = vec![0u8; K::PUBLIC_KEY_BYTES];
    let mut sk = vec![0u8; K::SECRET_KEY_BYTES];
    let mut ct = vec![0u8; K::CIPHERTEXT_BYTES];
    let mut ss = vec![0u8; K::BYTES];
    K::keypair(&mut rng, &mut pk, &mut sk).unwrap();
    K::encapsulate(&mut rng, &mut ct, &mut ss, &pk).unwrap();

    for pos in [0, K::CIPHERTEXT_BYTES / 2, K::CIPHERTEXT_BYTES - 1] {
        let mut bad = ct.clone();
        bad[pos] ^= 0x10;
        let mut rejected = vec![0u8; K::BYTES];
        K::decapsulate(&mut rejected, &bad, &sk).unwrap();
        assert_ne!(rejected, ss, "flip at {pos}");
    }
}

fn wrong_key<K: Kem>() {
    let mut rng = rand::rng();
    let mut pk = vec![0u8; K::PUBLIC_KEY_BYTES];
    let mut sk = vec![0u8; K::SECRET_KEY_BYTES];
    let mut other_pk = vec![0u8; K::PUBLIC_KEY_BYTES];
    let mut other_sk = vec![0u8; K::SECRET_KEY_BYTES];
    K::keypair(&mut rng, &mut pk, &mut sk).unwrap();
    K::keypair(&mut rng, &mut other_pk, &mut other_sk).unwrap();

    let mut ct = vec![0u8; K::CIPHERTEXT_BYTES];
    let mut ss = vec![0u8; K::BYTES];
    K::encapsulate(&mut rng, &mut ct, &mut ss, &pk).unwrap();
    let mut other = vec![0u8; K::BYTES];
    K::decapsulate(&mut other, &ct, &other_sk).unwrap();
    assert_ne!(ss, other);
}

#[rstest]
#[case::sntrup653(round_trip::<Sntrup653>)]
#[case::sntrup761(round_trip::<Sntrup761>)]
#[case::sntrup857(round_trip::<Sntrup857>)]
#[case::sntrup953(round_trip::<Sntrup953>)]
#[case::sntrup1013(round_trip::<Sntrup1013>)]
#[case::sntrup1277(round_trip::<Sntrup1277>)]
#[case::tampered653(tampered::<Sntrup653>)]
#[case::tampered1277(tampered::<Sntrup1277>)]
#[case::wrong_key761(wrong_key::<Sntrup761>)]
#[case::wrong_key1013(wrong_key::<Sntrup1013>)]
fn kem(#[case] check: fn()) {
    check();
}

#[rstest]
#[case::sntrup653(sizes::<Sntrup653>(), (994, 1518, 897))]
#[case::sntrup761(sizes::<Sntrup761>(), (1158, 1763, 1039))]
#[case::sntrup857(sizes::<Sntrup857>(), (1322, 1999, 1184))]
#[case::sntrup953(sizes::<Sntrup953>(), (1505, 2254, 1349))]
#[case::sntrup1013(sizes::<Sntrup1013>(), (1623, 2417, 1455))]
#[case::sntrup1277(sizes::<Sntrup1277>(), (2067, 3059, 1847))]
fn standard_sizes(#[case] actual: (usize, usize, usize), #[case] expected: (usize, usize, usize)) {
    assert_eq!(actual, expected);
}

fn sizes<K: Kem>() -> (usize, usize, usize) {
    (K::PUBLIC_KEY_BYTES, K::SECRET_KEY_BYTES, K::CIPHERTEXT_BYTES)
}

#[test]
fn wrong_buffer_lengths() {
    let mut rng = rand::rng();
    let mut pk = vec![0u8; Sntrup761::PUBLIC_KEY_BYTES];
    let mut sk = vec![0u8; Sntrup761::SECRET_KEY_BYTES + 1];
    assert_eq!(
        Sntrup761::keypair(&mut rng, &mut pk, &mut sk),
        Err(Error::InvalidLength {
            expected: 1763,
            actual: 1764
        })
    );

    let mut ct = vec![0u8; Sntrup761::CIPHERTEXT_BYTES];
    let mut ss = [0u8; 32];
    let err = Sntrup761::encapsulate(&mut rng, &mut ct, &mut ss, &pk[1..]).unwrap_err();
    assert!(err.status() < 0);
    let err = Sntrup761::decapsulate(&mut ss[..31], &ct, &sk).unwrap_err();
    assert_eq!(err.status(), -2);
}
