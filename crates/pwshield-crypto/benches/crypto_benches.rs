use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pwshield_crypto::{
    decrypt_data,
    derive_key,
    encrypt_data,
    Cipher,
    CipherFactory,
    CryptoConfig,
    EncryptionAlgorithmChoice,
    KeyDerivationChoice,
    PassphraseCipherFactory,
};

fn bench_encrypt_data(c: &mut Criterion) {
    let key = [0u8; 32];
    let data = b"some password to encrypt";

    c.bench_function("encrypt_data", |b| {
        b.iter(|| {
            encrypt_data(
                EncryptionAlgorithmChoice::XChaCha20Poly1305,
                black_box(data),
                black_box(&key),
            )
        })
    });
}

fn bench_decrypt_data(c: &mut Criterion) {
    let key = [0u8; 32];
    let data = b"some password to encrypt";
    let sealed = encrypt_data(EncryptionAlgorithmChoice::XChaCha20Poly1305, data, &key).unwrap();

    c.bench_function("decrypt_data", |b| {
        b.iter(|| {
            decrypt_data(
                EncryptionAlgorithmChoice::XChaCha20Poly1305,
                black_box(&sealed),
                black_box(&key),
            )
        })
    });
}

fn bench_derive_key_argon2id(c: &mut Criterion) {
    let choice = KeyDerivationChoice::default();
    let salt = [0u8; 16];

    c.bench_function("derive_key_argon2id", |b| {
        b.iter(|| derive_key(black_box(&choice), black_box("mySecretKey"), black_box(&salt)))
    });
}

fn bench_derive_key_pbkdf2(c: &mut Criterion) {
    let choice = KeyDerivationChoice::pbkdf2();
    let salt = [0u8; 16];

    c.bench_function("derive_key_pbkdf2", |b| {
        b.iter(|| derive_key(black_box(&choice), black_box("mySecretKey"), black_box(&salt)))
    });
}

fn bench_password_round_trip(c: &mut Criterion) {
    let cipher = PassphraseCipherFactory::new(CryptoConfig::default())
        .cipher("mySecretKey")
        .unwrap();

    c.bench_function("password_round_trip", |b| {
        b.iter(|| {
            let protected = cipher.encrypt(black_box("hunter2")).unwrap();
            cipher.decrypt(&protected).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_encrypt_data,
    bench_decrypt_data,
    bench_derive_key_argon2id,
    bench_derive_key_pbkdf2,
    bench_password_round_trip
);
criterion_main!(benches);
