#![no_main]

use std::sync::OnceLock;

use classic_ciphers::{Cipher, CipherFactory, PublicKeyCipher};
use libfuzzer_sys::fuzz_target;

static PUBLIC_KEY: OnceLock<PublicKeyCipher> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let modulus = i64::from(data[0]) + 1;
    let a = i64::from(data[1]);
    let b = i64::from(data[2]);
    let message: Vec<i64> = data[3..].iter().map(|&v| i64::from(v) % modulus).collect();

    let shift = CipherFactory::shift(a - b, modulus).unwrap();
    assert_eq!(shift.decrypt(&shift.encrypt(&message).unwrap()).unwrap(), message);

    if let Ok(affine) = CipherFactory::affine(a, b, modulus) {
        assert_eq!(affine.decrypt(&affine.encrypt(&message).unwrap()).unwrap(), message);
    }

    let key: Vec<i64> = data[..3].iter().map(|&v| i64::from(v)).collect();
    let vigenere = CipherFactory::polyalphabetic(key, modulus).unwrap();
    assert_eq!(vigenere.decrypt(&vigenere.encrypt(&message).unwrap()).unwrap(), message);

    if !message.is_empty() {
        let pad: Vec<i64> = message.iter().rev().copied().collect();
        let sender = CipherFactory::one_time_pad(pad.clone(), modulus).unwrap();
        let receiver = CipherFactory::one_time_pad(pad, modulus).unwrap();
        let ciphertext = sender.encrypt(&message).unwrap();
        assert_eq!(receiver.decrypt(&ciphertext).unwrap(), message);
        assert!(sender.encrypt(&message).is_err());
    }

    let rsa = PUBLIC_KEY.get_or_init(|| CipherFactory::public_key(65_521, 65_519, 65_537).unwrap());
    let wide: Vec<i64> = data
        .chunks(4)
        .map(|c| c.iter().fold(0i64, |acc, &v| acc << 8 | i64::from(v)) % rsa.modulus())
        .collect();
    assert_eq!(rsa.decrypt(&rsa.encrypt(&wide).unwrap()).unwrap(), wide);
});
