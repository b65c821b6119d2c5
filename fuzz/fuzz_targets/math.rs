#![no_main]

use classic_ciphers::math;
use libfuzzer_sys::fuzz_target;

fn read_i64(bytes: &[u8]) -> i64 {
    let mut buf = [0u8; 8];
    let len = bytes.len().min(8);
    buf[..len].copy_from_slice(&bytes[..len]);
    i64::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }

    let a = read_i64(&data[0..8]);
    let b = read_i64(&data[8..16]);
    let m = read_i64(&data[16..24]);

    if let Ok(r) = math::modulo(a, m) {
        assert!((0..m).contains(&r), "modulo({a}, {m}) = {r} out of range");
    }

    if let (Ok(r1), Ok(r2)) = (
        math::mod_pow(a, b % 4096, m),
        math::mod_pow_recursive(a, b % 4096, m),
    ) {
        assert_eq!(r1, r2, "mod_pow forms disagree for ({a}, {}, {m})", b % 4096);
    }

    if let Ok((g, x, y)) = math::extended_euclid(a, b) {
        assert_eq!(
            a as i128 * x as i128 + b as i128 * y as i128,
            g as i128,
            "Bezout identity broken for ({a}, {b})"
        );
    }

    if let Ok(inv) = math::mod_inverse(a, m) {
        let product = (a as i128 * inv as i128).rem_euclid(m as i128);
        assert_eq!(product, 1 % m as i128, "bad inverse of {a} mod {m}: {inv}");
    }
});
