use rand::Rng;

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_LEN: usize = 4;
const CODE_LEN: usize = 4;

/// Short random identifier such as `BBX-7QX2`. No uniqueness check is made.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    let suffix: String = (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", prefix, suffix)
}

/// 4-digit confirmation code; leading zeros are kept.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
