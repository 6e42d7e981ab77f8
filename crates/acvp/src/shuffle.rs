//! AES Monte Carlo key shuffle
//!
//! Between two outer rounds of an AES Monte Carlo test the key is folded
//! with the last one or two outputs of the inner loop. Which bytes are used
//! depends on the key length.

/// Key lengths, in bytes, the shuffle is defined for
pub const SUPPORTED_KEY_LENS: [usize; 3] = [16, 24, 32];

/// Whether [`key_shuffle`] accepts a key of `len` bytes
pub fn supports_key_len(len: usize) -> bool {
    SUPPORTED_KEY_LENS.contains(&len)
}

/// Mutate `key` in place from the final inner-loop output `result` and the
/// output before it, `prev_result`.
///
/// - 16-byte key: `key ^= result`
/// - 24-byte key: `key[0..8] ^= prev_result[8..16]`, `key[8..24] ^= result`
/// - 32-byte key: `key[0..16] ^= prev_result`, `key[16..32] ^= result`
///
/// # Panics
///
/// Panics if `key` is not 16, 24 or 32 bytes long, or if `result` /
/// `prev_result` are shorter than 16 bytes. Callers check
/// [`supports_key_len`] and output lengths first.
pub fn key_shuffle(key: &mut [u8], result: &[u8], prev_result: &[u8]) {
    match key.len() {
        16 => xor_into(key, &result[..16]),
        24 => {
            xor_into(&mut key[..8], &prev_result[8..16]);
            xor_into(&mut key[8..], &result[..16]);
        }
        32 => {
            xor_into(&mut key[..16], &prev_result[..16]);
            xor_into(&mut key[16..], &result[..16]);
        }
        n => panic!("unhandled key length {}", n),
    }
}

#[inline(always)]
fn xor_into(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
