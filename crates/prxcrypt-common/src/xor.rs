//! XOR helpers with an explicit iteration order.
//!
//! Several decryption steps XOR a window of a buffer against key material while
//! the source and destination windows overlap. The order in which bytes are
//! visited then changes the result, so each helper states its order in its
//! name and callers pick the one the format requires.

/// `dst[i] ^= key[i]` for `i` in `0..dst.len()`, ascending.
///
/// `key` must be at least as long as `dst`.
#[inline]
pub fn xor_forward(dst: &mut [u8], key: &[u8]) {
    let key = &key[..dst.len()];
    for (d, k) in dst.iter_mut().zip(key) {
        *d ^= k;
    }
}

/// `dst[i] = src[i] ^ key[i]` for `i` in `0..dst.len()`, descending.
///
/// `src` and `key` must be at least as long as `dst`.
#[inline]
pub fn xor_into_reverse(dst: &mut [u8], src: &[u8], key: &[u8]) {
    for i in (0..dst.len()).rev() {
        dst[i] = src[i] ^ key[i];
    }
}

/// `buf[dst + i] = buf[src + i] ^ key[i]` for `i` in `0..key.len()`, descending.
///
/// Source and destination may overlap. With `dst > src` the descending order
/// reads every source byte before it is overwritten.
#[inline]
pub fn xor_within_reverse(buf: &mut [u8], src: usize, dst: usize, key: &[u8]) {
    for i in (0..key.len()).rev() {
        buf[dst + i] = buf[src + i] ^ key[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_forward() {
        let mut data = [0x0F, 0xF0, 0xAA];
        xor_forward(&mut data, &[0xFF, 0xFF, 0xFF, 0x12]);
        assert_eq!(data, [0xF0, 0x0F, 0x55]);
    }

    #[test]
    fn test_within_reverse_reads_before_writing() {
        // dst starts two bytes after src, so an ascending pass would feed
        // already-written bytes back in.
        let mut data = [1, 2, 3, 4, 5, 6];
        xor_within_reverse(&mut data, 0, 2, &[0, 0, 0, 0]);
        assert_eq!(data, [1, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn test_into_reverse() {
        let mut dst = [0u8; 3];
        xor_into_reverse(&mut dst, &[1, 2, 3], &[1, 1, 1, 9]);
        assert_eq!(dst, [0, 3, 2]);
    }
}
