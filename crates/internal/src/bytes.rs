//! Big-endian unsigned integer helpers

/// Strip leading zero bytes, returning the minimal big-endian encoding
///
/// Zero is encoded as an empty slice.
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Left-pad a big-endian value into a fixed-width array
///
/// Returns `None` if the value does not fit in `N` bytes.
pub fn left_pad<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    let significant = trim_leading_zeros(bytes);
    if significant.len() > N {
        return None;
    }
    let mut out = [0u8; N];
    out[N - significant.len()..].copy_from_slice(significant);
    Some(out)
}
