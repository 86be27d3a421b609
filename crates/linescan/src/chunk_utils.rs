use alloc::vec::Vec;

/// Split `payload` into approximately equal-sized chunks.
///
/// Tests and benchmarks turn the chunk lengths into fill plans to walk a
/// payload through the scanner in a controlled number of windows.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}
