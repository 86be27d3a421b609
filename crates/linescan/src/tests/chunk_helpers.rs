use alloc::vec;

use crate::produce_chunks;

#[test]
fn produce_chunks_example() {
    let payload = b"alpha\nbeta\ngamma";
    let chunks = produce_chunks(payload, 5);
    assert_eq!(
        chunks,
        vec![
            b"alph".as_slice(),
            b"a\nbe".as_slice(),
            b"ta\ng".as_slice(),
            b"amma".as_slice(),
        ]
    );
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn produce_chunks_never_loses_bytes() {
    let payload = b"0123456789";
    for parts in 1..=payload.len() + 2 {
        let chunks = produce_chunks(payload, parts);
        assert!(chunks.len() <= parts);
        assert_eq!(chunks.concat(), payload);
    }
}

#[test]
fn produce_chunks_on_empty_payload() {
    assert!(produce_chunks(b"", 3).is_empty());
}
