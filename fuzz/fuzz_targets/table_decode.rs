#![no_main]
use huffman::{BitReader, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, Vec<u8>)| {
    let (table_text, stream) = data;

    // Malformed tables must fail cleanly.
    let tree = match HuffmanTree::read_from(table_text.as_bytes()) {
        Ok(tree) => tree,
        Err(_) => return,
    };

    // Saving and restoring a valid tree must reproduce it.
    let mut saved = Vec::new();
    tree.write_to(&mut saved).unwrap();
    let restored = HuffmanTree::read_from(saved.as_slice()).unwrap();
    assert_eq!(restored.to_table(), tree.to_table());

    // Arbitrary streams either decode or report an error, never panic.
    let _ = tree.decode(BitReader::new(&stream));
});
