use std::collections::HashMap;

use huffman::{HuffmanTree, Symbol, BYTE_ALPHABET};

fn main() -> huffman::Result<()> {
    let text = b"it was the best of times, it was the worst of times".repeat(200);
    let mut counts = [0i64; BYTE_ALPHABET];
    for &b in &text {
        counts[b as usize] += 1;
    }

    let tree = HuffmanTree::from_frequencies(&counts);
    let codes: HashMap<Symbol, String> = tree.to_table().into_iter().collect();
    let bits: Vec<bool> = text
        .iter()
        .flat_map(|&b| codes[&(b as Symbol)].chars().map(|c| c == '1').collect::<Vec<_>>())
        .collect();

    let mut saved = Vec::new();
    let mut out = Vec::with_capacity(text.len());
    for _ in 0..1000 {
        saved.clear();
        HuffmanTree::from_frequencies(&counts).write_to(&mut saved)?;
        let restored = HuffmanTree::read_from(saved.as_slice())?;

        out.clear();
        restored.decode_to(bits.iter().copied(), &mut out)?;
    }
    assert_eq!(out, text);
    Ok(())
}
