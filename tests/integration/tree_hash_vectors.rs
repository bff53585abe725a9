use std::io::Cursor;

use tempfile::TempDir;
use treehash::tree::hash_stream;
use treehash::{hash_file, HashAlgorithm, HashOptions, DEFAULT_CHUNK_SIZE};

const MIB: usize = DEFAULT_CHUNK_SIZE;

fn h(bytes: &[u8]) -> [u8; 32] {
    HashAlgorithm::Sha256.digest(bytes)
}

fn hp(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    HashAlgorithm::Sha256.digest_pair(left, right)
}

fn root_of(data: Vec<u8>) -> [u8; 32] {
    hash_stream(Cursor::new(data), &HashOptions::default())
        .unwrap()
        .root
}

fn blocks(fills: &[u8]) -> Vec<u8> {
    fills.iter().flat_map(|&b| vec![b; MIB]).collect()
}

#[test]
fn empty_input_is_digest_of_empty_string() {
    assert_eq!(
        hex::encode(root_of(Vec::new())),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn one_block_is_its_leaf_digest() {
    let data = blocks(&[1]);
    assert_eq!(root_of(data.clone()), h(&data));
}

#[test]
fn partial_block_is_its_leaf_digest() {
    let data = vec![9u8; 1000];
    assert_eq!(root_of(data.clone()), h(&data));
}

#[test]
fn two_blocks() {
    let data = blocks(&[1, 2]);
    let expected = hp(&h(&data[..MIB]), &h(&data[MIB..]));
    assert_eq!(root_of(data), expected);
}

#[test]
fn three_blocks_carry_the_odd_leaf() {
    let data = blocks(&[1, 2, 3]);
    let (b0, b1, b2) = (&data[..MIB], &data[MIB..2 * MIB], &data[2 * MIB..]);
    let expected = hp(&hp(&h(b0), &h(b1)), &h(b2));
    assert_eq!(root_of(data.clone()), expected);

    // Rehashing or duplicating the odd leaf gives a different root.
    let rehashed = hp(&hp(&h(b0), &h(b1)), &h(&h(b2)));
    let duplicated = hp(&hp(&h(b0), &h(b1)), &hp(&h(b2), &h(b2)));
    assert_ne!(root_of(data.clone()), rehashed);
    assert_ne!(root_of(data), duplicated);
}

#[test]
fn two_blocks_and_a_tail() {
    let mut data = blocks(&[4, 5]);
    data.extend_from_slice(b"tail");
    let expected = hp(
        &hp(&h(&data[..MIB]), &h(&data[MIB..2 * MIB])),
        &h(b"tail"),
    );
    assert_eq!(root_of(data), expected);
}

#[test]
fn zero_files_are_stable_and_size_sensitive() {
    let temp = TempDir::new().unwrap();
    let three = temp.path().join("three.bin");
    let two = temp.path().join("two.bin");
    std::fs::write(&three, vec![0u8; 3 * MIB]).unwrap();
    std::fs::write(&two, vec![0u8; 2 * MIB]).unwrap();

    let options = HashOptions::default();
    let first = hash_file(&three, &options).unwrap();
    let second = hash_file(&three, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.chunks, 3);
    assert_eq!(first.bytes, (3 * MIB) as u64);

    let zero_leaf = h(&vec![0u8; MIB]);
    let expected = hp(&hp(&zero_leaf, &zero_leaf), &zero_leaf);
    assert_eq!(first.tree_hash, hex::encode(expected));

    let other = hash_file(&two, &options).unwrap();
    assert_ne!(first.tree_hash, other.tree_hash);
}

#[test]
fn linear_hash_is_flat_digest() {
    let data = blocks(&[7, 8, 9]);
    let digest = hash_stream(Cursor::new(data.clone()), &HashOptions::default()).unwrap();
    assert_eq!(digest.linear, h(&data));
    assert_ne!(digest.linear, digest.root);
}

#[test]
fn blake3_uses_same_tree_shape() {
    let options = HashOptions {
        algorithm: HashAlgorithm::Blake3,
        chunk_size: 4,
        keep_levels: false,
    };
    let alg = HashAlgorithm::Blake3;
    let digest = hash_stream(Cursor::new(b"aaaabbbbcc".to_vec()), &options).unwrap();
    let expected = alg.digest_pair(
        &alg.digest_pair(&alg.digest(b"aaaa"), &alg.digest(b"bbbb")),
        &alg.digest(b"cc"),
    );
    assert_eq!(digest.root, expected);
}
