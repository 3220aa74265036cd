//! Tests for the Niihau Byte Trie.


use super::*;

fn sorted(mut items: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    items.sort();
    items
}

fn animal_trie() -> NiihauTrie {
    let trie = NiihauTrie::new();
    trie.insert("cat", "meow");
    trie.insert("car", "vroom");
    trie.insert("dog", "bark");
    trie
}

#[test]
fn test_trie_basic_operations() {
    let trie = NiihauTrie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.size(), 1);

    // Test insertion
    assert!(trie.insert("hello", "world"));
    assert_eq!(trie.size(), 2);
    assert!(!trie.is_empty());

    // Test retrieval
    assert_eq!(trie.search("hello"), Some(b"world".to_vec()));
    assert!(trie.contains("hello"));
    assert_eq!(trie.search("nonexistent"), None);
    assert!(!trie.contains("nonexistent"));

    // Keys are raw bytes, no case folding
    assert_eq!(trie.search("HELLO"), None);

    // Test update
    assert!(!trie.insert("hello", "planet"));
    assert_eq!(trie.search("hello"), Some(b"planet".to_vec()));
    assert_eq!(trie.size(), 2);
}

#[test]
fn test_animal_fixture() {
    let trie = animal_trie();

    assert_eq!(trie.search("cat"), Some(b"meow".to_vec()));
    assert_eq!(trie.search("ca"), None);
    assert!(!trie.contains("ca"));
    assert_eq!(trie.size(), 4);

    assert_eq!(
        sorted(trie.get_all_keys()),
        vec![b"car".to_vec(), b"cat".to_vec(), b"dog".to_vec()]
    );
    assert_eq!(
        sorted(trie.get_all_values()),
        vec![b"bark".to_vec(), b"meow".to_vec(), b"vroom".to_vec()]
    );
    assert_eq!(
        sorted(trie.get_prefix_keys("ca")),
        vec![b"car".to_vec(), b"cat".to_vec()]
    );
    assert_eq!(
        sorted(trie.get_prefix_values("ca")),
        vec![b"meow".to_vec(), b"vroom".to_vec()]
    );
}

#[test]
fn test_empty_key_addresses_root() {
    let trie = NiihauTrie::new();
    assert_eq!(trie.search(""), None);

    assert!(trie.insert("", "at-root"));
    assert_eq!(trie.size(), 2);
    assert_eq!(trie.search(""), Some(b"at-root".to_vec()));
    assert_eq!(trie.get_all_keys(), vec![Vec::<u8>::new()]);
    assert_eq!(trie.get_all_values(), vec![b"at-root".to_vec()]);
}

#[test]
fn test_empty_value_is_distinct_from_absent() {
    let trie = NiihauTrie::new();
    trie.insert("ab", "x");

    assert!(trie.insert("a", Vec::<u8>::new()));
    assert_eq!(trie.search("a"), Some(Vec::new()));
    assert!(trie.contains("a"));
    assert_eq!(trie.size(), 3);

    // An empty value still counts as present on update
    assert!(!trie.insert("a", Vec::<u8>::new()));
    assert_eq!(trie.size(), 3);
    assert_eq!(trie.get_all_values().len(), 2);
}

#[test]
fn test_prefix_edge_cases() {
    let trie = animal_trie();

    assert!(trie.get_prefix_keys("").is_empty());
    assert!(trie.get_prefix_values("").is_empty());
    assert!(trie.get_prefix_keys("z").is_empty());
    assert!(trie.get_prefix_values("zebra").is_empty());
    assert!(trie.get_prefix_keys("cow").is_empty());

    // Stored keys lying on the prefix path are reported as well
    assert_eq!(trie.get_prefix_keys("cats"), vec![b"cat".to_vec()]);
    assert_eq!(trie.get_prefix_values("cats"), vec![b"meow".to_vec()]);

    // A prefix equal to a whole key returns that key
    assert_eq!(trie.get_prefix_keys("dog"), vec![b"dog".to_vec()]);
}

#[test]
fn test_prefix_search_with_shared_stems() {
    let trie = NiihauTrie::new();
    trie.insert("apple", "fruit");
    trie.insert("application", "software");
    trie.insert("apply", "verb");
    trie.insert("banana", "yellow");

    assert_eq!(
        sorted(trie.get_prefix_keys("app")),
        vec![
            b"apple".to_vec(),
            b"application".to_vec(),
            b"apply".to_vec()
        ]
    );
    assert_eq!(trie.get_prefix_values("ban"), vec![b"yellow".to_vec()]);
    assert!(trie.get_prefix_keys("orange").is_empty());
}

#[test]
fn test_binary_keys() {
    let trie = NiihauTrie::new();
    trie.insert([0u8, 255, 0], vec![1u8, 2, 3]);
    trie.insert([0u8, 255, 1], vec![4u8]);

    assert_eq!(trie.search([0u8, 255, 0]), Some(vec![1, 2, 3]));
    assert_eq!(
        sorted(trie.get_prefix_keys([0u8, 255])),
        vec![vec![0, 255, 0], vec![0, 255, 1]]
    );
}

#[test]
fn test_collect_from_iterator() {
    let trie: NiihauTrie = vec![("one", "1"), ("two", "2"), ("one", "uno")]
        .into_iter()
        .collect();

    assert_eq!(trie.size(), 3);
    assert_eq!(trie.search("one"), Some(b"uno".to_vec()));
    assert_eq!(format!("{trie:?}"), "NiihauTrie { size: 3, .. }");
}
