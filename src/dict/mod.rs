pub mod dictionary;
pub mod hit;
pub mod trie;
