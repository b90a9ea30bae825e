pub mod trie;
pub mod payload;

mod node;
