use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::normalize;
use crate::wordlist::trie::node::TrieNode;

pub struct Trie<'a> {
    pub(crate) root: TrieNode<'a>,
    arena: Arena<TrieNode<'a>>,
}

impl Trie<'_> {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
            arena: Arena::new(),
        }
    }
}

impl Default for Trie<'_> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<'a> Trie<'a> {
    /// Stores `word`, case-folded. Inserting `""` is a no-op: the root is
    /// never an end of word. Re-inserting leaves the structure unchanged.
    pub fn insert(&'a self, word: &str) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        let mut current = &self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c, &self.arena);
        }
        current.is_terminal.set(true);
    }

    pub fn insert_all<'f, I>(&'a self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| self.insert(x));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(&normalize(word))
            .map(|node| node.is_terminal.get())
            .unwrap_or(false)
    }

    /// Every stored word starting with `prefix` (case-folded), depth-first,
    /// children in insertion order. An empty prefix yields every word; a
    /// prefix with no matching path yields an empty vec.
    pub fn find(&self, prefix: &str) -> Vec<String> {
        let mut output = Vec::new();
        if let Some(node) = self.get_node(&normalize(prefix)) {
            Self::collect_words(node, &mut output);
        }
        output
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode<'a>> {
        let mut node = &self.root;
        for c in word.chars() {
            node = node.get_child(c)?;
        }
        Some(node)
    }

    fn collect_words(node: &TrieNode<'a>, output: &mut Vec<String>) {
        if node.is_terminal.get() {
            output.push(node.word());
        }
        for &(_, child) in node.children.borrow().iter() {
            Self::collect_words(child, output);
        }
    }
}

impl Debug for Trie<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(x);
            x.children.borrow().iter().for_each(|&(_, child)| stack.push(child));
        }
        l.finish()
    }
}
