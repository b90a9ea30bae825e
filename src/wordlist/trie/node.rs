use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

/// One character position in the trie. The root sentinel is the only node
/// with `key == None`; it is never marked terminal.
#[derive(Default)]
pub(crate) struct TrieNode<'a> {
    pub(crate) key: Option<char>,
    pub(crate) children: RefCell<Vec<(char, &'a TrieNode<'a>)>>,
    pub(crate) parent: Cell<Option<&'a TrieNode<'a>>>,
    pub(crate) is_terminal: Cell<bool>,
}

impl Debug for TrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("key", &self.key)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.borrow().iter()
                .map(|&(key, _)| key)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a> TrieNode<'a> {
    fn new(c: char) -> TrieNode<'a> {
        TrieNode {
            key: Some(c),
            ..Default::default()
        }
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&'a TrieNode<'a>> {
        self.children.borrow().iter()
            .find(|&&(key, _)| key == c)
            .map(|&(_, child)| child)
    }

    /// Sets the upward back-reference used by `word()`. The arena owns every
    /// node; this link is only for walking up, never for traversal down.
    pub(crate) fn attach_parent(&'a self, parent: &'a TrieNode<'a>) -> &'a TrieNode<'a> {
        self.parent.set(Some(parent));
        self
    }

    fn create_child(&'a self, c: char, arena: &'a Arena<TrieNode<'a>>) -> &'a TrieNode<'a> {
        let child = arena.alloc(TrieNode::new(c)).attach_parent(self);
        self.children.borrow_mut().push((c, child));
        child
    }

    pub(crate) fn get_or_create_child(&'a self, c: char,
                                      arena: &'a Arena<TrieNode<'a>>)
                                      -> &'a TrieNode<'a> {
        match self.get_child(c) {
            Some(child) => child,
            None => self.create_child(c, arena),
        }
    }

    /// Reconstructs the stored word by walking `parent` links up to the root,
    /// whose absent key contributes nothing to the output.
    pub(crate) fn word(&self) -> String {
        let mut units = Vec::new();
        let mut node = Some(self);
        while let Some(n) = node {
            if let Some(key) = n.key {
                units.push(key);
            }
            node = n.parent.get();
        }
        units.iter().rev().collect()
    }
}
