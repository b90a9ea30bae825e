use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};
use typed_arena::Arena;

use crate::alphabet::normalize;

/// A word matched by [`PayloadTrie::find`], paired with the payload stored at
/// its most recent payload-carrying insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindResult<T> {
    pub word: String,
    pub payload: Option<T>,
}

pub(crate) struct PayloadTrieNode<'a, T> {
    pub(crate) key: Option<char>,
    pub(crate) children: RefCell<Vec<(char, &'a PayloadTrieNode<'a, T>)>>,
    pub(crate) parent: Cell<Option<&'a PayloadTrieNode<'a, T>>>,
    pub(crate) is_terminal: Cell<bool>,
    pub(crate) payload: RefCell<Option<T>>,
}

impl<'a, T> Default for PayloadTrieNode<'a, T> {
    fn default() -> Self {
        PayloadTrieNode {
            key: None,
            children: RefCell::new(Vec::new()),
            parent: Cell::new(None),
            is_terminal: Cell::new(false),
            payload: RefCell::new(None),
        }
    }
}

impl<T> Debug for PayloadTrieNode<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadTrieNode")
            .field("key", &self.key)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.borrow().iter()
                .map(|&(key, _)| key)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a, T> PayloadTrieNode<'a, T> {
    fn new(c: char) -> PayloadTrieNode<'a, T> {
        PayloadTrieNode {
            key: Some(c),
            ..Default::default()
        }
    }

    fn get_child(&self, c: char) -> Option<&'a PayloadTrieNode<'a, T>> {
        self.children.borrow().iter()
            .find(|&&(key, _)| key == c)
            .map(|&(_, child)| child)
    }

    fn attach_parent(&'a self, parent: &'a PayloadTrieNode<'a, T>) -> &'a PayloadTrieNode<'a, T> {
        self.parent.set(Some(parent));
        self
    }

    fn create_child(&'a self, c: char,
                    arena: &'a Arena<PayloadTrieNode<'a, T>>)
                    -> &'a PayloadTrieNode<'a, T> {
        let child = arena.alloc(PayloadTrieNode::new(c)).attach_parent(self);
        self.children.borrow_mut().push((c, child));
        child
    }

    fn get_or_create_child(&'a self, c: char,
                           arena: &'a Arena<PayloadTrieNode<'a, T>>)
                           -> &'a PayloadTrieNode<'a, T> {
        match self.get_child(c) {
            Some(child) => child,
            None => self.create_child(c, arena),
        }
    }

    /// Walks `parent` links up to the root to rebuild the word, then pairs it
    /// with a copy of this node's payload.
    fn result(&self) -> FindResult<T>
        where T: Clone {
        let mut units = Vec::new();
        let mut node = Some(self);
        while let Some(n) = node {
            if let Some(key) = n.key {
                units.push(key);
            }
            node = n.parent.get();
        }
        FindResult {
            word: units.iter().rev().collect(),
            payload: self.payload.borrow().clone(),
        }
    }
}

/// The payload-carrying twin of [`crate::wordlist::trie::trie::Trie`]: same
/// structure and ordering contract, with optional per-word data of type `T`.
pub struct PayloadTrie<'a, T> {
    root: PayloadTrieNode<'a, T>,
    arena: Arena<PayloadTrieNode<'a, T>>,
}

impl<T> PayloadTrie<'_, T> {
    pub fn new() -> Self {
        PayloadTrie {
            root: Default::default(),
            arena: Arena::new(),
        }
    }
}

impl<T> Default for PayloadTrie<'_, T> {
    fn default() -> Self {
        PayloadTrie::new()
    }
}

impl<'a, T> PayloadTrie<'a, T> {
    pub fn insert(&'a self, word: &str) {
        self.store(word, None)
    }

    pub fn insert_with(&'a self, word: &str, payload: T) {
        self.store(word, Some(payload))
    }

    fn store(&'a self, word: &str, payload: Option<T>) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        let mut current = &self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c, &self.arena);
        }
        current.is_terminal.set(true);
        // an insertion without a payload keeps whatever was already stored
        if payload.is_some() {
            *current.payload.borrow_mut() = payload;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(&normalize(word))
            .map(|node| node.is_terminal.get())
            .unwrap_or(false)
    }

    /// Every stored word starting with `prefix` (case-folded) with its
    /// payload, depth-first, children in insertion order.
    pub fn find(&self, prefix: &str) -> Vec<FindResult<T>>
        where T: Clone {
        let mut output = Vec::new();
        if let Some(node) = self.get_node(&normalize(prefix)) {
            Self::collect_words(node, &mut output);
        }
        output
    }

    fn get_node(&self, word: &str) -> Option<&PayloadTrieNode<'a, T>> {
        let mut node = &self.root;
        for c in word.chars() {
            node = node.get_child(c)?;
        }
        Some(node)
    }

    fn collect_words(node: &PayloadTrieNode<'a, T>, output: &mut Vec<FindResult<T>>)
        where T: Clone {
        if node.is_terminal.get() {
            output.push(node.result());
        }
        for &(_, child) in node.children.borrow().iter() {
            Self::collect_words(child, output);
        }
    }
}
