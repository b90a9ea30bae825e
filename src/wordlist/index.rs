use crate::wordlist::trie::trie::Trie;

/// The seam over word collections that answer membership and prefix queries.
pub trait Index<'a> {
    fn add(&'a self, word: &str);
    fn contains(&self, word: &str) -> bool;
    fn find(&self, prefix: &str) -> Vec<String>;

    fn add_all<'f, I>(&'a self, items: I)
        where I: IntoIterator<Item=&'f str>, Self: Sized {
        items.into_iter().for_each(|x| self.add(x));
    }
}

impl<'a> Index<'a> for Trie<'a> {
    fn add(&'a self, word: &str) {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn find(&self, prefix: &str) -> Vec<String> {
        Trie::find(self, prefix)
    }
}
