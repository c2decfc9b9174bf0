//! trie.rs - The code-point prefix tree that stores the sensitive-word dictionary.
//!
//! Every node is exclusively owned by its parent, so the tree is a strict
//! hierarchy with no back-pointers. Deletion re-walks the path from the root
//! and prunes on the way back up.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{HashMap, HashSet};

use log::trace;

/// A single node of the trie.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// True when the path from the root to this node spells a complete word.
    pub is_word_end: bool,
    /// Outgoing edges, keyed by (folded) code point.
    pub children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// A node that carries no word and leads nowhere must not stay in the tree.
    fn is_dead(&self) -> bool {
        !self.is_word_end && self.children.is_empty()
    }

    fn count_descendants(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.count_descendants())
            .sum()
    }
}

/// Folds a single code point to lower case.
///
/// Folding is kept one-to-one so byte and character offsets reported by a
/// scan still describe the original text. When the lowercase form expands to
/// several code points only the first is kept, so `'İ'` folds to `'i'`.
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// The sensitive-word dictionary.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    case_insensitive: bool,
    noise: HashSet<char>,
    words: usize,
}

impl Trie {
    /// Creates an empty, case-sensitive trie with no noise characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trie. `case_insensitive` is fixed for the trie's lifetime
    /// because it determines the keys of every inserted node.
    pub fn with_options<I>(case_insensitive: bool, noise: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut trie = Self {
            case_insensitive,
            ..Self::default()
        };
        trie.add_noise(noise);
        trie
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Folds `c` if this trie is case-insensitive.
    #[inline]
    pub fn fold(&self, c: char) -> char {
        if self.case_insensitive {
            fold_char(c)
        } else {
            c
        }
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Registers characters that may be skipped inside an in-progress match.
    pub fn add_noise<I>(&mut self, noise: I)
    where
        I: IntoIterator<Item = char>,
    {
        for c in noise {
            let folded = self.fold(c);
            self.noise.insert(folded);
        }
    }

    /// Returns true if the (already folded) character `c` is a noise character.
    #[inline]
    pub fn is_noise(&self, c: char) -> bool {
        self.noise.contains(&c)
    }

    pub fn noise(&self) -> &HashSet<char> {
        &self.noise
    }

    /// Adds `word` to the dictionary. Empty words are ignored and repeated
    /// inserts leave the tree unchanged.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let case_insensitive = self.case_insensitive;
        let mut node = &mut self.root;
        for c in word.chars() {
            let key = if case_insensitive { fold_char(c) } else { c };
            node = node.children.entry(key).or_default();
        }

        if !node.is_word_end {
            node.is_word_end = true;
            self.words += 1;
            trace!("Inserted word #{} into trie.", self.words);
        }
    }

    /// Removes `word` from the dictionary and prunes nodes that no longer lead
    /// to any word. Returns true if the word was present.
    pub fn delete(&mut self, word: &str) -> bool {
        let path: Vec<char> = word.chars().map(|c| self.fold(c)).collect();
        let removed = remove_path(&mut self.root, &path);
        if removed {
            self.words -= 1;
            trace!("Deleted word from trie; {} word(s) remain.", self.words);
        }
        removed
    }

    /// Exact dictionary membership (after folding), as opposed to scanning
    /// a text for embedded words.
    pub fn contains_word(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.children.get(&self.fold(c)) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word_end
    }

    /// Lists every stored word in its folded form. Order is unspecified.
    pub fn list_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        let mut prefix = String::new();
        collect_words(&self.root, &mut prefix, &mut words);
        words
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.count_descendants()
    }
}

/// Clears the word end at the end of `path` and prunes dead nodes on the way
/// back to the root. Pruning stops at the first node that still has children
/// or is itself a word end.
fn remove_path(node: &mut TrieNode, path: &[char]) -> bool {
    let Some((head, rest)) = path.split_first() else {
        let was_word = node.is_word_end;
        node.is_word_end = false;
        return was_word;
    };

    let Some(child) = node.children.get_mut(head) else {
        return false;
    };

    let removed = remove_path(child, rest);
    if removed && child.is_dead() {
        node.children.remove(head);
    }
    removed
}

fn collect_words(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>) {
    if node.is_word_end {
        out.push(prefix.clone());
    }
    for (c, child) in &node.children {
        prefix.push(*c);
        collect_words(child, prefix, out);
        prefix.pop();
    }
}
