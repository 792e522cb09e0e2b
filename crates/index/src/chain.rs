//! Collision chains.
//!
//! A bucket owns its nodes in a `Vec`: lookups scan front to back, inserts
//! append at the tail, and unlinking keeps the relative order of the rest.

use core::borrow::Borrow;

/// One key/value slot in a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainNode<K, V> {
    pub key: K,
    pub value: V,
}

/// All nodes whose keys hash to the same bucket, in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<K, V> {
    nodes: Vec<ChainNode<K, V>>,
}

impl<K, V> Chain<K, V> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate `(key, value)` pairs from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.nodes.iter().map(|node| (&node.key, &node.value))
    }

    /// Link a new node after the current tail.
    pub fn push_back(&mut self, key: K, value: V) {
        self.nodes.push(ChainNode { key, value });
    }
}

impl<K: Eq, V> Chain<K, V> {
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.nodes.iter().position(|node| node.key.borrow() == key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.nodes
            .iter()
            .find(|node| node.key.borrow() == key)
            .map(|node| &node.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.nodes
            .iter_mut()
            .find(|node| node.key.borrow() == key)
            .map(|node| &mut node.value)
    }

    /// Unlink the node holding `key`, splicing its predecessor to its successor.
    pub fn unlink<Q>(&mut self, key: &Q) -> Option<ChainNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let idx = self.position(key)?;
        Some(self.nodes.remove(idx))
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for Chain<K, V> {
    type Item = ChainNode<K, V>;
    type IntoIter = std::vec::IntoIter<ChainNode<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
