//! Arena-backed double-ended queue.
//!
//! Nodes live in a [`SlotMap`]; `prev`/`next` are plain keys with no
//! ownership implication, so no reference-counting or cycle-avoidance
//! tricks are needed. `Clone` performs a value-wise deep copy: mutating
//! a clone never disturbs the original, which is what lets every
//! lookahead branch carry its own private, disposable queue.

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    struct NodeKey;
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

#[derive(Clone)]
pub struct Deque<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self { nodes: SlotMap::with_key(), front: None, back: None }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.front.map(|key| &self.nodes[key].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.back.map(|key| &self.nodes[key].value)
    }

    pub fn push_back(&mut self, value: T) {
        let key = self.nodes.insert(Node { value, prev: self.back, next: None });
        match self.back {
            Some(old_back) => self.nodes[old_back].next = Some(key),
            None => self.front = Some(key),
        }
        self.back = Some(key);
    }

    pub fn push_front(&mut self, value: T) {
        let key = self.nodes.insert(Node { value, prev: None, next: self.front });
        match self.front {
            Some(old_front) => self.nodes[old_front].prev = Some(key),
            None => self.back = Some(key),
        }
        self.front = Some(key);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.front?;
        let node = self.nodes.remove(key)?;
        self.front = node.next;
        match self.front {
            Some(new_front) => self.nodes[new_front].prev = None,
            None => self.back = None,
        }
        Some(node.value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.back?;
        let node = self.nodes.remove(key)?;
        self.back = node.prev;
        match self.back {
            Some(new_back) => self.nodes[new_back].next = None,
            None => self.front = None,
        }
        Some(node.value)
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { deque: self, cursor: self.front }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    cursor: Option<NodeKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let key = self.cursor?;
        let node = &self.deque.nodes[key];
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
