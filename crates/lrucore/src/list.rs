//! Recency-ordered doubly-linked list
//!
//! Nodes live in a slot vector and link to each other by index, so the
//! list never needs shared ownership. Freed slots are recycled through a
//! free list. Head is the most recently used entry, tail the least.

use crate::entry::Entry;

/// Node in the recency list
struct Node<K, V> {
    entry: Entry<K, V>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Arena-backed doubly-linked list of entries
pub(crate) struct RecencyList<K, V> {
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// Create an empty list with room for `capacity` nodes
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Entry stored at `idx`, if the slot is live
    pub(crate) fn get(&self, idx: usize) -> Option<&Entry<K, V>> {
        self.nodes.get(idx)?.as_ref().map(|node| &node.entry)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Entry<K, V>> {
        self.nodes.get_mut(idx)?.as_mut().map(|node| &mut node.entry)
    }

    pub(crate) fn front(&self) -> Option<&Entry<K, V>> {
        self.head.and_then(|idx| self.get(idx))
    }

    pub(crate) fn back(&self) -> Option<&Entry<K, V>> {
        self.tail.and_then(|idx| self.get(idx))
    }

    /// Insert an entry at the head and return its slot
    pub(crate) fn push_front(&mut self, entry: Entry<K, V>) -> usize {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            entry,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;

        idx
    }

    /// Move a live node to the head. Returns false for a vacant slot.
    pub(crate) fn move_to_front(&mut self, idx: usize) -> bool {
        if !self.is_live(idx) {
            return false;
        }
        if self.head == Some(idx) {
            return true;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        true
    }

    /// Detach and return the entry at `idx`
    pub(crate) fn remove(&mut self, idx: usize) -> Option<Entry<K, V>> {
        if !self.is_live(idx) {
            return None;
        }

        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        self.len -= 1;

        Some(node.entry)
    }

    /// Remove the least recently used entry
    pub(crate) fn pop_back(&mut self) -> Option<Entry<K, V>> {
        let idx = self.tail?;
        self.remove(idx)
    }

    /// Remove the most recently used entry
    pub(crate) fn pop_front(&mut self) -> Option<Entry<K, V>> {
        let idx = self.head?;
        self.remove(idx)
    }

    /// Drop every node and release the arena
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate entries from head (most recent) to tail
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn is_live(&self, idx: usize) -> bool {
        matches!(self.nodes.get(idx), Some(Some(_)))
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

/// Head-to-tail iterator over a [`RecencyList`]
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.nodes.get(idx)?.as_ref()?;
        self.cursor = node.next;
        Some(&node.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<u32, &'static str>) -> Vec<u32> {
        list.iter().map(|e| e.key).collect()
    }

    fn filled() -> (RecencyList<u32, &'static str>, Vec<usize>) {
        let mut list = RecencyList::with_capacity(4);
        let slots = vec![
            list.push_front(Entry::new(1, "a", 1)),
            list.push_front(Entry::new(2, "b", 2)),
            list.push_front(Entry::new(3, "c", 3)),
        ];
        (list, slots)
    }

    #[test]
    fn test_push_front_order() {
        let (list, _) = filled();

        assert_eq!(keys(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front().map(|e| e.key), Some(3));
        assert_eq!(list.back().map(|e| e.key), Some(1));
    }

    #[test]
    fn test_move_to_front() {
        let (mut list, slots) = filled();

        assert!(list.move_to_front(slots[0]));
        assert_eq!(keys(&list), vec![1, 3, 2]);

        assert!(list.move_to_front(slots[1]));
        assert_eq!(keys(&list), vec![2, 1, 3]);
        assert_eq!(list.back().map(|e| e.key), Some(3));

        // Already at head
        assert!(list.move_to_front(slots[1]));
        assert_eq!(keys(&list), vec![2, 1, 3]);
    }

    #[test]
    fn test_pop_back_and_front() {
        let (mut list, _) = filled();

        assert_eq!(list.pop_back().map(|e| e.key), Some(1));
        assert_eq!(list.pop_front().map(|e| e.key), Some(3));
        assert_eq!(keys(&list), vec![2]);
        assert_eq!(list.pop_back().map(|e| e.key), Some(2));
        assert_eq!(list.len(), 0);
        assert!(list.pop_back().is_none());
        assert!(list.front().is_none());
    }

    #[test]
    fn test_remove_middle() {
        let (mut list, slots) = filled();

        assert_eq!(list.remove(slots[1]).map(|e| e.value), Some("b"));
        assert_eq!(keys(&list), vec![3, 1]);
        assert!(list.remove(slots[1]).is_none());
        assert!(!list.move_to_front(slots[1]));
        assert!(list.get(slots[1]).is_none());
    }

    #[test]
    fn test_slot_reuse() {
        let (mut list, slots) = filled();

        list.remove(slots[0]);
        let idx = list.push_front(Entry::new(4, "d", 4));

        assert_eq!(idx, slots[0]);
        assert_eq!(keys(&list), vec![4, 3, 2]);
        assert_eq!(list.back().map(|e| e.key), Some(2));
    }

    #[test]
    fn test_clear() {
        let (mut list, slots) = filled();

        list.clear();

        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
        assert!(list.get(slots[0]).is_none());
        assert!(list.get_mut(99).is_none());
    }
}
