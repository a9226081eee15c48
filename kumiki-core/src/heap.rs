//! Binary min-heap used as the candidate-arc queue of each partial tree.
//!
//! Elements are stored in a flat vector in implicit binary-tree layout. The
//! sift operations only move an element past a strictly smaller (or larger)
//! one, so for a given sequence of operations the extraction order of equal
//! elements is fixed.

/// Binary min-heap ordered by [`Ord`].
///
/// # Examples
/// ```
/// use kumiki_core::MinHeap;
///
/// let mut heap: MinHeap<u32> = [5, 1, 3].into_iter().collect();
/// assert_eq!(heap.delete_min(), Some(1));
/// assert_eq!(heap.delete_min(), Some(3));
/// assert_eq!(heap.delete_min(), Some(5));
/// assert_eq!(heap.delete_min(), None);
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `item` in `O(log n)`.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the smallest element in `O(log n)`.
    ///
    /// Returns `None` once the heap is exhausted.
    pub fn delete_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Returns the smallest element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Moves every element of `other` into this heap.
    pub fn merge(&mut self, other: Self) {
        self.items.reserve(other.items.len());
        for item in other.items {
            self.insert(item);
        }
    }

    /// Returns the number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the heap holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] >= self.items[parent] {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.items[right] < self.items[left] {
                right
            } else {
                left
            };
            if self.items[smaller] >= self.items[index] {
                break;
            }
            self.items.swap(index, smaller);
            index = smaller;
        }
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
