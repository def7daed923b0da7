use std::fmt;

/// Binary min-heap on an implicit complete binary tree.
///
/// The node at index $`i`$ has children at $`2i+1`$ and $`2i+2`$, and every
/// node is no less than its parent. Elements are only appended at the end
/// and removed from the end, so the tree never has gaps.
///
/// # Examples
/// ```
/// use min_heap::{EmptyContainer, MinHeap};
///
/// let mut heap: MinHeap<_> = [5, 3, 1, 2, 6].into_iter().collect();
/// assert_eq!(heap.peek_min(), Ok(&1));
///
/// let mut sorted = vec![];
/// while let Ok(x) = heap.pop_min() {
///     sorted.push(x);
/// }
/// assert_eq!(sorted, [1, 2, 3, 5, 6]);
/// assert_eq!(heap.pop_min(), Err(EmptyContainer));
/// ```
#[derive(Clone)]
pub struct MinHeap<T> {
    buf: Vec<T>,
}

/// Returned when the minimum of an empty heap is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("container is empty")]
pub struct EmptyContainer;

fn parent(i: usize) -> Option<usize> { i.checked_sub(1).map(|i| i / 2) }

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self { Self { buf: vec![] } }
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize { self.buf.len() }
    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    /// $`O(\log(n))`$.
    pub fn push(&mut self, elt: T) {
        self.buf.push(elt);
        self.sift_up(self.buf.len() - 1);
    }

    /// $`O(1)`$.
    pub fn peek_min(&self) -> Result<&T, EmptyContainer> {
        self.buf.first().ok_or(EmptyContainer)
    }

    /// Removes the root, refills it with the last element and sifts that
    /// element down. $`O(\log(n))`$.
    pub fn pop_min(&mut self) -> Result<T, EmptyContainer> {
        let last = self.buf.pop().ok_or(EmptyContainer)?;
        if self.buf.is_empty() {
            return Ok(last);
        }
        let min = std::mem::replace(&mut self.buf[0], last);
        self.sift_down(0);
        Ok(min)
    }

    pub fn clear(&mut self) { self.buf.clear() }

    /// Elements in storage (level) order, not in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.buf.iter() }

    /// The implicit tree, root first.
    pub fn as_slice(&self) -> &[T] { &self.buf }

    pub fn into_vec(self) -> Vec<T> { self.buf }

    fn sift_up(&mut self, mut i: usize) {
        while let Some(p) = parent(i) {
            if self.buf[i] >= self.buf[p] {
                break;
            }
            self.buf.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let node = &self.buf[i];
            let (il, ir) = (2 * i + 1, 2 * i + 2);
            let next = match (self.buf.get(il), self.buf.get(ir)) {
                (None, None) => None,
                (Some(left), None) => (node > left).then_some(il),
                (None, Some(right)) => (node > right).then_some(ir),
                // equal children: the left one goes up
                (Some(left), Some(right)) => {
                    if node > left && left <= right {
                        Some(il)
                    } else if node > right {
                        Some(ir)
                    } else {
                        None
                    }
                }
            };
            match next {
                Some(j) => {
                    self.buf.swap(i, j);
                    i = j;
                }
                None => break,
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push(elt);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.buf.iter()).finish()
    }
}

/// Space-separated, in storage order.
impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elt) in self.buf.iter().enumerate() {
            if i > 0 {
                fmt.write_str(" ")?;
            }
            write!(fmt, "{elt}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cmp::{Ordering, Reverse},
        collections::BinaryHeap,
    };

    use proptest::prelude::*;
    use rand::Rng;
    use randgen::{seeded_rng, Gen, Multiset};

    use super::*;

    fn is_heap<T: Ord>(a: &[T]) -> bool {
        (1..a.len()).all(|i| a[i] >= a[parent(i).unwrap()])
    }

    fn drain<T: Ord>(heap: &mut MinHeap<T>) -> Vec<T> {
        let mut res = vec![];
        while let Ok(elt) = heap.pop_min() {
            res.push(elt);
        }
        res
    }

    #[test]
    fn sanity_check() {
        let mut heap = MinHeap::new();
        for x in [5, 3, 1, 2, 6] {
            heap.push(x);
            assert!(is_heap(heap.as_slice()));
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.to_string(), "1 2 3 5 6");
        assert_eq!(heap.peek_min(), Ok(&1));

        assert_eq!(heap.pop_min(), Ok(1));
        assert_eq!(heap.to_string(), "2 5 3 6");
        assert_eq!(format!("{heap:?}"), "[2, 5, 3, 6]");

        assert_eq!(drain(&mut heap), [2, 3, 5, 6]);
        assert!(heap.is_empty());
    }

    #[test]
    fn empty() {
        let mut heap = MinHeap::<i32>::default();
        assert_eq!(heap.peek_min(), Err(EmptyContainer));
        assert_eq!(heap.pop_min(), Err(EmptyContainer));
        assert_eq!(EmptyContainer.to_string(), "container is empty");

        heap.push(7);
        assert_eq!(heap.pop_min(), Ok(7));
        assert_eq!(heap.pop_min(), Err(EmptyContainer));
        assert_eq!(heap.to_string(), "");
    }

    #[test]
    fn equal_children_prefer_left() {
        #[derive(Debug)]
        struct Tagged(u32, char);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> Ordering { self.0.cmp(&other.0) }
        }

        let mut heap: MinHeap<_> =
            [Tagged(1, 'r'), Tagged(2, 'a'), Tagged(2, 'b'), Tagged(9, 'z')]
                .into_iter()
                .collect();
        assert_eq!(heap.pop_min().map(|t| t.1), Ok('r'));
        let tags: String = heap.iter().map(|t| t.1).collect();
        assert_eq!(tags, "azb");
    }

    #[test]
    fn duplicates() {
        let mut heap: MinHeap<_> = [4, 4, 1, 4, 1, 1, 4].into_iter().collect();
        assert!(is_heap(heap.as_slice()));
        assert_eq!(drain(&mut heap), [1, 1, 1, 4, 4, 4, 4]);
    }

    #[test]
    fn against_binary_heap() {
        let mut rng = seeded_rng();
        let mut actual = MinHeap::with_capacity(64);
        let mut expected = BinaryHeap::new();
        for _ in 0..10_000 {
            if rng.gen_ratio(3, 5) {
                let x = (-100..100).generate(&mut rng);
                actual.push(x);
                expected.push(Reverse(x));
            } else {
                assert_eq!(
                    actual.pop_min().ok(),
                    expected.pop().map(|Reverse(x)| x)
                );
            }
            assert_eq!(actual.len(), expected.len());
            assert_eq!(
                actual.peek_min().ok(),
                expected.peek().map(|Reverse(x)| x)
            );
            assert!(is_heap(actual.as_slice()));
        }
    }

    #[test]
    fn heap_sort() {
        let mut rng = seeded_rng();
        for len in [0, 1, 2, 3, 10, 100, 1000] {
            let a = Multiset { bound: -10..10, len }.generate(&mut rng);
            let mut heap = MinHeap::new();
            heap.extend(a.iter().copied());
            let mut expected = a;
            expected.sort_unstable();
            assert_eq!(drain(&mut heap), expected);
        }
    }

    #[test]
    fn clear_and_into_vec() {
        let mut heap: MinHeap<_> = (0..10).rev().collect();
        let storage = heap.clone().into_vec();
        assert_eq!(storage.len(), 10);
        assert!(is_heap(&storage));
        assert_eq!(heap.iter().count(), 10);
        assert_eq!((&heap).into_iter().min(), Some(&0));

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek_min(), Err(EmptyContainer));
    }

    proptest! {
        #[test]
        fn heap_order_holds(
            ops in prop::collection::vec(
                prop::option::of(any::<i16>()),
                0..300,
            ),
        ) {
            let mut heap = MinHeap::new();
            for op in ops {
                match op {
                    Some(x) => heap.push(x),
                    None => {
                        let min = heap.as_slice().iter().min().copied();
                        prop_assert_eq!(heap.pop_min().ok(), min);
                    }
                }
                prop_assert!(is_heap(heap.as_slice()));
            }
        }

        #[test]
        fn extraction_is_sorted_permutation(
            a in prop::collection::vec(any::<i32>(), 0..200),
        ) {
            let mut heap: MinHeap<_> = a.iter().copied().collect();
            let out = drain(&mut heap);
            prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
            let mut expected = a;
            expected.sort_unstable();
            prop_assert_eq!(out, expected);
        }
    }
}
