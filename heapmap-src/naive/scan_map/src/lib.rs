use std::{cmp::Ordering, fmt};

use assoc_map::{AssocMap, Put};

/// Insertion-ordered list of entries searched linearly.
///
/// Keys are matched by `cmp == Equal`, so every operation that takes a key
/// is $`O(n)`$.
#[derive(Clone)]
pub struct ScanMap<K, V>(Vec<(K, V)>);

pub struct Iter<'a, K, V>(std::slice::Iter<'a, (K, V)>);
pub struct Keys<'a, K, V>(std::slice::Iter<'a, (K, V)>);
pub struct Values<'a, K, V>(std::slice::Iter<'a, (K, V)>);

fn same<K: Ord>(lhs: &K, rhs: &K) -> bool { lhs.cmp(rhs) == Ordering::Equal }

impl<K: Ord, V> ScanMap<K, V> {
    pub fn new() -> Self { Self(vec![]) }
    /// The hint only pre-allocates; the map still grows past it.
    pub fn with_capacity(hint: usize) -> Self {
        Self(Vec::with_capacity(hint))
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    fn position(&self, key: &K) -> Option<usize> {
        self.0.iter().position(|(k, _)| same(k, key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| same(k, key)).map(|(_, v)| v)
    }
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.0.iter_mut().find(|(k, _)| same(k, key)).map(|(_, v)| v)
    }

    pub fn put(&mut self, key: K, value: V) -> Put<'_, V> {
        match self.position(&key) {
            Some(i) => {
                Put::Replaced(std::mem::replace(&mut self.0[i].1, value))
            }
            None => {
                let i = self.0.len();
                self.0.push((key, value));
                Put::Inserted(&self.0[i].1)
            }
        }
    }

    /// Removes `key`; the remaining entries keep their relative order.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.position(key).map(|i| self.0.remove(i).1)
    }

    pub fn clear(&mut self) { self.0.clear() }

    pub fn iter(&self) -> Iter<'_, K, V> { Iter(self.0.iter()) }
    pub fn keys(&self) -> Keys<'_, K, V> { Keys(self.0.iter()) }
    pub fn values(&self) -> Values<'_, K, V> { Values(self.0.iter()) }
}

impl<K: Ord, V> Default for ScanMap<K, V> {
    fn default() -> Self { Self::new() }
}

impl<K: Ord, V> AssocMap<K, V> for ScanMap<K, V> {
    type Values<'a> = Values<'a, K, V> where Self: 'a, V: 'a;

    fn contains_key(&self, key: &K) -> bool { Self::contains_key(self, key) }
    fn put(&mut self, key: K, value: V) -> Put<'_, V> {
        Self::put(self, key, value)
    }
    fn get(&self, key: &K) -> Option<&V> { Self::get(self, key) }
    fn values(&self) -> Values<'_, K, V> { Self::values(self) }
    fn len(&self) -> usize { Self::len(self) }
}

impl<K: Ord, V> Extend<(K, V)> for ScanMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for ScanMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ScanMap<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k, v))
    }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|(k, _)| k) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|(_, v)| v) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<'a, K: Ord, V> IntoIterator for &'a ScanMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}
