//! Separate chaining over a fixed array of [`ScanMap`] buckets.
//!
//! An integer-like key $`k`$ goes to bucket
//! $`((a\cdot k+b) \bmod p) \bmod m`$, where $`m`$ is the bucket count,
//! $`p`$ the smallest prime above $`m`$, and $`a\in[0, p)`$,
//! $`b\in[-1, p)`$ are drawn once per instance. Other keys go to
//! $`h(k) \bmod m`$ for a fixed-key hash $`h`$.
//!
//! The table never grows. With adversarial keys (or an unlucky $`a = 0`$)
//! a single bucket may hold everything, and operations degrade to a linear
//! scan of that bucket.

use std::fmt;

use assoc_map::{AssocMap, Put};
use rand::Rng;
use scan_map::ScanMap;

mod key;

pub use key::{BucketKey, KeyOrd};

pub const DEFAULT_CAPACITY: usize = 10;

/// Parameters of the bucket hash, fixed for the lifetime of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashParams {
    scale: i64,
    shift: i64,
    prime: i64,
}

pub struct ChainedHashMap<K, V> {
    buckets: Vec<ScanMap<K, V>>,
    params: HashParams,
    len: usize,
}

pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, ScanMap<K, V>>,
    bucket: Option<scan_map::Iter<'a, K, V>>,
    left: usize,
}

pub struct Values<'a, K, V>(Iter<'a, K, V>);

fn is_prime(n: usize) -> bool {
    n >= 2 && (2..).take_while(|&d| d * d <= n).all(|d| n % d != 0)
}

fn prime_above(n: usize) -> usize {
    (n + 1..).find(|&p| is_prime(p)).unwrap_or(usize::MAX)
}

impl HashParams {
    /// Draws `scale` from $`[0, p)`$ and `shift` from $`[-1, p)`$.
    pub fn draw<R: Rng + ?Sized>(prime: usize, rng: &mut R) -> Self {
        let prime = i64::try_from(prime).unwrap_or(i64::MAX);
        let shift = rng.gen_range(-1..prime);
        let scale = rng.gen_range(0..prime);
        Self { scale, shift, prime }
    }

    pub fn scale(&self) -> i64 { self.scale }
    pub fn shift(&self) -> i64 { self.shift }
    pub fn prime(&self) -> i64 { self.prime }

    /// Bucket index in $`[0, m)`$ for `m` buckets.
    ///
    /// # Panics
    /// Panics if `m` is zero.
    pub fn bucket(&self, key: KeyOrd, m: usize) -> usize {
        assert!(m > 0, "no buckets to route to");
        match key {
            KeyOrd::Int(k) => {
                let p = i128::from(self.prime);
                let k = k.rem_euclid(p);
                let h = (i128::from(self.scale) * k + i128::from(self.shift))
                    .rem_euclid(p);
                h as usize % m
            }
            KeyOrd::Hashed(h) => (h % m as u64) as usize,
        }
    }
}

impl<K: BucketKey, V> ChainedHashMap<K, V> {
    /// [`DEFAULT_CAPACITY`] buckets, parameters from the thread-local RNG.
    pub fn new() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }

    pub fn with_capacity(cap: usize) -> Self {
        Self::with_rng(cap, &mut rand::thread_rng())
    }

    /// `cap` buckets with hash parameters drawn from `rng`.
    ///
    /// # Panics
    /// Panics if `cap` is zero.
    pub fn with_rng<R: Rng + ?Sized>(cap: usize, rng: &mut R) -> Self {
        assert!(cap > 0, "a chained hash map needs at least one bucket");
        let params = HashParams::draw(prime_above(cap), rng);
        let buckets = (0..cap).map(|_| ScanMap::new()).collect();
        Self { buckets, params, len: 0 }
    }

    pub fn capacity(&self) -> usize { self.buckets.len() }
    pub fn params(&self) -> HashParams { self.params }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn bucket_of(&self, key: &K) -> usize {
        self.params.bucket(key.key_ord(), self.buckets.len())
    }

    /// Number of entries in each bucket.
    pub fn bucket_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|bucket| bucket.len())
    }

    fn bucket(&self, key: &K) -> &ScanMap<K, V> {
        &self.buckets[self.bucket_of(key)]
    }
    fn bucket_mut(&mut self, key: &K) -> &mut ScanMap<K, V> {
        let i = self.bucket_of(key);
        &mut self.buckets[i]
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.bucket(key).contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> { self.bucket(key).get(key) }
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.bucket_mut(key).get_mut(key)
    }

    pub fn put(&mut self, key: K, value: V) -> Put<'_, V> {
        let i = self.bucket_of(&key);
        let put = self.buckets[i].put(key, value);
        if put.is_inserted() {
            self.len += 1;
        }
        put
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.bucket_of(key);
        let res = self.buckets[i].remove(key);
        if res.is_some() {
            self.len -= 1;
        }
        res
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(ScanMap::clear);
        self.len = 0;
    }

    /// Bucket by bucket, and in insertion order within a bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), bucket: None, left: self.len }
    }
    pub fn values(&self) -> Values<'_, K, V> { Values(self.iter()) }
}

impl<K: BucketKey, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self { Self::new() }
}

impl<K: BucketKey, V> AssocMap<K, V> for ChainedHashMap<K, V> {
    type Values<'a> = Values<'a, K, V> where Self: 'a, V: 'a;

    fn contains_key(&self, key: &K) -> bool { Self::contains_key(self, key) }
    fn put(&mut self, key: K, value: V) -> Put<'_, V> {
        Self::put(self, key, value)
    }
    fn get(&self, key: &K) -> Option<&V> { Self::get(self, key) }
    fn values(&self) -> Values<'_, K, V> { Self::values(self) }
    fn len(&self) -> usize { Self::len(self) }
}

impl<K: BucketKey, V> Extend<(K, V)> for ChainedHashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K: BucketKey, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<K: BucketKey + fmt::Debug, V: fmt::Debug> fmt::Debug
    for ChainedHashMap<K, V>
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(elt) = self.bucket.as_mut().and_then(|it| it.next()) {
                self.left -= 1;
                return Some(elt);
            }
            self.bucket = Some(self.buckets.next()?.iter());
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<'a, K: Ord, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|(_, v)| v) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K: Ord, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K: Ord, V> ExactSizeIterator for Values<'_, K, V> {}

impl<'a, K: BucketKey, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}
