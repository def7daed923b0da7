use std::{collections::BTreeSet, ops::Range};

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Rng;

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` values drawn independently from `bound`; duplicates allowed.
pub struct Multiset<B> {
    pub bound: B,
    pub len: usize,
}

/// `len` pairwise-distinct values from `bound`, in ascending order.
pub struct StrictAsc<B> {
    pub bound: B,
    pub len: usize,
}

/// The output of `G`, shuffled.
pub struct Shuffled<G>(pub G);

// 32 random bytes; fixed so that failures reproduce
const SEED: [u8; 32] = [
    0x55, 0xEF, 0xE0, 0x3C, 0x71, 0xDA, 0xFC, 0xAB, 0x5C, 0x1A, 0x9F, 0xEB,
    0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A, 0xF5, 0x67,
    0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
];

/// A reproducible generator shared by tests and benches.
pub fn seeded_rng() -> ChaCha20Rng { ChaCha20Rng::from_seed(SEED) }

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Multiset<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.bound.clone());
        (0..self.len).map(|_| between.sample(rng)).collect()
    }
}

impl Gen for StrictAsc<Range<i32>> {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound: Range { start, end }, len } = self;
        assert!(
            *len <= (end - start) as usize,
            "cannot draw {len} distinct values from {start}..{end}"
        );

        // n = end - start, k = len
        let dense = (2 * len) as i32 > (end - start) / 2;
        let count = if dense { (end - start) as usize - len } else { *len };

        let mut seen = BTreeSet::new();
        while seen.len() < count {
            seen.insert((*start..*end).generate(rng));
        }

        if dense {
            (*start..*end).filter(|x| !seen.contains(x)).collect()
        } else {
            seen.into_iter().collect()
        }
    }
}

impl<G, T> Gen for Shuffled<G>
where
    G: Gen<Output = Vec<T>>,
{
    type Output = Vec<T>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut res = self.0.generate(rng);
        res.shuffle(rng);
        res
    }
}

#[test]
fn shapes() {
    let mut rng = seeded_rng();

    let a = Multiset { bound: 0..3, len: 100 }.generate(&mut rng);
    assert_eq!(a.len(), 100);
    assert!(a.iter().all(|x| (0..3).contains(x)));

    for len in [0, 3, 10, 99, 100] {
        let a = StrictAsc { bound: -50..50, len }.generate(&mut rng);
        assert_eq!(a.len(), len);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    let mut a = Shuffled(StrictAsc { bound: 0..1000, len: 1000 })
        .generate(&mut rng);
    assert_ne!(a, (0..1000).collect::<Vec<_>>());
    a.sort_unstable();
    assert_eq!(a, (0..1000).collect::<Vec<_>>());
}

#[test]
fn uniformity() {
    use std::collections::BTreeMap;

    let mut rng = seeded_rng();
    let n = 10_usize.pow(6);

    let mut map = BTreeMap::new();
    for _ in 0..n {
        let tmp = StrictAsc { bound: 0..4, len: 3 }.generate(&mut rng);
        *map.entry(tmp).or_insert(0) += 1;
    }
    let k = 4;
    assert_eq!(map.len(), k);
    for &v in map.values() {
        assert!(v >= (n / k) * 99 / 100);
        assert!(v <= (n / k) * 101 / 100);
    }
}
