use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// What a key contributes to bucket selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOrd {
    /// Integer-like keys go through the randomized multiplicative hash.
    Int(i128),
    /// Everything else is reduced modulo the bucket count directly.
    Hashed(u64),
}

impl KeyOrd {
    /// Digest of `key` under a fixed-key hasher; equal keys always agree.
    pub fn hashed<T: Hash + ?Sized>(key: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        Self::Hashed(hasher.finish())
    }
}

/// Keys that [`ChainedHashMap`](crate::ChainedHashMap) can route.
///
/// Keys equal under [`Ord`] must report equal [`KeyOrd`]s.
pub trait BucketKey: Ord {
    fn key_ord(&self) -> KeyOrd;
}

macro_rules! impl_int {
    ( $($ty:ty)* ) => { $(
        impl BucketKey for $ty {
            fn key_ord(&self) -> KeyOrd { KeyOrd::Int(*self as i128) }
        }
    )* };
}

impl_int! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

impl BucketKey for char {
    fn key_ord(&self) -> KeyOrd { KeyOrd::Int(u32::from(*self).into()) }
}

impl BucketKey for bool {
    fn key_ord(&self) -> KeyOrd { KeyOrd::Int((*self).into()) }
}

macro_rules! impl_hashed {
    ( $( [$($gen:ident),*] $ty:ty, )* ) => { $(
        impl<$($gen: Hash + Ord),*> BucketKey for $ty {
            fn key_ord(&self) -> KeyOrd { KeyOrd::hashed(self) }
        }
    )* };
}

impl_hashed! {
    [] str,
    [] String,
    [T] [T],
    [T] Vec<T>,
    [T] Option<T>,
    [A, B] (A, B),
    [A, B, C] (A, B, C),
}

impl<T: BucketKey + ?Sized> BucketKey for &T {
    fn key_ord(&self) -> KeyOrd { (**self).key_ord() }
}

impl<T: BucketKey + ?Sized> BucketKey for Box<T> {
    fn key_ord(&self) -> KeyOrd { (**self).key_ord() }
}

#[test]
fn consistent_with_ord() {
    assert_eq!(42_u8.key_ord(), KeyOrd::Int(42));
    assert_eq!((-1_i64).key_ord(), KeyOrd::Int(-1));
    assert_eq!('A'.key_ord(), KeyOrd::Int(65));
    assert_eq!(true.key_ord(), KeyOrd::Int(1));

    let owned = String::from("key");
    assert_eq!(owned.key_ord(), "key".key_ord());
    assert_eq!((&owned).key_ord(), KeyOrd::hashed("key"));
    assert_ne!("key".key_ord(), "yek".key_ord());
    assert_eq!(Box::new(7_i32).key_ord(), 7_i32.key_ord());
    assert_eq!((1, "a").key_ord(), (1, "a").key_ord());
}
