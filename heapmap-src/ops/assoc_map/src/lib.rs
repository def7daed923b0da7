/// Capabilities shared by the associative containers.
///
/// Keys are compared by [`Ord`]; two keys are the same key iff
/// `a.cmp(&b) == Ordering::Equal`. Implementors keep keys pairwise distinct.
pub trait AssocMap<K, V> {
    type Values<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;

    fn contains_key(&self, key: &K) -> bool;

    /// Overwrites the value of an existing key in place, or appends a new
    /// entry.
    fn put(&mut self, key: K, value: V) -> Put<'_, V>;

    fn get(&self, key: &K) -> Option<&V>;

    /// Values in the container's iteration order. Each call starts afresh
    /// from the current contents.
    fn values(&self) -> Self::Values<'_>;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Outcome of [`AssocMap::put`].
///
/// [`Put::value`] is the value a caller historically gets back from `put`:
/// the previous value when a key is overwritten, and the freshly stored value
/// when a new key is added. [`Put::into_previous`] gives the usual reading
/// where a new key has no previous value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Put<'a, V> {
    Replaced(V),
    Inserted(&'a V),
}

impl<'a, V> Put<'a, V> {
    pub fn is_replaced(&self) -> bool { matches!(self, Self::Replaced(_)) }
    pub fn is_inserted(&self) -> bool { matches!(self, Self::Inserted(_)) }

    pub fn value(&self) -> &V {
        match self {
            Self::Replaced(old) => old,
            Self::Inserted(new) => new,
        }
    }

    pub fn cloned(&self) -> V
    where
        V: Clone,
    {
        self.value().clone()
    }

    pub fn into_previous(self) -> Option<V> {
        match self {
            Self::Replaced(old) => Some(old),
            Self::Inserted(_) => None,
        }
    }
}

#[test]
fn put_outcome() {
    let replaced = Put::<&str>::Replaced("old");
    assert!(replaced.is_replaced());
    assert_eq!(replaced.value(), &"old");
    assert_eq!(format!("{replaced:?}"), r#"Replaced("old")"#);
    assert_eq!(replaced.into_previous(), Some("old"));

    let stored = String::from("new");
    let inserted = Put::Inserted(&stored);
    assert!(inserted.is_inserted());
    assert_eq!(inserted.cloned(), "new");
    assert_eq!(format!("{inserted:?}"), r#"Inserted("new")"#);
    assert_eq!(inserted.into_previous(), None);
}
