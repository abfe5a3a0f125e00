//! Exact-equality grouping of state values
//!
//! Grouping never bins or rounds: two values fall in the same group only when they
//! are equal. Callers that want tolerance must quantize their signal first.
//! Groups come back in first-seen order, which later stable sorts rely on for
//! tie-breaking.

use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::hash::Hash;

/// A value that can be used as a grouping key
pub trait GroupKey {
    /// Hashable key with exact-equality semantics
    type Key: Eq + Hash;

    /// Key for this value
    fn group_key(&self) -> Self::Key;
}

// -0.0 and 0.0 compare equal, so they share a key. All NaNs share one key.
impl GroupKey for f64 {
    type Key = OrderedFloat<f64>;

    fn group_key(&self) -> Self::Key {
        if *self == 0.0 {
            OrderedFloat(0.0)
        } else {
            OrderedFloat(*self)
        }
    }
}

impl GroupKey for f32 {
    type Key = OrderedFloat<f32>;

    fn group_key(&self) -> Self::Key {
        if *self == 0.0 {
            OrderedFloat(0.0)
        } else {
            OrderedFloat(*self)
        }
    }
}

macro_rules! impl_group_key_identity {
    ($($t:ty),*) => {
        $(
            impl GroupKey for $t {
                type Key = $t;

                fn group_key(&self) -> Self::Key {
                    self.clone()
                }
            }
        )*
    };
}

impl_group_key_identity!(i8, i16, i32, i64, u8, u16, u32, u64, usize, bool, char, String);

impl GroupKey for &str {
    type Key = String;

    fn group_key(&self) -> Self::Key {
        (*self).to_string()
    }
}

/// Group items by value and fold each group's payloads into an aggregate
///
/// Every distinct value yields exactly one entry, in the order its first occurrence
/// was seen. `init` creates the empty aggregate for a new group and `reduce` folds one
/// payload into it.
///
/// Empty input gives an empty result. If every value is equal the result has a single
/// group.
pub fn group_and_reduce<'a, V, X, A, I, N, F>(items: I, init: N, mut reduce: F) -> Vec<(V, A)>
where
    V: GroupKey + Clone + 'a,
    I: IntoIterator<Item = (&'a V, X)>,
    N: Fn() -> A,
    F: FnMut(&mut A, X),
{
    let mut index: HashMap<V::Key, usize> = HashMap::new();
    let mut groups: Vec<(V, A)> = Vec::new();

    for (value, payload) in items {
        let slot = *index.entry(value.group_key()).or_insert_with(|| {
            groups.push((value.clone(), init()));
            groups.len() - 1
        });
        reduce(&mut groups[slot].1, payload);
    }

    groups
}
