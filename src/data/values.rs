//! Update payloads.
//!
//! An update is either a single number (routed to the `"default"` group) or a
//! list of `(group, value)` pairs where each value is a single sample or a run
//! of samples. The variants are resolved once, when the payload is built, via
//! the `From` conversions below.

use std::collections::{BTreeMap, HashMap};

/// Sample(s) destined for one group.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl SampleValue {
    /// Number of samples carried.
    pub fn len(&self) -> usize {
        match self {
            SampleValue::Scalar(_) => 1,
            SampleValue::Sequence(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<f64> {
        match self {
            SampleValue::Scalar(y) => vec![y],
            SampleValue::Sequence(v) => v,
        }
    }
}

/// A full update: one bare number, or values keyed by group name.
///
/// Group order is the order supplied by the caller; it decides which groups
/// were already written when an unknown name aborts an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Scalar(f64),
    Groups(Vec<(String, SampleValue)>),
}

impl Values {
    /// Start an empty keyed update; add groups with [`Values::with`].
    pub fn groups() -> Self {
        Values::Groups(Vec::new())
    }

    /// Add a `(group, value)` pair. A bare scalar update is turned into a
    /// keyed one first.
    pub fn with<K: Into<String>, V: Into<SampleValue>>(self, group: K, value: V) -> Self {
        let mut pairs = self.into_pairs();
        pairs.push((group.into(), value.into()));
        Values::Groups(pairs)
    }

    /// Resolve into `(group, value)` pairs; a bare scalar targets `"default"`.
    pub fn into_pairs(self) -> Vec<(String, SampleValue)> {
        match self {
            Values::Scalar(y) => vec![(
                crate::data::series::DEFAULT_GROUP.to_string(),
                SampleValue::Scalar(y),
            )],
            Values::Groups(pairs) => pairs,
        }
    }
}

macro_rules! impl_numeric_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SampleValue {
                fn from(y: $t) -> Self {
                    SampleValue::Scalar(y as f64)
                }
            }

            impl From<$t> for Values {
                fn from(y: $t) -> Self {
                    Values::Scalar(y as f64)
                }
            }

            impl From<Vec<$t>> for SampleValue {
                fn from(v: Vec<$t>) -> Self {
                    SampleValue::Sequence(v.into_iter().map(|y| y as f64).collect())
                }
            }

            impl From<&[$t]> for SampleValue {
                fn from(v: &[$t]) -> Self {
                    SampleValue::Sequence(v.iter().map(|y| *y as f64).collect())
                }
            }

            impl<const N: usize> From<[$t; N]> for SampleValue {
                fn from(v: [$t; N]) -> Self {
                    SampleValue::Sequence(v.into_iter().map(|y| y as f64).collect())
                }
            }
        )*
    };
}

impl_numeric_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<K: Into<String>, V: Into<SampleValue>> From<Vec<(K, V)>> for Values {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Values::Groups(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<SampleValue>, const N: usize> From<[(K, V); N]> for Values {
    fn from(pairs: [(K, V); N]) -> Self {
        Values::Groups(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<SampleValue>> From<HashMap<K, V>> for Values {
    fn from(map: HashMap<K, V>) -> Self {
        Values::Groups(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<SampleValue>> From<BTreeMap<K, V>> for Values {
    fn from(map: BTreeMap<K, V>) -> Self {
        Values::Groups(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
