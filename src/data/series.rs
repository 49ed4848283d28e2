use std::collections::HashMap;

use crate::data::values::SampleValue;
use crate::error::{LivePlotError, Result};

/// Group name used when no groups are declared and for bare-number updates.
pub const DEFAULT_GROUP: &str = "default";

/// Named, append-only sample buffers with a fixed group set.
///
/// Groups are stored by name with a separate `order` vector so iteration
/// follows declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesCollection {
    series: HashMap<String, Vec<f64>>,
    order: Vec<String>,
}

impl SeriesCollection {
    /// Create empty buffers for `groups`. Duplicate names collapse to their
    /// first occurrence; an empty list yields the single `"default"` group.
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for name in groups {
            let name = name.into();
            if out.series.contains_key(&name) {
                log::warn!("group `{name}` declared more than once; keeping the first");
                continue;
            }
            out.series.insert(name.clone(), Vec::new());
            out.order.push(name);
        }
        if out.order.is_empty() {
            out.series.insert(DEFAULT_GROUP.to_string(), Vec::new());
            out.order.push(DEFAULT_GROUP.to_string());
        }
        out
    }

    /// Group names in declaration order.
    pub fn groups(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Length of the longest series.
    pub fn max_len(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterate `(group, samples)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.series.get(name).map(|s| (name.as_str(), s.as_slice())))
    }

    /// Append (or with `reset`, replace by) `value` on group `name`.
    pub fn apply(&mut self, name: &str, value: SampleValue, reset: bool) -> Result<()> {
        let buf = self
            .series
            .get_mut(name)
            .ok_or_else(|| LivePlotError::UnknownGroup(name.to_string()))?;
        match (value, reset) {
            (SampleValue::Scalar(y), false) => buf.push(y),
            (SampleValue::Sequence(ys), false) => buf.extend(ys),
            (value, true) => *buf = value.into_vec(),
        }
        Ok(())
    }

    /// Replace the whole buffer of group `name`.
    pub fn replace(&mut self, name: &str, samples: Vec<f64>) -> Result<()> {
        self.apply(name, SampleValue::Sequence(samples), true)
    }

    /// Empty every buffer; the group set is untouched.
    pub fn clear_all(&mut self) {
        for buf in self.series.values_mut() {
            buf.clear();
        }
    }
}
