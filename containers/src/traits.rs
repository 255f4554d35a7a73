use std::collections::HashMap;
use std::hash::Hash;

use crate::error::ContainerErrors;

/// Convenience lookups and non-mutating builders over slices
pub trait SliceExt<T> {
    /// Groups elements under the key computed for each of them
    ///
    /// Every element lands in exactly one group, and groups keep the relative order
    /// elements had in the slice
    fn grouped_by<K, F>(&self, key: F) -> HashMap<K, Vec<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Returns a new vector holding every element followed by `element`
    fn appending(&self, element: T) -> Vec<T>
    where
        T: Clone;

    /// Bounds checked access accepting any signed index, negative ones are never valid
    fn at(&self, index: isize) -> Option<&T>;

    /// Same as [`SliceExt::at`] but reports why nothing was found
    fn try_at(&self, index: isize) -> Result<&T, ContainerErrors>;

    /// First element satisfying the predicate
    fn filter_first<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool;
}

impl<T> SliceExt<T> for [T] {
    fn grouped_by<K, F>(&self, mut key: F) -> HashMap<K, Vec<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for element in self {
            groups.entry(key(element)).or_default().push(element.clone());
        }
        groups
    }

    fn appending(&self, element: T) -> Vec<T>
    where
        T: Clone,
    {
        let mut result = Vec::with_capacity(self.len() + 1);
        result.extend_from_slice(self);
        result.push(element);
        result
    }

    fn at(&self, index: isize) -> Option<&T> {
        usize::try_from(index).ok().and_then(|index| self.get(index))
    }

    fn try_at(&self, index: isize) -> Result<&T, ContainerErrors> {
        self.at(index).ok_or(ContainerErrors::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    fn filter_first<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }
}
