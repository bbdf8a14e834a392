// imgprep/src/core/state.rs
use super::{ImageRecord, Resolution};
use std::collections::HashMap;
use std::hash::Hash;

/// Counter that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Keys in first-seen order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running counts for one reporting scope.
#[derive(Debug, Clone, Default)]
pub struct AggregateState {
    pub total_images: usize,
    pub resolutions: Tally<Resolution>,
    pub formats: Tally<String>,
    pub modes: Tally<String>,
    pub smallest: Option<Resolution>,
    pub largest: Option<Resolution>,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &ImageRecord) {
        let resolution = record.resolution;

        self.total_images += 1;
        self.resolutions.increment(resolution);
        self.formats.increment(record.format.clone());
        self.modes.increment(record.mode.clone());

        if self.smallest.map_or(true, |smallest| resolution < smallest) {
            self.smallest = Some(resolution);
        }
        if self.largest.map_or(true, |largest| resolution > largest) {
            self.largest = Some(resolution);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_images == 0
    }
}
