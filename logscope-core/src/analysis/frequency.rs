use ahash::AHashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub key: String,
    pub count: usize,
}

/// Occurrence counts sorted by descending count.
///
/// Keys with equal counts stay in the order they were first seen, so the
/// table is reproducible for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count every value yielded by `values`.
    pub fn count<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index: AHashMap<&'a str, usize> = AHashMap::new();
        let mut counts: Vec<(&'a str, usize)> = Vec::new();

        for value in values {
            match index.get(value) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(value, counts.len());
                    counts.push((value, 1));
                }
            }
        }

        // stable: ties keep first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            entries: counts
                .into_iter()
                .map(|(key, count)| FrequencyEntry {
                    key: key.to_string(),
                    count,
                })
                .collect(),
        }
    }

    /// Drop every entry whose count is not strictly greater than `threshold`.
    pub fn above(mut self, threshold: usize) -> Self {
        self.entries.retain(|e| e.count > threshold);
        self
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&FrequencyEntry> {
        self.entries.first()
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
