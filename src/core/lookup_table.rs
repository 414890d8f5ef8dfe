use more_asserts::assert_ge;

/// Evenly spaced points covering [0, 1], both endpoints included.
///
/// Point `i` is computed as `i * step` and the final point is pinned to exactly
/// `1.0`, so the endpoints never drift. A single point is just `0.0`.
pub fn uniform_samples(count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![0.0; count];
    }
    let step = 1.0 / ((count - 1) as f64);
    let mut samples: Vec<f64> = (0..count).map(|i| (i as f64) * step).collect();
    samples[count - 1] = 1.0;
    samples
}

/// Fixed-size table over the unit interval. A query `x` selects entry
/// `floor(x * len)`, with `x == 1` mapped onto the last entry and anything out
/// of range clamped to the nearest end.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable<T> {
    table_entries: Vec<T>,
}

impl<T> LookupTable<T> {
    /// Populate the table by evaluating `index_to_data` at every entry index.
    pub fn new<F>(entry_count: usize, index_to_data: F) -> LookupTable<T>
    where
        F: Fn(usize) -> T,
    {
        assert_ge!(entry_count, 1);
        let mut table_entries: Vec<T> = Vec::with_capacity(entry_count);
        for index in 0..entry_count {
            table_entries.push(index_to_data(index));
        }
        LookupTable { table_entries }
    }

    pub fn from_entries(table_entries: Vec<T>) -> LookupTable<T> {
        assert_ge!(table_entries.len(), 1);
        LookupTable { table_entries }
    }

    pub fn len(&self) -> usize {
        self.table_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table_entries.is_empty()
    }

    pub fn entries(&self) -> &[T] {
        &self.table_entries
    }

    pub fn index(&self, query: f64) -> usize {
        let entry_count = self.table_entries.len();
        let scaled = query * (entry_count as f64);
        // Also catches NaN.
        if !(scaled > 0.0) {
            return 0;
        }
        (scaled as usize).min(entry_count - 1)
    }

    pub fn lookup(&self, query: f64) -> &T {
        &self.table_entries[self.index(query)]
    }

    pub fn reversed(&self) -> LookupTable<T>
    where
        T: Clone,
    {
        LookupTable {
            table_entries: self.table_entries.iter().rev().cloned().collect(),
        }
    }
}
