//! Ring-buffer data series
//!
//! Samples land in a fixed-capacity ring buffer that overwrites the oldest
//! entry once full, so steady-state ingestion allocates nothing.
//! [`DataSeries`] wraps the buffer in a mutex: producer threads push with an
//! O(1) critical section, and the render thread takes a snapshot copy
//! instead of holding the lock for the whole draw.

use std::sync::{Arc, Mutex};

/// Fixed-capacity circular buffer. Logical index 0 is the oldest retained
/// value.
#[derive(Clone, Debug)]
pub struct RingBuffer<T: Copy> {
    data: Vec<T>,
    head: usize,
    capacity: usize,
}

impl<T: Copy> RingBuffer<T> {
    /// # Panics
    ///
    /// Panics on zero capacity.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        Self {
            data: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Append a value, evicting the oldest once at capacity. O(1).
    pub fn push(&mut self, value: T) {
        if self.data.len() < self.capacity {
            self.data.push(value);
        } else {
            self.data[self.head] = value;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Value at logical index `index`, oldest first
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        Some(self.data[(self.head + index) % self.data.len()])
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |i| {
            self.data[(self.head + i) % self.data.len()]
        })
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.head = 0;
    }
}

/// Shared handle to a float series.
///
/// Clones share the same buffer. At most one producer should write per
/// instance; any number of readers may snapshot.
#[derive(Clone)]
pub struct DataSeries {
    inner: Arc<Mutex<RingBuffer<f32>>>,
}

impl DataSeries {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RingBuffer::new(capacity))),
        }
    }

    /// Push one sample. Safe to call from a producer thread.
    pub fn push(&self, value: f32) {
        self.lock().push(value);
    }

    /// Replace the whole series contents. O(n), the only non-constant
    /// writer operation.
    pub fn replace(&self, values: impl IntoIterator<Item = f32>) {
        let mut buffer = self.lock();
        buffer.clear();
        for v in values {
            buffer.push(v);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy out the retained values, oldest first, releasing the lock
    /// before the caller starts drawing.
    pub fn snapshot(&self) -> Vec<f32> {
        self.lock().iter().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RingBuffer<f32>> {
        self.inner.lock().expect("data series lock poisoned")
    }
}

/// Min and max of a snapshot, ignoring non-finite samples
pub fn min_max(values: &[f32]) -> Option<(f32, f32)> {
    let mut bounds: Option<(f32, f32)> = None;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer = RingBuffer::new(500);
        for i in 0..600 {
            buffer.push(i as f32);
        }
        assert_eq!(buffer.len(), 500);
        // The oldest 100 values are gone; index 0 is the 101st push.
        assert_eq!(buffer.get(0), Some(100.0));
        assert_eq!(buffer.get(499), Some(599.0));
        assert_eq!(buffer.get(500), None);
    }

    #[test]
    fn partial_fill_preserves_order() {
        let mut buffer = RingBuffer::new(10);
        buffer.push(1.0);
        buffer.push(2.0);
        buffer.push(3.0);
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn zero_capacity_panics() {
        let _ = RingBuffer::<f32>::new(0);
    }

    #[test]
    fn snapshot_reflects_producer_pushes() {
        let series = DataSeries::new(4);
        let producer = series.clone();
        let handle = std::thread::spawn(move || {
            for i in 0..6 {
                producer.push(i as f32);
            }
        });
        handle.join().unwrap();
        assert_eq!(series.snapshot(), vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn replace_resets_contents() {
        let series = DataSeries::new(8);
        series.push(1.0);
        series.replace([9.0, 8.0]);
        assert_eq!(series.snapshot(), vec![9.0, 8.0]);
    }

    #[test]
    fn min_max_skips_non_finite() {
        assert_eq!(min_max(&[3.0, f32::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[f32::NAN]), None);
    }
}
