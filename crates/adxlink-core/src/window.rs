use adxlink_decode::Accel;
use std::collections::VecDeque;

/// Fixed-capacity FIFO. Pushing past capacity evicts the oldest element.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> RollingWindow<T> {
    /// A window that starts out full of `value`.
    pub fn filled(capacity: usize, value: T) -> Self {
        Self {
            entries: std::iter::repeat(value).take(capacity).collect(),
            capacity,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

/// One rolling window per axis, sharing the same sample index.
#[derive(Debug, Clone)]
pub struct AxisWindows {
    pub x: RollingWindow<f64>,
    pub y: RollingWindow<f64>,
    pub z: RollingWindow<f64>,
}

impl AxisWindows {
    /// Windows pre-filled with zeros so traces span the whole x range.
    pub fn new(capacity: usize) -> Self {
        Self {
            x: RollingWindow::filled(capacity, 0.0),
            y: RollingWindow::filled(capacity, 0.0),
            z: RollingWindow::filled(capacity, 0.0),
        }
    }

    pub fn push(&mut self, sample: Accel<f64>) {
        self.x.push(sample.x);
        self.y.push(sample.y);
        self.z.push(sample.z);
    }

    pub fn capacity(&self) -> usize {
        self.x.capacity()
    }

    pub fn axes(&self) -> [(&'static str, &RollingWindow<f64>); 3] {
        [("X-axis", &self.x), ("Y-axis", &self.y), ("Z-axis", &self.z)]
    }

    /// Y range covering every visible sample plus a 5% margin. A flat trace
    /// gets a band of one unit either side.
    pub fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = [&self.x, &self.y, &self.z]
            .into_iter()
            .flat_map(|w| w.iter().copied())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if lo > hi {
            return (-1.0, 1.0);
        }
        let span = hi - lo;
        if span == 0.0 {
            return (lo - 1.0, hi + 1.0);
        }
        let margin = span * 0.05;
        (lo - margin, hi + margin)
    }
}
