use crate::model::Frame;

/// Default number of frames retained for analytics.
pub const HISTORY_CAPACITY: usize = 100;

/// Fixed-capacity FIFO of frames.
///
/// The arena grows to `capacity` once; after that each push overwrites the
/// oldest slot at `write_index` and advances it.
#[derive(Debug, Clone)]
pub struct History {
    slots: Vec<Frame>,
    write_index: usize,
    capacity: usize,
}

impl History {
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            write_index: 0,
            capacity,
        }
    }

    /// Append `frame`, returning the evicted oldest frame when full.
    pub fn push(&mut self, frame: Frame) -> Option<Frame> {
        if self.slots.len() < self.capacity {
            self.slots.push(frame);
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.write_index], frame);
        self.write_index = (self.write_index + 1) % self.capacity;
        Some(evicted)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frame at `index`, counted from the oldest.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        if index >= self.slots.len() {
            return None;
        }
        Some(&self.slots[(self.write_index + index) % self.slots.len()])
    }

    /// Most recently pushed frame.
    pub fn latest(&self) -> Option<&Frame> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }

    /// All frames, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Frame> + ExactSizeIterator + '_ {
        let len = self.slots.len();
        (0..len).map(move |i| &self.slots[(self.write_index + i) % len])
    }

    /// The last `min(n, len)` frames, oldest first.
    pub fn recent(&self, n: usize) -> impl DoubleEndedIterator<Item = &Frame> + ExactSizeIterator + '_ {
        self.iter().skip(self.len().saturating_sub(n))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}
