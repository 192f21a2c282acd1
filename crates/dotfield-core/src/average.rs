use crate::constants::RATE_WINDOW;

/// Fixed-size ring of recent frame-rate samples.
///
/// Writes wrap around and overwrite the oldest slot. Slots that were never
/// written hold zero, and `average` counts them, so the first `N - 1` painted
/// frames report a value biased low. `average_populated` skips them.
#[derive(Clone, Debug)]
pub struct MovingAverage<const N: usize = RATE_WINDOW> {
    slots: [u32; N],
    cursor: usize,
    written: usize,
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MovingAverage<N> {
    pub fn new() -> Self {
        Self {
            slots: [0; N],
            cursor: 0,
            written: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Number of slots written so far, saturating at `N`.
    pub fn len(&self) -> usize {
        self.written
    }

    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    pub fn push(&mut self, sample: u32) {
        if N == 0 {
            return;
        }
        self.slots[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % N;
        self.written = (self.written + 1).min(N);
    }

    /// Rounded mean over all `N` slots, unwritten ones included as zero.
    pub fn average(&self) -> u32 {
        rounded_mean(&self.slots, N)
    }

    /// Rounded mean over the written slots only; zero before the first push.
    pub fn average_populated(&self) -> u32 {
        // Until the ring wraps, the written slots are exactly 0..written.
        rounded_mean(&self.slots[..self.written], self.written)
    }

    pub fn samples(&self) -> &[u32; N] {
        &self.slots
    }
}

#[inline]
fn rounded_mean(values: &[u32], count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    let mean = total as f64 / count as f64;
    (mean + 0.5).floor() as u32
}
