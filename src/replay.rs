//! Sliding window replay detection for a recipient.

use alloc::vec::Vec;
use tracing::{trace, warn};

/// The number of sequence numbers tracked by default.
pub const DEFAULT_WINDOW_SIZE: usize = 32;

const WORD_BITS: usize = 64;

/// Tracks which of the recently received sequence numbers have been seen.
///
/// The window covers the sequence numbers `[base, base + size)` with one bit
/// each. Everything below `base` is considered a replay. When a sequence
/// number beyond the window is accepted, the window either slides forward by
/// half its size or, for larger jumps, restarts at that number, discarding
/// what it knew about earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayWindow {
    base: u64,
    size: usize,
    bits: Vec<u64>,
}

impl ReplayWindow {
    /// Creates an empty window of `size` slots starting at `base`.
    ///
    /// A `size` of 0 is treated as 1.
    pub fn new(base: u64, size: usize) -> ReplayWindow {
        let size = size.max(1);
        ReplayWindow {
            base,
            size,
            bits: vec![0; (size + WORD_BITS - 1) / WORD_BITS],
        }
    }

    /// Returns the lowest sequence number that is not a replay by default.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the number of slots.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the message with this sequence number has to be
    /// rejected, either because it has been seen or because it's too old.
    pub fn hit_test(&self, index: u64) -> bool {
        if cfg!(feature = "no_replay") {
            return false;
        }
        if index < self.base {
            return true;
        }
        let offset = index - self.base;
        if offset >= self.size as u64 {
            // Beyond the window, so it can't have been seen
            return false;
        }

        self.get(offset as usize)
    }

    /// Marks the sequence number as seen, moving the window if necessary.
    pub fn set_hit(&mut self, index: u64) {
        if index < self.base {
            return;
        }
        let mut offset = index - self.base;
        // The window is [base, base + size), so base + size already slides.
        // An offset of exactly 1.5 * size resets.
        if offset >= self.size as u64 {
            let half = self.size / 2;
            if offset < (self.size + half) as u64 {
                self.slide(half);
                offset -= half as u64;
                trace!(base = self.base, "Replay window slid forward");
            } else {
                warn!(
                    from = self.base,
                    to = index,
                    "Replay window reset after jump in sequence numbers"
                );
                self.clear();
                self.base = index;
                offset = 0;
            }
        }

        self.set(offset as usize);
    }

    /// Moves the window `n` slots forward, keeping the bits that remain in
    /// range.
    fn slide(&mut self, n: usize) {
        for i in 0..self.size - n {
            let bit = self.get(i + n);
            self.assign(i, bit);
        }
        for i in self.size - n..self.size {
            self.assign(i, false);
        }
        self.base += n as u64;
    }

    fn clear(&mut self) {
        for word in self.bits.iter_mut() {
            *word = 0;
        }
    }

    fn get(&self, slot: usize) -> bool {
        self.bits[slot / WORD_BITS] & (1 << (slot % WORD_BITS)) != 0
    }

    fn set(&mut self, slot: usize) {
        self.assign(slot, true);
    }

    fn assign(&mut self, slot: usize, value: bool) {
        let mask = 1 << (slot % WORD_BITS);
        if value {
            self.bits[slot / WORD_BITS] |= mask;
        } else {
            self.bits[slot / WORD_BITS] &= !mask;
        }
    }
}

impl Default for ReplayWindow {
    fn default() -> ReplayWindow {
        ReplayWindow::new(0, DEFAULT_WINDOW_SIZE)
    }
}
