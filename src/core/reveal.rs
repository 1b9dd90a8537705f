//! # Reveal Animator
//!
//! Typewriter effect: the display text grows by one character per tick.
//!
//! ```text
//!   Idle ──start(text)──▶ Revealing ──tick (last char)──▶ Idle(done)
//!    ▲                      │  ▲
//!    └──────cancel()────────┘  └── start(other) drops the old timer first
//! ```
//!
//! The repeating timer is a [`RevealTimer`] value owned by the animator in a
//! single `Option` slot, so two reveals can never run at once. Replacing or
//! clearing the slot drops the old timer. The animator does no I/O: the event
//! loop asks for [`RevealAnimator::next_deadline`], sleeps until then and
//! calls [`RevealAnimator::advance`].

use std::time::{Duration, Instant};

use log::debug;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(15);

/// A repeating deadline. Dropping it releases the timer.
#[derive(Debug)]
pub struct RevealTimer {
    interval: Duration,
    next_due: Instant,
}

impl RevealTimer {
    fn acquire(interval: Duration, now: Instant) -> Self {
        // A zero interval would make every poll due forever.
        let interval = interval.max(Duration::from_millis(1));
        debug!("Reveal timer acquired ({}ms/char)", interval.as_millis());
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.next_due
    }

    /// Number of ticks that have come due by `now`. Moves the deadline past them.
    fn take_due(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let behind = now.duration_since(self.next_due).as_nanos();
        let due = (behind / self.interval.as_nanos()).saturating_add(1);
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.next_due += self.interval.saturating_mul(due);
        due
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        debug!("Reveal timer released");
    }
}

#[derive(Debug, Default)]
pub struct RevealAnimator {
    full_text: String,
    /// Byte offset of the first unrevealed char.
    cursor: usize,
    revealed: usize,
    total: usize,
    timer: Option<RevealTimer>,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `text`, superseding any reveal in progress.
    ///
    /// Empty text never acquires a timer.
    pub fn start(&mut self, text: impl Into<String>, tick_interval: Duration, now: Instant) {
        self.cancel();
        self.full_text = text.into();
        self.cursor = 0;
        self.revealed = 0;
        self.total = self.full_text.chars().count();
        if self.total > 0 {
            self.timer = Some(RevealTimer::acquire(tick_interval, now));
        }
    }

    /// One timer tick. Returns true if a character was revealed.
    pub fn tick(&mut self) -> bool {
        if self.timer.is_none() {
            return false;
        }
        let Some(ch) = self.full_text[self.cursor..].chars().next() else {
            self.cancel();
            return false;
        };
        self.cursor += ch.len_utf8();
        self.revealed += 1;
        if self.cursor == self.full_text.len() {
            self.cancel();
        }
        true
    }

    /// Run every tick that is due at `now`. Returns true if the display changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.take_due(now),
            None => return false,
        };
        let mut changed = false;
        for _ in 0..due {
            if !self.tick() {
                break;
            }
            changed = true;
        }
        changed
    }

    /// Show the rest of the text at once.
    pub fn finish(&mut self) {
        if self.timer.is_some() {
            self.cursor = self.full_text.len();
            self.revealed = self.total;
            self.cancel();
        }
    }

    /// Release the timer, keeping whatever is already revealed. Idempotent.
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    /// Release the timer and drop the text.
    pub fn clear(&mut self) {
        self.cancel();
        self.full_text.clear();
        self.cursor = 0;
        self.revealed = 0;
        self.total = 0;
    }

    pub fn current_display(&self) -> &str {
        &self.full_text[..self.cursor]
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn is_revealing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(RevealTimer::deadline)
    }

    /// Characters revealed so far.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Characters in the target text.
    pub fn total_len(&self) -> usize {
        self.total
    }
}
