// src/modules/animation/mod.rs
//
// Pure steppers behind the two cosmetic animations. They read UI state only,
// never resource caches; the tasks driving them live in `timer` and die with
// their view.

use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_secs(2);
const REST_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypingPhase {
    Typing,
    Holding,
    Deleting,
    Resting,
}

/// Looping typing-text animation: type a phrase out, hold it, delete it,
/// rest, move to the next phrase.
#[derive(Debug)]
pub struct TypingState {
    texts: Vec<String>,
    index: usize,
    chars: usize,
    phase: TypingPhase,
}

impl TypingState {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            index: 0,
            chars: 0,
            phase: TypingPhase::Typing,
        }
    }

    /// The currently visible prefix of the active phrase.
    pub fn visible(&self) -> String {
        match self.texts.get(self.index) {
            Some(text) => text.chars().take(self.chars).collect(),
            None => String::new(),
        }
    }

    /// Advance one step and return the delay until the next one.
    pub fn step(&mut self) -> Duration {
        let Some(text) = self.texts.get(self.index) else {
            return HOLD_DELAY;
        };
        let len = text.chars().count();

        match self.phase {
            TypingPhase::Typing => {
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars == len {
                    self.phase = TypingPhase::Holding;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Deleting;
                DELETE_DELAY
            }
            TypingPhase::Deleting => {
                if self.chars > 0 {
                    self.chars -= 1;
                }
                if self.chars == 0 {
                    self.index = (self.index + 1) % self.texts.len();
                    self.phase = TypingPhase::Resting;
                    REST_DELAY
                } else {
                    DELETE_DELAY
                }
            }
            TypingPhase::Resting => {
                self.phase = TypingPhase::Typing;
                TYPE_DELAY
            }
        }
    }
}

/// Testimonial carousel index with wrapping navigation. Auto-rotate only
/// applies when more than one slide exists.
#[derive(Debug, Default)]
pub struct CarouselState {
    current: usize,
    len: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after every testimonial re-fetch.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Auto-rotate tick; a single slide never rotates.
    pub fn rotate(&mut self) {
        if self.len > 1 {
            self.next();
        }
    }
}
