//! Generic FIFO queue
//!
//! Elements leave in the order they arrived. Dequeuing an empty queue
//! yields `None` and leaves the queue usable.

use crate::config::{LecternConfig, QueueConfig};
use crate::debug::{self, DebugCategory, DebugConfig, LogLevel};
use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;


/// First-in-first-out container
///
/// Without a [`DebugConfig`] records go straight to the `log` facade under
/// the `lectern::queue` target. With one, they are filtered by it first.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    elements: VecDeque<T>,
    debug: Option<DebugConfig>,
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            elements: VecDeque::new(),
            debug: None,
        }
    }

    /// Create an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: VecDeque::with_capacity(capacity),
            debug: None,
        }
    }

    /// Create an empty queue sized by configuration
    pub fn from_config(config: &QueueConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Create an empty queue sized and logged by the crate configuration
    pub fn from_lectern_config(config: &LecternConfig) -> Self {
        Self::from_config(&config.queue).with_debug(config.debug.clone())
    }

    /// Filter this queue's log records through `config`
    pub fn with_debug(mut self, config: DebugConfig) -> Self {
        self.debug = Some(config);
        self
    }

    fn record(&self, level: LogLevel, message: fmt::Arguments<'_>) {
        match &self.debug {
            Some(config) => {
                if config.allows(DebugCategory::Queue, level) {
                    debug::log(config, DebugCategory::Queue, level, &message.to_string());
                }
            }
            None => log::log!(
                target: DebugCategory::Queue.target(),
                log::Level::from(level),
                "{}",
                message
            ),
        }
    }

    /// Append an element at the back
    pub fn enqueue(&mut self, element: T) {
        self.elements.push_back(element);
        let len = self.elements.len();
        self.record(LogLevel::Trace, format_args!("[Queue] enqueue: len={}", len));
    }

    /// Remove and return the element that has waited longest
    pub fn dequeue(&mut self) -> Option<T> {
        let front = self.elements.pop_front();
        let len = self.elements.len();
        if front.is_none() {
            self.record(LogLevel::Debug, format_args!("[Queue] dequeue on empty queue"));
        } else {
            self.record(LogLevel::Trace, format_args!("[Queue] dequeue: len={}", len));
        }
        front
    }

    /// Front element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.elements.front()
    }

    /// Snapshot iterator over the current elements in FIFO order.
    ///
    /// The iterator is `Clone`, so a snapshot can be walked more than once.
    pub fn peek_all(&self) -> vec_deque::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drop every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    /// Queues are equal when they hold equal elements in the same order
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
            debug: None,
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    /// Consume the queue, yielding elements front to back
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.peek_all()
    }
}
