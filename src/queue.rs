// Copyright (c) 2023 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Priority-ordered blocking queue of outgoing frames.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::frame::Priority;

// Sorts below every stream priority so that session-level control frames
// always drain first.
const TOP_PRIORITY: i16 = -1;

/// A thread-safe, unbounded queue that total-orders the interleaved output
/// of all streams on one connection.
///
/// Entries are keyed by `(priority, insertion sequence)`: the numerically
/// smallest priority drains first, and entries of equal priority drain in
/// insertion order. Strict priority ordering means a continuously pushing
/// high-priority stream can starve lower-priority ones; the single
/// connection writer is expected to drain fast enough for this not to
/// matter.
///
/// All streams of a connection share one queue through an `Arc`; the queue
/// synchronizes internally and callers never lock around it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use ylong_spdy::FramePriorityQueue;
///
/// let queue = FramePriorityQueue::new();
/// queue.push("frame", 3);
/// assert_eq!(queue.blocking_pop(Duration::from_millis(10)), Some("frame"));
/// assert!(queue.is_empty());
/// ```
pub struct FramePriorityQueue<T> {
    inner: Mutex<Inner<T>>,
    ready: Condvar,
}

struct Inner<T> {
    entries: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

struct Entry<T> {
    priority: i16,
    seq: u64,
    frame: T,
}

// `BinaryHeap` is a max-heap, so the key order is reversed to surface the
// smallest `(priority, seq)` pair first.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> FramePriorityQueue<T> {
    /// Creates a new, empty `FramePriorityQueue`.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: BinaryHeap::new(),
                next_seq: 0,
            }),
            ready: Condvar::new(),
        }
    }

    /// Inserts a frame with the given stream priority and wakes one blocked
    /// consumer if any.
    pub fn push(&self, frame: T, priority: Priority) {
        self.insert(frame, i16::from(priority));
    }

    /// Inserts a session-level frame ahead of every stream priority.
    pub fn push_top(&self, frame: T) {
        self.insert(frame, TOP_PRIORITY);
    }

    fn insert(&self, frame: T, priority: i16) {
        let mut inner = self.inner.lock().unwrap();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.push(Entry {
            priority,
            seq,
            frame,
        });
        drop(inner);
        self.ready.notify_one();
    }

    /// Removes and returns the frame with the smallest `(priority, seq)`
    /// key, or `None` if the queue is currently empty.
    pub fn pop(&self) -> Option<T> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .pop()
            .map(|entry| entry.frame)
    }

    /// Removes and returns the frame with the smallest `(priority, seq)`
    /// key, waiting up to `timeout` for one to be pushed.
    ///
    /// Returns `None` only after the timeout has elapsed with the queue
    /// still empty; a frame pushed before the deadline is observed is
    /// returned, never reported as a timeout. The wait re-checks the queue
    /// after every wakeup, so spurious wakeups do not produce false
    /// timeouts either.
    pub fn blocking_pop(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now() + timeout;
        let mut inner = self.inner.lock().unwrap();
        loop {
            if let Some(entry) = inner.entries.pop() {
                return Some(entry.frame);
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            let (guard, _) = self.ready.wait_timeout(inner, deadline - now).unwrap();
            inner = guard;
        }
    }

    /// Returns `true` if the queue holds no frames at this instant.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().entries.is_empty()
    }
}

impl<T> Default for FramePriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
