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

//! Send side of one logical stream: windowed data output and abort.

use std::sync::{Arc, Condvar, Mutex};

use crate::error::StatusCode;
use crate::frame::{HeaderBlock, Priority, StreamId, MAX_FLOW_CONTROL_WINDOW};
use crate::framer::Framer;
use crate::queue::FramePriorityQueue;

/// The send side of one logical stream multiplexed onto a connection.
///
/// A `SpdyStream` turns application data into correctly windowed data
/// frames and pushes them into the connection's shared
/// [`FramePriorityQueue`]. When per-stream flow control is active
/// (`SPDY/3` and later), [`send_data`] blocks the calling thread whenever
/// the send window is exhausted and resumes when the peer grants more
/// window or the stream is aborted.
///
/// The window and abort state are owned exclusively by the stream; the
/// queue and the framer are shared, non-owning handles. All methods take
/// `&self` and may be called from any thread.
///
/// [`send_data`]: SpdyStream::send_data
pub struct SpdyStream<F: Framer> {
    id: StreamId,
    associated_id: Option<StreamId>,
    priority: Priority,
    // Latched from the framer's protocol version at construction. When
    // false, windowing is bypassed entirely.
    flow_control: bool,
    framer: Arc<F>,
    output: Arc<FramePriorityQueue<F::Frame>>,
    state: Mutex<WindowState>,
    window_changed: Condvar,
}

struct WindowState {
    // Remaining send budget in bytes. Goes negative when the peer
    // retroactively shrinks a window that data was already sent against.
    window: i64,
    aborted: bool,
}

impl<F: Framer> SpdyStream<F> {
    /// Creates the send side of the stream with the given id on the
    /// connection that `output` and `framer` belong to.
    ///
    /// `associated_id` names the parent stream of a server push, if any.
    /// `initial_window_size` is the negotiated or advertised starting
    /// window; it is ignored for protocol versions without flow control.
    pub fn new(
        id: StreamId,
        associated_id: Option<StreamId>,
        priority: Priority,
        initial_window_size: i32,
        output: Arc<FramePriorityQueue<F::Frame>>,
        framer: Arc<F>,
    ) -> Self {
        let flow_control = framer.supports_flow_control();
        Self {
            id,
            associated_id,
            priority,
            flow_control,
            framer,
            output,
            state: Mutex::new(WindowState {
                window: i64::from(initial_window_size),
                aborted: false,
            }),
            window_changed: Condvar::new(),
        }
    }

    /// Returns the stream identifier.
    pub fn stream_id(&self) -> StreamId {
        self.id
    }

    /// Returns the identifier of the associated (server-push parent)
    /// stream, if any.
    pub fn associated_stream_id(&self) -> Option<StreamId> {
        self.associated_id
    }

    /// Returns the output scheduling priority of this stream.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns `true` if this stream was initiated by the server as a push
    /// stream.
    pub fn is_server_push(&self) -> bool {
        self.associated_id.is_some()
    }

    /// Returns the remaining send window in bytes. Meaningless for
    /// protocol versions without flow control.
    pub fn current_window_size(&self) -> i64 {
        self.state.lock().unwrap().window
    }

    /// Returns `true` once the stream has been aborted. The transition is
    /// one-way and terminal.
    pub fn is_aborted(&self) -> bool {
        self.state.lock().unwrap().aborted
    }

    /// Sends `data` on this stream, splitting it into as many data frames
    /// as window availability dictates. The FIN marker is set only on the
    /// last frame, and only if `end_stream` is `true`.
    ///
    /// Blocks the calling thread while the window is exhausted, until
    /// [`adjust_window_size`] makes it positive again or [`abort`] ends the
    /// stream. On abort the call returns normally with the unsent remainder
    /// silently dropped; callers that need to distinguish a truncated send
    /// check [`is_aborted`] themselves. Sending on an already aborted
    /// stream enqueues nothing.
    ///
    /// An empty payload consumes no window and is emitted immediately even
    /// at a zero or negative window, so a bare FIN can always close the
    /// stream.
    ///
    /// [`adjust_window_size`]: SpdyStream::adjust_window_size
    /// [`abort`]: SpdyStream::abort
    /// [`is_aborted`]: SpdyStream::is_aborted
    pub fn send_data(&self, data: &[u8], end_stream: bool) {
        let mut state = self.state.lock().unwrap();
        if state.aborted {
            return;
        }
        if !self.flow_control || data.is_empty() {
            let frame = self.framer.encode_data(self.id, data, end_stream);
            self.output.push(frame, self.priority);
            return;
        }

        let mut remaining = data;
        loop {
            if state.aborted {
                return;
            }
            if state.window <= 0 {
                state = self.window_changed.wait(state).unwrap();
                continue;
            }
            let chunk_size = usize::min(remaining.len(), state.window as usize);
            state.window -= chunk_size as i64;
            let (chunk, rest) = remaining.split_at(chunk_size);
            remaining = rest;
            let last = remaining.is_empty();
            let frame = self.framer.encode_data(self.id, chunk, end_stream && last);
            self.output.push(frame, self.priority);
            if last {
                return;
            }
        }
    }

    /// Sends a headers-bearing control frame on this stream. Headers are
    /// not subject to byte-level flow control, so the frame is enqueued
    /// unconditionally. Enqueues nothing on an aborted stream.
    pub fn send_headers(&self, headers: &HeaderBlock, end_stream: bool) {
        let state = self.state.lock().unwrap();
        if state.aborted {
            return;
        }
        let frame = self.framer.encode_headers(self.id, headers, end_stream);
        self.output.push(frame, self.priority);
    }

    /// Applies a window delta granted by the peer (positive) or implied by
    /// a settings change (may be negative). The resulting window may
    /// legally be negative; senders stay blocked until enough positive
    /// deltas accumulate to cross zero.
    ///
    /// Growing the window past [`MAX_FLOW_CONTROL_WINDOW`] is a peer
    /// protocol violation: the delta is discarded and the stream is
    /// aborted with [`StatusCode::FlowControlError`]. Callers observe this
    /// only through [`is_aborted`] and the enqueued `RST_STREAM` frame.
    /// Ignored on an already aborted stream.
    ///
    /// [`is_aborted`]: SpdyStream::is_aborted
    pub fn adjust_window_size(&self, delta: i32) {
        let mut state = self.state.lock().unwrap();
        if state.aborted {
            return;
        }
        let updated = state.window + i64::from(delta);
        if updated > i64::from(MAX_FLOW_CONTROL_WINDOW) {
            self.abort_locked(&mut state, StatusCode::FlowControlError);
            return;
        }
        state.window = updated;
        self.window_changed.notify_all();
    }

    /// Aborts the stream, enqueueing one `RST_STREAM` frame carrying
    /// `status` and waking every sender blocked in [`send_data`] so it
    /// returns immediately. Idempotent: later calls enqueue nothing.
    ///
    /// [`send_data`]: SpdyStream::send_data
    pub fn abort(&self, status: StatusCode) {
        let mut state = self.state.lock().unwrap();
        if state.aborted {
            return;
        }
        self.abort_locked(&mut state, status);
    }

    // Caller must hold the state lock and have checked that the stream is
    // not yet aborted.
    fn abort_locked(&self, state: &mut WindowState, status: StatusCode) {
        state.aborted = true;
        let frame = self.framer.encode_rst_stream(self.id, status);
        self.output.push(frame, self.priority);
        self.window_changed.notify_all();
    }
}
