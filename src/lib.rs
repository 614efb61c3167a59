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

//! `ylong_spdy` provides the core components needed to multiplex many
//! logical streams onto one transport connection of a `SPDY`-style framed
//! protocol.
//!
//! # Components
//! - [`SpdyStream`]: the send side of one logical stream. It applies
//!   per-stream flow control to application data, splits it into correctly
//!   windowed data frames, and handles stream abort (`RST_STREAM`).
//! - [`FramePriorityQueue`]: a thread-safe, priority-ordered queue shared by
//!   all streams of one connection. A single writer drains it and puts the
//!   frames on the wire.
//! - [`Framer`]: the interface to the binary frame encoder. The core never
//!   inspects encoded frames, it only creates and forwards them.
//!
//! Inbound frame decoding and dispatch live outside this crate; the
//! connection layer calls [`SpdyStream::adjust_window_size`] and
//! [`SpdyStream::abort`] when the corresponding control frames arrive.

mod error;
mod frame;
mod framer;
mod queue;
mod stream;

#[cfg(test)]
pub(crate) mod util;

pub use error::{SpdyError, StatusCode};
pub use frame::{
    HeaderBlock, Priority, SpdyVersion, StreamId, HIGHEST_PRIORITY, LOWEST_PRIORITY,
    MAX_FLOW_CONTROL_WINDOW,
};
pub use framer::Framer;
pub use queue::FramePriorityQueue;
pub use stream::SpdyStream;
