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

//! Interface to the binary frame encoder.

use crate::error::StatusCode;
use crate::frame::{HeaderBlock, StreamId};

/// The frame encoder a [`SpdyStream`] emits through.
///
/// The core never looks inside an encoded frame. [`Framer::Frame`] is
/// whatever value the encoder produces, typically a length-prefixed byte
/// buffer; it travels through the [`FramePriorityQueue`] to the connection
/// writer untouched. Production code binds this trait to a real protocol
/// encoder, tests bind it to a deterministic stub that records calls.
///
/// [`SpdyStream`]: crate::SpdyStream
/// [`FramePriorityQueue`]: crate::FramePriorityQueue
pub trait Framer {
    /// The encoded frame type this framer produces.
    type Frame;

    /// Encodes a data frame carrying `data`, with the FIN marker set
    /// according to `end_stream`.
    fn encode_data(&self, id: StreamId, data: &[u8], end_stream: bool) -> Self::Frame;

    /// Encodes a headers-bearing control frame carrying `headers`, with the
    /// FIN marker set according to `end_stream`.
    fn encode_headers(&self, id: StreamId, headers: &HeaderBlock, end_stream: bool) -> Self::Frame;

    /// Encodes a `RST_STREAM` frame carrying `status`.
    fn encode_rst_stream(&self, id: StreamId, status: StatusCode) -> Self::Frame;

    /// Returns whether the negotiated protocol version applies per-stream
    /// flow control. Streams latch this once at construction.
    fn supports_flow_control(&self) -> bool;
}
