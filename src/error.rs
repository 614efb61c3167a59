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

//! `RST_STREAM` status codes of the `SPDY/3` protocol.
//!
//! # Introduction
//! Status codes are 32-bit fields carried by `RST_STREAM` frames to convey
//! the reason a stream was terminated. This core treats them as opaque
//! values that it forwards verbatim to the frame encoder; the only code it
//! produces on its own is `FLOW_CONTROL_ERROR`, when a peer overflows a
//! stream's flow-control window.

use std::convert::TryFrom;

use crate::frame::StreamId;

/// The spdy error handle implementation.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum SpdyError {
    /// An error scoped to a single stream. The connection stays usable.
    StreamError(StreamId, StatusCode),

    /// An error that terminates the whole session.
    SessionError(StatusCode),
}

/// `RST_STREAM` status code implementation.
///
/// # Examples
///
/// ```
/// use ylong_spdy::StatusCode;
///
/// assert_eq!(StatusCode::FlowControlError.into_code(), 7);
/// ```
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum StatusCode {
    /// A generic protocol error was detected.
    ProtocolError = 0x01,

    /// A frame was received for a stream that is not active.
    InvalidStream = 0x02,

    /// The stream was refused before any processing has been done on it.
    RefusedStream = 0x03,

    /// The recipient of a stream does not support the requested protocol
    /// version.
    UnsupportedVersion = 0x04,

    /// The stream is no longer needed by its creator.
    Cancel = 0x05,

    /// The endpoint encountered an unexpected internal error.
    InternalError = 0x06,

    /// The peer violated the flow-control protocol, for example by growing
    /// a window beyond its 31-bit bound.
    FlowControlError = 0x07,

    /// A stream was opened with a stream id that is already in use.
    StreamInUse = 0x08,

    /// A frame was received for a stream that is already closed.
    StreamAlreadyClosed = 0x09,

    /// The credentials associated with the stream were invalid.
    InvalidCredentials = 0x0a,

    /// A frame was too large for the receiver to process.
    FrameTooLarge = 0x0b,
}

impl StatusCode {
    /// Gets the status code of the `StatusCode` enum.
    pub fn into_code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for StatusCode {
    type Error = SpdyError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let status = match value {
            0x01 => StatusCode::ProtocolError,
            0x02 => StatusCode::InvalidStream,
            0x03 => StatusCode::RefusedStream,
            0x04 => StatusCode::UnsupportedVersion,
            0x05 => StatusCode::Cancel,
            0x06 => StatusCode::InternalError,
            0x07 => StatusCode::FlowControlError,
            0x08 => StatusCode::StreamInUse,
            0x09 => StatusCode::StreamAlreadyClosed,
            0x0a => StatusCode::InvalidCredentials,
            0x0b => StatusCode::FrameTooLarge,
            _ => return Err(SpdyError::SessionError(StatusCode::ProtocolError)),
        };
        Ok(status)
    }
}
