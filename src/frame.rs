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

//! Protocol vocabulary shared by the stream and queue components.

/// Type StreamId.
/// In SPDY, streams are identified by an unsigned 31-bit integer.
pub type StreamId = u32;

/// Type Priority.
/// A small ordinal controlling scheduling precedence among the streams of
/// one connection. Numerically smaller values are scheduled first.
pub type Priority = u8;

/// The most urgent stream priority.
pub const HIGHEST_PRIORITY: Priority = 0;

/// The least urgent stream priority defined by `SPDY/3`.
pub const LOWEST_PRIORITY: Priority = 7;

/// The largest legal flow-control window. A window adjustment that would
/// grow a stream's window past this bound is a peer protocol violation.
pub const MAX_FLOW_CONTROL_WINDOW: u32 = (1 << 31) - 1;

/// The negotiated protocol version of a connection. Per-stream flow control
/// was introduced in `SPDY/3`; earlier versions send data unwindowed.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum SpdyVersion {
    /// `SPDY/2`, no per-stream flow control.
    Spdy2,
    /// `SPDY/3`, per-stream flow control active.
    Spdy3,
}

impl SpdyVersion {
    /// Returns whether this protocol version applies per-stream flow
    /// control to outgoing data.
    pub fn supports_flow_control(&self) -> bool {
        match self {
            SpdyVersion::Spdy2 => false,
            SpdyVersion::Spdy3 => true,
        }
    }
}

/// An insertion-ordered block of name-value header pairs, the payload of a
/// headers-bearing control frame.
///
/// Header compression and name validation belong to the frame encoder, not
/// to this core, so the block stores the pairs exactly as given.
///
/// # Examples
///
/// ```
/// use ylong_spdy::HeaderBlock;
///
/// let mut headers = HeaderBlock::new();
/// headers.insert("x-foo", "bar");
/// assert_eq!(headers.get("x-foo"), Some("bar"));
/// assert_eq!(headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HeaderBlock {
    fields: Vec<(String, String)>,
}

impl HeaderBlock {
    /// Creates a new, empty `HeaderBlock`.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a name-value pair to the block, keeping insertion order.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    /// Gets the value of the first pair with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns an iterator over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the number of pairs in the block.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the block contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
