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

//! A deterministic framer stub that records each encode call.

use crate::error::StatusCode;
use crate::frame::{HeaderBlock, SpdyVersion, StreamId};
use crate::framer::Framer;

/// One recorded encode call, inspectable by tests.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum MockFrame {
    Data {
        id: StreamId,
        data: Vec<u8>,
        end_stream: bool,
    },
    Headers {
        id: StreamId,
        headers: HeaderBlock,
        end_stream: bool,
    },
    RstStream {
        id: StreamId,
        status: StatusCode,
    },
}

pub(crate) struct MockFramer {
    version: SpdyVersion,
}

impl MockFramer {
    pub(crate) fn new(version: SpdyVersion) -> Self {
        Self { version }
    }
}

impl Framer for MockFramer {
    type Frame = MockFrame;

    fn encode_data(&self, id: StreamId, data: &[u8], end_stream: bool) -> Self::Frame {
        MockFrame::Data {
            id,
            data: data.to_vec(),
            end_stream,
        }
    }

    fn encode_headers(&self, id: StreamId, headers: &HeaderBlock, end_stream: bool) -> Self::Frame {
        MockFrame::Headers {
            id,
            headers: headers.clone(),
            end_stream,
        }
    }

    fn encode_rst_stream(&self, id: StreamId, status: StatusCode) -> Self::Frame {
        MockFrame::RstStream { id, status }
    }

    fn supports_flow_control(&self) -> bool {
        self.version.supports_flow_control()
    }
}
