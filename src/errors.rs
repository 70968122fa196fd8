//
// Copyright 2025 The ct-submit Authors.
//
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

//! The errors that can be raised by ct-submit

use thiserror::Error;

use crate::sct::EncodeError;

pub type Result<T> = std::result::Result<T, CtSubmitError>;

#[derive(Error, Debug)]
pub enum CtSubmitError {
    #[error("failed to parse URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    FromPEMError(#[from] pem::PemError),

    #[error("no CERTIFICATE blocks found in PEM input")]
    NoCertificatesFound,

    #[error("failed to reach log server: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("unexpected status {status} from log server:\n\n{body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed add-chain response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error(transparent)]
    SCTError(#[from] EncodeError),

    #[error(transparent)]
    IOError(#[from] std::io::Error),
}
