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

//! Binary encoding of Signed Certificate Timestamps.
//!
//! A CT log answers an `add-chain` submission with a JSON document whose fields are
//! transport-encoded. This module holds the decoded record and writes it out in the
//! `SignedCertificateTimestamp` layout of [RFC 6962] section 3.2:
//!
//! ```text
//! opaque  version            (1 byte)
//! opaque  log_id             (32 bytes)
//! uint64  timestamp          (8 bytes, big-endian)
//! uint16  extensions_length  (2 bytes, big-endian)
//! opaque  extensions         (extensions_length bytes)
//! opaque  signature          (rest of the structure)
//! ```
//!
//! [RFC 6962]: https://datatracker.ietf.org/doc/html/rfc6962#section-3.2

use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64_STD_ENGINE, Engine as _};
use thiserror::Error;
use tracing::debug;

/// Width of a log identifier: the SHA-256 hash of the log's public key.
pub const LOG_ID_LEN: usize = 32;

/// Largest extensions block that fits behind the `uint16` length prefix.
pub const MAX_EXTENSIONS_LEN: usize = u16::MAX as usize;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("SCT field `{field}` is not valid base64")]
    InvalidFieldEncoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("SCT log id must be 32 bytes, got {len}")]
    InvalidLogIdLength { len: usize },

    #[error("SCT extensions are too long: {len} bytes exceeds 65535")]
    ExtensionsTooLong { len: usize },

    #[error("failed to write SCT: {0}")]
    SinkWriteError(#[from] std::io::Error),
}

/// A Signed Certificate Timestamp as issued by a CT log.
///
/// All fields hold raw, already decoded values. The record is never modified by
/// encoding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedCertificateTimestamp {
    /// SCT version. Only `0` (v1) is defined, other values are passed through.
    pub version: u8,
    pub log_id: [u8; LOG_ID_LEN],
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
    pub extensions: Vec<u8>,
    /// TLS `DigitallySigned` structure, written verbatim.
    pub signature: Vec<u8>,
}

impl SignedCertificateTimestamp {
    /// Exact number of bytes [`encode`](Self::encode) writes on success.
    pub fn encoded_len(&self) -> usize {
        1 + LOG_ID_LEN + 8 + 2 + self.extensions.len() + self.signature.len()
    }

    /// Writes the RFC 6962 binary form of this SCT to `sink`.
    ///
    /// Fields are written one after the other with nothing buffered in between. If
    /// the extensions do not fit the 16-bit length prefix the call fails with
    /// [`EncodeError::ExtensionsTooLong`], and the version, log id and timestamp
    /// already written stay in the sink. Callers must discard the sink contents on
    /// any error.
    pub fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), EncodeError> {
        if self.version != 0 {
            debug!(version = self.version, "encoding SCT with unknown version");
        }

        sink.write_all(&[self.version])?;
        sink.write_all(&self.log_id)?;
        sink.write_all(&self.timestamp.to_be_bytes())?;

        let extensions_len =
            u16::try_from(self.extensions.len()).map_err(|_| EncodeError::ExtensionsTooLong {
                len: self.extensions.len(),
            })?;
        sink.write_all(&extensions_len.to_be_bytes())?;
        sink.write_all(&self.extensions)?;

        // Last field, self-delimiting by position.
        sink.write_all(&self.signature)?;

        Ok(())
    }

    /// Encodes into a fresh buffer, so nothing is observable unless the whole
    /// structure was produced.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;

        debug!(len = buf.len(), "encoded SCT");
        Ok(buf)
    }
}

/// Decodes one base64 (standard alphabet, padded) SCT field.
pub(crate) fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>, EncodeError> {
    BASE64_STD_ENGINE
        .decode(value)
        .map_err(|source| EncodeError::InvalidFieldEncoding { field, source })
}
