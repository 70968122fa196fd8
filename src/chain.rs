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

//! Reading the certificate chain to submit.

use tracing::debug;

use crate::errors::{CtSubmitError, Result};

/// PEM label of the blocks that make up a chain.
pub const CERTIFICATE_PEM_LABEL: &str = "CERTIFICATE";

/// DER-encoded certificates, leaf first.
///
/// The certificates are not parsed or validated, the log server does that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CertificateChain {
    certificates: Vec<Vec<u8>>,
}

impl CertificateChain {
    pub fn new(certificates: Vec<Vec<u8>>) -> Self {
        Self { certificates }
    }

    pub fn certificates(&self) -> &[Vec<u8>] {
        &self.certificates
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

/// Collects every `CERTIFICATE` block of a PEM bundle, in the order they appear.
///
/// Other block types (keys, CRLs, ...) and text between blocks are ignored.
pub fn parse_pem_chain(input: impl AsRef<[u8]>) -> Result<CertificateChain> {
    let mut certificates = Vec::new();

    for block in pem::parse_many(input)? {
        if block.tag() != CERTIFICATE_PEM_LABEL {
            debug!(tag = block.tag(), "skipping PEM block");
            continue;
        }

        certificates.push(block.into_contents());
    }

    if certificates.is_empty() {
        return Err(CtSubmitError::NoCertificatesFound);
    }

    debug!(certificates = certificates.len(), "read certificate chain");
    Ok(CertificateChain::new(certificates))
}
