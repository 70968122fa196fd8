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

//! Submit X.509 certificate chains to a [Certificate Transparency] log and obtain
//! the Signed Certificate Timestamp in its binary [RFC 6962] form.
//!
//! The pipeline is:
//!
//! 1. [`chain::parse_pem_chain`] reads the `CERTIFICATE` blocks of a PEM bundle.
//! 2. [`ct::CtLogClient::add_chain`] posts them to the log's `add-chain` endpoint and
//!    decodes the JSON answer into a [`SignedCertificateTimestamp`].
//! 3. [`SignedCertificateTimestamp::encode`] writes the TLS-encoded structure that
//!    other CT tooling (for example a TLS server's SCT extension) consumes.
//!
//! ```rust,no_run
//! use ct_submit::{chain::parse_pem_chain, ct::CtLogClient};
//!
//! # async fn run() -> ct_submit::errors::Result<()> {
//! let chain = parse_pem_chain(std::fs::read("chain.pem")?)?;
//! let client = CtLogClient::new("ct.googleapis.com/logs/us1/argon2025h2", None)?;
//! let sct = client.add_chain(&chain).await?;
//! std::fs::write("chain.sct", sct.to_bytes()?)?;
//! # Ok(())
//! # }
//! ```
//!
//! The SCT signature is not verified, nor is the chain checked for trust.
//!
//! [Certificate Transparency]: https://certificate.transparency.dev/
//! [RFC 6962]: https://datatracker.ietf.org/doc/html/rfc6962

pub mod chain;
pub mod ct;
pub mod errors;
pub mod sct;

pub use sct::SignedCertificateTimestamp;
