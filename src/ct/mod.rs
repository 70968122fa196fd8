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

//! Client for submitting certificate chains to a Certificate Transparency log.

pub mod models;

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::chain::CertificateChain;
use crate::errors::{CtSubmitError, Result};
use crate::sct::SignedCertificateTimestamp;
use models::{AddChainRequest, AddChainResponse};

/// Path of the `add-chain` endpoint, relative to the log's base URL.
pub const ADD_CHAIN_PATH: &str = "ct/v1/add-chain";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the `add-chain` URL for a log given as a base URL or a bare host.
///
/// `https://` is assumed when no scheme is present. A path prefix on the base URL is
/// kept, with or without a trailing slash.
pub fn normalize_log_url(log_server: &str) -> Result<Url> {
    let mut log_server = if log_server.contains("://") {
        log_server.to_owned()
    } else {
        format!("https://{log_server}")
    };

    if !log_server.ends_with('/') {
        log_server.push('/');
    }

    Ok(Url::parse(&log_server)?.join(ADD_CHAIN_PATH)?)
}

/// A CT log, reached over HTTP(S).
pub struct CtLogClient {
    add_chain_url: Url,
    client: reqwest::Client,
}

impl CtLogClient {
    /// Create a client for the given log.
    ///
    /// * log_server: base URL or host name of the log.
    /// * timeout: overall limit for a single request, `None` waits indefinitely.
    pub fn new(log_server: &str, timeout: Option<Duration>) -> Result<Self> {
        let add_chain_url = normalize_log_url(log_server)?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            add_chain_url,
            client: builder.build()?,
        })
    }

    pub fn add_chain_url(&self) -> &Url {
        &self.add_chain_url
    }

    /// Submit `chain` and return the SCT the log issued for it.
    ///
    /// Anything but `200 OK` is an error carrying the response body. The SCT
    /// signature is not verified.
    pub async fn add_chain(&self, chain: &CertificateChain) -> Result<SignedCertificateTimestamp> {
        let request = AddChainRequest::from(chain);
        debug!(url = %self.add_chain_url, certificates = request.chain.len(), "submitting chain");

        let response = self
            .client
            .post(self.add_chain_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "log server responded");

        if status != StatusCode::OK {
            return Err(CtSubmitError::UnexpectedStatus { status, body });
        }

        let response: AddChainResponse = serde_json::from_str(&body)?;
        Ok(SignedCertificateTimestamp::try_from(response)?)
    }
}
