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

//! Models for the CT log `add-chain` endpoint.
//!
//! <https://datatracker.ietf.org/doc/html/rfc6962#section-4.1>

use base64::{engine::general_purpose::STANDARD as BASE64_STD_ENGINE, Engine as _};
use serde::{Deserialize, Serialize};

use crate::chain::CertificateChain;
use crate::sct::{decode_field, EncodeError, SignedCertificateTimestamp, LOG_ID_LEN};

/// Body of an `add-chain` submission: base64 DER certificates, leaf first.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddChainRequest {
    pub chain: Vec<String>,
}

impl From<&CertificateChain> for AddChainRequest {
    fn from(chain: &CertificateChain) -> Self {
        Self {
            chain: chain
                .certificates()
                .iter()
                .map(|der| BASE64_STD_ENGINE.encode(der))
                .collect(),
        }
    }
}

/// SCT as returned by the log, before its fields are decoded.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddChainResponse {
    pub sct_version: u8,
    pub id: String,
    pub timestamp: i64,
    #[serde(default)]
    pub extensions: String,
    pub signature: String,
}

impl TryFrom<AddChainResponse> for SignedCertificateTimestamp {
    type Error = EncodeError;

    fn try_from(value: AddChainResponse) -> Result<Self, Self::Error> {
        let id = decode_field("id", &value.id)?;
        let log_id = <[u8; LOG_ID_LEN]>::try_from(id.as_slice())
            .map_err(|_| EncodeError::InvalidLogIdLength { len: id.len() })?;

        Ok(SignedCertificateTimestamp {
            version: value.sct_version,
            log_id,
            timestamp: value.timestamp,
            extensions: decode_field("extensions", &value.extensions)?,
            signature: decode_field("signature", &value.signature)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use serde_json::json;

    const RESPONSE_JSON: &str = r#"{"sct_version":0,"id":"ekJiz/ZpG+UEn5w/GaIr6+awI+RKfkpt/V9Teu7va1k=","timestamp":1702537770426,"extensions":"","signature":"BAMARjBEAiAOo/t6xD64FEvMjFpal1HUVFqANg9rwdKmwsPSl16nEgIgfaMNRG10qAV5go4355ZLU5UottoY00+ItaxYb4dfetg="}"#;

    #[test]
    fn request_body_shape() {
        let chain = CertificateChain::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let request = AddChainRequest::from(&chain);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "chain": ["AQID", "BAUG"] })
        );
    }

    #[test]
    fn decode_log_response() {
        let response: AddChainResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
        let sct = SignedCertificateTimestamp::try_from(response).unwrap();

        assert_eq!(sct.version, 0);
        assert_eq!(
            sct.log_id,
            hex!("7a4262cff6691be5049f9c3f19a22bebe6b023e44a7e4a6dfd5f537aeeef6b59")
        );
        assert_eq!(sct.timestamp, 1_702_537_770_426);
        assert!(sct.extensions.is_empty());
        assert_eq!(sct.signature.len(), 74);
        assert_eq!(sct.signature[..4], hex!("04030046"));
    }

    #[test]
    fn missing_extensions_default_to_empty() {
        let response: AddChainResponse = serde_json::from_value(json!({
            "sct_version": 0,
            "id": "ekJiz/ZpG+UEn5w/GaIr6+awI+RKfkpt/V9Teu7va1k=",
            "timestamp": 1,
            "signature": "BAMAAA==",
        }))
        .unwrap();

        let sct = SignedCertificateTimestamp::try_from(response).unwrap();
        assert!(sct.extensions.is_empty());
        assert_eq!(sct.signature, hex!("04030000"));
    }

    #[test]
    fn short_log_id_is_rejected() {
        let response = AddChainResponse {
            sct_version: 0,
            id: "AQID".to_string(),
            timestamp: 0,
            extensions: String::new(),
            signature: String::new(),
        };

        assert!(matches!(
            SignedCertificateTimestamp::try_from(response),
            Err(EncodeError::InvalidLogIdLength { len: 3 })
        ));
    }

    #[test]
    fn invalid_base64_names_field() {
        let mut response: AddChainResponse = serde_json::from_str(RESPONSE_JSON).unwrap();
        response.extensions = "%%%".to_string();

        assert!(matches!(
            SignedCertificateTimestamp::try_from(response),
            Err(EncodeError::InvalidFieldEncoding {
                field: "extensions",
                ..
            })
        ));
    }

    #[test]
    fn mistyped_fields_do_not_deserialize() {
        for body in [
            json!({ "sct_version": 256, "id": "", "timestamp": 0, "signature": "" }),
            json!({ "sct_version": 0, "id": "", "timestamp": "0", "signature": "" }),
            json!({ "sct_version": 0, "id": "", "timestamp": 0 }),
        ] {
            assert!(serde_json::from_value::<AddChainResponse>(body).is_err());
        }
    }
}
