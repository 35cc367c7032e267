//! Webhook signature verification for the payment provider.
//!
//! The provider signs `"<timestamp>.<raw body>"` with HMAC-SHA256 and sends
//! the result in a `Stripe-Signature` header of the form
//! `t=<unix ts>,v1=<hex>[,v1=<hex>...]`. Verification must run against the
//! exact bytes received on the wire.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Parsed signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    pub timestamp: String,
    pub signatures: Vec<String>,
}

/// Signature verification errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Header present but not in the expected scheme.
    InvalidFormat(String),
    /// No candidate signature matched the payload.
    VerificationFailed,
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(detail) => write!(f, "invalid signature format: {detail}"),
            Self::VerificationFailed => write!(f, "signature verification failed"),
        }
    }
}

impl std::error::Error for SignatureError {}

/// Splits the header into its timestamp and `v1` signature candidates.
/// Elements with unknown keys (older schemes) are skipped.
pub fn parse_signature_header(header: &str) -> Result<SignatureHeader, SignatureError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for element in header.split(',') {
        let (key, value) = element
            .trim()
            .split_once('=')
            .ok_or_else(|| SignatureError::InvalidFormat(format!("malformed element: {element}")))?;

        match key {
            "t" => timestamp = Some(value.to_string()),
            "v1" => signatures.push(value.to_string()),
            _ => {}
        }
    }

    let timestamp =
        timestamp.ok_or_else(|| SignatureError::InvalidFormat("missing timestamp".to_string()))?;

    if signatures.is_empty() {
        return Err(SignatureError::InvalidFormat(
            "no v1 signature".to_string(),
        ));
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

/// Verifies the header against the raw payload bytes. Comparison is
/// constant-time via `Mac::verify_slice`.
pub fn verify_signature(payload: &[u8], header: &str, secret: &str) -> Result<(), SignatureError> {
    let parsed = parse_signature_header(header)?;

    for candidate in &parsed.signatures {
        let Ok(candidate) = hex::decode(candidate) else {
            continue;
        };

        let mac = signed_payload_mac(payload, &parsed.timestamp, secret)?;
        if mac.verify_slice(&candidate).is_ok() {
            return Ok(());
        }
    }

    Err(SignatureError::VerificationFailed)
}

/// Computes the hex signature for a payload; used by tooling and tests to
/// produce valid headers.
pub fn sign_payload(payload: &[u8], timestamp: &str, secret: &str) -> Result<String, SignatureError> {
    let mac = signed_payload_mac(payload, timestamp, secret)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

fn signed_payload_mac(
    payload: &[u8],
    timestamp: &str,
    secret: &str,
) -> Result<HmacSha256, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| SignatureError::InvalidFormat("invalid secret".to_string()))?;
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(payload);
    Ok(mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";

    fn header_for(payload: &[u8], timestamp: &str) -> String {
        let signature = sign_payload(payload, timestamp, SECRET).unwrap();
        format!("t={timestamp},v1={signature}")
    }

    #[test]
    fn round_trip_verifies() {
        let payload = br#"{"type":"payment_intent.succeeded"}"#;
        let header = header_for(payload, "1700000000");

        assert!(verify_signature(payload, &header, SECRET).is_ok());
    }

    #[test]
    fn tampered_payload_fails() {
        let payload = br#"{"amount":100}"#;
        let header = header_for(payload, "1700000000");

        let result = verify_signature(br#"{"amount":999}"#, &header, SECRET);
        assert_eq!(result, Err(SignatureError::VerificationFailed));
    }

    #[test]
    fn whitespace_changes_the_signature() {
        // Byte-identical means byte-identical; re-encoded JSON must fail.
        let payload = br#"{"amount": 100}"#;
        let header = header_for(payload, "1700000000");

        let result = verify_signature(br#"{"amount":100}"#, &header, SECRET);
        assert_eq!(result, Err(SignatureError::VerificationFailed));
    }

    #[test]
    fn wrong_secret_fails() {
        let payload = b"payload";
        let header = header_for(payload, "1700000000");

        let result = verify_signature(payload, &header, "whsec_other");
        assert_eq!(result, Err(SignatureError::VerificationFailed));
    }

    #[test]
    fn timestamp_is_part_of_the_signed_message() {
        let payload = b"payload";
        let signature = sign_payload(payload, "1700000000", SECRET).unwrap();
        let header = format!("t=1700000001,v1={signature}");

        let result = verify_signature(payload, &header, SECRET);
        assert_eq!(result, Err(SignatureError::VerificationFailed));
    }

    #[test]
    fn second_candidate_signature_is_accepted() {
        let payload = b"payload";
        let good = sign_payload(payload, "1700000000", SECRET).unwrap();
        let header = format!("t=1700000000,v1={},v1={good}", "00".repeat(32));

        assert!(verify_signature(payload, &header, SECRET).is_ok());
    }

    #[test]
    fn unknown_scheme_elements_are_ignored() {
        let payload = b"payload";
        let good = sign_payload(payload, "1700000000", SECRET).unwrap();
        let header = format!("t=1700000000,v0=legacy,v1={good}");

        assert!(verify_signature(payload, &header, SECRET).is_ok());
    }

    #[test]
    fn malformed_header_is_rejected() {
        for header in ["", "t=123", "v1=abcd", "not-a-scheme", "t=123,v1"] {
            assert!(matches!(
                verify_signature(b"payload", header, SECRET),
                Err(SignatureError::InvalidFormat(_))
            ));
        }
    }
}
