//! Client for the external vehicle API.

use serde::Deserialize;
use serde_json::Value;

use super::UpstreamError;

/// Decoded VIN attributes, in the order the upstream returned them.
///
/// `serde_json`'s `preserve_order` feature keeps the map insertion-ordered,
/// so rows render in the sequence the API chose.
pub type VinDecode = serde_json::Map<String, Value>;

/// Envelope for `GET /api/vin/{vin}`.
#[derive(Debug, Deserialize)]
struct VinEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<VinDecode>,
}

/// Envelope for `GET /api/makes`.
#[derive(Debug, Deserialize)]
struct MakesEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    makes: Option<Vec<String>>,
}

/// Envelope for `GET /api/models/{make}/{year}`.
#[derive(Debug, Deserialize)]
struct ModelsEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    models: Option<Vec<String>>,
}

/// Client for the vehicle API.
///
/// All three endpoints share the `{status, ...}` envelope convention; a
/// non-`"success"` status maps to [`UpstreamError::Rejected`] carrying the
/// optional server message. Whether that message reaches the user is the
/// caller's decision per flow.
#[derive(Debug, Clone)]
pub struct VehicleClient {
    http: reqwest::Client,
    base_url: String,
}

impl VehicleClient {
    /// Create a new vehicle API client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Decode a VIN into its attribute map.
    pub async fn decode_vin(&self, vin: &str) -> Result<VinDecode, UpstreamError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/vin/{vin}")))
            .send()
            .await?
            .error_for_status()?;

        let envelope: VinEnvelope = resp.json().await?;
        if envelope.status == "success" {
            Ok(envelope.data.unwrap_or_default())
        } else {
            Err(UpstreamError::Rejected {
                message: envelope.message,
            })
        }
    }

    /// List the available makes.
    pub async fn list_makes(&self) -> Result<Vec<String>, UpstreamError> {
        let resp = self
            .http
            .get(self.url("/api/makes"))
            .send()
            .await?
            .error_for_status()?;

        let envelope: MakesEnvelope = resp.json().await?;
        if envelope.status == "success" {
            Ok(envelope.makes.unwrap_or_default())
        } else {
            Err(UpstreamError::Rejected {
                message: envelope.message,
            })
        }
    }

    /// List the models for a make and year, in the order returned.
    pub async fn list_models(&self, make: &str, year: &str) -> Result<Vec<String>, UpstreamError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/models/{make}/{year}")))
            .send()
            .await?
            .error_for_status()?;

        let envelope: ModelsEnvelope = resp.json().await?;
        if envelope.status == "success" {
            Ok(envelope.models.unwrap_or_default())
        } else {
            Err(UpstreamError::Rejected {
                message: envelope.message,
            })
        }
    }
}

/// Displayable form of one VIN attribute value.
///
/// `None` means the caller should render the placeholder: the upstream uses
/// empty strings and nulls interchangeably for "unknown", and zero/false are
/// treated the same way.
#[must_use]
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
