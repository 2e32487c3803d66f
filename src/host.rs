//! Messages exchanged with the host panel
//!
//! The panel sends a `convert-json` request carrying the document and the
//! options it collected, and gets back either a `conversion-complete` summary
//! or a `conversion-error` with a readable message.

use crate::convert::{convert, Conversion};
use crate::fonts::FontLoader;
use crate::scene::Rect;
use crate::types::ConversionOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Message sent by the panel
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PanelMessage {
    ConvertJson(ConvertRequest),
    /// The user closed the panel
    Cancel,
}

/// Payload of a `convert-json` message
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Document to convert, `null` when the panel had nothing to send
    #[serde(default)]
    pub json_data: JsonValue,
    /// Options merged over the defaults
    #[serde(default)]
    pub options: ConversionOptions,
}

/// Reply sent back to the panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ConvertReply {
    #[serde(rename_all = "camelCase")]
    ConversionComplete {
        created: usize,
        root_id: String,
        root_name: String,
        bounds: Option<Rect>,
    },
    ConversionError { error: String },
}

impl From<&Conversion> for ConvertReply {
    fn from(conversion: &Conversion) -> Self {
        let summary = &conversion.summary;
        ConvertReply::ConversionComplete {
            created: summary.created,
            root_id: summary.root_id.clone(),
            root_name: summary.root_name.clone(),
            bounds: summary.bounds,
        }
    }
}

/// Run a panel request and build the reply
///
/// Returns the reply together with the conversion, which is `None` when the
/// conversion failed.
///
/// # Examples
/// ```
/// use json2fig::host::{handle_request, ConvertReply, ConvertRequest};
/// use json2fig::FontBook;
/// use serde_json::json;
///
/// let request: ConvertRequest = serde_json::from_value(json!({"jsonData": null})).unwrap();
///
/// let (reply, conversion) = handle_request(&request, &mut FontBook::permissive());
/// assert!(conversion.is_none());
/// assert_eq!(reply, ConvertReply::ConversionError { error: "No JSON data provided".to_string() });
/// ```
pub fn handle_request(
    request: &ConvertRequest,
    fonts: &mut dyn FontLoader,
) -> (ConvertReply, Option<Conversion>) {
    match convert(&request.json_data, &request.options, fonts) {
        Ok(conversion) => (ConvertReply::from(&conversion), Some(conversion)),
        Err(err) => {
            log::error!("Conversion failed: {}", err);
            (
                ConvertReply::ConversionError {
                    error: err.to_string(),
                },
                None,
            )
        }
    }
}
