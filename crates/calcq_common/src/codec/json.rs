use codee::{Decoder, Encoder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::WireError;

/// JSON codec for the calcq HTTP API.
///
/// Request bodies are encoded to a `String` and response bodies are decoded
/// from `str`, which is what both the browser `fetch` transport and the
/// native transport hand around.
///
/// ## Usage
///
/// ```rust,ignore
/// use calcq_common::codec::CalcqJsonCodec;
/// use calcq_common::{CalculateRequest, ExpressionsResponse};
/// use codee::{Decoder, Encoder};
///
/// let body = CalcqJsonCodec::encode(&CalculateRequest::new("2+2"))?;
/// let list: ExpressionsResponse = CalcqJsonCodec::decode(&response_text)?;
/// ```
pub struct CalcqJsonCodec;

impl<T: Serialize> Encoder<T> for CalcqJsonCodec {
    type Error = WireError;
    type Encoded = String;

    fn encode(val: &T) -> Result<Self::Encoded, Self::Error> {
        serde_json::to_string(val).map_err(|e| WireError::Encode(e.to_string()))
    }
}

impl<T: DeserializeOwned> Decoder<T> for CalcqJsonCodec {
    type Error = WireError;
    type Encoded = str;

    fn decode(val: &Self::Encoded) -> Result<T, Self::Error> {
        serde_json::from_str(val).map_err(|e| WireError::Decode(e.to_string()))
    }
}
