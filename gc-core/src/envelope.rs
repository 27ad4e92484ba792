//! Request and response envelopes.
//!
//! GoCardless wraps every resource representation in a single-key JSON
//! object named after the resource collection, e.g.
//! `{"creditor_bank_accounts": {...}}`, in both directions.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::{CreateRequest, Resource};
use crate::Error;

/// Borrowed view of a request body nested under its envelope key.
///
/// Serializing through this type keeps the inner field order as declared
/// on the request model.
pub struct Envelope<'a, T> {
    key: &'static str,
    inner: &'a T,
}

impl<'a, T: Serialize> Envelope<'a, T> {
    pub fn new(key: &'static str, inner: &'a T) -> Self {
        Self { key, inner }
    }
}

impl<'a, T: Serialize> Serialize for Envelope<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.inner)?;
        map.end()
    }
}

/// Encodes a create request as the UTF-8 JSON body sent to the API.
pub fn encode<RQ: CreateRequest>(request: &RQ) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(&Envelope::new(
        <RQ::Resource as Resource>::ENVELOPE,
        request,
    ))?)
}

/// Ways a response body can fail to decode into a resource.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response has no {0} envelope")]
    MissingEnvelope(&'static str),
}

/// Decodes a response body, failing if the resource's envelope key is
/// absent rather than returning a partially populated model.
pub fn decode<R: Resource>(bytes: &[u8]) -> Result<R, DecodeError> {
    let mut envelope: Map<String, Value> = serde_json::from_slice(bytes)?;
    let inner = envelope
        .remove(R::ENVELOPE)
        .ok_or(DecodeError::MissingEnvelope(R::ENVELOPE))?;
    Ok(serde_json::from_value(inner)?)
}
