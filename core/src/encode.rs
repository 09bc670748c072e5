//! Request body encoding.
//!
//! `Encoder` is the seam for the serialization step of a submission. The
//! default `JsonEncoder` cannot fail for `Product`; tests swap in an encoder
//! that does.

use crate::error::BoxError;
use crate::types::Product;

/// Turns a product into request body bytes.
pub trait Encoder {
    fn encode(&self, product: &Product) -> Result<Vec<u8>, BoxError>;
}

/// Plain `serde_json` encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn encode(&self, product: &Product) -> Result<Vec<u8>, BoxError> {
        Ok(serde_json::to_vec(product)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_encoder_writes_every_key() {
        let product = Product {
            title: "Pen".to_string(),
            price: 3,
            ..Product::default()
        };
        let bytes = JsonEncoder.encode(&product).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["title"], "Pen");
        assert_eq!(body["description"], "");
        assert_eq!(body["price"], 3);
        assert_eq!(body["brand"], "");
        assert_eq!(body["category"], "");
    }
}
