//! Product submission client.
//!
//! # Design
//! `ProductSubmitter` holds the endpoint, a `Transport` and an `Encoder`, and
//! carries no mutable state between calls. `submit` is split into
//! `build_submit`, which produces an `HttpRequest`, and `parse_submit`,
//! which consumes an `HttpResponse`. A host that wants to do its own I/O can
//! call the two halves directly. Both capabilities are generic parameters so
//! every failure branch can be reproduced in tests without a network.

use ureq::http::Uri;

use crate::encode::{Encoder, JsonEncoder};
use crate::error::SubmitError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::Product;

/// Statuses treated as a successful create.
const ACCEPTED_STATUSES: [u16; 2] = [200, 201];

/// Synchronous client that posts a `Product` to a fixed endpoint.
///
/// Safe to share across threads when the transport and encoder are.
#[derive(Debug, Clone)]
pub struct ProductSubmitter<T = UreqTransport, E = JsonEncoder> {
    endpoint: String,
    transport: T,
    encoder: E,
}

impl<T: Transport> ProductSubmitter<T, JsonEncoder> {
    /// Post to `endpoint` through `transport`, encoding bodies as JSON.
    ///
    /// The endpoint is stored verbatim and only checked when a request is
    /// built.
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            encoder: JsonEncoder,
        }
    }
}

impl<T: Transport, E: Encoder> ProductSubmitter<T, E> {
    /// Replace the request body encoder.
    pub fn with_encoder<E2: Encoder>(self, encoder: E2) -> ProductSubmitter<T, E2> {
        ProductSubmitter {
            endpoint: self.endpoint,
            transport: self.transport,
            encoder,
        }
    }

    /// The URL every submission is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post `product` and return the product the remote sent back.
    ///
    /// The returned value is decoded from the response and may differ from
    /// the input. A failed call gives no guarantee about remote state: the
    /// product may have been created even if decoding the reply failed.
    pub fn submit(&self, product: Product) -> Result<Product, SubmitError> {
        let request = self.build_submit(&product)?;
        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = request.body.len(),
            "submitting product"
        );
        let response = self
            .transport
            .post(&request)
            .map_err(SubmitError::Transport)?;
        self.parse_submit(response)
    }

    /// Encode `product` and build the POST request for the endpoint.
    pub fn build_submit(&self, product: &Product) -> Result<HttpRequest, SubmitError> {
        let body = self
            .encoder
            .encode(product)
            .map_err(SubmitError::Serialization)?;
        validate_endpoint(&self.endpoint)?;
        Ok(HttpRequest {
            url: self.endpoint.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        })
    }

    /// Check the status and decode the body of a submit response.
    pub fn parse_submit(&self, response: HttpResponse) -> Result<Product, SubmitError> {
        check_status(&response)?;
        // A bare `null` body decodes to the zero product.
        let product = serde_json::from_slice::<Option<Product>>(&response.body)
            .map_err(SubmitError::Decode)?
            .unwrap_or_default();
        tracing::debug!(status = response.status, "product accepted");
        Ok(product)
    }
}

/// The endpoint must parse as an absolute URI with a scheme and a host.
fn validate_endpoint(endpoint: &str) -> Result<(), SubmitError> {
    let invalid = |reason: String| SubmitError::RequestConstruction {
        endpoint: endpoint.to_string(),
        reason,
    };
    let uri = endpoint
        .parse::<Uri>()
        .map_err(|e| invalid(e.to_string()))?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(invalid("endpoint must be an absolute URL".to_string()));
    }
    Ok(())
}

fn check_status(response: &HttpResponse) -> Result<(), SubmitError> {
    if ACCEPTED_STATUSES.contains(&response.status) {
        return Ok(());
    }
    tracing::warn!(status = response.status, "product submission rejected");
    Err(SubmitError::UnexpectedStatus {
        status: response.status,
    })
}
