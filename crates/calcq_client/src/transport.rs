/// HTTP transport to the expression service
#[cfg(not(target_arch = "wasm32"))]
pub type HttpTransport = native_http::NativeHttpTransport;

/// HTTP transport to the expression service
#[cfg(target_arch = "wasm32")]
pub type HttpTransport = fetch_http::FetchTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native_http {
    use async_trait::async_trait;
    use calcq_common::codec::CalcqJsonCodec;
    use calcq_common::{
        endpoint_url, CalculateRequest, ExpressionRecord, ExpressionsResponse, CALCULATE_PATH,
        EXPRESSIONS_PATH,
    };
    use codee::{Decoder, Encoder};
    use reqwest::header::CONTENT_TYPE;

    use crate::error::ClientError;
    use crate::traits::ExpressionApi;

    /// Transport backed by a `reqwest` client.
    #[derive(Clone, Debug)]
    pub struct NativeHttpTransport {
        client: reqwest::Client,
        base_url: String,
    }

    impl NativeHttpTransport {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self::with_client(reqwest::Client::new(), base_url)
        }

        /// Use an existing client, e.g. one with custom timeouts.
        pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
            Self {
                client,
                base_url: base_url.into(),
            }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }
    }

    fn transport_error(err: reqwest::Error) -> ClientError {
        ClientError::Transport(err.to_string())
    }

    #[async_trait]
    impl ExpressionApi for NativeHttpTransport {
        async fn create_expression(&self, expression: &str) -> Result<(), ClientError> {
            let body = CalcqJsonCodec::encode(&CalculateRequest::new(expression))?;

            let response = self
                .client
                .post(endpoint_url(&self.base_url, CALCULATE_PATH))
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if !status.is_success() {
                return Err(ClientError::status(status.as_u16()));
            }
            Ok(())
        }

        async fn list_expressions(&self) -> Result<Vec<ExpressionRecord>, ClientError> {
            let response = self
                .client
                .get(endpoint_url(&self.base_url, EXPRESSIONS_PATH))
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if !status.is_success() {
                return Err(ClientError::status(status.as_u16()));
            }

            let text = response.text().await.map_err(transport_error)?;
            let decoded = <CalcqJsonCodec as Decoder<ExpressionsResponse>>::decode(&text)?;
            Ok(decoded.expressions)
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod fetch_http {
    use async_trait::async_trait;
    use calcq_common::codec::CalcqJsonCodec;
    use calcq_common::{
        endpoint_url, CalculateRequest, ExpressionRecord, ExpressionsResponse, CALCULATE_PATH,
        EXPRESSIONS_PATH,
    };
    use codee::{Decoder, Encoder};
    use gloo_net::http::Request;

    use crate::error::ClientError;
    use crate::traits::ExpressionApi;

    /// Transport backed by the browser's `fetch`.
    #[derive(Clone, Debug)]
    pub struct FetchTransport {
        base_url: String,
    }

    impl FetchTransport {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                base_url: base_url.into(),
            }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }
    }

    fn transport_error(err: gloo_net::Error) -> ClientError {
        ClientError::Transport(err.to_string())
    }

    #[async_trait(?Send)]
    impl ExpressionApi for FetchTransport {
        async fn create_expression(&self, expression: &str) -> Result<(), ClientError> {
            let body = CalcqJsonCodec::encode(&CalculateRequest::new(expression))?;

            let response = Request::post(&endpoint_url(&self.base_url, CALCULATE_PATH))
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;

            if !response.ok() {
                return Err(ClientError::status(response.status()));
            }
            Ok(())
        }

        async fn list_expressions(&self) -> Result<Vec<ExpressionRecord>, ClientError> {
            let response = Request::get(&endpoint_url(&self.base_url, EXPRESSIONS_PATH))
                .send()
                .await
                .map_err(transport_error)?;

            if !response.ok() {
                return Err(ClientError::status(response.status()));
            }

            let text = response.text().await.map_err(transport_error)?;
            let decoded = <CalcqJsonCodec as Decoder<ExpressionsResponse>>::decode(&text)?;
            Ok(decoded.expressions)
        }
    }
}
