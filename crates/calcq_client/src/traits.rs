use async_trait::async_trait;
use calcq_common::ExpressionRecord;

use crate::error::ClientError;
use crate::render::RenderedList;

/// Transport to the expression service.
///
/// The browser build talks to the service through `fetch`, the native build
/// through `reqwest` (see [`HttpTransport`](crate::HttpTransport)). Tests
/// plug in scripted implementations.
///
/// Implementations report any non-success status as
/// [`ClientError::Status`]; response bodies of failed requests are never
/// parsed.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ExpressionApi: Send + Sync + 'static {
    /// Ask the service to queue a new expression.
    ///
    /// The text is sent verbatim. Validation is the service's job.
    async fn create_expression(&self, expression: &str) -> Result<(), ClientError>;

    /// Fetch the full, current collection of expression records in service order.
    async fn list_expressions(&self) -> Result<Vec<ExpressionRecord>, ClientError>;
}

/// The UI surface the sync loop drives.
///
/// In the browser this is [`ExpressionContext`](crate::ExpressionContext),
/// whose signals back the form input and the list container.
pub trait ExpressionView: Send + Sync + 'static {
    /// Current text of the expression input.
    fn input_value(&self) -> String;

    /// Empty the expression input.
    fn clear_input(&self);

    /// Show a blocking notification to the user.
    fn notify(&self, message: &str);

    /// Replace everything in the list container with `list`.
    fn render(&self, list: RenderedList);
}
