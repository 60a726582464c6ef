//! # calcq client
//!
//! Reactive Leptos client for an expression queue service: a remote HTTP API
//! that accepts arithmetic expressions and reports their processing status
//! and results asynchronously.
//!
//! The client does three things:
//!
//! - **Submit**: send the text of the expression input to `POST {base}/calculate`,
//!   clear the input on success and refresh the list right away. Failures are
//!   shown to the user and the input is kept for another try.
//! - **Refresh**: fetch `GET {base}/expressions` and replace the rendered list.
//!   Failures are only logged; whatever is on screen stays there.
//! - **Poll**: refresh once on mount and then at a fixed interval (3 seconds
//!   by default) until the provider unmounts.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use calcq_client::{ClientConfig, ExpressionForm, ExpressionList, ExpressionProvider};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let config = ClientConfig::default().with_base_url("http://localhost:8080/api/v1");
//!
//!     view! {
//!         <ExpressionProvider config=config>
//!             <ExpressionForm placeholder="2 + 2 * 2" />
//!             <ExpressionList />
//!         </ExpressionProvider>
//!     }
//! }
//! ```
//!
//! ## Without Leptos
//!
//! The sync loop itself is [`ExpressionSync`], generic over an
//! [`ExpressionApi`] transport and an [`ExpressionView`]. Anything that can
//! read and clear an input, show a notification and display a
//! [`RenderedList`] can drive it.
//!
//! ## Overlapping refreshes
//!
//! A submission-triggered refresh can overlap a scheduled one. By default the
//! response that completes last is rendered, even if it was requested first
//! ([`RefreshOrdering::LastCompleted`]); the next tick corrects any stale
//! view. [`RefreshOrdering::LatestIssued`] drops such stale completions
//! instead.

// Module declarations
mod components;
mod config;
mod context;
mod error;
mod hooks;
mod provider;
mod render;
mod schedule;
mod sync;
mod traits;
mod transport;

// Re-exports
pub use components::{ExpressionForm, ExpressionList};
pub use config::{ClientConfig, RefreshOrdering, DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL_MS};
pub use context::{ClientHandle, ExpressionClient, ExpressionContext};
pub use error::ClientError;
pub use hooks::{
    use_expression_client, use_expression_context, use_expression_input, use_expressions,
    use_submit_expression,
};
pub use provider::ExpressionProvider;
pub use render::{
    render_expressions, status_class, RecordBlock, RenderedList, LIST_HEADER, MISSING_EXPRESSION,
    MISSING_RESULT,
};
pub use schedule::{interval_ticks, MIN_TICK_PERIOD};
pub use sync::{ExpressionSync, RefreshOutcome};
pub use traits::{ExpressionApi, ExpressionView};
pub use transport::HttpTransport;

// Re-export the wire types for convenience
pub use calcq_common::{ExpressionRecord, RecordId};
