use std::sync::Arc;
use std::time::Duration;

use futures::future::abortable;
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::context::{ClientHandle, ExpressionContext};
use crate::schedule::interval_ticks;
use crate::sync::ExpressionSync;
use crate::transport::HttpTransport;

/// Provider component that creates the expression client and keeps the list
/// in sync with the service.
///
/// On mount it provides an [`ExpressionContext`] and a [`ClientHandle`] to its
/// children, loads the list immediately and then polls at the configured
/// interval. Polling stops when the provider unmounts.
///
/// # Example
///
/// ```rust,ignore
/// use calcq_client::{ClientConfig, ExpressionForm, ExpressionList, ExpressionProvider};
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     view! {
///         <ExpressionProvider config=ClientConfig::default()>
///             <ExpressionForm />
///             <ExpressionList />
///         </ExpressionProvider>
///     }
/// }
/// ```
#[component]
pub fn ExpressionProvider(
    /// Client settings (default: `ClientConfig::default()`)
    #[prop(optional)]
    config: Option<ClientConfig>,
    /// Child components
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("[ExpressionProvider] {}; falling back to defaults", e);
            ClientConfig::default()
        }
    };

    let view = ExpressionContext::new();
    let client: ClientHandle = Arc::new(ExpressionSync::new(
        HttpTransport::new(config.base_url.clone()),
        view,
        config.ordering,
    ));

    provide_context(view);
    provide_context(client.clone());

    log::info!(
        "[ExpressionProvider] Polling {} every {:?}",
        config.base_url,
        config.poll_interval()
    );
    start_polling(client, config.poll_interval());

    children()
}

/// Run the poll loop until the owning component is cleaned up.
fn start_polling(client: ClientHandle, period: Duration) {
    let (polling, handle) = abortable(async move {
        client.run_polling(interval_ticks(period)).await;
    });

    leptos::task::spawn_local(async move {
        // Err(Aborted) is the normal way out
        let _ = polling.await;
    });

    on_cleanup(move || {
        log::debug!("[ExpressionProvider] Stopping poll loop");
        handle.abort();
    });
}
