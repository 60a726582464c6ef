//! Browser page for the calcq expression queue.
//!
//! Shows a form for new expressions and the processing history below it.
//! The service location and poll cadence can be set from the host page:
//!
//! ```html
//! <script id="calcq-config" type="application/json">
//!   { "base_url": "http://localhost:8080/api/v1", "poll_interval_ms": 3000 }
//! </script>
//! ```
//!
//! Build and serve:
//!   cd crates/calcq_web
//!   trunk serve --open

use calcq_client::{ClientConfig, ExpressionForm, ExpressionList, ExpressionProvider};
use leptos::prelude::*;

/// Id of the inline JSON block holding the client settings.
const CONFIG_ELEMENT_ID: &str = "calcq-config";

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let config = load_config();
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Read the client settings from the host page, falling back to defaults.
fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        log::debug!("[calcq_web] No #{} block, using defaults", CONFIG_ELEMENT_ID);
        return ClientConfig::default();
    };

    match ClientConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[calcq_web] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            ClientConfig::default()
        }
    }
}

#[component]
fn App(config: ClientConfig) -> impl IntoView {
    view! {
        <ExpressionProvider config=config>
            <main class="calcq">
                <h1>"Expression calculator"</h1>
                <ExpressionForm placeholder="2 + 2 * 2" />
                <ExpressionList />
            </main>
        </ExpressionProvider>
    }
}
