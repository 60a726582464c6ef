use std::sync::Arc;

use leptos::prelude::*;

use crate::render::RenderedList;
use crate::sync::ExpressionSync;
use crate::traits::ExpressionView;
use crate::transport::HttpTransport;

/// The sync loop as wired up by [`ExpressionProvider`](crate::ExpressionProvider).
pub type ExpressionClient = ExpressionSync<HttpTransport, ExpressionContext>;

/// Reactive state behind the expression form and list.
///
/// This context is provided by `ExpressionProvider` and consumed by the
/// hooks in `hooks.rs`. It is the [`ExpressionView`] the sync loop writes to:
/// the input signal backs the text field, and the list signal holds the last
/// rendered snapshot (`None` until the first refresh lands).
#[derive(Clone, Copy)]
pub struct ExpressionContext {
    /// Text of the expression input
    pub input: RwSignal<String>,
    /// Last rendered list
    pub list: RwSignal<Option<RenderedList>>,
}

impl ExpressionContext {
    pub fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            list: RwSignal::new(None),
        }
    }
}

impl Default for ExpressionContext {
    fn default() -> Self {
        Self::new()
    }
}

// Responses can arrive after the provider unmounted and its signals were
// disposed, hence the try_* accessors throughout.
impl ExpressionView for ExpressionContext {
    fn input_value(&self) -> String {
        self.input.try_get_untracked().unwrap_or_default()
    }

    fn clear_input(&self) {
        let _ = self.input.try_set(String::new());
    }

    fn notify(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = window().alert_with_message(message) {
                log::error!("[ExpressionContext] Failed to show alert: {:?}", e);
            }
        }

        // No blocking dialog outside the browser
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::warn!("[ExpressionContext] {}", message);
        }
    }

    fn render(&self, list: RenderedList) {
        let _ = self.list.try_set(Some(list));
    }
}

/// Shared handle to the running client, as stored in the Leptos context.
pub type ClientHandle = Arc<ExpressionClient>;
