use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::{ClientHandle, ExpressionContext};
use crate::render::RenderedList;

/// Hook to access the running expression client.
///
/// # Panics
///
/// Panics if called outside of an `ExpressionProvider` context.
pub fn use_expression_client() -> ClientHandle {
    expect_context::<ClientHandle>()
}

/// Hook to access the reactive expression state.
///
/// # Panics
///
/// Panics if called outside of an `ExpressionProvider` context.
pub fn use_expression_context() -> ExpressionContext {
    expect_context::<ExpressionContext>()
}

/// Hook returning the last rendered list, `None` until the first refresh completes.
///
/// The signal changes on every accepted refresh, even when the records are
/// identical, so views bound to it are rebuilt each time.
pub fn use_expressions() -> ReadSignal<Option<RenderedList>> {
    use_expression_context().list.read_only()
}

/// Hook returning the signal behind the expression input.
pub fn use_expression_input() -> RwSignal<String> {
    use_expression_context().input
}

/// Hook returning a form `submit` handler.
///
/// The handler always suppresses the browser's own form submission first,
/// then sends the current input in the background.
///
/// # Example
///
/// ```rust,ignore
/// #[component]
/// fn QuickForm() -> impl IntoView {
///     let on_submit = use_submit_expression();
///     view! { <form on:submit=on_submit>...</form> }
/// }
/// ```
pub fn use_submit_expression() -> impl Fn(SubmitEvent) + Clone + 'static {
    let client = use_expression_client();

    move |ev: SubmitEvent| {
        ev.prevent_default();

        let client = client.clone();
        leptos::task::spawn_local(async move {
            // Failures were already shown to the user by submit()
            let _ = client.submit().await;
        });
    }
}
