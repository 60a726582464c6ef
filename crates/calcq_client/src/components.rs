//! Ready-to-use components for the expression form and list.
//!
//! These wrap the hooks in `hooks.rs`. They must be rendered inside an
//! `ExpressionProvider`.

use leptos::prelude::*;

use crate::hooks::{use_expression_input, use_expressions, use_submit_expression};
use crate::render::RecordBlock;

/// Form with a single text input for new expressions.
///
/// # Props
///
/// - `placeholder`: Placeholder text for the input (optional)
/// - `button_label`: Label of the submit button (default: "Calculate")
#[component]
pub fn ExpressionForm(
    /// Placeholder text
    #[prop(optional)]
    placeholder: Option<&'static str>,
    /// Submit button label
    #[prop(default = "Calculate")]
    button_label: &'static str,
) -> impl IntoView {
    let input = use_expression_input();
    let on_submit = use_submit_expression();

    view! {
        <form id="expressionForm" class="expression-form" on:submit=on_submit>
            <input
                id="expressionInput"
                type="text"
                autocomplete="off"
                placeholder=placeholder.unwrap_or("")
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button type="submit">{button_label}</button>
        </form>
    }
}

/// Container showing the header and one block per expression record.
///
/// The whole container content is rebuilt from the latest rendered list on
/// every refresh; blocks are not keyed or diffed.
#[component]
pub fn ExpressionList() -> impl IntoView {
    let list = use_expressions();

    view! {
        <div id="expressionList" class="expression-list">
            {move || {
                list.get().map(|list| {
                    view! {
                        <h2>{list.header}</h2>
                        {list
                            .blocks
                            .into_iter()
                            .map(|block| view! { <ExpressionBlock block=block /> })
                            .collect_view()}
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ExpressionBlock(block: RecordBlock) -> impl IntoView {
    view! {
        <div class=block.class>
            "ID: " {block.id}
            <br />
            "Expression: " {block.expression}
            <br />
            "Status: " {block.status}
            <br />
            "Result: " {block.result}
        </div>
    }
}
