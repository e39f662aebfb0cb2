//! Labelled form row with inline error text.

use leptos::prelude::*;

/// Wraps a form control with a label and, when present, its validation error.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] helper: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field" class:form-field--invalid=move || error.with(Option::is_some)>
            <label class="form-field__label">
                {label}
                <Show when=move || required>
                    <span class="form-field__required">"*"</span>
                </Show>
            </label>
            <div class="form-field__control">{children()}</div>
            {move || match error.get() {
                Some(message) => view! { <p class="form-field__error">{message}</p> }.into_any(),
                None => match helper {
                    Some(text) => view! { <p class="form-field__helper">{text}</p> }.into_any(),
                    None => ().into_any(),
                },
            }}
        </div>
    }
}
