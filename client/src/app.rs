//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::toaster::Toaster;
use crate::pages::editor::EditorPage;
use crate::state::{
    editor::EditorState, operator_sheet::OperatorSheetState, stage_search::StageSearchState, toast::ToastState,
};
use crate::util::ui_persistence;

/// Root application component.
///
/// Provides the shared state contexts and restores a saved draft, if any.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor = RwSignal::new(initial_editor());
    let stages = RwSignal::new(StageSearchState::default());
    let sheet = RwSignal::new(OperatorSheetState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(editor);
    provide_context(stages);
    provide_context(sheet);
    provide_context(toasts);

    view! {
        <Stylesheet id="copilot-editor" href="/style.css"/>
        <Title text="MAA Copilot 作业编辑器"/>

        <main class="app">
            <EditorPage/>
        </main>
        <Toaster/>
    }
}

/// Fresh form, or the saved draft with new transient ids.
fn initial_editor() -> EditorState {
    let mut state = EditorState::default();
    if let Some(draft) = ui_persistence::load_draft() {
        log::info!("restoring saved draft");
        state.load(&draft);
    }
    state
}
