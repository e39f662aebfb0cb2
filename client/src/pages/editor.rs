//! Single-page operation editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the stage selector, doc fields, performer panel, operator sheet,
//! and action list around the shared [`EditorState`] signal. Import and export
//! run through the `copilot` converter; the draft is saved to localStorage
//! after every change.

use leptos::prelude::*;

use crate::components::action_list::ActionList;
use crate::components::form_field::FormField;
use crate::components::operator_sheet::OperatorSheet;
use crate::components::performer_panel::PerformerPanel;
use crate::components::stage_name_input::StageNameInput;
use crate::state::editor::{DOC_DETAILS_FIELD, DOC_TITLE_FIELD, EditorState, SubmitError};
use crate::state::stage_search::StageSearchState;
use crate::state::toast::{Intent, ToastState};
use crate::util::ui_persistence;

/// Which modal is open over the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Dialog {
    Import,
    /// Pretty-printed exported document.
    Export(String),
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let stages = expect_context::<RwSignal<StageSearchState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let dialog = RwSignal::new(None::<Dialog>);
    let import_text = RwSignal::new(String::new());

    Effect::new(move || {
        editor.with(|e| ui_persistence::save_draft(&e.operation));
    });

    let on_export = move |_| {
        let mut result = None;
        editor.update(|e| result = Some(e.submit()));
        match result {
            Some(Ok(document)) => match serde_json::to_string_pretty(&document) {
                Ok(text) => dialog.set(Some(Dialog::Export(text))),
                Err(err) => editor.update(|e| e.set_global_error(err.to_string())),
            },
            Some(Err(SubmitError::Invalid(_))) => toasts.update(|t| {
                t.show("请检查表单中的错误", Intent::Warning);
            }),
            Some(Err(SubmitError::Export(_))) | None => {}
        }
    };

    let on_import = Callback::new(move |()| {
        let raw = import_text.get_untracked();
        match copilot::import_operation_json(&raw) {
            Ok(operation) => {
                editor.update(|e| e.load(&operation));
                let label = operation
                    .stage_name
                    .as_deref()
                    .map(|stage| stages.with_untracked(|s| s.label_for(stage)))
                    .unwrap_or_default();
                stages.update(|s| s.query = label);
                import_text.set(String::new());
                dialog.set(None);
                toasts.update(|t| {
                    t.show("作业已导入", Intent::Success);
                });
            }
            Err(err) => {
                log::warn!("import rejected: {err}");
                toasts.update(|t| {
                    t.show(format!("导入失败: {err}"), Intent::Danger);
                });
            }
        }
    });

    let on_reset = move |_| {
        editor.set(EditorState::default());
        stages.update(|s| s.query.clear());
        ui_persistence::clear_draft();
    };

    let title_error = Signal::derive(move || editor.with(|e| e.field_error(DOC_TITLE_FIELD).map(str::to_owned)));
    let details_error = Signal::derive(move || editor.with(|e| e.field_error(DOC_DETAILS_FIELD).map(str::to_owned)));

    view! {
        <div class="editor-page">
            <header class="editor-page__header">
                <h1 class="editor-page__title">"作业编辑器"</h1>
                <div class="editor-page__actions">
                    <button class="btn" on:click=move |_| dialog.set(Some(Dialog::Import))>
                        "导入"
                    </button>
                    <button class="btn" on:click=on_reset>
                        "重置"
                    </button>
                    <button class="btn btn--primary" on:click=on_export>
                        "导出"
                    </button>
                </div>
            </header>

            {move || {
                editor
                    .with(|e| e.global_error().map(str::to_owned))
                    .map(|message| {
                        view! {
                            <div class="banner banner--danger" role="alert">
                                <span class="banner__message">{message}</span>
                                <button
                                    class="btn btn--ghost btn--small"
                                    aria-label="关闭"
                                    on:click=move |_| editor.update(EditorState::dismiss_global_error)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}

            <section class="editor-page__meta">
                <StageNameInput/>
                <FormField label="作业标题" error=title_error>
                    <input
                        class="input"
                        type="text"
                        placeholder="作业标题"
                        prop:value=move || editor.with(|e| e.title().to_owned())
                        on:input=move |ev| {
                            let title = event_target_value(&ev);
                            editor.update(|e| e.set_title(title));
                        }
                    />
                </FormField>
                <FormField label="作业描述" error=details_error helper="留空时导出会使用作业标题">
                    <textarea
                        class="input input--multiline"
                        placeholder="作业描述"
                        prop:value=move || editor.with(|e| e.details().to_owned())
                        on:input=move |ev| {
                            let details = event_target_value(&ev);
                            editor.update(|e| e.set_details(details));
                        }
                    ></textarea>
                </FormField>
            </section>

            <div class="editor-page__performers">
                <PerformerPanel/>
                <OperatorSheet/>
            </div>

            <ActionList/>

            {move || match dialog.get() {
                Some(Dialog::Import) => view! {
                    <ImportDialog text=import_text on_cancel=Callback::new(move |()| dialog.set(None)) on_import=on_import/>
                }
                .into_any(),
                Some(Dialog::Export(text)) => view! {
                    <ExportDialog text=text on_close=Callback::new(move |()| dialog.set(None))/>
                }
                .into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}

/// Paste-in dialog for an MAA document.
#[component]
fn ImportDialog(text: RwSignal<String>, on_cancel: Callback<()>, on_import: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--import" on:click=move |ev| ev.stop_propagation()>
                <label class="dialog__label">
                    "粘贴作业 JSON"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                        autofocus=true
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "取消"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || text.with(|t| t.trim().is_empty())
                        on:click=move |_| on_import.run(())
                    >
                        "导入"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Read-only view of the exported document.
#[component]
fn ExportDialog(text: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--export" on:click=move |ev| ev.stop_propagation()>
                <label class="dialog__label">
                    "导出的作业"
                    <textarea class="dialog__textarea" readonly=true prop:value=text></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "关闭"
                    </button>
                </div>
            </div>
        </div>
    }
}
