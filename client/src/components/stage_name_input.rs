//! Stage selector with fuzzy autocomplete.
//!
//! The level list is fetched once on mount. Until the first response arrives
//! the input renders as a disabled skeleton; a failed fetch is reported as the
//! field's error while any previously fetched list stays usable.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::state::editor::{EditorState, STAGE_NAME_FIELD};
use crate::state::stage_search::StageSearchState;

/// Suggestions rendered at once; the rest are reachable by refining the query.
const SUGGESTION_LIMIT: usize = 50;

#[component]
pub fn StageNameInput() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let stages = expect_context::<RwSignal<StageSearchState>>();
    let open = RwSignal::new(false);

    load_levels(stages);

    let error = Signal::derive(move || {
        editor
            .with(|e| e.field_error(STAGE_NAME_FIELD).map(str::to_owned))
            .or_else(|| stages.with(|s| s.error.clone()))
    });
    let selected_label = move || {
        let stage = editor.with(|e| e.operation.stage_name.as_ref().cloned())?;
        Some(stages.with(|s| s.label_for(&stage)))
    };

    let choose = Callback::new(move |level_id: String| {
        let label = stages.with_untracked(|s| s.label_for(&level_id));
        editor.update(|e| e.set_stage_name(Some(level_id)));
        stages.update(|s| s.query = label);
        open.set(false);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let first = stages.with_untracked(|s| s.suggestions().into_iter().next());
        if let Some(level) = first {
            choose.run(level.level_id);
        }
    };

    view! {
        <FormField label="关卡名" error=error required=true helper="输入关卡名、关卡编号或关卡 ID 搜索">
            <div class="stage-input">
                <input
                    class="stage-input__field"
                    class:skeleton=move || stages.with(StageSearchState::loading)
                    type="search"
                    placeholder=move || selected_label().unwrap_or_else(|| "选择关卡".to_owned())
                    disabled=move || stages.with(StageSearchState::loading)
                    prop:value=move || stages.with(|s| s.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        stages.update(|s| s.query = query);
                        open.set(true);
                    }
                    on:focus=move |_| open.set(true)
                    on:blur=move |_| open.set(false)
                    on:keydown=on_keydown
                />
                <Show when=move || open.get()>
                    <ul class="stage-input__suggestions" role="listbox">
                        {move || {
                            let current = editor.with(|e| e.operation.stage_name.clone());
                            stages
                                .with(StageSearchState::suggestions)
                                .into_iter()
                                .take(SUGGESTION_LIMIT)
                                .map(|level| {
                                    let active = current.as_deref() == Some(level.level_id.as_str());
                                    let label = level.display_label();
                                    let level_id = level.level_id;
                                    let title = level_id.clone();
                                    view! {
                                        <li
                                            class="stage-input__option"
                                            class:stage-input__option--active=active
                                            role="option"
                                            title=title
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                choose.run(level_id.clone());
                                            }
                                        >
                                            <span class="stage-input__option-label">{label}</span>
                                            <span class="stage-input__option-cat">{level.cat_two}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
                <button
                    class="btn btn--ghost stage-input__clear"
                    title="清除关卡"
                    on:click=move |_| {
                        editor.update(|e| e.set_stage_name(None));
                        stages.update(|s| s.query.clear());
                    }
                >
                    "✕"
                </button>
            </div>
        </FormField>
    }
}

/// Kick off the level fetch and feed the result into `stages`.
fn load_levels(stages: RwSignal<StageSearchState>) {
    #[cfg(feature = "csr")]
    {
        stages.update(StageSearchState::begin_fetch);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_levels().await {
                Ok(levels) => {
                    log::info!("loaded {} levels", levels.len());
                    stages.update(|s| s.finish_fetch(levels));
                }
                Err(err) => {
                    log::error!("level fetch failed: {err}");
                    stages.update(|s| s.fail_fetch(err));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = stages;
    }
}
