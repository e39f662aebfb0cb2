//! Ordered action sequence with drag-and-drop reordering.
//!
//! DESIGN
//! ======
//! Rows are keyed by transient id; the drag source index is captured at
//! `dragstart` and applied with [`EditorState::move_action`] on `drop`. The
//! add form above the list builds a new [`Action`] from canonical vocabulary
//! values so exported documents never carry localized names.

#[cfg(test)]
#[path = "action_list_test.rs"]
mod action_list_test;

use copilot::{Action, ActionType, Direction, Field, TransientId};
use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::util::reorder::begin_drag;

#[component]
pub fn ActionList() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let drag_from = RwSignal::new(None::<usize>);

    view! {
        <section class="action-list">
            <h3 class="panel__title">
                "动作序列"
                <span class="panel__count">{move || editor.with(|e| e.actions().len())}</span>
            </h3>
            <ActionForm/>
            <Show
                when=move || editor.with(|e| !e.actions().is_empty())
                fallback=|| view! { <p class="action-list__empty">"暂无动作"</p> }
            >
                <ol class="action-list__items">
                    {move || {
                        editor
                            .with(|e| e.actions().to_vec())
                            .into_iter()
                            .enumerate()
                            .filter_map(|(index, action)| {
                                let id = action.id.clone()?;
                                Some(view! { <ActionRow index=index id=id action=action drag_from=drag_from/> })
                            })
                            .collect::<Vec<_>>()
                    }}
                </ol>
            </Show>
        </section>
    }
}

/// One action; editable name and doc, removable, draggable.
#[component]
fn ActionRow(index: usize, id: TransientId, action: Action, drag_from: RwSignal<Option<usize>>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let over = RwSignal::new(false);
    let type_label = action
        .action_type
        .as_deref()
        .map(|raw| ActionType::find(raw).map_or_else(|| raw.to_owned(), |t| t.localized().to_owned()))
        .unwrap_or_else(|| "未知".to_owned());
    let direction_label = action
        .direction
        .as_deref()
        .and_then(Direction::find)
        .filter(|_| action.action_type.as_deref().and_then(ActionType::find).is_some_and(ActionType::has_direction))
        .map(Direction::localized);
    let location_label = action.location.as_ref().map(|(x, y)| format!("({x}, {y})"));
    let name_id = id.clone();
    let doc_id = id.clone();
    let name = action.name.into_option().unwrap_or_default();
    let doc = action.doc.into_option().unwrap_or_default();

    view! {
        <li
            class="action-row"
            class:action-row--over=move || over.get()
            draggable="true"
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                begin_drag(&ev, &index.to_string());
                drag_from.set(Some(index));
            }
            on:dragend=move |_| {
                drag_from.set(None);
                over.set(false);
            }
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                over.set(true);
            }
            on:dragleave=move |_| over.set(false)
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                over.set(false);
                if let Some(from) = drag_from.get_untracked() {
                    editor.update(|e| {
                        e.move_action(from, index);
                    });
                }
                drag_from.set(None);
            }
        >
            <span class="action-row__index">{index + 1}</span>
            <span class="action-row__type">{type_label}</span>
            <input
                class="input action-row__name"
                type="text"
                placeholder="干员或干员组"
                prop:value=name
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|e| {
                        e.update_action(&name_id, |a| a.name = non_blank(value).into());
                    });
                }
            />
            {location_label.map(|label| view! { <span class="action-row__location">{label}</span> })}
            {direction_label.map(|label| view! { <span class="action-row__direction">{label}</span> })}
            <input
                class="input action-row__doc"
                type="text"
                placeholder="描述"
                prop:value=doc
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    editor.update(|e| {
                        e.update_action(&doc_id, |a| a.doc = non_blank(value).into());
                    });
                }
            />
            <button
                class="btn btn--ghost btn--small"
                title="删除动作"
                on:click=move |_| {
                    editor.update(|e| {
                        e.remove_action(&id);
                    });
                }
            >
                "✕"
            </button>
        </li>
    }
}

/// Inline form appending a new action to the end of the sequence.
#[component]
fn ActionForm() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let action_type = RwSignal::new(ActionType::Deploy);
    let name = RwSignal::new(String::new());
    let x = RwSignal::new(String::new());
    let y = RwSignal::new(String::new());
    let direction = RwSignal::new(Direction::Right);
    let doc = RwSignal::new(String::new());

    let on_add = move |_| {
        let kind = action_type.get_untracked();
        let location = match (x.get_untracked().trim().parse(), y.get_untracked().trim().parse()) {
            (Ok(x), Ok(y)) => Some((x, y)),
            _ => None,
        };
        let action = Action {
            action_type: Field::Present(kind.as_str().to_owned()),
            name: non_blank(name.get_untracked()).into(),
            location: location.into(),
            direction: kind.has_direction().then(|| direction.get_untracked().as_str().to_owned()).into(),
            doc: non_blank(doc.get_untracked()).into(),
            ..Action::default()
        };
        editor.update(|e| {
            e.add_action(action);
        });
        name.set(String::new());
        doc.set(String::new());
    };

    view! {
        <div class="action-form">
            <select
                class="input"
                on:change=move |ev| {
                    if let Some(kind) = ActionType::find(&event_target_value(&ev)) {
                        action_type.set(kind);
                    }
                }
            >
                {ActionType::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <option value={kind.as_str()} selected=move || action_type.get() == kind>
                                {kind.localized()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <input
                class="input"
                type="text"
                placeholder="干员或干员组"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="input input--narrow"
                type="number"
                placeholder="X"
                prop:value=move || x.get()
                on:input=move |ev| x.set(event_target_value(&ev))
            />
            <input
                class="input input--narrow"
                type="number"
                placeholder="Y"
                prop:value=move || y.get()
                on:input=move |ev| y.set(event_target_value(&ev))
            />
            <Show when=move || action_type.get().has_direction()>
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Some(dir) = Direction::find(&event_target_value(&ev)) {
                            direction.set(dir);
                        }
                    }
                >
                    {Direction::ALL
                        .into_iter()
                        .map(|dir| {
                            view! {
                                <option value={dir.as_str()} selected=move || direction.get() == dir>
                                    {dir.localized()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </Show>
            <input
                class="input"
                type="text"
                placeholder="描述"
                prop:value=move || doc.get()
                on:input=move |ev| doc.set(event_target_value(&ev))
            />
            <button class="btn btn--primary btn--small" on:click=on_add>
                "添加动作"
            </button>
        </div>
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
