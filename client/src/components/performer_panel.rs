//! Assigned operators and operator groups.
//!
//! Direct operators can be reordered by dragging them onto each other and
//! moved into a group by dropping them on the group card. Group members are
//! dragged back out by dropping them on the operator list.

use copilot::{Field, Operator, TransientId};
use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::toast::{Intent, ToastState};
use crate::util::reorder::begin_drag;

/// Highest skill slot an operator can have.
const MAX_SKILL: u32 = 3;

/// What is currently being dragged inside the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Dragged {
    Operator(TransientId),
    Member { group: TransientId, operator: TransientId },
}

#[component]
pub fn PerformerPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let dragged = RwSignal::new(None::<Dragged>);
    let group_name = RwSignal::new(String::new());

    let on_add_group = move || {
        let name = group_name.get_untracked();
        let mut added = None;
        editor.update(|e| added = e.add_group(&name));
        if added.is_some() {
            group_name.set(String::new());
        } else {
            toasts.update(|t| {
                t.show(format!("无法创建干员组「{}」", name.trim()), Intent::Warning);
            });
        }
    };

    let on_drop_to_list = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if let Some(Dragged::Member { group, operator }) = dragged.get_untracked() {
            editor.update(|e| {
                e.move_operator_out_of_group(&group, &operator);
            });
        }
        dragged.set(None);
    };

    view! {
        <section class="performer-panel">
            <h3 class="panel__title">
                "干员"
                <span class="panel__count">{move || editor.with(|e| e.operators().len())}</span>
            </h3>
            <ul
                class="performer-panel__operators"
                on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                on:drop=on_drop_to_list
            >
                {move || {
                    editor
                        .with(|e| e.operators().to_vec())
                        .into_iter()
                        .enumerate()
                        .map(|(index, operator)| view! { <OperatorRow index=index operator=operator dragged=dragged/> })
                        .collect::<Vec<_>>()
                }}
            </ul>

            <h3 class="panel__title">
                "干员组"
                <span class="panel__count">{move || editor.with(|e| e.groups().len())}</span>
            </h3>
            <div class="performer-panel__new-group">
                <input
                    class="input"
                    type="text"
                    placeholder="干员组名称"
                    prop:value=move || group_name.get()
                    on:input=move |ev| group_name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_add_group();
                        }
                    }
                />
                <button
                    class="btn btn--small"
                    disabled=move || group_name.with(|n| n.trim().is_empty())
                    on:click=move |_| on_add_group()
                >
                    "添加"
                </button>
            </div>
            <div class="performer-panel__groups">
                {move || {
                    editor
                        .with(|e| e.groups().to_vec())
                        .into_iter()
                        .filter_map(|group| {
                            let group_id = group.id?;
                            let members = group.opers.into_option().unwrap_or_default();
                            Some(view! { <GroupCard group_id=group_id name=group.name members=members dragged=dragged/> })
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

/// A directly assigned operator with its skill selector.
#[component]
fn OperatorRow(index: usize, operator: Operator, dragged: RwSignal<Option<Dragged>>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let Some(id) = operator.id.clone() else {
        return ().into_any();
    };
    let drag_id = id.clone();
    let skill = operator.skill.as_ref().copied().unwrap_or(1);
    let skill_operator = operator.clone();

    view! {
        <li
            class="performer-row"
            draggable="true"
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                begin_drag(&ev, drag_id.as_str());
                dragged.set(Some(Dragged::Operator(drag_id.clone())));
            }
            on:dragend=move |_| dragged.set(None)
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                let Some(Dragged::Operator(source)) = dragged.get_untracked() else {
                    return;
                };
                ev.prevent_default();
                ev.stop_propagation();
                editor.update(|e| {
                    if let Some(from) = e.operators().iter().position(|op| op.id.as_ref() == Some(&source)) {
                        e.move_operator(from, index);
                    }
                });
                dragged.set(None);
            }
        >
            <span class="performer-row__handle" aria-hidden="true">"⠿"</span>
            <span class="performer-row__name">{operator.name}</span>
            <select
                class="performer-row__skill"
                title="技能"
                on:change=move |ev| {
                    let Ok(skill) = event_target_value(&ev).parse::<u32>() else {
                        return;
                    };
                    let mut updated = skill_operator.clone();
                    updated.skill = Field::Present(skill);
                    editor.update(|e| {
                        e.upsert_operator(updated);
                    });
                }
            >
                {(1..=MAX_SKILL)
                    .map(|slot| {
                        view! {
                            <option value={slot.to_string()} selected={slot == skill}>
                                {format!("{slot} 技能")}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <button
                class="btn btn--ghost btn--small"
                title="移除"
                on:click=move |_| {
                    editor.update(|e| {
                        e.remove_operator(&id);
                    });
                }
            >
                "✕"
            </button>
        </li>
    }
    .into_any()
}

/// A group card; dropping a direct operator here moves it into the group.
#[component]
fn GroupCard(
    group_id: TransientId,
    name: String,
    members: Vec<Operator>,
    dragged: RwSignal<Option<Dragged>>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let drop_group = group_id.clone();
    let remove_group = group_id.clone();
    let hovering = RwSignal::new(false);

    view! {
        <div
            class="group-card"
            class:group-card--drop-target=move || hovering.get()
            on:dragover=move |ev: leptos::ev::DragEvent| {
                if matches!(dragged.get_untracked(), Some(Dragged::Operator(_))) {
                    ev.prevent_default();
                    hovering.set(true);
                }
            }
            on:dragleave=move |_| hovering.set(false)
            on:drop=move |ev: leptos::ev::DragEvent| {
                hovering.set(false);
                let Some(Dragged::Operator(operator)) = dragged.get_untracked() else {
                    return;
                };
                ev.prevent_default();
                ev.stop_propagation();
                editor.update(|e| {
                    e.move_operator_to_group(&operator, &drop_group);
                });
                dragged.set(None);
            }
        >
            <header class="group-card__header">
                <span class="group-card__name">{name}</span>
                <button
                    class="btn btn--ghost btn--small"
                    title="删除干员组"
                    on:click=move |_| {
                        editor.update(|e| {
                            e.remove_group(&remove_group);
                        });
                    }
                >
                    "✕"
                </button>
            </header>
            <Show when={
                let empty = members.is_empty();
                move || empty
            }>
                <p class="group-card__empty">"拖动干员到此处"</p>
            </Show>
            <ul class="group-card__members">
                {members
                    .into_iter()
                    .filter_map(|member| {
                        let member_id = member.id?;
                        let group = group_id.clone();
                        let drag_group = group_id.clone();
                        let drag_member = member_id.clone();
                        Some(view! {
                            <li
                                class="group-card__member"
                                draggable="true"
                                on:dragstart=move |ev: leptos::ev::DragEvent| {
                                    begin_drag(&ev, drag_member.as_str());
                                    dragged.set(Some(Dragged::Member {
                                        group: drag_group.clone(),
                                        operator: drag_member.clone(),
                                    }));
                                }
                                on:dragend=move |_| dragged.set(None)
                            >
                                <span class="group-card__member-name">{member.name}</span>
                                <button
                                    class="btn btn--ghost btn--small"
                                    title="移出干员组"
                                    on:click=move |_| {
                                        editor.update(|e| {
                                            e.move_operator_out_of_group(&group, &member_id);
                                        });
                                    }
                                >
                                    "↩"
                                </button>
                            </li>
                        })
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
