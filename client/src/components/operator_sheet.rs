//! Operator picker grid.
//!
//! DESIGN
//! ======
//! Profession tabs on the left, sub-profession chips along the top, and a
//! paged grid of operator cells. Every click goes through
//! [`crate::state::operator_sheet::toggle`]; a cell whose operator sits in a
//! group is not toggled and raises a warning toast instead.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::operator_sheet::{
    self as sheet, GROUPED_CONFLICT_MESSAGE, OperatorSheetState, ProfFilter, SheetEntry, ToggleOutcome,
};
use crate::state::toast::{Intent, ToastState};

#[component]
pub fn OperatorSheet() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let sheet_state = expect_context::<RwSignal<OperatorSheetState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let grid_ref = NodeRef::<leptos::html::Div>::new();

    let filtered = Memo::new(move |_| {
        let filter = sheet_state.get();
        editor.with(|e| filter.filtered(&e.operation))
    });
    let total = move || filtered.with(Vec::len);

    let on_toggle = Callback::new(move |name: String| {
        let mut outcome = ToggleOutcome::Added;
        editor.update(|e| outcome = sheet::toggle(e, &name));
        if outcome == ToggleOutcome::BlockedByGroup {
            toasts.update(|t| {
                t.show(GROUPED_CONFLICT_MESSAGE, Intent::Danger);
            });
        }
    });

    let on_select_all = move |_| {
        let entries = filtered.get_untracked();
        editor.update(|e| {
            sheet::select_all(e, &entries);
        });
    };
    let on_cancel_all = move |_| {
        let entries = filtered.get_untracked();
        editor.update(|e| {
            sheet::cancel_all(e, &entries);
        });
    };
    let on_back_to_top = move |_| {
        sheet_state.update(OperatorSheetState::reset_pagination);
        scroll_to_top(grid_ref);
    };

    view! {
        <section class="operator-sheet">
            <nav class="operator-sheet__profs">
                {ProfFilter::options()
                    .into_iter()
                    .map(|prof| {
                        view! {
                            <button
                                class="operator-sheet__prof"
                                class:operator-sheet__prof--active=move || sheet_state.with(|s| s.prof() == prof)
                                data-prof={prof.id()}
                                on:click=move |_| {
                                    sheet_state.update(|s| s.select_prof(prof));
                                    scroll_to_top(grid_ref);
                                }
                            >
                                {prof.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="operator-sheet__body">
                <header class="operator-sheet__toolbar">
                    <div class="operator-sheet__subs">
                        {move || {
                            sheet_state
                                .with(OperatorSheetState::sub_prof_options)
                                .into_iter()
                                .map(|sub| {
                                    view! {
                                        <button
                                            class="chip"
                                            class:chip--active=move || sheet_state.with(|s| s.sub_prof() == sub)
                                            on:click=move |_| sheet_state.update(|s| s.select_sub_prof(sub))
                                        >
                                            {sub.label()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="operator-sheet__bulk">
                        <button
                            class="btn btn--small"
                            disabled=move || filtered.with(|entries| editor.with(|e| !sheet::can_select_all(&e.operation, entries)))
                            on:click=on_select_all
                        >
                            "全选"
                        </button>
                        <button
                            class="btn btn--small"
                            disabled=move || filtered.with(|entries| editor.with(|e| !sheet::can_cancel_all(&e.operation, entries)))
                            on:click=on_cancel_all
                        >
                            "清空"
                        </button>
                    </div>
                </header>
                <div class="operator-sheet__grid" node_ref=grid_ref>
                    <Show
                        when=move || { total() > 0 }
                        fallback=|| view! { <p class="operator-sheet__empty">"暂无干员"</p> }
                    >
                        {move || {
                            let shown = sheet_state.with(|s| s.visible_count(total()));
                            filtered
                                .get()
                                .into_iter()
                                .take(shown)
                                .map(|entry| view! { <OperatorCell entry=entry on_toggle=on_toggle/> })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
                <footer class="operator-sheet__footer">
                    <Show when=move || { sheet_state.with(|s| s.remaining(total()) > 0) }>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| {
                                let total = total();
                                sheet_state.update(|s| {
                                    s.show_more(total);
                                });
                            }
                        >
                            {move || format!("显示更多 ({})", sheet_state.with(|s| s.remaining(total())))}
                        </button>
                    </Show>
                    <Show when=move || sheet_state.with(OperatorSheetState::can_go_back_to_top)>
                        <button class="btn btn--ghost" on:click=on_back_to_top>
                            "回到顶部"
                        </button>
                    </Show>
                </footer>
            </div>
        </section>
    }
}

/// One operator cell; highlighted while the operator is assigned.
#[component]
fn OperatorCell(entry: SheetEntry, on_toggle: Callback<String>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let custom = entry.is_custom();
    let name = entry.name;
    let selected = {
        let name = name.clone();
        move || editor.with(|e| sheet::is_selected(&e.operation, &name))
    };
    let grouped = {
        let name = name.clone();
        move || editor.with(|e| e.operation.has_grouped_operator(&name))
    };
    let click_name = name.clone();
    let title = name.clone();

    view! {
        <button
            class="operator-cell"
            class:operator-cell--selected=selected
            class:operator-cell--grouped=grouped
            class:operator-cell--custom=custom
            title=title
            on:click=move |_| on_toggle.run(click_name.clone())
        >
            <span class="operator-cell__name">{name}</span>
        </button>
    }
}

fn scroll_to_top(grid_ref: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "csr")]
    {
        if let Some(grid) = grid_ref.get_untracked() {
            grid.set_scroll_top(0);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = grid_ref;
    }
}
