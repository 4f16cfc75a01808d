//! Change History Components
//!
//! Full ledger panel with a type filter, plus the compact recent-changes
//! widget shown under the board.

use chrono::Local;
use leptos::prelude::*;

use board_core::config::RECENT_CHANGES_LIMIT;
use board_core::{ChangeRecord, ChangeType};

use crate::store::{use_app_store, AppStateStoreFields};

fn detail_line(record: &ChangeRecord) -> Option<String> {
    let d = &record.details;
    let subject = d.item_name.as_deref().or(d.group_name.as_deref());
    let change = match (&d.previous_value, &d.new_value) {
        (Some(prev), Some(next)) => Some(format!("{} → {}", prev, next)),
        (None, Some(next)) => Some(next.clone()),
        (Some(prev), None) => Some(prev.clone()),
        (None, None) => None,
    };
    match (subject, change) {
        (Some(s), Some(c)) => Some(format!("{}: {}", s, c)),
        (Some(s), None) => Some(s.to_string()),
        (None, c) => c,
    }
}

#[component]
fn RecordRow(record: ChangeRecord) -> impl IntoView {
    let detail = detail_line(&record);
    view! {
        <li class=format!("change-row type-{}", record.change_type.as_str())>
            <span class="change-time">{record.formatted_time(&Local)}</span>
            <span class="change-type">{record.change_type.label()}</span>
            <span class="change-action">{record.action.label()}</span>
            <span class="change-description">{record.description.clone()}</span>
            {detail.map(|d| view! { <span class="change-detail">{d}</span> })}
        </li>
    }
}

/// Current page history, filterable by change type
#[component]
pub fn ChangeHistory(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(None::<ChangeType>);

    let records = move || {
        let filter = filter.get();
        store.book().with(|book| {
            book.current()
                .map(|p| p.change_history.filtered(filter).into_iter().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <section class="change-history">
            <div class="change-history-header">
                <h2>"Historial de cambios"</h2>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_filter.set(ChangeType::ALL.into_iter().find(|t| t.as_str() == value));
                }>
                    <option value="all">"Todos"</option>
                    {ChangeType::ALL.into_iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </select>
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            <Show
                when=move || !records().is_empty()
                fallback=|| view! { <p class="change-empty">"Sin cambios registrados"</p> }
            >
                <ul class="change-list">
                    <For
                        each=records
                        key=|r| r.id.clone()
                        children=|record| view! { <RecordRow record=record /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

/// Latest changes overall and latest card changes
#[component]
pub fn RecentChanges() -> impl IntoView {
    let store = use_app_store();

    let latest = move || {
        store.book().with(|book| {
            book.current()
                .map(|p| p.change_history.recent(RECENT_CHANGES_LIMIT).to_vec())
                .unwrap_or_default()
        })
    };
    let latest_items = move || {
        store.book().with(|book| {
            book.current()
                .map(|p| p.change_history.recent_items(RECENT_CHANGES_LIMIT).into_iter().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="recent-changes">
            <div class="recent-block">
                <h3>"Cambios recientes"</h3>
                <ul class="change-list compact">
                    <For each=latest key=|r| r.id.clone() children=|record| view! { <RecordRow record=record /> } />
                </ul>
            </div>
            <div class="recent-block">
                <h3>"Cambios en tarjetas"</h3>
                <ul class="change-list compact">
                    <For each=latest_items key=|r| r.id.clone() children=|record| view! { <RecordRow record=record /> } />
                </ul>
            </div>
        </div>
    }
}
