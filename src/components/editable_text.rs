//! Editable Text Component
//!
//! Click-to-edit text. Commits on Enter or blur, Escape cancels.

use leptos::prelude::*;

#[component]
pub fn EditableText(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] editable: Signal<bool>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let begin = move |ev: web_sys::MouseEvent| {
        if !editable.get_untracked() {
            return;
        }
        ev.stop_propagation();
        set_draft.set(value.get_untracked());
        set_editing.set(true);
    };

    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let next = draft.get_untracked();
        if next != value.get_untracked() {
            on_save.run(next);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" if !multiline || ev.ctrl_key() => {
            ev.prevent_default();
            commit();
        }
        "Escape" => set_editing.set(false),
        _ => {}
    };

    let display_class = {
        let class = class.clone();
        move || {
            let mut c = format!("editable-text {}", class);
            if editable.get() {
                c.push_str(" editable");
            }
            if value.with(|v| v.is_empty()) {
                c.push_str(" placeholder");
            }
            c
        }
    };
    let shown_placeholder = placeholder.clone();

    view! {
        <Show
            when=move || editing.get()
            fallback=move || {
                let placeholder = shown_placeholder.clone();
                view! {
                    <span class=display_class.clone() on:click=begin>
                        {move || {
                            let v = value.get();
                            if v.is_empty() { placeholder.clone() } else { v }
                        }}
                    </span>
                }
            }
        >
            {if multiline {
                view! {
                    <textarea
                        class="editable-input"
                        placeholder=placeholder.clone()
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        on:blur=move |_| commit()
                        on:mousedown=|ev| ev.stop_propagation()
                        autofocus
                    />
                }.into_any()
            } else {
                view! {
                    <input
                        type="text"
                        class="editable-input"
                        placeholder=placeholder.clone()
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        on:blur=move |_| commit()
                        on:mousedown=|ev| ev.stop_propagation()
                        autofocus
                    />
                }.into_any()
            }}
        </Show>
    }
}
