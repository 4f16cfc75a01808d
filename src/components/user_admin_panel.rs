//! User Admin Panel Component
//!
//! Administrators manage accounts and per-page permissions here.

use leptos::prelude::*;
use log::info;

use board_core::domain::unique_id;
use board_core::{PagePermission, UserAccount};

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::{now_ms, store_sign_in, store_sign_out, use_app_store, AppStateStoreFields};

#[component]
pub fn UserAdminPanel(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let draft = RwSignal::new(None::<UserAccount>);
    let (error, set_error) = signal(None::<String>);
    let (new_name, set_new_name) = signal(String::new());
    let (new_email, set_new_email) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());

    let users = move || store.users().with(|d| d.users().to_vec());
    let pages = move || {
        store.book().with(|book| {
            book.pages()
                .iter()
                .map(|p| (p.id.clone(), format!("{} · {}", p.page_config.identifier, p.page_config.title)))
                .collect::<Vec<_>>()
        })
    };

    let toggle_permission = move |page_id: String, edit: bool| {
        draft.update(|d| {
            if let Some(user) = d.as_mut() {
                let perm = user.permissions.entry(page_id).or_insert_with(PagePermission::default);
                if edit {
                    perm.can_edit = !perm.can_edit;
                } else {
                    perm.can_view = !perm.can_view;
                }
            }
        });
    };

    let save = move |_: web_sys::MouseEvent| {
        let Some(user) = draft.get_untracked() else {
            return;
        };
        if user.name.trim().is_empty() || user.email.trim().is_empty() {
            set_error.set(Some("Nombre y correo son obligatorios.".to_string()));
            return;
        }
        let is_self = ctx.current_user.with_untracked(|u| u.as_ref().map_or(false, |u| u.id == user.id));
        let user_id = user.id.clone();
        let result = store.users().write().update(user);
        match result {
            Ok(()) => {
                set_error.set(None);
                info!("[APP] Account {} updated", user_id);
                if is_self {
                    let email = store.users().with_untracked(|d| {
                        d.users().iter().find(|u| u.id == user_id).map(|u| u.email.clone())
                    });
                    if let Some(email) = email {
                        store_sign_in(&store, email);
                    }
                }
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let delete = Callback::new(move |_: ()| {
        let Some(user) = draft.get_untracked() else {
            return;
        };
        let is_self = ctx.current_user.with_untracked(|u| u.as_ref().map_or(false, |u| u.id == user.id));
        if store.users().write().remove(&user.id) {
            info!("[APP] Account {} deleted", user.id);
            draft.set(None);
            if is_self {
                store_sign_out(&store);
            }
        }
    });

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (name, email, password) = (new_name.get_untracked(), new_email.get_untracked(), new_password.get_untracked());
        if name.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
            set_error.set(Some("Completa nombre, correo y contrasena.".to_string()));
            return;
        }
        let id = store
            .users()
            .with_untracked(|d| unique_id("user", now_ms(), |candidate| d.users().iter().any(|u| u.id == candidate)));
        let account = UserAccount {
            id,
            name: name.trim().to_string(),
            email,
            password,
            is_admin: false,
            permissions: Default::default(),
        };
        let result = store.users().write().add(account.clone());
        match result {
            Ok(()) => {
                set_new_name.set(String::new());
                set_new_email.set(String::new());
                set_new_password.set(String::new());
                set_error.set(None);
                let stored = store.users().with_untracked(|d| d.users().iter().find(|u| u.id == account.id).cloned());
                draft.set(stored);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal user-admin" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Usuarios y permisos"</h2>
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="user-admin-body">
                    <ul class="user-list">
                        <For
                            each=users
                            key=|u| (u.id.clone(), u.email.clone(), u.is_admin)
                            children=move |user| {
                                let id = user.id.clone();
                                let selected = move || draft.with(|d| d.as_ref().map_or(false, |d| d.id == id));
                                let pick = user.clone();
                                view! {
                                    <li
                                        class=move || if selected() { "user-entry active" } else { "user-entry" }
                                        on:click=move |_| {
                                            set_error.set(None);
                                            draft.set(Some(pick.clone()));
                                        }
                                    >
                                        <span class="user-name">{user.name.clone()}</span>
                                        <span class="user-email">{user.email.clone()}</span>
                                        {user.is_admin.then(|| view! { <span class="admin-badge">"admin"</span> })}
                                    </li>
                                }
                            }
                        />
                    </ul>

                    <Show when=move || draft.with(|d| d.is_some())>
                        <div class="user-editor">
                            <input
                                type="text"
                                placeholder="Nombre"
                                prop:value=move || draft.with(|d| d.as_ref().map(|u| u.name.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| if let Some(u) = d.as_mut() { u.name = value });
                                }
                            />
                            <input
                                type="email"
                                placeholder="Correo"
                                prop:value=move || draft.with(|d| d.as_ref().map(|u| u.email.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| if let Some(u) = d.as_mut() { u.email = value });
                                }
                            />
                            <label class="admin-toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|d| d.as_ref().map_or(false, |u| u.is_admin))
                                    on:change=move |_| draft.update(|d| if let Some(u) = d.as_mut() { u.is_admin = !u.is_admin })
                                />
                                "Administrador"
                            </label>
                            <table class="permission-table">
                                <tr><th>"Pagina"</th><th>"Ver"</th><th>"Editar"</th></tr>
                                {move || pages().into_iter().map(|(page_id, name)| {
                                    let perm = draft.with(|d| {
                                        d.as_ref().and_then(|u| u.permissions.get(&page_id).copied()).unwrap_or_default()
                                    });
                                    let (view_id, edit_id) = (page_id.clone(), page_id);
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=perm.can_view
                                                    on:change=move |_| toggle_permission(view_id.clone(), false)
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=perm.can_edit
                                                    on:change=move |_| toggle_permission(edit_id.clone(), true)
                                                />
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </table>
                            <div class="modal-actions">
                                <DeleteConfirmButton button_class="user-delete-btn" prompt="¿Eliminar usuario?" on_confirm=delete />
                                <button type="button" class="primary" on:click=save>"Guardar"</button>
                            </div>
                        </div>
                    </Show>
                </div>

                <form class="new-user-form" on:submit=add>
                    <h3>"Nuevo usuario"</h3>
                    <input
                        type="text"
                        placeholder="Nombre"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Correo"
                        prop:value=move || new_email.get()
                        on:input=move |ev| set_new_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Contrasena"
                        prop:value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                    />
                    <button type="submit">"Agregar"</button>
                </form>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </div>
        </div>
    }
}
