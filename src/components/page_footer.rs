//! Page Footer Component
//!
//! Platform summary, documentation links and footer metrics of the open page.

use leptos::prelude::*;
use log::warn;

use board_core::domain::{DocumentationLink, FooterMetric, LinkField, MetricColor, MetricField, PageField};

use crate::components::{DeleteConfirmButton, EditableText};
use crate::context::AppContext;
use crate::store::{store_edit_board, use_app_store, AppStateStoreFields};

fn metric_color_label(color: MetricColor) -> &'static str {
    match color {
        MetricColor::Emerald => "Esmeralda",
        MetricColor::Blue => "Azul",
        MetricColor::Purple => "Morado",
        MetricColor::Rose => "Rosa",
        MetricColor::White => "Blanco",
        MetricColor::Amber => "Ambar",
    }
}

fn open_in_new_tab(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(href, "_blank", "noopener,noreferrer") {
        warn!("[APP] Could not open {}: {:?}", href, e);
    }
}

#[component]
fn LinkCard(link: DocumentationLink) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let can_edit = ctx.can_edit_signal();

    let save = {
        let id = link.id.clone();
        move |field: LinkField| {
            let id = id.clone();
            Callback::new(move |value: String| {
                store_edit_board(&store, &ctx.gate(), |editor| editor.update_documentation_link(&id, field, value));
            })
        }
    };
    let delete = {
        let id = link.id.clone();
        Callback::new(move |_: ()| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.delete_documentation_link(&id));
        })
    };
    let save_date = save(LinkField::Date);
    let href = link.href();
    let has_href = href.is_some();

    view! {
        <div class="doc-link">
            <EditableText value=link.title.clone() on_save=save(LinkField::Title) editable=can_edit class="doc-title" placeholder="Titulo" />
            <EditableText
                value=link.description.clone()
                on_save=save(LinkField::Description)
                editable=can_edit
                multiline=true
                class="doc-description"
                placeholder="Descripcion"
            />
            <div class="doc-url-row">
                <button
                    type="button"
                    class="doc-open-btn"
                    disabled=!has_href
                    on:click=move |_| {
                        if let Some(href) = href.as_deref() {
                            open_in_new_tab(href);
                        }
                    }
                >
                    "Abrir"
                </button>
                <EditableText value=link.url.clone() on_save=save(LinkField::Url) editable=can_edit class="doc-url" placeholder="https://" />
            </div>
            <input
                type="date"
                class="doc-date"
                prop:value=link.date.clone().unwrap_or_default()
                disabled=move || !can_edit.get()
                on:change=move |ev| save_date.run(event_target_value(&ev))
            />
            <Show when=move || can_edit.get()>
                <DeleteConfirmButton button_class="doc-delete-btn" on_confirm=delete />
            </Show>
        </div>
    }
}

#[component]
fn MetricCell(metric: FooterMetric) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let can_edit = ctx.can_edit_signal();
    let (picking, set_picking) = signal(false);
    let color = metric.color;

    let save = {
        let id = metric.id.clone();
        move |field: MetricField| {
            let id = id.clone();
            Callback::new(move |value: String| {
                store_edit_board(&store, &ctx.gate(), |editor| editor.update_metric(&id, field, value));
            })
        }
    };
    let recolor = {
        let id = metric.id.clone();
        move |next: MetricColor| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.update_metric_color(&id, next));
            set_picking.set(false);
        }
    };
    let delete = {
        let id = metric.id.clone();
        Callback::new(move |_: ()| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.delete_metric(&id));
        })
    };

    view! {
        <div class="metric">
            <EditableText value=metric.label.clone() on_save=save(MetricField::Label) editable=can_edit class="metric-label" />
            <EditableText
                value=metric.value.clone()
                on_save=save(MetricField::Value)
                editable=can_edit
                class=format!("metric-value metric-{}", color.as_str())
            />
            <Show when=move || can_edit.get()>
                <button type="button" class="metric-color-btn" title="Color" on:click=move |_| set_picking.update(|v| *v = !*v)>
                    "🎨"
                </button>
                <DeleteConfirmButton button_class="metric-delete-btn" on_confirm=delete />
            </Show>
            <Show when=move || picking.get()>
                <div class="color-picker">
                    {MetricColor::ALL.into_iter().map(|option| {
                        let recolor = recolor.clone();
                        view! {
                            <button
                                type="button"
                                class=format!("color-swatch metric-{}", option.as_str())
                                title=metric_color_label(option)
                                on:click=move |_| recolor(option)
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn PageFooter() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let can_edit = ctx.can_edit_signal();

    let config_field = move |field: PageField| {
        Signal::derive(move || {
            store
                .book()
                .with(|book| book.current().map(|p| p.page_config.field(field).to_string()).unwrap_or_default())
        })
    };
    let save_field = move |field: PageField| {
        Callback::new(move |value: String| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.update_page_config(field, value));
        })
    };
    let links = move || {
        store
            .book()
            .with(|book| book.current().map(|p| p.documentation_links.clone()).unwrap_or_default())
    };
    let metrics = move || {
        store
            .book()
            .with(|book| book.current().map(|p| p.footer_metrics.clone()).unwrap_or_default())
    };
    let add_link = move |_: web_sys::MouseEvent| {
        store_edit_board(&store, &ctx.gate(), |editor| editor.add_documentation_link());
    };
    let add_metric = move |_: web_sys::MouseEvent| {
        store_edit_board(&store, &ctx.gate(), |editor| editor.add_metric());
    };
    let button_label = config_field(PageField::FooterButtonLabel);
    let open_footer_url = move |_: web_sys::MouseEvent| {
        let url = config_field(PageField::FooterUrl).get_untracked();
        let link = DocumentationLink { url, ..DocumentationLink::default() };
        if let Some(href) = link.href() {
            open_in_new_tab(&href);
        }
    };

    view! {
        <footer class="page-footer">
            <div class="footer-summary">
                <EditableText value=config_field(PageField::FooterTitle) on_save=save_field(PageField::FooterTitle) editable=can_edit class="footer-title" placeholder="Sistema" />
                <EditableText
                    value=config_field(PageField::FooterDescription)
                    on_save=save_field(PageField::FooterDescription)
                    editable=can_edit
                    multiline=true
                    class="footer-description"
                />
                <div class="footer-meta">
                    <EditableText value=config_field(PageField::FooterVersion) on_save=save_field(PageField::FooterVersion) editable=can_edit class="footer-version" />
                    <button type="button" class="footer-doc-btn" on:click=open_footer_url>
                        {move || button_label.get()}
                    </button>
                    <Show when=move || can_edit.get()>
                        <EditableText value=config_field(PageField::FooterButtonLabel) on_save=save_field(PageField::FooterButtonLabel) editable=can_edit class="footer-button-label" />
                        <EditableText value=config_field(PageField::FooterUrl) on_save=save_field(PageField::FooterUrl) editable=can_edit class="footer-url" placeholder="https://" />
                    </Show>
                </div>
            </div>

            <section class="doc-links">
                <h3>"Documentacion"</h3>
                <Show
                    when=move || !links().is_empty()
                    fallback=|| view! { <p class="doc-empty">"Sin documentacion"</p> }
                >
                    <For
                        each=links
                        key=|l| (l.id.clone(), l.title.clone(), l.description.clone(), l.url.clone(), l.date.clone())
                        children=|link| view! { <LinkCard link=link /> }
                    />
                </Show>
                <Show when=move || can_edit.get()>
                    <button type="button" class="add-doc-btn" on:click=add_link>"+ Agregar documento"</button>
                </Show>
            </section>

            <section class="footer-metrics">
                <For
                    each=metrics
                    key=|m| (m.id.clone(), m.label.clone(), m.value.clone(), m.color)
                    children=|metric| view! { <MetricCell metric=metric /> }
                />
                <Show when=move || can_edit.get()>
                    <button type="button" class="add-metric-btn" on:click=add_metric>"+ Metrica"</button>
                </Show>
            </section>
        </footer>
    }
}
