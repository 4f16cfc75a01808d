//! Repository Integration Tests
//!
//! Tests for the repositories over an in-memory snapshot store.

#[cfg(test)]
mod tests {
    use crate::access::{PagePermission, UserAccount, UserDirectory};
    use crate::board::BoardEditor;
    use crate::config::{CURRENT_PAGE_KEY, PAGES_KEY, SESSION_KEY, USERS_KEY};
    use crate::dnd::{Bounds, DndController, DragKind, Gesture, PointerOrigin};
    use crate::domain::{ItemKind, MetricColor, MetricField, TailwindColor};
    use crate::ledger::ChangeType;
    use crate::repository::{
        MemoryStore, PageRepository, PreferenceRepository, RepositoryError, SnapshotStore, UserRepository,
    };
    use std::collections::HashMap;

    const STORED_PAGES: &str = r#"[
      {
        "id": "page-1",
        "pageConfig": {"identifier": "O2T-STRATEGY-2026", "title": "2026 Ruta", "description": "d",
                       "footerTitle": "SIDON-AXESS"},
        "columns": [
          {"id": "citas", "title": "CITAS", "description": "Agenda", "color": "blue",
           "items": [
             {"id": "h1", "label": "Fase 1", "type": "section-header"},
             {"id": "c1", "label": "Reservas", "type": "leaf", "status": "endev", "date": "2026-01-15"},
             {"id": "c2", "label": "Docs", "type": "external", "status": "productivo"}
           ],
           "statusCategories": [{"id": "qa", "label": "QA", "color": "teal"}]}
        ],
        "footerMetrics": [],
        "connections": [],
        "changeHistory": [
          {"id": "change-1", "timestamp": 1768467900000, "type": "status", "action": "updated",
           "description": "Estado cambiado", "details": {"itemName": "Reservas", "previousValue": "Productivo"}}
        ],
        "createdAt": 1768000000000
      }
    ]"#;

    const STORED_FULL_PAGE: &str = r#"[
      {
        "id": "p1",
        "pageConfig": {"identifier": "plantilla", "title": "T", "description": "d",
                       "footerTitle": "SIDON-AXESS", "footerDescription": "Base",
                       "footerVersion": "v2.4.0 Stable", "footerButtonLabel": "Ver Documentación",
                       "footerUrl": "https://docs.google.com"},
        "columns": [
          {"id": "citas", "title": "CITAS", "description": "", "color": "blue",
           "footerText": "Soporte 24/7",
           "items": [
             {"id": "c1", "label": "INTER", "type": "leaf", "status": "productivo", "hasIcon": "refresh"},
             {"id": "c2", "label": "Portal", "type": "external", "isExternalLink": true}
           ],
           "statusCategories": []}
        ],
        "documentationLinks": [
          {"id": "doc-1", "title": "Manual", "description": "Guia", "url": "docs.example.com", "date": "2026-01-10"}
        ],
        "footerMetrics": [{"id": "m1", "label": "UPTIME", "value": "99.9%", "color": "emerald"}],
        "connections": [
          {"id": "k1", "fromItemId": "c1", "fromColumnId": "citas", "toItemId": "c2",
           "toColumnId": "citas", "type": "integration"}
        ],
        "changeHistory": [],
        "createdAt": 1
      }
    ]"#;

    fn setup_store() -> MemoryStore {
        MemoryStore::new()
    }

    #[test]
    fn test_load_empty_store() {
        let store = setup_store();
        let repo = PageRepository::new(&store);
        assert_eq!(repo.load(), Ok(None));

        let book = repo.load_or_seed(5);
        assert_eq!(book.pages().len(), 1);
        assert_eq!(book.current().unwrap().page_config.identifier, "plantilla");
    }

    #[test]
    fn test_load_stored_browser_snapshot() {
        let store = setup_store();
        store.write(PAGES_KEY, STORED_PAGES).unwrap();
        store.write(CURRENT_PAGE_KEY, "page-1").unwrap();

        let book = PageRepository::new(&store).load().unwrap().expect("snapshot present");
        let page = book.current().expect("page selected");
        assert_eq!(page.page_config.identifier, "plantilla");
        assert_eq!(page.change_history.len(), 1);
        assert_eq!(page.change_history.records()[0].change_type, ChangeType::Status);

        let col = &page.columns.as_slice()[0];
        assert_eq!(col.items[0].kind, ItemKind::SectionHeader);
        assert_eq!(col.items[2].kind, ItemKind::External);
        assert_eq!(col.items[1].date.as_deref(), Some("2026-01-15"));
        // unknown palette entries degrade, missing defaults are backfilled
        assert_eq!(col.status_categories[0].color, TailwindColor::Slate);
        assert_eq!(col.status_categories.len(), 6);
    }

    #[test]
    fn test_load_save_keeps_footer_sections() {
        let store = setup_store();
        store.write(PAGES_KEY, STORED_FULL_PAGE).unwrap();
        let repo = PageRepository::new(&store);
        let book = repo.load().unwrap().unwrap();
        repo.save(&book).unwrap();

        let saved = store.read(PAGES_KEY).unwrap().unwrap();
        for key in [
            "\"documentationLinks\"",
            "\"footerMetrics\"",
            "\"connections\"",
            "\"footerTitle\":\"SIDON-AXESS\"",
            "\"footerUrl\":\"https://docs.google.com\"",
            "\"footerText\":\"Soporte 24/7\"",
            "\"hasIcon\":\"refresh\"",
            "\"isExternalLink\":true",
            "\"type\":\"integration\"",
        ] {
            assert!(saved.contains(key), "{} lost on save: {}", key, saved);
        }

        let page = repo.load().unwrap().unwrap().current().unwrap().clone();
        assert_eq!(page.documentation_links[0].date.as_deref(), Some("2026-01-10"));
        assert_eq!(page.documentation_links[0].href().as_deref(), Some("https://docs.example.com"));
        assert_eq!(page.footer_metrics[0].color, MetricColor::Emerald);
        assert_eq!(page.connections.len(), 1);
        assert_eq!(page.page_config.footer_version, "v2.4.0 Stable");
        let citas = page.columns.column("citas").unwrap();
        assert_eq!(citas.footer_text.as_deref(), Some("Soporte 24/7"));
        assert!(citas.item("c2").unwrap().is_external_link);
    }

    #[test]
    fn test_metric_edit_survives_reload() {
        let store = setup_store();
        store.write(PAGES_KEY, STORED_FULL_PAGE).unwrap();
        let repo = PageRepository::new(&store);
        let mut book = repo.load().unwrap().unwrap();
        {
            let page = book.current_mut().unwrap();
            let mut editor = BoardEditor::new(page, &true, 30);
            assert!(editor.update_metric("m1", MetricField::Value, "98%".to_string()));
        }
        repo.save(&book).unwrap();

        let page = repo.load().unwrap().unwrap().current().unwrap().clone();
        assert_eq!(page.footer_metrics[0].value, "98%");
        assert_eq!(page.change_history.records()[0].change_type, ChangeType::Metric);
    }

    #[test]
    fn test_corrupt_pages_fall_back_to_seed() {
        let store = setup_store();
        store.write(PAGES_KEY, "{not json").unwrap();
        let repo = PageRepository::new(&store);
        assert!(matches!(repo.load(), Err(RepositoryError::Decode { .. })));
        assert_eq!(repo.load_or_seed(1).pages().len(), 1);
    }

    #[test]
    fn test_save_then_load_keeps_edits_and_reorders() {
        let store = setup_store();
        let repo = PageRepository::new(&store);
        let mut book = repo.load_or_seed(10);

        let page = book.current_mut().unwrap();
        let first_col = page.columns.as_slice()[0].id.clone();
        let second_col = page.columns.as_slice()[1].id.clone();
        let new_item = BoardEditor::new(page, &true, 20).add_item(&first_col).unwrap();

        let mut dnd = DndController::new();
        dnd.begin_drag(Gesture::column(second_col.clone()), PointerOrigin::handle(), &true);
        dnd.hover(&first_col, DragKind::Column, 0.0, Bounds::default(), page.columns.as_slice());
        assert!(dnd.drop_on(&first_col, DragKind::Column, &mut page.columns, &true).is_committed());

        repo.save(&book).unwrap();
        let reloaded = repo.load().unwrap().unwrap();
        let page = reloaded.current().unwrap();
        assert_eq!(page.columns.as_slice()[0].id, second_col);
        assert!(page.columns.column(&first_col).unwrap().contains(&new_item));
        assert_eq!(page.change_history.len(), 1);
        assert_eq!(store.read(CURRENT_PAGE_KEY).unwrap().as_deref(), book.current_id());
    }

    #[test]
    fn test_save_empty_book_clears_selection() {
        let store = setup_store();
        let repo = PageRepository::new(&store);
        let mut book = repo.load_or_seed(1);
        repo.save(&book).unwrap();
        let only = book.current_id().unwrap().to_string();
        book.delete_page(&only, true).unwrap();
        repo.save(&book).unwrap();
        assert_eq!(store.read(CURRENT_PAGE_KEY).unwrap(), None);
        assert_eq!(store.read(PAGES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_users_seed_admin() {
        let store = setup_store();
        let repo = UserRepository::new(&store);
        let directory = repo.load();
        assert_eq!(directory, UserDirectory::default());
        assert!(directory.authenticate("admin@estratega.com", "admin123").is_ok());

        store.write(USERS_KEY, "[]").unwrap();
        assert_eq!(repo.load().users().len(), 1);
    }

    #[test]
    fn test_users_round_trip_with_permissions() {
        let store = setup_store();
        let repo = UserRepository::new(&store);
        let mut directory = repo.load();
        let mut permissions = HashMap::new();
        permissions.insert("page-1".to_string(), PagePermission { can_view: true, can_edit: false });
        directory
            .add(UserAccount {
                id: "u2".to_string(),
                name: "Luis".to_string(),
                email: "Luis@Example.com".to_string(),
                password: "clave123".to_string(),
                is_admin: false,
                permissions,
            })
            .unwrap();
        repo.save(&directory).unwrap();

        let raw = store.read(USERS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"isAdmin\":false"));
        assert!(raw.contains("\"canView\":true"));

        let loaded = repo.load();
        let luis = loaded.find_by_email("luis@example.com").unwrap();
        assert!(!luis.permission_for(Some("page-1")).can_edit);
    }

    #[test]
    fn test_session_key() {
        let store = setup_store();
        let repo = UserRepository::new(&store);
        assert_eq!(repo.load_session(), Ok(None));
        repo.save_session("admin@estratega.com").unwrap();
        assert_eq!(store.read(SESSION_KEY).unwrap().as_deref(), Some("admin@estratega.com"));
        assert_eq!(repo.load_session().unwrap().as_deref(), Some("admin@estratega.com"));
        repo.clear_session().unwrap();
        assert_eq!(repo.load_session(), Ok(None));
    }

    #[test]
    fn test_sidebar_preference() {
        let store = setup_store();
        let repo = PreferenceRepository::new(&store);
        assert!(!repo.sidebar_collapsed());
        repo.set_sidebar_collapsed(true).unwrap();
        assert!(repo.sidebar_collapsed());
        store.write(crate::config::SIDEBAR_KEY, "maybe").unwrap();
        assert!(!repo.sidebar_collapsed());
    }
}
