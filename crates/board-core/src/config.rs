//! Board Configuration
//!
//! Storage keys, seeded defaults and limits shared by the UI and the core.

/// Key holding every page snapshot (columns + change history)
pub const PAGES_KEY: &str = "allPages";
/// Key holding the id of the page that was open last
pub const CURRENT_PAGE_KEY: &str = "currentPageId";
/// Key holding the local account list
pub const USERS_KEY: &str = "users";
/// Key holding the email of the signed-in account
pub const SESSION_KEY: &str = "authUser";
/// Key holding the sidebar collapsed flag
pub const SIDEBAR_KEY: &str = "sidebarCollapsed";

/// The first page is always the template other pages are copied from
pub const TEMPLATE_IDENTIFIER: &str = "plantilla";
pub const TEMPLATE_TITLE: &str = "PLANTILLA";

/// Minimum accepted password length at sign-in
pub const MIN_PASSWORD_LEN: usize = 6;

/// Seeded administrator, used when no account list has been stored yet
pub const ADMIN_ID: &str = "admin";
pub const ADMIN_NAME: &str = "Administrador";
pub const ADMIN_EMAIL: &str = "admin@estratega.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Entries shown by the compact "recent changes" widgets
pub const RECENT_CHANGES_LIMIT: usize = 5;

/// Labels given to freshly created board entries
pub const NEW_COLUMN_TITLE: &str = "NUEVO GRUPO";
pub const NEW_COLUMN_DESCRIPTION: &str = "Descripción del nuevo grupo";
pub const NEW_ITEM_LABEL: &str = "Nuevo Item";
pub const NEW_SECTION_LABEL: &str = "Nueva Sección";
pub const NEW_STATUS_LABEL: &str = "Nuevo Estado";
pub const NEW_PAGE_DESCRIPTION: &str = "Nueva página basada en la plantilla";

/// Footer of the seeded template page: title, description, version, button label, url
pub const TEMPLATE_FOOTER: [&str; 5] = [
    "SIDON-AXESS",
    "Plataforma base transversal que orquesta la autenticación, seguridad y componentes comunes para todos los módulos (Citas, POA, Axess) y entornos Multitenant.",
    "v2.4.0 Stable",
    "Ver Documentación",
    "https://docs.google.com",
];
/// Footer given to pages created from the template
pub const NEW_PAGE_FOOTER: [&str; 5] = [
    "Nuevo Sistema",
    "Descripción del nuevo sistema",
    "v1.0.0",
    "Ver Documentación",
    "https://docs.google.com",
];
pub const NEW_METRIC_LABEL: &str = "NUEVA METRICA";
pub const NEW_METRIC_VALUE: &str = "Valor";

/// Status id used when a column has no categories at all
pub const FALLBACK_STATUS: &str = "productivo";

/// Display value for an empty item date in change records
pub const NO_DATE_LABEL: &str = "sin fecha";
