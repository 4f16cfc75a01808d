//! Seed Board
//!
//! Columns and footer metrics used when no template page exists yet.

use super::column::{Column, ColumnColor};
use super::footer::{FooterMetric, MetricColor};
use super::item::Item;
use super::status::default_categories;

fn column(id: &str, title: &str, description: &str, color: ColumnColor, items: Vec<Item>) -> Column {
    Column {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        color,
        items,
        status_categories: default_categories(),
        footer_text: None,
    }
}

/// Initial board for a fresh installation
pub fn initial_columns() -> Vec<Column> {
    vec![
        column(
            "citas",
            "CITAS",
            "Gestión y Agendamiento",
            ColumnColor::Blue,
            vec![
                Item::section_header("h1", "Módulos Principales"),
                Item::leaf("c1", "INTER", "productivo").with_description("Sincronización de datos").with_icon("refresh"),
                Item::leaf("c2", "BAFAR EL PASO", "productivo").with_description("Operación transfronteriza"),
                Item::leaf("c3", "LOS ENCINOS", "productivo").with_description("Gestión local"),
            ],
        ),
        column(
            "axess",
            "AXESS",
            "Control de Accesos & Panel",
            ColumnColor::Purple,
            vec![
                Item::section_header("h2", "Plantas y Sitios"),
                Item::leaf("a1", "MINA LOS GATOS", "upgrade").with_description("Upgrade de infraestructura").with_icon("bulb"),
                Item::leaf("a2", "BAFAR PLANTA", "productivo").with_description("Control de costos activo").with_icon("dollar"),
                Item::leaf("a3", "QUESERA", "productivo"),
                Item::leaf("a4", "NOGALERA", "productivo"),
            ],
        ),
        column(
            "poa",
            "POA",
            "Plan Operativo",
            ColumnColor::Orange,
            vec![
                Item::section_header("h3", "Proyectos Activos"),
                Item::leaf("p1", "TERGIA", "productivo").with_description("Gestión financiera").with_icon("dollar"),
                Item::leaf("p2", "LA NACIONAL", "productivo").with_description("Nuevas implementaciones").with_icon("bulb"),
            ],
        ),
        column(
            "multitenant",
            "MULTITENANT",
            "Arquitectura Global",
            ColumnColor::Green,
            vec![
                Item::section_header("h4", "Core Services"),
                Item::leaf("m1", "AXESS CORE", "productivo").with_description("Servicios compartidos"),
                Item::leaf("m2", "CITAS CORE", "productivo").with_description("Motor de agenda"),
                Item::leaf("m3", "POA CORE", "productivo").with_description("Lógica de negocio"),
            ],
        ),
        column(
            "compliance",
            "COMPLIANCE",
            "Gestión Regulatoria y de Cumplimiento",
            ColumnColor::Green,
            Vec::new(),
        ),
    ]
}

/// Footer figures of a fresh installation
pub fn initial_metrics() -> Vec<FooterMetric> {
    vec![
        FooterMetric::new("m1", "UPTIME", "99.9%", MetricColor::Emerald),
        FooterMetric::new("m2", "USUARIOS ACTIVOS", "1,240", MetricColor::Blue),
        FooterMetric::new("m3", "TENANTS", "8", MetricColor::Purple),
        FooterMetric::new("m4", "ESTADO", "• Operativo", MetricColor::Emerald),
    ]
}
