//! Shared test utilities for the vitrine test suite.
//!
//! Page fixtures plus lookup helpers that panic with a clear message on a
//! miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut page = legacy_page();
//! Projector::new(&store, &mut page).init();
//!
//! assert_eq!(contact_text(&page, "fa-envelope"), "contato@smdevstudio.com.br");
//! assert_eq!(stat_item(&page, "Projetos Entregues").target, Some(14));
//! assert_eq!(card_ids(&page), vec!["web", "mobile", "cloud"]);
//! ```

use crate::dom::{Container, ContactRow, Page, StatItem};

// =========================================================================
// Fixtures
// =========================================================================

/// A page marked up the old way: no `data-contact` or `data-metric` keys,
/// so every row and stat has to be found by icon or label.
///
/// The address row and the "Clientes Felizes" stat match nothing and carry
/// preset text so tests can check they were left alone.
pub fn legacy_page() -> Page {
    Page {
        title: "placeholder".to_string(),
        meta_description: Some(String::new()),
        hero_logo: Some(String::new()),
        hero_tagline: Some(String::new()),
        hero_subtitle: Some(String::new()),
        contact_rows: vec![
            ContactRow::new(None, "fas fa-envelope", "Email", "old@example.com"),
            ContactRow::new(None, "fab fa-whatsapp", "WhatsApp", "(00) 0000-0000"),
            ContactRow::new(None, "fas fa-clock", "Horário", "sempre"),
            ContactRow::new(None, "fas fa-map-marker-alt", "Localização", "Rua Antiga, 1"),
        ],
        stat_items: vec![
            StatItem::new(None, "Projetos Entregues"),
            StatItem::new(None, "Tecnologias Dominadas"),
            StatItem::new(None, "% Personalizado"),
            StatItem::new(None, "Tempo de Resposta"),
            StatItem {
                metric: None,
                label: "Clientes Felizes".to_string(),
                target: None,
                display: "7".to_string(),
            },
        ],
        services: Some(Container::default()),
        style_vars: Vec::new(),
    }
}

// =========================================================================
// Page lookups: panic with a clear message on miss
// =========================================================================

/// Text of the contact row whose icon carries `marker`. Panics if not found.
pub fn contact_text<'a>(page: &'a Page, marker: &str) -> &'a str {
    page.contact_rows
        .iter()
        .find(|row| row.icon.split_whitespace().any(|class| class == marker))
        .map(|row| row.text.as_str())
        .unwrap_or_else(|| {
            let icons: Vec<&str> = page.contact_rows.iter().map(|r| r.icon.as_str()).collect();
            panic!("contact row '{marker}' not found. Available: {icons:?}")
        })
}

/// Stat item by exact label. Panics if not found.
pub fn stat_item<'a>(page: &'a Page, label: &str) -> &'a StatItem {
    page.stat_items
        .iter()
        .find(|item| item.label == label)
        .unwrap_or_else(|| {
            let labels: Vec<&str> = page.stat_items.iter().map(|i| i.label.as_str()).collect();
            panic!("stat item '{label}' not found. Available: {labels:?}")
        })
}

/// `data-service-id` of every generated card, in order. Panics if the page
/// has no services container.
pub fn card_ids(page: &Page) -> Vec<&str> {
    let container = page
        .services
        .as_ref()
        .unwrap_or_else(|| panic!("page has no services container"));
    container
        .children()
        .iter()
        .map(|card| attr_value(card, "data-service-id"))
        .collect()
}

/// Value of the first `name="..."` attribute in an HTML fragment.
fn attr_value<'a>(html: &'a str, name: &str) -> &'a str {
    let needle = format!("{name}=\"");
    let start = html
        .find(&needle)
        .map(|i| i + needle.len())
        .unwrap_or_else(|| panic!("attribute '{name}' not found in {html}"));
    let len = html[start..]
        .find('"')
        .unwrap_or_else(|| panic!("unterminated attribute '{name}' in {html}"));
    &html[start..start + len]
}
