//! Projection of store content onto a render target.
//!
//! The [`Projector`] is one-directional: it reads the [`ContentStore`] and
//! writes the [`RenderTarget`], never the other way around. Each `apply_*`
//! step is idempotent, and a slot missing from the target is skipped rather
//! than reported. The only short-circuit is the services container: without
//! it [`Projector::apply_services`] does nothing at all.

use crate::config::Service;
use crate::content::{ContentStore, Metric};
use crate::dom::{ContactField, RenderTarget, Slot};
use maud::{Markup, html};

pub struct Projector<'a, T: RenderTarget> {
    store: &'a ContentStore,
    target: &'a mut T,
}

impl<'a, T: RenderTarget> Projector<'a, T> {
    pub fn new(store: &'a ContentStore, target: &'a mut T) -> Self {
        Self { store, target }
    }

    /// Apply every section: company, stats, services, theme, in that order.
    pub fn init(&mut self) {
        self.apply_company_info();
        self.apply_stats();
        self.apply_services();
        self.apply_theme();
    }

    pub fn apply_company_info(&mut self) {
        let company = &self.store.get().company;

        self.target
            .set_title(&format!("{} - {}", company.name, company.tagline));

        let slots = [
            (Slot::MetaDescription, &company.description),
            (Slot::HeroLogo, &company.name),
            (Slot::HeroTagline, &company.tagline),
            (Slot::HeroSubtitle, &company.description),
        ];
        for (slot, value) in slots {
            match self.target.slot_mut(slot) {
                Some(text) => *text = value.clone(),
                None => tracing::debug!(?slot, "slot missing, skipped"),
            }
        }

        let mut filled = 0;
        for row in self.target.contact_rows_mut() {
            let value = match row.field() {
                Some(ContactField::Email) => &company.email,
                Some(ContactField::Phone) => &company.phone,
                Some(ContactField::WorkingHours) => &company.working_hours,
                Some(ContactField::Address) => &company.address,
                None => continue,
            };
            row.text = value.clone();
            filled += 1;
        }
        tracing::debug!(contact_rows = filled, "company info applied");
    }

    /// Bind each stat item to its metric, set the counter target and reset
    /// the display to zero.
    ///
    /// Items with an explicit metric key use it; the rest fall back to their
    /// label text. Items that resolve to nothing keep their state.
    pub fn apply_stats(&mut self) {
        let stats = &self.store.get().stats;
        let mut bound = 0;
        for item in self.target.stat_items_mut() {
            let metric = match &item.metric {
                Some(key) => Metric::from_key(key),
                None => Metric::from_label(&item.label),
            };
            let Some(metric) = metric else {
                tracing::debug!(label = %item.label, "stat item matches no metric");
                continue;
            };
            item.target = Some(stats.get(metric));
            item.display = "0".to_string();
            bound += 1;
        }
        tracing::debug!(stat_items = bound, "stats applied");
    }

    /// Regenerate the service cards in store order.
    pub fn apply_services(&mut self) {
        let Some(container) = self.target.services_container_mut() else {
            tracing::debug!("services container missing, skipped");
            return;
        };
        container.clear();
        for (index, service) in self.store.get().services.iter().enumerate() {
            container.append(render_service_card(service, index));
        }
        tracing::debug!(cards = container.len(), "services applied");
    }

    /// Write one `--{role}` style variable per theme entry.
    pub fn apply_theme(&mut self) {
        let theme = &self.store.get().theme;
        for (role, value) in theme {
            self.target.set_style_var(&format!("--{role}"), value);
        }
        tracing::debug!(vars = theme.len(), "theme applied");
    }
}

/// Render a single service card. All text is escaped by maud.
pub fn render_service_card(service: &Service, index: usize) -> Markup {
    let delay = (index + 1) * 100;
    html! {
        div.service-card data-service-id=(service.id) data-aos="fade-up" data-aos-delay=(delay) {
            div.service-icon {
                i class=(service.icon) {}
            }
            h3 { (service.title) }
            p { (service.description) }
            ul.service-features {
                @for feature in &service.features {
                    li { (feature) }
                }
            }
        }
    }
}
