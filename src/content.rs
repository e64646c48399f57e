//! The content store: the live record of site content.
//!
//! Built once from a [`SiteConfig`] and mutated afterwards only through
//! [`ContentStore::update_company_info`], [`ContentStore::update_stats`] and
//! [`ContentStore::update_services`]. Updates never render anything and never
//! fail; callers re-run the matching [`Projector`](crate::project::Projector)
//! step when they want the page to follow.
//!
//! Patches are deliberately permissive: every field is optional, and when
//! deserialized from JSON or TOML unknown keys are ignored.

use crate::config::{CompanyInfo, Service, SiteConfig, Stats};
use serde::Deserialize;

/// Partial company update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    #[serde(alias = "workingHours")]
    pub working_hours: Option<String>,
}

/// Partial statistics update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsPatch {
    pub projects: Option<u32>,
    pub technologies: Option<u32>,
    #[serde(alias = "customization", alias = "customizationPercent")]
    pub customization_percent: Option<u32>,
    #[serde(alias = "responseTime", alias = "responseTimeHours")]
    pub response_time_hours: Option<u32>,
}

/// One of the fixed statistics shown by the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Projects,
    Technologies,
    CustomizationPercent,
    ResponseTimeHours,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Projects,
        Metric::Technologies,
        Metric::CustomizationPercent,
        Metric::ResponseTimeHours,
    ];

    /// Key used in `data-metric` attributes and in `site.toml`.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Projects => "projects",
            Metric::Technologies => "technologies",
            Metric::CustomizationPercent => "customization_percent",
            Metric::ResponseTimeHours => "response_time_hours",
        }
    }

    /// Parse an explicit metric key. Accepts the legacy camelCase names.
    pub fn from_key(key: &str) -> Option<Metric> {
        match key.trim() {
            "projects" => Some(Metric::Projects),
            "technologies" => Some(Metric::Technologies),
            "customization_percent" | "customization" | "customizationPercent" => {
                Some(Metric::CustomizationPercent)
            }
            "response_time_hours" | "responseTime" | "responseTimeHours" => {
                Some(Metric::ResponseTimeHours)
            }
            _ => None,
        }
    }

    /// Keyword a stat label must contain (lower-cased) to bind to this metric.
    fn label_keyword(self) -> &'static str {
        match self {
            Metric::Projects => "projeto",
            Metric::Technologies => "tecnologia",
            Metric::CustomizationPercent => "personalizado",
            Metric::ResponseTimeHours => "resposta",
        }
    }

    /// Resolve a metric from display label text.
    ///
    /// Keywords are checked in [`Metric::ALL`] order; the first hit wins.
    pub fn from_label(label: &str) -> Option<Metric> {
        let label = label.to_lowercase();
        Metric::ALL
            .into_iter()
            .find(|metric| label.contains(metric.label_keyword()))
    }
}

impl Stats {
    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Projects => self.projects,
            Metric::Technologies => self.technologies,
            Metric::CustomizationPercent => self.customization_percent,
            Metric::ResponseTimeHours => self.response_time_hours,
        }
    }
}

/// The live content record.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    content: SiteConfig,
}

impl ContentStore {
    pub fn new(content: SiteConfig) -> Self {
        Self { content }
    }

    /// Current full record.
    pub fn get(&self) -> &SiteConfig {
        &self.content
    }

    /// Shallow-merge `patch` into the company record.
    pub fn update_company_info(&mut self, patch: CompanyPatch) {
        let company: &mut CompanyInfo = &mut self.content.company;
        let fields = [
            (&mut company.name, patch.name),
            (&mut company.tagline, patch.tagline),
            (&mut company.description, patch.description),
            (&mut company.email, patch.email),
            (&mut company.phone, patch.phone),
            (&mut company.whatsapp, patch.whatsapp),
            (&mut company.address, patch.address),
            (&mut company.working_hours, patch.working_hours),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        tracing::debug!("company info updated");
    }

    /// Shallow-merge `patch` into the statistics.
    pub fn update_stats(&mut self, patch: StatsPatch) {
        let stats = &mut self.content.stats;
        let fields = [
            (&mut stats.projects, patch.projects),
            (&mut stats.technologies, patch.technologies),
            (&mut stats.customization_percent, patch.customization_percent),
            (&mut stats.response_time_hours, patch.response_time_hours),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        tracing::debug!("stats updated");
    }

    /// Replace the services list. The new order is the display order.
    ///
    /// Ids are not checked for uniqueness.
    pub fn update_services(&mut self, services: Vec<Service>) {
        tracing::debug!(count = services.len(), "services replaced");
        self.content.services = services;
    }
}
