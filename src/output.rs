//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output lists content by identity (positional index + title), with the
//! details that matter for checking a site (contact values, counter
//! targets, card features) as indented context lines.
//!
//! ## Check
//!
//! ```text
//! Company
//!     SM Dev Studio - O sistema que se molda ao Seu Negócio!
//!     Email: contato@smdevstudio.com.br
//!
//! Stats
//! 001 projects: 14
//!
//! Services
//! 001 Desenvolvimento Web [web]
//!     Sites institucionais, E-commerce, Sistemas web complexos
//!
//! Theme
//!     --primary: #8b5cf6
//! ```
//!
//! ## Build
//!
//! ```text
//! SM Dev Studio - O sistema que se molda ao Seu Negócio! → dist/index.html
//!     3 service cards, 4 counters, 8 theme variables
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::config::SiteConfig;
use crate::content::Metric;
use crate::generate::BuildReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Content inventory for `check`.
pub fn format_check_output(site: &SiteConfig) -> Vec<String> {
    let company = &site.company;
    let mut lines = vec![
        "Company".to_string(),
        format!("{}{} - {}", indent(1), company.name, company.tagline),
        format!("{}Email: {}", indent(1), company.email),
        format!("{}Phone: {}", indent(1), company.phone),
        format!("{}Hours: {}", indent(1), company.working_hours),
    ];

    lines.push(String::new());
    lines.push("Stats".to_string());
    for (i, metric) in Metric::ALL.into_iter().enumerate() {
        lines.push(format!(
            "{} {}: {}",
            format_index(i + 1),
            metric.key(),
            site.stats.get(metric)
        ));
    }

    lines.push(String::new());
    lines.push("Services".to_string());
    if site.services.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, service) in site.services.iter().enumerate() {
        lines.push(format!(
            "{} {} [{}]",
            format_index(i + 1),
            service.title,
            service.id
        ));
        if !service.features.is_empty() {
            lines.push(format!("{}{}", indent(1), service.features.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Theme".to_string());
    for (role, value) in &site.theme {
        lines.push(format!("{}--{}: {}", indent(1), role, value));
    }
    lines
}

pub fn print_check_output(site: &SiteConfig) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

/// Summary for `build`.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![
        format!("{} → {}", report.title, report.index_path.display()),
        format!(
            "{}{} service cards, {} counters, {} theme variables",
            indent(1),
            report.service_cards,
            report.stats_bound,
            report.style_vars
        ),
    ];
    if report.assets_copied {
        lines.push(format!("{}assets/ copied", indent(1)));
    }
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
