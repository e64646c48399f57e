//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. The stock defaults
//! are the complete content of the agency site; a `site.toml` in the content
//! directory only needs the keys it wants to override.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! └── site.toml     # Optional, merged over the stock defaults
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only change the contact email and one statistic
//! [company]
//! email = "hello@example.com"
//!
//! [stats]
//! projects = 20
//! ```
//!
//! Tables merge key-by-key. Arrays (`services`, `technologies`, ...) replace
//! the stock array entirely, so listing one service means the site shows
//! exactly one service. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full site content, loaded from `site.toml` over the stock defaults.
///
/// This is the seed of the [`ContentStore`](crate::content::ContentStore):
/// the store is built once from it and then mutated only through its
/// update operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Company identity and contact details.
    pub company: CompanyInfo,
    /// Social links shown in the floating buttons and footer.
    pub social: SocialLinks,
    /// Headline statistics animated by the counters.
    pub stats: Stats,
    /// Services in display order.
    pub services: Vec<Service>,
    /// Technology showcase in display order.
    pub technologies: Vec<Technology>,
    /// Differentiators shown below the services.
    pub features: Vec<Feature>,
    /// About section.
    pub about: AboutSection,
    /// Head metadata.
    pub seo: SeoConfig,
    /// Color role → CSS color value. Every entry becomes a `--role` variable.
    #[serde(alias = "colors")]
    pub theme: BTreeMap<String, String>,
    /// Animation timings consumed by the page scripts and the scheduler.
    pub animations: AnimationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: CompanyInfo::default(),
            social: SocialLinks::default(),
            stats: Stats::default(),
            services: default_services(),
            technologies: default_technologies(),
            features: default_features(),
            about: AboutSection::default(),
            seo: SeoConfig::default(),
            theme: default_theme(),
            animations: AnimationConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Only load-time input is validated. Runtime updates through the
    /// content store are accepted as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let company = [
            ("name", &self.company.name),
            ("tagline", &self.company.tagline),
            ("description", &self.company.description),
            ("email", &self.company.email),
            ("phone", &self.company.phone),
            ("working_hours", &self.company.working_hours),
        ];
        for (key, value) in company {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "company.{key} must not be empty"
                )));
            }
        }
        for (role, value) in &self.theme {
            if !is_theme_role(role) {
                return Err(ConfigError::Validation(format!(
                    "theme role {role:?} may only contain letters, digits, '-' and '_'"
                )));
            }
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "theme.{role} must not be empty"
                )));
            }
            if !is_theme_value(value) {
                return Err(ConfigError::Validation(format!(
                    "theme.{role} must be a plain CSS color value"
                )));
            }
        }
        if self.animations.duration_ms == 0 || self.animations.stats_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "animation durations must be non-zero".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.animations.scroll_threshold) {
            return Err(ConfigError::Validation(
                "animations.scroll_threshold must be between 0 and 1".into(),
            ));
        }
        Ok(())
    }
}

/// Company identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
    /// Display phone number, e.g. `(11) 99010-2690`.
    pub phone: String,
    /// Digits-only number used to build `wa.me` links.
    pub whatsapp: String,
    pub address: String,
    /// Display working hours, e.g. `Segunda a Sexta: 9h às 18h`.
    #[serde(alias = "workingHours")]
    pub working_hours: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "SM Dev Studio".to_string(),
            tagline: "O sistema que se molda ao Seu Negócio!".to_string(),
            description: "Desenvolvemos soluções tecnológicas personalizadas que se adaptam ao seu jeito de trabalhar.".to_string(),
            email: "contato@smdevstudio.com.br".to_string(),
            phone: "(11) 99010-2690".to_string(),
            whatsapp: "5511990102690".to_string(),
            address: "São Paulo, SP - Brasil".to_string(),
            working_hours: "Segunda a Sexta: 9h às 18h".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub whatsapp: String,
    pub email: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            whatsapp: "https://wa.me/5511990102690".to_string(),
            email: "contato@smdevstudio.com.br".to_string(),
        }
    }
}

/// Headline statistics. All values are non-negative counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stats {
    pub projects: u32,
    pub technologies: u32,
    #[serde(alias = "customization", alias = "customizationPercent")]
    pub customization_percent: u32,
    #[serde(alias = "responseTime", alias = "responseTimeHours")]
    pub response_time_hours: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            projects: 14,
            technologies: 8,
            customization_percent: 100,
            response_time_hours: 24,
        }
    }
}

/// A service card.
///
/// Every field defaults to empty so that partially specified services from
/// runtime updates still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Identifier exposed as `data-service-id`. Not required to be unique.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon class list, e.g. `fas fa-cloud`.
    pub icon: String,
    pub features: Vec<String>,
    /// Accent color token, e.g. `purple`.
    pub color: String,
}

impl Service {
    pub fn new(id: &str, title: &str, description: &str, icon: &str, features: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            color: String::new(),
        }
    }

    fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }
}

fn default_services() -> Vec<Service> {
    vec![
        Service::new(
            "web",
            "Desenvolvimento Web",
            "Aplicações web modernas, responsivas e escaláveis com as melhores práticas de desenvolvimento.",
            "fas fa-laptop-code",
            &["Sites institucionais", "E-commerce", "Sistemas web complexos"],
        )
        .with_color("purple"),
        Service::new(
            "mobile",
            "Apps Mobile",
            "Aplicativos nativos e híbridos para Android e iOS com foco em experiência do usuário.",
            "fas fa-mobile-alt",
            &["Apps nativos", "Apps híbridos", "PWA (Progressive Web Apps)"],
        )
        .with_color("pink"),
        Service::new(
            "cloud",
            "Soluções em Nuvem",
            "Arquiteturas escaláveis, seguras e de alta disponibilidade na nuvem.",
            "fas fa-cloud",
            &["Migração para nuvem", "Arquitetura serverless", "DevOps e CI/CD"],
        )
        .with_color("green"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Technology {
    pub name: String,
    pub icon: String,
    pub color: String,
}

fn default_technologies() -> Vec<Technology> {
    [
        ("Python", "fab fa-python", "#3776ab"),
        ("C# .NET", "fab fa-microsoft", "#512bd4"),
        ("Angular", "fab fa-angular", "#dd0031"),
        ("React", "fab fa-react", "#61dafb"),
        ("JavaScript", "fab fa-js-square", "#f7df1e"),
        ("Node.js", "fab fa-node-js", "#339933"),
        ("SQL Server", "fas fa-database", "#cc2927"),
        ("PostgreSQL", "fas fa-database", "#336791"),
    ]
    .into_iter()
    .map(|(name, icon, color)| Technology {
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// A differentiator ("why us") card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

fn default_features() -> Vec<Feature> {
    [
        (
            "Personalização Total",
            "Sistemas desenvolvidos especificamente para suas necessidades e processos",
            "fas fa-magic",
            "purple",
        ),
        (
            "Alta Performance",
            "Soluções otimizadas para máxima eficiência e velocidade",
            "fas fa-rocket",
            "blue",
        ),
        (
            "Segurança Garantida",
            "Implementação das melhores práticas de segurança e proteção de dados",
            "fas fa-shield-alt",
            "green",
        ),
        (
            "Suporte Contínuo",
            "Acompanhamento completo do projeto e suporte técnico especializado",
            "fas fa-headset",
            "pink",
        ),
    ]
    .into_iter()
    .map(|(title, description, icon, color)| Feature {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// About section. `description` is Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutSection {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            title: "Sobre Nosso Projeto".to_string(),
            description: "Somos uma empresa especializada em desenvolvimento de sistemas personalizados. Nossa missão é criar soluções tecnológicas que se adaptem perfeitamente ao seu negócio, oferecendo sistemas únicos e eficientes.".to_string(),
            highlights: vec![
                "Sistemas 100% personalizados para sua empresa".to_string(),
                "Desenvolvimento com tecnologias modernas e seguras".to_string(),
                "Suporte completo durante e após a implementação".to_string(),
                "Foco na experiência do usuário e usabilidade".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    #[serde(alias = "ogImage")]
    pub og_image: String,
    #[serde(alias = "twitterImage")]
    pub twitter_image: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title: "SM Dev Studio - Sistemas que se Moldam ao seu Negócio".to_string(),
            description: "Desenvolvemos soluções tecnológicas personalizadas. O sistema se molda ao seu jeito de trabalhar.".to_string(),
            keywords: "desenvolvimento web, sistemas personalizados, aplicativos mobile, soluções em nuvem, SM Dev Studio".to_string(),
            author: "SM Dev Studio".to_string(),
            og_image: "https://smdevstudio.com.br/og-image.jpg".to_string(),
            twitter_image: "https://smdevstudio.com.br/twitter-image.jpg".to_string(),
        }
    }
}

/// Animation timings, in milliseconds unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Reveal animation duration.
    pub duration_ms: u32,
    /// Fraction of an element that must be visible before it is revealed.
    pub scroll_threshold: f64,
    /// Time a statistic counter takes to reach its target.
    pub stats_duration_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            scroll_threshold: 0.1,
            stats_duration_ms: 2000,
        }
    }
}

fn default_theme() -> BTreeMap<String, String> {
    [
        ("primary", "#8b5cf6"),
        ("secondary", "#06b6d4"),
        ("accent", "#14f195"),
        ("dark", "#0f172a"),
        ("light", "#e2e8f0"),
        ("success", "#10b981"),
        ("error", "#ef4444"),
        ("warning", "#f59e0b"),
    ]
    .into_iter()
    .map(|(role, value)| (role.to_string(), value.to_string()))
    .collect()
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `site.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Legacy (camelCase) key spellings and the table they live in. `None` is
/// the top level.
const LEGACY_KEYS: &[(Option<&str>, &str, &str)] = &[
    (None, "colors", "theme"),
    (Some("company"), "workingHours", "working_hours"),
    (Some("stats"), "customization", "customization_percent"),
    (Some("stats"), "customizationPercent", "customization_percent"),
    (Some("stats"), "responseTime", "response_time_hours"),
    (Some("stats"), "responseTimeHours", "response_time_hours"),
    (Some("seo"), "ogImage", "og_image"),
    (Some("seo"), "twitterImage", "twitter_image"),
    (Some("animations"), "duration", "duration_ms"),
    (Some("animations"), "scrollThreshold", "scroll_threshold"),
    (Some("animations"), "statsAnimationDuration", "stats_duration_ms"),
];

/// Keys older config files carry that the built site has no use for. They
/// are dropped before merging instead of failing `deny_unknown_fields`.
const IGNORED_KEYS: &[(Option<&str>, &str)] = &[
    (None, "form"),
    (None, "performance"),
    (Some("animations"), "particleCount"),
    (Some("animations"), "particle_count"),
];

/// Rename legacy keys in a user overlay to their canonical spelling and drop
/// the ignored ones.
///
/// Must run before merging: the stock defaults always carry the canonical
/// key, and a table holding both spellings fails to deserialize.
pub fn normalize_legacy_keys(value: &mut toml::Value) {
    let Some(root) = value.as_table_mut() else {
        return;
    };
    for (table, key) in IGNORED_KEYS {
        let target = match table {
            None => Some(&mut *root),
            Some(name) => root.get_mut(*name).and_then(toml::Value::as_table_mut),
        };
        if target.and_then(|t| t.remove(*key)).is_some() {
            tracing::warn!(key = *key, "ignoring unsupported config key");
        }
    }
    for (table, legacy, canonical) in LEGACY_KEYS {
        let target = match table {
            None => Some(&mut *root),
            Some(name) => root.get_mut(*name).and_then(toml::Value::as_table_mut),
        };
        let Some(target) = target else {
            continue;
        };
        if target.contains_key(*canonical) {
            continue;
        }
        if let Some(v) = target.remove(*legacy) {
            target.insert(canonical.to_string(), v);
        }
    }
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(mut ov) => {
            normalize_legacy_keys(&mut ov);
            merge_toml(base, ov)
        }
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(
        services = config.services.len(),
        theme_roles = config.theme.len(),
        "loaded site config"
    );
    Ok(config)
}

/// Returns a commented stock `site.toml` covering the most edited keys.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# vitrine site configuration
# ==========================
# All settings are optional. Values shown below are the defaults.
# Tables merge key-by-key over the defaults; arrays replace them entirely.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Company
# ---------------------------------------------------------------------------
[company]
name = "SM Dev Studio"
tagline = "O sistema que se molda ao Seu Negócio!"
description = "Desenvolvemos soluções tecnológicas personalizadas que se adaptam ao seu jeito de trabalhar."
email = "contato@smdevstudio.com.br"
phone = "(11) 99010-2690"
whatsapp = "5511990102690"        # digits only, used for wa.me links
address = "São Paulo, SP - Brasil"
working_hours = "Segunda a Sexta: 9h às 18h"

[social]
whatsapp = "https://wa.me/5511990102690"
email = "contato@smdevstudio.com.br"

# ---------------------------------------------------------------------------
# Statistics (animated counters)
# ---------------------------------------------------------------------------
[stats]
projects = 14
technologies = 8
customization_percent = 100
response_time_hours = 24

# ---------------------------------------------------------------------------
# Services, in display order. Listing any service replaces the whole list.
# ---------------------------------------------------------------------------
# [[services]]
# id = "web"
# title = "Desenvolvimento Web"
# description = "Aplicações web modernas, responsivas e escaláveis."
# icon = "fas fa-laptop-code"
# features = ["Sites institucionais", "E-commerce"]
# color = "purple"

# ---------------------------------------------------------------------------
# Theme: each role becomes a CSS variable (--primary, --secondary, ...)
# ---------------------------------------------------------------------------
[theme]
primary = "#8b5cf6"
secondary = "#06b6d4"
accent = "#14f195"
dark = "#0f172a"
light = "#e2e8f0"
success = "#10b981"
error = "#ef4444"
warning = "#f59e0b"

# ---------------------------------------------------------------------------
# Animations (milliseconds)
# ---------------------------------------------------------------------------
[animations]
duration_ms = 800
scroll_threshold = 0.1     # 0.0 - 1.0
stats_duration_ms = 2000
"##
}

/// Whether `role` can follow `--` in a CSS custom property name.
pub fn is_theme_role(role: &str) -> bool {
    !role.is_empty()
        && role
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Whether `value` stays inside its declaration in an inline `<style>` block.
pub fn is_theme_value(value: &str) -> bool {
    !value.contains(['<', '>', '{', '}', ';'])
}

/// Generate a `:root` block of CSS custom properties.
///
/// Takes already-named variables (`--primary`, ...) in the order they should
/// appear. The output is inlined unescaped, so variables with a name that is
/// not `--` plus a theme role, or with a value that could close the block,
/// are left out.
pub fn generate_theme_css<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in vars {
        let role = name.strip_prefix("--").unwrap_or_default();
        if !is_theme_role(role) || !is_theme_value(value) {
            tracing::warn!(name = %name, "unsafe style variable left out of theme css");
            continue;
        }
        css.push_str(&format!("    {name}: {value};\n"));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_company() {
        let config = SiteConfig::default();
        assert_eq!(config.company.name, "SM Dev Studio");
        assert_eq!(config.company.email, "contato@smdevstudio.com.br");
    }

    #[test]
    fn default_config_has_all_theme_roles() {
        let config = SiteConfig::default();
        let roles: Vec<&str> = config.theme.keys().map(String::as_str).collect();
        assert_eq!(
            roles,
            vec![
                "accent",
                "dark",
                "error",
                "light",
                "primary",
                "secondary",
                "success",
                "warning"
            ]
        );
        assert_eq!(config.theme["primary"], "#8b5cf6");
    }

    #[test]
    fn default_config_services_in_display_order() {
        let config = SiteConfig::default();
        let ids: Vec<&str> = config.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["web", "mobile", "cloud"]);
    }

    #[test]
    fn default_config_validates() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[company]
email = "hello@example.com"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.company.email, "hello@example.com");
        assert_eq!(config.company.name, "SM Dev Studio");
        assert_eq!(config.stats.projects, 14);
    }

    #[test]
    fn legacy_key_aliases_accepted() {
        let toml = r##"
[stats]
customization = 90
responseTime = 12

[colors]
primary = "red"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.stats.customization_percent, 90);
        assert_eq!(config.stats.response_time_hours, 12);
        assert_eq!(config.theme.get("primary").map(String::as_str), Some("red"));
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[company]\nfax = \"123\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn merge_preserves_base_keys() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[stats]\nprojects = 30\n").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.stats.projects, 30);
        assert_eq!(config.stats.technologies, 8);
        assert_eq!(config.theme.len(), 8);
    }

    #[test]
    fn merge_replaces_arrays() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[[services]]
id = "data"
title = "Dados"
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.services.len(), 1);
        assert_eq!(config.services[0].id, "data");
        assert!(config.services[0].features.is_empty());
    }

    #[test]
    fn merge_accepts_legacy_keys() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors]
primary = "#000000"

[stats]
responseTime = 2

[company]
workingHours = "24/7"
"##,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.theme["primary"], "#000000");
        assert_eq!(config.theme["dark"], "#0f172a");
        assert_eq!(config.stats.response_time_hours, 2);
        assert_eq!(config.company.working_hours, "24/7");
    }

    #[test]
    fn merge_theme_adds_roles() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[theme]\nmuted = \"#999\"\n").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.theme.len(), 9);
        assert_eq!(config.theme["muted"], "#999");
    }

    #[test]
    fn validate_rejects_empty_company_field() {
        let mut config = SiteConfig::default();
        config.company.phone = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("company.phone"));
    }

    #[test]
    fn validate_rejects_empty_theme_value() {
        let mut config = SiteConfig::default();
        config.theme.insert("primary".to_string(), String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_css_breakout_in_theme() {
        let mut config = SiteConfig::default();
        config
            .theme
            .insert("primary".to_string(), "red; } </style>".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_markup_in_theme_role() {
        let mut config = SiteConfig::default();
        config.theme.insert(
            "x:red}</style><script>alert(1)</script><style>".to_string(),
            "red".to_string(),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("theme role"));
    }

    #[test]
    fn validate_accepts_dashed_theme_role() {
        let mut config = SiteConfig::default();
        config
            .theme
            .insert("brand-dark_2".to_string(), "#111".to_string());
        config.validate().unwrap();
    }

    #[test]
    fn theme_role_charset() {
        assert!(is_theme_role("primary"));
        assert!(is_theme_role("text-muted_2"));
        assert!(!is_theme_role(""));
        assert!(!is_theme_role("a b"));
        assert!(!is_theme_role("x:red}"));
        assert!(!is_theme_role("</style>"));
    }

    #[test]
    fn validate_rejects_bad_threshold() {
        let mut config = SiteConfig::default();
        config.animations.scroll_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let mut config = SiteConfig::default();
        config.animations.stats_duration_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn generate_theme_css_lists_vars() {
        let css = generate_theme_css([("--primary", "#fff"), ("--dark", "#000")]);
        assert_eq!(css, ":root {\n    --primary: #fff;\n    --dark: #000;\n}");
    }

    #[test]
    fn generate_theme_css_skips_unsafe_vars() {
        let css = generate_theme_css([
            ("--primary", "#fff"),
            ("--x:red}</style><script>alert(1)</script><style>", "red"),
            ("--dark", "red}</style><script>alert(2)</script>"),
            ("primary", "#000"),
        ]);
        assert_eq!(css, ":root {\n    --primary: #fff;\n}");
    }

    #[test]
    fn merge_accepts_original_config_tables() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[animations]
duration = 600
scrollThreshold = 0.2
particleCount = 50
statsAnimationDuration = 1500

[form]
requiredFields = ["name", "phone", "project"]

[performance]
preloadFonts = true
"##,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.animations.duration_ms, 600);
        assert_eq!(config.animations.scroll_threshold, 0.2);
        assert_eq!(config.animations.stats_duration_ms, 1500);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r##"
[company]
name = "Acme"

[theme]
primary = "#123456"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.company.name, "Acme");
        assert_eq!(config.company.tagline, "O sistema que se molda ao Seu Negócio!");
        assert_eq!(config.theme["primary"], "#123456");
        assert_eq!(config.theme["dark"], "#0f172a");
    }

    #[test]
    fn load_config_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[company\nname = ").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_validation_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[company]\nname = \"\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }
}
