//! HTML site generation.
//!
//! Loads the site config, projects it onto the page skeleton, and writes the
//! single-page site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html      # The whole site, CSS and script inline
//! └── assets/         # Copied verbatim from content/assets/ (if present)
//! ```
//!
//! ## What Comes From Where
//!
//! The projected parts of the page (title, meta description, hero, contact
//! rows, stat counters, service cards, theme variables) are read back from
//! the [`Page`] after [`Projector::init`]. Sections the projector does not
//! manage (technologies, differentiators, about, SEO meta) are rendered
//! straight from the config.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating,
//! which escapes every interpolated value. The about text is Markdown
//! rendered with `pulldown-cmark` and is trusted build-time input.

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::ContentStore;
use crate::dom::{ContactRow, Page, StatItem};
use crate::project::Projector;
use crate::schedule::{self, Timeline};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Summary of a finished build, for CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index_path: PathBuf,
    pub title: String,
    pub service_cards: usize,
    pub stats_bound: usize,
    pub style_vars: usize,
    pub assets_copied: bool,
}

/// Build the site from `source` into `output_dir`.
pub fn build(source: &Path, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    let site = config::load_config(source)?;
    let store = ContentStore::new(site);

    let mut page = Page::skeleton();
    Projector::new(&store, &mut page).init();

    let html = render_page(&page, store.get())?;

    fs::create_dir_all(output_dir)?;
    let index_path = output_dir.join("index.html");
    fs::write(&index_path, html.into_string())?;
    tracing::info!(path = %index_path.display(), "generated index.html");

    let assets = source.join("assets");
    let assets_copied = assets.is_dir();
    if assets_copied {
        let dst = output_dir.join("assets");
        fs::create_dir_all(&dst)?;
        copy_dir_recursive(&assets, &dst)?;
        tracing::info!(from = %assets.display(), "copied assets");
    }

    Ok(BuildReport {
        index_path,
        title: page.title.clone(),
        service_cards: page.services.as_ref().map_or(0, |c| c.len()),
        stats_bound: page.stat_items.iter().filter(|s| s.target.is_some()).count(),
        style_vars: page.style_vars.len(),
        assets_copied,
    })
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// ============================================================================
// Page
// ============================================================================

/// Render the full document from a projected page and the site content.
pub fn render_page(page: &Page, site: &SiteConfig) -> Result<Markup, GenerateError> {
    let theme_css = config::generate_theme_css(
        page.style_vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
    let css = format!("{theme_css}\n\n{CSS_STATIC}");
    let intro = Timeline::intro().to_json()?;
    let stats_timeline = Timeline::stats(page.stat_items.len()).to_json()?;
    let reveal = format!("--reveal-duration: {}ms;", site.animations.duration_ms);

    Ok(html! {
        (DOCTYPE)
        html lang="pt-BR" {
            (head(page, site, &css))
            body.loading
                style=(reveal)
                data-timeline=(intro)
                data-stats-duration=(site.animations.stats_duration_ms)
                data-scroll-threshold=(site.animations.scroll_threshold)
                data-counter-frame-ms=(schedule::FRAME.as_millis())
            {
                div.loading-overlay #loadingOverlay {
                    div.loading-spinner {}
                }
                (navbar(page))
                main {
                    (hero(page))
                    (stats_section(&page.stat_items, &stats_timeline))
                    (services_section(page))
                    (technologies_section(site))
                    (features_section(site))
                    (about_section(site))
                    (contact_section(&page.contact_rows))
                }
                @if let Some(href) = whatsapp_href(site) {
                    a.floating-btn href=(href) target="_blank" rel="noopener" aria-label="WhatsApp" {
                        i class="fab fa-whatsapp" {}
                    }
                }
                footer.site-footer {
                    p { "© " (site.company.name) }
                    @if !site.social.email.is_empty() {
                        a.footer-email href={ "mailto:" (site.social.email) } { (site.social.email) }
                    }
                }
                script { (PreEscaped(JS)) }
            }
        }
    })
}

/// Link for the floating WhatsApp button: the social URL, or a `wa.me` link
/// built from the company number when no URL is configured.
fn whatsapp_href(site: &SiteConfig) -> Option<String> {
    if !site.social.whatsapp.is_empty() {
        return Some(site.social.whatsapp.clone());
    }
    let digits: String = site
        .company
        .whatsapp
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    (!digits.is_empty()).then(|| format!("https://wa.me/{digits}"))
}

fn head(page: &Page, site: &SiteConfig, css: &str) -> Markup {
    let seo = &site.seo;
    html! {
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (page.title) }
            @if let Some(description) = &page.meta_description {
                meta name="description" content=(description);
            }
            @if !seo.keywords.is_empty() {
                meta name="keywords" content=(seo.keywords);
            }
            @if !seo.author.is_empty() {
                meta name="author" content=(seo.author);
            }
            meta property="og:title" content=(seo.title);
            meta property="og:description" content=(seo.description);
            @if !seo.og_image.is_empty() {
                meta property="og:image" content=(seo.og_image);
            }
            @if !seo.twitter_image.is_empty() {
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:image" content=(seo.twitter_image);
            }
            style { (PreEscaped(css)) }
        }
    }
}

fn navbar(page: &Page) -> Markup {
    let links = [
        ("#inicio", "Início"),
        ("#servicos", "Serviços"),
        ("#tecnologias", "Tecnologias"),
        ("#sobre", "Sobre"),
        ("#contato", "Contato"),
    ];
    html! {
        nav.navbar #navbar {
            a.nav-brand href="#inicio" { (page.hero_logo.as_deref().unwrap_or_default()) }
            ul.nav-menu #navMenu {
                @for (href, label) in links {
                    li { a.nav-link href=(href) { (label) } }
                }
            }
        }
    }
}

fn hero(page: &Page) -> Markup {
    html! {
        section.hero #inicio {
            @if let Some(logo) = &page.hero_logo {
                h1.hero-title { span.logo { (logo) } }
            }
            @if let Some(tagline) = &page.hero_tagline {
                p.hero-tagline { (tagline) }
            }
            @if let Some(subtitle) = &page.hero_subtitle {
                p.hero-subtitle { (subtitle) }
            }
            div.hero-cta {
                a.btn href="#contato" { "Fale Conosco" }
            }
        }
    }
}

fn stats_section(items: &[StatItem], timeline: &str) -> Markup {
    html! {
        section.stats-section data-timeline=(timeline) {
            @for item in items {
                div.stat-item data-metric=[item.metric.as_deref()] {
                    span.stat-number data-target=[item.target] { (item.display) }
                    span.stat-label { (item.label) }
                }
            }
        }
    }
}

fn services_section(page: &Page) -> Markup {
    html! {
        section.services #servicos {
            h2 { "Nossos Serviços" }
            @if let Some(container) = &page.services {
                div.services-grid {
                    @for card in container.children() {
                        (PreEscaped(card))
                    }
                }
            }
        }
    }
}

fn technologies_section(site: &SiteConfig) -> Markup {
    html! {
        section.technologies #tecnologias {
            h2 { "Tecnologias" }
            div.tech-grid {
                @for tech in &site.technologies {
                    div.tech-item data-aos="zoom-in" style={ "--tech-color: " (tech.color) } {
                        i class=(tech.icon) {}
                        span { (tech.name) }
                    }
                }
            }
        }
    }
}

fn features_section(site: &SiteConfig) -> Markup {
    html! {
        section.features {
            div.features-grid {
                @for feature in &site.features {
                    div.feature-card data-aos="fade-up" data-color=(feature.color) {
                        i class=(feature.icon) {}
                        h3 { (feature.title) }
                        p { (feature.description) }
                    }
                }
            }
        }
    }
}

fn about_section(site: &SiteConfig) -> Markup {
    let about = &site.about;
    let parser = Parser::new(&about.description);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        section.about #sobre {
            h2 { (about.title) }
            div.about-content {
                (PreEscaped(body_html))
            }
            @if !about.highlights.is_empty() {
                ul.about-highlights {
                    @for highlight in &about.highlights {
                        li { i class="fas fa-check" {} " " (highlight) }
                    }
                }
            }
        }
    }
}

fn contact_section(rows: &[ContactRow]) -> Markup {
    html! {
        section.contact #contato {
            h2 { "Contato" }
            div.contact-info {
                @for row in rows {
                    div.contact-item data-contact=[row.key.as_deref()] {
                        i class=(row.icon) {}
                        div {
                            h4 { (row.heading) }
                            p { (row.text) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
