//! # Vitrine
//!
//! Builds the single-page marketing site of a software agency from a
//! structured content record.
//!
//! # Architecture: Store → Projector → Page
//!
//! ```text
//! site.toml ──▶ SiteConfig ──▶ ContentStore ──▶ Projector ──▶ Page ──▶ index.html
//!  (overrides)   (defaults +     (live record,     (one-way      (slots)   (maud)
//!                 validation)     merge updates)    sync)
//! ```
//!
//! - The [`content::ContentStore`] holds company info, statistics, services
//!   and theme tokens. It changes only through its update operations, which
//!   never fail and never render.
//! - The [`project::Projector`] writes the store into any
//!   [`dom::RenderTarget`]. Each step (company, stats, services, theme) is
//!   idempotent and skips slots the target lacks. Re-projection after an
//!   update is always an explicit call.
//! - [`generate`] serializes the projected [`dom::Page`] together with the
//!   static sections (technologies, differentiators, about, SEO) into one
//!   HTML file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, legacy key normalization, merging, validation, theme CSS |
//! | [`content`] | The content store, update patches, metric keys |
//! | [`dom`] | Render target trait and the in-memory page |
//! | [`project`] | Store → page projection and service card markup |
//! | [`schedule`] | Animation timelines and the counter curve |
//! | [`generate`] | Full-document rendering and the build command |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup for the binary |
//!
//! # Design Decisions
//!
//! ## Explicit Keys, Legacy Fallback
//!
//! Contact rows and stat items carry `data-contact` / `data-metric` keys.
//! Rows and stats without a key are still matched the old way, by icon class
//! and by label keyword, so hand-written markup keeps working.
//!
//! ## Escaped Cards
//!
//! Service cards are rendered with maud, so titles, descriptions and
//! features are HTML-escaped no matter where the store got them from.
//!
//! ## Flat Timelines
//!
//! Deferred effects are `(delay, effect)` lists replayed by a single clock
//! instead of nested timers. The page script receives them as JSON.

pub mod config;
pub mod content;
pub mod dom;
pub mod generate;
pub mod logging;
pub mod output;
pub mod project;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_helpers;
