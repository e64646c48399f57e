//! Animation sequencing.
//!
//! The page's deferred effects (hide the loading overlay, reveal the hero,
//! start the stat counters) are a flat, ordered list of `(delay, effect)`
//! steps rather than nested callbacks. A [`Timeline`] is driven by a single
//! clock: [`Timeline::due`] hands back every step whose delay has elapsed
//! since the previous call, exactly once, in order.
//!
//! The timeline is serialized into the generated page (`data-timeline`) so
//! the page script only has to replay it.
//!
//! [`counter_text`] and [`advance_counters`] are the reference model of the
//! counter the page script runs: `static/site.js` reads [`FRAME`] from
//! `data-counter-frame-ms` and uses the same floored frame count, so the two
//! climb through identical values.

use crate::config::AnimationConfig;
use crate::dom::StatItem;
use serde::Serialize;
use std::time::Duration;

/// Interval between counter frames.
pub const FRAME: Duration = Duration::from_millis(16);

const LOADING_DELAY: Duration = Duration::from_millis(1500);
const HERO_DELAY: Duration = Duration::from_millis(500);
const STAGGER: Duration = Duration::from_millis(200);

/// Hero elements revealed one after another once loading is done.
pub const HERO_ELEMENTS: [&str; 4] = ["hero-title", "hero-tagline", "hero-subtitle", "hero-cta"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    HideLoadingOverlay,
    RevealHero { element: &'static str },
    StartCounter { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(rename = "at_ms", serialize_with = "as_millis")]
    pub at: Duration,
    #[serde(flatten)]
    pub effect: Effect,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<Step>,
    cursor: usize,
}

impl Timeline {
    /// Build from steps. Steps are sorted by time; equal times keep their
    /// given order.
    pub fn new(mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|step| step.at);
        Self { steps, cursor: 0 }
    }

    /// Loading overlay hidden after 1.5s, hero elements revealed 0.5s later,
    /// 200ms apart.
    pub fn intro() -> Self {
        let mut steps = vec![Step {
            at: LOADING_DELAY,
            effect: Effect::HideLoadingOverlay,
        }];
        let hero_start = LOADING_DELAY + HERO_DELAY;
        steps.extend(HERO_ELEMENTS.iter().zip(0u32..).map(|(element, i)| Step {
            at: hero_start + STAGGER * i,
            effect: Effect::RevealHero { element: *element },
        }));
        Self::new(steps)
    }

    /// Counters started 200ms apart, relative to the stats section coming
    /// into view.
    pub fn stats(count: usize) -> Self {
        Self::new(
            (0..count)
                .zip(0u32..)
                .map(|(index, i)| Step {
                    at: STAGGER * i,
                    effect: Effect::StartCounter { index },
                })
                .collect(),
        )
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Steps due at `elapsed` that have not been returned yet.
    pub fn due(&mut self, elapsed: Duration) -> Vec<Effect> {
        let pending = &self.steps[self.cursor..];
        let ready = pending.iter().take_while(|step| step.at <= elapsed).count();
        self.cursor += ready;
        pending[..ready].iter().map(|step| step.effect.clone()).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.steps.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.steps)
    }
}

/// Counter text at `elapsed` into an animation of `duration`.
///
/// The counter climbs linearly in 16ms frames and is shown floored, with a
/// `%` suffix when the target is exactly 100 and `+` otherwise.
pub fn counter_text(target: u32, elapsed: Duration, duration: Duration) -> String {
    let frames_total = (duration.as_millis() / FRAME.as_millis()).max(1) as f64;
    let frames = (elapsed.as_millis() / FRAME.as_millis()) as f64;
    let current = (f64::from(target) * frames / frames_total).min(f64::from(target));
    let suffix = if target == 100 { '%' } else { '+' };
    format!("{}{suffix}", current.floor() as u64)
}

/// Advance every projected stat item to its counter text at `elapsed`.
///
/// Items without a target are not counters and are left alone.
pub fn advance_counters(items: &mut [StatItem], elapsed: Duration, animations: &AnimationConfig) {
    let duration = Duration::from_millis(u64::from(animations.stats_duration_ms));
    for item in items {
        if let Some(target) = item.target {
            item.display = counter_text(target, elapsed, duration);
        }
    }
}
