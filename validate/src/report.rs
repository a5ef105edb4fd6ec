//! Printing frame outcomes

use std::fmt::Write;

use serde::Serialize;

use auralyte_core::game_data::{job_name, job_role};
use auralyte_core::{FrameOutcome, RenderSpec, TimerReading};
use auralyte_types::formatting::format_progress;
use auralyte_types::{JobId, TimerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One frame in JSON output
#[derive(Debug, Serialize)]
pub struct FrameReport<'a> {
    pub frame: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<String>,
    pub specs: &'a [RenderSpec],
}

impl<'a> FrameReport<'a> {
    pub fn new(frame: usize, outcome: &'a FrameOutcome) -> Self {
        let suppressed = match outcome {
            FrameOutcome::Suppressed(reason) => Some(reason.to_string()),
            FrameOutcome::Rendered(_) => None,
        };
        Self { frame, suppressed, specs: outcome.specs() }
    }
}

fn timer_label(kind: TimerKind) -> &'static str {
    match kind {
        TimerKind::Cooldown => "cooldown",
        TimerKind::ChargeCooldown => "charge",
        TimerKind::Buff => "buff",
    }
}

fn format_timer(timer: Option<&TimerReading>) -> String {
    match timer {
        Some(t) => format!("{} {}", timer_label(t.kind), format_progress(t.value, t.max)),
        None => "-".to_string(),
    }
}

/// Effect modes in their config spelling
fn mode<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

pub fn format_spec(spec: &RenderSpec) -> String {
    let a = &spec.attributes;
    let charges = a.charges.map_or_else(|| "-".to_string(), |c| c.to_string());
    format!(
        concat!(
            "[{}] {} @ {} icon={} size={} timer={} charges={} ",
            "glow={} spinner={} greyscale={} darken={}",
        ),
        spec.node_id,
        spec.name,
        spec.position,
        a.icon_id,
        a.size,
        format_timer(a.timer.as_ref()),
        charges,
        mode(&a.glow),
        mode(&a.spinner),
        mode(&a.greyscale),
        mode(&a.darken),
    )
}

/// Job, role and level of the frame's player, e.g. `Astrologian/Healer lv90`
pub fn format_player(job: Option<JobId>, level: u32) -> String {
    let Some(job) = job else {
        return "no player".to_string();
    };
    let name = job_name(job).map_or_else(|| format!("job {}", job), str::to_string);
    match job_role(job) {
        Some(role) => format!("{}/{} lv{}", name, role.label(), level),
        None => format!("{} lv{}", name, level),
    }
}

/// Human-readable block for one frame
pub fn format_frame(frame: usize, player: &str, outcome: &FrameOutcome) -> String {
    let mut out = String::new();
    match outcome {
        FrameOutcome::Suppressed(reason) => {
            let _ = writeln!(out, "frame {} [{}]: suppressed ({})", frame, player, reason);
        }
        FrameOutcome::Rendered(specs) => {
            let _ = writeln!(out, "frame {} [{}]: {} indicator(s)", frame, player, specs.len());
            for spec in specs {
                let _ = writeln!(out, "  {}", format_spec(spec));
            }
        }
    }
    out
}
