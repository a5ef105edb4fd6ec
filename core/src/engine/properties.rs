//! Attribute compositing
//!
//! Bundles are visited in order. A bundle whose gate fails is skipped; every
//! attribute of a passing bundle is offered to the slot it writes, and a slot
//! keeps the first value it receives. Slots are independent: a later bundle
//! can still fill the size after an earlier one has set the icon.

use serde::Serialize;

use auralyte_types::{
    Attribute, AttributeBundle, AttributeChannel, DarkenMode, EffectSetting, GlowMode,
    GreyscaleMode, IconId, SpinnerMode, TimerKind, TimerSource,
};

use crate::game_data::{DEFAULT_SIZE, MISSING_ICON_ID};
use crate::snapshot::StateSnapshot;

use super::EvalContext;
use super::conditions::all_pass;
use super::cooldown::compute_cooldown;

/// Progress of the timer drawn on an indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimerReading {
    pub kind: TimerKind,
    /// Seconds elapsed
    pub value: f32,
    /// Seconds at completion, `None` when there is nothing to draw
    pub max: Option<f32>,
}

impl TimerReading {
    /// Fraction complete in `0.0..=1.0`, `None` without a max
    pub fn progress(&self) -> Option<f32> {
        self.max
            .filter(|max| *max > 0.0)
            .map(|max| (self.value / max).clamp(0.0, 1.0))
    }
}

/// Per-channel accumulator, every slot starts empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSlots {
    pub icon_id: Option<IconId>,
    pub size: Option<u32>,
    pub timer: Option<TimerReading>,
    pub charges: Option<u32>,
    pub glow: Option<GlowMode>,
    pub spinner: Option<SpinnerMode>,
    pub greyscale: Option<GreyscaleMode>,
    pub darken: Option<DarkenMode>,
}

impl AttributeSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, channel: AttributeChannel) -> bool {
        match channel {
            AttributeChannel::Icon => self.icon_id.is_some(),
            AttributeChannel::Size => self.size.is_some(),
            AttributeChannel::Timer => self.timer.is_some(),
            AttributeChannel::Glow => self.glow.is_some(),
            AttributeChannel::Spinner => self.spinner.is_some(),
            AttributeChannel::Greyscale => self.greyscale.is_some(),
            AttributeChannel::Darken => self.darken.is_some(),
        }
    }

    /// Offer one attribute. Returns true if it claimed its slot.
    ///
    /// An attribute whose slot is already filled is not evaluated at all, so
    /// a shadowed Buff timer does not sample its status.
    pub fn offer<S: StateSnapshot + ?Sized>(
        &mut self,
        attribute: &Attribute,
        ctx: &mut EvalContext<'_, S>,
    ) -> bool {
        let Some(channel) = attribute.channel() else {
            return false;
        };
        if self.is_set(channel) {
            return false;
        }

        match attribute {
            Attribute::Unset => false,
            Attribute::Icon { ability } => {
                self.icon_id = ctx.ability(*ability).map(|info| info.icon);
                self.icon_id.is_some()
            }
            Attribute::Size { pixels } => {
                self.size = Some(*pixels);
                true
            }
            Attribute::Timer { source } => self.offer_timer(source, ctx),
            Attribute::Effect { effect } => {
                match *effect {
                    EffectSetting::Glow(mode) => self.glow = Some(mode),
                    EffectSetting::Spinner(mode) => self.spinner = Some(mode),
                    EffectSetting::Greyscale(mode) => self.greyscale = Some(mode),
                    EffectSetting::Darken(mode) => self.darken = Some(mode),
                }
                true
            }
        }
    }

    fn offer_timer<S: StateSnapshot + ?Sized>(
        &mut self,
        source: &TimerSource,
        ctx: &mut EvalContext<'_, S>,
    ) -> bool {
        let reading = match *source {
            TimerSource::Cooldown { ability } => ctx.ability(ability).map(|info| {
                let cooldown = compute_cooldown(info, ctx.snapshot);
                TimerReading {
                    kind: TimerKind::Cooldown,
                    value: cooldown.elapsed,
                    max: cooldown.total,
                }
            }),
            TimerSource::ChargeCooldown { ability } => ctx.ability(ability).map(|info| {
                let cooldown = compute_cooldown(info, ctx.snapshot);
                // The charge slot travels with the timer that computed it
                self.charges = cooldown.charges;
                let kind = match cooldown.charges {
                    Some(charges) if charges > 0 => TimerKind::ChargeCooldown,
                    _ => TimerKind::Cooldown,
                };
                TimerReading {
                    kind,
                    value: cooldown.per_charge_elapsed(),
                    max: cooldown.per_charge_max(),
                }
            }),
            TimerSource::Buff { status } => {
                if ctx.status(status).is_none() {
                    None
                } else {
                    ctx.sample_status(status).map(|_| {
                        let max = ctx.durations.estimated_maximum(status);
                        TimerReading {
                            kind: TimerKind::Buff,
                            value: ctx.durations.elapsed(status),
                            max: (max > 0.0).then_some(max),
                        }
                    })
                }
            }
        };

        self.timer = reading;
        reading.is_some()
    }

    /// Apply defaults to every unset slot
    pub fn finish(self) -> ResolvedAttributes {
        ResolvedAttributes {
            icon_id: self.icon_id.unwrap_or(MISSING_ICON_ID),
            size: self.size.unwrap_or(DEFAULT_SIZE),
            timer: self.timer,
            charges: self.charges,
            glow: self.glow.unwrap_or_default(),
            spinner: self.spinner.unwrap_or_default(),
            greyscale: self.greyscale.unwrap_or_default(),
            darken: self.darken.unwrap_or_default(),
        }
    }
}

/// Final attribute values of one indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAttributes {
    pub icon_id: IconId,
    pub size: u32,
    pub timer: Option<TimerReading>,
    pub charges: Option<u32>,
    pub glow: GlowMode,
    pub spinner: SpinnerMode,
    pub greyscale: GreyscaleMode,
    pub darken: DarkenMode,
}

impl Default for ResolvedAttributes {
    fn default() -> Self {
        AttributeSlots::default().finish()
    }
}

/// Resolve an indicator's bundles into concrete attributes
pub fn resolve_bundles<S: StateSnapshot + ?Sized>(
    bundles: &[AttributeBundle],
    ctx: &mut EvalContext<'_, S>,
) -> ResolvedAttributes {
    let mut slots = AttributeSlots::new();

    for bundle in bundles {
        if !all_pass(&bundle.conditions, ctx) {
            tracing::trace!(bundle = bundle.id, "Bundle gate failed");
            continue;
        }
        for attribute in &bundle.attributes {
            slots.offer(attribute, ctx);
        }
    }

    slots.finish()
}
