//! Condition evaluation
//!
//! Every test reads the snapshot fresh; nothing is cached across calls
//! except the sticky known-ability memory. Ability and status tests sample
//! state as they go, so a status that gates a node also keeps its duration
//! estimate current.

use auralyte_types::{AbilityId, Condition, ConditionTest, JobId, Role, StatusId};

use crate::game_data::is_role;
use crate::snapshot::StateSnapshot;

use super::EvalContext;
use super::cooldown::compute_cooldown;

/// Evaluate one condition, polarity applied. Unset tests always pass.
pub fn evaluate<S: StateSnapshot + ?Sized>(
    condition: &Condition,
    ctx: &mut EvalContext<'_, S>,
) -> bool {
    let raw = match condition.test {
        ConditionTest::Unset => return true,
        ConditionTest::Job { job } => is_current_job(job, ctx),
        ConditionTest::Role { role } => has_role(role, ctx),
        ConditionTest::AbilityKnown { ability } => is_ability_known(ability, ctx),
        ConditionTest::AbilityOnCooldown { ability } => is_ability_on_cooldown(ability, ctx),
        ConditionTest::StatusActive { status } => is_status_active(status, ctx),
    };
    let result = condition.polarity.apply(raw);
    tracing::trace!(test = ?condition.test, raw, result, "Evaluated condition");
    result
}

/// AND over a gate list, stopping at the first failure
pub fn all_pass<S: StateSnapshot + ?Sized>(
    conditions: &[Condition],
    ctx: &mut EvalContext<'_, S>,
) -> bool {
    conditions.iter().all(|condition| evaluate(condition, ctx))
}

fn is_current_job<S: StateSnapshot + ?Sized>(job: JobId, ctx: &EvalContext<'_, S>) -> bool {
    ctx.snapshot.current_job() == Some(job)
}

fn has_role<S: StateSnapshot + ?Sized>(role: Role, ctx: &EvalContext<'_, S>) -> bool {
    ctx.snapshot
        .current_job()
        .is_some_and(|job| is_role(job, role))
}

fn is_ability_known<S: StateSnapshot + ?Sized>(
    ability: AbilityId,
    ctx: &mut EvalContext<'_, S>,
) -> bool {
    let Some(info) = ctx.ability(ability) else {
        return false;
    };
    let state = ctx.snapshot.ability_state(info.id);
    ctx.known.observe(info.id, state)
}

fn is_ability_on_cooldown<S: StateSnapshot + ?Sized>(
    ability: AbilityId,
    ctx: &mut EvalContext<'_, S>,
) -> bool {
    let Some(info) = ctx.ability(ability) else {
        return false;
    };
    compute_cooldown(info, ctx.snapshot).is_on_cooldown()
}

fn is_status_active<S: StateSnapshot + ?Sized>(
    status: StatusId,
    ctx: &mut EvalContext<'_, S>,
) -> bool {
    if ctx.status(status).is_none() {
        return false;
    }
    ctx.sample_status(status).is_some()
}
