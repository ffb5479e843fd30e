//! Experience and leveling.
//!
//! Experience accumulates below [`EXP_PER_LEVEL`]. Reaching it grants
//! exactly one level and resets experience to zero; any excess is
//! discarded, so `exp` is never observed at or above the threshold.

use crate::stat::PetStat;
use crate::state::PetState;
use tracing::info;

/// Experience needed to gain a level.
pub const EXP_PER_LEVEL: i64 = 50;

/// Add `amount` experience, leveling up when the threshold is reached.
///
/// Returns the new level if a level-up happened. `amount` always comes
/// from an [`ActionEffect`](crate::ActionEffect), which is never negative.
pub(crate) fn gain_exp(state: &mut PetState, amount: i64) -> Option<i64> {
    state.add(PetStat::Exp, amount);
    if state.exp() < EXP_PER_LEVEL {
        return None;
    }

    state.set(PetStat::Exp, 0);
    state.add(PetStat::Level, 1);
    let level = state.level();
    info!(pet = state.name(), level, "Level up");
    Some(level)
}
