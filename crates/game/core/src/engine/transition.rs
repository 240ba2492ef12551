//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::config::GameConfig;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Executes an action through the transition pipeline and returns ActionResult.
///
/// This is the internal implementation used by GameEngine::execute().
/// Routes each action type to its transition and wraps the result in ActionResult.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Move(transition) => {
            let (from, to) =
                drive_transition(transition, state, config).map_err(ExecuteError::Move)?;
            Ok(ActionResult::Moved { from, to })
        }
        Action::Pickup(transition) => {
            let item =
                drive_transition(transition, state, config).map_err(ExecuteError::Pickup)?;
            Ok(ActionResult::PickedUp { item })
        }
        Action::UseItem(transition) => {
            let outcome =
                drive_transition(transition, state, config).map_err(ExecuteError::UseItem)?;
            Ok(ActionResult::Used {
                item: transition.item.clone(),
                outcome,
            })
        }
        Action::Interact(transition) => {
            let is_active =
                drive_transition(transition, state, config).map_err(ExecuteError::Interact)?;
            Ok(ActionResult::Interacted {
                target: transition.target.clone(),
                is_active,
            })
        }
        Action::Reset(transition) => {
            drive_transition(transition, state, config)
                .map_err(|e| -> ExecuteError { match e.error {} })?;
            Ok(ActionResult::Reset)
        }
    }
}
