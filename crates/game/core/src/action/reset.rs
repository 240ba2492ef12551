use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::error::NeverError;
use crate::state::GameState;

/// Replaces the whole state with the starting world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetAction;

impl ActionTransition for ResetAction {
    type Error = NeverError;
    type Result = ();

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        *state = GameState::initial(config);
        Ok(())
    }
}
