use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, GameState};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractError {
    #[error("environment object {0} not found")]
    UnknownObject(EntityId),

    #[error("environment object {target} of type {kind} cannot be interacted with")]
    UnsupportedType { target: EntityId, kind: String },
}

impl GameError for InteractError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            InteractError::UnknownObject(_) => "INTERACT_UNKNOWN_OBJECT",
            InteractError::UnsupportedType { .. } => "INTERACT_UNSUPPORTED_TYPE",
        }
    }
}

/// Toggles a prop: doors open and close, switches turn on and off.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractAction {
    pub target: EntityId,
}

impl InteractAction {
    pub fn new(target: impl Into<EntityId>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl ActionTransition for InteractAction {
    type Error = InteractError;
    /// New activation state of the prop.
    type Result = bool;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let prop = state
            .prop(&self.target)
            .ok_or_else(|| InteractError::UnknownObject(self.target.clone()))?;

        if !prop.kind.is_toggleable() {
            return Err(InteractError::UnsupportedType {
                target: self.target.clone(),
                kind: prop.kind.type_name().to_owned(),
            });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        let prop = state
            .props
            .get_mut(&self.target)
            .ok_or_else(|| InteractError::UnknownObject(self.target.clone()))?;

        prop.is_active = !prop.is_active;
        Ok(prop.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PropKind, PropState};

    fn interact(state: &mut GameState, id: &str) -> Result<bool, InteractError> {
        let config = GameConfig::default();
        let action = InteractAction::new(id);
        action.pre_validate(state, &config)?;
        let result = action.apply(state, &config)?;
        action.post_validate(state, &config)?;
        Ok(result)
    }

    #[test]
    fn door_toggles_open_and_closed() {
        let mut state = GameState::default();

        assert_eq!(interact(&mut state, "d1"), Ok(true));
        assert_eq!(state.prop(&"d1".into()).unwrap().state_label(), "open");

        assert_eq!(interact(&mut state, "d1"), Ok(false));
        assert_eq!(state.prop(&"d1".into()).unwrap().state_label(), "closed");
    }

    #[test]
    fn switch_toggles_on_and_off() {
        let mut state = GameState::default();
        let before = state.clone();

        interact(&mut state, "s1").unwrap();
        assert_eq!(state.prop(&"s1".into()).unwrap().state_label(), "on");

        interact(&mut state, "s1").unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_object_is_rejected() {
        let mut state = GameState::default();

        assert_eq!(
            interact(&mut state, "w9"),
            Err(InteractError::UnknownObject("w9".into()))
        );
    }

    #[test]
    fn scenery_is_unsupported() {
        let mut state = GameState::default();
        state.insert_prop(PropState::new(
            "statue",
            PropKind::Other("statue".to_owned()),
            false,
        ));
        let before = state.clone();

        let err = interact(&mut state, "statue").unwrap_err();

        assert_eq!(err.error_code(), "INTERACT_UNSUPPORTED_TYPE");
        assert_eq!(state, before);
    }
}
