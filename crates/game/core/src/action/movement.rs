use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// The target tile is off the map (or the delta overflowed).
    #[error("destination {destination:?} is out of bounds")]
    OutOfBounds { destination: Option<Position> },

    #[error("player position {position} left the map after moving")]
    PositionDesync { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::OutOfBounds { .. } => ErrorSeverity::Validation,
            MoveError::PositionDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            MoveError::PositionDesync { .. } => "MOVE_POSITION_DESYNC",
        }
    }
}

/// Moves the player by `(dx, dy)`.
///
/// Any delta is accepted, including zero and multi-tile jumps; only the
/// destination is checked against the map bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub dx: i32,
    pub dy: i32,
}

impl MoveAction {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Single-tile move in a cardinal direction.
    pub fn step(direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self { dx, dy }
    }

    fn destination_from(&self, origin: Position) -> Option<Position> {
        origin.checked_offset(self.dx, self.dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = (Position, Position);

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        match self.destination_from(state.player.position) {
            Some(destination) if state.contains(destination) => Ok(()),
            destination => Err(MoveError::OutOfBounds { destination }),
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        let origin = state.player.position;
        let destination = self
            .destination_from(origin)
            .ok_or(MoveError::OutOfBounds { destination: None })?;

        state.player.position = destination;
        Ok((origin, destination))
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let position = state.player.position;
        if state.contains(position) {
            Ok(())
        } else {
            Err(MoveError::PositionDesync { position })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(action: MoveAction, state: &mut GameState) -> Result<(Position, Position), MoveError> {
        let config = GameConfig::default();
        action.pre_validate(state, &config)?;
        let result = action.apply(state, &config)?;
        action.post_validate(state, &config)?;
        Ok(result)
    }

    #[test]
    fn moves_within_bounds() {
        let mut state = GameState::empty(&GameConfig::default());

        let (from, to) = run(MoveAction::new(2, 2), &mut state).unwrap();

        assert_eq!(from, Position::ORIGIN);
        assert_eq!(to, Position::new(2, 2));
        assert_eq!(state.player.position, Position::new(2, 2));
    }

    #[test]
    fn rejects_negative_destination() {
        let mut state = GameState::empty(&GameConfig::default());

        let err = run(MoveAction::new(0, -1), &mut state).unwrap_err();

        assert_eq!(
            err,
            MoveError::OutOfBounds {
                destination: Some(Position::new(0, -1))
            }
        );
        assert_eq!(state.player.position, Position::ORIGIN);
    }

    #[test]
    fn rejects_destination_on_far_edge() {
        let mut state = GameState::empty(&GameConfig::default());
        state.player.position = Position::new(9, 9);

        assert!(run(MoveAction::new(1, 0), &mut state).is_err());
        assert!(run(MoveAction::new(0, 1), &mut state).is_err());
        assert_eq!(state.player.position, Position::new(9, 9));
    }

    #[test]
    fn overflowing_delta_is_out_of_bounds() {
        let mut state = GameState::empty(&GameConfig::default());
        state.player.position = Position::new(5, 5);

        let err = run(MoveAction::new(i32::MAX, 0), &mut state).unwrap_err();

        assert_eq!(err, MoveError::OutOfBounds { destination: None });
        assert_eq!(err.error_code(), "MOVE_OUT_OF_BOUNDS");
    }

    #[test]
    fn zero_delta_is_accepted() {
        let mut state = GameState::empty(&GameConfig::default());

        let (from, to) = run(MoveAction::new(0, 0), &mut state).unwrap();

        assert_eq!(from, to);
    }

    #[test]
    fn cardinal_steps_are_unit_moves() {
        let mut state = GameState::empty(&GameConfig::default());
        state.player.position = Position::new(4, 4);

        for direction in CardinalDirection::ALL {
            let action = MoveAction::step(direction);
            assert_eq!(action.dx.abs() + action.dy.abs(), 1);
        }

        run(MoveAction::step(CardinalDirection::North), &mut state).unwrap();
        run(MoveAction::step(CardinalDirection::East), &mut state).unwrap();
        assert_eq!(state.player.position, Position::new(5, 5));
    }
}
