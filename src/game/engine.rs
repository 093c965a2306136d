use super::{
    config::{MIN_TICK_MS, TICK_DECAY_PERCENT, WIN_LENGTH},
    random::RandomSource,
    state::{Cell, CollisionType, GameState, Snake},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What a step did to the life in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The snake moved and the life goes on
    Continue,
    /// The snake hit a wall or itself; the snake was left untouched
    Dead,
    /// The snake reached the win length
    Won,
    /// The state was not alive, nothing happened
    Halted,
}

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub transition: Transition,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn dead(collision_type: CollisionType) -> Self {
        Self {
            transition: Transition::Dead,
            info: StepInfo {
                ate_food: false,
                collision_type: Some(collision_type),
            },
        }
    }
}

/// Owns the random source and applies the movement rules to a `GameState`
pub struct GameEngine<R = StdRng> {
    rng: R,
}

impl GameEngine<StdRng> {
    /// Engine with a seeded generator, or an entropy-seeded one
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create a new game engine drawing food positions from `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A fresh life: initial snake heading right, new food, starting speed
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::initial();
        // The initial snake leaves most of the grid free
        let food = self.spawn_food_avoid_snake(&snake).unwrap_or(Cell::ORIGIN);
        let state = GameState::new(food);
        tracing::debug!(food = ?state.food, "game reset");
        state
    }

    /// Advance the snake one cell
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.alive {
            return StepResult {
                transition: Transition::Halted,
                info: StepInfo {
                    ate_food: false,
                    collision_type: None,
                },
            };
        }

        let Some(new_head) = state.snake.head().neighbor(state.direction) else {
            state.alive = false;
            return StepResult::dead(CollisionType::Wall);
        };

        if state.snake.contains(new_head) {
            state.alive = false;
            return StepResult::dead(CollisionType::SelfCollision);
        }

        state.snake.push_front(new_head);

        let ate_food = new_head == state.food;
        if ate_food {
            state.growth_pending += 1;
            // Below the win length the board always has free cells
            if let Some(food) = self.spawn_food_avoid_snake(&state.snake) {
                state.food = food;
            }
            state.tick_interval_ms = next_tick_interval(state.tick_interval_ms);
            tracing::debug!(
                length = state.snake.len(),
                tick_ms = state.tick_interval_ms,
                food = ?state.food,
                "food eaten"
            );
        }

        if state.growth_pending > 0 {
            state.growth_pending -= 1;
        } else {
            state.snake.pop_back();
        }

        let info = StepInfo {
            ate_food,
            collision_type: None,
        };

        if !state.won && state.snake.len() >= WIN_LENGTH {
            state.won = true;
            state.alive = false;
            return StepResult {
                transition: Transition::Won,
                info,
            };
        }

        state.blink_phase = !state.blink_phase;

        StepResult {
            transition: Transition::Continue,
            info,
        }
    }

    /// Pick a cell uniformly among those not covered by `snake`
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Option<Cell> {
        let free = Cell::all().filter(|cell| !snake.contains(*cell)).count();
        if free == 0 {
            return None;
        }
        let pick = self.rng.uniform_int(0, free as i32 - 1) as usize;
        Cell::all().filter(|cell| !snake.contains(*cell)).nth(pick)
    }
}

/// Tick interval after eating: 80% of the current one, floored at the minimum
pub fn next_tick_interval(current_ms: u32) -> u32 {
    (current_ms * TICK_DECAY_PERCENT / 100).max(MIN_TICK_MS)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::game::{Direction, Turn};
    use rand::Rng;
    use rand::rngs::StdRng;

    /// Always draws the lowest value, so food lands on the first free cell
    pub(crate) struct LowestDraw;

    impl RandomSource for LowestDraw {
        fn uniform_int(&mut self, low: i32, _high: i32) -> i32 {
            low
        }
    }

    fn cell(x: i32, y: i32) -> Cell {
        Cell::new(x, y).unwrap()
    }

    fn snake(cells: &[(i32, i32)]) -> Snake {
        let cells: Vec<Cell> = cells.iter().map(|&(x, y)| cell(x, y)).collect();
        Snake::from_cells(&cells).unwrap()
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(LowestDraw);
        let state = engine.reset();

        assert!(state.alive);
        assert!(!state.won);
        assert_eq!(state.snake, Snake::initial());
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.tick_interval_ms, 700);
        assert_eq!(state.food, cell(0, 0));
    }

    #[test]
    fn test_reset_food_never_on_snake() {
        let mut engine = GameEngine::from_seed(Some(3));
        for _ in 0..200 {
            let state = engine.reset();
            assert!(!state.snake.contains(state.food));
        }
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();

        let result = engine.step(&mut state);

        assert_eq!(result.transition, Transition::Continue);
        assert!(!result.info.ate_food);
        assert_eq!(state.snake, snake(&[(3, 2), (2, 2), (1, 2)]));
        assert!(state.blink_phase);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();
        state.food = cell(3, 2);

        let result = engine.step(&mut state);

        assert!(result.info.ate_food);
        assert_eq!(state.snake, snake(&[(3, 2), (2, 2), (1, 2), (0, 2)]));
        assert_eq!(state.growth_pending, 0);
        assert_eq!(state.tick_interval_ms, 560);
        assert!(!state.snake.contains(state.food));
        assert_eq!(state.food, cell(0, 0));
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();
        state.snake = snake(&[(4, 2), (3, 2), (2, 2)]);
        let before = state.snake.clone();

        let result = engine.step(&mut state);

        assert_eq!(result.transition, Transition::Dead);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert!(!state.alive);
        assert_eq!(state.snake, before);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();
        // Heading right from (2,2) runs into (3,2) in the middle of the body
        state.snake = snake(&[(2, 2), (2, 3), (3, 3), (3, 2), (3, 1)]);
        let before = state.snake.clone();

        let result = engine.step(&mut state);

        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
        assert!(!state.alive);
        assert_eq!(state.snake, before);
    }

    #[test]
    fn test_tail_counts_as_collision() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();
        state.snake = snake(&[(2, 2), (2, 3), (3, 3), (3, 2)]);

        let result = engine.step(&mut state);

        assert_eq!(result.transition, Transition::Dead);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_double_turn_accumulates() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();

        state.turn(Turn::Right);
        state.turn(Turn::Right);
        assert_eq!(state.direction, Direction::Left);

        // Right + 2 = Left, straight back into the neck at (1,2)
        let result = engine.step(&mut state);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_latest_heading_wins() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();

        state.turn(Turn::Left);
        state.turn(Turn::Right);
        state.turn(Turn::Right);
        engine.step(&mut state);

        assert_eq!(state.direction, Direction::Down);
        assert_eq!(state.snake.head(), cell(2, 3));
    }

    #[test]
    fn test_tick_interval_saturates() {
        let mut ms = 700;
        let mut seen = vec![ms];
        for _ in 0..6 {
            ms = next_tick_interval(ms);
            seen.push(ms);
        }
        assert_eq!(seen, vec![700, 560, 448, 358, 300, 300, 300]);
    }

    #[test]
    fn test_win_fires_once() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();
        state.snake = snake(&[
            (3, 0),
            (2, 0),
            (1, 0),
            (0, 0),
            (0, 1),
            (1, 1),
            (2, 1),
            (3, 1),
        ]);
        state.food = cell(4, 0);

        let result = engine.step(&mut state);

        assert_eq!(result.transition, Transition::Won);
        assert!(result.info.ate_food);
        assert!(state.won);
        assert!(!state.alive);
        assert_eq!(state.snake.len(), 9);

        let again = engine.step(&mut state);
        assert_eq!(again.transition, Transition::Halted);
    }

    #[test]
    fn test_won_flag_blocks_retrigger() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();
        state.snake = snake(&[
            (0, 0),
            (0, 1),
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 1),
            (4, 2),
            (3, 2),
            (2, 2),
        ]);
        state.direction = Direction::Right;
        state.food = cell(4, 4);
        state.won = true;

        let result = engine.step(&mut state);

        assert_eq!(result.transition, Transition::Continue);
        assert!(state.alive);
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = GameEngine::new(LowestDraw);
        let mut state = engine.reset();
        state.alive = false;
        let before = state.clone();

        let result = engine.step(&mut state);

        assert_eq!(result.transition, Transition::Halted);
        assert_eq!(state, before);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut driver = StdRng::seed_from_u64(42);
        for seed in 0..40 {
            let mut engine = GameEngine::from_seed(Some(seed));
            let mut state = engine.reset();
            for _ in 0..300 {
                match driver.gen_range(0..4) {
                    0 => state.turn(Turn::Left),
                    1 => state.turn(Turn::Right),
                    _ => {}
                }
                let before_ms = state.tick_interval_ms;
                let result = engine.step(&mut state);

                let cells = state.snake.as_slice();
                for (i, a) in cells.iter().enumerate() {
                    assert!(!cells[i + 1..].contains(a), "snake overlaps itself");
                }
                assert!(!state.snake.contains(state.food), "food under snake");
                assert!(state.tick_interval_ms <= before_ms);
                assert!(state.tick_interval_ms >= MIN_TICK_MS);
                assert!(state.snake.len() >= 3);

                match result.transition {
                    Transition::Continue => {}
                    Transition::Won => {
                        assert!(state.won);
                        assert_eq!(engine.step(&mut state).transition, Transition::Halted);
                        state = engine.reset();
                    }
                    Transition::Dead | Transition::Halted => state = engine.reset(),
                }
            }
        }
    }
}
