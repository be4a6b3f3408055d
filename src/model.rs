//! Core game model for the Reaction Speed Test.
//! Pure state + transition function; all browser wiring lives in the
//! components so this module can be tested without a DOM.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fixed keyboard mapping; every other key identifier is "no direction".
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Ready,
    Playing,
    Finished,
}

/// One round in flight: the revealed direction and when it was revealed.
/// Present iff the game is in `Phase::Playing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trial {
    pub direction: Direction,
    pub start_time_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub trial: Option<Trial>,
    /// Outcome of the last finished round (valid only when `error` is false).
    pub reaction_time_ms: u32,
    pub error: bool,
    /// Successful reaction times in chronological order. Append-only.
    pub scores: Vec<u32>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Waiting,
            trial: None,
            reaction_time_ms: 0,
            error: false,
            scores: Vec::new(),
        }
    }

    /// Running average in ms, rounded to nearest; 0 with no attempts.
    pub fn average_ms(&self) -> u32 {
        if self.scores.is_empty() {
            return 0;
        }
        let sum: u64 = self.scores.iter().map(|&s| s as u64).sum();
        (sum as f64 / self.scores.len() as f64).round() as u32
    }

    pub fn attempts(&self) -> usize {
        self.scores.len()
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// "Start Game" / "Play Again" — both buttons dispatch this.
    Start,
    /// The trial clock fired: reveal a direction and open the response window.
    TrialBegin { direction: Direction, now_ms: f64 },
    /// A keydown reached the window listener.
    KeyPress { key: String, now_ms: f64 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Start => {
                // Only meaningful before a run or after one finished; the
                // clock is already armed in Ready and a round is live in
                // Playing, so those ignore it.
                if !matches!(new.phase, Phase::Waiting | Phase::Finished) {
                    return self;
                }
                new.phase = Phase::Ready;
                new.error = false;
            }
            TrialBegin { direction, now_ms } => {
                // Guards against a stale timer fire after a phase change.
                if new.phase != Phase::Ready {
                    return self;
                }
                new.phase = Phase::Playing;
                new.trial = Some(Trial {
                    direction,
                    start_time_ms: now_ms,
                });
            }
            KeyPress { key, now_ms } => {
                if new.phase != Phase::Playing {
                    return self;
                }
                let Some(trial) = new.trial else {
                    return self;
                };
                if Direction::from_key(&key) == Some(trial.direction) {
                    let elapsed = (now_ms - trial.start_time_ms).round().max(0.0) as u32;
                    new.reaction_time_ms = elapsed;
                    new.scores.push(elapsed);
                } else {
                    // Wrong arrow and non-arrow keys end the round the same way.
                    new.error = true;
                }
                new.trial = None;
                new.phase = Phase::Finished;
            }
        }
        Rc::new(new)
    }
}
