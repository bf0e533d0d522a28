//! Pre-recorded input and in-memory screens, for replays and tests.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::coordinate::Coordinate;
use crate::protocol::{Event, Input, Screen};
use crate::ship::ShipKind;

/// One pre-parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Segment(Coordinate, Coordinate),
    Shot(Coordinate),
    Ack,
}

/// Why a [`ScriptedInput`] could not answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptError {
    /// No commands left.
    Exhausted,
    /// The next command is not the kind of input being asked for.
    Unexpected {
        expected: &'static str,
        found: Command,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Exhausted => write!(f, "script exhausted"),
            ScriptError::Unexpected { expected, found } => {
                write!(f, "expected {}, found {:?}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScriptError {}

/// [`Input`] that answers from a queue of commands.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, begin: Coordinate, end: Coordinate) -> Self {
        self.commands.push_back(Command::Segment(begin, end));
        self
    }

    pub fn shot(mut self, target: Coordinate) -> Self {
        self.commands.push_back(Command::Shot(target));
        self
    }

    pub fn ack(mut self) -> Self {
        self.commands.push_back(Command::Ack);
        self
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Commands not consumed yet.
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }

    fn next(&mut self) -> Result<Command, ScriptError> {
        self.commands.pop_front().ok_or(ScriptError::Exhausted)
    }
}

impl FromIterator<Command> for ScriptedInput {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<Command> for ScriptedInput {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

impl Input for ScriptedInput {
    type Error = ScriptError;

    fn read_segment(&mut self, _kind: ShipKind) -> Result<(Coordinate, Coordinate), ScriptError> {
        match self.next()? {
            Command::Segment(begin, end) => Ok((begin, end)),
            found => Err(ScriptError::Unexpected {
                expected: "segment",
                found,
            }),
        }
    }

    fn read_shot(&mut self) -> Result<Coordinate, ScriptError> {
        match self.next()? {
            Command::Shot(target) => Ok(target),
            found => Err(ScriptError::Unexpected {
                expected: "shot",
                found,
            }),
        }
    }

    fn acknowledge(&mut self) -> Result<(), ScriptError> {
        match self.next()? {
            Command::Ack => Ok(()),
            found => Err(ScriptError::Unexpected {
                expected: "acknowledgment",
                found,
            }),
        }
    }
}

/// [`Screen`] that keeps every event.
#[derive(Debug, Clone, Default)]
pub struct RecordingScreen {
    events: Vec<Event>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Screen for RecordingScreen {
    fn show(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// [`Screen`] that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScreen;

impl Screen for NullScreen {
    fn show(&mut self, _event: Event) {}
}
