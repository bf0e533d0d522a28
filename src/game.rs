use alloc::string::String;

use log::{info, warn};

use crate::{
    common::{BoardError, ShotOutcome},
    player::{Player, Seat},
    protocol::{Event, Input, Screen},
};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// First seat places its fleet.
    SetupPlayer1,
    /// Device goes to the second seat.
    HandoffA,
    /// Second seat places its fleet.
    SetupPlayer2,
    /// Device goes back to the first seat.
    HandoffB,
    /// `shooter` fires at the other seat's board.
    Shooting { shooter: Seat },
    /// Terminal; `winner` fired the last shot.
    GameOver { winner: Seat },
}

/// Hot-seat game loop for two players sharing one input and one screen.
pub struct GameController<I, S> {
    input: I,
    screen: S,
    players: [Player; 2],
    phase: Phase,
    shots: usize,
}

impl<I, S> GameController<I, S>
where
    I: Input,
    S: Screen,
{
    /// Create a game with the default player names.
    pub fn new(input: I, screen: S) -> Self {
        Self::with_names(input, screen, "Player 1", "Player 2")
    }

    pub fn with_names(
        input: I,
        screen: S,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            input,
            screen,
            players: [
                Player::new(Seat::First, first),
                Player::new(Seat::Second, second),
            ],
            phase: Phase::SetupPlayer1,
            shots: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winning seat once the game is over.
    pub fn winner(&self) -> Option<Seat> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Shots resolved so far, both seats together. Refused targets do not
    /// count.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn into_parts(self) -> (I, S) {
        (self.input, self.screen)
    }

    /// Advance by one unit of play: a whole fleet placement, a handoff, or
    /// one resolved shot together with the handoff that follows it.
    pub fn step(&mut self) -> Result<Phase, I::Error> {
        let next = match self.phase {
            Phase::SetupPlayer1 => {
                self.players[0].place_fleet(&mut self.input, &mut self.screen)?;
                Phase::HandoffA
            }
            Phase::HandoffA => {
                self.handoff()?;
                Phase::SetupPlayer2
            }
            Phase::SetupPlayer2 => {
                self.players[1].place_fleet(&mut self.input, &mut self.screen)?;
                Phase::HandoffB
            }
            Phase::HandoffB => {
                self.handoff()?;
                info!("both fleets placed, shooting begins");
                self.screen.show(Event::BattleStarted);
                Phase::Shooting {
                    shooter: Seat::First,
                }
            }
            Phase::Shooting { shooter } => self.shoot(shooter)?,
            over @ Phase::GameOver { .. } => over,
        };
        self.phase = next;
        Ok(next)
    }

    /// Step until the game is over and return the winner.
    pub fn run(&mut self) -> Result<Seat, I::Error> {
        loop {
            if let Phase::GameOver { winner } = self.step()? {
                return Ok(winner);
            }
        }
    }

    fn handoff(&mut self) -> Result<(), I::Error> {
        self.screen.show(Event::HandoffRequested);
        self.input.acknowledge()
    }

    fn shoot(&mut self, shooter: Seat) -> Result<Phase, I::Error> {
        let [first, second] = &mut self.players;
        let (current, waiting) = match shooter {
            Seat::First => (first, second),
            Seat::Second => (second, first),
        };
        self.screen.show(Event::TurnStarted {
            seat: shooter,
            player: current.name().into(),
            enemy: waiting.board().render_fog_of_war(),
            own: current.board().render_full(),
        });

        let (target, outcome) = loop {
            let target = self.input.read_shot()?;
            if !waiting.board().is_valid_shot_target(target) {
                warn!("{}: shot at {} refused", current.name(), target);
                self.screen.show(Event::Rejected(BoardError::InvalidShotBounds));
                continue;
            }
            match waiting.receive_shot(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => self.screen.show(Event::Rejected(err)),
            }
        };
        self.shots += 1;
        self.screen.show(Event::ShotResolved { target, outcome });

        if outcome == ShotOutcome::AllSunk {
            info!("{} wins after {} shots", current.name(), self.shots);
            self.screen.show(Event::GameOver {
                seat: shooter,
                winner: current.name().into(),
            });
            return Ok(Phase::GameOver { winner: shooter });
        }
        self.handoff()?;
        Ok(Phase::Shooting {
            shooter: shooter.other(),
        })
    }
}
