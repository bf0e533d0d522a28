#![cfg(feature = "std")]

//! Line-oriented terminal front end: parses typed coordinates and prints
//! boards and messages.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::BoardView,
    common::{BoardError, CellState, ShotOutcome},
    config::BOARD_SIZE,
    coordinate::Coordinate,
    protocol::{Event, Input, Screen},
    ship::ShipKind,
};

const WRONG_COORDINATES: &str = "Error! You entered the wrong coordinates! Try again:";

/// Reads player input line by line. Lines that do not parse are answered on
/// `feedback` and read again.
pub struct LineInput<R, W> {
    reader: R,
    feedback: W,
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Input from the process's stdin, complaints to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, feedback: W) -> Self {
        Self { reader, feedback }
    }

    pub fn into_feedback(self) -> W {
        self.feedback
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }
        Ok(line)
    }

    /// Read lines until one holds exactly `N` coordinate tokens.
    fn read_coordinates<const N: usize>(&mut self) -> io::Result<[Coordinate; N]> {
        loop {
            let line = self.read_line()?;
            match parse_tokens::<N>(&line) {
                Some(coords) => return Ok(coords),
                None => {
                    log::warn!("unparseable input {:?}", line.trim_end());
                    writeln!(self.feedback, "\n{}\n", WRONG_COORDINATES)?;
                    self.feedback.flush()?;
                }
            }
        }
    }
}

/// Prints events as text.
pub struct TextScreen<W> {
    writer: W,
}

impl TextScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextScreen<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) {
        let res = writeln!(self.writer, "{}", text).and_then(|()| self.writer.flush());
        if let Err(e) = res {
            log::error!("failed to write to screen: {}", e);
        }
    }
}

/// Parse exactly `N` whitespace-separated `<Letter><Number>` tokens.
pub fn parse_tokens<const N: usize>(line: &str) -> Option<[Coordinate; N]> {
    let mut tokens = line.split_whitespace();
    let mut coords = [Coordinate::new(0, 0); N];
    for slot in coords.iter_mut() {
        *slot = tokens.next()?.parse().ok()?;
    }
    if tokens.next().is_some() {
        return None;
    }
    Some(coords)
}

fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '~',
        CellState::Occupied => 'o',
        CellState::Hit => 'x',
        CellState::Miss => 'M',
    }
}

/// Text grid for a board snapshot: a column header, then one line per row.
pub fn render(view: &BoardView) -> String {
    let mut out = String::from(" ");
    for c in 1..=BOARD_SIZE {
        let _ = write!(out, " {}", c);
    }
    for (r, row) in view.rows().iter().enumerate() {
        out.push('\n');
        out.push((b'A' + r as u8) as char);
        for cell in row.iter() {
            out.push(' ');
            out.push(symbol(*cell));
        }
    }
    out
}

fn rejection_message(err: BoardError) -> String {
    match err {
        BoardError::InvalidPlacementBounds => "Error! Wrong ship location! Try again:".into(),
        BoardError::InvalidPlacementLength(kind) => {
            format!("Error! Wrong length of the {}! Try again:", kind.name())
        }
        BoardError::InvalidPlacementOverlap => {
            "Error! You placed it too close to another one. Try again:".into()
        }
        BoardError::InvalidShotBounds => WRONG_COORDINATES.into(),
        BoardError::FleetComplete => "Error! All ships are already placed!".into(),
    }
}

fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "You missed. Try again:",
        ShotOutcome::Hit => "You hit a ship! Try again:",
        ShotOutcome::Sunk(_) => "You sank a ship! Specify a new target:",
        ShotOutcome::AllSunk => "You sank the last ship. You won. Congratulations!",
    }
}

impl<W: Write> Screen for TextScreen<W> {
    fn show(&mut self, event: Event) {
        match event {
            Event::PlacementStarted { player, .. } => {
                self.say(&format!("\n{}, place your ships on the game field\n", player));
            }
            Event::PlacementPrompt { kind } => {
                self.say(&format!(
                    "\nEnter the coordinates of the {} ({} cells):\n",
                    kind.name(),
                    kind.length()
                ));
            }
            Event::FleetUpdated { view } => self.say(&render(&view)),
            Event::Rejected(err) => self.say(&format!("\n{}\n", rejection_message(err))),
            Event::HandoffRequested => {
                self.say("\nPress Enter and pass the move to another player\n");
            }
            Event::BattleStarted => self.say("\nTake a shot!"),
            Event::TurnStarted {
                player, enemy, own, ..
            } => {
                self.say(&format!(
                    "\n{}\n---------------------\n{}\n\n{}, it's your turn:\n",
                    render(&enemy),
                    render(&own),
                    player
                ));
            }
            Event::ShotResolved { outcome, .. } => {
                self.say(&format!("\n{}", outcome_message(outcome)));
            }
            Event::GameOver { .. } => {}
        }
    }
}

impl<R: BufRead, W: Write> Input for LineInput<R, W> {
    type Error = io::Error;

    fn read_segment(&mut self, _kind: ShipKind) -> io::Result<(Coordinate, Coordinate)> {
        let [begin, end] = self.read_coordinates::<2>()?;
        Ok((begin, end))
    }

    fn read_shot(&mut self) -> io::Result<Coordinate> {
        let [target] = self.read_coordinates::<1>()?;
        Ok(target)
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        self.read_line().map(|_| ())
    }
}
