//! Pop a sheet of virtual bubble wrap, one bubble per turn.

use crate::config::BubbleWrapConfig;
use crate::random::RandomSource;
use crate::session::{Game, Pacing, Turn, TurnInput};

const BANNER: &str = "Bubble Wrap Simulator 🫧";
const PROMPT: &str = "Press Enter to pop...";
const CONCLUSION: &str = "All bubbles popped. You win nothing, but feel better.";

/// One bubble on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Intact,
    Popped,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Intact => 'O',
            Cell::Popped => 'X',
        }
    }
}

/// Session state: a fixed-size sheet of bubbles
#[derive(Debug, Clone)]
pub struct BubbleWrap {
    cells: Vec<Cell>,
}

/// Pop a uniformly chosen intact cell, returning its index.
///
/// Returns `None` when no intact cell remains; popped cells are never
/// chosen again.
pub fn pop_random(cells: &mut [Cell], rng: &dyn RandomSource) -> Option<usize> {
    let intact: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == Cell::Intact)
        .map(|(i, _)| i)
        .collect();
    if intact.is_empty() {
        return None;
    }
    let index = intact[rng.pick_index(intact.len())];
    cells[index] = Cell::Popped;
    Some(index)
}

/// Termination predicate: every cell on the sheet is popped
pub fn all_popped(cells: &[Cell]) -> bool {
    cells.iter().all(|c| *c == Cell::Popped)
}

fn sheet_line(cells: &[Cell]) -> String {
    let symbols: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
    symbols.join(" ")
}

impl BubbleWrap {
    /// Create a fresh sheet from the given settings
    pub fn new(config: &BubbleWrapConfig) -> Self {
        Self {
            cells: vec![Cell::Intact; config.bubbles],
        }
    }

    /// Number of cells still intact
    pub fn intact_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Intact).count()
    }
}

impl Game for BubbleWrap {
    fn banner(&self) -> Option<&str> {
        Some(BANNER)
    }

    fn pacing(&self) -> Pacing {
        Pacing::Prompted(PROMPT)
    }

    fn step(&mut self, _input: &TurnInput, rng: &dyn RandomSource) -> Turn {
        pop_random(&mut self.cells, rng);
        let narration = vec![sheet_line(&self.cells)];
        if all_popped(&self.cells) {
            Turn::finished(narration, CONCLUSION)
        } else {
            Turn::running(narration)
        }
    }
}
