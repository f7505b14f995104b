use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::GoError;
use crate::ko::Ko;
use crate::stone::Stone;
use crate::{BOARD_SIZE, Point};

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Stones captured, indexed by the color that captured them.
///
/// `black` counts White stones removed by Black and `white` counts Black
/// stones removed by White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub fn total(&self) -> u32 {
        self.black + self.white
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// The 19×19 grid stored row-major as cell values (0, 1, -1), together with
/// capture tallies and the one-step ko marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    board: Vec<i8>,
    captures: Captures,
    ko: Option<Ko>,
}

impl Default for Goban {
    fn default() -> Self {
        Self::new()
    }
}

impl Goban {
    pub fn new() -> Self {
        Goban {
            board: vec![0; CELLS],
            captures: Captures::new(),
            ko: None,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    /// The grid as row vectors, the shape of the wire format.
    pub fn rows(&self) -> Vec<Vec<i8>> {
        self.board
            .chunks(BOARD_SIZE as usize)
            .map(<[i8]>::to_vec)
            .collect()
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> Option<Ko> {
        self.ko
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.board[Self::idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    /// Every empty point, in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| Self::point_of(i))
    }

    // -- Game actions --

    /// Bounds and occupancy checks, the first two placement preconditions.
    pub fn check_vacant(&self, point: Point) -> Result<(), GoError> {
        if !self.on_board(point) {
            return Err(GoError::NotOnBoard);
        }
        if self.stone_at(point).is_some() {
            return Err(GoError::Overwrite);
        }
        Ok(())
    }

    /// Place a stone. Returns a new Goban with the move applied, or an error
    /// and leaves `self` untouched.
    pub fn play(&self, point: Point, stone: Stone) -> Result<Goban, GoError> {
        self.place_stone(point, stone).map(|(goban, _)| goban)
    }

    /// Pass: clears ko in place.
    pub fn pass(&mut self) {
        self.ko = None;
    }

    /// Place a stone, resolve captures, reject suicide and ko retakes.
    /// On success also returns the captured points.
    pub(crate) fn place_stone(
        &self,
        point: Point,
        stone: Stone,
    ) -> Result<(Goban, Vec<Point>), GoError> {
        self.check_vacant(point)?;

        let mut goban = self.clone();
        goban.set_stone(point, stone);

        let mut dead_stones = Vec::new();
        for chain in goban.opponent_neighbor_chains(point) {
            if !goban.chain_has_liberties(&chain) {
                dead_stones.extend(chain);
            }
        }

        // With captures the new stone always gains the vacated liberty, so
        // this only fires when nothing was taken.
        if dead_stones.is_empty() && !goban.has_liberties(point) {
            return Err(GoError::Suicide);
        }

        if self.ko.is_some_and(|ko| ko.forbids(&dead_stones)) {
            return Err(GoError::KoViolation);
        }

        goban.capture_mut(&dead_stones, stone);
        goban.ko = Some(Ko::at(point));

        Ok((goban, dead_stones))
    }

    /// Overwrite the grid, keeping captures and the ko marker.
    pub(crate) fn replace_board(&mut self, board: Vec<i8>) {
        debug_assert_eq!(board.len(), CELLS);
        self.board = board;
    }

    fn capture_mut(&mut self, stones: &[Point], capturing: Stone) {
        for &pt in stones {
            self.clear_stone(pt);
        }
        self.captures.add(capturing, stones.len() as u32);
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < BOARD_SIZE {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < BOARD_SIZE {
            result.push((row, col + 1));
        }
        result
    }

    /// Flood-fill connected group of same-colored stones.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        let mut visited = [false; CELLS];
        self.chain_from(point, &mut visited)
    }

    /// Whether the group containing `point` touches at least one empty
    /// point. Stops at the first liberty found. An empty point has none.
    pub fn has_liberties(&self, point: Point) -> bool {
        let Some(stone) = self.stone_at(point) else {
            return false;
        };

        let mut visited = [false; CELLS];
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = Self::idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            for n in self.neighbors(p) {
                match self.stone_at(n) {
                    None => return true,
                    Some(s) if s == stone => stack.push(n),
                    Some(_) => {}
                }
            }
        }

        false
    }

    fn chain_has_liberties(&self, chain: &[Point]) -> bool {
        chain
            .iter()
            .flat_map(|&p| self.neighbors(p))
            .any(|n| self.stone_at(n).is_none())
    }

    /// Find all opponent chains neighboring a given point.
    fn opponent_neighbor_chains(&self, point: Point) -> Vec<Vec<Point>> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };
        let opponent = stone.opp();

        let mut chains = Vec::new();
        let mut visited = [false; CELLS];

        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(opponent) || visited[Self::idx(n)] {
                continue;
            }
            chains.push(self.chain_from(n, &mut visited));
        }

        chains
    }

    /// Chain flood-fill using a shared visited bitset.
    fn chain_from(&self, point: Point, visited: &mut [bool; CELLS]) -> Vec<Point> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = Self::idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.push(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[Self::idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Internal helpers --

    #[inline]
    fn idx((row, col): Point) -> usize {
        row as usize * BOARD_SIZE as usize + col as usize
    }

    #[inline]
    fn point_of(i: usize) -> Point {
        let n = BOARD_SIZE as usize;
        ((i / n) as u8, (i % n) as u8)
    }

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            self.board[Self::idx(point)] = stone.cell();
        }
    }

    fn clear_stone(&mut self, point: Point) {
        if self.on_board(point) {
            self.board[Self::idx(point)] = 0;
        }
    }
}
