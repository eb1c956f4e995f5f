//! Data model consumed by the presentation layer: the board the grid is
//! painted from, the player the sprite tracks, and the dice commands the
//! game loop hands to the UI.

use serde::{Deserialize, Serialize};

use crate::state::GridGeometry;

/// Facing of the player sprite. The declaration order matches the sprite
/// filename suffixes and the wire form (0=up, 1=right, 2=down, 3=left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub row: u32,
    pub column: u32,
}

/// Terrain classification of a board cell; `css_class` is the class painted
/// onto the cell's tile element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Floor,
    Pit,
    Conveyor,
    Wall,
}

impl Terrain {
    pub fn css_class(self) -> &'static str {
        match self {
            Terrain::Floor => "floor",
            Terrain::Pit => "pit",
            Terrain::Conveyor => "conveyor",
            Terrain::Wall => "wall",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCell {
    pub terrain: Terrain,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameBoard {
    rows: u32,
    columns: u32,
    /// Row-major cells; length = rows * columns.
    cells: Vec<BoardCell>,
    pub flag_location: Location,
}

impl GameBoard {
    /// An all-floor board with the flag at the given location.
    pub fn new(rows: u32, columns: u32, flag_location: Location) -> Self {
        let cells = vec![
            BoardCell {
                terrain: Terrain::Floor
            };
            (rows * columns) as usize
        ];
        Self {
            rows,
            columns,
            cells,
            flag_location,
        }
    }

    /// Demo map: mostly floor with scattered pits, conveyors and walls.
    /// The start corner and the flag cell always stay walkable.
    pub fn sample() -> Self {
        let flag = Location { row: 4, column: 6 };
        let mut board = Self::new(6, 8, flag);
        for row in 0..board.rows {
            for column in 0..board.columns {
                if (row, column) == (0, 0) || (row, column) == (flag.row, flag.column) {
                    continue;
                }
                let r = js_sys::Math::random();
                let terrain = if r < 0.08 {
                    Terrain::Pit
                } else if r < 0.16 {
                    Terrain::Conveyor
                } else if r < 0.20 {
                    Terrain::Wall
                } else {
                    Terrain::Floor
                };
                board.set_terrain(Location { row, column }, terrain);
            }
        }
        board
    }

    pub fn dimension(&self) -> GridGeometry {
        GridGeometry {
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn cell(&self, row: u32, column: u32) -> &BoardCell {
        &self.cells[(row * self.columns + column) as usize]
    }

    pub fn set_terrain(&mut self, location: Location, terrain: Terrain) {
        let index = (location.row * self.columns + location.column) as usize;
        if let Some(cell) = self.cells.get_mut(index) {
            cell.terrain = terrain;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub location: Location,
    pub facing_direction: Direction,
    /// Sprite family name; the facing suffix is appended when the image
    /// path is derived.
    pub sprite: String,
    pub lifes: u32,
}

/// One dice command; `name` doubles as the icon-pool key and as the icon
/// filename stem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
}

impl Command {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The faces a dice roll can land on.
    pub fn catalog() -> Vec<Command> {
        ["forward", "backward", "turn-left", "turn-right"]
            .iter()
            .map(|name| Command::new(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_index_form_matches_declaration_order() {
        assert_eq!(Direction::from_index(0), Some(Direction::Up));
        assert_eq!(Direction::from_index(1), Some(Direction::Right));
        assert_eq!(Direction::from_index(2), Some(Direction::Down));
        assert_eq!(Direction::from_index(3), Some(Direction::Left));
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn direction_names_match_sprite_suffixes() {
        let names: Vec<&str> = Direction::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, ["up", "right", "down", "left"]);
    }

    #[test]
    fn new_board_is_all_floor() {
        let board = GameBoard::new(3, 4, Location { row: 1, column: 2 });
        assert_eq!(board.dimension(), GridGeometry { rows: 3, columns: 4 });
        for row in 0..3 {
            for column in 0..4 {
                assert_eq!(board.cell(row, column).terrain, Terrain::Floor);
            }
        }
    }

    #[test]
    fn set_terrain_updates_the_addressed_cell_only() {
        let mut board = GameBoard::new(2, 2, Location { row: 0, column: 0 });
        board.set_terrain(Location { row: 1, column: 0 }, Terrain::Pit);
        assert_eq!(board.cell(1, 0).terrain, Terrain::Pit);
        assert_eq!(board.cell(0, 0).terrain, Terrain::Floor);
        assert_eq!(board.cell(1, 1).terrain, Terrain::Floor);
    }

    #[test]
    fn set_terrain_out_of_range_is_ignored() {
        let mut board = GameBoard::new(2, 2, Location { row: 0, column: 0 });
        board.set_terrain(Location { row: 7, column: 7 }, Terrain::Wall);
        assert!(
            (0..2).all(|row| (0..2).all(|col| board.cell(row, col).terrain == Terrain::Floor))
        );
    }

    #[test]
    fn command_catalog_names_are_icon_keys() {
        let names: Vec<String> = Command::catalog().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["forward", "backward", "turn-left", "turn-right"]);
    }
}
