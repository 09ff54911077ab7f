//! Local guard deciding whether a single wall flip keeps corridors thin.

use maze_forge_core::Direction;

use crate::Maze;

/// The four 2x2 blocks that contain a cell, named by where the diagonal lies.
const QUADRANTS: [(Direction, Direction); 4] = [
    (Direction::Up, Direction::Left),
    (Direction::Up, Direction::Right),
    (Direction::Down, Direction::Left),
    (Direction::Down, Direction::Right),
];

/// Orthogonal and diagonal partners of a cell inside one 2x2 block.
#[derive(Clone, Copy, Debug)]
struct Block {
    vertical: usize,
    horizontal: usize,
    diagonal: usize,
}

pub(crate) fn can_toggle(maze: &Maze, pos: usize) -> bool {
    if pos >= maze.size() {
        return false;
    }

    QUADRANTS
        .into_iter()
        .filter_map(|(vertical, horizontal)| block(maze, pos, vertical, horizontal))
        .all(|block| !creates_corner_passage(maze, block) && !encloses(maze, pos, block))
}

fn block(maze: &Maze, pos: usize, vertical: Direction, horizontal: Direction) -> Option<Block> {
    let vertical_pos = maze.neighbor_index(pos, vertical)?;
    let horizontal_pos = maze.neighbor_index(pos, horizontal)?;
    let diagonal = maze.neighbor_index(vertical_pos, horizontal)?;
    Some(Block {
        vertical: vertical_pos,
        horizontal: horizontal_pos,
        diagonal,
    })
}

/// The diagonal disagrees with both orthogonal cells, so one of the two
/// wall states of `pos` leaves a pair joined only at a corner.
fn creates_corner_passage(maze: &Maze, block: Block) -> bool {
    let diagonal = maze.is_wall(block.diagonal);
    diagonal != maze.is_wall(block.vertical) && diagonal != maze.is_wall(block.horizontal)
}

fn encloses(maze: &Maze, pos: usize, block: Block) -> bool {
    maze.is_open(pos)
        && maze.is_wall(block.vertical)
        && maze.is_wall(block.horizontal)
        && maze.is_wall(block.diagonal)
}

#[cfg(test)]
mod tests {
    use crate::Maze;

    fn maze(rows: &[&str]) -> Maze {
        Maze::from_layout(rows).expect("layout parses")
    }

    #[test]
    fn rejects_positions_outside_grid() {
        let maze = Maze::new(2, 2, 0);
        assert!(!maze.can_toggle(4));
        assert!(!maze.can_toggle(usize::MAX));
    }

    #[test]
    fn all_wall_grid_accepts_every_cell() {
        let maze = Maze::new(4, 4, 0);
        assert!((0..16).all(|pos| maze.can_toggle(pos)));
    }

    #[test]
    fn rejects_opening_a_cell_that_only_touches_open_space_diagonally() {
        let maze = maze(&[
            "S##", //
            "###", //
            "###",
        ]);
        assert!(!maze.can_toggle(4), "center would join (0,0) at a corner");
        assert!(maze.can_toggle(1), "orthogonal extension is fine");
    }

    #[test]
    fn rejects_walling_a_cell_that_would_split_an_l_into_corners() {
        let maze = maze(&[
            "S.#", //
            ".##", //
            "###",
        ]);
        assert!(!maze.can_toggle(0), "walling the elbow joins 1 and 3 diagonally");
    }

    #[test]
    fn rejects_walling_an_open_cell_boxed_in_by_its_block() {
        let maze = maze(&[
            "###", //
            "#S#", //
            "###",
        ]);
        assert!(!maze.can_toggle(4));
    }

    #[test]
    fn accepts_extending_a_straight_corridor() {
        let maze = maze(&[
            "S.#", //
            "###", //
            "###",
        ]);
        assert!(maze.can_toggle(2));
    }
}
