use maze_forge_core::RandomSource;
use maze_forge_world::Maze;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn corner_only_blocks(maze: &Maze) -> Vec<usize> {
    let width = maze.width();
    let mut offenders = Vec::new();

    for row in 0..maze.height().saturating_sub(1) {
        for column in 0..width.saturating_sub(1) {
            let top_left = row * width + column;
            let top_right = top_left + 1;
            let bottom_left = top_left + width;
            let bottom_right = bottom_left + 1;

            let falling = maze.is_open(top_left)
                && maze.is_open(bottom_right)
                && maze.is_wall(top_right)
                && maze.is_wall(bottom_left);
            let rising = maze.is_open(top_right)
                && maze.is_open(bottom_left)
                && maze.is_wall(top_left)
                && maze.is_wall(bottom_right);

            if falling || rising {
                offenders.push(top_left);
            }
        }
    }

    offenders
}

#[test]
fn guarded_toggles_never_create_corner_only_passages() {
    for seed in 0..8 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut maze = Maze::new(9, 7, 0);
        let mut applied = 0;

        for _ in 0..2_000 {
            let pos = rng.uniform_inclusive(0, maze.size() - 1);
            if !maze.can_toggle(pos) {
                continue;
            }
            maze.toggle(pos);
            applied += 1;

            let offenders = corner_only_blocks(&maze);
            assert!(
                offenders.is_empty(),
                "seed {seed}: toggling {pos} left corner-only blocks at {offenders:?}",
            );
        }

        assert!(applied > 0, "seed {seed}: guard rejected every candidate");
    }
}

#[test]
fn guard_is_a_pure_function_of_grid_contents() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut maze = Maze::new(6, 6, 0);
    for _ in 0..200 {
        let pos = rng.uniform_inclusive(0, maze.size() - 1);
        if maze.can_toggle(pos) {
            maze.toggle(pos);
        }
    }

    let before: Vec<bool> = (0..maze.size()).map(|pos| maze.can_toggle(pos)).collect();
    let copy = maze.clone();
    let after: Vec<bool> = (0..copy.size()).map(|pos| copy.can_toggle(pos)).collect();

    assert_eq!(before, after);
}
