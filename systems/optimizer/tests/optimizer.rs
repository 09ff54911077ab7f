use maze_forge_core::PathScore;
use maze_forge_system_carver::Carver;
use maze_forge_system_optimizer::Optimizer;
use maze_forge_system_solver::{score, Solver};
use maze_forge_world::Maze;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Keeps a run that stops improving from hanging the suite.
const TEST_STALL_BUDGET: usize = 20_000;

fn carved(seed: u64, width: usize, height: usize) -> (Maze, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let maze = Carver::new().carve(width, height, &mut rng);
    (maze, rng)
}

#[test]
fn accepted_scores_never_decrease() {
    for seed in 0..4 {
        let (maze, mut rng) = carved(seed, 10, 10);
        let mut optimizer = Optimizer::new(10, 30).with_max_stalled_attempts(TEST_STALL_BUDGET);
        let mut history: Vec<PathScore> = Vec::new();

        let (best, report) =
            optimizer.optimize_with(maze, &mut rng, |_, score| history.push(score));

        assert_eq!(report.accepted, 30, "seed {seed}");
        assert_eq!(history.len(), 30, "seed {seed}");
        assert!(!report.stalled);
        assert!(report.attempts >= report.accepted + report.unsolvable);
        for pair in history.windows(2) {
            assert!(pair[1] >= pair[0], "seed {seed}: {:?} regressed", pair);
        }
        assert_eq!(report.best, history.last().copied());
        assert_eq!(score(&best), report.best);
    }
}

#[test]
fn start_and_goal_survive_optimization_as_open_cells() {
    let (maze, mut rng) = carved(21, 12, 8);
    let start = maze.start();
    let goal = maze.goal();

    let (best, _) = Optimizer::new(10, 20)
        .with_max_stalled_attempts(TEST_STALL_BUDGET)
        .optimize(maze, &mut rng);

    assert_eq!(best.start(), start);
    assert_eq!(best.goal(), goal);
    assert!(best.is_open(start));
    assert!(best.is_open(goal));
}

#[test]
fn final_incumbent_is_solvable_and_consistent() {
    let (maze, mut rng) = carved(4, 9, 9);

    let (mut best, report) = Optimizer::new(5, 15)
        .with_max_stalled_attempts(TEST_STALL_BUDGET)
        .optimize(maze, &mut rng);
    let recorded = best.solution();

    let resolved = Solver::new().solve(&mut best);

    assert!(resolved.is_some());
    assert_eq!(resolved, recorded);
    assert_eq!(score(&best), report.best);
}

#[test]
fn zero_target_returns_input_untouched() {
    let (maze, mut rng) = carved(9, 6, 6);
    let original = maze.clone();

    let (best, report) = Optimizer::new(10, 0).optimize(maze, &mut rng);

    assert_eq!(best, original);
    assert_eq!(report.attempts, 0);
    assert_eq!(report.best, None);
}

#[test]
fn grid_without_toggleable_cells_stalls() {
    let maze = Maze::from_layout(&["SG"]).expect("layout parses");
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let (best, report) = Optimizer::new(10, 5).optimize(maze.clone(), &mut rng);

    assert!(report.stalled);
    assert_eq!(report.accepted, 0);
    assert_eq!(best, maze);
}

#[test]
fn same_seed_reproduces_the_same_run() {
    let run = || {
        let (maze, mut rng) = carved(77, 10, 7);
        Optimizer::new(10, 12)
            .with_max_stalled_attempts(TEST_STALL_BUDGET)
            .optimize(maze, &mut rng)
    };

    let (first, first_report) = run();
    let (second, second_report) = run();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

#[test]
fn unbeatable_incumbent_ends_the_run_as_stalled() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let maze = Carver::new().carve_from(5, 5, 12, &mut rng);

    let (best, report) = Optimizer::new(3, 5)
        .with_max_stalled_attempts(TEST_STALL_BUDGET)
        .optimize(maze, &mut rng);

    assert!(report.stalled);
    assert_eq!(report.accepted, 4);
    assert_eq!(report.best, Some(PathScore::new(15, 4, 2)));
    assert_eq!(score(&best), report.best);
    assert!(report.attempts >= report.accepted + TEST_STALL_BUDGET);
}

#[test]
fn stall_budget_counts_only_consecutive_rejections() {
    let (maze, mut rng) = carved(3, 8, 8);

    let (_, report) = Optimizer::new(10, 10)
        .with_max_stalled_attempts(1)
        .optimize(maze, &mut rng);

    // the first rejection after any promotion ends the run
    assert!(report.accepted == 10 || report.stalled);
    assert!(report.attempts <= report.accepted + 1);
}
