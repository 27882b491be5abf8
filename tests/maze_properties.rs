use std::collections::HashSet;

use mazewalk::sim::walk::directions_along;
use mazewalk::{
    create_maze, neighbors, solve, Difficulty, Maze, MazeError, PathTracker, Walk, WalkEvent,
};

/// Every passage, each stored once as (low, high).
fn passages(maze: &Maze) -> HashSet<(usize, usize)> {
    let mut set = HashSet::new();
    for cell in 0..maze.cell_count() {
        for n in maze.reachable_neighbors(cell) {
            set.insert((cell.min(n), cell.max(n)));
        }
    }
    set
}

/// Count simple passage paths from `a` to `b` by exhaustive DFS.
fn simple_paths(maze: &Maze, a: usize, b: usize) -> usize {
    fn go(maze: &Maze, at: usize, b: usize, seen: &mut Vec<bool>) -> usize {
        if at == b {
            return 1;
        }
        let mut total = 0;
        for n in maze.reachable_neighbors(at) {
            if !seen[n] {
                seen[n] = true;
                total += go(maze, n, b, seen);
                seen[n] = false;
            }
        }
        total
    }
    let mut seen = vec![false; maze.cell_count()];
    seen[a] = true;
    go(maze, a, b, &mut seen)
}

// ── Generation ──

#[test]
fn every_difficulty_generates_a_spanning_tree() {
    for d in Difficulty::ALL {
        let maze = create_maze(d.size(), Some(d.index() as u64 + 100)).unwrap();
        let cells = maze.cell_count();
        assert_eq!(cells, d.size() * d.size());
        assert_eq!(passages(&maze).len(), cells - 1);
        // connected: every cell reachable from the start
        for cell in 0..cells {
            assert!(!solve(&maze, 0, cell).unwrap().is_empty());
        }
    }
}

#[test]
fn size_five_always_has_24_passages() {
    for seed in 0..50 {
        let maze = create_maze(5, Some(seed)).unwrap();
        assert_eq!(maze.passage_count(), 24);
        assert_eq!(passages(&maze).len(), 24);
    }
}

#[test]
fn unseeded_creation_is_still_perfect() {
    let maze = create_maze(6, None).unwrap();
    assert_eq!(maze.passage_count(), 35);
}

#[test]
fn seed_fixes_the_wall_set() {
    let a = create_maze(12, Some(777)).unwrap();
    let b = create_maze(12, Some(777)).unwrap();
    assert_eq!(passages(&a), passages(&b));
}

#[test]
fn zero_size_is_rejected() {
    assert_eq!(create_maze(0, None).unwrap_err(), MazeError::InvalidSize(0));
}

#[test]
fn exactly_one_simple_path_between_any_two_cells() {
    let maze = create_maze(4, Some(3)).unwrap();
    for a in 0..16 {
        for b in 0..16 {
            assert_eq!(simple_paths(&maze, a, b), 1, "{a} -> {b}");
        }
    }
}

#[test]
fn wall_relation_is_symmetric() {
    let maze = create_maze(7, Some(21)).unwrap();
    for cell in 0..maze.cell_count() {
        for n in neighbors(cell, 7) {
            assert_eq!(maze.has_wall_between(cell, n), maze.has_wall_between(n, cell));
        }
    }
}

// ── Topology ──

#[test]
fn corner_neighbors() {
    for size in [2, 5, 20] {
        let last = size * size - 1;
        let mut top_left = neighbors(0, size);
        top_left.sort_unstable();
        assert_eq!(top_left, vec![1, size]);

        let mut bottom_right = neighbors(last, size);
        bottom_right.sort_unstable();
        assert_eq!(bottom_right, vec![last - size, last - 1]);
    }
}

// ── Solving ──

#[test]
fn solutions_are_connected_and_reversible() {
    let maze = create_maze(8, Some(2718)).unwrap();
    let cells = maze.cell_count();
    for a in (0..cells).step_by(7) {
        for b in (0..cells).step_by(5) {
            let path = solve(&maze, a, b).unwrap();
            assert_eq!(path.first(), Some(&a));
            assert_eq!(path.last(), Some(&b));
            for pair in path.windows(2) {
                assert!(!maze.has_wall_between(pair[0], pair[1]));
            }
            let mut back = solve(&maze, b, a).unwrap();
            back.reverse();
            assert_eq!(path, back);
        }
    }
}

#[test]
fn size_five_route_length_is_bounded() {
    for seed in 0..20 {
        let maze = create_maze(5, Some(seed)).unwrap();
        let path = solve(&maze, 0, 24).unwrap();
        assert!((1..=25).contains(&path.len()));
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
    }
}

#[test]
fn solve_rejects_cells_outside_maze() {
    let maze = create_maze(3, Some(1)).unwrap();
    assert_eq!(
        solve(&maze, 0, 9),
        Err(MazeError::CellOutOfRange { cell: 9, cell_count: 9 })
    );
}

// ── Tracking ──

#[test]
fn tracker_follows_a_real_route() {
    let maze = create_maze(10, Some(55)).unwrap();
    let route = maze.solve_route().unwrap();
    let mut tracker = PathTracker::new(route.clone()).unwrap();
    for (i, &cell) in route.iter().enumerate().skip(1) {
        assert_eq!(tracker.hint(), Some(cell));
        tracker.arrived_at(cell);
        assert!(tracker.is_on_path());
        assert_eq!(tracker.remaining_path(), route[i..].to_vec());
    }
    assert_eq!(tracker.remaining_path(), vec![maze.goal()]);
    assert_eq!(tracker.hint(), None);
}

#[test]
fn tracker_detour_from_real_maze() {
    let maze = create_maze(6, Some(8)).unwrap();
    let route = maze.solve_route().unwrap();
    let mut tracker = PathTracker::new(route.clone()).unwrap();

    // any open side branch off the start that is not the next route step
    let side = maze
        .reachable_neighbors(route[0])
        .into_iter()
        .find(|&n| route.get(1) != Some(&n));
    if let Some(side) = side {
        tracker.arrived_at(side);
        assert!(!tracker.is_on_path());
        assert_eq!(tracker.remaining_path()[0], side);
        assert_eq!(tracker.hint(), Some(route[0]));
        tracker.arrived_at(route[0]);
        assert!(tracker.is_on_path());
        assert_eq!(tracker.remaining_path(), route);
    }
}

#[test]
fn walk_replays_route_to_goal() {
    for d in Difficulty::ALL {
        let maze = create_maze(d.size(), Some(9)).unwrap();
        let route = maze.solve_route().unwrap();
        let mut walk = Walk::new(maze).unwrap();
        let events = walk.replay(&directions_along(&route, d.size()));
        assert!(walk.is_finished());
        assert!(!events.iter().any(|e| matches!(e, WalkEvent::LeftPath { .. })));
        assert_eq!(
            events.last(),
            Some(&WalkEvent::GoalReached { at: d.size() * d.size() - 1, steps: route.len() - 1 })
        );
        assert_eq!(walk.tracker().breadcrumbs(), route.as_slice());
    }
}
