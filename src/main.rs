//! Entry point: build a maze from `config.toml`, solve it, walk it, print it.

use std::io;

use log::{error, info};

use mazewalk::config::MazewalkConfig;
use mazewalk::sim::walk::directions_along;
use mazewalk::ui::renderer::{print_maze, render_ascii};
use mazewalk::{create_maze, Walk, WalkEvent};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MazewalkConfig::load();
    info!("starting with {config:?}");

    if let Err(e) = run(&config) {
        error!("mazewalk failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: &MazewalkConfig) -> Result<(), Box<dyn std::error::Error>> {
    let size = config.maze_size();
    let maze = create_maze(size, config.seed)?;
    let route = maze.solve_route()?;
    info!(
        "{size}x{size} maze: {} passages, route of {} cells from {} to {}",
        maze.passage_count(),
        route.len(),
        maze.start(),
        maze.goal()
    );

    // walking the solved route must end on the goal without ever leaving it
    let mut walk = Walk::new(maze)?;
    let events = walk.replay(&directions_along(&route, size));
    let detours = events
        .iter()
        .filter(|e| matches!(e, WalkEvent::LeftPath { .. }))
        .count();
    if !walk.is_finished() || detours > 0 {
        return Err(format!(
            "route replay stopped at cell {} after {} steps",
            walk.position(),
            walk.steps()
        )
        .into());
    }

    let shown = config.display.show_path.then_some(route.as_slice());
    let text = render_ascii(walk.maze(), shown);
    print_maze(&mut io::stdout().lock(), &text, config.display.color)?;
    Ok(())
}
