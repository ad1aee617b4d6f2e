use langton_engine::{Ant, Direction, Grid, Position, Simulation, SimulationConfig};

fn main() {
    env_logger::init();

    // Driving the ant by hand: the caller owns both the grid and the ant
    let mut grid = Grid::new(11, 11).unwrap();
    let mut ant = Ant::new(Position::new(5, 5), Direction::North, 8);
    while let Some(movement) = ant.step(&mut grid).unwrap() {
        println!(
            "({}, {}) -> ({}, {}) facing {:?}, left a {:?} cell",
            movement.from.x,
            movement.from.y,
            movement.to.x,
            movement.to.y,
            movement.direction,
            movement.color
        );
    }
    println!("{}\n", grid.snapshot(&ant));

    // Letting a simulation drive a seeded, noisy run and record a replay
    let replay_filename = "/tmp/langton_replay.json".to_string();
    let config = SimulationConfig {
        width: 64,
        height: 48,
        random_start: true,
        steps: 12000,
        seed: 7,
        noise: 0.05,
        replay_filename: Some(replay_filename.clone()),
        ..SimulationConfig::default()
    };

    let mut simulation = Simulation::new(config).unwrap();
    let mut state = simulation.state();
    while !state.finished {
        state = simulation.update().unwrap();

        // Give up early once the ant has blackened a third of the grid
        if state.black_cells * 3 >= 64 * 48 {
            state = simulation.stop().unwrap();
        }
    }

    println!(
        "\nSimulation finished due to: {:?} after {} steps, replay saved to {}",
        state.finished_reason.unwrap(),
        state.step,
        replay_filename
    );
}
