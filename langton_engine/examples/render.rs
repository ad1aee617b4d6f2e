use langton_engine::{Simulation, SimulationConfig};
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();

    let map = "\
        rows 11
        cols 21
        m .....................
        m .....................
        m .....................
        m .....................
        m .....................
        m ..........N..........
        m .....................
        m .....................
        m .....................
        m .....................
        m .....................";

    let config = SimulationConfig {
        map: Some(map.to_string()),
        steps: 400,
        ..SimulationConfig::default()
    };

    let mut simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => panic!("Could not create the simulation due to {}", e),
    };

    simulation.draw().unwrap();
    while !simulation.state().finished {
        thread::sleep(Duration::from_millis(30));
        simulation.update().unwrap();
        simulation.draw().unwrap();
    }
}
