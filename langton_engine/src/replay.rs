use crate::ant::{Direction, Move};
use crate::error::Result;
use crate::grid::Position;
use crate::simulation::FinishedReason;
use log::debug;
use serde_json::json;
use std::{fs::File, io::BufWriter, io::Write};

pub fn create_replay_logger(
    filename: Option<String>,
    width: usize,
    height: usize,
) -> Box<dyn ReplayLogger> {
    match filename {
        None => Box::new(NoOpReplayLogger {}),
        Some(filename) => Box::new(JsonReplayLogger::new(filename, width, height)),
    }
}

/// Records a run so it can be replayed outside the engine.
pub trait ReplayLogger: Send + Sync {
    #[allow(unused_variables)]
    fn log_start(&mut self, position: Position, direction: Direction, steps: usize) {}

    #[allow(unused_variables)]
    fn log_move(&mut self, step: usize, movement: &Move) {}

    #[allow(unused_variables)]
    fn log_end(&mut self, reason: FinishedReason, snapshot: String) {}

    fn clear(&mut self) {}

    fn save(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct Tick {
    step: usize,
    #[serde(flatten)]
    movement: Move,
}

struct NoOpReplayLogger;
impl ReplayLogger for NoOpReplayLogger {}

struct JsonReplayLogger {
    filename: String,
    width: usize,
    height: usize,
    start: Option<(Position, Direction, usize)>,
    ticks: Vec<Tick>,
    finished_reason: Option<FinishedReason>,
    snapshot: Option<String>,
}

impl JsonReplayLogger {
    pub fn new(filename: String, width: usize, height: usize) -> JsonReplayLogger {
        JsonReplayLogger {
            filename,
            width,
            height,
            start: None,
            ticks: Vec::new(),
            finished_reason: None,
            snapshot: None,
        }
    }
}

impl ReplayLogger for JsonReplayLogger {
    fn log_start(&mut self, position: Position, direction: Direction, steps: usize) {
        self.start = Some((position, direction, steps));
    }

    fn log_move(&mut self, step: usize, movement: &Move) {
        self.ticks.push(Tick {
            step,
            movement: *movement,
        });
    }

    fn log_end(&mut self, reason: FinishedReason, snapshot: String) {
        self.finished_reason = Some(reason);
        self.snapshot = Some(snapshot);
    }

    fn clear(&mut self) {
        self.start = None;
        self.ticks.clear();
        self.finished_reason = None;
        self.snapshot = None;
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.filename)?;
        let ant = self.start.map(|(position, direction, steps)| {
            json!({
                "x": position.x,
                "y": position.y,
                "direction": direction,
                "steps": steps,
            })
        });

        let data = json!({
            "grid": {
                "width": self.width,
                "height": self.height,
            },
            "ant": ant,
            "steps": self.ticks,
            "final": self.snapshot,
            "finished_reason": self.finished_reason,
        });

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &data)?;
        writer.flush()?;

        debug!("saved replay of {} steps to {}", self.ticks.len(), self.filename);
        Ok(())
    }
}
