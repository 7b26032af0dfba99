//! Console presentation: one log line per turn, optional pacing.

use std::thread;
use std::time::Duration;

use tracing::debug;

use mb_core::Turn;
use mb_sim::{SimObserver, TracingObserver, TurnReport};
use mb_spatial::{Layout, RoadGraph};

/// Logs each turn and sleeps `delay` afterwards, standing in for the
/// animation timer of a graphical front end.
pub struct Presenter<'g> {
    log:    TracingObserver<'g>,
    graph:  &'g RoadGraph,
    layout: &'g Layout,
    delay:  Duration,
}

impl<'g> Presenter<'g> {
    pub fn new(graph: &'g RoadGraph, layout: &'g Layout, delay: Duration) -> Self {
        Self { log: TracingObserver::new(graph), graph, layout, delay }
    }
}

impl SimObserver for Presenter<'_> {
    fn on_turn(&mut self, report: &TurnReport) {
        self.log.on_turn(report);

        if let Some(pos) = self.layout.position(report.state.place) {
            debug!(place = self.graph.name(report.state.place), %pos, "robot drawn");
        }
        for (i, parcel) in report.state.parcels.iter().enumerate() {
            if let Some(pos) = self.layout.position(parcel.place) {
                debug!(parcel = i, address = self.graph.name(parcel.address), %pos, "parcel drawn");
            }
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn on_complete(&mut self, turns: Turn) {
        self.log.on_complete(turns);
    }
}
