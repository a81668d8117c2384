use std::time::Duration;

use bevy::prelude::*;

/// Boolean raised by a transition and lowered after a fixed delay.
///
/// Only presentation effects read this - camera logic never waits on it. Raising it again while
/// it is up restarts the delay.
#[derive(Reflect, Debug, Default, Clone)]
pub struct AdvisoryFlag {
    timer: Option<Timer>,
}

impl AdvisoryFlag {
    pub fn raise(&mut self, duration: Duration) {
        self.timer = Some(Timer::new(duration, TimerMode::Once));
    }

    pub fn lower(&mut self) { self.timer = None; }

    pub const fn is_raised(&self) -> bool { self.timer.is_some() }

    pub fn tick(&mut self, delta: Duration) {
        if self
            .timer
            .as_mut()
            .is_some_and(|timer| timer.tick(delta).just_finished())
        {
            self.timer = None;
        }
    }
}
