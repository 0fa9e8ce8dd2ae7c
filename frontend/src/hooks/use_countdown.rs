use std::rc::Rc;

use gloo::timers::callback::Interval;
use shared::{CountdownTimer, TickOutcome};
use yew::prelude::*;

use crate::services::logging::Logger;

pub enum CountdownAction {
    Start,
    Tick,
    Cancel,
}

#[derive(Clone, PartialEq)]
struct CountdownModel {
    timer: CountdownTimer,
    /// Set when the last run ran out rather than being cancelled
    expired: bool,
}

impl Reducible for CountdownModel {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Start => Rc::new(Self {
                timer: self.timer.start(),
                expired: false,
            }),
            CountdownAction::Tick => {
                let (timer, outcome) = self.timer.tick();
                match outcome {
                    TickOutcome::Idle => self,
                    TickOutcome::Running(_) => Rc::new(Self {
                        timer,
                        expired: self.expired,
                    }),
                    TickOutcome::Expired => {
                        Logger::warn_with_component("countdown", "Payment window expired");
                        Rc::new(Self {
                            timer,
                            expired: true,
                        })
                    }
                }
            }
            CountdownAction::Cancel => Rc::new(Self {
                timer: self.timer.cancel(),
                expired: false,
            }),
        }
    }
}

pub struct UseCountdownResult {
    pub timer: CountdownTimer,
    pub expired: bool,
    pub start: Callback<()>,
    pub cancel: Callback<()>,
}

/// One-second countdown. The interval only exists while the timer runs and
/// is dropped as soon as it stops or the component unmounts.
#[hook]
pub fn use_countdown(max_seconds: u32) -> UseCountdownResult {
    let model = use_reducer(|| CountdownModel {
        timer: CountdownTimer::new(max_seconds),
        expired: false,
    });
    let running = model.timer.is_running();

    {
        let dispatcher = model.dispatcher();
        use_effect_with(running, move |running| {
            let interval = running
                .then(|| Interval::new(1_000, move || dispatcher.dispatch(CountdownAction::Tick)));
            move || drop(interval)
        });
    }

    let start = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CountdownAction::Start))
    };

    let cancel = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CountdownAction::Cancel))
    };

    UseCountdownResult {
        timer: model.timer,
        expired: model.expired,
        start,
        cancel,
    }
}
