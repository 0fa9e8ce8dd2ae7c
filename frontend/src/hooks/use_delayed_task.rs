use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Handle to at most one pending delayed callback.
///
/// Scheduling replaces (and thereby cancels) whatever was pending, and the
/// pending task is dropped when the owning component unmounts.
#[derive(Clone)]
pub struct DelayedTask {
    slot: Rc<RefCell<Option<Timeout>>>,
}

impl DelayedTask {
    pub fn schedule<F>(&self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(delay_ms, task);
        *self.slot.borrow_mut() = Some(timeout);
    }
}

#[hook]
pub fn use_delayed_task() -> DelayedTask {
    let slot = use_mut_ref(|| None::<Timeout>);

    {
        let slot = slot.clone();
        use_effect_with((), move |_| {
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    DelayedTask { slot }
}
