use yew::prelude::*;

use super::use_delayed_task::use_delayed_task;

pub struct UseToastResult {
    pub message: Option<String>,
    pub show: Callback<String>,
}

/// Transient confirmation message that hides itself after `duration_ms`.
/// Showing a new message restarts the timer.
#[hook]
pub fn use_toast(duration_ms: u32) -> UseToastResult {
    let message = use_state(|| Option::<String>::None);
    let hide_task = use_delayed_task();

    let show = {
        let message = message.clone();
        Callback::from(move |text: String| {
            message.set(Some(text));
            let message = message.clone();
            hide_task.schedule(duration_ms, move || message.set(None));
        })
    };

    UseToastResult {
        message: (*message).clone(),
        show,
    }
}
