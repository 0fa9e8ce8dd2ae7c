use gloo::timers::callback::Timeout;
use shared::SeedError;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Load a mock dataset after a simulated network delay.
///
/// `on_loaded` receives the data once; the pending load is cancelled if the
/// component unmounts first.
#[hook]
pub fn use_seed_data<T, F>(
    component: &'static str,
    delay_ms: u32,
    loader: F,
    on_loaded: Callback<T>,
) -> LoadStatus
where
    T: 'static,
    F: FnOnce() -> Result<T, SeedError> + 'static,
{
    let status = use_state(|| LoadStatus::Loading);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(delay_ms, move || match loader() {
                Ok(data) => {
                    Logger::debug_with_component(component, "Seed data loaded");
                    on_loaded.emit(data);
                    status.set(LoadStatus::Ready);
                }
                Err(e) => {
                    Logger::error_with_component(component, &e.to_string());
                    status.set(LoadStatus::Failed(format!("Không thể tải dữ liệu: {}", e)));
                }
            });

            move || drop(timeout)
        });
    }

    (*status).clone()
}
