use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::logging::log;
use leptos::*;

use crate::utils::timer::{Scheduler, TaskHandle, TimeoutScheduler};

/// How long the overlay covers the home page after mount.
pub const OVERLAY_DURATION: Duration = Duration::from_millis(80);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayState {
    Visible,
    Hidden,
}

/// The overlay's one-shot `Visible -> Hidden` transition.
///
/// Starts visible with the hide task already scheduled. Cancelling before the
/// deadline releases the task and leaves the state untouched.
pub struct OverlayTimer<H: TaskHandle> {
    state: Rc<Cell<OverlayState>>,
    pending: Option<H>,
}

impl<H: TaskHandle> OverlayTimer<H> {
    pub fn start<S>(scheduler: &S, on_hide: impl FnOnce() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let state = Rc::new(Cell::new(OverlayState::Visible));
        let task_state = Rc::clone(&state);
        let pending = scheduler.schedule(
            OVERLAY_DURATION,
            Box::new(move || {
                task_state.set(OverlayState::Hidden);
                on_hide();
            }),
        );

        Self {
            state,
            pending: Some(pending),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state.get()
    }

    pub fn cancel(mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

#[component]
pub fn HomeOverlay() -> impl IntoView {
    let (state, set_state) = create_signal(OverlayState::Visible);

    // Effects only run in the browser, so the server render stays Visible
    create_effect(move |_| {
        let timer = OverlayTimer::start(&TimeoutScheduler, move || {
            log!("[OVERLAY] Hiding home overlay");
            set_state.set(OverlayState::Hidden);
        });
        on_cleanup(move || timer.cancel());
    });

    view! {
        <Show when=move || state.get() == OverlayState::Visible>
            <div class="home-overlay" aria-hidden="true">
                <div class="home-overlay__spinner"></div>
            </div>
        </Show>
    }
}
