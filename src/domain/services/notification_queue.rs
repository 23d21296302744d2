//! Snackbar notification queue
//!
//! Any part of the app may `enqueue`; notifications are shown strictly one at
//! a time in FIFO order. Each goes through
//! `Empty -> Settling -> CountingDown -> FadingOut -> Empty`, driven by a single
//! owned timer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::config::NotificationConfig;
use crate::domain::models::{Notification, NotificationRequest};
use crate::shared::logging;
use crate::shared::timer::{self, TimerHandle};

/// Lifecycle of the single display slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPhase {
    #[default]
    Empty,
    /// Visible, waiting for the enter transition before the countdown starts
    Settling,
    CountingDown,
    FadingOut,
}

impl SlotPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotPhase::Empty => "empty",
            SlotPhase::Settling => "settling",
            SlotPhase::CountingDown => "counting_down",
            SlotPhase::FadingOut => "fading_out",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SlotPhase::Settling | SlotPhase::CountingDown)
    }
}

#[derive(Debug, Default)]
pub struct QueueState {
    pending: VecDeque<Notification>,
    current: Option<Notification>,
    phase: SlotPhase,
    timer: Option<TimerHandle>,
    shut_down: bool,
}

impl QueueState {
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn visible(&self) -> bool {
        self.phase.is_visible()
    }

    fn snapshot(&self) -> SnackbarView {
        SnackbarView {
            active: self.current.clone().map(|notification| {
                let counting = self.phase == SlotPhase::CountingDown;
                // Full only while settling; stays drained through the fade
                ActiveNotification {
                    progress_percent: if self.phase == SlotPhase::Settling { 100 } else { 0 },
                    progress_transition_ms: if counting {
                        notification.duration.as_millis() as u64
                    } else {
                        0
                    },
                    visible: self.phase.is_visible(),
                    notification,
                }
            }),
        }
    }
}

/// Render snapshot of the snackbar slot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnackbarView {
    pub active: Option<ActiveNotification>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub visible: bool,
    /// Width of the progress bar; the CSS transition animates 100 -> 0
    pub progress_percent: u8,
    pub progress_transition_ms: u64,
}

type ChangeListener = Rc<dyn Fn(&SnackbarView)>;

struct Inner {
    state: RefCell<QueueState>,
    listener: RefCell<Option<ChangeListener>>,
    config: NotificationConfig,
}

/// Cheap handle to the shared queue
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Rc<Inner>,
}

impl PartialEq for NotificationQueue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl NotificationQueue {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(QueueState::default()),
                listener: RefCell::new(None),
                config,
            }),
        }
    }

    pub fn set_listener(&self, listener: impl Fn(&SnackbarView) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn view(&self) -> SnackbarView {
        self.inner.state.borrow().snapshot()
    }

    pub fn inspect<R>(&self, f: impl FnOnce(&QueueState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    pub fn enqueue(&self, request: NotificationRequest) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down {
                tracing::warn!(title = %request.title, "Notification dropped: queue is shut down");
                return;
            }
            let notification = Notification::from_request(request, self.inner.config.default_duration);
            logging::log_notification_enqueued(
                &notification.id,
                notification.kind.as_str(),
                state.pending.len() + 1,
            );
            state.pending.push_back(notification);
        }
        self.promote();
    }

    /// Close button: fade out now, skipping the rest of the countdown
    pub fn manual_dismiss(&self) {
        self.begin_fade();
    }

    /// Run the current notification's action. The notification stays up.
    pub fn invoke_action(&self) {
        let callback = self
            .inner
            .state
            .borrow()
            .current
            .as_ref()
            .and_then(|n| n.action.as_ref())
            .map(|action| action.callback());
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Host is going away: cancel timers and forget pending notifications
    pub fn shutdown(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            state.shut_down = true;
            state.timer = None;
            state.pending.clear();
            state.current = None;
            state.phase = SlotPhase::Empty;
        }
        self.inner.listener.borrow_mut().take();
    }

    fn promote(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down || state.current.is_some() {
                return;
            }
            let Some(next) = state.pending.pop_front() else {
                return;
            };
            logging::log_notification_phase(&next.id, SlotPhase::Settling.as_str());
            state.current = Some(next);
            state.phase = SlotPhase::Settling;
            state.timer = Some(self.schedule(self.inner.config.settle, Self::start_countdown));
        }
        self.notify();
    }

    fn start_countdown(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.phase != SlotPhase::Settling {
                return;
            }
            let Some(duration) = state.current.as_ref().map(|n| n.duration) else {
                return;
            };
            state.phase = SlotPhase::CountingDown;
            if let Some(current) = &state.current {
                logging::log_notification_phase(&current.id, SlotPhase::CountingDown.as_str());
            }
            state.timer = Some(self.schedule(duration, Self::begin_fade));
        }
        self.notify();
    }

    fn begin_fade(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if !state.phase.is_visible() {
                return;
            }
            state.phase = SlotPhase::FadingOut;
            if let Some(current) = &state.current {
                logging::log_notification_phase(&current.id, SlotPhase::FadingOut.as_str());
            }
            state.timer = Some(self.schedule(self.inner.config.fade, Self::finish));
        }
        self.notify();
    }

    fn finish(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.phase != SlotPhase::FadingOut {
                return;
            }
            if let Some(done) = state.current.take() {
                logging::log_notification_phase(&done.id, SlotPhase::Empty.as_str());
            }
            state.phase = SlotPhase::Empty;
            state.timer = None;
        }
        self.notify();
        self.promote();
    }

    fn schedule(&self, delay: std::time::Duration, step: fn(&Self)) -> TimerHandle {
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        timer::schedule(delay, move || {
            if let Some(inner) = weak.upgrade() {
                step(&NotificationQueue { inner });
            }
        })
    }

    fn notify(&self) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            let view = self.view();
            listener(&view);
        }
    }
}
