//! Incremental sermon search
//!
//! Keystrokes update the query immediately; the network call fires only after
//! the debounce window passes without another keystroke. Fetches are
//! fire-and-forget and stamped with a generation so stale responses can be
//! recognised (see [`ResponseOrdering`]).

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

use crate::config::{ResponseOrdering, SearchConfig};
use crate::domain::models::{ListQuery, RecordPage, Sermon, SermonSummary};
use crate::infrastructure::record_service::{RecordService, RecordServiceError};
use crate::shared::logging;
use crate::shared::navigation::{NavTarget, Navigator};
use crate::shared::timer::{self, TimerHandle};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    TransientFetch(#[from] RecordServiceError),
}

/// How a submission was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitSource {
    /// Enter key in the input; the text stays in place
    EnterKey,
    /// "View all results" button in the popover; the input is cleared
    ViewAll,
}

/// Mutable state of one mounted search box
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    debounce: Option<TimerHandle>,
    results: Option<Vec<SermonSummary>>,
    is_open: bool,
    in_flight: usize,
    generation: u64,
    mounted: bool,
}

impl SearchSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the last completed search; empty before any search
    pub fn results(&self) -> &[SermonSummary] {
        self.results.as_deref().unwrap_or(&[])
    }

    /// False until a search completed for the current query
    pub fn has_searched(&self) -> bool {
        self.results.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn has_pending_fetch(&self) -> bool {
        self.debounce.is_some()
    }

    /// Number of fetches fired so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn reset_results(&mut self) {
        self.debounce = None;
        self.results = None;
        self.is_open = false;
    }

    fn view(&self) -> SearchView {
        SearchView {
            query: self.query.clone(),
            results: self.results().to_vec(),
            is_open: self.is_open,
            loading: self.is_loading(),
        }
    }
}

/// Render snapshot handed to the view layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<SermonSummary>,
    pub is_open: bool,
    pub loading: bool,
}

impl SearchView {
    /// The popover always offers "view all" while there is a query
    pub fn shows_view_all(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn shows_popover(&self) -> bool {
        self.is_open && (!self.results.is_empty() || self.shows_view_all())
    }
}

type ChangeListener = Rc<dyn Fn(&SearchView)>;

struct Inner {
    session: RefCell<SearchSession>,
    listener: RefCell<Option<ChangeListener>>,
    service: Rc<dyn RecordService>,
    navigator: Rc<dyn Navigator>,
    config: SearchConfig,
}

/// Drives a [`SearchSession`] from UI events
#[derive(Clone)]
pub struct SearchController {
    inner: Rc<Inner>,
}

impl SearchController {
    pub fn new(
        service: Rc<dyn RecordService>,
        navigator: Rc<dyn Navigator>,
        config: SearchConfig,
    ) -> Self {
        let session = SearchSession {
            mounted: true,
            ..Default::default()
        };
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(session),
                listener: RefCell::new(None),
                service,
                navigator,
                config,
            }),
        }
    }

    /// Register the single view listener, replacing any previous one
    pub fn set_listener(&self, listener: impl Fn(&SearchView) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn view(&self) -> SearchView {
        self.inner.session.borrow().view()
    }

    /// Run `f` against the current session state
    pub fn inspect<R>(&self, f: impl FnOnce(&SearchSession) -> R) -> R {
        f(&self.inner.session.borrow())
    }

    pub fn on_query_change(&self, text: &str) {
        {
            let mut session = self.inner.session.borrow_mut();
            if !session.mounted {
                return;
            }
            session.query = text.to_string();
            session.debounce = None;

            if text.trim().is_empty() {
                session.reset_results();
            } else {
                let weak = Rc::downgrade(&self.inner);
                let delay = self.inner.config.debounce;
                logging::log_search_scheduled(text.trim(), delay.as_millis());
                session.debounce = Some(timer::schedule(delay, move || Self::on_fetch_fire(weak)));
            }
        }
        self.notify();
    }

    /// Debounce timer expired: fire the search for the current query
    fn on_fetch_fire(weak: Weak<Inner>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };

        let (query, generation) = {
            let mut session = inner.session.borrow_mut();
            session.debounce = None;
            let query = session.query.trim().to_string();
            if !session.mounted || query.is_empty() {
                return;
            }
            session.generation += 1;
            session.in_flight += 1;
            (query, session.generation)
        };
        Self { inner: Rc::clone(&inner) }.notify();

        let request = ListQuery::sermon_search(inner.config.collection.as_str(), &query)
            .per_page(inner.config.result_limit);
        logging::log_search_fetch_start(generation, &query);

        let service = Rc::clone(&inner.service);
        let weak = Rc::downgrade(&inner);
        drop(inner);

        timer::spawn_local(async move {
            let outcome = service.list(&request).await.map_err(SearchError::from);
            if let Some(inner) = weak.upgrade() {
                Self { inner }.apply_response(generation, &query, outcome);
            }
        });
    }

    fn apply_response(
        &self,
        generation: u64,
        query: &str,
        outcome: Result<RecordPage<Sermon>, SearchError>,
    ) {
        {
            let mut session = self.inner.session.borrow_mut();
            session.in_flight = session.in_flight.saturating_sub(1);

            if !session.mounted {
                logging::log_search_response_ignored(generation, session.generation, "unmounted");
                return;
            }
            if session.query.trim().is_empty() {
                logging::log_search_response_ignored(generation, session.generation, "query cleared");
            } else if self.inner.config.ordering == ResponseOrdering::LatestRequestWins
                && generation < session.generation
            {
                logging::log_search_response_ignored(generation, session.generation, "stale");
            } else {
                match outcome {
                    Ok(page) => {
                        logging::log_search_fetch_result(generation, page.items.len());
                        session.results = Some(page.items.iter().map(SermonSummary::from).collect());
                        session.is_open = true;
                    }
                    Err(e) => {
                        logging::log_search_fetch_error(generation, query, &e.to_string());
                        session.results = Some(Vec::new());
                        session.is_open = false;
                    }
                }
            }
        }
        self.notify();
    }

    /// Enter key or "view all": open the full results page for the query
    pub fn on_submit(&self, source: SubmitSource) {
        let query = self.inner.session.borrow().query.trim().to_string();
        self.inner.navigator.navigate(&NavTarget::SearchResults { query });
        {
            let mut session = self.inner.session.borrow_mut();
            session.is_open = false;
            if source == SubmitSource::ViewAll {
                session.query.clear();
                session.reset_results();
            }
        }
        self.notify();
    }

    pub fn on_result_select(&self, id: &str) {
        self.inner.navigator.navigate(&NavTarget::SermonView { id: id.to_string() });
        {
            let mut session = self.inner.session.borrow_mut();
            session.query.clear();
            session.reset_results();
        }
        self.notify();
    }

    /// Pointer went down outside the widget. Query and results are kept so a
    /// refocus can reopen without fetching.
    pub fn on_blur_outside(&self) {
        self.close();
    }

    pub fn on_escape(&self) {
        self.close();
    }

    pub fn on_focus(&self) {
        let reopened = {
            let mut session = self.inner.session.borrow_mut();
            let can_open = !session.query.trim().is_empty() && !session.results().is_empty();
            if can_open && !session.is_open {
                session.is_open = true;
                true
            } else {
                false
            }
        };
        if reopened {
            self.notify();
        }
    }

    /// Widget unmounted: cancel the debounce timer and drop later responses
    pub fn teardown(&self) {
        {
            let mut session = self.inner.session.borrow_mut();
            session.mounted = false;
            session.debounce = None;
            session.is_open = false;
        }
        self.inner.listener.borrow_mut().take();
    }

    fn close(&self) {
        let changed = {
            let mut session = self.inner.session.borrow_mut();
            std::mem::replace(&mut session.is_open, false)
        };
        if changed {
            self.notify();
        }
    }

    fn notify(&self) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            let view = self.view();
            listener(&view);
        }
    }
}
