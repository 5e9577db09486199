use crate::cache::{FetchCache, FetchOutcome, FetchStatus};
use crate::pipeline::{derive_view, PageBounds, ViewModel};
use crate::ui::browse::{ViewIntent, ViewReducer, ViewState};
use crate::ui::mvi::Reducer;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr, $ctx:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent, $ctx);
    };
}

pub struct App {
    should_quit: bool,
    /// Asset list and fetch status (injected, owns its own reducer).
    cache: FetchCache,
    /// Search term and page (MVI pattern).
    view: ViewState,
    page_size: usize,
    spinner_frame: usize,
}

impl App {
    pub fn new(cache: FetchCache, page_size: usize) -> Self {
        Self {
            should_quit: false,
            cache,
            view: ViewState::default(),
            page_size: page_size.max(1),
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Kicks off the initial load.
    pub fn start(&mut self) {
        self.request_refresh();
    }

    /// Returns `false` when a fetch is already in flight.
    pub fn request_refresh(&mut self) -> bool {
        self.cache.refresh().is_some()
    }

    pub fn can_refresh(&self) -> bool {
        !self.cache.is_fetching()
    }

    pub fn on_tick(&mut self) {
        if self.cache.is_fetching() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Fetch-completion handler.
    pub fn on_fetch_complete(&mut self, outcome: FetchOutcome) {
        if self.cache.apply(outcome) {
            self.dispatch_view(ViewIntent::Reconcile);
        }
    }

    /// Dispatch an intent to the view reducer with the current page bounds.
    pub fn dispatch_view(&mut self, intent: ViewIntent) {
        let bounds = self.page_bounds();
        dispatch_mvi!(self, view, ViewReducer, intent, &bounds);
    }

    pub fn page_bounds(&self) -> PageBounds {
        PageBounds::for_assets(self.cache.assets(), &self.view.search_term, self.page_size)
    }

    pub fn view_model(&self) -> ViewModel {
        derive_view(
            self.cache.assets(),
            &self.view.search_term,
            self.view.current_page,
            self.page_size,
        )
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    pub fn status(&self) -> FetchStatus {
        self.cache.status()
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }
}
