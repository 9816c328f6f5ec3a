//! Reactive wrapper around [`ListState`].
//!
//! Screens dispatch [`ListAction`]s; whenever the reducer asks for a fetch
//! the request is sent and its outcome fed back as `Loaded` / `Failed`.

use contracts::shared::list_state::{ListAction, ListConfig, ListState};
use contracts::shared::pagination::PageWindow;
use contracts::shared::search::{SearchQuery, SearchRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::HttpClient;
use crate::shared::notify::NotificationService;

pub struct SearchList<T: 'static> {
    pub state: RwSignal<ListState<T>>,
    path: &'static str,
    failure: &'static str,
    http: HttpClient,
    notify: NotificationService,
}

impl<T: 'static> Clone for SearchList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SearchList<T> {}

impl<T> SearchList<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// `path` is the resource root (`/api/sales`); `failure` is the
    /// notification text used when the server gives no message of its own.
    pub fn new(path: &'static str, config: ListConfig, failure: &'static str) -> Self {
        Self {
            state: RwSignal::new(ListState::new(config)),
            path,
            failure,
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
        }
    }

    pub fn dispatch(&self, action: ListAction<T>) {
        if let Some(request) = self.state.try_update(|s| s.apply(action)).flatten() {
            self.fetch(request);
        }
    }

    /// Fetch on first mount only; a remounted screen keeps its page.
    pub fn init(&self) {
        if !self.state.with_untracked(|s| s.loaded || s.loading) {
            self.dispatch(ListAction::Init);
        }
    }

    pub fn set_filter(&self, query: SearchQuery) {
        self.dispatch(ListAction::SetFilter(query));
    }

    pub fn change_filter(&self, query: SearchQuery) {
        self.dispatch(ListAction::ChangeFilter(query));
    }

    pub fn go_to_page(&self, index: usize) {
        self.dispatch(ListAction::GoToPage(index));
    }

    pub fn set_page_size(&self, size: usize) {
        self.dispatch(ListAction::SetPageSize(size));
    }

    pub fn refresh(&self) {
        self.dispatch(ListAction::Refresh);
    }

    pub fn reset(&self) {
        self.dispatch(ListAction::Reset);
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn window(&self) -> Signal<PageWindow> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.window))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    /// A finished fetch came back with no rows.
    pub fn loaded_empty(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loaded && !s.loading && s.items.is_empty()))
    }

    pub fn query(&self) -> SearchQuery {
        self.state.with_untracked(|s| s.query.clone())
    }

    fn fetch(&self, request: SearchRequest) {
        let this = *self;
        spawn_local(async move {
            let path = format!("{}/search", this.path);
            match this.http.search::<T>(&path, &request).await {
                Ok(page) => {
                    log::debug!(
                        "{}: page {} of {}, {} rows",
                        path,
                        request.index + 1,
                        page.total_pages,
                        page.content.len()
                    );
                    this.dispatch(ListAction::Loaded(page));
                }
                Err(e) => {
                    log::error!("{} failed: {}", path, e);
                    let message = e.user_message(this.failure);
                    this.notify.error(message.clone());
                    this.dispatch(ListAction::Failed(message));
                }
            }
        });
    }
}
