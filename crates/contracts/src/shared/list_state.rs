//! Search / paginate controller for list screens.
//!
//! Pure state machine: every transition returns the fetch it needs (if any)
//! and the UI layer is responsible for sending it and feeding the outcome
//! back as [`ListAction::Loaded`] or [`ListAction::Failed`].

use super::api::PageData;
use super::pagination::{PageWindow, DEFAULT_PAGE_SIZE};
use super::search::{PagingKeys, SearchQuery, SearchRequest, SortSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    pub paging: PagingKeys,
    pub default_size: usize,
    pub sort: Option<SortSpec>,
    pub default_query: SearchQuery,
}

impl ListConfig {
    pub fn new(paging: PagingKeys) -> Self {
        Self {
            paging,
            default_size: DEFAULT_PAGE_SIZE,
            sort: None,
            default_query: SearchQuery::default(),
        }
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.default_size = size;
        self
    }

    pub fn sorted(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn query(mut self, query: SearchQuery) -> Self {
        self.default_query = query;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    /// First render of the screen.
    Init,
    SetFilter(SearchQuery),
    /// Filter control changed; fetches only when the sent filters differ.
    ChangeFilter(SearchQuery),
    GoToPage(usize),
    SetPageSize(usize),
    Refresh,
    Reset,
    Loaded(PageData<T>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub config: ListConfig,
    pub query: SearchQuery,
    pub window: PageWindow,
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded: bool,
}

impl<T> ListState<T> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            query: config.default_query.clone(),
            window: PageWindow::with_size(config.default_size),
            config,
            items: Vec::new(),
            loading: false,
            error: None,
            loaded: false,
        }
    }

    pub fn reduce(mut self, action: ListAction<T>) -> (Self, Option<SearchRequest>) {
        let request = self.apply(action);
        (self, request)
    }

    /// In-place variant of [`ListState::reduce`], handy inside `RwSignal::update`.
    pub fn apply(&mut self, action: ListAction<T>) -> Option<SearchRequest> {
        match action {
            ListAction::Init | ListAction::Refresh => Some(self.begin_fetch()),
            ListAction::SetFilter(query) => {
                self.query = query;
                self.window.index = 0;
                Some(self.begin_fetch())
            }
            ListAction::ChangeFilter(query) => {
                if self.query.same_filters(&query) {
                    self.query = query;
                    None
                } else {
                    self.apply(ListAction::SetFilter(query))
                }
            }
            ListAction::GoToPage(index) => {
                if !self.window.can_go_to(index) {
                    return None;
                }
                self.window.index = index;
                Some(self.begin_fetch())
            }
            ListAction::SetPageSize(size) => {
                if size == 0 {
                    return None;
                }
                self.window.size = size;
                self.window.index = 0;
                Some(self.begin_fetch())
            }
            ListAction::Reset => {
                self.query = self.config.default_query.clone();
                self.window.size = self.config.default_size;
                self.window.index = 0;
                Some(self.begin_fetch())
            }
            ListAction::Loaded(page) => {
                self.items = page.content;
                self.window.total_elements = page.total_elements;
                self.window.total_pages = page.total_pages;
                self.loading = false;
                self.error = None;
                self.loaded = true;
                self.clamp_index()
            }
            ListAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
                None
            }
        }
    }

    /// A shrinking result set can leave the index past the end; pull it
    /// back to the last page and fetch again.
    fn clamp_index(&mut self) -> Option<SearchRequest> {
        let w = self.window;
        if w.index == 0 || w.index * w.size < w.total_elements {
            return None;
        }
        let last = w.last_index();
        if last == w.index {
            return None;
        }
        self.window.index = last;
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> SearchRequest {
        self.loading = true;
        self.error = None;
        self.request()
    }

    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            fields: self.query.to_fields(),
            index: self.window.index,
            size: self.window.size,
            keys: self.config.paging,
            sort: self.config.sort.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::date_format::DateBound;

    fn page(content: Vec<u32>, total_elements: usize, total_pages: usize) -> PageData<u32> {
        PageData {
            content,
            total_pages,
            total_elements,
        }
    }

    fn loaded(total_elements: usize, total_pages: usize) -> ListState<u32> {
        let state = ListState::new(ListConfig::new(PagingKeys::CurrentPage));
        let (state, _) = state.reduce(ListAction::Init);
        let (state, req) = state.reduce(ListAction::Loaded(page(vec![1, 2], total_elements, total_pages)));
        assert!(req.is_none());
        state
    }

    #[test]
    fn init_requests_first_page() {
        let (state, req) = ListState::<u32>::new(ListConfig::new(PagingKeys::PageSize)).reduce(ListAction::Init);
        let req = req.unwrap();
        assert_eq!((req.index, req.size), (0, DEFAULT_PAGE_SIZE));
        assert!(state.loading);
    }

    #[test]
    fn go_to_page_out_of_range_is_ignored() {
        let state = loaded(25, 3);
        let before = state.clone();
        let (state, req) = state.reduce(ListAction::GoToPage(3));
        assert!(req.is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn go_to_page_in_range_fetches() {
        let (state, req) = loaded(25, 3).reduce(ListAction::GoToPage(2));
        assert_eq!(state.window.index, 2);
        assert_eq!(req.unwrap().index, 2);
    }

    #[test]
    fn filter_and_page_size_reset_index() {
        let (state, _) = loaded(25, 3).reduce(ListAction::GoToPage(1));
        let (state, req) = state.reduce(ListAction::SetFilter(SearchQuery::new().text("search", "pipe")));
        assert_eq!(state.window.index, 0);
        assert_eq!(req.unwrap().fields["search"], "pipe");

        let (state, _) = state.reduce(ListAction::GoToPage(1));
        let (state, req) = state.reduce(ListAction::SetPageSize(50));
        assert_eq!((state.window.index, state.window.size), (0, 50));
        assert!(req.is_some());
    }

    #[test]
    fn zero_page_size_is_ignored() {
        let (state, req) = loaded(25, 3).reduce(ListAction::SetPageSize(0));
        assert!(req.is_none());
        assert_eq!(state.window.size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn failure_keeps_previous_items() {
        let (state, _) = loaded(25, 3).reduce(ListAction::Refresh);
        let (state, req) = state.reduce(ListAction::Failed("Failed to load sales".into()));
        assert!(req.is_none());
        assert_eq!(state.items, vec![1, 2]);
        assert_eq!(state.error.as_deref(), Some("Failed to load sales"));
        assert!(!state.loading);
    }

    #[test]
    fn shrunk_result_clamps_and_refetches() {
        let (state, _) = loaded(25, 3).reduce(ListAction::GoToPage(2));
        // rows were deleted elsewhere, only one page left
        let (state, req) = state.reduce(ListAction::Loaded(page(vec![], 8, 1)));
        assert_eq!(state.window.index, 0);
        assert_eq!(req.unwrap().index, 0);
    }

    #[test]
    fn reset_restores_defaults() {
        let config = ListConfig::new(PagingKeys::PageSize)
            .page_size(5)
            .query(SearchQuery::new().status("status", "A"));
        let state = ListState::<u32>::new(config);
        let (state, _) = state.reduce(ListAction::SetFilter(SearchQuery::new().text("search", "x")));
        let (state, _) = state.reduce(ListAction::SetPageSize(100));
        let (state, req) = state.reduce(ListAction::Reset);
        assert_eq!(state.window.size, 5);
        assert_eq!(req.unwrap().fields["status"], "A");
    }

    #[test]
    fn cleared_controls_after_reset_do_not_refetch() {
        let config = ListConfig::new(PagingKeys::CurrentPage).page_size(5);
        let state = ListState::<u32>::new(config);
        let (state, _) = state.reduce(ListAction::Init);
        let (state, _) = state.reduce(ListAction::SetFilter(
            SearchQuery::new().id("productId", Some(3)).date("startDate", "2024-01-01", DateBound::StartOfDay),
        ));
        let (state, req) = state.reduce(ListAction::Reset);
        assert!(req.is_some());

        let cleared = SearchQuery::new()
            .text("search", "")
            .id("productId", None)
            .date_range("", "", DateBound::EndOfDay);
        let (state, req) = state.reduce(ListAction::ChangeFilter(cleared));
        assert!(req.is_none());

        let (_, req) = state.reduce(ListAction::ChangeFilter(SearchQuery::new().id("productId", Some(8))));
        assert_eq!(req.unwrap().fields["productId"], 8);
    }
}
