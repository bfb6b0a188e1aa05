//! Paged Feed Controller
//!
//! State machine for an infinitely-scrolling listing fed by a paginated JSON
//! endpoint. The machine is DOM-free: the caller checks sentinel visibility,
//! performs the fetch and renders the items, and reports the outcome back
//! through [`FeedState::apply_response`] / [`FeedState::fail`].
//!
//! Every request carries a generation stamp. A filter reset bumps the
//! generation, so a response that was still in flight when the filters
//! changed is rejected as [`Applied::Stale`] instead of being rendered into
//! the freshly reset listing.

/// A request the caller should issue: `page` plus the generation it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub generation: u64,
}

/// Decoded page payload handed back to the machine.
#[derive(Clone, Debug, PartialEq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    /// Server-confirmed page number.
    pub page: u32,
    pub has_next: bool,
}

/// Outcome of applying a response.
#[derive(Debug, PartialEq)]
pub enum Applied<T> {
    /// Items accepted. A `page == 1` batch replaces the listing, any other
    /// page appends before the sentinel.
    Appended {
        page: u32,
        items: Vec<T>,
        has_next: bool,
    },
    /// Empty item list: the feed is exhausted, regardless of the response's
    /// own `has_next` flag. Terminal until [`FeedState::reset`].
    Finished,
    /// Response from a superseded generation; state untouched.
    Stale,
}

/// Feed lifecycle state. One instance per listing.
#[derive(Debug)]
pub struct FeedState {
    current_page: u32,
    has_next: bool,
    loading: bool,
    loaded_once: bool,
    generation: u64,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            has_next: true,
            loading: false,
            loaded_once: false,
            generation: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Gate for scroll/resize/click ticks. Returns the request to issue, or
    /// `None` when the feed is exhausted, a load is already in flight, or the
    /// sentinel is not visible. Entering the loading state here is what keeps
    /// concurrent ticks down to a single in-flight request.
    pub fn try_begin_load(&mut self, sentinel_visible: bool) -> Option<PageRequest> {
        if !self.has_next || self.loading || !sentinel_visible {
            return None;
        }
        self.loading = true;
        // Until a first page has been applied, re-request page 1 instead of
        // advancing past it (a failed initial load must not skip content).
        let page = if self.loaded_once {
            self.current_page + 1
        } else {
            self.current_page
        };
        Some(PageRequest {
            page,
            generation: self.generation,
        })
    }

    /// Filter change (or initial population): back to page 1, sentinel
    /// restored, new generation. The returned request must be issued by the
    /// caller; an in-flight response from before the reset will come back
    /// [`Applied::Stale`].
    pub fn reset(&mut self) -> PageRequest {
        self.generation += 1;
        self.current_page = 1;
        self.has_next = true;
        self.loading = true;
        self.loaded_once = false;
        PageRequest {
            page: 1,
            generation: self.generation,
        }
    }

    /// Apply a decoded response for `request`.
    pub fn apply_response<T>(&mut self, request: PageRequest, response: PageResponse<T>) -> Applied<T> {
        if request.generation != self.generation {
            // The loading flag now belongs to a newer request.
            return Applied::Stale;
        }
        self.loading = false;
        if response.items.is_empty() {
            self.has_next = false;
            return Applied::Finished;
        }
        self.current_page = response.page;
        self.has_next = response.has_next;
        self.loaded_once = true;
        Applied::Appended {
            page: response.page,
            items: response.items,
            has_next: response.has_next,
        }
    }

    /// Network / HTTP / decode failure for `request`. Leaves `has_next`
    /// untouched so a later tick retries; stale failures are ignored.
    pub fn fail(&mut self, request: PageRequest) {
        if request.generation == self.generation {
            self.loading = false;
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, page: u32, has_next: bool) -> PageResponse<u32> {
        PageResponse { items, page, has_next }
    }

    fn primed() -> FeedState {
        // A feed with page 1 already applied, as after the initial load.
        let mut feed = FeedState::new();
        let req = feed.reset();
        feed.apply_response(req, page(vec![1, 2], 1, true));
        feed
    }

    #[test]
    fn initial_load_requests_page_one() {
        let mut feed = FeedState::new();
        let req = feed.reset();
        assert_eq!(req.page, 1);
        assert!(feed.is_loading());
    }

    #[test]
    fn scroll_tick_requests_next_page() {
        let mut feed = primed();
        let req = feed.try_begin_load(true).expect("sentinel visible");
        assert_eq!(req.page, 2);
    }

    #[test]
    fn no_request_when_sentinel_not_visible() {
        let mut feed = primed();
        assert_eq!(feed.try_begin_load(false), None);
        assert!(!feed.is_loading());
    }

    #[test]
    fn concurrent_ticks_yield_one_request() {
        let mut feed = primed();
        assert!(feed.try_begin_load(true).is_some());
        // Second scroll event while the first request is in flight.
        assert_eq!(feed.try_begin_load(true), None);
    }

    #[test]
    fn empty_response_finishes_feed() {
        let mut feed = primed();
        let req = feed.try_begin_load(true).unwrap();
        // has_next from the payload is ignored for an empty item list.
        let applied = feed.apply_response(req, page(vec![], 2, true));
        assert_eq!(applied, Applied::Finished);
        assert!(!feed.has_next());
        assert_eq!(feed.try_begin_load(true), None);
    }

    #[test]
    fn applied_page_becomes_current() {
        let mut feed = primed();
        let req = feed.try_begin_load(true).unwrap();
        let applied = feed.apply_response(req, page(vec![5], 2, false));
        assert_eq!(
            applied,
            Applied::Appended { page: 2, items: vec![5], has_next: false }
        );
        assert_eq!(feed.current_page(), 2);
        // has_next=false: no more scroll-triggered requests.
        assert_eq!(feed.try_begin_load(true), None);
    }

    #[test]
    fn failure_allows_retry_without_touching_has_next() {
        let mut feed = primed();
        let req = feed.try_begin_load(true).unwrap();
        feed.fail(req);
        assert!(!feed.is_loading());
        assert!(feed.has_next());
        let retry = feed.try_begin_load(true).unwrap();
        assert_eq!(retry.page, 2);
    }

    #[test]
    fn failed_initial_load_retries_page_one() {
        let mut feed = FeedState::new();
        let req = feed.reset();
        feed.fail(req);
        let retry = feed.try_begin_load(true).unwrap();
        assert_eq!(retry.page, 1);
    }

    #[test]
    fn reset_returns_to_page_one_and_new_generation() {
        let mut feed = primed();
        let stale = feed.try_begin_load(true).unwrap();
        let fresh = feed.reset();
        assert_eq!(fresh.page, 1);
        assert!(fresh.generation > stale.generation);
        assert_eq!(feed.current_page(), 1);
        assert!(feed.has_next());
    }

    #[test]
    fn response_from_before_reset_is_stale() {
        let mut feed = primed();
        let stale = feed.try_begin_load(true).unwrap();
        let fresh = feed.reset();
        // The old page 2 arrives after the filters changed.
        let applied = feed.apply_response(stale, page(vec![9, 10], 2, true));
        assert_eq!(applied, Applied::Stale);
        // State still belongs to the reset request.
        assert_eq!(feed.current_page(), 1);
        assert!(feed.is_loading());
        // The reset's own response still applies normally.
        let applied = feed.apply_response(fresh, page(vec![7], 1, false));
        assert!(matches!(applied, Applied::Appended { page: 1, .. }));
    }

    #[test]
    fn stale_failure_keeps_newer_request_loading() {
        let mut feed = primed();
        let stale = feed.try_begin_load(true).unwrap();
        let _fresh = feed.reset();
        feed.fail(stale);
        assert!(feed.is_loading());
    }

    #[test]
    fn reset_after_finish_restores_feed() {
        let mut feed = primed();
        let req = feed.try_begin_load(true).unwrap();
        feed.apply_response(req, page(vec![], 2, false));
        assert!(!feed.has_next());
        let req = feed.reset();
        assert_eq!(req.page, 1);
        assert!(feed.has_next());
    }
}
