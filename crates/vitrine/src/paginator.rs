//! Page-windowed iteration over an in-memory sequence.
//!
//! [`Paginator`] is the pure view state `(items, page_size, current_page)`:
//! everything else — total pages, the visible slice — is derived on every
//! query, never cached, so it can never go stale when the backing data
//! changes. There is no loading state; this is a window over data already in
//! memory.
//!
//! [`VirtualList`] layers the UI contract on top: a per-item render
//! function, a key extractor for stable row identity, navigation-control
//! labels, and a [`page_changed`](VirtualList::page_changed) signal emitted
//! after every successful navigation.

use std::sync::Arc;

use vitrine_core::logging::targets;
use vitrine_core::Signal;

use crate::item::CatalogItem;
use crate::observable_store::LuxuryStore;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default label for the previous-page control.
pub const DEFAULT_PREVIOUS_LABEL: &str = "Previous";

/// Default label for the next-page control.
pub const DEFAULT_NEXT_LABEL: &str = "Next";

/// A fixed-size page window over an item sequence.
///
/// Navigation methods return `true` when the current page actually changed;
/// out-of-range requests are silent no-ops, not errors. An empty sequence
/// has zero pages, an empty window, and inert navigation.
///
/// # Example
///
/// ```
/// use vitrine::paginator::Paginator;
///
/// let mut pages = Paginator::new((0..25).collect::<Vec<_>>(), 10);
/// assert_eq!(pages.total_pages(), 3);
///
/// assert!(pages.go_to_page(2));
/// assert_eq!(pages.visible_items().len(), 5); // Final partial page
/// assert!(!pages.next_page()); // Already on the last page
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Paginator<T> {
    /// Creates a paginator over `items`, starting on page 0.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be non-zero");
        Self {
            items,
            page_size,
            current_page: 0,
        }
    }

    /// The full backing sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The zero-based current page index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of pages: `ceil(len / page_size)`.
    ///
    /// Zero for an empty sequence — callers must not treat that as an error.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Exactly the items of the current page.
    ///
    /// The window is `[current_page * page_size, ..][..page_size]`, clamped
    /// at the end of the sequence; the final page may be shorter than
    /// `page_size`. Recomputed on every call.
    pub fn visible_items(&self) -> &[T] {
        let start = self.current_page * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = usize::min(start + self.page_size, self.items.len());
        &self.items[start..end]
    }

    /// Advances one page if another page exists. Returns whether it moved.
    pub fn next_page(&mut self) -> bool {
        if (self.current_page + 1) * self.page_size < self.items.len() {
            self.current_page += 1;
            tracing::trace!(target: targets::PAGINATOR, page = self.current_page, "next page");
            true
        } else {
            false
        }
    }

    /// Goes back one page if not on page 0. Returns whether it moved.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            tracing::trace!(target: targets::PAGINATOR, page = self.current_page, "previous page");
            true
        } else {
            false
        }
    }

    /// Jumps to page `n` if `n < total_pages()`. Returns whether it moved.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n < self.total_pages() && n != self.current_page {
            self.current_page = n;
            tracing::trace!(target: targets::PAGINATOR, page = n, "go to page");
            true
        } else {
            false
        }
    }

    /// Replaces the backing sequence and resets to page 0.
    ///
    /// The reset is unconditional: it prevents the window from referencing a
    /// page that no longer exists after the data shrinks.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 0;
    }

    /// Changes the page size, clamping the current page back into range.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn set_page_size(&mut self, page_size: usize) {
        assert!(page_size > 0, "page_size must be non-zero");
        self.page_size = page_size;
        let last = self.total_pages().saturating_sub(1);
        self.current_page = usize::min(self.current_page, last);
    }
}

impl<T: CatalogItem + Clone> Paginator<T> {
    /// Builds a page window over a snapshot of an observable store.
    ///
    /// The window holds its own copy; rebind it from
    /// [`LuxuryStore::on_store_changed`] snapshots to follow the store.
    pub fn from_store(store: &LuxuryStore<T>, page_size: usize) -> Self {
        Self::new(store.items(), page_size)
    }
}

/// A keyed, rendered row of a [`VirtualList`] page.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<R> {
    /// Stable identity of the row across recomputes.
    pub key: String,
    /// The output of the render function for this item.
    pub content: R,
}

/// Navigation-control state derived from the current page window.
#[derive(Debug, Clone, PartialEq)]
pub struct PageControls {
    /// Whether the host should render controls at all.
    pub show: bool,
    /// Label for the previous-page control.
    pub previous_label: String,
    /// Label for the next-page control.
    pub next_label: String,
    /// Whether a previous page exists.
    pub can_previous: bool,
    /// Whether a next page exists.
    pub can_next: bool,
}

/// Per-item render function: item in, rendered row content out.
pub type RenderFn<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

/// Key extractor: item plus absolute position in the backing sequence.
pub type KeyFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// The UI-facing windowed list controller.
///
/// Wraps a [`Paginator`] and adds the rendering contract: each visible item
/// is turned into a [`Row`] carrying a stable key and the render output.
/// Successful navigation emits [`page_changed`](Self::page_changed) with the
/// new zero-based page index.
///
/// The default key extractor derives the key from the item's absolute
/// position. Callers whose data can reorder or be filtered should supply
/// their own via [`with_key_extractor`](Self::with_key_extractor) —
/// positional keys are only stable while the sequence is.
///
/// # Example
///
/// ```
/// use vitrine::paginator::VirtualList;
///
/// let names: Vec<String> = (1..=25).map(|i| format!("Item {i}")).collect();
/// let mut list = VirtualList::new(names, |name: &String| name.to_uppercase())
///     .with_page_size(10);
///
/// assert_eq!(list.visible_rows().len(), 10);
/// list.next_page();
/// assert_eq!(list.visible_rows()[0].content, "ITEM 11");
/// ```
pub struct VirtualList<T, R> {
    paginator: Paginator<T>,
    render_item: RenderFn<T, R>,
    key_extractor: KeyFn<T>,
    show_controls: bool,
    previous_label: String,
    next_label: String,
    /// Emitted with the new zero-based page index after every successful
    /// navigation (and after a `set_items` that moved the page back to 0).
    pub page_changed: Signal<usize>,
}

impl<T, R> VirtualList<T, R> {
    /// Creates a list over `items` with the given render function and the
    /// default configuration: page size [`DEFAULT_PAGE_SIZE`], positional
    /// keys, controls shown, English labels.
    pub fn new<F>(items: Vec<T>, render_item: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self {
            paginator: Paginator::new(items, DEFAULT_PAGE_SIZE),
            render_item: Arc::new(render_item),
            key_extractor: Arc::new(|_, position| format!("row-{position}")),
            show_controls: true,
            previous_label: DEFAULT_PREVIOUS_LABEL.to_string(),
            next_label: DEFAULT_NEXT_LABEL.to_string(),
            page_changed: Signal::new(),
        }
    }

    /// Sets the page size.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.paginator.set_page_size(page_size);
        self
    }

    /// Overrides the key extractor. The second argument is the item's
    /// absolute position in the backing sequence.
    pub fn with_key_extractor<F>(mut self, key_extractor: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        self.key_extractor = Arc::new(key_extractor);
        self
    }

    /// Hides or shows the navigation controls.
    pub fn with_show_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    /// Overrides the navigation labels (localization hook).
    pub fn with_labels(
        mut self,
        previous_label: impl Into<String>,
        next_label: impl Into<String>,
    ) -> Self {
        self.previous_label = previous_label.into();
        self.next_label = next_label.into();
        self
    }

    /// The zero-based current page index.
    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// The configured page size.
    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    /// Renders the current page: one keyed [`Row`] per visible item.
    ///
    /// Recomputed from the paginator window on every call.
    pub fn visible_rows(&self) -> Vec<Row<R>> {
        let offset = self.paginator.current_page() * self.paginator.page_size();
        self.paginator
            .visible_items()
            .iter()
            .enumerate()
            .map(|(i, item)| Row {
                key: (self.key_extractor)(item, offset + i),
                content: (self.render_item)(item),
            })
            .collect()
    }

    /// Navigation-control state for the current window.
    pub fn controls(&self) -> PageControls {
        PageControls {
            show: self.show_controls,
            previous_label: self.previous_label.clone(),
            next_label: self.next_label.clone(),
            can_previous: self.paginator.current_page() > 0,
            can_next: self.paginator.current_page() + 1 < self.paginator.total_pages(),
        }
    }

    /// Advances one page, emitting `page_changed` on success.
    pub fn next_page(&mut self) -> bool {
        let moved = self.paginator.next_page();
        if moved {
            self.page_changed.emit(self.paginator.current_page());
        }
        moved
    }

    /// Goes back one page, emitting `page_changed` on success.
    pub fn previous_page(&mut self) -> bool {
        let moved = self.paginator.previous_page();
        if moved {
            self.page_changed.emit(self.paginator.current_page());
        }
        moved
    }

    /// Jumps to page `n`, emitting `page_changed` on success.
    /// Out-of-range requests are silently ignored.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        let moved = self.paginator.go_to_page(n);
        if moved {
            self.page_changed.emit(n);
        }
        moved
    }

    /// Replaces the backing data and resets to page 0.
    ///
    /// `page_changed(0)` is emitted only if the reset actually moved the
    /// page.
    pub fn set_items(&mut self, items: Vec<T>) {
        let was = self.paginator.current_page();
        self.paginator.set_items(items);
        if was != 0 {
            self.page_changed.emit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    use crate::builder::LuxuryItemBuilder;
    use crate::item::LuxuryItem;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Paginator::new(items(25), 10).total_pages(), 3);
        assert_eq!(Paginator::new(items(30), 10).total_pages(), 3);
        assert_eq!(Paginator::new(items(1), 10).total_pages(), 1);
        assert_eq!(Paginator::new(items(0), 10).total_pages(), 0);
    }

    #[test]
    fn test_scenario_25_items_page_size_10() {
        let mut pages = Paginator::new(items(25), 10);
        assert_eq!(pages.total_pages(), 3);

        assert!(pages.go_to_page(2));
        assert_eq!(pages.visible_items().len(), 5);
        assert_eq!(pages.visible_items(), &[20, 21, 22, 23, 24]);

        // next_page on the last page is a no-op.
        assert!(!pages.next_page());
        assert_eq!(pages.current_page(), 2);
    }

    #[test]
    fn test_boundary_no_ops() {
        let mut pages = Paginator::new(items(25), 10);

        assert!(!pages.previous_page()); // Page 0
        assert_eq!(pages.current_page(), 0);

        assert!(!pages.go_to_page(3)); // Out of range
        assert!(!pages.go_to_page(100));
        assert_eq!(pages.current_page(), 0);

        assert!(pages.next_page());
        assert!(pages.previous_page());
        assert_eq!(pages.current_page(), 0);
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let mut pages = Paginator::new(items(20), 10);
        assert_eq!(pages.total_pages(), 2);
        assert!(pages.next_page());
        assert!(!pages.next_page()); // No third page
        assert_eq!(pages.visible_items().len(), 10);
    }

    #[test]
    fn test_empty_sequence() {
        let mut pages = Paginator::new(items(0), 10);
        assert_eq!(pages.total_pages(), 0);
        assert!(pages.visible_items().is_empty());
        assert!(!pages.next_page());
        assert!(!pages.previous_page());
        assert!(!pages.go_to_page(0));
    }

    #[test]
    fn test_set_items_resets_page() {
        let mut pages = Paginator::new(items(25), 10);
        pages.go_to_page(2);

        pages.set_items(items(8));
        assert_eq!(pages.current_page(), 0);
        assert_eq!(pages.total_pages(), 1);
        assert_eq!(pages.visible_items().len(), 8);
    }

    #[test]
    fn test_set_page_size_reclamps_current_page() {
        let mut pages = Paginator::new(items(25), 5);
        pages.go_to_page(4); // Pages of 5: 0..=4
        pages.set_page_size(10); // Now only pages 0..=2
        assert_eq!(pages.current_page(), 2);
        assert_eq!(pages.visible_items(), &[20, 21, 22, 23, 24]);
    }

    #[test]
    #[should_panic(expected = "page_size must be non-zero")]
    fn test_zero_page_size_panics() {
        let _ = Paginator::new(items(5), 0);
    }

    #[test]
    fn test_from_store_snapshot() {
        let store = crate::observable_store::LuxuryStore::new();
        for i in 0..12 {
            store
                .add(
                    LuxuryItemBuilder::new()
                        .with_id(format!("id-{i}"))
                        .with_name(format!("Item {i}"))
                        .with_price(100.0)
                        .with_category("jewelry")
                        .build()
                        .unwrap(),
                )
                .unwrap();
        }

        let pages: Paginator<LuxuryItem> = Paginator::from_store(&store, 5);
        assert_eq!(pages.total_pages(), 3);
        assert_eq!(pages.visible_items()[0].id, "id-0");
    }

    #[test]
    fn test_virtual_list_defaults() {
        let list = VirtualList::new(items(25), |&n| n * 2);
        assert_eq!(list.page_size(), DEFAULT_PAGE_SIZE);

        let controls = list.controls();
        assert!(controls.show);
        assert_eq!(controls.previous_label, "Previous");
        assert_eq!(controls.next_label, "Next");
        assert!(!controls.can_previous);
        assert!(controls.can_next);
    }

    #[test]
    fn test_virtual_list_renders_window() {
        let mut list = VirtualList::new(items(25), |&n| format!("#{n}")).with_page_size(10);

        let rows = list.visible_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].content, "#0");

        list.go_to_page(2);
        let rows = list.visible_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].content, "#20");
    }

    #[test]
    fn test_default_keys_are_stable_and_distinct_across_pages() {
        let mut list = VirtualList::new(items(25), |&n| n).with_page_size(10);

        let first_page_keys: Vec<_> = list.visible_rows().into_iter().map(|r| r.key).collect();
        assert_eq!(first_page_keys[0], "row-0");

        list.next_page();
        let second_page_keys: Vec<_> = list.visible_rows().into_iter().map(|r| r.key).collect();
        assert_eq!(second_page_keys[0], "row-10");
        for key in &second_page_keys {
            assert!(!first_page_keys.contains(key));
        }

        // Recomputing the same page yields the same keys.
        let again: Vec<_> = list.visible_rows().into_iter().map(|r| r.key).collect();
        assert_eq!(again, second_page_keys);
    }

    #[test]
    fn test_custom_key_extractor() {
        let store_items = vec![
            LuxuryItemBuilder::new()
                .with_id("sku-1")
                .with_name("Ring")
                .with_price(100.0)
                .with_category("jewelry")
                .build()
                .unwrap(),
        ];
        let list = VirtualList::new(store_items, |item: &LuxuryItem| item.name.clone())
            .with_key_extractor(|item, _| item.id.clone());

        assert_eq!(list.visible_rows()[0].key, "sku-1");
    }

    #[test]
    fn test_page_changed_emitted_per_successful_navigation() {
        let mut list = VirtualList::new(items(25), |&n| n).with_page_size(10);
        let pages_seen = std::sync::Arc::new(Mutex::new(Vec::new()));

        let recv = pages_seen.clone();
        list.page_changed.connect(move |&page| {
            recv.lock().push(page);
        });

        assert!(list.next_page()); // -> 1
        assert!(list.next_page()); // -> 2
        assert!(!list.next_page()); // No-op, no emission
        assert!(list.go_to_page(0)); // -> 0
        assert!(!list.go_to_page(7)); // Out of range, no emission
        assert!(!list.previous_page()); // Page 0, no emission

        assert_eq!(*pages_seen.lock(), vec![1, 2, 0]);
    }

    #[test]
    fn test_set_items_emits_reset_only_when_page_moved() {
        let mut list = VirtualList::new(items(25), |&n| n).with_page_size(10);
        let pages_seen = std::sync::Arc::new(Mutex::new(Vec::new()));

        let recv = pages_seen.clone();
        list.page_changed.connect(move |&page| {
            recv.lock().push(page);
        });

        list.set_items(items(30)); // Already on page 0: no emission
        assert!(pages_seen.lock().is_empty());

        list.go_to_page(2);
        list.set_items(items(5)); // Page 2 -> 0: emission
        assert_eq!(*pages_seen.lock(), vec![2, 0]);
        assert_eq!(list.current_page(), 0);
    }

    #[test]
    fn test_labels_override() {
        let list = VirtualList::new(items(3), |&n| n)
            .with_labels("Précédent", "Suivant")
            .with_show_controls(false);

        let controls = list.controls();
        assert!(!controls.show);
        assert_eq!(controls.previous_label, "Précédent");
        assert_eq!(controls.next_label, "Suivant");
    }
}
