//! Main application state and event loop logic.
//!
//! This module follows The Elm Architecture (TEA): `App` is the model,
//! [`App::update`] and [`App::handle_api_message`] are the only places that
//! change it, and [`App::view`] renders it.
//!
//! Fetching is not done here. When the page changes the app records a
//! tagged [`PageRequest`]; the main loop takes it with
//! [`App::take_pending_fetch`] and spawns the fetch. Responses come back
//! through `handle_api_message`, which drops any whose tag is no longer
//! current.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::api::Artwork;
use crate::config::Settings;
use crate::events::{Event, KeyContext};
use crate::page::{FetchStatus, PageRequest, PageWindow, RequestTracker};
use crate::selection::SelectionSet;
use crate::tasks::ApiMessage;
use crate::ui::{
    context_hint_spans, render_selected_panel, theme::theme, ArtworkTable, BulkSelectAction,
    BulkSelectDialog, HelpAction, HelpView, LoadingIndicator, NotificationManager, TableAction,
};

/// Height of the selected rows panel, borders included.
const SELECTED_PANEL_HEIGHT: u16 = 8;

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing the table.
    Browsing,
    /// The bulk-select dialog is open.
    SelectingRows,
    /// The help overlay is open.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// Whether the application should quit.
    should_quit: bool,
    /// Current page index, size and known total.
    window: PageWindow,
    /// The window as of the last successful fetch; describes `rows`.
    shown: PageWindow,
    /// Rows of the visible page, in catalog order.
    rows: Vec<Artwork>,
    /// Cross-page selection.
    selection: SelectionSet,
    /// Status of the visible page's data.
    status: FetchStatus,
    /// Tags fetches so stale responses can be dropped.
    requests: RequestTracker,
    /// A fetch waiting to be spawned by the main loop.
    pending_fetch: Option<PageRequest>,
    /// The artwork table widget.
    table: ArtworkTable,
    /// The bulk-select dialog.
    dialog: BulkSelectDialog,
    /// Help overlay.
    help: HelpView,
    /// Whether the help overlay is shown.
    show_help: bool,
    /// Status bar spinner.
    loading: LoadingIndicator,
    /// Toast notifications.
    notifications: NotificationManager,
}

impl App {
    /// Create the application and queue the fetch of the first page.
    pub fn new(settings: &Settings) -> Self {
        debug!(page_size = settings.page_size, "Creating application");

        let mut app = Self {
            should_quit: false,
            window: PageWindow::new(settings.page_size),
            shown: PageWindow::new(settings.page_size),
            rows: Vec::new(),
            selection: SelectionSet::new(),
            status: FetchStatus::Loading,
            requests: RequestTracker::new(),
            pending_fetch: None,
            table: ArtworkTable::new(),
            dialog: BulkSelectDialog::new(settings.page_size),
            help: HelpView::new(),
            show_help: false,
            loading: LoadingIndicator::new(),
            notifications: NotificationManager::new(),
        };
        app.request_current_page();
        app
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns what currently has focus.
    pub fn state(&self) -> AppState {
        if self.should_quit {
            AppState::Exiting
        } else if self.dialog.is_visible() {
            AppState::SelectingRows
        } else if self.show_help {
            AppState::Help
        } else {
            AppState::Browsing
        }
    }

    /// The page window.
    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Rows of the visible page.
    pub fn rows(&self) -> &[Artwork] {
        &self.rows
    }

    /// The cross-page selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Status of the visible page's data.
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Check if the bulk-select dialog is open.
    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Take the fetch the main loop should spawn next, if any.
    pub fn take_pending_fetch(&mut self) -> Option<PageRequest> {
        self.pending_fetch.take()
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Issue a fetch for the current page. Any earlier fetch becomes stale.
    fn request_current_page(&mut self) {
        let request = self.requests.issue(&self.window);
        debug!(
            generation = request.generation,
            page = request.page,
            "Requesting page"
        );
        self.pending_fetch = Some(request);
        self.status = FetchStatus::Loading;
        self.loading
            .start_with_message(format!("Loading page {}...", request.page + 1));
    }

    /// Queue a fetch if the window moved. Returns `moved`.
    fn after_move(&mut self, moved: bool) -> bool {
        if moved {
            self.request_current_page();
        }
        moved
    }

    /// Go to a 0-based page. Returns true if a fetch was queued.
    pub fn go_to_page(&mut self, index: usize) -> bool {
        let moved = self.window.go_to(index);
        self.after_move(moved)
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> bool {
        let moved = self.window.next();
        self.after_move(moved)
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.window.prev();
        self.after_move(moved)
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> bool {
        let moved = self.window.first();
        self.after_move(moved)
    }

    /// Go to the last known page.
    pub fn last_page(&mut self) -> bool {
        let moved = self.window.last();
        self.after_move(moved)
    }

    /// Re-fetch the current page.
    pub fn refresh(&mut self) {
        info!(page = self.window.index(), "Reloading page");
        self.request_current_page();
    }

    /// Apply a message from a background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::PageFetched { request, result } => {
                if !self.requests.complete(&request) {
                    debug!(
                        generation = request.generation,
                        page = request.page,
                        "Discarding stale page response"
                    );
                    return;
                }

                self.loading.stop();
                match result {
                    Ok(page) => {
                        debug!(
                            page = request.page,
                            rows = page.rows.len(),
                            total = page.total,
                            "Page loaded"
                        );
                        self.rows = page.rows;
                        self.window.set_total(page.total);
                        self.shown = self.window;
                        self.table.reset_cursor();
                        self.status = FetchStatus::Ready;
                    }
                    Err(e) => {
                        warn!(page = request.page, error = %e, "Page fetch failed");
                        self.notifications
                            .error(format!("Could not load page {}: {}", request.page + 1, e));
                        self.status = FetchStatus::Failed(e);
                    }
                }
            }
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Replace the selection with the table's reported set.
    pub fn on_selection_change(&mut self, rows: Vec<Artwork>) {
        self.selection.replace(rows);
        trace!(selected = self.selection.len(), "Selection changed");
    }

    /// Open the bulk-select dialog.
    pub fn open_bulk_select(&mut self) {
        self.dialog.open();
    }

    /// Select the first `requested` rows of the visible page.
    pub fn apply_bulk_select(&mut self, requested: usize) {
        let count = self.selection.apply_first_n(&self.rows, requested);
        if count > 0 {
            self.notifications
                .success(format!("Selected first {} rows of this page", count));
        } else {
            self.notifications.info("No rows on this page to select");
        }
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => {
                self.loading.tick();
                self.notifications.tick();
            }
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        // The dialog is modal and consumes all input while open.
        if self.dialog.is_visible() {
            match self.dialog.handle_input(key_event) {
                Some(BulkSelectAction::Apply(n)) => {
                    debug!(requested = n, "Bulk select applied");
                    self.apply_bulk_select(n);
                }
                Some(BulkSelectAction::Cancel) => debug!("Bulk select cancelled"),
                None => {}
            }
            return;
        }

        if self.show_help {
            if let Some(HelpAction::Close) = self.help.handle_input(key_event) {
                self.show_help = false;
            }
            return;
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('?'), _) => {
                self.help.reset_scroll();
                self.show_help = true;
                return;
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                self.open_bulk_select();
                return;
            }
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                self.refresh();
                return;
            }
            _ => {}
        }

        if let Some(action) = self
            .table
            .handle_input(key_event, &self.rows, &self.selection)
        {
            match action {
                TableAction::SelectionChanged(rows) => self.on_selection_change(rows),
                TableAction::NextPage => {
                    self.next_page();
                }
                TableAction::PrevPage => {
                    self.prev_page();
                }
                TableAction::FirstPage => {
                    self.first_page();
                }
                TableAction::LastPage => {
                    self.last_page();
                }
            }
        }
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                     // Header
                Constraint::Min(5),                        // Table
                Constraint::Length(SELECTED_PANEL_HEIGHT), // Selected rows
                Constraint::Length(1),                     // Status bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);

        let title = self.table_title();
        self.table
            .render(frame, chunks[1], &self.rows, &self.selection, &title);

        render_selected_panel(frame, chunks[2], &self.selection);
        self.render_status_bar(frame, chunks[3]);

        self.notifications.render(frame, area);
        if self.show_help {
            self.help.render(frame, area);
        }
        self.dialog.render(frame, area, self.rows.len());
    }

    /// Title for the table, describing the rows actually on screen.
    ///
    /// While a fetch is outstanding or after one failed, this is the page
    /// that last loaded, not the one requested.
    pub fn table_title(&self) -> String {
        let shown = &self.shown;
        let mut title = if self.rows.is_empty() {
            format!(
                "Page {} of {} · {} records",
                shown.index() + 1,
                shown.page_count(),
                shown.total()
            )
        } else {
            let first = shown.first_row() + 1;
            let last = shown.first_row() + self.rows.len() as u64;
            format!(
                "Page {} of {} · rows {}-{} of {}",
                shown.index() + 1,
                shown.page_count(),
                first,
                last,
                shown.total()
            )
        };
        if self.status.is_failed() {
            title.push_str(" (stale)");
        }
        title
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let title = Paragraph::new("Artworks")
            .style(Style::default().fg(t.accent).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(t.dim)),
            );
        frame.render_widget(title, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let status = match &self.status {
            FetchStatus::Loading => Span::styled(
                format!(" {} ", self.loading.text()),
                Style::default().fg(t.accent),
            ),
            FetchStatus::Ready => Span::styled(" Ready ", Style::default().fg(t.success)),
            FetchStatus::Failed(message) => Span::styled(
                format!(" Error: {} ", message),
                Style::default().fg(t.error).add_modifier(Modifier::BOLD),
            ),
        };

        let context = match self.state() {
            AppState::SelectingRows => KeyContext::BulkSelect,
            AppState::Help => KeyContext::Help,
            _ => KeyContext::Table,
        };

        let mut spans = vec![
            status,
            Span::styled(
                format!(" {} selected ", self.selection.len()),
                Style::default().fg(t.warning),
            ),
            Span::raw(" "),
        ];
        spans.extend(context_hint_spans(context));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
