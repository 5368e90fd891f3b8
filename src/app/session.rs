//! Per-plugin session and view model computation.
//!
//! A [`Session`] bundles everything one plugin instance owns: the item store,
//! the fetch controller, the keyboard mode and the theme. It is created fresh
//! by [`initialize`](crate::initialize) (or directly in tests), never shared.
//!
//! [`Session::compute_viewmodel`] projects the session into a
//! [`UIViewModel`] for a given terminal size. It is a pure read: rendering
//! never mutates state.

use super::derive;
use super::modes::InputMode;
use super::store::ItemStore;
use crate::domain::Item;
use crate::fetch::FetchController;
use crate::ui::helpers::format_elapsed;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, FooterInfo, HeaderInfo, PageButton, PaginationInfo, SearchBarInfo, StatusKind,
    StatusPanel, UIViewModel,
};
use crate::Config;

/// Rows used by everything except the item rows: blank line, header, border,
/// search bar (3), column headers, page controls, border, footer, and one
/// spare row at the bottom.
const CHROME_ROWS: usize = 11;

/// Width of the ID column including its trailing gap.
pub const ID_COLUMN_WIDTH: usize = 8;

/// Everything one plugin instance owns.
#[derive(Debug)]
pub struct Session {
    /// State container for items, search and pagination.
    pub store: ItemStore,

    /// Fetch lifecycle owner.
    pub fetcher: FetchController,

    /// Current keyboard mode.
    pub input_mode: InputMode,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl Session {
    /// Creates an idle session: empty store, no fetch issued yet.
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            store: ItemStore::new(config.items_per_page),
            fetcher: FetchController::new(config.endpoint.clone()),
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// Loading wins over error, and either replaces the list entirely. With
    /// neither set, the current page is shown, cut to the rows that fit.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let state = self.store.state();
        let header = self.compute_header();
        let footer = self.compute_footer();

        let status = if state.loading {
            Some(StatusPanel {
                kind: StatusKind::Loading,
                message: "Loading...".to_string(),
                subtitle: format!("Fetching {}", self.fetcher.endpoint()),
            })
        } else {
            state.error.as_ref().map(|error| StatusPanel {
                kind: StatusKind::Error,
                message: format!("Error: {error}"),
                subtitle: "Press r to retry".to_string(),
            })
        };

        if status.is_some() {
            return UIViewModel {
                header,
                footer,
                status,
                search_bar: None,
                display_items: vec![],
                notice: None,
                pagination: None,
            };
        }

        let view = self.store.view();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let max_name_width = cols.saturating_sub(ID_COLUMN_WIDTH + 2);

        // One row goes to the overflow notice when the page does not fit.
        let shown_rows = if view.paginated.len() > available_rows {
            available_rows.saturating_sub(1).max(1)
        } else {
            view.paginated.len()
        };

        let display_items = view
            .paginated
            .iter()
            .take(shown_rows)
            .map(|item| Self::compute_display_item(item, &state.search_term, max_name_width))
            .collect();

        UIViewModel {
            header,
            footer,
            status: None,
            search_bar: Some(SearchBarInfo {
                query: state.search_term.clone(),
                is_focused: self.input_mode == InputMode::Search,
            }),
            display_items,
            notice: self.compute_notice(shown_rows),
            pagination: Some(PaginationInfo {
                buttons: (1..=view.total_pages)
                    .map(|number| PageButton {
                        number,
                        is_current: number == state.current_page,
                    })
                    .collect(),
            }),
        }
    }

    fn compute_display_item(item: &Item, term: &str, max_width: usize) -> DisplayItem {
        let char_count = item.name.chars().count();
        let (name, visible) = if char_count > max_width {
            let keep = max_width.saturating_sub(3);
            let truncated: String = item.name.chars().take(keep).collect();
            (format!("{truncated}..."), keep)
        } else {
            (item.name.clone(), char_count)
        };

        let highlight_ranges = derive::match_ranges(&item.name, term)
            .into_iter()
            .filter(|&(start, _)| start < visible)
            .map(|(start, end)| (start, end.min(visible)))
            .collect();

        DisplayItem {
            id: item.id.to_string(),
            name,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let state = self.store.state();
        let total = state.items.len();
        let title = if state.search_term.is_empty() {
            format!(" Items ({total}) ")
        } else {
            let matched = self.store.view().filtered.len();
            format!(" Items ({matched} of {total}) ")
        };

        let updated = self.fetcher.last_success_at().map(|at| {
            let elapsed = chrono::Utc::now().signed_duration_since(at).num_seconds();
            format!("updated {}", format_elapsed(elapsed))
        });

        HeaderInfo { title, updated }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Type to filter  Backspace: delete  Enter: done  ESC: clear search",
            InputMode::Normal => {
                "n/p: page  1-9: jump  /: search  c: clear search  r: refresh  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Explains an empty page, or counts the rows of a page that did not fit.
    fn compute_notice(&self, shown_rows: usize) -> Option<String> {
        let state = self.store.state();
        let view = self.store.view();

        if !view.paginated.is_empty() {
            let hidden = view.paginated.len().saturating_sub(shown_rows);
            (hidden > 0).then(|| format!("+{hidden} more on this page, enlarge the pane"))
        } else if state.items.is_empty() {
            Some("No items".to_string())
        } else if view.filtered.is_empty() {
            Some(format!("No items match \"{}\"", state.search_term))
        } else {
            Some(format!("Nothing on page {}", state.current_page))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Transition;
    use crate::fetch::FetchOutcome;

    fn session(per_page: usize) -> Session {
        let config = Config {
            items_per_page: per_page,
            ..Config::default()
        };
        Session::new(&config, Theme::default())
    }

    fn load(session: &mut Session, names: &[&str]) {
        let request = session.fetcher.begin(&mut session.store).unwrap();
        let items = names.iter().zip(1..).map(|(n, id)| Item::new(id, *n)).collect();
        session
            .fetcher
            .complete(&mut session.store, request.id, FetchOutcome::Success(items));
    }

    fn visible_names(vm: &UIViewModel) -> Vec<&str> {
        vm.display_items.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn loading_shows_only_status() {
        let mut session = session(5);
        session.fetcher.begin(&mut session.store);

        let vm = session.compute_viewmodel(24, 80);

        assert_eq!(vm.status.as_ref().map(|s| s.kind), Some(StatusKind::Loading));
        assert!(vm.search_bar.is_none());
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn error_shows_message() {
        let mut session = session(5);
        let request = session.fetcher.begin(&mut session.store).unwrap();
        session.fetcher.complete(
            &mut session.store,
            request.id,
            FetchOutcome::Failure("Network Error".into()),
        );

        let vm = session.compute_viewmodel(24, 80);
        let status = vm.status.unwrap();

        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, "Error: Network Error");
    }

    #[test]
    fn ready_shows_page_and_buttons() {
        let mut session = session(3);
        load(&mut session, &["Bus", "Car", "Bike", "Scooty", "Cycle"]);
        session.store.dispatch(Transition::SetCurrentPage(2));

        let vm = session.compute_viewmodel(24, 80);

        assert!(vm.status.is_none());
        assert_eq!(visible_names(&vm), ["Scooty", "Cycle"]);
        let buttons = vm.pagination.unwrap().buttons;
        assert_eq!(buttons.len(), 2);
        assert!(buttons[1].is_current);
        assert!(vm.header.updated.is_some());
    }

    #[test]
    fn page_buttons_follow_unfiltered_count() {
        let mut session = session(2);
        load(&mut session, &["Bus", "Car", "Bike", "Scooty", "Cycle"]);
        crate::app::on_search_change(&mut session.store, "bus".into());

        let vm = session.compute_viewmodel(24, 80);

        assert_eq!(visible_names(&vm), ["Bus"]);
        assert_eq!(vm.pagination.unwrap().buttons.len(), 3);
        assert_eq!(vm.header.title, " Items (1 of 5) ");
    }

    #[test]
    fn empty_filter_has_notice() {
        let mut session = session(2);
        load(&mut session, &["Bus"]);
        crate::app::on_search_change(&mut session.store, "zz".into());

        let vm = session.compute_viewmodel(24, 80);

        assert!(vm.display_items.is_empty());
        assert_eq!(vm.notice.as_deref(), Some("No items match \"zz\""));
    }

    #[test]
    fn short_pane_counts_rows_it_cannot_show() {
        let mut session = session(5);
        load(&mut session, &["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);

        let vm = session.compute_viewmodel(13, 80);

        assert_eq!(session.store.view().paginated.len(), 5);
        assert_eq!(visible_names(&vm), ["a"]);
        assert_eq!(
            vm.notice.as_deref(),
            Some("+4 more on this page, enlarge the pane")
        );
    }

    #[test]
    fn tall_pane_shows_the_whole_page() {
        let mut session = session(10);
        load(&mut session, &["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);

        let vm = session.compute_viewmodel(CHROME_ROWS + 10, 80);

        assert_eq!(vm.display_items.len(), 10);
        assert!(vm.notice.is_none());
    }

    #[test]
    fn page_rows_are_shown_or_counted_at_every_height() {
        let mut session = session(6);
        load(&mut session, &["a", "b", "c", "d", "e", "f"]);

        for rows in 0..=CHROME_ROWS + 8 {
            let vm = session.compute_viewmodel(rows, 80);
            let hidden = vm
                .notice
                .as_deref()
                .and_then(|n| n.strip_prefix('+'))
                .and_then(|n| n.split(' ').next())
                .map_or(0, |n| n.parse::<usize>().unwrap());
            assert_eq!(vm.display_items.len() + hidden, 6, "rows = {rows}");
        }
    }

    #[test]
    fn long_names_are_truncated_with_clipped_highlights() {
        let mut session = session(5);
        load(&mut session, &["abcdefghijklmnopqrstuvwxyz"]);
        crate::app::on_search_change(&mut session.store, "xyz".into());

        let vm = session.compute_viewmodel(24, ID_COLUMN_WIDTH + 2 + 10);
        let row = &vm.display_items[0];

        assert_eq!(row.name, "abcdefg...");
        assert!(row.highlight_ranges.is_empty());
    }
}
