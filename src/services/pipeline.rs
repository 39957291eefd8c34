//! The per-event view pass: filter, sort, then annotate for the renderer.
//!
//! Pure with respect to its inputs. The session calls it after every tab
//! switch, keystroke, sort change and pin click.

use super::favicon::FaviconResolver;
use super::filter_engine;
use super::frequency_scorer::{frequency_threshold, is_frequent};
use super::sort_engine;
use super::title_cleaner::TitleCleaner;
use crate::types::history::ResourceRecord;
use crate::types::pin::PinLookup;
use crate::types::query::{QueryState, RecentsView, RenderRow, TypeFilter};

pub const NO_FAVORITES_MESSAGE: &str = "No favorite pages found";
pub const NO_FILES_MESSAGE: &str = "No files found";

/// Presentation helpers shared by every pass.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub cleaner: TitleCleaner,
    pub favicons: FaviconResolver,
}

/// Builds the renderer-ready view for `query`.
pub fn build_view<P>(
    records: &[ResourceRecord],
    pins: &P,
    query: &QueryState,
    ctx: &ViewContext,
) -> RecentsView
where
    P: PinLookup + ?Sized,
{
    let filtered = filter_engine::filter(records, query, pins);
    let sorted = sort_engine::sort(&filtered, query.sort_key, pins, &ctx.cleaner);
    let threshold = frequency_threshold(&sorted);

    let rows: Vec<RenderRow> = sorted
        .into_iter()
        .map(|record| RenderRow {
            display_title: ctx.cleaner.clean(&record.title).into_owned(),
            frequently_visited: is_frequent(&record, threshold),
            pinned: pins.is_pinned(&record.url),
            favicon_url: ctx.favicons.resolve(&record.url),
            record,
        })
        .collect();

    let empty_message = if rows.is_empty() {
        Some(empty_state_message(query.type_filter).to_string())
    } else {
        None
    };

    RecentsView {
        rows,
        empty_message,
    }
}

pub fn empty_state_message(type_filter: TypeFilter) -> &'static str {
    match type_filter {
        TypeFilter::Favorites => NO_FAVORITES_MESSAGE,
        _ => NO_FILES_MESSAGE,
    }
}
