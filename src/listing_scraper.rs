use std::{iter::Skip, sync::LazyLock};

use log::debug;
use scraper::{Html, Selector, html::Select};

use crate::{
    record::Record,
    text_manipulators::{extract_text, first_anchor_href},
};

/// Rows with fewer cells than this are not results.
pub const MIN_CELLS: usize = 11;

// Fixed column positions in the results table. Column 4 is unused.
const CITY: usize = 0;
const SCHOOL: usize = 1;
const GRADE: usize = 2;
const YEAR: usize = 3;
const SUBJECT: usize = 5;
const EXAM_TYPE: usize = 6;
const VERSION: usize = 7;
const ID: usize = 8;
const EXAM_LINK: usize = 9;
const ANSWER_LINK: usize = 10;

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("static selector"));
static TOTAL_PAGES_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#total_p").expect("static selector"));

/// A parsed search results page.
pub struct Listing {
    document: Html,
}

impl Listing {
    pub fn parse(body: &str) -> Self {
        Self {
            document: Html::parse_document(body),
        }
    }

    /// Total number of result pages, read from `data-val` on `#total_p`.
    /// Falls back to 1 when the indicator is missing, unparsable or zero.
    pub fn total_pages(&self) -> u32 {
        self.document
            .select(&TOTAL_PAGES_SELECTOR)
            .next()
            .and_then(|element| element.value().attr("data-val"))
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|&pages| pages > 0)
            .unwrap_or(1)
    }

    /// Records in row order, header row skipped.
    pub fn records(&self) -> Records<'_> {
        Records {
            rows: self.document.select(&ROW_SELECTOR).skip(1),
        }
    }
}

pub struct Records<'a> {
    rows: Skip<Select<'a, 'static>>,
}

impl Iterator for Records<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for row in self.rows.by_ref() {
            let cells: Vec<_> = row.select(&CELL_SELECTOR).collect();
            if cells.len() < MIN_CELLS {
                debug!("Skipping row with {} cells", cells.len());
                continue;
            }
            return Some(Record {
                city: extract_text(cells[CITY]),
                school: extract_text(cells[SCHOOL]),
                grade: extract_text(cells[GRADE]),
                year: extract_text(cells[YEAR]),
                subject: extract_text(cells[SUBJECT]),
                exam_type: extract_text(cells[EXAM_TYPE]),
                version: extract_text(cells[VERSION]),
                id: extract_text(cells[ID]),
                exam_link: first_anchor_href(cells[EXAM_LINK]),
                answer_link: first_anchor_href(cells[ANSWER_LINK]),
            });
        }
        None
    }
}
