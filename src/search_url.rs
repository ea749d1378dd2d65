use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::ScrapeError;

pub const PAGE_PLACEHOLDER: &str = "{page}";

// Only `page` as a whole query key, so `subpage=` etc. don't match.
static PAGE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]page=([^&#]*)").expect("static regex"));

/// A search results URL with its `page` query value cut out, so any page of
/// the same query can be produced by substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUrlTemplate {
    prefix: String,
    suffix: String,
}

impl SearchUrlTemplate {
    /// Builds a template from a fully-formed search URL.
    ///
    /// The `page` parameter must appear exactly once with a decimal value.
    /// Anything else is reported rather than guessed at.
    pub fn new(search_url: &str) -> Result<Self, ScrapeError> {
        let values: Vec<_> = PAGE_PARAM
            .captures_iter(search_url)
            .filter_map(|caps| caps.get(1))
            .collect();
        let value = match values.as_slice() {
            [] => return Err(invalid(search_url, "no page parameter in query string")),
            [value] => *value,
            many => {
                return Err(invalid(
                    search_url,
                    format!("page parameter appears {} times", many.len()),
                ));
            }
        };
        if value.as_str().is_empty() || !value.as_str().bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(
                search_url,
                format!("page value {:?} is not a decimal number", value.as_str()),
            ));
        }

        Ok(Self {
            prefix: search_url[..value.start()].to_string(),
            suffix: search_url[value.end()..].to_string(),
        })
    }

    pub fn url_for_page(&self, page: u32) -> String {
        format!("{}{}{}", self.prefix, page, self.suffix)
    }
}

/// Renders the template with [`PAGE_PLACEHOLDER`] in place of the page value.
impl fmt::Display for SearchUrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, PAGE_PLACEHOLDER, self.suffix)
    }
}

fn invalid(url: &str, reason: impl ToString) -> ScrapeError {
    ScrapeError::InvalidSearchUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}
