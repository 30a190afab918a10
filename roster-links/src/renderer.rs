//! Pagination link markup generation.

use log::trace;
use roster_view::{Localizer, translate};
use url::Url;

use crate::error::LinkError;
use crate::params::RequestParameters;

/// One slot in the rendered page numbering.
///
/// The numbering/elision algorithm lives with the caller; the renderer only
/// turns the decided sequence into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A concrete page number.
    Page(usize),
    /// An elided run, shown as a non-interactive ellipsis.
    Gap,
}

/// Renders parameter-preserving pagination links for one request.
///
/// The base parameter set is captured once at construction and shared by
/// every link the renderer produces, so all links within one control are
/// mutually consistent: same parameters, differing only in `page`. URLs are
/// byte-identical for equal input, which keeps them cacheable and
/// back-button friendly.
///
/// # Example
///
/// ```
/// use roster_links::{LinkRenderer, Slot};
///
/// let renderer =
///     LinkRenderer::from_request("https://outreach.test/students?search=ada&page=2", 9).unwrap();
/// assert_eq!(renderer.current_page(), 2);
/// assert_eq!(renderer.url_for(5), "/students?search=ada&page=5");
/// ```
pub struct LinkRenderer<'a> {
    /// Path of the incoming request; links stay on the same route.
    path: String,
    /// Memoized base parameters, captured once per request.
    base: RequestParameters,
    current_page: usize,
    total_pages: usize,
    localizer: Option<&'a dyn Localizer>,
}

impl<'a> LinkRenderer<'a> {
    /// Builds a renderer from the incoming request's URL string.
    pub fn from_request(url: &str, total_pages: usize) -> Result<Self, LinkError> {
        let url = Url::parse(url)?;
        Ok(Self::new(&url, total_pages))
    }

    /// Builds a renderer from an already-parsed request URL.
    ///
    /// The current page is implied by the URL's `page` parameter; absent or
    /// unparseable values mean page 1.
    pub fn new(url: &Url, total_pages: usize) -> Self {
        let base = RequestParameters::capture(url);
        let current_page = base
            .get("page")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);
        trace!(
            "pagination links for {}: page {} of {}",
            url.path(),
            current_page,
            total_pages
        );
        Self {
            path: url.path().to_string(),
            base,
            current_page,
            total_pages,
            localizer: None,
        }
    }

    /// Injects a localization lookup for the edge labels.
    pub fn with_localizer(mut self, localizer: &'a dyn Localizer) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Returns the current page implied by the request URL.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the total page count.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Produces the navigation URL for a target page.
    ///
    /// Equal to the request's URL with `page` set and every other parameter
    /// preserved verbatim, including repeated keys.
    pub fn url_for(&self, page: usize) -> String {
        format!("{}?{}", self.path, self.base.with_page(page).query_string())
    }

    /// `rel` attribute for a numbered link, where applicable.
    fn rel_value(&self, page: usize) -> Option<String> {
        if page + 1 == self.current_page {
            let rel = if page == 1 { "prev start" } else { "prev" };
            Some(rel.to_string())
        } else if page == self.current_page + 1 {
            Some("next".to_string())
        } else if page == 1 {
            Some("start".to_string())
        } else {
            None
        }
    }

    /// Markup for one numbered slot.
    ///
    /// The current page renders as a plain selected label, not a link.
    pub fn page_number(&self, page: usize) -> String {
        if page == self.current_page {
            tag(
                "li",
                &span(&page.to_string(), Some("current")),
                Some("selected"),
            )
        } else {
            let anchor = link(
                &page.to_string(),
                &self.url_for(page),
                None,
                self.rel_value(page).as_deref(),
            );
            tag("li", &anchor, None)
        }
    }

    /// Markup for a previous/next edge.
    ///
    /// With no adjacent page the edge renders as a disabled non-link.
    fn previous_or_next_page(&self, page: Option<usize>, text: &str, classname: &str) -> String {
        match page {
            Some(page) => tag(
                "li",
                &link(text, &self.url_for(page), Some(classname), None),
                None,
            ),
            None => tag("li", &span(text, Some(classname)), Some("disabled")),
        }
    }

    /// Markup for the "previous" edge.
    pub fn previous_page(&self) -> String {
        let target = (self.current_page > 1).then(|| self.current_page - 1);
        let label = translate(self.localizer, &["pagination.previous"], "Previous", &[]);
        self.previous_or_next_page(target, &label, "previous_page")
    }

    /// Markup for the "next" edge.
    pub fn next_page(&self) -> String {
        let target = (self.current_page < self.total_pages).then(|| self.current_page + 1);
        let label = translate(self.localizer, &["pagination.next"], "Next", &[]);
        self.previous_or_next_page(target, &label, "next_page")
    }

    /// Markup for an elided run of page numbers.
    pub fn gap(&self) -> String {
        tag("li", &span("...", Some("gap")), Some("disabled"))
    }

    /// Wraps rendered slots in the pagination container.
    pub fn html_container(&self, html: &str) -> String {
        tag(
            "div",
            &tag("ul", html, Some("pagination")),
            Some("pagination-container"),
        )
    }

    /// Renders the full control: previous edge, the given slot sequence,
    /// next edge, wrapped in the container.
    pub fn render(&self, slots: &[Slot]) -> String {
        let mut html = String::new();
        html.push_str(&self.previous_page());
        for slot in slots {
            match slot {
                Slot::Page(page) => html.push_str(&self.page_number(*page)),
                Slot::Gap => html.push_str(&self.gap()),
            }
        }
        html.push_str(&self.next_page());
        self.html_container(&html)
    }

    /// Localized "showing X-Y of Z" line for the current page window.
    pub fn entries_info(&self, total_items: usize, per_page: usize) -> String {
        if total_items == 0 {
            return translate(
                self.localizer,
                &["pagination.entries_info_empty"],
                "No entries",
                &[],
            );
        }
        let first = ((self.current_page - 1) * per_page + 1).min(total_items);
        let last = (self.current_page * per_page).min(total_items);
        translate(
            self.localizer,
            &["pagination.entries_info"],
            "Showing %{first}-%{last} of %{total}",
            &[
                ("first", first.to_string()),
                ("last", last.to_string()),
                ("total", total_items.to_string()),
            ],
        )
    }
}

/// Wraps content in an element with an optional class.
fn tag(name: &str, content: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!("<{name} class=\"{class}\">{content}</{name}>"),
        None => format!("<{name}>{content}</{name}>"),
    }
}

/// A non-interactive text span.
fn span(text: &str, class: Option<&str>) -> String {
    tag("span", &escape_html(text), class)
}

/// An anchor with optional class and rel attributes.
fn link(text: &str, href: &str, class: Option<&str>, rel: Option<&str>) -> String {
    let mut attrs = format!(" href=\"{}\"", escape_html(href));
    if let Some(class) = class {
        attrs.push_str(&format!(" class=\"{class}\""));
    }
    if let Some(rel) = rel {
        attrs.push_str(&format!(" rel=\"{rel}\""));
    }
    format!("<a{attrs}>{}</a>", escape_html(text))
}

/// Minimal HTML escaping for text and attribute values.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
