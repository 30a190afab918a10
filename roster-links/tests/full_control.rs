//! Full rendered control: all links share one parameter base.

use roster_links::{LinkRenderer, Slot};

#[test]
fn test_all_links_share_the_request_parameters() {
    let renderer = LinkRenderer::from_request(
        "https://outreach.test/courses/42/students?controller=students&action=index&search=ada&sort=character_count&page=3",
        6,
    )
    .unwrap();

    let html = renderer.render(&[
        Slot::Page(1),
        Slot::Page(2),
        Slot::Page(3),
        Slot::Page(4),
        Slot::Gap,
        Slot::Page(6),
    ]);

    // Every generated link carries the search and sort state verbatim and
    // never the routing keys.
    for page in [1, 2, 4, 6] {
        let expected = format!(
            "/courses/42/students?search=ada&amp;sort=character_count&amp;page={page}"
        );
        assert!(html.contains(&expected), "missing link for page {page}");
    }
    assert!(!html.contains("controller="));
    assert!(!html.contains("action="));

    // Current page is a selected label, not a link.
    assert!(html.contains("<li class=\"selected\"><span class=\"current\">3</span></li>"));
    assert!(!html.contains("page=3\""));

    // Both edges are live in the middle of the range.
    assert!(html.contains("class=\"previous_page\""));
    assert!(html.contains("class=\"next_page\""));
    assert!(html.contains("page=2\" class=\"previous_page\""));
    assert!(html.contains("page=4\" class=\"next_page\""));

    // One gap, rendered disabled.
    assert!(html.contains("<li class=\"disabled\"><span class=\"gap\">...</span></li>"));
}

#[test]
fn test_single_page_control_has_no_live_edges() {
    let renderer =
        LinkRenderer::from_request("https://outreach.test/students?page=1", 1).unwrap();
    let html = renderer.render(&[Slot::Page(1)]);

    assert!(html.contains("<li class=\"disabled\"><span class=\"previous_page\">Previous</span></li>"));
    assert!(html.contains("<li class=\"disabled\"><span class=\"next_page\">Next</span></li>"));
    assert!(html.contains("<span class=\"current\">1</span>"));
}

#[test]
fn test_rendering_twice_is_byte_identical() {
    let renderer =
        LinkRenderer::from_request("https://outreach.test/students?q=x&page=2", 4).unwrap();
    let slots = [Slot::Page(1), Slot::Page(2), Slot::Page(3), Slot::Page(4)];
    assert_eq!(renderer.render(&slots), renderer.render(&slots));
}
