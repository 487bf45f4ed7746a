//! Renderer composition and failure-absorption tests.

use postboard_core::{PostId, UserId};
use postboard_integration_tests::{FakeApi, comment, post, user};
use postboard_viewer::app::App;
use postboard_viewer::dom::{Document, Element, HIDE_CLASS, Tag};
use postboard_viewer::render;

#[tokio::test]
async fn test_posts_fragment_preserves_input_order() {
    let api = FakeApi::new()
        .with_user(user(1, "A", "ACME", "We deliver"))
        .with_post(post(12, 1, "third", "b3"))
        .with_post(post(10, 1, "first", "b1"))
        .with_post(post(11, 1, "second", "b2"));

    let posts = vec![
        post(10, 1, "first", "b1"),
        post(11, 1, "second", "b2"),
        post(12, 1, "third", "b3"),
    ];
    let fragment = render::posts_fragment(&api, &posts).await;
    assert_eq!(fragment.len(), 3);

    let titles: Vec<_> = fragment
        .elements()
        .iter()
        .map(|article| {
            article
                .children()
                .first()
                .map(Element::text)
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_missing_author_skips_author_lines() {
    // No user 9 in the data source; the author fetch 404s and is absorbed.
    let api = FakeApi::new().with_post(post(10, 9, "T", "B"));
    let posts = vec![post(10, 9, "T", "B")];

    let fragment = render::posts_fragment(&api, &posts).await;
    let article = fragment.elements().first().expect("article");

    // Heading, body, post id, button, section - no author or catch phrase.
    assert_eq!(article.children().len(), 5);
    let button = article.children().get(3).expect("button");
    assert_eq!(button.tag(), Tag::Button);
}

#[tokio::test]
async fn test_failed_comment_fetch_leaves_section_empty() {
    let api = FakeApi::failing();
    let section = render::comments_section(&api, PostId::new(10)).await;

    assert_eq!(section.tag(), Tag::Section);
    assert!(section.has_class("comments"));
    assert!(section.has_class(HIDE_CLASS));
    assert!(section.children().is_empty());
}

#[tokio::test]
async fn test_render_posts_without_posts_appends_placeholder() {
    let api = FakeApi::new();
    let mut doc = Document::new();

    let fragment = render::render_posts(&api, &mut doc, None).await;
    assert_eq!(fragment.len(), 1);

    let appended = doc.main().children().first().expect("placeholder");
    assert!(appended.has_class("default-text"));
    assert_eq!(appended.text(), "Select an Employee to display their posts.");
}

#[tokio::test]
async fn test_failing_api_leaves_placeholder_in_place() {
    let mut app = App::new(FakeApi::failing(), UserId::new(1));
    let outcome = app.run_initial().await;

    assert!(outcome.posts.is_none());
    assert!(outcome.refresh.is_none());

    // Nothing was fetched, so the page still shows the default prompt and
    // an empty selection control.
    assert!(app.document().select().children().is_empty());
    let children = app.document().main().children();
    assert_eq!(children.len(), 1);
    assert!(children.first().expect("placeholder").has_class("default-text"));
}

#[tokio::test]
async fn test_comments_render_inside_section() {
    let api = FakeApi::new()
        .with_comment(comment(100, 10, "C1", "CB1", "a@x.com"))
        .with_comment(comment(101, 10, "C2", "CB2", "b@x.com"));

    let section = render::comments_section(&api, PostId::new(10)).await;
    assert_eq!(section.children().len(), 2);
    let second = section.children().get(1).expect("second block");
    let texts: Vec<_> = second.children().iter().map(Element::text).collect();
    assert_eq!(texts, vec!["C2", "CB2", "From: b@x.com"]);
}
