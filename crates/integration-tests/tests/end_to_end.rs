//! End-to-end pipeline tests: initialize, select, render, toggle.
//!
//! These drive the full viewer through `App` against canned data and
//! inspect the resulting element tree.

use postboard_core::{PostId, UserId};
use postboard_integration_tests::{FakeApi, comment, post, user};
use postboard_viewer::app::{App, Dispatched, Event, SelectionChanged};
use postboard_viewer::controller::ClickEvent;
use postboard_viewer::dom::{DATA_POST_ID, Element, HIDE_CLASS, Tag};

fn scenario_api() -> FakeApi {
    FakeApi::new()
        .with_user(user(1, "A", "ACME", "We deliver"))
        .with_post(post(10, 1, "T", "B"))
        .with_comment(comment(100, 10, "C", "CB", "e@x.com"))
}

/// The single post article rendered for the scenario data.
fn the_article(app: &App<FakeApi>) -> &Element {
    let children = app.document().main().children();
    assert_eq!(children.len(), 1, "one post article expected");
    children.first().expect("article")
}

#[tokio::test]
async fn test_initial_render_produces_full_page() {
    let mut app = App::new(scenario_api(), UserId::new(1));
    let outcome = app.run_initial().await;

    assert_eq!(outcome.user_id, UserId::new(1));
    assert_eq!(outcome.posts.as_ref().map(Vec::len), Some(1));
    let refresh = outcome.refresh.expect("refresh ran");
    assert_eq!(refresh.bound, vec![PostId::new(10)]);

    // One selection option: value "1", label "A".
    let select = app.document().select();
    assert_eq!(select.children().len(), 1);
    let option = select.children().first().expect("option");
    assert_eq!(option.tag(), Tag::Option);
    assert_eq!(option.attr("value"), Some("1"));
    assert_eq!(option.text(), "A");

    // One article: heading, body, post id, author line, catch phrase,
    // button, comments section - in that order.
    let article = the_article(&app);
    assert_eq!(article.tag(), Tag::Article);
    assert_eq!(article.children().len(), 7);

    let texts: Vec<_> = article
        .children()
        .iter()
        .take(5)
        .map(Element::text)
        .collect();
    assert_eq!(
        texts,
        vec!["T", "B", "Post ID: 10", "Author: A with ACME", "We deliver"]
    );

    let button = article.children().get(5).expect("button");
    assert_eq!(button.tag(), Tag::Button);
    assert_eq!(button.text(), "Show Comments");
    assert_eq!(button.attr(DATA_POST_ID), Some("10"));

    let section = article.children().get(6).expect("section");
    assert_eq!(section.tag(), Tag::Section);
    assert!(section.has_class("comments"));
    assert!(section.has_class(HIDE_CLASS));
    assert_eq!(section.attr(DATA_POST_ID), Some("10"));

    // One comment block with three text elements.
    assert_eq!(section.children().len(), 1);
    let block = section.children().first().expect("comment block");
    let texts: Vec<_> = block.children().iter().map(Element::text).collect();
    assert_eq!(texts, vec!["C", "CB", "From: e@x.com"]);
}

#[tokio::test]
async fn test_click_toggles_section_and_button() {
    let mut app = App::new(scenario_api(), UserId::new(1));
    app.run_initial().await;

    let click = Event::ButtonClick(ClickEvent::new(PostId::new(10)));
    let Dispatched::Click(result) = app.dispatch(click).await else {
        panic!("click dispatch expected");
    };
    let (section, button) = result.expect("bound toggle");
    assert!(!section.has_class(HIDE_CLASS));
    assert_eq!(button.text(), "Hide Comments");

    // The document itself reflects the transition.
    let article = the_article(&app);
    let section = article.children().get(6).expect("section");
    assert!(!section.has_class(HIDE_CLASS));

    // A second click restores the initial state.
    let click = Event::ButtonClick(ClickEvent::new(PostId::new(10)));
    let Dispatched::Click(result) = app.dispatch(click).await else {
        panic!("click dispatch expected");
    };
    let (section, button) = result.expect("bound toggle");
    assert!(section.has_class(HIDE_CLASS));
    assert_eq!(button.text(), "Show Comments");
}

#[tokio::test]
async fn test_reselect_replaces_articles_and_bindings() {
    let api = scenario_api()
        .with_user(user(2, "Z", "Initech", "TPS reports"))
        .with_post(post(20, 2, "T2", "B2"));
    let mut app = App::new(api, UserId::new(1));
    app.run_initial().await;
    assert!(app.panels().is_bound(PostId::new(10)));

    let outcome = app
        .on_selection_changed(SelectionChanged {
            value: Some(UserId::new(2)),
        })
        .await;
    let refresh = outcome.refresh.expect("refresh ran");
    assert_eq!(refresh.unbound, vec![PostId::new(10)]);
    assert_eq!(refresh.bound, vec![PostId::new(20)]);
    assert_eq!(refresh.removed_children, 1);

    // The old post's binding is gone; a click on it is a no-op.
    assert!(!app.panels().is_bound(PostId::new(10)));
    let Dispatched::Click(result) = app
        .dispatch(Event::ButtonClick(ClickEvent::new(PostId::new(10))))
        .await
    else {
        panic!("click dispatch expected");
    };
    assert!(result.is_none());

    // The new post's toggle works.
    let Dispatched::Click(result) = app
        .dispatch(Event::ButtonClick(ClickEvent::new(PostId::new(20))))
        .await
    else {
        panic!("click dispatch expected");
    };
    assert!(result.is_some());
}

#[tokio::test]
async fn test_serialized_page_contains_rendered_content() {
    let mut app = App::new(scenario_api(), UserId::new(1));
    app.run_initial().await;

    let html = app.document().to_string();
    assert!(html.contains("<select id=\"selectMenu\">"));
    assert!(html.contains("<option value=\"1\">A</option>"));
    assert!(html.contains("<h2>T</h2>"));
    assert!(html.contains("Post ID: 10"));
    assert!(html.contains("data-post-id=\"10\""));
    assert!(html.contains("class=\"comments hide\""));
    assert!(html.contains("From: e@x.com"));
}
