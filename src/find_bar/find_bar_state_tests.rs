//! Tests for find_bar/find_bar_state

use super::*;
use crate::find_bar::FindEvent;
use crate::settings::MemorySettings;
use crate::test_utils::test_helpers::{bar_with_store, test_bar};
use insta::assert_snapshot;
use proptest::prelude::*;

#[test]
fn test_new_bar_is_empty_and_hidden() {
    let bar = test_bar();
    assert_eq!(bar.text(), "");
    assert_eq!(bar.current_result(), 0);
    assert_eq!(bar.total_results(), 0);
    assert!(bar.is_match_count_hidden());
    assert!(!bar.is_navigation_enabled());
    assert!(!bar.is_focused());
    assert!(bar.delegate().is_empty());
}

#[test]
fn test_count_scenario() {
    let mut bar = test_bar();

    bar.set_total_results(3);
    bar.set_current_result(1);
    assert_eq!(bar.match_count_label(), "1/3");
    assert!(bar.is_navigation_enabled());

    bar.set_total_results(1);
    assert_eq!(bar.match_count_label(), "1/1");
    assert!(!bar.is_navigation_enabled());

    bar.set_total_results(501);
    bar.set_current_result(12);
    assert_snapshot!(bar.match_count_label(), @"12/500+");
}

#[test]
fn test_cap_boundary_is_exclusive() {
    assert_eq!(format_match_count(7, 500), "7/500");
    assert_eq!(format_match_count(7, 501), "7/500+");
}

#[test]
fn test_label_follows_current_result_changes() {
    let mut bar = test_bar();
    bar.set_total_results(10);
    bar.set_current_result(4);
    assert_eq!(bar.match_count_label(), "4/10");
    bar.set_current_result(5);
    assert_eq!(bar.match_count_label(), "5/10");
}

#[test]
fn test_setting_counts_emits_no_events() {
    let mut bar = test_bar();
    bar.set_total_results(8);
    bar.set_current_result(2);
    assert!(bar.delegate().is_empty());
}

#[test]
fn test_query_scenario() {
    let mut bar = test_bar();

    bar.set_query("");
    assert!(bar.is_match_count_hidden());

    bar.delegate_mut().clear();
    bar.set_query("cat");
    assert!(!bar.is_match_count_hidden());
    assert_eq!(bar.text(), "cat");
    assert_eq!(bar.delegate(), &vec![FindEvent::QueryChanged("cat".to_string())]);
}

#[test]
fn test_whitespace_query_hides_match_count() {
    let mut bar = test_bar();
    bar.set_query("   ");
    assert!(bar.is_match_count_hidden());
    assert_eq!(bar.text(), "   ");
}

#[test]
fn test_set_query_replaces_previous_text() {
    let mut bar = test_bar();
    bar.set_query("first");
    bar.set_query("second");
    assert_eq!(bar.text(), "second");
}

#[test]
fn test_set_query_drops_line_breaks() {
    let mut bar = test_bar();
    bar.set_query("two\nlines\r\n");
    assert_eq!(bar.text(), "twolines");
    assert_eq!(
        bar.delegate().last(),
        Some(&FindEvent::QueryChanged("twolines".to_string()))
    );
}

#[test]
fn test_set_query_persists_non_empty_text() {
    let mut store = MemorySettings::new();
    {
        let mut bar = bar_with_store(&mut store);
        bar.set_query("fox");
    }
    assert_eq!(retrieve_saved_text(&store), Some("fox".to_string()));
}

#[test]
fn test_empty_query_keeps_saved_text() {
    let mut store = MemorySettings::new();
    {
        let mut bar = bar_with_store(&mut store);
        bar.set_query("fox");
        bar.set_query("");
    }
    assert_eq!(retrieve_saved_text(&store), Some("fox".to_string()));
}

#[test]
fn test_whitespace_query_is_persisted() {
    let mut store = MemorySettings::new();
    {
        let mut bar = bar_with_store(&mut store);
        bar.set_query(" ");
    }
    assert_eq!(retrieve_saved_text(&store), Some(" ".to_string()));
}

#[test]
fn test_persist_query_direct() {
    let mut bar = test_bar();
    bar.persist_query("fox");
    assert_eq!(retrieve_saved_text(bar.settings()), Some("fox".to_string()));
    bar.persist_query("");
    assert_eq!(retrieve_saved_text(bar.settings()), Some("fox".to_string()));
}

#[test]
fn test_retrieve_saved_text_absent_when_never_set() {
    let store = MemorySettings::new();
    assert_eq!(retrieve_saved_text(&store), None);
}

#[test]
fn test_with_saved_text_prefills_query() {
    let mut store = MemorySettings::new();
    store.set(SAVED_TEXT_KEY, "owl");

    let bar = FindInPageBar::with_saved_text(Vec::<FindEvent>::new(), store);
    assert_eq!(bar.text(), "owl");
    assert!(!bar.is_match_count_hidden());
    assert_eq!(bar.delegate(), &vec![FindEvent::QueryChanged("owl".to_string())]);
}

#[test]
fn test_with_saved_text_without_saved_value() {
    let bar = FindInPageBar::with_saved_text(Vec::<FindEvent>::new(), MemorySettings::new());
    assert_eq!(bar.text(), "");
    assert!(bar.delegate().is_empty());
}

#[test]
fn test_requests_relay_current_query() {
    let mut bar = test_bar();
    bar.set_query("cat");
    bar.delegate_mut().clear();

    bar.request_previous();
    bar.request_next();
    bar.request_close();

    assert_eq!(
        bar.delegate(),
        &vec![
            FindEvent::FindPrevious("cat".to_string()),
            FindEvent::FindNext("cat".to_string()),
            FindEvent::CloseRequested,
        ]
    );
    assert_eq!(bar.text(), "cat");
}

#[test]
fn test_requests_fire_even_without_matches() {
    let mut bar = test_bar();
    bar.request_next();
    assert_eq!(bar.delegate(), &vec![FindEvent::FindNext(String::new())]);
}

#[test]
fn test_lone_line_break_resigns_focus() {
    let mut bar = test_bar();
    bar.set_query("cat");
    bar.focus();
    bar.delegate_mut().clear();

    assert!(!bar.insert_text("\n"));
    assert!(!bar.is_focused());
    assert_eq!(bar.text(), "cat");
    assert!(bar.delegate().is_empty());
}

#[test]
fn test_insert_text_appends_and_notifies() {
    let mut bar = test_bar();
    bar.set_query("ca");
    bar.delegate_mut().clear();

    assert!(bar.insert_text("t"));
    assert_eq!(bar.text(), "cat");
    assert_eq!(bar.delegate(), &vec![FindEvent::QueryChanged("cat".to_string())]);
}

#[test]
fn test_insert_text_strips_embedded_line_breaks() {
    let mut bar = test_bar();
    assert!(bar.insert_text("a\nb"));
    assert_eq!(bar.text(), "ab");
}

#[test]
fn test_apply_theme_switches_text_color() {
    let mut bar = test_bar();

    bar.apply_theme(&Theme::light());
    assert_eq!(bar.styles().text.fg, Some(Theme::light().colors.text_primary));

    bar.apply_theme(&Theme::dark());
    assert_eq!(bar.styles().text.fg, Some(Theme::dark().colors.text_inverted));
    assert_eq!(
        bar.styles().match_count.fg,
        Some(Theme::dark().colors.action_secondary)
    );
}

#[test]
fn test_into_parts_returns_collaborators() {
    let mut bar = test_bar();
    bar.set_query("cat");
    let (events, store) = bar.into_parts();
    assert_eq!(events.len(), 1);
    assert_eq!(retrieve_saved_text(&store), Some("cat".to_string()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_label_uncapped_up_to_500(current in 0usize..10_000, total in 0usize..=500) {
        prop_assert_eq!(format_match_count(current, total), format!("{}/{}", current, total));
    }

    #[test]
    fn prop_label_capped_above_500(current in 0usize..10_000, total in 501usize..1_000_000) {
        prop_assert_eq!(format_match_count(current, total), format!("{}/500+", current));
    }

    #[test]
    fn prop_navigation_enabled_iff_more_than_one(total in 0usize..2_000) {
        let mut bar = test_bar();
        bar.set_total_results(total);
        prop_assert_eq!(bar.is_navigation_enabled(), total > 1);
    }

    #[test]
    fn prop_hidden_iff_trimmed_empty(text in "[ a-z]{0,8}") {
        let mut bar = test_bar();
        bar.set_query(&text);
        prop_assert_eq!(bar.is_match_count_hidden(), text.trim().is_empty());
    }
}
