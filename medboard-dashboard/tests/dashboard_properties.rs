//! Property-based tests for the dashboard's search and edit behavior:
//! - filtering returns an order-preserving subsequence where every row
//!   matches and every excluded record does not
//! - the empty term returns the full collection unchanged
//! - toggling the same multi-select option twice restores the draft

use medboard_dashboard::{Dashboard, record_matches};
use medboard_form::FieldInput;
use medboard_types::SectionKind;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{1,12}").unwrap()
}

fn seeded_dashboard(names: &[String]) -> Dashboard {
    let mut dash = Dashboard::new();
    dash.select_section(SectionKind::Service);
    for name in names {
        dash.add_new();
        dash.edit_field("name", FieldInput::Text(name.clone())).unwrap();
        dash.edit_field("description", FieldInput::Text("imaging".into()))
            .unwrap();
        dash.submit().unwrap();
    }
    dash
}

proptest! {
    #[test]
    fn empty_term_returns_the_full_collection_in_order(
        names in proptest::collection::vec(name_strategy(), 0..8),
    ) {
        let mut dash = seeded_dashboard(&names);
        dash.set_search("");
        let listed: Vec<String> = dash
            .rows()
            .iter()
            .map(|r| r.field_str("name").unwrap().to_string())
            .collect();
        prop_assert_eq!(listed, names);
    }

    #[test]
    fn search_returns_exactly_the_matching_subsequence(
        names in proptest::collection::vec(name_strategy(), 0..8),
        term in prop::string::string_regex("[a-zA-Z]{1,4}").unwrap(),
    ) {
        let mut dash = seeded_dashboard(&names);
        dash.set_search(term.clone());

        let all: Vec<_> = dash
            .collections()
            .store(SectionKind::Service)
            .iter()
            .cloned()
            .collect();
        let expected: Vec<_> = all
            .iter()
            .filter(|record| record_matches(record, &term))
            .cloned()
            .collect();
        let listed: Vec<_> = dash.rows().into_iter().cloned().collect();

        prop_assert_eq!(&listed, &expected);
        for record in &listed {
            prop_assert!(record_matches(record, &term));
        }
        for record in all.iter().filter(|r| !expected.contains(*r)) {
            prop_assert!(!record_matches(record, &term));
        }
    }

    #[test]
    fn toggling_an_option_twice_restores_the_draft(
        flips in proptest::collection::vec(0usize..3, 0..6),
        option in 0usize..3,
    ) {
        let mut dash = Dashboard::new();
        dash.select_section(SectionKind::Service);
        dash.add_new();

        let universe = ["OT Comparison", "Book Application", "Call Booking"];
        for flip in flips {
            dash.edit_field(
                "primeOptions",
                FieldInput::ToggleOption(universe[flip].into()),
            )
            .unwrap();
        }

        // the list is a set: membership is what must round-trip
        let members = |dash: &Dashboard| -> std::collections::HashSet<String> {
            dash.draft()
                .unwrap()
                .get("primeOptions")
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default()
        };

        let before = members(&dash);
        dash.edit_field("primeOptions", FieldInput::ToggleOption(universe[option].into()))
            .unwrap();
        dash.edit_field("primeOptions", FieldInput::ToggleOption(universe[option].into()))
            .unwrap();
        let after = members(&dash);

        prop_assert_eq!(after, before);
    }
}
