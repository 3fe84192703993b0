//! End-to-end behaviour of a directory session through the public API.

use barlekha_directory::domain::{DraftField, EditCursor, Listing};
use barlekha_directory::filter::MinRating;
use barlekha_directory::store::Committed;
use barlekha_directory::{
    handle_event, initialize, Action, AppState, Config, DirectoryError, Event, InputMode, Theme,
};

fn seeded() -> AppState {
    initialize(&Config::default())
}

fn with(listings: Vec<Listing>) -> AppState {
    AppState::new(listings, Theme::default())
}

fn rated(name: &str, category: &str, rating: f64) -> Listing {
    Listing {
        rating,
        ..Listing::new(name, category)
    }
}

fn visible_names(state: &AppState) -> Vec<String> {
    state
        .visible_listings()
        .into_iter()
        .map(|row| row.listing.name.clone())
        .collect()
}

fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        let (_, mut produced) = handle_event(state, event).unwrap();
        actions.append(&mut produced);
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, &[Event::Char(c)]);
    }
}

#[test]
fn criteria_combine_as_a_conjunction() {
    let mut state = seeded();
    state.set_query("barlekha");
    assert_eq!(state.visible_listings().len(), 2);

    state.set_category("All");
    state.set_min_rating(MinRating::try_from(4.5).unwrap());
    assert_eq!(visible_names(&state), ["Barlekha General Hospital"]);

    state.set_category("Restaurant");
    assert!(state.visible_listings().is_empty());
}

#[test]
fn query_matches_category_case_insensitively() {
    let mut state = seeded();
    state.set_query("HEALTH");
    assert_eq!(visible_names(&state), ["Barlekha General Hospital"]);
}

#[test]
fn categories_are_derived_in_first_seen_order() {
    let mut state = with(vec![
        rated("A", "Shop", 4.0),
        rated("B", "Health", 4.0),
        rated("C", "Shop", 4.0),
    ]);
    assert_eq!(state.categories(), ["All", "Shop", "Health"]);

    state.remove(1).unwrap();
    assert_eq!(state.categories(), ["All", "Shop"]);
}

#[test]
fn adding_appends_without_touching_existing_listings() {
    let mut state = seeded();
    let before: Vec<Listing> = state.store().listings().cloned().collect();

    state.set_draft_field(DraftField::Name, "Barlekha Pharmacy");
    state.set_draft_field(DraftField::Category, "Health");
    state.set_draft_field(DraftField::Rating, "3.8");
    let committed = state.commit_draft().unwrap();

    assert!(matches!(committed, Committed::Created { index: 2, .. }));
    let after: Vec<Listing> = state.store().listings().cloned().collect();
    assert_eq!(after[..2], before[..]);
    assert_eq!(after[2].name, "Barlekha Pharmacy");
    assert_eq!(after[2].rating, 3.8);
    assert!(state.store().draft().is_empty());
}

#[test]
fn editing_replaces_in_place_and_resets_the_cursor() {
    let mut state = seeded();
    let id = state.start_edit(1).unwrap();
    assert_eq!(state.store().cursor(), EditCursor::Editing(id));
    assert_eq!(state.store().draft().field(DraftField::Rating), "4.2");

    state.set_draft_field(DraftField::Rating, "4.9");
    state.set_draft_field(DraftField::Phone, "");
    let committed = state.commit_draft().unwrap();

    assert_eq!(committed, Committed::Updated { id, index: 1 });
    let cafe = &state.store().entries()[1];
    assert_eq!(cafe.id, id);
    assert_eq!(cafe.listing.name, "Cafe Barlekha");
    assert_eq!(cafe.listing.rating, 4.9);
    assert_eq!(cafe.listing.phone, "");
    assert_eq!(state.store().len(), 2);
    assert_eq!(state.store().cursor(), EditCursor::Adding);
}

#[test]
fn invalid_commit_keeps_collection_and_draft() {
    let mut state = seeded();
    state.set_draft_field(DraftField::Category, "Health");
    state.set_draft_field(DraftField::Address, "Bazar Road");

    let err = state.commit_draft().unwrap_err();
    assert!(matches!(err, DirectoryError::Validation(_)));
    assert_eq!(state.store().len(), 2);
    assert_eq!(state.store().draft().field(DraftField::Address), "Bazar Road");

    state.set_draft_field(DraftField::Name, "Bazar Mosque");
    state.set_draft_field(DraftField::Category, "");
    assert!(state.commit_draft().is_err());
    assert_eq!(state.store().draft().field(DraftField::Name), "Bazar Mosque");
}

#[test]
fn unparseable_rating_only_passes_the_any_threshold() {
    let mut state = seeded();
    state.set_draft_field(DraftField::Name, "Unrated Stall");
    state.set_draft_field(DraftField::Category, "Shop");
    state.set_draft_field(DraftField::Rating, "good");
    state.commit_draft().unwrap();
    assert!(state.store().entries()[2].listing.rating.is_nan());

    assert_eq!(state.visible_listings().len(), 3);
    state.set_min_rating(MinRating::Three);
    assert!(!visible_names(&state).contains(&"Unrated Stall".to_string()));
}

#[test]
fn deleting_the_first_of_two_leaves_the_second() {
    let mut state = seeded();
    let removed = state.remove(0).unwrap();
    assert_eq!(removed.listing.name, "Barlekha General Hospital");
    assert_eq!(visible_names(&state), ["Cafe Barlekha"]);

    assert!(matches!(
        state.remove(5),
        Err(DirectoryError::IndexOutOfRange { index: 5, len: 1 })
    ));
}

#[test]
fn visible_rows_carry_unfiltered_positions() {
    let mut state = seeded();
    state.set_category("Restaurant");
    let rows = state.visible_listings();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].index, 1);

    let index = rows[0].index;
    state.start_edit(index).unwrap();
    assert_eq!(state.store().draft().field(DraftField::Name), "Cafe Barlekha");
}

#[test]
fn rating_thresholds_and_fields_parse_from_plain_values() {
    assert_eq!(MinRating::try_from(3.5).unwrap(), MinRating::ThreeAndHalf);
    assert!(matches!(
        MinRating::try_from(2.0),
        Err(DirectoryError::UnsupportedRating(_))
    ));

    assert_eq!("lat".parse::<DraftField>().unwrap(), DraftField::Latitude);
    assert!(matches!(
        "owner".parse::<DraftField>(),
        Err(DirectoryError::UnknownField(_))
    ));
}

#[test]
fn map_link_uses_coordinates() {
    let state = seeded();
    let hospital = &state.store().entries()[0].listing;
    assert_eq!(
        state.map_link_for(hospital),
        "https://maps.google.com/?q=24.7028,91.8225"
    );

    let bare = Listing::new("Tea Stall", "Restaurant");
    assert_eq!(
        state.map_link_for(&bare),
        "https://maps.google.com/?q=undefined,undefined"
    );
}

#[test]
fn blank_coordinates_commit_as_nan() {
    let mut state = with(vec![]);
    state.set_draft_field(DraftField::Name, "Bus Stand");
    state.set_draft_field(DraftField::Category, "Transport");
    state.commit_draft().unwrap();

    let bus_stand = &state.store().entries()[0].listing;
    assert!(bus_stand.lat.is_some_and(f64::is_nan));
    assert!(bus_stand.lng.is_some_and(f64::is_nan));
    assert_eq!(
        state.map_link_for(bus_stand),
        "https://maps.google.com/?q=NaN,NaN"
    );
}

#[test]
fn keyboard_session_adds_filters_and_deletes() {
    let mut state = seeded();

    send(&mut state, &[Event::AddListing]);
    assert_eq!(state.input_mode, InputMode::Form(DraftField::Name));
    type_text(&mut state, "Barlekha Pharmacy");
    send(&mut state, &[Event::NextField]);
    type_text(&mut state, "Health");
    send(&mut state, &[Event::Submit]);

    assert_eq!(state.input_mode, InputMode::Browse);
    assert_eq!(state.store().len(), 3);
    assert_eq!(state.selected_listing().unwrap().name, "Barlekha Pharmacy");

    send(&mut state, &[Event::NextCategory]);
    assert_eq!(state.criteria().category.label(), "Health");
    assert_eq!(state.visible_rows().len(), 2);
    assert_eq!(state.selected_listing().unwrap().name, "Barlekha Pharmacy");

    send(&mut state, &[Event::DeleteSelected]);
    assert_eq!(state.store().len(), 2);
    assert_eq!(visible_names(&state), ["Barlekha General Hospital"]);

    send(&mut state, &[Event::Escape]);
    assert!(state.criteria().is_unfiltered());
    assert_eq!(state.visible_rows().len(), 2);
}

#[test]
fn keyboard_commit_without_name_stays_in_form() {
    let mut state = seeded();
    send(&mut state, &[Event::AddListing, Event::NextField]);
    type_text(&mut state, "Health");
    send(&mut state, &[Event::Submit]);

    assert_eq!(state.input_mode, InputMode::Form(DraftField::Category));
    assert_eq!(state.store().len(), 2);
    assert!(state.form_notice.is_some());
    assert_eq!(state.store().draft().field(DraftField::Category), "Health");
}

#[test]
fn open_map_and_close_produce_actions() {
    let mut state = seeded();
    let actions = send(&mut state, &[Event::OpenMap, Event::CloseFocus]);
    assert_eq!(
        actions,
        [
            Action::OpenMapLink {
                url: "https://maps.google.com/?q=24.7028,91.8225".to_string()
            },
            Action::CloseFocus,
        ]
    );
}
