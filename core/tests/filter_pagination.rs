use mozaiku_core::{
    apply_action, FilterTag, GalleryAction, GalleryState, LayoutTrigger, TileState,
    IMAGES_PER_PAGE,
};

fn alternating(count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|idx| if idx % 2 == 0 { "street" } else { "nature" })
        .collect()
}

fn build_state(categories: &[&str], tags: &[&str]) -> GalleryState {
    let tiles = categories
        .iter()
        .map(|category| TileState::new((*category).to_string()))
        .collect();
    let filter_tags = tags.iter().map(|tag| FilterTag::parse(tag)).collect();
    GalleryState::new(tiles, filter_tags)
}

fn shown(state: &GalleryState) -> Vec<usize> {
    state.shown_tiles().collect()
}

fn active_buttons(state: &GalleryState) -> Vec<usize> {
    state
        .view()
        .filters
        .iter()
        .enumerate()
        .filter(|(_, button)| button.active)
        .map(|(idx, _)| idx)
        .collect()
}

#[test]
fn initial_display_truncates_to_first_page() {
    let state = build_state(&alternating(30), &["all", "street", "nature"]);
    assert_eq!(state.filter, FilterTag::All);
    assert_eq!(state.visible_count, IMAGES_PER_PAGE);
    assert_eq!(shown(&state), (0..IMAGES_PER_PAGE).collect::<Vec<_>>());
    assert!(state.view().view_more_visible);
}

#[test]
fn initial_display_with_few_tiles_shows_all() {
    let state = build_state(&alternating(5), &["all", "street", "nature"]);
    assert_eq!(shown(&state), vec![0, 1, 2, 3, 4]);
    assert!(!state.view().view_more_visible);
}

#[test]
fn filter_selection_resets_cursor_and_keeps_document_order() {
    let mut state = build_state(&alternating(30), &["all", "street", "nature"]);
    apply_action(&mut state, &GalleryAction::ViewMoreActivated);
    assert_eq!(state.visible_count, 2 * IMAGES_PER_PAGE);

    let effects = apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::parse("nature"),
        },
    );
    assert!(effects.render);
    assert_eq!(effects.layout, LayoutTrigger::Settle);
    assert_eq!(state.visible_count, IMAGES_PER_PAGE);
    let expected: Vec<usize> = (0..IMAGES_PER_PAGE).map(|idx| idx * 2 + 1).collect();
    assert_eq!(shown(&state), expected);
}

#[test]
fn reselecting_active_filter_is_inert() {
    let mut state = build_state(&alternating(30), &["all", "street", "nature"]);
    apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::parse("street"),
        },
    );
    apply_action(&mut state, &GalleryAction::ViewMoreActivated);
    let before = shown(&state);

    let effects = apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::parse("street"),
        },
    );
    assert!(!effects.render);
    assert_eq!(effects.layout, LayoutTrigger::None);
    assert_eq!(state.visible_count, 2 * IMAGES_PER_PAGE);
    assert_eq!(shown(&state), before);
}

#[test]
fn returning_to_wildcard_resets_the_page() {
    let mut state = build_state(&alternating(30), &["all", "street", "nature"]);
    apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::parse("street"),
        },
    );
    apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::All,
        },
    );
    assert_eq!(state.visible_count, IMAGES_PER_PAGE);
    assert_eq!(shown(&state).len(), IMAGES_PER_PAGE);
}

#[test]
fn view_more_grows_in_page_multiples() {
    let mut state = build_state(&alternating(30), &["all", "street", "nature"]);
    apply_action(&mut state, &GalleryAction::ViewMoreActivated);
    assert_eq!(state.visible_count, 2 * IMAGES_PER_PAGE);
    assert_eq!(shown(&state).len(), 24);

    apply_action(&mut state, &GalleryAction::ViewMoreActivated);
    apply_action(&mut state, &GalleryAction::ViewMoreActivated);
    assert_eq!(state.visible_count, 4 * IMAGES_PER_PAGE);
    assert_eq!(shown(&state).len(), 30);
}

#[test]
fn view_more_control_hides_at_exact_boundary() {
    let mut state = build_state(&alternating(24), &["all", "street", "nature"]);
    assert!(state.view().view_more_visible);

    apply_action(&mut state, &GalleryAction::ViewMoreActivated);
    assert!(!state.view().view_more_visible);
    assert_eq!(shown(&state).len(), 24);

    let exact = build_state(&alternating(IMAGES_PER_PAGE), &["all"]);
    assert!(!exact.view().view_more_visible);
}

#[test]
fn filter_without_matches_hides_everything() {
    let mut state = build_state(&alternating(8), &["all", "street", "nature"]);
    apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::parse("archive"),
        },
    );
    assert!(shown(&state).is_empty());
    assert!(!state.view().view_more_visible);
}

#[test]
fn exactly_one_button_holds_the_marker() {
    let mut state = build_state(&alternating(6), &["all", "street", "nature"]);
    assert_eq!(active_buttons(&state), vec![0]);

    apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::parse("nature"),
        },
    );
    assert_eq!(active_buttons(&state), vec![2]);

    apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::All,
        },
    );
    assert_eq!(active_buttons(&state), vec![0]);
}

#[test]
fn duplicate_button_tags_mark_only_the_first() {
    let mut state = build_state(&alternating(6), &["all", "nature", "nature"]);
    apply_action(
        &mut state,
        &GalleryAction::FilterSelected {
            tag: FilterTag::parse("nature"),
        },
    );
    assert_eq!(active_buttons(&state), vec![1]);
}

#[test]
fn image_load_requests_a_single_tile_measure() {
    let mut state = build_state(&alternating(4), &["all"]);
    let effects = apply_action(&mut state, &GalleryAction::ImageLoaded { tile: 2 });
    assert!(!effects.render);
    assert_eq!(effects.layout, LayoutTrigger::MeasureTile(2));

    let effects = apply_action(&mut state, &GalleryAction::ImageLoaded { tile: 2 });
    assert_eq!(effects.layout, LayoutTrigger::None);
}

#[test]
fn failed_image_stays_unsized_and_flow_continues() {
    let mut state = build_state(&alternating(4), &["all"]);
    apply_action(&mut state, &GalleryAction::ImageLoaded { tile: 0 });
    let effects = apply_action(&mut state, &GalleryAction::ImageFailed { tile: 1 });
    assert!(!effects.render);
    assert_eq!(effects.layout, LayoutTrigger::None);
    apply_action(&mut state, &GalleryAction::ImageLoaded { tile: 2 });

    let effects = apply_action(
        &mut state,
        &GalleryAction::HeightsMeasured {
            heights: vec![(0, 300.0), (1, 300.0), (2, 131.0)],
            row_gap: 16.0,
        },
    );
    assert!(effects.render);
    let view = state.view();
    assert_eq!(view.tiles[0].span, Some(19));
    assert_eq!(view.tiles[1].span, None);
    assert_eq!(view.tiles[2].span, Some(9));
}

#[test]
fn measured_heights_ignore_unloaded_tiles() {
    let mut state = build_state(&alternating(4), &["all"]);
    let effects = apply_action(
        &mut state,
        &GalleryAction::HeightsMeasured {
            heights: vec![(0, 240.0)],
            row_gap: 16.0,
        },
    );
    assert!(!effects.render);
    assert_eq!(state.view().tiles[0].span, None);
}

#[test]
fn unchanged_spans_do_not_rerender() {
    let mut state = build_state(&alternating(4), &["all"]);
    apply_action(&mut state, &GalleryAction::ImageLoaded { tile: 0 });
    let measured = GalleryAction::HeightsMeasured {
        heights: vec![(0, 240.0)],
        row_gap: 16.0,
    };
    let effects = apply_action(&mut state, &measured);
    assert!(effects.render);
    assert_eq!(state.view().tiles[0].span, Some(16));

    let effects = apply_action(&mut state, &measured);
    assert!(!effects.render);
}

#[test]
fn resize_requests_a_debounced_relayout() {
    let mut state = build_state(&alternating(4), &["all"]);
    let effects = apply_action(&mut state, &GalleryAction::ViewportResized);
    assert!(!effects.render);
    assert_eq!(effects.layout, LayoutTrigger::Debounce);
}
