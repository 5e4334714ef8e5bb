// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer operations end to end.

use chunkmap::{
    Cell, DisplayList, InputEvent, Seed, Target, Viewer, ViewerConfig, ViewerError, ViewerMode,
};
use chunkmap_index::FnPointSource;
use kurbo::{Point, Size, Vec2};

fn viewer(seed: i64) -> Viewer {
    Viewer::new(ViewerConfig::default(), Size::new(800.0, 600.0), Seed(seed)).unwrap()
}

fn point_viewer() -> Viewer {
    let config = ViewerConfig {
        mode: ViewerMode::Points,
        ..ViewerConfig::default()
    };
    Viewer::new(config, Size::new(800.0, 600.0), Seed(0)).unwrap()
}

#[test]
fn search_selects_and_centres() {
    let mut v = viewer(0);
    assert_eq!(v.search_nearest(0, 0, 10), Ok(Cell::new(-2, 0)));
    assert_eq!(v.selection(), Some(&Target::Cell(Cell::new(-2, 0))));
    assert_eq!(v.viewport().center(), Point::new(-24.0, 8.0));

    let mut v = viewer(123_456_789);
    assert_eq!(v.search_nearest(5, 31, 10), Ok(Cell::new(0, 1)));
}

#[test]
fn search_truncates_blocks_toward_zero() {
    // Block -1 names chunk 0, so this is the same search as from the origin.
    let mut v = viewer(123_456_789);
    assert_eq!(v.search_nearest(-1, -1, 10), Ok(Cell::new(0, 1)));
    assert_eq!(v.search_nearest(-15, -15, 10), Ok(Cell::new(0, 1)));
    // Block -16 is the first one in chunk -1.
    assert_eq!(v.search_nearest(-16, -16, 10), Ok(Cell::new(-3, -2)));
}

#[test]
fn oversized_radius_is_rejected_up_front() {
    let mut v = viewer(0);
    let before = v.state().clone();
    assert_eq!(
        v.search_nearest(0, 0, i32::MAX),
        Err(ViewerError::SearchRadiusTooLarge {
            radius: i32::MAX,
            max: 1024
        })
    );
    assert_eq!(v.state(), &before);
    assert_eq!(v.search_nearest(0, 0, 1024), Ok(Cell::new(-2, 0)));
}

#[test]
fn far_view_centre_renders_a_bounded_frame() {
    let mut v = viewer(0);
    v.set_viewport(1.0e17, 0.0, 16.0);
    let mut frame = DisplayList::new();
    v.render(&mut frame);
    assert_eq!(frame.texts().count(), 1);
    assert!(frame.len() < 32);
    assert!(v.chunks_in(&v.visible_window()).is_empty());
}

#[test]
fn out_of_range_search_changes_nothing() {
    let mut v = viewer(0);
    v.select(Target::Cell(Cell::new(7, 7)));
    let before = v.state().clone();
    let err = v.search_nearest(12_550_817, 0, 10).unwrap_err();
    assert_eq!(
        err,
        ViewerError::CoordinateOutOfRange {
            x: 12_550_817,
            z: 0,
            max: 12_550_816.0
        }
    );
    assert_eq!(v.state(), &before);
    assert!(matches!(
        v.search_nearest(0, i64::MIN, 10),
        Err(ViewerError::CoordinateOutOfRange { .. })
    ));
    // The bound itself is accepted.
    assert!(v.search_nearest(12_550_816, 0, 10).is_ok());
}

#[test]
fn empty_search_reports_no_match() {
    let mut v = viewer(0);
    let before = v.state().clone();
    assert_eq!(
        v.search_nearest(0, 0, 1),
        Err(ViewerError::NoMatchFound { x: 0, z: 0, radius: 1 })
    );
    assert_eq!(v.state(), &before);
}

#[test]
fn seed_change_clears_selection_and_recentres() {
    let mut v = viewer(0);
    v.search_nearest(0, 0, 10).unwrap();
    v.set_seed(42);
    assert_eq!(v.seed(), Seed(42));
    assert_eq!(v.selection(), None);
    assert_eq!(v.viewport().center(), Point::new(8.0, 8.0));
}

#[test]
fn invalid_seed_text_keeps_seed() {
    let mut v = viewer(5);
    v.select(Target::Cell(Cell::new(1, 1)));
    let err = v.set_seed_text("12ab").unwrap_err();
    assert_eq!(err, ViewerError::InvalidSeedFormat { text: "12ab".into() });
    assert_eq!(v.seed(), Seed(5));
    assert!(v.selection().is_some());

    assert_eq!(v.set_seed_text(" -7 "), Ok(Seed(-7)));
    assert_eq!(v.seed(), Seed(-7));
    assert!(v.set_seed_text("9223372036854775808").is_err());
}

#[test]
fn random_seed_is_applied() {
    let mut v = viewer(0);
    v.search_nearest(0, 0, 10).unwrap();
    let seed = v.randomize_seed().unwrap();
    assert_eq!(v.seed(), seed);
    assert_eq!(v.selection(), None);
}

#[test]
fn reset_restores_default_view_and_deselects() {
    let mut v = viewer(0);
    v.set_viewport(100.0, -50.0, 4.0);
    assert_eq!(v.viewport().scale(), 4.0);
    assert_eq!(v.viewport().center(), Point::new(100.0, -50.0));
    v.select(Target::Cell(Cell::new(0, 0)));
    v.reset_viewport();
    assert_eq!(v.viewport().scale(), 1.0);
    assert_eq!(v.viewport().offset(), Vec2::ZERO);
    assert_eq!(v.selection(), None);
}

#[test]
fn scale_setters_clamp() {
    let mut v = viewer(0);
    v.set_scale(100.0);
    assert_eq!(v.viewport().scale(), 16.0);
    v.set_viewport(0.0, 0.0, 0.01);
    assert_eq!(v.viewport().scale(), 0.25);
    v.set_offset(Vec2::new(3.0, 4.0));
    assert_eq!(v.viewport().center(), Point::new(-3.0, -4.0));
    v.center_on(1.0, 2.0);
    assert_eq!(v.viewport().center(), Point::new(1.0, 2.0));
}

#[test]
fn clicks_toggle_cells() {
    let mut v = viewer(0);
    let p = Point::new(405.0, 305.0);
    v.handle(InputEvent::Click(p));
    assert_eq!(v.selection(), Some(&Target::Cell(Cell::new(0, 0))));
    v.handle(InputEvent::Click(Point::new(380.0, 305.0)));
    assert_eq!(v.selection(), Some(&Target::Cell(Cell::new(-2, 0))));
    v.handle(InputEvent::Click(Point::new(380.0, 305.0)));
    assert_eq!(v.selection(), None);
}

#[test]
fn drag_pans_the_map() {
    let mut v = viewer(0);
    v.handle(InputEvent::Press(Point::new(400.0, 300.0)));
    v.handle(InputEvent::Drag(Point::new(432.0, 300.0)));
    v.handle(InputEvent::Release(Point::new(432.0, 300.0)));
    // Content follows the pointer, so the world point at the centre moves left.
    assert_eq!(v.viewport().center(), Point::new(-32.0, 0.0));
}

#[test]
fn point_mode_hits_within_radius() {
    let mut v = point_viewer();
    v.add_point(Point::new(100.0, 200.0));
    v.add_point(Point::new(-50.0, 10.0));
    v.set_scale(2.0);

    // (100, 200) is at view (600, 700), off a 600px canvas; pan it into view.
    v.center_on(100.0, 200.0);
    v.handle(InputEvent::Click(Point::new(404.0, 303.0)));
    assert_eq!(v.selection(), Some(&Target::Point(Point::new(100.0, 200.0))));

    // 10px away is a miss and clears the selection.
    v.handle(InputEvent::Click(Point::new(410.0, 300.0)));
    assert_eq!(v.selection(), None);

    v.handle(InputEvent::Click(Point::new(400.0, 300.0)));
    v.clear_points();
    assert_eq!(v.selection(), None);
    assert!(v.points_in(&v.visible_window()).is_empty());
}

#[test]
fn point_sources_are_merged() {
    let mut v = point_viewer();
    v.add_point(Point::new(1.0, 1.0));
    v.set_point_source(Box::new(FnPointSource::new(|_: &chunkmap_index::VisibleWindow| {
        [Point::new(2.0, 2.0), Point::new(1.0e9, 0.0)]
    })));
    let points = v.points_in(&v.visible_window());
    assert_eq!(points, [Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);

    let mut frame = DisplayList::new();
    v.render(&mut frame);
    let discs = frame
        .draws()
        .filter(|d| matches!(d.op, chunkmap_imaging::DrawOp::FillCircle(_)))
        .count();
    assert_eq!(discs, 2);
}

#[test]
fn render_is_read_only() {
    let mut v = viewer(0);
    v.search_nearest(0, 0, 10).unwrap();
    let before = v.state().clone();
    let mut frame = DisplayList::new();
    v.render(&mut frame);
    assert_eq!(v.state(), &before);
    assert!(!frame.is_empty());

    v.resize(0.0, 0.0);
    let mut empty = DisplayList::new();
    v.render(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let config = ViewerConfig {
        search_radius: -1,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        Viewer::new(config, Size::new(10.0, 10.0), Seed(0)),
        Err(ViewerError::Config { .. })
    ));
}
