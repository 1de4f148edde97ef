use approx::assert_relative_eq;
use linechart_rs::api::{
    POINTER_OFFSET_X, POINTER_OFFSET_Y, TooltipController, TooltipOptions, place_tooltip,
};
use linechart_rs::core::SeriesPoint;
use linechart_rs::render::{NodeKind, RecordingSurface, TextMetrics};

const SURFACE_WIDTH: f64 = 800.0;
const BASELINE_Y: f64 = 460.0;

fn size() -> TextMetrics {
    TextMetrics {
        width: 80.0,
        height: 40.0,
    }
}

#[test]
fn tooltip_sits_right_of_and_below_the_pointer() {
    let placement = place_tooltip(100.0, 100.0, size(), SURFACE_WIDTH, BASELINE_Y, 0.0);

    assert!(!placement.flipped_horizontal);
    assert!(!placement.flipped_vertical);
    assert_relative_eq!(placement.left, 100.0 + POINTER_OFFSET_X);
    assert_relative_eq!(placement.top, 100.0 + POINTER_OFFSET_Y);
}

#[test]
fn tooltip_flips_left_near_the_right_edge() {
    let placement = place_tooltip(710.0, 100.0, size(), SURFACE_WIDTH, BASELINE_Y, 0.0);

    assert!(placement.flipped_horizontal);
    assert_relative_eq!(placement.left, 710.0 - 80.0 - POINTER_OFFSET_X);

    // The overflow test includes the 15px edge pad, inclusively.
    let boundary = place_tooltip(705.0, 100.0, size(), SURFACE_WIDTH, BASELINE_Y, 0.0);
    assert!(boundary.flipped_horizontal);
    let inside = place_tooltip(704.9, 100.0, size(), SURFACE_WIDTH, BASELINE_Y, 0.0);
    assert!(!inside.flipped_horizontal);
}

#[test]
fn tooltip_flips_above_near_the_baseline() {
    let placement = place_tooltip(100.0, 410.0, size(), SURFACE_WIDTH, BASELINE_Y, 0.0);

    assert!(placement.flipped_vertical);
    assert_relative_eq!(placement.top, 410.0 - 40.0 - POINTER_OFFSET_Y);
}

#[test]
fn raised_baseline_flips_the_tooltip_earlier() {
    // With the X axis raised 220px above the plot bottom, the same pointer
    // height that fits over a zero-based axis no longer does.
    let over_zero = place_tooltip(100.0, 200.0, size(), SURFACE_WIDTH, BASELINE_Y, 0.0);
    assert!(!over_zero.flipped_vertical);

    let over_raised = place_tooltip(100.0, 200.0, size(), SURFACE_WIDTH, BASELINE_Y, 220.0);
    assert!(over_raised.flipped_vertical);
}

#[test]
fn controller_starts_hidden_and_shows_on_update() {
    let mut surface = RecordingSurface::new();
    let mut tooltip =
        TooltipController::new(&mut surface, TooltipOptions::default()).expect("tooltip");

    assert_relative_eq!(surface.opacity(tooltip.group()).expect("opacity"), 0.0);
    assert_eq!(tooltip.rendered_index(), None);

    let point = SeriesPoint::new("Mon", 13.0);
    let placement = tooltip
        .update(&mut surface, 0, &point, (100.0, 100.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");

    assert_relative_eq!(surface.opacity(tooltip.group()).expect("opacity"), 1.0);
    let transform = surface.transform(tooltip.group()).expect("transform");
    assert_relative_eq!(transform.translate_x, placement.left);
    assert_relative_eq!(transform.translate_y, placement.top);
}

#[test]
fn content_measures_name_and_value_lines() {
    let mut surface = RecordingSurface::new();
    let mut tooltip =
        TooltipController::new(&mut surface, TooltipOptions::default()).expect("tooltip");

    let point = SeriesPoint::new("Mon", 13.0);
    tooltip
        .update(&mut surface, 0, &point, (100.0, 100.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");

    assert_eq!(surface.texts_under(tooltip.content_group()), vec!["Mon", "13"]);

    // "Mon" is the widest line: 3 glyphs at font size 14 and glyph ratio
    // 0.6, plus 10px padding on both sides. Two 14px lines with a 4px gap
    // and 5px vertical padding give the height.
    let size = tooltip.content_size();
    assert_relative_eq!(size.width, 25.2 + 20.0, epsilon = 1e-9);
    assert_relative_eq!(size.height, 10.0 + 28.0 + 4.0, epsilon = 1e-9);
}

#[test]
fn background_rect_matches_the_content_size() {
    let mut surface = RecordingSurface::new();
    let mut tooltip =
        TooltipController::new(&mut surface, TooltipOptions::default()).expect("tooltip");

    let point = SeriesPoint::new("Mon", 13.0);
    tooltip
        .update(&mut surface, 0, &point, (100.0, 100.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");

    let rects: Vec<_> = surface
        .children(tooltip.group())
        .flat_map(|(id, _)| surface.children(id))
        .filter_map(|(_, node)| match &node.kind {
            NodeKind::Rect(rect) => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 1);
    assert_relative_eq!(rects[0].width, tooltip.content_size().width);
    assert_relative_eq!(rects[0].height, tooltip.content_size().height);
}

#[test]
fn content_is_rendered_once_per_index() {
    let mut surface = RecordingSurface::new();
    let mut tooltip =
        TooltipController::new(&mut surface, TooltipOptions::default()).expect("tooltip");

    let point = SeriesPoint::new("Mon", 13.0);
    tooltip
        .update(&mut surface, 0, &point, (100.0, 100.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");
    let nodes_after_first = surface.node_count();

    // Same index, new pointer position: repositions without re-rendering.
    tooltip
        .update(&mut surface, 0, &point, (140.0, 120.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");
    assert_eq!(surface.node_count(), nodes_after_first);
    let transform = surface.transform(tooltip.group()).expect("transform");
    assert_relative_eq!(transform.translate_x, 140.0 + POINTER_OFFSET_X);

    // New index: old content is detached and replaced.
    let gap = SeriesPoint::gap("Tue");
    tooltip
        .update(&mut surface, 1, &gap, (140.0, 120.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");
    assert_eq!(tooltip.rendered_index(), Some(1));
    assert_eq!(surface.texts_under(tooltip.content_group()), vec!["Tue"]);
}

#[test]
fn gap_points_render_a_single_line() {
    let mut surface = RecordingSurface::new();
    let mut tooltip =
        TooltipController::new(&mut surface, TooltipOptions::default()).expect("tooltip");

    let gap = SeriesPoint::gap("Sat");
    tooltip
        .update(&mut surface, 5, &gap, (100.0, 100.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");

    assert_eq!(surface.texts_under(tooltip.content_group()), vec!["Sat"]);
    // One 14px line plus 5px vertical padding on both sides.
    assert_relative_eq!(tooltip.content_size().height, 24.0, epsilon = 1e-9);
}

#[test]
fn fixed_size_overrides_win_over_measurement() {
    let mut surface = RecordingSurface::new();
    let mut options = TooltipOptions::default();
    options.width = Some(120.0);
    options.height = Some(64.0);
    let mut tooltip = TooltipController::new(&mut surface, options).expect("tooltip");

    let point = SeriesPoint::new("Mon", 13.0);
    tooltip
        .update(&mut surface, 0, &point, (100.0, 100.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");

    assert_relative_eq!(tooltip.content_size().width, 120.0);
    assert_relative_eq!(tooltip.content_size().height, 64.0);
}

#[test]
fn hide_keeps_the_rendered_content() {
    let mut surface = RecordingSurface::new();
    let mut tooltip =
        TooltipController::new(&mut surface, TooltipOptions::default()).expect("tooltip");

    let point = SeriesPoint::new("Mon", 13.0);
    tooltip
        .update(&mut surface, 0, &point, (100.0, 100.0), SURFACE_WIDTH, BASELINE_Y, 0.0)
        .expect("update");
    tooltip.hide(&mut surface).expect("hide");

    assert_relative_eq!(surface.opacity(tooltip.group()).expect("opacity"), 0.0);
    assert_eq!(tooltip.rendered_index(), Some(0));
    assert_eq!(surface.texts_under(tooltip.content_group()), vec!["Mon", "13"]);
}
