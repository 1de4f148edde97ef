use approx::assert_relative_eq;
use linechart_rs::api::ChartConfig;
use linechart_rs::core::{SeriesPoint, Viewport};

fn base_config() -> ChartConfig {
    ChartConfig::new(
        Viewport::new(800, 500),
        vec![
            SeriesPoint::new("Mon", 13.0),
            SeriesPoint::new("Tue", 5.0),
        ],
    )
}

#[test]
fn defaults_match_the_documented_values() {
    let config = base_config();

    assert_relative_eq!(config.grid.top, 20.0);
    assert_relative_eq!(config.grid.left, 30.0);
    assert_relative_eq!(config.grid.right, 20.0);
    assert_relative_eq!(config.grid.bottom, 40.0);
    assert_relative_eq!(config.plot_width(), 750.0);
    assert_relative_eq!(config.plot_height(), 440.0);

    assert!(config.x_axis.axis_line.show);
    assert_relative_eq!(config.x_axis.axis_tick.length, 5.0);
    assert_relative_eq!(config.y_axis.axis_label.font_size_px, 14.0);
    assert_eq!(config.y_axis.axis_label.unit, "");

    assert!(config.shape.dot_style.show);
    assert_relative_eq!(config.shape.dot_style.size, 3.5);
    assert_relative_eq!(config.shape.line_style.width, 2.0);

    assert_eq!(config.tooltip.width, None);
    assert_relative_eq!(config.tooltip.padding_x, 10.0);
    assert_relative_eq!(config.tooltip.padding_y, 5.0);

    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_merges_field_by_field_over_defaults() {
    let config = ChartConfig::from_json_str(
        r#"{
            "viewport": { "width": 800, "height": 500 },
            "grid": { "left": 60.0 },
            "tooltip": { "padding_x": 12.0 },
            "data": [
                { "name": "Mon", "value": 13.0 },
                { "name": "Tue" }
            ]
        }"#,
    )
    .expect("config");

    // The overridden fields land; their siblings keep their defaults.
    assert_relative_eq!(config.grid.left, 60.0);
    assert_relative_eq!(config.grid.top, 20.0);
    assert_relative_eq!(config.grid.bottom, 40.0);
    assert_relative_eq!(config.tooltip.padding_x, 12.0);
    assert_relative_eq!(config.tooltip.padding_y, 5.0);

    // Untouched sections fall back entirely.
    assert_eq!(config.x_axis, Default::default());
    assert_eq!(config.shape, Default::default());

    // A point without a value deserializes as a gap.
    assert_eq!(config.data[1], SeriesPoint::gap("Tue"));
    assert!(config.validate().is_ok());
}

#[test]
fn json_round_trip_preserves_the_config() {
    let mut config = base_config();
    config.grid.left = 35.0;
    config.y_axis.axis_label.unit = "ms".to_owned();
    config.tooltip.width = Some(120.0);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_is_reported_as_a_config_error() {
    let result = ChartConfig::from_json_str("{ not json }");
    assert!(result.is_err());
}

#[test]
fn validation_rejects_degenerate_viewports_and_grids() {
    let mut config = base_config();
    config.viewport = Viewport::new(0, 500);
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.grid.left = -1.0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.grid.left = 500.0;
    config.grid.right = 400.0;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_bad_style_values() {
    let mut config = base_config();
    config.x_axis.axis_line.width = 0.0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.y_axis.axis_label.font_size_px = -14.0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.shape.dot_style.size = 0.0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.tooltip.width = Some(0.0);
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.tooltip.background.red = 2.0;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_unusable_data() {
    let mut config = base_config();
    config.data.clear();
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.data = vec![SeriesPoint::gap("Mon"), SeriesPoint::gap("Tue")];
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.data.push(SeriesPoint::new("Mon", 1.0));
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.data.push(SeriesPoint::new("", 1.0));
    assert!(config.validate().is_err());
}

#[test]
fn builder_methods_replace_whole_sections() {
    let config = base_config()
        .with_grid(linechart_rs::api::GridMargins {
            top: 10.0,
            left: 50.0,
            right: 10.0,
            bottom: 30.0,
        })
        .with_tooltip(linechart_rs::api::TooltipOptions {
            width: Some(90.0),
            ..Default::default()
        });

    assert_relative_eq!(config.grid.left, 50.0);
    assert_relative_eq!(config.plot_width(), 740.0);
    assert_eq!(config.tooltip.width, Some(90.0));
    assert!(config.validate().is_ok());
}
