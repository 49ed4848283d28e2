use liveplot_notebook::{FigureSize, LineStyle, LivePlotConfig, Theme};

#[test]
fn defaults_match_notebook_usage() {
    let cfg = LivePlotConfig::default();
    assert!(cfg.groups.is_empty());
    assert_eq!(cfg.style, LineStyle::Plain);
    assert_eq!(cfg.theme, Theme::DarkGrid);
    assert_eq!(cfg.size, FigureSize::new(1000, 500));
    assert_eq!(cfg.x_label, "Timestep");
    assert_eq!(cfg.title_font.size, 14.0);
    assert_eq!(cfg.label_font_size, 12.0);
}

#[test]
fn inch_sizes_convert_at_dpi() {
    assert_eq!(FigureSize::from_inches(10.0, 5.0, 100.0), FigureSize::new(1000, 500));
    assert_eq!(FigureSize::from_inches(0.0, 0.0, 100.0), FigureSize::new(1, 1));
}

#[test]
fn partial_yaml_keeps_defaults() {
    let yaml = r#"
groups: [train, val]
style: { kind: smoothed, window: 7, band: false }
theme: whitegrid
"#;
    let cfg = LivePlotConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.groups, vec!["train", "val"]);
    assert_eq!(cfg.style, LineStyle::Smoothed { window: 7, band: false });
    assert_eq!(cfg.theme, Theme::WhiteGrid);
    assert_eq!(cfg.x_label, "Timestep");
}

#[test]
fn json_round_trip() {
    let cfg = LivePlotConfig::default()
        .with_groups(["loss"])
        .with_style(LineStyle::smoothed())
        .with_size(FigureSize::new(800, 400))
        .with_x_label("Epoch");
    let json = serde_json::to_string(&cfg).unwrap();
    let back = LivePlotConfig::from_json_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn load_picks_format_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("plot.json");
    std::fs::write(&json_path, r#"{"groups": ["a", "b", "c"]}"#).unwrap();
    assert_eq!(LivePlotConfig::load(&json_path).unwrap().groups.len(), 3);

    let yaml_path = dir.path().join("plot.yml");
    std::fs::write(&yaml_path, "x_label: Step\n").unwrap();
    assert_eq!(LivePlotConfig::load(&yaml_path).unwrap().x_label, "Step");
}

#[test]
fn invalid_config_is_an_error() {
    assert!(LivePlotConfig::from_json_str("{\"groups\": 3}").is_err());
    assert!(LivePlotConfig::load("/nonexistent/plot.yaml").is_err());
}
