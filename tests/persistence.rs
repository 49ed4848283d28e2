use liveplot_notebook::persistence::{
    load_state_from_path, save_state_to_path, state_from_json, state_to_json, GroupState,
    HistoryState,
};
use liveplot_notebook::{LivePlot, LivePlotConfig, LivePlotError, MemorySurface};

fn plot_with(groups: &[&str]) -> LivePlot<MemorySurface> {
    LivePlot::new(
        LivePlotConfig::default().with_groups(groups.iter().copied()),
        MemorySurface::new(),
    )
}

#[test]
fn snapshot_lists_groups_in_order() {
    let mut plot = plot_with(&["train", "val"]);
    plot.update([("val", 0.5), ("train", 0.7)], false, false).unwrap();
    let state = plot.snapshot();
    let names: Vec<&str> = state.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["train", "val"]);
    assert_eq!(state.group("val").unwrap().samples, vec![0.5]);
    assert!(chrono::DateTime::parse_from_rfc3339(&state.saved_at).is_ok());
}

#[test]
fn file_round_trip_restores_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut plot = plot_with(&["train", "val"]);
    plot.update([("train", vec![1.0, 0.5]), ("val", vec![1.2])], false, false)
        .unwrap();
    save_state_to_path(&plot.snapshot(), &path).unwrap();

    let mut resumed = plot_with(&["train", "val"]);
    resumed.restore(load_state_from_path(&path).unwrap()).unwrap();
    assert_eq!(resumed.series("train").unwrap(), &[1.0, 0.5]);
    assert_eq!(resumed.series("val").unwrap(), &[1.2]);
}

#[test]
fn json_helpers_round_trip() {
    let state = HistoryState {
        saved_at: "2026-01-01T00:00:00+00:00".to_string(),
        groups: vec![GroupState {
            name: "loss".to_string(),
            samples: vec![0.3, 0.2],
        }],
    };
    let json = state_to_json(&state).unwrap();
    assert_eq!(state_from_json(&json).unwrap(), state);
}

#[test]
fn restore_into_undeclared_group_fails_after_earlier_groups() {
    let state = HistoryState {
        saved_at: String::new(),
        groups: vec![
            GroupState {
                name: "train".to_string(),
                samples: vec![1.0],
            },
            GroupState {
                name: "test".to_string(),
                samples: vec![2.0],
            },
        ],
    };
    let mut plot = plot_with(&["train"]);
    let err = plot.restore(state).unwrap_err();
    assert!(matches!(err, LivePlotError::UnknownGroup(ref g) if g == "test"));
    assert_eq!(plot.series("train").unwrap(), &[1.0]);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(state_from_json("not json"), Err(LivePlotError::Json(_))));
}
