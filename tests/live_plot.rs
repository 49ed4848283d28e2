use liveplot_notebook::{
    GridLayout, LineStyle, LivePlot, LivePlotConfig, LivePlotError, MemorySurface, SampleValue,
    Values,
};

fn plot_with(groups: &[&str]) -> LivePlot<MemorySurface> {
    let cfg = LivePlotConfig::default().with_groups(groups.iter().copied());
    LivePlot::new(cfg, MemorySurface::new())
}

#[test]
fn default_group_when_none_declared() {
    let plot = LivePlot::new(LivePlotConfig::default(), MemorySurface::new());
    assert_eq!(plot.groups(), &["default".to_string()]);
    assert_eq!(plot.series("default"), Some(&[][..]));
    assert!(plot.figure().is_none());
}

#[test]
fn length_equals_total_appended() {
    let mut plot = plot_with(&["train", "val"]);
    plot.update([("train", 1.0)], false, false).unwrap();
    plot.update([("train", vec![2.0, 3.0, 4.0])], false, false).unwrap();
    plot.update(Values::groups().with("train", 5).with("val", vec![1, 2]), false, false)
        .unwrap();
    assert_eq!(plot.series("train").unwrap().len(), 5);
    assert_eq!(plot.series("val").unwrap().len(), 2);
    assert_eq!(plot.series("train").unwrap(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn reset_update_replaces_series() {
    let mut plot = plot_with(&["train"]);
    plot.update([("train", vec![1, 2, 3])], false, false).unwrap();
    plot.update([("train", vec![9])], false, true).unwrap();
    assert_eq!(plot.series("train").unwrap(), &[9.0]);

    plot.update([("train", 4.5)], false, true).unwrap();
    assert_eq!(plot.series("train").unwrap(), &[4.5]);
}

#[test]
fn scalar_update_is_default_group_update() {
    let mut a = LivePlot::new(LivePlotConfig::default(), MemorySurface::new());
    let mut b = LivePlot::new(LivePlotConfig::default(), MemorySurface::new());
    a.update(5, false, false).unwrap();
    b.update([("default", 5)], false, false).unwrap();
    assert_eq!(a.series("default"), b.series("default"));
    assert_eq!(a.series("default").unwrap(), &[5.0]);
}

#[test]
fn scalar_update_without_default_group_fails() {
    let mut plot = plot_with(&["train"]);
    let err = plot.update(1.0, false, false).unwrap_err();
    assert!(matches!(err, LivePlotError::UnknownGroup(ref g) if g == "default"));
}

#[test]
fn layout_follows_group_count() {
    assert_eq!(plot_with(&["train", "val"]).layout(), GridLayout { rows: 1, cols: 2 });
    assert_eq!(plot_with(&["a", "b", "c"]).layout(), GridLayout { rows: 2, cols: 2 });
    assert_eq!(plot_with(&["only"]).layout(), GridLayout { rows: 1, cols: 1 });
}

#[test]
fn unknown_group_is_an_error_and_not_created() {
    let mut plot = plot_with(&["train"]);
    let err = plot.update([("test", 0.3)], true, false).unwrap_err();
    assert!(matches!(err, LivePlotError::UnknownGroup(ref g) if g == "test"));
    assert!(plot.series("test").is_none());
    assert_eq!(plot.groups().len(), 1);
    // the failing call must not have rendered
    assert_eq!(plot.surface().show_count(), 0);
}

#[test]
fn earlier_groups_stay_updated_when_a_later_one_is_unknown() {
    let mut plot = plot_with(&["train", "val"]);
    let values = Values::groups()
        .with("train", 1.0)
        .with("bogus", 2.0)
        .with("val", 3.0);
    assert!(plot.update(values, false, false).is_err());
    assert_eq!(plot.series("train").unwrap(), &[1.0]);
    assert_eq!(plot.series("val").unwrap(), &[] as &[f64]);
}

#[test]
fn train_val_scenario() {
    let mut plot = plot_with(&["train", "val"]);
    let steps = [(0.1, 0.2), (0.2, 0.3), (0.3, 0.4)];
    for (t, v) in steps {
        plot.update([("train", t), ("val", v)], true, false).unwrap();
    }
    assert_eq!(plot.series("train").unwrap(), &[0.1, 0.2, 0.3]);
    assert_eq!(plot.series("val").unwrap(), &[0.2, 0.3, 0.4]);
    plot.render().unwrap();
    assert_eq!(plot.surface().show_count(), 4);
}

#[test]
fn render_draws_titles_and_labels() {
    let mut plot = plot_with(&["train", "val"]);
    plot.push([("train", 1.0), ("val", 2.0)]).unwrap();
    let fig = plot.figure().unwrap();
    let train = fig.axes_for("train").unwrap();
    assert_eq!(train.title().unwrap().text, "train");
    assert!(train.title().unwrap().font.bold);
    assert_eq!(train.x_label().unwrap().text, "Timestep");
    assert_eq!(train.lines().len(), 1);
    assert_eq!(train.lines()[0].samples, vec![1.0]);
}

#[test]
fn default_group_has_no_title() {
    let mut plot = LivePlot::new(LivePlotConfig::default(), MemorySurface::new());
    plot.push(3).unwrap();
    let axes = plot.figure().unwrap().axes_for("default").unwrap();
    assert!(axes.title().is_none());
    assert_eq!(axes.x_label().unwrap().text, "Timestep");
}

#[test]
fn render_does_not_mutate_series_and_replots_every_time() {
    let mut plot = plot_with(&["a"]);
    plot.update([("a", vec![1.0, 2.0])], false, false).unwrap();
    plot.render().unwrap();
    plot.render().unwrap();
    assert_eq!(plot.series("a").unwrap(), &[1.0, 2.0]);
    let fig = plot.figure().unwrap();
    assert_eq!(fig.axes_for("a").unwrap().lines().len(), 1);
    assert_eq!(fig.revision(), 2);
}

#[test]
fn surface_keeps_a_single_current_frame() {
    let mut plot = plot_with(&["a"]);
    for i in 0..5 {
        plot.push([("a", i)]).unwrap();
    }
    let surface = plot.surface();
    assert_eq!(surface.show_count(), 5);
    assert_eq!(surface.frames().len(), 1);
    let current = surface.current().unwrap();
    assert_eq!(current.axes_for("a").unwrap().lines()[0].len(), 5);
}

#[test]
fn reset_then_render_gives_empty_lines() {
    let mut plot = plot_with(&["train", "val"]);
    plot.push([("train", vec![1.0, 2.0]), ("val", vec![3.0])]).unwrap();
    plot.reset();
    assert_eq!(plot.groups().len(), 2);
    plot.render().unwrap();
    for group in ["train", "val"] {
        assert_eq!(plot.series(group).unwrap().len(), 0);
        let axes = plot.figure().unwrap().axes_for(group).unwrap();
        assert_eq!(axes.lines().len(), 1);
        assert!(axes.lines()[0].is_empty());
    }
}

#[test]
fn batched_updates_render_only_on_request() {
    let mut plot = plot_with(&["a"]);
    for i in 0..10 {
        plot.update([("a", i)], false, false).unwrap();
    }
    assert_eq!(plot.surface().show_count(), 0);
    assert!(plot.figure().is_none());
    plot.render().unwrap();
    assert_eq!(plot.surface().show_count(), 1);
}

#[test]
fn smoothed_style_is_carried_to_lines() {
    let cfg = LivePlotConfig::default()
        .with_groups(["loss"])
        .with_style(LineStyle::smoothed());
    let mut plot = LivePlot::new(cfg, MemorySurface::new());
    plot.push([("loss", vec![1.0, 0.5, 0.7, 0.3, 0.2])]).unwrap();
    let line = &plot.figure().unwrap().axes_for("loss").unwrap().lines()[0];
    let smoothed = line.smoothed.as_ref().unwrap();
    assert_eq!(smoothed.len(), 5);
    assert!(line.band);
}

#[test]
fn layout_is_fixed_after_first_render() {
    let mut plot = plot_with(&["a", "b", "c"]);
    plot.render().unwrap();
    assert_eq!(plot.figure().unwrap().layout(), GridLayout { rows: 2, cols: 2 });
    assert_eq!(plot.figure().unwrap().axes().len(), 3);
}

#[test]
fn close_disposes_figure_and_surface() {
    let mut plot = plot_with(&["a"]);
    plot.push([("a", 1.0)]).unwrap();
    plot.close().unwrap();
    assert!(plot.figure().is_none());
    assert!(plot.surface().is_closed());
    // data survives; the next render starts a fresh figure
    plot.render().unwrap();
    assert_eq!(plot.figure().unwrap().revision(), 1);
}

#[test]
fn sample_value_sequence_from_slice() {
    let data = [1.0f32, 2.0, 3.0];
    let v = SampleValue::from(&data[..]);
    assert_eq!(v.len(), 3);
    let mut plot = plot_with(&["a"]);
    plot.update(Values::groups().with("a", v), false, false).unwrap();
    assert_eq!(plot.series("a").unwrap(), &[1.0, 2.0, 3.0]);
}
