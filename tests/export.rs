use liveplot_notebook::export::{save_history_csv, write_history_csv};
use liveplot_notebook::{LivePlot, LivePlotConfig, MemorySurface};

fn csv_of(plot: &LivePlot<MemorySurface>) -> Vec<String> {
    let mut buf = Vec::new();
    write_history_csv(&mut buf, plot.history()).unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn writes_header_in_group_order() {
    let plot = LivePlot::new(
        LivePlotConfig::default().with_groups(["train", "val"]),
        MemorySurface::new(),
    );
    assert_eq!(csv_of(&plot), vec!["timestep,train,val"]);
}

#[test]
fn aligns_by_timestep_with_gaps() {
    let mut plot = LivePlot::new(
        LivePlotConfig::default().with_groups(["train", "val"]),
        MemorySurface::new(),
    );
    plot.update([("train", vec![0.5, 0.25, 0.125]), ("val", vec![0.75])], false, false)
        .unwrap();
    let lines = csv_of(&plot);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "0,0.5,0.75");
    assert_eq!(lines[2], "1,0.25,");
    assert_eq!(lines[3], "2,0.125,");
}

#[test]
fn saves_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.csv");
    let mut plot = LivePlot::new(LivePlotConfig::default(), MemorySurface::new());
    plot.update(vec![("default", vec![1, 2])], false, false).unwrap();
    save_history_csv(&path, plot.history()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "timestep,default\n0,1\n1,2\n");
}
