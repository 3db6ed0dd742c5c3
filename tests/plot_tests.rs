use bytecode_trace_diff::aggregator::classify;
use bytecode_trace_diff::plot::{load_plot_config, PlotConfig, ScatterRenderer};
use std::fs;

const PNG_MAGIC: &[u8] = b"\x89PNG";

#[test]
fn test_render_writes_both_pngs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::new()
        .with_output_dir(temp_dir.path().join("analysis"))
        .with_size(400, 200);
    let renderer = ScatterRenderer::new(config).unwrap();

    let result = classify(&[0x7f10, 0x7f20, 0x7f10, 0x7f40], &[0x7f10, 0x7f10]);
    let plots = renderer.render("run", &result).unwrap();

    assert!(plots.all.ends_with("analysis/run_all.png"));
    assert!(plots.only_debug.ends_with("analysis/run_only_debug.png"));

    for path in [&plots.all, &plots.only_debug] {
        let bytes = fs::read(path).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }
}

#[test]
fn test_render_empty_classification() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::new()
        .with_output_dir(temp_dir.path())
        .with_size(300, 200);
    let renderer = ScatterRenderer::new(config).unwrap();

    let result = classify(&[], &[]);
    let plots = renderer.render("empty", &result).unwrap();

    assert!(plots.all.exists());
    assert!(plots.only_debug.exists());
}

#[test]
fn test_threshold_inside_range_renders() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::new()
        .with_output_dir(temp_dir.path())
        .with_size(300, 200)
        .with_threshold(Some(0x7f15));
    let renderer = ScatterRenderer::new(config).unwrap();

    let result = classify(&[0x7f10, 0x7f20], &[0x7f10]);
    let path = renderer.render_all("guide", &result).unwrap();

    assert!(path.exists());
}

#[test]
fn test_load_plot_config_partial() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("plot.toml");
    fs::write(&path, "width = 800\nmatched_color = [0, 128, 0]\n").unwrap();

    let config = load_plot_config(&path).unwrap();

    assert_eq!(config.width, 800);
    assert_eq!(config.matched_color, [0, 128, 0]);
    assert_eq!(config.height, PlotConfig::default().height);
}

#[test]
fn test_load_plot_config_invalid() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("plot.toml");
    fs::write(&path, "width = \"wide\"\n").unwrap();

    assert!(load_plot_config(&path).is_err());
}
