use perfcurve::{Complexity, DataPoint, FitConfig, Logging, evaluate};

fn quadratic_report() -> perfcurve::ComplexityReport {
    let points: Vec<DataPoint> = [(10.0, 100.0), (20.0, 400.0), (30.0, 900.0), (40.0, 1600.0)]
        .into_iter()
        .map(DataPoint::from)
        .collect();
    evaluate(&points, &Complexity::Quadratic, &FitConfig::default())
}

#[test]
fn test_render_none_is_silent() {
    assert!(quadratic_report().render(Logging::None).is_empty());
}

#[test]
fn test_render_overview_is_one_line() {
    let text = quadratic_report().render(Logging::Overview);
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("quadratic O(n^2): fits"));
    assert!(text.contains("correlation >= 0.9"));
}

#[test]
fn test_render_detailed_dumps_points() {
    let text = quadratic_report().render(Logging::Detailed);
    assert!(text.contains("point 1: size: 10, time: 10"));
    assert!(text.contains("point 4: size: 40, time: 40"));
    assert!(text.contains("slope: "));
    assert!(text.contains("intercept: "));
    assert!(text.contains("threshold: correlation >= 0.9"));
    assert!(text.contains("verdict: fits"));
}

#[test]
fn test_rejected_report_lists_failures() {
    let points: Vec<DataPoint> = (1..=4).map(|i| DataPoint::new(i as f64, i as f64)).collect();
    let report = evaluate(&points, &Complexity::Constant, &FitConfig::default());
    let text = report.render(Logging::Detailed);
    assert!(text.contains("verdict: rejected"));
    assert!(text.contains("failure: slope"));
    assert!(report.to_string().contains("rejected"));
}

#[test]
fn test_report_serializes_to_json() {
    let json = quadratic_report().to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["fits"], true);
    assert_eq!(value["threshold"]["kind"], "minimum_correlation");
    assert_eq!(value["points"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["points"][0]["size"], 10.0);
}

#[test]
fn test_logging_levels_parse_and_order() {
    assert_eq!("detailed".parse::<Logging>().expect("level"), Logging::Detailed);
    assert!("loud".parse::<Logging>().is_err());
    assert!(Logging::None < Logging::Overview && Logging::Overview < Logging::Detailed);
    assert_eq!(Logging::default(), Logging::None);
}
