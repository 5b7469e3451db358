use super::*;
use crate::core::FixedPitchMetrics;
use approx::assert_relative_eq;

fn metrics() -> FixedPitchMetrics {
    FixedPitchMetrics::default()
}

fn model_with(nodes: &[(&str, f64, f64)], connections: Vec<NetworkConnection>) -> NetworkModel {
    NetworkModel::from_parts(
        nodes
            .iter()
            .map(|(name, x, y)| NetworkNode::new(*name, DVec2::new(*x, *y)))
            .collect(),
        connections,
    )
    .expect("Testmodell muss gültig sein")
}

fn a_to_b() -> NetworkModel {
    model_with(
        &[("A", 100.0, 100.0), ("B", 300.0, 100.0)],
        vec![NetworkConnection::new("A", Side::Right, "B", Side::Left)],
    )
}

#[test]
fn node_bounds_follow_label_width_and_line_height() {
    let m = metrics();
    let short = node_bounds(&NetworkNode::new("A", DVec2::ZERO), &m);
    assert_relative_eq!(short.width, 18.0);
    assert_relative_eq!(short.height, 27.0);

    let long = node_bounds(&NetworkNode::new("Authentication server", DVec2::ZERO), &m);
    assert_relative_eq!(long.width, 21.0 * 8.0 + 10.0);
    assert_relative_eq!(long.height, long.width / 4.0);
}

#[test]
fn connection_points_sit_on_the_ellipse_sides() {
    let node = NetworkNode::new("A", DVec2::new(100.0, 100.0));
    let m = metrics();
    assert_eq!(connection_point(&node, Side::Top, &m), DVec2::new(100.0, 86.5));
    assert_eq!(connection_point(&node, Side::Bottom, &m), DVec2::new(100.0, 113.5));
    assert_eq!(connection_point(&node, Side::Left, &m), DVec2::new(91.0, 100.0));
    assert_eq!(connection_point(&node, Side::Right, &m), DVec2::new(109.0, 100.0));
}

#[test]
fn hit_node_prefers_topmost_node() {
    let model = model_with(&[("A", 100.0, 100.0), ("B", 105.0, 100.0)], Vec::new());
    assert_eq!(hit_node(&model, &metrics(), DVec2::new(103.0, 100.0)), Some(1));
    assert_eq!(hit_node(&model, &metrics(), DVec2::new(93.0, 100.0)), Some(0));
}

#[test]
fn hit_node_rejects_bounding_box_corners() {
    let model = model_with(&[("A", 100.0, 100.0)], Vec::new());
    assert_eq!(hit_node(&model, &metrics(), DVec2::new(108.0, 112.0)), None);
    assert_eq!(hit_node(&model, &metrics(), DVec2::new(100.0, 112.0)), Some(0));
}

#[test]
fn caret_index_walks_character_midpoints() {
    let node = NetworkNode::new("Alpha", DVec2::new(100.0, 100.0));
    let m = metrics();
    let label = label_box(&node, &m);
    assert_relative_eq!(label.left, 80.0);
    assert_relative_eq!(label.baseline, 104.5);
    assert_relative_eq!(label.top, 92.5);
    assert_relative_eq!(label.bottom, 107.5);

    assert_eq!(caret_index(&node, &m, DVec2::new(81.0, 100.0)), Some(0));
    assert_eq!(caret_index(&node, &m, DVec2::new(85.0, 100.0)), Some(1));
    assert_eq!(caret_index(&node, &m, DVec2::new(119.0, 100.0)), Some(5));
    assert_eq!(caret_index(&node, &m, DVec2::new(100.0, 90.0)), None);
}

#[test]
fn click_between_a_and_b_selects_the_connection() {
    let model = a_to_b();
    let descriptor = point_geometry(
        &model,
        &metrics(),
        DVec2::new(200.0, 100.0),
        &HitTestConfig::default(),
    );
    assert_eq!(descriptor, GeometryDescriptor::Connection { index: 0 });
}

#[test]
fn click_on_node_label_reports_caret() {
    let model = a_to_b();
    let descriptor = point_geometry(
        &model,
        &metrics(),
        DVec2::new(101.0, 100.0),
        &HitTestConfig::default(),
    );
    assert_eq!(
        descriptor,
        GeometryDescriptor::Node {
            index: 0,
            caret: Some(1)
        }
    );
}

#[test]
fn pick_threshold_is_compared_against_squared_distance() {
    let model = a_to_b();
    let config = HitTestConfig::default();
    let m = metrics();
    assert_eq!(hit_connection(&model, &m, DVec2::new(200.0, 104.5), &config), Some(0));
    assert_eq!(hit_connection(&model, &m, DVec2::new(200.0, 106.0), &config), None);
}

#[test]
fn dangling_connections_are_skipped() {
    let model = model_with(
        &[("A", 100.0, 100.0)],
        vec![NetworkConnection::new("A", Side::Right, "Ghost", Side::Left)],
    );
    let m = metrics();
    let config = HitTestConfig::default();
    assert!(connection_curve_for(&model, &m, &model.connections()[0], &config).is_none());
    assert_eq!(hit_connection(&model, &m, DVec2::new(150.0, 100.0), &config), None);
}

#[test]
fn equal_distances_keep_the_earliest_connection() {
    let model = model_with(
        &[("A", 100.0, 100.0), ("B", 300.0, 100.0)],
        vec![
            NetworkConnection::new("A", Side::Right, "B", Side::Left),
            NetworkConnection::new("A", Side::Right, "B", Side::Left),
        ],
    );
    let hit = hit_connection(
        &model,
        &metrics(),
        DVec2::new(200.0, 102.0),
        &HitTestConfig::default(),
    );
    assert_eq!(hit, Some(0));
}

#[test]
fn strictly_closer_later_connection_wins() {
    let model = model_with(
        &[
            ("A", 100.0, 100.0),
            ("B", 300.0, 100.0),
            ("C", 100.0, 108.0),
            ("D", 300.0, 108.0),
        ],
        vec![
            NetworkConnection::new("A", Side::Right, "B", Side::Left),
            NetworkConnection::new("C", Side::Right, "D", Side::Left),
        ],
    );
    let m = metrics();
    let config = HitTestConfig::default();
    assert_eq!(hit_connection(&model, &m, DVec2::new(200.0, 105.0), &config), Some(1));
    assert_eq!(hit_connection(&model, &m, DVec2::new(200.0, 103.0), &config), Some(0));
}

#[test]
fn side_inference_lets_vertical_offsets_win() {
    let c = DVec2::new(0.0, 0.0);
    assert_eq!(infer_side(c, DVec2::new(10.0, 0.0)), Side::Right);
    assert_eq!(infer_side(c, DVec2::new(-10.0, 0.0)), Side::Left);
    assert_eq!(infer_side(c, DVec2::new(10.0, 5.0)), Side::Bottom);
    assert_eq!(infer_side(c, DVec2::new(-10.0, -5.0)), Side::Top);
}

#[test]
fn snap_anchor_finds_side_within_box() {
    let model = a_to_b();
    let m = metrics();
    let anchor = snap_anchor(&model, &m, DVec2::new(115.0, 103.0), 8.0).expect("Anker erwartet");
    assert_eq!(anchor.node_name, "A");
    assert_eq!(anchor.side, Side::Right);
    assert_eq!(anchor.point, DVec2::new(109.0, 100.0));
    assert!(snap_anchor(&model, &m, DVec2::new(200.0, 100.0), 8.0).is_none());
}
