//! Geometrie-Kern: reine Funktionen für Hit-Tests und Verbindungskurven.

pub mod bezier;
pub mod primitives;

pub use bezier::{
    connection_curve, control_point, preview_curve, BezierCoefficients, CubicBezier, BEZIER_BASIS,
};
pub use hit_test::{
    anchors, caret_index, connection_curve_for, connection_point, hit_connection, hit_node,
    infer_side, label_box, node_bounds, point_geometry, snap_anchor, Anchor, GeometryDescriptor,
    HitTestConfig, LabelBox, NodeBounds,
};
pub use primitives::{
    in_bounding_box, inside_ellipse, line_point, nearest_point_by_refinement,
    nearest_point_on_segment, project_onto_segment, NearestPoint, MAX_REFINEMENT_LEVELS,
    SEARCH_SAMPLES,
};
