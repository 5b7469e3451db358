//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::EditorMode;
use crate::app::AppState;
use crate::geometry::{connection_curve_for, label_box, node_bounds, preview_curve};
use crate::shared::{ConnectionShape, NodeShape, RenderScene, SnapPrompt};
use glam::DVec2;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let metrics = state.text_metrics();
    let config = state.hit_test_config();
    let selected_node = state.selection.selected_node();
    let selected_connection = state.selection.selected_connection();

    let nodes = state
        .model
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let bounds = node_bounds(node, metrics);
            let highlighted = selected_node == Some(index);
            NodeShape {
                name: node.name.clone(),
                center: node.position,
                size: DVec2::new(bounds.width, bounds.height),
                label: label_box(node, metrics),
                highlighted,
                caret: if highlighted {
                    state.selection.caret()
                } else {
                    None
                },
            }
        })
        .collect();

    // Verbindungen mit nicht auflösbarem Endpunkt werden übersprungen
    let connections = state
        .model
        .connections()
        .iter()
        .enumerate()
        .filter_map(|(index, connection)| {
            connection_curve_for(&state.model, metrics, connection, &config).map(|curve| {
                ConnectionShape {
                    index,
                    curve,
                    highlighted: selected_connection == Some(index),
                }
            })
        })
        .collect();

    let preview_curve = state.editor.connection_draft.as_ref().map(|draft| {
        preview_curve(
            draft.start.point,
            draft.start.side,
            draft.pointer,
            config.max_control_offset,
        )
    });

    let half = state.options.snap_half_size;
    let snap_prompt = state.editor.snap_anchor.map(|anchor| SnapPrompt {
        upper_left: anchor - DVec2::splat(half),
        size: 2.0 * half,
    });

    let pivot_marker = (state.editor.mode == EditorMode::Transform)
        .then(|| state.editor.gesture.pivot_or(state.view.view_center()));

    RenderScene {
        nodes,
        connections,
        transform: state.effective_transform(),
        preview_curve,
        snap_prompt,
        pivot_marker,
        viewport_size: state.view.viewport_size,
        has_unsaved_changes: state.model.has_unsaved_changes(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::{ConnectionDraft, EditorMode};
    use crate::app::AppState;
    use crate::core::{NetworkConnection, NetworkModel, NetworkNode, Side};
    use crate::geometry::Anchor;
    use glam::{DAffine2, DVec2};

    fn state_with_network() -> AppState {
        let mut state = AppState::new();
        let model = NetworkModel::from_parts(
            vec![
                NetworkNode::new("A", DVec2::new(100.0, 100.0)),
                NetworkNode::new("B", DVec2::new(300.0, 100.0)),
            ],
            vec![
                NetworkConnection::new("A", Side::Right, "B", Side::Left),
                NetworkConnection::new("A", Side::Top, "Ghost", Side::Top),
            ],
        )
        .expect("gültig");
        state.install_model(model);
        state
    }

    #[test]
    fn dangling_connections_are_skipped() {
        let state = state_with_network();
        let scene = build(&state);

        assert_eq!(scene.nodes.len(), 2);
        assert_eq!(scene.connections.len(), 1);
        assert_eq!(scene.connections[0].index, 0);
        assert!(!scene.has_unsaved_changes);
    }

    #[test]
    fn node_shape_uses_label_metrics() {
        let state = state_with_network();
        let scene = build(&state);
        let a = &scene.nodes[0];

        // "A": Label 8 breit + Rand 10; Höhe 1,5 Zeilen
        assert_eq!(a.size, DVec2::new(18.0, 27.0));
        assert_eq!(a.center, DVec2::new(100.0, 100.0));
        assert_eq!(a.label.left, 96.0);
    }

    #[test]
    fn caret_and_highlight_only_on_selected_node() {
        let mut state = state_with_network();
        state.selection.select_node(1, Some(1));
        let scene = build(&state);

        assert!(!scene.nodes[0].highlighted);
        assert_eq!(scene.nodes[0].caret, None);
        assert!(scene.nodes[1].highlighted);
        assert_eq!(scene.nodes[1].caret, Some(1));
        assert!(!scene.connections[0].highlighted);
    }

    #[test]
    fn draft_produces_preview_and_snap_prompt() {
        let mut state = state_with_network();
        let start = DVec2::new(109.0, 100.0);
        state.editor.connection_draft = Some(ConnectionDraft {
            start: Anchor {
                node_index: 0,
                node_name: "A".into(),
                side: Side::Right,
                point: start,
            },
            pointer: DVec2::new(200.0, 150.0),
        });
        state.editor.snap_anchor = Some(start);

        let scene = build(&state);

        let preview = scene.preview_curve.expect("Vorschau vorhanden");
        assert_eq!(preview.p1, start);
        assert_eq!(preview.p2, DVec2::new(200.0, 150.0));
        assert_eq!(preview.c1, preview.c2);
        let prompt = scene.snap_prompt.expect("Snap-Anzeige vorhanden");
        assert_eq!(prompt.upper_left, DVec2::new(101.0, 92.0));
        assert_eq!(prompt.size, 16.0);
    }

    #[test]
    fn pivot_marker_only_in_transform_mode() {
        let mut state = state_with_network();
        state.view.viewport_size = [800.0, 600.0];
        assert_eq!(build(&state).pivot_marker, None);

        state.editor.mode = EditorMode::Transform;
        assert_eq!(build(&state).pivot_marker, Some(DVec2::new(400.0, 300.0)));

        state.editor.gesture.set_pivot(DVec2::new(10.0, 20.0));
        assert_eq!(build(&state).pivot_marker, Some(DVec2::new(10.0, 20.0)));
    }

    #[test]
    fn scene_transform_is_the_composed_stack() {
        let mut state = state_with_network();
        let t = DAffine2::from_translation(DVec2::new(5.0, -5.0));
        state.model.add_transformation(t);

        let scene = build(&state);

        assert_eq!(scene.transform, t);
        assert!(scene.has_unsaved_changes);
    }
}
