use glam::{DAffine2, DVec2};
use network_editor::app::AppCommand;
use network_editor::{
    AppController, AppIntent, AppState, EditorMode, GeometryDescriptor, NetworkConnection,
    NetworkModel, NetworkNode, Side,
};

fn make_test_state() -> AppState {
    let model = NetworkModel::from_parts(
        vec![
            NetworkNode::new("A", DVec2::new(100.0, 100.0)),
            NetworkNode::new("B", DVec2::new(300.0, 100.0)),
        ],
        Vec::new(),
    )
    .expect("gültiges Modell");
    let mut state = AppState::new();
    state.install_model(model);
    state.view.viewport_size = [800.0, 600.0];
    state
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn set_mode(controller: &mut AppController, state: &mut AppState, mode: EditorMode) {
    send(controller, state, AppIntent::SetModeRequested { mode });
}

fn click(controller: &mut AppController, state: &mut AppState, x: f64, y: f64, count: u32) {
    send(
        controller,
        state,
        AppIntent::PointerClicked {
            screen_pos: DVec2::new(x, y),
            click_count: count,
        },
    );
}

fn drag(controller: &mut AppController, state: &mut AppState, from: DVec2, to: DVec2) {
    send(controller, state, AppIntent::PointerPressed { screen_pos: from });
    send(controller, state, AppIntent::PointerDragged { screen_pos: to });
    send(controller, state, AppIntent::PointerReleased { screen_pos: to });
}

#[test]
fn test_create_node_selects_it_and_typing_renames_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    set_mode(&mut controller, &mut state, EditorMode::CreateNode);
    click(&mut controller, &mut state, 50.0, 60.0, 1);

    assert_eq!(state.node_count(), 1);
    assert_eq!(state.model.nodes()[0].name, "New node");
    assert_eq!(state.model.nodes()[0].position, DVec2::new(50.0, 60.0));
    assert_eq!(
        state.selection.descriptor,
        GeometryDescriptor::Node {
            index: 0,
            caret: Some(8)
        }
    );

    send(&mut controller, &mut state, AppIntent::CharTyped { ch: '!' });
    assert_eq!(state.model.nodes()[0].name, "New node!");
    assert_eq!(state.selection.caret(), Some(9));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.model.nodes()[0].name, "New node");
    assert!(state.selection.is_empty());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.node_count(), 0);
    assert!(!state.can_undo());
    assert!(state.can_redo());
}

#[test]
fn test_create_node_clamps_position_and_uses_unique_names() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, EditorMode::CreateNode);

    click(&mut controller, &mut state, -10.0, 20.0, 1);
    click(&mut controller, &mut state, 200.0, 200.0, 1);
    // Doppelklick erzeugt keinen weiteren Node
    click(&mut controller, &mut state, 400.0, 400.0, 2);

    let names: Vec<&str> = state.model.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["New node", "New node 2"]);
    assert_eq!(state.model.nodes()[0].position, DVec2::new(0.0, 20.0));
}

#[test]
fn test_node_drag_records_single_move_and_undo_restores_it() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    drag(
        &mut controller,
        &mut state,
        DVec2::new(102.0, 101.0),
        DVec2::new(152.0, 131.0),
    );

    assert_eq!(state.model.nodes()[0].position, DVec2::new(150.0, 130.0));
    assert_eq!(state.history.undo_len(), 1);
    assert_eq!(state.selection.selected_node(), Some(0));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.model.nodes()[0].position, DVec2::new(100.0, 100.0));

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.model.nodes()[0].position, DVec2::new(150.0, 130.0));
}

#[test]
fn test_click_without_movement_records_nothing() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let p = DVec2::new(100.0, 100.0);

    send(&mut controller, &mut state, AppIntent::PointerPressed { screen_pos: p });
    send(&mut controller, &mut state, AppIntent::PointerReleased { screen_pos: p });

    assert_eq!(state.selection.selected_node(), Some(0));
    assert!(!state.can_undo());
}

#[test]
fn test_drag_is_clamped_and_focus_loss_restores_start() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(100.0, 100.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            screen_pos: DVec2::new(-50.0, 40.0),
        },
    );
    assert_eq!(state.model.nodes()[0].position, DVec2::new(0.0, 40.0));

    send(&mut controller, &mut state, AppIntent::FocusLost);

    assert_eq!(state.model.nodes()[0].position, DVec2::new(100.0, 100.0));
    assert!(state.editor.node_drag.is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_select_empty_area_clears_selection() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    state.selection.select_node(1, None);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(700.0, 500.0),
        },
    );

    assert!(state.selection.is_empty());
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::SelectAt { .. })
    ));
}

#[test]
fn test_connection_gesture_between_anchors_creates_connection() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::CreateConnection);

    // A rechts liegt bei (109, 100), B links bei (291, 100)
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(110.0, 101.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            screen_pos: DVec2::new(200.0, 150.0),
        },
    );
    let scene = controller.build_render_scene(&state);
    let preview = scene.preview_curve.expect("Vorschaukurve während des Drags");
    assert_eq!(preview.p1, DVec2::new(109.0, 100.0));
    assert_eq!(preview.p2, DVec2::new(200.0, 150.0));
    assert!(scene.snap_prompt.is_none());

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: DVec2::new(290.0, 99.0),
        },
    );

    assert_eq!(
        state.model.connections(),
        &[NetworkConnection::new("A", Side::Right, "B", Side::Left)]
    );
    assert!(state.editor.connection_draft.is_none());
    assert_eq!(controller.build_render_scene(&state).connections.len(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.connection_count(), 0);
}

#[test]
fn test_connection_released_off_anchor_or_on_start_anchor_is_discarded() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::CreateConnection);

    drag(
        &mut controller,
        &mut state,
        DVec2::new(109.0, 100.0),
        DVec2::new(200.0, 300.0),
    );
    drag(
        &mut controller,
        &mut state,
        DVec2::new(109.0, 100.0),
        DVec2::new(111.0, 102.0),
    );

    assert_eq!(state.connection_count(), 0);
    assert!(!state.can_undo());
}

#[test]
fn test_hover_near_anchor_shows_snap_prompt() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::CreateConnection);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(295.0, 104.0),
        },
    );

    let prompt = controller
        .build_render_scene(&state)
        .snap_prompt
        .expect("Snap-Anzeige am Anker");
    assert_eq!(prompt.upper_left, DVec2::new(283.0, 92.0));
    assert_eq!(prompt.size, 16.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(200.0, 300.0),
        },
    );
    assert!(controller.build_render_scene(&state).snap_prompt.is_none());
}

#[test]
fn test_transform_gesture_scales_view_and_maps_pointer_through_inverse() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::Transform);

    click(&mut controller, &mut state, 0.0, 0.0, 1);
    drag(
        &mut controller,
        &mut state,
        DVec2::new(100.0, 0.0),
        DVec2::new(200.0, 0.0),
    );

    assert_eq!(state.model.transformations().len(), 1);
    let p = state
        .effective_transform()
        .transform_point2(DVec2::new(100.0, 100.0));
    approx::assert_abs_diff_eq!(p.x, 200.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(p.y, 200.0, epsilon = 1e-9);
    assert!(state.model.has_unsaved_changes());

    // Screen (200, 200) liegt nach der Skalierung auf Node A
    set_mode(&mut controller, &mut state, EditorMode::Select);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(200.0, 200.0),
        },
    );
    assert_eq!(state.selection.selected_node(), Some(0));
}

#[test]
fn test_transform_preview_is_applied_before_commit() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::Transform);
    click(&mut controller, &mut state, 0.0, 0.0, 1);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(100.0, 0.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            screen_pos: DVec2::new(300.0, 0.0),
        },
    );

    let scene = controller.build_render_scene(&state);
    approx::assert_abs_diff_eq!(scene.transform.matrix2.x_axis.x, 3.0, epsilon = 1e-9);
    assert!(state.model.transformations().is_empty());

    // Abbruch verwirft die Vorschau
    send(&mut controller, &mut state, AppIntent::FocusLost);
    assert_eq!(state.effective_transform(), DAffine2::IDENTITY);
    assert!(!state.can_undo());
}

#[test]
fn test_double_click_clears_transformations_and_undo_restores_them() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    let t1 = DAffine2::from_angle(0.5);
    let t2 = DAffine2::from_translation(DVec2::new(10.0, 0.0));
    state.model.add_transformation(t1);
    state.model.add_transformation(t2);
    set_mode(&mut controller, &mut state, EditorMode::Transform);
    click(&mut controller, &mut state, 40.0, 40.0, 1);

    click(&mut controller, &mut state, 40.0, 40.0, 2);

    assert!(state.model.transformations().is_empty());
    assert_eq!(state.editor.gesture.pivot(), None);
    assert_eq!(
        controller.build_render_scene(&state).pivot_marker,
        Some(DVec2::new(400.0, 300.0))
    );

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.model.transformations(), &[t1, t2]);
}

#[test]
fn test_pivot_fallback_follows_resized_viewport() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::Transform);

    // Drag ohne gesetzten Pivot um die Mitte (400, 300)
    drag(
        &mut controller,
        &mut state,
        DVec2::new(500.0, 300.0),
        DVec2::new(600.0, 300.0),
    );
    assert_eq!(state.model.transformations().len(), 1);
    assert_eq!(state.editor.gesture.pivot(), None);

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [1000.0, 800.0],
        },
    );
    let new_center = DVec2::new(500.0, 400.0);
    assert_eq!(
        controller.build_render_scene(&state).pivot_marker,
        Some(new_center)
    );

    // der nächste Drag dreht um die neue Mitte
    let before = state.effective_transform();
    drag(
        &mut controller,
        &mut state,
        DVec2::new(600.0, 400.0),
        DVec2::new(700.0, 400.0),
    );
    assert_eq!(state.model.transformations().len(), 2);
    let latest = state.model.transformations()[1];
    let fixed = latest.transform_point2(new_center);
    approx::assert_abs_diff_eq!(fixed.x, new_center.x, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(fixed.y, new_center.y, epsilon = 1e-9);
    assert_ne!(state.effective_transform(), before);
}

#[test]
fn test_double_click_on_empty_stack_records_nothing() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::Transform);

    click(&mut controller, &mut state, 40.0, 40.0, 2);

    assert!(!state.can_undo());
}

#[test]
fn test_singular_view_cancels_pointer_input() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    state
        .model
        .add_transformation(DAffine2::from_scale(DVec2::new(0.0, 1.0)));
    state.selection.select_node(0, None);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(100.0, 100.0),
        },
    );

    assert_eq!(state.command_log.last(), Some(&AppCommand::CancelGesture));
    assert_eq!(state.selection.selected_node(), Some(0));
    assert!(state.editor.node_drag.is_none());
}

#[test]
fn test_delete_node_cascades_and_undo_restores_connections() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    state
        .model
        .add_connection(NetworkConnection::new("A", Side::Right, "B", Side::Left));
    state
        .model
        .add_connection(NetworkConnection::new("B", Side::Top, "B", Side::Bottom));

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(100.0, 100.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::DeleteSelectionRequested);

    assert_eq!(state.node_count(), 1);
    assert_eq!(state.connection_count(), 1);
    assert!(state.selection.is_empty());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.node_count(), 2);
    assert_eq!(state.model.nodes()[0].name, "A");
    assert_eq!(
        state.model.connections()[0],
        NetworkConnection::new("A", Side::Right, "B", Side::Left)
    );
}

#[test]
fn test_delete_selected_connection() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    state
        .model
        .add_connection(NetworkConnection::new("A", Side::Right, "B", Side::Left));

    // Mitte der geraden Verbindung zwischen A rechts und B links
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(200.0, 101.0),
        },
    );
    assert_eq!(state.selection.selected_connection(), Some(0));
    assert!(
        controller.build_render_scene(&state).connections[0].highlighted,
        "selektierte Verbindung wird hervorgehoben"
    );

    send(&mut controller, &mut state, AppIntent::DeleteSelectionRequested);
    assert_eq!(state.connection_count(), 0);
    assert_eq!(state.node_count(), 2);
}

#[test]
fn test_rename_to_existing_name_is_rejected() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    state.install_model(
        NetworkModel::from_parts(
            vec![
                NetworkNode::new("A", DVec2::new(100.0, 100.0)),
                NetworkNode::new("AB", DVec2::new(300.0, 100.0)),
            ],
            Vec::new(),
        )
        .expect("gültiges Modell"),
    );

    // Klick rechts ins Label von "AB" setzt den Caret ans Ende
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(307.0, 104.0),
        },
    );
    assert_eq!(state.selection.caret(), Some(2));

    send(&mut controller, &mut state, AppIntent::BackspacePressed);

    assert_eq!(state.model.nodes()[1].name, "AB");
    assert_eq!(state.selection.caret(), Some(2));
    assert!(!state.can_undo());
}

#[test]
fn test_rename_rewrites_connection_endpoints() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    state
        .model
        .add_connection(NetworkConnection::new("A", Side::Right, "B", Side::Left));
    state.selection.select_node(0, Some(1));

    send(&mut controller, &mut state, AppIntent::CaretLeftPressed);
    send(&mut controller, &mut state, AppIntent::CharTyped { ch: 'X' });

    assert_eq!(state.model.nodes()[0].name, "XA");
    assert_eq!(state.model.connections()[0].node1, "XA");
    assert_eq!(state.selection.caret(), Some(1));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.model.connections()[0].node1, "A");
}

#[test]
fn test_undo_during_drag_restores_and_cancels() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    drag(
        &mut controller,
        &mut state,
        DVec2::new(300.0, 100.0),
        DVec2::new(320.0, 100.0),
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(100.0, 100.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            screen_pos: DVec2::new(150.0, 150.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.editor.node_drag.is_none());
    assert_eq!(state.model.nodes()[0].position, DVec2::new(100.0, 100.0));
    assert_eq!(state.model.nodes()[1].position, DVec2::new(300.0, 100.0));
    assert!(state.selection.is_empty());
}

#[test]
fn test_mode_switch_cancels_connection_draft() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    set_mode(&mut controller, &mut state, EditorMode::CreateConnection);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: DVec2::new(109.0, 100.0),
        },
    );
    assert!(state.editor.connection_draft.is_some());

    set_mode(&mut controller, &mut state, EditorMode::Select);

    assert!(state.editor.connection_draft.is_none());
    assert!(controller.build_render_scene(&state).preview_curve.is_none());
}

#[test]
fn test_repaint_is_requested_after_model_change() {
    let mut controller = AppController::new();
    let mut state = make_test_state();
    state.take_repaint_request();

    set_mode(&mut controller, &mut state, EditorMode::CreateNode);
    state.take_repaint_request();
    click(&mut controller, &mut state, 10.0, 10.0, 1);

    assert!(state.take_repaint_request());
    assert!(!state.take_repaint_request());
}

#[test]
fn test_every_command_is_logged() {
    let mut controller = AppController::new();
    let mut state = make_test_state();

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [1024.0, 768.0],
        },
    );

    let commands: Vec<&AppCommand> = state.command_log.entries().map(|e| &e.command).collect();
    assert_eq!(
        commands,
        [
            &AppCommand::Undo,
            &AppCommand::SetViewportSize {
                size: [1024.0, 768.0]
            }
        ]
    );
    assert_eq!(state.view.viewport_size, [1024.0, 768.0]);
}
