use std::cell::RefCell;
use std::rc::Rc;

use egui::Pos2;
use map_maker::file_handler::group_records;
use map_maker::{DisplayList, Element, Gesture, MapArea, Node, NodeId, PolyShape, Tool};

fn room_area(sides: i32) -> MapArea {
    let mut area = MapArea::default();
    area.set_tool(Tool::Room);
    area.set_option(sides);
    area
}

fn draw_room(area: &mut MapArea, from: Pos2, to: Pos2) {
    area.press(from);
    area.drag(to);
    area.release(to);
}

fn only_shape(area: &MapArea) -> PolyShape {
    let shapes: Vec<_> = area.display_list().shapes().cloned().collect();
    assert_eq!(shapes.len(), 1);
    shapes[0].clone()
}

fn control_point_count(area: &MapArea) -> usize {
    area.display_list()
        .nodes()
        .iter()
        .filter(|n| n.as_control_point().is_some())
        .count()
}

#[test]
fn test_room_click_without_drag_still_gets_control_points() {
    let mut area = room_area(5);
    area.press(Pos2::new(40.0, 40.0));
    area.release(Pos2::new(40.0, 40.0));

    let shape = only_shape(&area);
    assert_eq!(shape.sides(), 5);
    assert!(shape.points().iter().all(|p| *p == Pos2::new(40.0, 40.0)));
    assert_eq!(control_point_count(&area), 5);
    assert_eq!(area.display_list().len(), 6);
}

#[test]
fn test_drag_reshapes_room_around_the_midpoint() {
    let mut area = room_area(4);
    area.press(Pos2::new(100.0, 100.0));
    area.drag(Pos2::new(150.0, 150.0));
    area.drag(Pos2::new(200.0, 200.0));
    area.release(Pos2::new(200.0, 200.0));

    let shape = only_shape(&area);
    let center = shape.center();
    assert!(center.distance(Pos2::new(150.0, 150.0)) < 1e-3);
    assert!(shape.points()[3].distance(Pos2::new(200.0, 200.0)) < 1e-3);
}

#[test]
fn test_erase_removes_only_the_target_room() {
    let mut area = room_area(6);
    draw_room(&mut area, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    draw_room(&mut area, Pos2::new(400.0, 400.0), Pos2::new(500.0, 500.0));
    assert_eq!(area.display_list().len(), 14);

    area.set_tool(Tool::Erase);
    area.press(Pos2::new(150.0, 150.0));
    area.release(Pos2::new(150.0, 150.0));

    let survivor = only_shape(&area);
    assert!(survivor.center().distance(Pos2::new(450.0, 450.0)) < 1e-3);
    assert_eq!(control_point_count(&area), 6);
    for point in area.display_list().nodes().iter().filter_map(Node::as_control_point) {
        assert_eq!(point.owner(), survivor.id());
    }
}

#[test]
fn test_erasing_a_control_point_takes_its_polygon() {
    let mut area = room_area(3);
    draw_room(&mut area, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    let vertex = only_shape(&area).points()[0];

    area.set_tool(Tool::Erase);
    area.press(vertex);
    area.release(vertex);
    assert!(area.display_list().is_empty());
}

#[test]
fn test_erase_on_empty_canvas_does_nothing() {
    let mut area = room_area(3);
    draw_room(&mut area, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));

    area.set_tool(Tool::Erase);
    area.press(Pos2::new(600.0, 20.0));
    assert!(area.release(Pos2::new(600.0, 20.0)).is_empty());
    assert_eq!(area.display_list().len(), 4);
}

#[test]
fn test_move_displacement_is_the_sum_of_drag_steps() {
    let mut area = room_area(4);
    draw_room(&mut area, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    let before = only_shape(&area);

    area.set_tool(Tool::Move);
    area.press(Pos2::new(150.0, 150.0));
    area.drag(Pos2::new(160.0, 150.0));
    area.drag(Pos2::new(170.0, 160.0));
    area.release(Pos2::new(170.0, 160.0));

    let after = only_shape(&area);
    assert!((after.center() - before.center() - egui::vec2(20.0, 10.0)).length() < 1e-3);

    let centers: Vec<Pos2> = area
        .display_list()
        .nodes()
        .iter()
        .filter_map(Node::as_control_point)
        .map(|p| p.center())
        .collect();
    assert_eq!(centers, after.points().to_vec());
}

#[test]
fn test_move_on_background_is_a_no_op() {
    let mut area = room_area(4);
    draw_room(&mut area, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    let before = only_shape(&area);

    area.set_tool(Tool::Move);
    area.press(Pos2::new(500.0, 500.0));
    assert!(area.drag(Pos2::new(520.0, 510.0)).is_empty());
    area.release(Pos2::new(520.0, 510.0));
    assert_eq!(only_shape(&area), before);
}

#[test]
fn test_dragging_a_control_point_moves_its_vertex() {
    let mut area = room_area(6);
    draw_room(&mut area, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    let before = only_shape(&area);
    let corner = before.points()[5];

    area.set_tool(Tool::Move);
    area.press(corner);
    area.drag(corner + egui::vec2(20.0, 30.0));
    area.release(corner + egui::vec2(20.0, 30.0));

    let shape = only_shape(&area);
    assert!(shape.points()[5].distance(corner + egui::vec2(20.0, 30.0)) < 1e-3);
    assert_eq!(shape.points()[..5], before.points()[..5]);
}

#[test]
fn test_selection_reports_touched_rooms_and_disappears() {
    let mut area = room_area(4);
    draw_room(&mut area, Pos2::new(100.0, 100.0), Pos2::new(200.0, 200.0));
    draw_room(&mut area, Pos2::new(600.0, 600.0), Pos2::new(700.0, 700.0));
    let first = area.display_list().shapes().next().unwrap().id();

    let selected: Rc<RefCell<Vec<NodeId>>> = Rc::default();
    let sink = Rc::clone(&selected);
    area.set_select_handler(move |ids| sink.borrow_mut().extend_from_slice(ids));

    area.set_tool(Tool::Select);
    area.press(Pos2::new(0.0, 0.0));
    assert!(matches!(area.gesture(), Gesture::Selecting { .. }));
    area.drag(Pos2::new(300.0, 300.0));
    area.release(Pos2::new(300.0, 300.0));

    assert_eq!(*selected.borrow(), vec![first]);
    assert!(
        area.display_list()
            .nodes()
            .iter()
            .all(|n| !matches!(n, Node::Selection(_)))
    );
}

#[test]
fn test_switching_tools_mid_room_finalizes_it() {
    let mut area = room_area(3);
    area.press(Pos2::new(100.0, 100.0));
    area.drag(Pos2::new(200.0, 200.0));

    area.set_tool(Tool::Move);
    assert_eq!(area.gesture(), &Gesture::Idle);
    assert_eq!(control_point_count(&area), 3);

    // The stray release now belongs to Move and changes nothing
    let before = only_shape(&area);
    area.release(Pos2::new(220.0, 220.0));
    assert_eq!(only_shape(&area), before);
}

#[test]
fn test_switching_tools_mid_selection_removes_the_rectangle() {
    let mut area = MapArea::default();
    area.set_tool(Tool::Select);
    area.press(Pos2::new(10.0, 10.0));
    area.drag(Pos2::new(50.0, 50.0));
    assert_eq!(area.display_list().len(), 1);

    area.set_tool(Tool::Room);
    assert!(area.display_list().is_empty());
}

#[test]
fn test_second_press_settles_the_open_room() {
    let mut area = room_area(4);
    area.press(Pos2::new(100.0, 100.0));
    area.drag(Pos2::new(200.0, 200.0));
    area.press(Pos2::new(300.0, 300.0));
    area.release(Pos2::new(300.0, 300.0));

    assert_eq!(area.display_list().shapes().count(), 2);
    assert_eq!(control_point_count(&area), 8);
}

#[test]
fn test_map_text_round_trips_through_records() {
    let mut area = room_area(3);
    draw_room(&mut area, Pos2::new(10.0, 20.0), Pos2::new(90.0, 70.0));
    area.set_option(6);
    draw_room(&mut area, Pos2::new(300.0, 300.0), Pos2::new(350.0, 420.0));
    let text = area.convert_to_string();
    assert_eq!(text.lines().count(), 10);

    let mut restored = MapArea::default();
    let loaded = restored.convert_from_string(&group_records(text.lines()));
    assert_eq!(loaded, 2);
    assert_eq!(restored.display_list().len(), 2 + 3 + 6);
    assert_eq!(restored.convert_to_string(), text);
}

#[test]
fn test_bad_records_are_skipped_on_load() {
    let records = group_records(
        [
            "sides 2", "points 0 0 10 10", "fill #FFFFFFFF", "stroke #000000FF", "width 2",
            "sides x", "points 0 0 10 10", "fill #FFFFFFFF", "stroke #000000FF", "width 2",
        ]
        .iter()
        .copied(),
    );
    let mut area = MapArea::default();
    assert_eq!(area.convert_from_string(&records), 1);
    assert_eq!(area.display_list().len(), 3);
}

#[test]
fn test_cleared_map_serializes_to_nothing() {
    let mut area = room_area(5);
    draw_room(&mut area, Pos2::new(10.0, 10.0), Pos2::new(80.0, 80.0));
    area.clear_map();
    assert!(area.display_list().is_empty());
    assert_eq!(area.convert_to_string(), "");
}
