use survivor_core::{Color, DebugDraw, Vec2, WorldInfo};
use survivor_nav::{CellShade, SpatialMemory};

fn three_by_three() -> SpatialMemory {
    SpatialMemory::new(3, 3, WorldInfo::new(Vec2::ZERO, Vec2::new(30.0, 30.0)))
}

#[test]
fn first_update_enqueues_current_cell_then_neighbors() {
    let mut memory = three_by_three();
    memory.update(0.016, Vec2::ZERO);

    // Center cell first, then N, E, S, W.
    assert_eq!(memory.queue().iter().copied().collect::<Vec<_>>(), vec![4, 7, 5, 3, 1]);
    assert_eq!(memory.next_free_cell_position(), Some(Vec2::ZERO));
    assert!(!memory.cells()[4].visited);
    assert!(!memory.cells()[4].should_check_neighbors);
}

#[test]
fn corner_start_only_enqueues_in_grid_neighbors() {
    let mut memory = three_by_three();
    memory.update(0.016, Vec2::new(-10.0, -10.0));

    assert_eq!(memory.queue().iter().copied().collect::<Vec<_>>(), vec![0, 3, 1]);
}

#[test]
fn front_cell_is_visited_once_agent_reaches_its_center() {
    let mut memory = three_by_three();
    memory.update(0.016, Vec2::ZERO);
    memory.update(0.016, Vec2::new(1.0, 1.0));

    assert!(memory.cells()[4].visited);
    assert_eq!(memory.queue().iter().copied().collect::<Vec<_>>(), vec![7, 5, 3, 1]);
    assert_eq!(memory.next_free_cell_position(), Some(Vec2::new(0.0, 10.0)));

    // Steady state: standing in a visited, expanded cell changes nothing.
    memory.update(0.016, Vec2::ZERO);
    assert_eq!(memory.queue().len(), 4);
}

#[test]
fn near_but_outside_visit_radius_does_not_pop() {
    let mut memory = three_by_three();
    memory.update(0.016, Vec2::ZERO);
    memory.update(0.016, Vec2::new(3.0, 0.0));

    assert!(!memory.cells()[4].visited);
    assert_eq!(memory.queue().front(), Some(&4));
}

#[test]
fn cells_other_than_the_front_are_not_expanded() {
    let mut memory = three_by_three();
    memory.update(0.016, Vec2::ZERO);
    memory.update(0.016, Vec2::ZERO);

    // Corner cell 8 is not the front: nothing is enqueued for it.
    memory.update(0.016, Vec2::new(10.0, 10.0));
    assert!(!memory.cells()[8].marked_to_visit);
    assert_eq!(memory.queue().len(), 4);
}

#[test]
fn walking_the_frontier_visits_every_cell_once() {
    let mut memory = three_by_three();
    let mut steps = 0;
    memory.update(0.016, Vec2::ZERO);
    while let Some(target) = memory.next_free_cell_position() {
        memory.update(0.016, target);
        steps += 1;
        assert!(steps < 100, "exploration did not terminate");
    }

    assert!(memory.cells().iter().all(|cell| cell.visited));
}

#[test]
fn add_house_is_idempotent_per_cell() {
    let mut memory = three_by_three();
    assert!(memory.add_house(Vec2::new(9.0, 9.0)));
    assert!(!memory.add_house(Vec2::new(11.0, 11.0)));
    assert_eq!(memory.houses().len(), 1);
    assert_eq!(memory.houses()[0].cell, 8);
    assert!(memory.cells()[8].is_house);
    assert_eq!(memory.cell_shade(8), CellShade::House);
}

#[test]
fn closest_house_queries_respect_availability() {
    let mut memory = three_by_three();
    assert!(memory.closest_house(Vec2::ZERO).is_none());
    assert!(!memory.any_known_houses());

    memory.add_house(Vec2::new(-10.0, 0.0));
    memory.add_house(Vec2::new(10.0, 10.0));
    assert!(memory.any_available_houses());

    let near = memory.closest_available_house(Vec2::new(-8.0, 0.0)).map(|h| h.cell);
    assert_eq!(near, Some(3));

    assert!(memory.occupy_house(3));
    let near = memory.closest_available_house(Vec2::new(-8.0, 0.0)).map(|h| h.cell);
    assert_eq!(near, Some(8));
    assert_eq!(memory.closest_house(Vec2::new(-8.0, 0.0)).map(|h| h.cell), Some(3));

    assert!(memory.occupy_house(8));
    assert!(memory.closest_available_house(Vec2::ZERO).is_none());
    assert!(memory.any_known_houses());
    assert!(!memory.any_available_houses());
}

#[test]
fn equidistant_houses_resolve_to_earliest_registered() {
    let mut memory = three_by_three();
    memory.add_house(Vec2::new(10.0, 0.0));
    memory.add_house(Vec2::new(-10.0, 0.0));
    assert_eq!(memory.closest_house(Vec2::ZERO).map(|h| h.cell), Some(5));
    assert_eq!(memory.closest_available_house(Vec2::ZERO).map(|h| h.cell), Some(5));
}

#[test]
fn occupied_house_returns_after_cooldown() {
    let mut memory = three_by_three().with_house_cooldown(10.0);
    memory.add_house(Vec2::new(10.0, 10.0));
    memory.occupy_house(8);

    memory.update(6.0, Vec2::ZERO);
    assert!(!memory.any_available_houses());
    memory.update(6.0, Vec2::ZERO);
    assert!(memory.any_available_houses());
    assert!(!memory.occupy_house(0));
}

#[test]
fn agent_in_house_uses_entry_radius() {
    let mut memory = three_by_three();
    memory.add_house(Vec2::new(10.0, 10.0));
    let house = memory.houses()[0];
    assert!(memory.is_agent_in_house(Vec2::new(12.0, 12.0), &house));
    assert!(!memory.is_agent_in_house(Vec2::new(15.0, 10.0), &house));

    let wide = three_by_three().with_radii(3.0, 6.0);
    assert!(wide.is_agent_in_house(Vec2::new(15.0, 10.0), &house));
}

#[derive(Default)]
struct Recorder {
    polygons: Vec<Color>,
}

impl DebugDraw for Recorder {
    fn draw_polygon(&mut self, points: &[Vec2], color: Color) {
        assert_eq!(points.len(), 4);
        self.polygons.push(color);
    }

    fn draw_solid_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
}

#[test]
fn render_shades_every_cell() {
    let mut memory = three_by_three();
    memory.update(0.016, Vec2::ZERO);
    memory.update(0.016, Vec2::ZERO);
    memory.add_house(Vec2::new(-10.0, -10.0));

    let mut recorder = Recorder::default();
    memory.render(&mut recorder);

    assert_eq!(recorder.polygons.len(), 9);
    assert_eq!(recorder.polygons[0], Color::GREEN);
    assert_eq!(recorder.polygons[4], Color::GRAY);
    assert_eq!(recorder.polygons[7], Color::CYAN);
    assert_eq!(recorder.polygons[5], Color::BLUE);
    assert_eq!(recorder.polygons[8], Color::RED);
}
