use std::collections::VecDeque;

use survivor_core::{Color, DebugDraw, Vec2, WorldInfo};
use tracing::debug;

use crate::house::{House, DEFAULT_HOUSE_COOLDOWN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_VISIT_RADIUS: f32 = 3.0;
pub const DEFAULT_HOUSE_ENTRY_RADIUS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    pub center: Vec2,
    pub marked_to_visit: bool,
    pub visited: bool,
    pub should_check_neighbors: bool,
    pub is_house: bool,
}

impl Cell {
    fn new(col: usize, row: usize, center: Vec2) -> Self {
        Self {
            col,
            row,
            center,
            marked_to_visit: false,
            visited: false,
            should_check_neighbors: true,
            is_house: false,
        }
    }
}

/// Axis-aligned neighbor directions, in expansion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    North,
    East,
    South,
    West,
}

impl Neighbor {
    pub const ALL: [Neighbor; 4] = [
        Neighbor::North,
        Neighbor::East,
        Neighbor::South,
        Neighbor::West,
    ];
}

/// Debug classification of a cell, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellShade {
    House,
    NextFrontier,
    Visited,
    Queued,
    Unknown,
}

impl CellShade {
    pub fn color(self) -> Color {
        match self {
            CellShade::House => Color::GREEN,
            CellShade::NextFrontier => Color::CYAN,
            CellShade::Visited => Color::GRAY,
            CellShade::Queued => Color::BLUE,
            CellShade::Unknown => Color::RED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpatialMemory {
    cols: usize,
    rows: usize,
    world: WorldInfo,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<Cell>,
    queue: VecDeque<usize>,
    houses: Vec<House>,
    current_cell: Option<usize>,
    visit_radius: f32,
    house_entry_radius: f32,
    house_cooldown: f32,
}

impl SpatialMemory {
    /// Build a `cols x rows` grid covering `world`. Cells are stored row-major starting at the
    /// bottom-left corner.
    pub fn new(cols: usize, rows: usize, world: WorldInfo) -> Self {
        assert!(cols > 0 && rows > 0, "grid must be non-empty");

        let cell_width = world.dimensions.x / cols as f32;
        let cell_height = world.dimensions.y / rows as f32;
        let origin = world.bottom_left();

        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let center = Vec2::new(
                    origin.x + (col as f32 + 0.5) * cell_width,
                    origin.y + (row as f32 + 0.5) * cell_height,
                );
                cells.push(Cell::new(col, row, center));
            }
        }

        Self {
            cols,
            rows,
            world,
            cell_width,
            cell_height,
            cells,
            queue: VecDeque::new(),
            houses: Vec::new(),
            current_cell: None,
            visit_radius: DEFAULT_VISIT_RADIUS,
            house_entry_radius: DEFAULT_HOUSE_ENTRY_RADIUS,
            house_cooldown: DEFAULT_HOUSE_COOLDOWN,
        }
    }

    pub fn with_radii(mut self, visit_radius: f32, house_entry_radius: f32) -> Self {
        self.visit_radius = visit_radius;
        self.house_entry_radius = house_entry_radius;
        self
    }

    /// Cooldown given to houses registered from now on.
    pub fn with_house_cooldown(mut self, cooldown: f32) -> Self {
        self.house_cooldown = cooldown;
        self
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn world(&self) -> WorldInfo {
        self.world
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn queue(&self) -> &VecDeque<usize> {
        &self.queue
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn house_entry_radius(&self) -> f32 {
        self.house_entry_radius
    }

    /// Cell the agent was in at the last [`update`](Self::update).
    pub fn current_cell(&self) -> Option<usize> {
        self.current_cell
    }

    /// Index of the cell containing `position`. Positions outside the world map to the nearest
    /// edge cell.
    pub fn cell_index(&self, position: Vec2) -> usize {
        let local = position - self.world.bottom_left();
        let col = clamp_axis(local.x / self.cell_width, self.cols);
        let row = clamp_axis(local.y / self.cell_height, self.rows);
        row * self.cols + col
    }

    pub fn house_cell_index(&self, location: Vec2) -> usize {
        self.cell_index(location)
    }

    /// Neighbor of `index` in `direction`, or `None` past the grid edge.
    pub fn neighbor(&self, index: usize, direction: Neighbor) -> Option<usize> {
        let cell = self.cells.get(index)?;
        let (col, row) = (cell.col, cell.row);
        let (col, row) = match direction {
            Neighbor::North => (col, row.checked_add(1).filter(|r| *r < self.rows)?),
            Neighbor::East => (col.checked_add(1).filter(|c| *c < self.cols)?, row),
            Neighbor::South => (col, row.checked_sub(1)?),
            Neighbor::West => (col.checked_sub(1)?, row),
        };
        Some(row * self.cols + col)
    }

    pub fn update(&mut self, dt: f32, agent_position: Vec2) {
        for house in &mut self.houses {
            if house.update(dt) {
                debug!(cell = house.cell, "house available again");
            }
        }

        let current = self.cell_index(agent_position);
        self.current_cell = Some(current);
        self.maintain_queue(current, agent_position);
    }

    fn maintain_queue(&mut self, current: usize, agent_position: Vec2) {
        let cell = &self.cells[current];
        if !cell.should_check_neighbors && cell.marked_to_visit && cell.visited {
            return;
        }

        if let Some(&front) = self.queue.front() {
            if front != current {
                return;
            }
            let radius_sq = self.visit_radius * self.visit_radius;
            if agent_position.distance_squared(self.cells[front].center) < radius_sq {
                self.queue.pop_front();
                self.cells[front].visited = true;
                debug!(cell = front, remaining = self.queue.len(), "frontier cell visited");
            }
        }

        if !self.cells[current].marked_to_visit {
            self.enqueue(current);
        }

        for direction in Neighbor::ALL {
            if let Some(next) = self.neighbor(current, direction) {
                if !self.cells[next].marked_to_visit {
                    self.enqueue(next);
                }
            }
        }

        self.cells[current].should_check_neighbors = false;
    }

    fn enqueue(&mut self, index: usize) {
        self.cells[index].marked_to_visit = true;
        self.queue.push_back(index);
    }

    /// Center of the cell at the front of the visitation queue.
    pub fn next_free_cell_position(&self) -> Option<Vec2> {
        self.queue.front().map(|&index| self.cells[index].center)
    }

    /// Register a house at `location`. Returns `false` if its cell already holds one.
    pub fn add_house(&mut self, location: Vec2) -> bool {
        let index = self.house_cell_index(location);
        if self.cells[index].is_house {
            return false;
        }

        self.cells[index].is_house = true;
        self.houses
            .push(House::with_cooldown(location, index, self.house_cooldown));
        debug!(cell = index, x = location.x, y = location.y, "house discovered");
        true
    }

    pub fn house(&self, cell: usize) -> Option<&House> {
        self.houses.iter().find(|house| house.cell == cell)
    }

    /// Start the cooldown of the house anchored at `cell`. Returns `false` for unknown cells.
    pub fn occupy_house(&mut self, cell: usize) -> bool {
        let Some(house) = self.houses.iter_mut().find(|house| house.cell == cell) else {
            return false;
        };
        house.occupy();
        debug!(cell, cooldown = house.cooldown, "house occupied");
        true
    }

    // `min_by` keeps the first of equal elements, so ties go to the earliest-registered house.
    pub fn closest_available_house(&self, point: Vec2) -> Option<&House> {
        self.houses
            .iter()
            .filter(|house| house.available)
            .min_by(|a, b| {
                a.center
                    .distance_squared(point)
                    .total_cmp(&b.center.distance_squared(point))
            })
    }

    pub fn closest_house(&self, point: Vec2) -> Option<&House> {
        self.houses.iter().min_by(|a, b| {
            a.center
                .distance_squared(point)
                .total_cmp(&b.center.distance_squared(point))
        })
    }

    pub fn is_agent_in_house(&self, agent_position: Vec2, house: &House) -> bool {
        agent_position.distance_squared(house.center)
            < self.house_entry_radius * self.house_entry_radius
    }

    pub fn any_known_houses(&self) -> bool {
        !self.houses.is_empty()
    }

    pub fn any_available_houses(&self) -> bool {
        self.houses.iter().any(|house| house.available)
    }

    pub fn cell_shade(&self, index: usize) -> CellShade {
        let cell = &self.cells[index];
        if cell.is_house {
            CellShade::House
        } else if self.queue.front() == Some(&index) {
            CellShade::NextFrontier
        } else if cell.visited {
            CellShade::Visited
        } else if cell.marked_to_visit {
            CellShade::Queued
        } else {
            CellShade::Unknown
        }
    }

    pub fn cell_polygon(&self, index: usize) -> [Vec2; 4] {
        let center = self.cells[index].center;
        let half_w = self.cell_width * 0.5;
        let half_h = self.cell_height * 0.5;
        [
            Vec2::new(center.x - half_w, center.y - half_h),
            Vec2::new(center.x + half_w, center.y - half_h),
            Vec2::new(center.x + half_w, center.y + half_h),
            Vec2::new(center.x - half_w, center.y + half_h),
        ]
    }

    pub fn render(&self, draw: &mut dyn DebugDraw) {
        for index in 0..self.cells.len() {
            draw.draw_polygon(&self.cell_polygon(index), self.cell_shade(index).color());
        }
    }
}

fn clamp_axis(scaled: f32, len: usize) -> usize {
    if scaled.is_nan() || scaled <= 0.0 {
        return 0;
    }
    (scaled.floor() as usize).min(len - 1)
}
