use crate::core::geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Fill tag of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Park,
    Commercial,
    Plain,
}

/// One block of the synthesized map, positioned in percent of the container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub kind: CellKind,
    /// Left/top/width/height in percent (0-100)
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadOrientation {
    Horizontal,
    Vertical,
}

/// A road along one grid boundary, spanning the whole container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub orientation: RoadOrientation,
    /// Boundary index in `0..=grid_size`
    pub index: usize,
    /// Offset of the line in percent
    pub position: f64,
    pub main: bool,
}

impl RoadSegment {
    /// Endpoints in percent coordinates
    pub fn endpoints(&self) -> (Point, Point) {
        match self.orientation {
            RoadOrientation::Horizontal => (
                Point::new(0.0, self.position),
                Point::new(100.0, self.position),
            ),
            RoadOrientation::Vertical => (
                Point::new(self.position, 0.0),
                Point::new(self.position, 100.0),
            ),
        }
    }
}

/// Deterministic generator of the decorative block/road layout.
///
/// Classification depends on `grid_size` alone; pan and zoom only move the
/// finished grid as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSynthesizer {
    grid_size: usize,
}

impl GridSynthesizer {
    pub fn new(grid_size: usize) -> Self {
        Self { grid_size }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    fn middle(&self) -> usize {
        self.grid_size / 2
    }

    fn cell_percent(&self) -> f64 {
        100.0 / self.grid_size as f64
    }

    /// The "+" shaped downtown: one row three cells wide, one column five cells tall.
    /// For the 10x10 grid that is row 4 over columns 4-6 and column 5 over rows 3-7.
    pub fn is_commercial(&self, row: usize, col: usize) -> bool {
        let middle = self.middle();
        let cross_row = middle.saturating_sub(1);
        let on_row = row == cross_row && col + 1 >= middle && col <= middle + 1;
        let on_col = col == middle && row + 2 >= middle && row <= middle + 2;
        on_row || on_col
    }

    /// Two fixed parks on the diagonal, `(2,2)` and `(7,7)` for the 10x10 grid
    pub fn is_park(&self, row: usize, col: usize) -> bool {
        let middle = self.middle();
        // Grids below the configured minimum simply lose the park that does not fit
        let near = middle.checked_sub(3);
        let far = Some(middle + 2).filter(|far| *far < self.grid_size);
        [near, far]
            .into_iter()
            .flatten()
            .any(|park| row == park && col == park)
    }

    pub fn classify(&self, row: usize, col: usize) -> CellKind {
        if self.is_park(row, col) {
            CellKind::Park
        } else if self.is_commercial(row, col) {
            CellKind::Commercial
        } else {
            CellKind::Plain
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> GridCell {
        let size = self.cell_percent();
        GridCell {
            row,
            col,
            kind: self.classify(row, col),
            rect: Rect::from_min_size(
                Point::new(col as f64 * size, row as f64 * size),
                Point::new(size, size),
            ),
        }
    }

    /// Row-major iterator over every cell. Restartable: each call starts over.
    pub fn cells(&self) -> Cells {
        Cells {
            synth: *self,
            next: 0,
        }
    }

    /// Horizontal boundaries first, then vertical ones
    pub fn roads(&self) -> Roads {
        Roads {
            synth: *self,
            next: 0,
        }
    }

    fn road(&self, orientation: RoadOrientation, index: usize) -> RoadSegment {
        RoadSegment {
            orientation,
            index,
            position: index as f64 * self.cell_percent(),
            main: index == self.middle(),
        }
    }
}

/// Lazy cell sequence produced by [`GridSynthesizer::cells`]
#[derive(Debug, Clone)]
pub struct Cells {
    synth: GridSynthesizer,
    next: usize,
}

impl Iterator for Cells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        let size = self.synth.grid_size;
        if self.next >= size * size {
            return None;
        }
        let cell = self.synth.cell(self.next / size, self.next % size);
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.synth.grid_size;
        let remaining = (size * size).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

/// Lazy road sequence produced by [`GridSynthesizer::roads`]
#[derive(Debug, Clone)]
pub struct Roads {
    synth: GridSynthesizer,
    next: usize,
}

impl Iterator for Roads {
    type Item = RoadSegment;

    fn next(&mut self) -> Option<RoadSegment> {
        let lines = self.synth.grid_size + 1;
        let road = if self.next < lines {
            self.synth.road(RoadOrientation::Horizontal, self.next)
        } else if self.next < 2 * lines {
            self.synth.road(RoadOrientation::Vertical, self.next - lines)
        } else {
            return None;
        };
        self.next += 1;
        Some(road)
    }
}
