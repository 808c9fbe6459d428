//! Standard maps shared by integration tests.
//!
//! - [`open_field`]: 5x5 grid, cell size 10, no obstacles.
//! - [`corridor`]: 6x4 grid, cell size 10, walls above and below row 2
//!   plus a block at the east end.
//! - [`boxed_in`]: 3x3 grid, cell size 5, every cell but the centre filled.

use crate::TestMapBuilder;

pub fn open_field() -> TestMapBuilder {
    TestMapBuilder::new(5, 5, 10)
}

pub fn corridor() -> TestMapBuilder {
    TestMapBuilder::new(6, 4, 10)
        .cells(0, 0, 6, 1)
        .cells(0, 3, 6, 4)
        .cells(5, 1, 6, 3)
}

pub fn boxed_in() -> TestMapBuilder {
    let mut map = TestMapBuilder::new(3, 3, 5);
    for cy in 0..3 {
        for cx in 0..3 {
            if (cx, cy) != (1, 1) {
                map = map.cells(cx, cy, cx + 1, cy + 1);
            }
        }
    }
    map
}
