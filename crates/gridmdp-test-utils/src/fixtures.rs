//! Reusable layouts.
//!
//! Small hand-checked layouts for scenario tests, plus a parser for ASCII
//! maps so larger worlds can be written inline:
//!
//! ```text
//! #######
//! #.   .#
//! # # # #
//! #A  H #
//! #######
//! ```
//!
//! `#` obstacle, `.` goal, `A` agent start, `H` hazard start, space empty.
//! The first line is the northmost row.

use gridmdp_core::Position;
use gridmdp_engine::Layout;
use gridmdp_space::Bounds;

/// A parsed map: the layout plus the dynamic starting positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub layout: Layout,
    pub agent: Position,
    pub hazards: Vec<Position>,
}

/// Parse an ASCII map.
///
/// # Panics
///
/// Panics on ragged rows, unknown symbols, or a missing agent.
pub fn parse(map: &str) -> Scene {
    let rows: Vec<&str> = map.lines().filter(|l| !l.is_empty()).collect();
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
    let bounds = Bounds::new(width, height).expect("map must not be empty");

    let mut layout = Layout::new(bounds);
    let mut agent = None;
    let mut hazards = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count() as i32, width, "ragged row {row}");
        let y = height - 1 - row as i32;
        for (x, symbol) in line.chars().enumerate() {
            let p = Position::new(x as i32, y);
            match symbol {
                '#' => layout.obstacles.push(p),
                '.' => layout.goals.push(p),
                'A' => agent = Some(p),
                'H' => hazards.push(p),
                ' ' => {}
                other => panic!("unknown map symbol {other:?} at {p}"),
            }
        }
    }
    Scene {
        layout,
        agent: agent.expect("map has no agent"),
        hazards,
    }
}

/// `length x 1` corridor with a goal at the east end.
pub fn corridor(length: i32) -> Layout {
    Layout::new(Bounds::new(length, 1).expect("positive length"))
        .with_goals([Position::new(length - 1, 0)])
}

/// Open `width x height` room with a goal in each corner.
pub fn open_room(width: i32, height: i32) -> Layout {
    let (w, h) = (width - 1, height - 1);
    Layout::new(Bounds::new(width, height).expect("positive room")).with_goals([
        Position::new(0, 0),
        Position::new(w, 0),
        Position::new(0, h),
        Position::new(w, h),
    ])
}

/// Walled 7x5 map with two goals, one hazard, and a pillar row.
pub const SMALL_MAZE: &str = "\
#######
#.   .#
# # # #
#A  H #
#######
";

/// Walled 20x11 map with goals along every corridor and two hazards.
pub const MEDIUM_MAZE: &str = "\
####################
#.... ......  .....#
#.##.#.####.#.####.#
#.#..#......#....#.#
#.#.##.##H######.#.#
#......#    #......#
#.####.#.##H#.####.#
#.#......##......#.#
#.#.####.##.####.#.#
#A.................#
####################
";
