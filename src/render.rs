use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

const OBSTACLE: char = '#';
const IN_PATH: char = '1';
const EMPTY: char = '0';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    /// Wraps each glyph in ANSI colour codes.
    pub colored: bool,
    /// Only every `column_step`-th column is drawn, starting from x = 0.
    pub column_step: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            colored: false,
            column_step: 1,
        }
    }
}

/// Draws a grid and a path, one text row per grid row: `#` for obstacles, `1` for path cells and
/// `0` for everything else.
pub struct PathRender<'a> {
    grid: &'a PathingGrid,
    path: FxHashSet<Point>,
    pub style: RenderStyle,
}

impl<'a> PathRender<'a> {
    pub fn new(grid: &'a PathingGrid, path: &[Point]) -> PathRender<'a> {
        PathRender {
            grid,
            path: path.iter().copied().collect(),
            style: RenderStyle::default(),
        }
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    fn glyph(&self, point: Point) -> (char, &'static str) {
        if self.grid.get_point(point) {
            (OBSTACLE, GREEN)
        } else if self.path.contains(&point) {
            (IN_PATH, RED)
        } else {
            (EMPTY, BLUE)
        }
    }
}

impl fmt::Display for PathRender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let step = self.style.column_step.max(1);
        for y in 0..self.grid.height() as i32 {
            for x in (0..self.grid.width() as i32).step_by(step) {
                let (glyph, color) = self.glyph(Point::new(x, y));
                if self.style.colored {
                    write!(f, "{color}{glyph}{RESET}")?;
                } else {
                    write!(f, "{glyph}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_glyphs() {
        let pathing_grid = PathingGrid::from_obstacles(3, 2, |x, y| (x, y) == (1, 0));
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)];
        let rendered = PathRender::new(&pathing_grid, &path).to_string();
        assert_eq!(rendered, "1#1\n010\n");
    }

    #[test]
    fn colored_and_strided() {
        let pathing_grid = PathingGrid::from_obstacles(3, 1, |x, _| x == 2);
        let rendered = PathRender::new(&pathing_grid, &[Point::new(0, 0)])
            .with_style(RenderStyle {
                colored: true,
                column_step: 2,
            })
            .to_string();
        assert_eq!(rendered, format!("{RED}1{RESET}{GREEN}#{RESET}\n"));
    }
}
