use crossterm::style::{Color, Stylize as _};
use mazecore::{Cell, Maze, Path, Search};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Open,
    Start,
    Goal,
    Explored,
    Path,
    Current,
}

impl Glyph {
    pub fn to_char(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Open => ' ',
            Glyph::Start => '&',
            Glyph::Goal => '!',
            Glyph::Explored => '.',
            Glyph::Path => '*',
            Glyph::Current => '@',
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Glyph::Wall => Some(Color::DarkGrey),
            Glyph::Open => None,
            Glyph::Start => Some(Color::Green),
            Glyph::Goal => Some(Color::Cyan),
            Glyph::Explored => Some(Color::Red),
            Glyph::Path => Some(Color::Yellow),
            Glyph::Current => Some(Color::Cyan),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
    pub show_explored: bool,
}

/// Character grid of `(2h + 1) x (2w + 1)` glyphs, cells at odd coordinates.
pub struct Canvas {
    glyphs: Vec<Vec<Glyph>>,
}

impl Canvas {
    pub fn new(maze: &Maze) -> Self {
        let rows = 2 * maze.height() as usize + 1;
        let cols = 2 * maze.width() as usize + 1;
        let mut canvas = Canvas {
            glyphs: vec![vec![Glyph::Wall; cols]; rows],
        };

        for cell in maze.cells() {
            canvas.set(to_canvas(cell), Glyph::Open);
        }
        for (a, b) in maze.passages() {
            canvas.set(between(a, b), Glyph::Open);
        }

        canvas
    }

    pub fn set(&mut self, (row, col): (usize, usize), glyph: Glyph) {
        if let Some(slot) = self.glyphs.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = glyph;
        }
    }

    pub fn set_cell(&mut self, cell: Cell, glyph: Glyph) {
        self.set(to_canvas(cell), glyph);
    }

    pub fn overlay(&mut self, search: &Search, show_explored: bool) {
        if show_explored {
            self.overlay_explored(&search.explored);
        }
        if let Some(path) = &search.path {
            self.overlay_path(path);
        }
    }

    pub fn overlay_explored(&mut self, explored: &[Cell]) {
        for &cell in explored {
            self.set_cell(cell, Glyph::Explored);
        }
    }

    pub fn overlay_path(&mut self, path: &Path) {
        for &cell in path {
            self.set_cell(cell, Glyph::Path);
        }
        for pair in path.cells().windows(2) {
            self.set(between(pair[0], pair[1]), Glyph::Path);
        }
    }

    pub fn draw(&self, color: bool) -> String {
        let mut out = String::new();
        for (i, row) in self.glyphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for &glyph in row {
                match glyph.color() {
                    Some(c) if color => out.push_str(&glyph.to_char().with(c).to_string()),
                    _ => out.push(glyph.to_char()),
                }
            }
        }
        out
    }
}

fn to_canvas(cell: Cell) -> (usize, usize) {
    (2 * cell.row() as usize + 1, 2 * cell.col() as usize + 1)
}

fn between(a: Cell, b: Cell) -> (usize, usize) {
    (
        (a.row() + b.row() + 1) as usize,
        (a.col() + b.col() + 1) as usize,
    )
}

/// Draws the maze with the explored cells and path of `search` on top.
pub fn render(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    search: Option<&Search>,
    options: RenderOptions,
) -> String {
    let mut canvas = Canvas::new(maze);
    if let Some(search) = search {
        canvas.overlay(search, options.show_explored);
    }
    canvas.set_cell(start, Glyph::Start);
    canvas.set_cell(goal, Glyph::Goal);
    canvas.draw(options.color)
}

/// One frame of the step-by-step playback: the cells expanded so far, the last one marked as
/// the current cell.
pub fn render_progress(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    explored: &[Cell],
    options: RenderOptions,
) -> String {
    let mut canvas = Canvas::new(maze);
    canvas.overlay_explored(explored);
    canvas.set_cell(start, Glyph::Start);
    canvas.set_cell(goal, Glyph::Goal);
    if let Some(&current) = explored.last() {
        canvas.set_cell(current, Glyph::Current);
    }
    canvas.draw(options.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazecore::{search, Strategy};

    const PLAIN: RenderOptions = RenderOptions {
        color: false,
        show_explored: true,
    };

    #[test]
    fn single_cell() {
        let maze = Maze::walled(1, 1).unwrap();
        assert_eq!(render(&maze, Cell(0, 0), Cell(0, 0), None, PLAIN), "###\n#!#\n###");
    }

    #[test]
    fn corridor_with_path() {
        let mut maze = Maze::walled(1, 3).unwrap();
        maze.carve(Cell(0, 0), Cell(0, 1)).unwrap();
        maze.carve(Cell(0, 1), Cell(0, 2)).unwrap();

        assert_eq!(
            render(&maze, Cell(0, 0), Cell(0, 2), None, PLAIN),
            "#######\n#&   !#\n#######"
        );

        let search = search(&maze, Cell(0, 0), Cell(0, 2), Strategy::Bfs).unwrap();
        assert_eq!(
            render(&maze, Cell(0, 0), Cell(0, 2), Some(&search), PLAIN),
            "#######\n#&***!#\n#######"
        );
    }

    #[test]
    fn explored_dead_end() {
        // (0,0) - (0,1) open, (1,0) hangs below (0,0) as a dead end
        let mut maze = Maze::walled(2, 2).unwrap();
        maze.carve(Cell(0, 0), Cell(1, 0)).unwrap();
        maze.carve(Cell(0, 0), Cell(0, 1)).unwrap();

        let search = search(&maze, Cell(0, 0), Cell(0, 1), Strategy::Bfs).unwrap();
        let expected = ["#####", "#&*!#", "# ###", "#.# #", "#####"].join("\n");
        assert_eq!(
            render(&maze, Cell(0, 0), Cell(0, 1), Some(&search), PLAIN),
            expected
        );

        let hidden = RenderOptions {
            show_explored: false,
            ..PLAIN
        };
        let expected = ["#####", "#&*!#", "# ###", "# # #", "#####"].join("\n");
        assert_eq!(
            render(&maze, Cell(0, 0), Cell(0, 1), Some(&search), hidden),
            expected
        );
    }

    #[test]
    fn progress_frames() {
        let mut maze = Maze::walled(1, 3).unwrap();
        maze.carve(Cell(0, 0), Cell(0, 1)).unwrap();
        maze.carve(Cell(0, 1), Cell(0, 2)).unwrap();
        let explored = [Cell(0, 0), Cell(0, 1), Cell(0, 2)];
        let (start, goal) = (Cell(0, 0), Cell(0, 2));

        let frames: Vec<_> = (1..=explored.len())
            .map(|n| render_progress(&maze, start, goal, &explored[..n], PLAIN))
            .collect();
        assert_eq!(
            frames,
            vec![
                "#######\n#@   !#\n#######",
                "#######\n#& @ !#\n#######",
                "#######\n#& . @#\n#######",
            ]
        );
    }

    #[test]
    fn colored_output_has_escapes() {
        let maze = Maze::walled(1, 1).unwrap();
        let colored = render(
            &maze,
            Cell(0, 0),
            Cell(0, 0),
            None,
            RenderOptions {
                color: true,
                show_explored: true,
            },
        );
        // crossterm drops the escapes when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(colored.contains('\u{1b}'));
        }
    }
}
