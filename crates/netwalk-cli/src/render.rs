//! Box-drawing rendering of grids.

use netwalk_core::{Connections, Grid, Position, PositionSet};

/// Renders `grid` with one box-drawing glyph per tile.
///
/// Non-blank tiles outside `connected` are drawn as `·`, so the network that
/// reaches the server stands out.
///
/// # Examples
///
/// ```
/// use netwalk_cli::render::render_grid;
/// use netwalk_core::{Grid, connected_cells};
///
/// let grid: Grid = "040/290/000".parse()?;
/// assert_eq!(render_grid(&grid, &connected_cells(&grid)), " ╷ \n╶┘ \n   ");
/// # Ok::<(), netwalk_core::ParseGridError>(())
/// ```
#[must_use]
pub fn render_grid(grid: &Grid, connected: &PositionSet) -> String {
    render_with(grid, |pos, tile| {
        if tile.is_empty() || connected.contains(pos) {
            tile.glyph()
        } else {
            '·'
        }
    })
}

/// Renders every tile as its glyph, regardless of connectivity.
#[must_use]
pub fn render_plain(grid: &Grid) -> String {
    render_with(grid, |_, tile| tile.glyph())
}

fn render_with<F>(grid: &Grid, mut glyph: F) -> String
where
    F: FnMut(Position, Connections) -> char,
{
    let mut out = String::with_capacity(grid.len() * 4);
    for pos in grid.positions() {
        if pos.x() == 0 && pos.y() > 0 {
            out.push('\n');
        }
        out.push(glyph(pos, grid[pos]));
    }
    out
}
