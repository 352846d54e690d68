use puzzle2048_common::puzzle2048::{Board, Rgb, tile_colors};

const MIN_CELL_WIDTH: usize = 4;

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, board: &Board, score: u64, best_score: u64) -> String {
        let width = board
            .highest_tile()
            .to_string()
            .len()
            .max(MIN_CELL_WIDTH);

        let mut out = format!("Score: {}  Best: {}\n", score, best_score);
        for row in board.rows() {
            let cells: Vec<String> = row.iter().map(|&value| self.cell(value, width)).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }

    fn cell(&self, value: u32, width: usize) -> String {
        let label = if value == 0 {
            format!("{:^width$}", ".", width = width)
        } else {
            format!("{:^width$}", value, width = width)
        };

        if !self.color {
            return label;
        }

        let colors = tile_colors(value);
        format!(
            "{}{}{}\x1b[0m",
            ansi_background(colors.background),
            ansi_foreground(colors.text),
            label
        )
    }
}

fn ansi_background(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

fn ansi_foreground(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}
