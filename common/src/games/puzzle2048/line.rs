use super::board::MAX_TILE;

/// Outcome of collapsing one row or column.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LineReduction {
    pub line: Vec<u32>,
    pub changed: bool,
    pub score: u64,
    pub merges: usize,
}

/// Collapses `line` toward index 0 (`toward_start`) or toward its last index,
/// merging each pair of equal neighbours once per pass.
pub fn reduce_line(line: &[u32], toward_start: bool) -> LineReduction {
    let (reduced, score, merges) = if toward_start {
        slide_and_merge_line(line.iter().copied(), line.len())
    } else {
        let (mut reduced, score, merges) =
            slide_and_merge_line(line.iter().rev().copied(), line.len());
        reduced.reverse();
        (reduced, score, merges)
    };

    let changed = merges > 0 || reduced.as_slice() != line;
    LineReduction {
        line: reduced,
        changed,
        score,
        merges,
    }
}

/// Equal non-zero tiles merge unless their double no longer fits a tile.
pub fn tiles_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

fn slide_and_merge_line(values: impl Iterator<Item = u32>, len: usize) -> (Vec<u32>, u64, usize) {
    let mut result: Vec<u32> = Vec::with_capacity(len);
    let mut score: u64 = 0;
    let mut merges = 0;

    let non_zero: Vec<u32> = values.filter(|&v| v != 0).collect();

    let mut i = 0;
    while i < non_zero.len() {
        if i + 1 < non_zero.len() && tiles_merge(non_zero[i], non_zero[i + 1]) {
            let merged = non_zero[i] * 2;
            result.push(merged);
            score += u64::from(merged);
            merges += 1;
            i += 2;
        } else {
            result.push(non_zero[i]);
            i += 1;
        }
    }

    result.resize(len, 0);
    (result, score, merges)
}
