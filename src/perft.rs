use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use tabled::{Table, Tabled};
use tracing::debug;

use crate::board::Board;
use crate::move_gen::{side_in_check, successors, MoveGenError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Tabled)]
pub struct PerftDepthResult {
    pub depth: usize,
    pub tot: u64,
    pub captures: u64,
    pub checks: u64,
}

impl PerftDepthResult {
    pub fn new(depth: usize, tot: u64, captures: u64, checks: u64) -> Self {
        PerftDepthResult {
            depth,
            tot,
            captures,
            checks,
        }
    }
}

pub struct PerftResult {
    pub depth_results: Vec<PerftDepthResult>,
    pub tot_nodes: u64,
    pub time_elapsed: Duration,
    pub nodes_per_second: f64,
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total nodes: {}", self.tot_nodes)?;
        writeln!(f, "time elapsed: {}", self.time_elapsed.as_secs_f32())?;
        writeln!(f, "nodes/s: {}", self.nodes_per_second)?;
        writeln!(f, "{}", Table::new(&self.depth_results))?;
        Ok(())
    }
}

/// Counts the boards reachable at each ply up to `depth`.
///
/// A capture is a successor with fewer pieces than its parent, a check a successor whose
/// side to move has a king in check.
pub fn perft(board: &Board, depth: usize) -> Result<PerftResult, MoveGenError> {
    let mut depth_results: Vec<PerftDepthResult> = (1..=depth)
        .map(|d| PerftDepthResult {
            depth: d,
            ..Default::default()
        })
        .collect();

    let start = Instant::now();

    perft_helper(&mut depth_results, board, 0)?;

    let time_elapsed = start.elapsed();

    let tot_nodes = depth_results.iter().fold(0, |tot, curr| tot + curr.tot);

    let nodes_per_second = tot_nodes as f64 / time_elapsed.as_secs_f64();

    for res in &depth_results {
        debug!(
            depth = res.depth,
            tot = res.tot,
            captures = res.captures,
            checks = res.checks,
            "perft depth"
        );
    }

    Ok(PerftResult {
        depth_results,
        tot_nodes,
        time_elapsed,
        nodes_per_second,
    })
}

fn perft_helper(
    depth_results: &mut [PerftDepthResult],
    board: &Board,
    curr_depth: usize,
) -> Result<(), MoveGenError> {
    if curr_depth == depth_results.len() {
        return Ok(());
    }

    let boards = successors(board)?;

    let mut captures = 0;
    let mut checks = 0;
    for next in &boards {
        if next.pieces().len() < board.pieces().len() {
            captures += 1;
        }
        if side_in_check(next, next.turn())? {
            checks += 1;
        }
    }

    let curr_res = &mut depth_results[curr_depth];
    curr_res.tot += boards.len() as u64;
    curr_res.captures += captures;
    curr_res.checks += checks;

    for next in &boards {
        perft_helper(depth_results, next, curr_depth + 1)?;
    }
    Ok(())
}
