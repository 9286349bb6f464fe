//! Column assignment by longest-path layering.
//!
//! Roots (blocks without providers) sit in column 0 and every other block lands one column to
//! the right of its furthest provider. Columns are found by repeated relaxation until a pass
//! changes nothing. Cyclic graphs keep pushing their members to the right, so the number of
//! passes is capped and the result is flagged as not converged.

use planner_model::EdgeSet;
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layering {
    pub columns: HashMap<String, usize>,
    pub passes: usize,
    pub converged: bool,
}

impl Layering {
    pub fn column(&self, id: &str) -> Option<usize> {
        self.columns.get(id).copied()
    }
}

/// Enough passes for any DAG over `block_count` blocks to settle, plus the pass that confirms it.
pub fn default_max_passes(block_count: usize) -> usize {
    block_count + 1
}

pub fn longest_path<'a, I>(ids: I, edges: &EdgeSet, max_passes: usize) -> Layering
where
    I: IntoIterator<Item = &'a str>,
{
    let ids: Vec<&str> = ids.into_iter().collect();
    let max_passes = max_passes.max(1);

    let mut columns: HashMap<&str, usize> = HashMap::default();
    for &id in &ids {
        if !edges.has_incoming(id) {
            columns.insert(id, 0);
        }
    }

    let mut passes = 0usize;
    let mut converged = false;
    while passes < max_passes {
        passes += 1;
        let mut changed = false;
        let mut visited = vec![false; edges.len()];

        for &id in &ids {
            let mut candidate: Option<usize> = None;
            for &edge_idx in edges.incoming(id) {
                if visited[edge_idx] {
                    continue;
                }
                visited[edge_idx] = true;

                let Some(edge) = edges.get(edge_idx) else {
                    continue;
                };
                if let Some(&source_column) = columns.get(edge.v.as_str()) {
                    let next = source_column + 1;
                    candidate = Some(candidate.map_or(next, |c| c.max(next)));
                }
            }

            let Some(candidate) = candidate else {
                continue;
            };
            match columns.get(id) {
                Some(&current) if current >= candidate => {}
                _ => {
                    columns.insert(id, candidate);
                    changed = true;
                }
            }
        }

        if !changed {
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::warn!(
            passes,
            blocks = ids.len(),
            "layering did not settle; the graph has cycles and columns are approximate"
        );
    }

    // Members of a cycle with no path from a root never receive a column.
    let columns = ids
        .iter()
        .map(|&id| (id.to_string(), columns.get(id).copied().unwrap_or(0)))
        .collect();

    Layering {
        columns,
        passes,
        converged,
    }
}
