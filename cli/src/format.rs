//! Text contract with the outside world
//!
//! Input: a vertex count `M` followed by exactly `M × M` non-negative
//! integer capacities in row-major order, all whitespace-separated. Output:
//! the total flow, the flow matrix with negative (reverse pseudo-flow)
//! entries clamped to zero, and the 1-based source-side cut vertices in
//! ascending order. Malformed input is rejected here or by the core before
//! any algorithmic work happens.

use flownet_core::MaxFlowSummary;

use crate::error::CliError;

/// Parses the capacity-matrix file format.
///
/// Token count is enforced exactly: too few and too many entries are both
/// rejected rather than silently truncated.
pub fn parse_capacity_matrix(text: &str) -> Result<Vec<Vec<i64>>, CliError> {
    let mut tokens = text.split_whitespace().enumerate();

    let vertex_count = match tokens.next() {
        Some((position, token)) => parse_entry(token, position)?,
        None => return Err(CliError::MissingVertexCount),
    };
    if vertex_count <= 0 {
        return Err(CliError::NonPositiveVertexCount {
            found: vertex_count,
        });
    }
    let vertex_count = vertex_count as usize;
    let expected = vertex_count
        .checked_mul(vertex_count)
        .ok_or(CliError::OversizedVertexCount {
            found: vertex_count,
        })?;

    let mut capacity = Vec::with_capacity(vertex_count);
    let mut consumed = 0;
    for _ in 0..vertex_count {
        let mut row = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            match tokens.next() {
                Some((position, token)) => row.push(parse_entry(token, position)?),
                None => {
                    return Err(CliError::WrongEntryCount {
                        vertices: vertex_count,
                        expected,
                        actual: consumed,
                    })
                }
            }
            consumed += 1;
        }
        capacity.push(row);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(CliError::WrongEntryCount {
            vertices: vertex_count,
            expected,
            actual: expected + trailing,
        });
    }
    Ok(capacity)
}

fn parse_entry(token: &str, position: usize) -> Result<i64, CliError> {
    token.parse().map_err(|_| CliError::InvalidToken {
        token: token.to_owned(),
        position,
    })
}

/// Renders the result file: total flow, clamped flow matrix, 1-based cut.
pub fn render_summary(summary: &MaxFlowSummary) -> String {
    let mut out = String::new();
    out.push_str(&summary.total_flow.to_string());
    out.push('\n');

    for row in summary.clamped_flow() {
        for value in row {
            out.push_str(&value.to_string());
            out.push(' ');
        }
        out.push('\n');
    }

    for &vertex in &summary.min_cut {
        out.push_str(&(vertex + 1).to_string());
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use flownet_core::max_flow;

    #[test]
    fn parses_matrix_across_lines() {
        let capacity = parse_capacity_matrix("2\n0 5\n0 0\n").unwrap();
        assert_eq!(capacity, vec![vec![0, 5], vec![0, 0]]);
    }

    #[test]
    fn parses_single_line_input() {
        let capacity = parse_capacity_matrix("2 0 5 0 0").unwrap();
        assert_eq!(capacity, vec![vec![0, 5], vec![0, 0]]);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_capacity_matrix("  \n "),
            Err(CliError::MissingVertexCount)
        ));
    }

    #[test]
    fn rejects_non_positive_vertex_count() {
        assert!(matches!(
            parse_capacity_matrix("0"),
            Err(CliError::NonPositiveVertexCount { found: 0 })
        ));
        assert!(matches!(
            parse_capacity_matrix("-4 1 2"),
            Err(CliError::NonPositiveVertexCount { found: -4 })
        ));
    }

    #[test]
    fn rejects_short_matrix() {
        assert!(matches!(
            parse_capacity_matrix("2 0 5 0"),
            Err(CliError::WrongEntryCount {
                vertices: 2,
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn rejects_trailing_entries() {
        assert!(matches!(
            parse_capacity_matrix("2 0 5 0 0 9"),
            Err(CliError::WrongEntryCount {
                vertices: 2,
                expected: 4,
                actual: 5
            })
        ));
    }

    #[test]
    fn rejects_non_integer_token() {
        assert!(matches!(
            parse_capacity_matrix("2 0 x 0 0"),
            Err(CliError::InvalidToken { position: 2, .. })
        ));
    }

    #[test]
    fn renders_clamped_matrix_and_one_based_cut() {
        let summary = max_flow(vec![vec![0, 5], vec![0, 0]]).unwrap();
        // The reverse pseudo-flow of -5 on 1 -> 0 renders as zero, and the
        // cut line is 1-based.
        assert_eq!(render_summary(&summary), "5\n0 5 \n0 0 \n1 ");
    }

    #[test]
    fn renders_multi_vertex_cut_in_ascending_order() {
        let summary = max_flow(vec![
            vec![0, 5, 0],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(render_summary(&summary), "0\n0 0 0 \n0 0 0 \n0 0 0 \n1 2 ");
    }
}
