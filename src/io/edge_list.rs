use crate::graph::{MutableGraph, WeightedGraph};
use crate::{Error, Result};

/// Parses the line-oriented edge list format.
///
/// The first line that is neither blank nor a `#` comment may be `directed`
/// or `undirected` (case-insensitive); graphs are undirected otherwise. Every
/// other data line is `origin destination weight`; extra columns are ignored.
///
/// Malformed data lines are not skipped: a line with fewer than three columns
/// or a weight that does not parse as a number fails the whole load with
/// [`Error::Parse`], carrying the 1-based line number.
pub fn parse_edge_list(content: &str) -> Result<WeightedGraph<String>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .peekable();

    let directed = match lines.peek().map(|(_, line)| line.to_ascii_lowercase()) {
        Some(header) if header == "directed" || header == "undirected" => {
            lines.next();
            header == "directed"
        }
        _ => false,
    };

    let mut graph = WeightedGraph::new(directed);

    for (line_number, line) in lines {
        let mut parts = line.split_whitespace();
        let (Some(from), Some(to), Some(weight)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::Parse {
                line: line_number,
                message: format!("expected `origin destination weight`, got `{}`", line),
            });
        };

        let weight: f64 = weight.parse().map_err(|_| Error::Parse {
            line: line_number,
            message: format!("invalid weight `{}`", weight),
        })?;

        graph.add_edge(from.to_string(), to.to_string(), weight);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_header_comments_and_blank_lines() {
        let content = "# Test graph\nundirected\n\nA B 4\n# inline comment line\nA C 2.5\n";
        let graph = parse_edge_list(content).unwrap();

        assert!(!graph.is_directed());
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_weight(&"C".to_string(), &"A".to_string()), Some(2.5));
    }

    #[test]
    fn test_directed_header() {
        let graph = parse_edge_list("DIRECTED\nA B 5\n").unwrap();

        assert!(graph.is_directed());
        assert!(graph.neighbors(&"B".to_string()).is_empty());
    }

    #[test]
    fn test_defaults_to_undirected() {
        let graph = parse_edge_list("A B 5 extra columns\n").unwrap();

        assert!(!graph.is_directed());
        assert_eq!(graph.neighbors(&"B".to_string()), &[("A".to_string(), 5.0)]);
    }

    #[test]
    fn test_negative_weights_are_accepted() {
        let graph = parse_edge_list("directed\nX Y -3\n").unwrap();
        assert!(graph.has_negative_edge());
    }

    #[test]
    fn test_short_line_is_rejected() {
        let result = parse_edge_list("directed\nA B 1\nA C\n");
        assert!(matches!(result, Err(Error::Parse { line: 3, .. })));
    }

    #[test]
    fn test_short_line_between_valid_lines_fails_the_load() {
        let result = parse_edge_list("A B 1\nlonely\nB C 2\n");
        match result {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("`lonely`"));
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_weight_is_rejected() {
        let result = parse_edge_list("A B heavy\n");
        assert!(matches!(result, Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn test_empty_input_is_empty_graph() {
        let graph = parse_edge_list("\n# nothing\n").unwrap();
        assert_eq!(graph.vertex_count(), 0);
    }
}
