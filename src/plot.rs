//! SVG rendering of a graph with a search path highlighted.
//!
//! Draws every edge and node, marks the start and goal, and paints the
//! discovered path over the plain edges.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use itertools::{Itertools, MinMaxResult};

use pathsearch::{Graph, Point};

const CANVAS: f64 = 640.0;
const MARGIN: f64 = 60.0;

/// Maps graph coordinates onto the canvas, y-axis flipped so the map
/// reads the way the coordinates do.
#[derive(Debug)]
struct Frame {
    x0: f64,
    y0: f64,
    scale: f64,
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    match values.minmax() {
        MinMaxResult::NoElements => (0.0, 1.0),
        MinMaxResult::OneElement(v) => (v - 0.5, v + 0.5),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    }
}

impl Frame {
    fn fit(graph: &Graph) -> Self {
        let positions = || graph.nodes().filter_map(|n| graph.coordinate(n).ok());
        let (x0, x1) = bounds(positions().map(|p| p.x));
        let (y0, y1) = bounds(positions().map(|p| p.y));

        let span = (x1 - x0).max(y1 - y0).max(f64::EPSILON);
        Frame {
            x0,
            y0,
            scale: (CANVAS - 2.0 * MARGIN) / span,
        }
    }

    fn place(&self, p: Point) -> (f64, f64) {
        (
            MARGIN + (p.x - self.x0) * self.scale,
            CANVAS - MARGIN - (p.y - self.y0) * self.scale,
        )
    }
}

/// Render the graph as an SVG document.
pub fn render(graph: &Graph, path: &[String], start: &str, goal: &str) -> String {
    let frame = Frame::fit(graph);

    let mut on_path: HashSet<(&str, &str)> = HashSet::new();
    for pair in path.windows(2) {
        on_path.insert((pair[0].as_str(), pair[1].as_str()));
        on_path.insert((pair[1].as_str(), pair[0].as_str()));
    }

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
        CANVAS
    )
    .unwrap();
    writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#).unwrap();

    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    for (a, b, _) in edges {
        if let (Ok(at_a), Ok(at_b)) = (graph.coordinate(a), graph.coordinate(b)) {
            let (x1, y1) = frame.place(at_a);
            let (x2, y2) = frame.place(at_b);
            let (stroke, width) = if on_path.contains(&(a, b)) {
                ("crimson", 3.0)
            } else {
                ("steelblue", 1.0)
            };
            writeln!(
                svg,
                r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{}"/>"#,
                x1, y1, x2, y2, stroke, width
            )
            .unwrap();
        }
    }

    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_unstable();
    for node in nodes {
        if let Ok(at) = graph.coordinate(node) {
            let (x, y) = frame.place(at);
            let fill = if node == start {
                "mediumseagreen"
            } else if node == goal {
                "orange"
            } else {
                "lightsteelblue"
            };
            writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="10" fill="{}" stroke="black"/>"#,
                x, y, fill
            )
            .unwrap();
            writeln!(
                svg,
                r#"  <text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                x, y, node
            )
            .unwrap();
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render and write to a file.
pub fn save<P: AsRef<Path>>(
    graph: &Graph,
    path: &[String],
    start: &str,
    goal: &str,
    file: P,
) -> io::Result<()> {
    fs::write(file, render(graph, path, start, goal))
}

#[cfg(test)]
mod test {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        graph.add_edge("B", "C", 1.0, Point::new(4.0, 0.0), Point::new(2.0, 3.0));
        graph.add_edge("C", "A", 1.0, Point::new(2.0, 3.0), Point::new(0.0, 0.0));
        graph
    }

    #[test]
    fn renders_every_node_and_edge() {
        let graph = triangle();
        let svg = render(&graph, &[], "A", "C");

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<line").count(), 3);
    }

    #[test]
    fn highlights_the_path() {
        let graph = triangle();
        let path = vec!["A".to_string(), "B".to_string()];
        let svg = render(&graph, &path, "A", "B");

        assert_eq!(svg.matches("crimson").count(), 1);
        assert!(svg.contains("mediumseagreen"));
        assert!(svg.contains("orange"));
    }
}
