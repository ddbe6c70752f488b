//! Graph acquisition: interactive console prompts and edge-list files.
//!
//! The interactive reader never fails on a bad line. It explains the problem
//! and asks again, so edges accepted earlier are unaffected. The file reader
//! cannot ask again and reports the offending line number instead.

use std::io::{self, BufRead, Write};

use spanning_core::Edge;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// A graph as collected from the user.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphInput {
    /// Number of vertices, numbered `0..vertex_count`.
    pub vertex_count: usize,
    /// Accepted edges in the order they were entered.
    pub edges: Vec<Edge>,
}

/// Why a single `u v weight` line was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EdgeLineError {
    /// The line is not three whitespace-separated numbers.
    #[error("expected `u v weight`, got `{line}`")]
    Format {
        /// The rejected line, trimmed.
        line: String,
    },
    /// An endpoint does not name a vertex of the graph.
    #[error("vertex {vertex} is outside 0..={max}")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// The largest valid vertex.
        max: usize,
    },
    /// The weight parsed as NaN or infinity.
    #[error("weight `{raw}` is not a finite number")]
    NonFiniteWeight {
        /// The weight token as typed.
        raw: String,
    },
}

/// Errors raised while collecting a graph.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from the input stream or writing a prompt failed.
    #[error("console I/O failed: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
    /// The input ended before a required value was supplied.
    #[error("input ended while waiting for {expected}")]
    UnexpectedEof {
        /// Description of the value being read.
        expected: &'static str,
    },
    /// An edge file contained no vertex count.
    #[error("edge file does not declare a vertex count")]
    MissingVertexCount,
    /// An edge file declared an unusable vertex count.
    #[error("line {line}: `{value}` is not a positive vertex count")]
    InvalidVertexCount {
        /// 1-based line number.
        line: usize,
        /// The rejected token.
        value: String,
    },
    /// An edge file contained a rejected edge line.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number.
        line: usize,
        /// Why the line was rejected.
        #[source]
        source: EdgeLineError,
    },
}

/// Parses one `u v weight` line for a graph with `vertex_count` vertices.
///
/// Negative weights are accepted. Self loops are passed through; the
/// builder ignores them.
///
/// # Errors
/// Returns [`EdgeLineError`] when the line is malformed, an endpoint is out
/// of range or the weight is not finite.
///
/// # Examples
/// ```
/// use spanning_cli::cli::parse_edge_line;
///
/// let edge = parse_edge_line(" 0 3 2.5 ", 4)?;
/// assert_eq!((edge.source(), edge.target(), edge.weight()), (0, 3, 2.5));
/// assert!(parse_edge_line("0 4 1", 4).is_err());
/// # Ok::<(), spanning_cli::cli::EdgeLineError>(())
/// ```
pub fn parse_edge_line(line: &str, vertex_count: usize) -> Result<Edge, EdgeLineError> {
    let format_error = || EdgeLineError::Format {
        line: line.trim().to_owned(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [source, target, weight] = tokens.as_slice() else {
        return Err(format_error());
    };
    let source: usize = source.parse().map_err(|_| format_error())?;
    let target: usize = target.parse().map_err(|_| format_error())?;
    let raw_weight = *weight;
    let weight: f64 = raw_weight.parse().map_err(|_| format_error())?;

    let max = vertex_count.saturating_sub(1);
    for vertex in [source, target] {
        if vertex >= vertex_count {
            return Err(EdgeLineError::VertexOutOfRange { vertex, max });
        }
    }
    if !weight.is_finite() {
        return Err(EdgeLineError::NonFiniteWeight {
            raw: raw_weight.to_owned(),
        });
    }
    Ok(Edge::new(source, target, weight))
}

/// Interactive prompt loop over any line source and prompt sink.
pub struct ConsoleReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleReader<R, W> {
    /// Wraps an input stream and the writer prompts are shown on.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the prompt sink so reports can share it.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Asks for the vertex count, the edge count and then each edge.
    ///
    /// # Errors
    /// Returns [`InputError`] when the console fails or the input ends early.
    #[instrument(name = "input.read_graph", err, skip(self))]
    pub fn read_graph(&mut self) -> Result<GraphInput, InputError> {
        writeln!(self.output, "Enter the data of an undirected, connected graph.")?;
        writeln!(self.output)?;
        let vertex_count = self.read_count("Number of vertices: ", "number of vertices", 1)?;
        let edge_count = self.read_count("Number of edges: ", "number of edges", 0)?;

        writeln!(self.output)?;
        writeln!(self.output, "Enter each edge in the format:  u v weight")?;
        writeln!(
            self.output,
            "Example:  0 1 4   means an edge between 0 and 1 with weight 4"
        )?;
        writeln!(self.output)?;

        let mut edges = Vec::with_capacity(edge_count);
        for number in 1..=edge_count {
            edges.push(self.read_edge(number, vertex_count)?);
        }
        debug!(vertex_count, edges = edges.len(), "graph collected");
        Ok(GraphInput {
            vertex_count,
            edges,
        })
    }

    fn read_count(
        &mut self,
        prompt: &str,
        expected: &'static str,
        minimum: usize,
    ) -> Result<usize, InputError> {
        loop {
            let line = self.prompt(prompt, expected)?;
            match line.trim().parse::<usize>() {
                Ok(value) if value >= minimum => return Ok(value),
                _ => writeln!(
                    self.output,
                    "  Error: enter a whole number of at least {minimum}"
                )?,
            }
        }
    }

    fn read_edge(&mut self, number: usize, vertex_count: usize) -> Result<Edge, InputError> {
        loop {
            let line = self.prompt(&format!("Edge {number}: "), "an edge")?;
            match parse_edge_line(&line, vertex_count) {
                Ok(edge) => return Ok(edge),
                Err(EdgeLineError::VertexOutOfRange { max, .. }) => writeln!(
                    self.output,
                    "  Error: vertices must be between 0 and {max}"
                )?,
                Err(EdgeLineError::NonFiniteWeight { .. }) => {
                    writeln!(self.output, "  Error: the weight must be a finite number")?;
                }
                Err(EdgeLineError::Format { .. }) => writeln!(
                    self.output,
                    "  Invalid format, try again (example: 0 1 4)"
                )?,
            }
            debug!(edge = number, "edge line rejected");
        }
    }

    /// Asks for the start vertex. Empty, unparsable and out-of-range answers
    /// all fall back to `0`.
    ///
    /// # Errors
    /// Returns [`InputError`] when the console fails or the input has ended.
    pub fn read_start(&mut self, vertex_count: usize) -> Result<usize, InputError> {
        let line = self.prompt("Start vertex for Prim (default 0): ", "the start vertex")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        Ok(resolve_start(trimmed.parse().ok(), vertex_count))
    }

    /// Asks a yes/no question. `y`, `yes`, `s` and `si` (any case) mean yes;
    /// everything else, including end of input, means no.
    ///
    /// # Errors
    /// Returns [`InputError`] when the console fails.
    pub fn confirm(&mut self, question: &str) -> Result<bool, InputError> {
        match self.prompt(question, "an answer") {
            Ok(line) => Ok(is_affirmative(&line)),
            Err(InputError::UnexpectedEof { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn prompt(&mut self, text: &str, expected: &'static str) -> Result<String, InputError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof { expected });
        }
        Ok(line)
    }
}

/// Maps a requested start vertex onto the graph, falling back to `0` when
/// it is missing or out of range.
#[must_use]
pub fn resolve_start(requested: Option<usize>, vertex_count: usize) -> usize {
    match requested {
        Some(start) if start < vertex_count => start,
        Some(start) => {
            warn!(start, vertex_count, "start vertex out of range; using 0");
            0
        }
        None => 0,
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

/// Parses an edge list: the first meaningful line is the vertex count, each
/// further line is `u v weight`. Blank lines and `#` comments are skipped.
///
/// # Errors
/// Returns [`InputError`] when reading fails, the vertex count is missing or
/// invalid, or an edge line is rejected.
///
/// # Examples
/// ```
/// use spanning_cli::cli::parse_edge_list;
///
/// let graph = parse_edge_list("# square\n4\n0 1 4\n0 2 1\n".as_bytes())?;
/// assert_eq!(graph.vertex_count, 4);
/// assert_eq!(graph.edges.len(), 2);
/// # Ok::<(), spanning_cli::cli::InputError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<GraphInput, InputError> {
    let mut vertex_count = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        match vertex_count {
            None => {
                let count = content
                    .parse::<usize>()
                    .ok()
                    .filter(|&count| count > 0)
                    .ok_or_else(|| InputError::InvalidVertexCount {
                        line: number,
                        value: content.to_owned(),
                    })?;
                vertex_count = Some(count);
            }
            Some(count) => {
                let edge = parse_edge_line(content, count).map_err(|source| InputError::Line {
                    line: number,
                    source,
                })?;
                edges.push(edge);
            }
        }
    }

    let vertex_count = vertex_count.ok_or(InputError::MissingVertexCount)?;
    Ok(GraphInput {
        vertex_count,
        edges,
    })
}
