use std::{fs, path::Path};

use crate::{Error, Result, instance::Instance, node::Node};

const DIMENSION_KEYWORD: &str = "DIMENSION";
const COORD_SECTION_KEYWORD: &str = "NODE_COORD_SECTION";

/// Reads a TSPLIB instance file from disk.
pub fn load_instance(path: &Path) -> Result<Instance> {
    let contents = fs::read_to_string(path)?;
    parse_instance(&contents)
}

/// Parses the minimal TSPLIB subset: a `DIMENSION : <N>` line, then a
/// `NODE_COORD_SECTION` marker, then exactly N `<id> <x> <y>` lines.
pub fn parse_instance(contents: &str) -> Result<Instance> {
    let mut lines = contents.lines();
    let mut dimension: Option<usize> = None;
    let mut saw_section = false;

    for line in lines.by_ref() {
        let line = line.trim();
        if line == COORD_SECTION_KEYWORD {
            saw_section = true;
            break;
        }
        if let Some(rest) = line.strip_prefix(DIMENSION_KEYWORD) {
            dimension = Some(parse_dimension(rest)?);
        }
    }

    let Some(n) = dimension else {
        return Err(Error::invalid_input(format!(
            "{DIMENSION_KEYWORD} missing before {COORD_SECTION_KEYWORD}"
        )));
    };
    if !saw_section {
        return Err(Error::invalid_input(format!(
            "{COORD_SECTION_KEYWORD} missing"
        )));
    }

    let mut nodes = Vec::with_capacity(n);
    for idx in 0..n {
        let Some(line) = lines.next() else {
            return Err(Error::invalid_input(format!(
                "expected {n} coordinate lines, found {idx}"
            )));
        };
        nodes.push(parse_coord_line(idx, line)?);
    }

    Instance::new(nodes)
}

fn parse_dimension(rest: &str) -> Result<usize> {
    let value = rest.trim_start().strip_prefix(':').map(str::trim);
    let Some(value) = value else {
        return Err(Error::invalid_input(format!(
            "malformed {DIMENSION_KEYWORD} line"
        )));
    };
    let n: i64 = value.parse().map_err(|_| {
        Error::invalid_input(format!("invalid {DIMENSION_KEYWORD} value: {value}"))
    })?;
    if n <= 0 {
        return Err(Error::invalid_input(format!(
            "{DIMENSION_KEYWORD} must be positive, got {n}"
        )));
    }
    Ok(n as usize)
}

fn parse_coord_line(idx: usize, line: &str) -> Result<Node> {
    let mut fields = line.split_whitespace();
    let (Some(id), Some(x), Some(y)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::invalid_input(format!(
            "coordinate line {}: expected '<id> <x> <y>', got: {line}",
            idx + 1
        )));
    };

    // The 1-based id is positional bookkeeping only; it still has to parse.
    let _: i64 = id.parse().map_err(|_| {
        Error::invalid_input(format!("coordinate line {}: invalid id: {id}", idx + 1))
    })?;
    let x: f64 = x.parse().map_err(|_| {
        Error::invalid_input(format!("coordinate line {}: invalid x: {x}", idx + 1))
    })?;
    let y: f64 = y.parse().map_err(|_| {
        Error::invalid_input(format!("coordinate line {}: invalid y: {y}", idx + 1))
    })?;

    Ok(Node::new(x, y))
}
