//! Ontology CSV loading.
//!
//! Columns are header-named and order-irrelevant: `Edge Type`,
//! `Head Entity`, `Tail Entity`, and optionally `Confidence`. Malformed
//! rows are logged and dropped; ingestion never fails on a single bad row.

use anyhow::{bail, Context, Result};
use owlet_core::{Edge, EdgeType, Engine};
use std::collections::HashMap;
use std::path::Path;

const EDGE_TYPE_COLUMN: &str = "Edge Type";
const HEAD_COLUMN: &str = "Head Entity";
const TAIL_COLUMN: &str = "Tail Entity";
const CONFIDENCE_COLUMN: &str = "Confidence";

/// Outcome of loading one CSV file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadStats {
    /// Rows turned into edges and handed to the engine.
    pub loaded: usize,
    /// Rows dropped with a warning.
    pub skipped: usize,
}

/// Column positions resolved from the header row.
struct Columns {
    edge_type: usize,
    head: usize,
    tail: usize,
    confidence: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim(), index))
            .collect();

        let required = |name: &str| {
            positions
                .get(name)
                .copied()
                .with_context(|| format!("missing required column '{name}'"))
        };

        Ok(Self {
            edge_type: required(EDGE_TYPE_COLUMN)?,
            head: required(HEAD_COLUMN)?,
            tail: required(TAIL_COLUMN)?,
            confidence: positions.get(CONFIDENCE_COLUMN).copied(),
        })
    }
}

/// Loads an ontology CSV into the engine in configured batch sizes.
///
/// # Errors
///
/// Fails on unreadable files, a missing required column, or a store-level
/// write error. Individual bad rows only bump the skip counter.
pub fn load_csv(engine: &Engine, path: &Path) -> Result<LoadStats> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open ontology file {}", path.display()))?;
    let columns = Columns::resolve(reader.headers().context("failed to read CSV header")?)?;

    let batch_size = engine.config().ingestion.batch_size;
    let mut batch: Vec<Edge> = Vec::with_capacity(batch_size);
    let mut stats = LoadStats::default();

    for (index, record) in reader.records().enumerate() {
        // Header is line 1; data starts at line 2.
        let row_num = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(row_num, %err, "unreadable row dropped");
                stats.skipped += 1;
                continue;
            }
        };

        match parse_row(&columns, &record, row_num) {
            Some(edge) => {
                batch.push(edge);
                stats.loaded += 1;
            }
            None => stats.skipped += 1,
        }

        if batch.len() >= batch_size {
            engine.add_edges(std::mem::take(&mut batch))?;
        }
    }

    if !batch.is_empty() {
        engine.add_edges(batch)?;
    }

    let engine_stats = engine.stats();
    tracing::info!(
        rows = stats.loaded,
        edges = engine_stats.edges,
        entities = engine_stats.entities,
        skipped = stats.skipped,
        "ontology loaded"
    );
    Ok(stats)
}

fn parse_row(columns: &Columns, record: &csv::StringRecord, row_num: usize) -> Option<Edge> {
    let edge_type_str = record.get(columns.edge_type).unwrap_or("").trim();
    let head = record.get(columns.head).unwrap_or("").trim();
    let tail = record.get(columns.tail).unwrap_or("").trim();

    if edge_type_str.is_empty() || head.is_empty() || tail.is_empty() {
        tracing::warn!(row_num, "row missing required fields");
        return None;
    }

    let edge_type: EdgeType = match edge_type_str.parse() {
        Ok(edge_type) => edge_type,
        Err(_) => {
            tracing::warn!(row_num, edge_type = edge_type_str, "unknown edge type, row dropped");
            return None;
        }
    };

    let confidence = columns
        .confidence
        .and_then(|column| record.get(column))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or(1.0, |value| {
            value.parse::<f32>().unwrap_or_else(|_| {
                tracing::warn!(row_num, value, "invalid confidence, defaulting to 1.0");
                1.0
            })
        });

    let edge = Edge::new(edge_type, head, tail)
        .with_confidence(confidence)
        .with_metadata(HashMap::from([(
            "source_row".to_string(),
            serde_json::json!(row_num),
        )]));

    // Keep one bad row from failing the whole batch downstream.
    if let Err(err) = edge.validate() {
        tracing::warn!(row_num, %err, "invalid edge, row dropped");
        return None;
    }
    Some(edge)
}

/// Lints an ontology CSV without keeping the engine around.
///
/// # Errors
///
/// Same failure modes as [`load_csv`].
pub fn check_csv(path: &Path) -> Result<LoadStats> {
    let engine = Engine::default();
    let stats = load_csv(&engine, path)?;
    if stats.loaded == 0 {
        bail!("no usable edges in {}", path.display());
    }
    Ok(stats)
}
