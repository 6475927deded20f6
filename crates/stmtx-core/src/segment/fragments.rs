//! Line reconstruction from positioned PDF text fragments.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::collapse_whitespace;
use crate::models::config::SegmenterConfig;

/// A positioned piece of text from a PDF text layer.
///
/// Coordinates are PDF user space: `y` grows upward, so the top of the page
/// has the largest `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Text content (may be a single glyph or a whole word).
    pub text: String,
    /// Left edge.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    /// Advance width.
    pub width: f32,
}

impl TextFragment {
    /// Create a new fragment.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Average glyph width of this fragment.
    pub fn glyph_width(&self) -> f32 {
        let glyphs = self.text.chars().count().max(1) as f32;
        self.width / glyphs
    }
}

/// Rebuild reading-order lines from one page of positioned fragments.
///
/// Fragments are clustered by baseline within `y_tolerance`, clusters are
/// emitted top to bottom, and each cluster is read left to right. A space is
/// inserted where the horizontal gap exceeds `gap_factor` times the preceding
/// fragment's average glyph width.
pub fn reconstruct_lines(fragments: &[TextFragment], config: &SegmenterConfig) -> Vec<String> {
    let mut sorted: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .collect();

    sorted.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });

    let mut clusters: Vec<Vec<&TextFragment>> = Vec::new();
    let mut anchor_y = f32::NAN;

    for fragment in sorted {
        match clusters.last_mut() {
            Some(cluster) if (anchor_y - fragment.y).abs() <= config.y_tolerance => {
                cluster.push(fragment);
            }
            _ => {
                anchor_y = fragment.y;
                clusters.push(vec![fragment]);
            }
        }
    }

    let lines: Vec<String> = clusters
        .into_iter()
        .map(|mut cluster| {
            cluster.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
            join_cluster(&cluster, config.gap_factor)
        })
        .filter(|l| !l.is_empty())
        .collect();

    trace!("Reconstructed {} lines from {} fragments", lines.len(), fragments.len());
    lines
}

fn join_cluster(cluster: &[&TextFragment], gap_factor: f32) -> String {
    let mut line = String::new();
    let mut prev: Option<&TextFragment> = None;

    for fragment in cluster {
        if let Some(p) = prev {
            let gap = fragment.x - p.right();
            if gap > gap_factor * p.glyph_width()
                && !line.ends_with(' ')
                && !fragment.text.starts_with(' ')
            {
                line.push(' ');
            }
        }
        line.push_str(&fragment.text);
        prev = Some(fragment);
    }

    collapse_whitespace(&line)
}
