use super::graph::InteractionGraph;
use crate::core::models::ids::NodeId;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;
use tracing::debug;

const MIN_DISTANCE: f64 = 0.01;
const MIN_DISPLACEMENT: f64 = 0.01;
const STALLED_DISPLACEMENT: f64 = 0.1;
const INITIAL_TEMPERATURE_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub iterations: usize,
    pub seed: u64,
    /// Mean per-node movement below which the simulation stops early.
    pub threshold: f64,
    /// Half-width of the square the final positions are scaled into.
    pub scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 42,
            threshold: 1e-4,
            scale: 1.0,
        }
    }
}

/// Node positions produced by [`spring_layout`].
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: SecondaryMap<NodeId, Vector2<f64>>,
}

impl Layout {
    pub fn position(&self, id: NodeId) -> Option<Vector2<f64>> {
        self.positions.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Vector2<f64>)> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Largest absolute coordinate over all nodes.
    pub fn extent(&self) -> f64 {
        self.positions
            .values()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max)
    }
}

/// Fruchterman-Reingold force-directed placement.
///
/// Starts from seeded uniform positions in the unit square, with optimal
/// distance `k = sqrt(1 / n)` and a temperature that begins at a tenth of the
/// initial spread and cools linearly to zero. Parallel edges strengthen the
/// attraction between their endpoints. The result is centred on the origin and
/// scaled so that the farthest coordinate equals `config.scale`.
pub fn spring_layout(graph: &InteractionGraph, config: &LayoutConfig) -> Layout {
    let ids = graph.node_ids();
    let n = ids.len();
    let mut layout = Layout::default();

    match n {
        0 => return layout,
        1 => {
            layout.positions.insert(ids[0], Vector2::zeros());
            return layout;
        }
        _ => {}
    }

    let index = graph.dense_indices();
    let mut attraction = vec![0.0f64; n * n];
    for ((u, v), count) in graph.edge_multiplicity() {
        if let (Some(&i), Some(&j)) = (index.get(u), index.get(v)) {
            attraction[i * n + j] = count as f64;
            attraction[j * n + i] = count as f64;
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<Vector2<f64>> = (0..n)
        .map(|_| Vector2::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect();

    let k = (1.0 / n as f64).sqrt();
    let mut temperature = initial_temperature(&pos);
    let cooling = temperature / (config.iterations as f64 + 1.0);

    let mut performed = 0;
    for _ in 0..config.iterations {
        performed += 1;
        let mut total_sq = 0.0;
        let mut moves = Vec::with_capacity(n);

        for i in 0..n {
            let mut displacement = Vector2::<f64>::zeros();
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = pos[i] - pos[j];
                let distance = delta.norm().max(MIN_DISTANCE);
                let force = k * k / (distance * distance) - attraction[i * n + j] * distance / k;
                displacement += delta * force;
            }
            let mut length = displacement.norm();
            if length < MIN_DISPLACEMENT {
                length = STALLED_DISPLACEMENT;
            }
            let step = displacement * (temperature / length);
            total_sq += step.norm_squared();
            moves.push(step);
        }

        for (p, step) in pos.iter_mut().zip(&moves) {
            *p += step;
        }
        temperature -= cooling;

        if total_sq.sqrt() / (n as f64) < config.threshold {
            break;
        }
    }

    rescale(&mut pos, config.scale);
    debug!(nodes = n, iterations = performed, "Spring layout converged");

    for (&id, p) in ids.iter().zip(pos) {
        layout.positions.insert(id, p);
    }
    layout
}

fn initial_temperature(pos: &[Vector2<f64>]) -> f64 {
    let (mut min, mut max) = (pos[0], pos[0]);
    for p in pos {
        min = min.inf(p);
        max = max.sup(p);
    }
    let spread = max - min;
    spread.x.max(spread.y) * INITIAL_TEMPERATURE_FRACTION
}

fn rescale(pos: &mut [Vector2<f64>], scale: f64) {
    let mean = pos.iter().fold(Vector2::<f64>::zeros(), |acc, p| acc + p) / pos.len() as f64;
    let mut limit: f64 = 0.0;
    for p in pos.iter_mut() {
        *p -= mean;
        limit = limit.max(p.x.abs()).max(p.y.abs());
    }
    if limit > 0.0 {
        for p in pos.iter_mut() {
            *p *= scale / limit;
        }
    }
}
