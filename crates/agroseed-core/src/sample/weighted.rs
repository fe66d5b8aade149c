//! # Weighted Sampling Primitives
//!
//! The reusable algorithmic core of AgroSeed: weighted draws with
//! replacement over finite populations, Dirichlet skew weights, and a
//! two-stage grouped sampler (weight-by-group outer draw, uniform inner
//! draw) used for foreign-key sampling conditioned on live database state.
//!
//! Weights may sum to any positive value — normalization happens inside the
//! draw. An empty population or a weight vector with no positive mass is a
//! hard `EmptyPopulation` error, never an empty-but-successful result.

use rand::Rng;

use crate::error::{AgroSeedError, Result};

/// Draw one index with probability proportional to its weight.
///
/// Negative weights are clamped to zero. Fails if `weights` is empty or has
/// no positive mass after clamping.
pub fn weighted_index(weights: &[f64], rng: &mut impl Rng) -> Result<usize> {
    if weights.is_empty() {
        return Err(AgroSeedError::empty_population("empty weight vector"));
    }

    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(AgroSeedError::empty_population(
            "weights sum to zero or are not finite",
        ));
    }

    let roll: f64 = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w.max(0.0);
        if roll < cumulative {
            return Ok(i);
        }
    }

    // Floating-point edge case: roll landed exactly on the total.
    Ok(weights.len() - 1)
}

/// Draw one item with probability proportional to its weight.
///
/// `population` and `weights` must have equal length.
pub fn pick_weighted<'a, T>(
    population: &'a [T],
    weights: &[f64],
    rng: &mut impl Rng,
) -> Result<&'a T> {
    if population.len() != weights.len() {
        return Err(AgroSeedError::empty_population(format!(
            "population size {} does not match weight vector size {}",
            population.len(),
            weights.len()
        )));
    }
    let idx = weighted_index(weights, rng)?;
    Ok(&population[idx])
}

/// Draw `n` items with replacement, probability proportional to weight.
pub fn sample_weighted<T: Clone>(
    population: &[T],
    weights: &[f64],
    n: usize,
    rng: &mut impl Rng,
) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(pick_weighted(population, weights, rng)?.clone());
    }
    Ok(out)
}

/// Draw one item uniformly at random.
pub fn pick_uniform<'a, T>(population: &'a [T], rng: &mut impl Rng) -> Result<&'a T> {
    if population.is_empty() {
        return Err(AgroSeedError::empty_population(
            "uniform draw over an empty population",
        ));
    }
    Ok(&population[rng.random_range(0..population.len())])
}

/// Sample a symmetric Dirichlet(1, ..., 1) weight vector of length `n`.
///
/// With all concentration parameters equal to one, a Dirichlet sample is a
/// vector of unit-exponential draws normalized to sum to one. This is the
/// skew-injection primitive: each generation run assigns every parent row a
/// random "popularity" share, producing uneven but valid child distributions.
pub fn dirichlet_weights(n: usize, rng: &mut impl Rng) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let draws: Vec<f64> = (0..n)
        .map(|_| {
            let u: f64 = rng.random();
            // u is in [0, 1), so 1 - u is in (0, 1] and the log is finite.
            -(1.0 - u).ln()
        })
        .collect();

    let total: f64 = draws.iter().sum();
    if total <= 0.0 {
        // All draws were exactly zero. Fall back to a uniform share.
        return vec![1.0 / n as f64; n];
    }
    draws.iter().map(|d| d / total).collect()
}

/// A two-stage sampler: the outer draw picks a group with probability
/// proportional to its weight, the inner draw picks a member uniformly
/// within the chosen group.
///
/// This is the foreign-key sampling pattern shared by the dependent-table
/// generators — e.g. pick a crop weighted by how often it was planted, then
/// pick one concrete planting of that crop. Groups with non-positive weight
/// are dropped at construction; a positively weighted group with no members
/// is rejected, which guarantees a successful draw never references a parent
/// with zero children.
pub struct GroupedPool<G, T> {
    groups: Vec<(G, Vec<T>)>,
    weights: Vec<f64>,
}

impl<G: Clone + std::fmt::Display, T: Clone> GroupedPool<G, T> {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Register a group of members under a sampling weight.
    pub fn push_group(&mut self, key: G, weight: f64, members: Vec<T>) -> Result<()> {
        if weight <= 0.0 {
            return Ok(());
        }
        if members.is_empty() {
            return Err(AgroSeedError::empty_population(format!(
                "group '{}' carries weight {} but has no members",
                key, weight
            )));
        }
        self.groups.push((key, members));
        self.weights.push(weight);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Draw one (group key, member) pair.
    pub fn draw(&self, rng: &mut impl Rng) -> Result<(G, T)> {
        let idx = weighted_index(&self.weights, rng)?;
        let (key, members) = &self.groups[idx];
        let member = pick_uniform(members, rng)?;
        Ok((key.clone(), member.clone()))
    }

    /// Draw `n` members with replacement.
    pub fn draw_members(&self, n: usize, rng: &mut impl Rng) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.draw(rng)?.1);
        }
        Ok(out)
    }
}

impl<G: Clone + std::fmt::Display, T: Clone> Default for GroupedPool<G, T> {
    fn default() -> Self {
        Self::new()
    }
}
