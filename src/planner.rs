use crate::model::ParsedRecipe;
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

/// Expansion steps allowed before a plan is treated as looping.
pub const MAX_STEPS: usize = 25_000;

// Demand below this is considered settled
const EPSILON: f64 = 1e-12;

/// Settings for [`build_plan`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Production speed multiplier; machine counts are divided by it
    pub factory_speed_mult: f64,
    /// Recipe slug to use for an item when several recipes produce it
    pub recipe_choice: HashMap<String, String>,
    /// Expansion steps before giving up
    pub max_steps: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            factory_speed_mult: 1.0,
            recipe_choice: HashMap::new(),
            max_steps: MAX_STEPS,
        }
    }
}

impl PlannerConfig {
    /// Pin the recipe used to produce `item`
    pub fn choose(mut self, item: impl Into<String>, slug: impl Into<String>) -> Self {
        self.recipe_choice.insert(item.into(), slug.into());
        self
    }
}

/// Per-minute totals of a production plan.
///
/// `demand` keeps what is still needed (positive, raw materials nobody
/// produces) and what is left over (negative, byproducts).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanTotals {
    pub demand: IndexMap<String, f64>,
    /// Device name to number of machines
    pub machines: IndexMap<String, f64>,
    /// Recipe slug to runs per minute
    pub recipe_runs: IndexMap<String, f64>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Max steps reached after {0} expansions (recipe loop / cycle?)")]
    StepLimit(usize),
}

/// Outcome of [`build_plan`]; a failed plan still carries the totals
/// reached so far.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanResult {
    Complete(PlanTotals),
    Failed { error: PlanError, totals: PlanTotals },
}

impl PlanResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, PlanResult::Complete(_))
    }

    pub fn totals(&self) -> &PlanTotals {
        match self {
            PlanResult::Complete(totals) => totals,
            PlanResult::Failed { totals, .. } => totals,
        }
    }
}

/// Work out what it takes to make `target_per_min` of `target_item`.
///
/// Repeatedly picks the oldest item with positive demand that some recipe
/// produces, runs that recipe often enough to cover it, and books its
/// outputs against demand and its inputs as new demand. Items without a
/// producer stay in `demand` as raw requirements.
pub fn build_plan(
    target_item: &str,
    target_per_min: f64,
    recipes: &[ParsedRecipe],
    config: &PlannerConfig,
) -> PlanResult {
    let producers = index_producers(recipes);

    let mut totals = PlanTotals::default();
    totals.demand.insert(target_item.to_string(), target_per_min);

    for _ in 0..config.max_steps {
        let Some((item, need)) = next_item(&totals.demand, &producers) else {
            return PlanResult::Complete(totals);
        };

        let recipe = choose_recipe(&item, &producers[item.as_str()], config);
        let Some(output) = recipe.outputs.iter().find(|o| o.item == item) else {
            continue;
        };
        let runs = need / f64::from(output.amount);
        debug!("{}: {} runs/min of {} for {}", item, runs, recipe.slug, need);

        add(&mut totals.recipe_runs, &recipe.slug, runs);
        let machines = runs * recipe.crafting_s as f64 / 60.0 / config.factory_speed_mult;
        add(&mut totals.machines, &recipe.device, machines);

        for output in &recipe.outputs {
            add(&mut totals.demand, &output.item, -runs * f64::from(output.amount));
        }
        for input in &recipe.inputs {
            add(&mut totals.demand, &input.item, runs * f64::from(input.amount));
        }
        totals.demand.retain(|_, amount| amount.abs() >= EPSILON);
    }

    if next_item(&totals.demand, &producers).is_none() {
        return PlanResult::Complete(totals);
    }
    PlanResult::Failed {
        error: PlanError::StepLimit(config.max_steps),
        totals,
    }
}

/// Recipes by produced item, in collection order. Zero-amount outputs are
/// not counted as producing anything.
fn index_producers(recipes: &[ParsedRecipe]) -> HashMap<&str, Vec<&ParsedRecipe>> {
    let mut producers: HashMap<&str, Vec<&ParsedRecipe>> = HashMap::new();
    for recipe in recipes {
        for output in recipe.outputs.iter().filter(|o| o.amount > 0) {
            producers.entry(output.item.as_str()).or_default().push(recipe);
        }
    }
    producers
}

fn next_item(
    demand: &IndexMap<String, f64>,
    producers: &HashMap<&str, Vec<&ParsedRecipe>>,
) -> Option<(String, f64)> {
    demand
        .iter()
        .find(|(item, amount)| **amount > EPSILON && producers.contains_key(item.as_str()))
        .map(|(item, amount)| (item.clone(), *amount))
}

fn choose_recipe<'a>(
    item: &str,
    candidates: &[&'a ParsedRecipe],
    config: &PlannerConfig,
) -> &'a ParsedRecipe {
    config
        .recipe_choice
        .get(item)
        .and_then(|slug| candidates.iter().copied().find(|r| &r.slug == slug))
        .unwrap_or(candidates[0])
}

fn add(map: &mut IndexMap<String, f64>, key: &str, value: f64) {
    *map.entry(key.to_string()).or_insert(0.0) += value;
}
