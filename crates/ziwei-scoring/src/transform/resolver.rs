//! TransformationResolver: derives the four layers from the chart and the
//! evaluation parameters.
//!
//! Missing inputs never fail here. A layer whose stem cannot be derived is
//! returned empty and the rest of the evaluation carries on without it.

use serde::Serialize;
use tracing::debug;
use ziwei_core::constants::{DECADE_COUNT, DECADE_SPAN, POSITION_COUNT};
use ziwei_core::cyclic;
use ziwei_core::types::{Branch, ElementClass, Gender, Position, Stem};
use ziwei_core::NatalChart;

use super::layer::{LayerDetail, LayerKind, TransformationLayer, TransformationSet};

/// Natal layer from the birth-year stem.
pub fn compute_natal(year_stem: Option<Stem>) -> TransformationLayer {
    match year_stem {
        Some(stem) => TransformationLayer::from_stem(LayerKind::Natal, stem),
        None => TransformationLayer::empty(LayerKind::Natal),
    }
}

/// Yang-stem males and yin-stem females rotate forward around the ring.
pub fn rotates_forward(year_stem: Stem, gender: Gender) -> bool {
    year_stem.is_yang() == (gender == Gender::Male)
}

/// Stem of the soul position: the 寅 reference stem for the birth year,
/// advanced by the soul branch's ring index.
pub fn soul_stem(year_stem: Stem, soul_branch: Branch) -> Stem {
    year_stem
        .reference_stem()
        .advance(soul_branch.ring_index() as i64)
}

/// Index of the ten-year span containing `age`, if any.
fn span_index(element_class: ElementClass, age: i64) -> Option<u32> {
    let start = i64::from(element_class.start_age());
    if age < start {
        return None;
    }
    let k = (age - start) / i64::from(DECADE_SPAN);
    u32::try_from(k).ok().filter(|k| *k < DECADE_COUNT)
}

fn decadal_position(k: u32, forward: bool) -> Position {
    let direction = if forward { 1 } else { -1 };
    Position::at(direction * i64::from(k))
}

/// Decadal layer for `age`.
pub fn compute_decadal(chart: &NatalChart, age: i64, gender: Gender) -> TransformationLayer {
    let (Some(year_stem), Some(soul_branch), Some(element_class)) =
        (chart.year_stem(), chart.soul_branch(), chart.element_class())
    else {
        debug!(layer = ?LayerKind::Decadal, "missing stem inputs, layer left empty");
        return TransformationLayer::empty(LayerKind::Decadal);
    };
    let Some(k) = span_index(element_class, age) else {
        debug!(age, element_class = %element_class, "age outside decadal spans");
        return TransformationLayer::empty(LayerKind::Decadal);
    };

    let forward = rotates_forward(year_stem, gender);
    let position = decadal_position(k, forward);
    let stem = soul_stem(year_stem, soul_branch).advance(position.ring_index() as i64);
    let start_age = element_class.start_age() + k * DECADE_SPAN;

    TransformationLayer::from_stem(LayerKind::Decadal, stem)
        .with_position(Some(position))
        .with_detail(LayerDetail::Decadal {
            span_index: k,
            start_age,
            end_age: start_age + DECADE_SPAN - 1,
            forward,
        })
}

/// Annual layer for `target_year`.
///
/// The stem and branch always resolve; the position needs the soul branch
/// and is left unset without it.
pub fn compute_annual(target_year: i64, soul_branch: Option<Branch>) -> TransformationLayer {
    let stem = Stem::from_year(target_year);
    let branch = Branch::from_year(target_year);
    let position = soul_branch.map(|soul| {
        let steps = cyclic::offset(soul.ring_index(), branch.ring_index(), POSITION_COUNT);
        Position::at(steps as i64)
    });
    TransformationLayer::from_stem(LayerKind::Annual, stem)
        .with_branch(Some(branch))
        .with_position(position)
}

/// Minor-limit (personal focus) layer for `age`.
pub fn compute_minor_limit(
    age: i64,
    gender: Gender,
    year_stem: Option<Stem>,
    soul_branch: Option<Branch>,
) -> TransformationLayer {
    let (Some(year_stem), Some(soul_branch)) = (year_stem, soul_branch) else {
        debug!(layer = ?LayerKind::MinorLimit, "missing stem inputs, layer left empty");
        return TransformationLayer::empty(LayerKind::MinorLimit);
    };

    let yearly_index = cyclic::wrap(age - 1, POSITION_COUNT);
    let forward = rotates_forward(year_stem, gender);
    let ring_index = if forward {
        yearly_index
    } else {
        cyclic::mirror(yearly_index, POSITION_COUNT)
    };
    let position = Position::at(ring_index as i64);
    let stem = soul_stem(year_stem, soul_branch).advance(ring_index as i64);

    TransformationLayer::from_stem(LayerKind::MinorLimit, stem)
        .with_position(Some(position))
        .with_detail(LayerDetail::MinorLimit {
            yearly_index: yearly_index as u32,
            forward,
        })
}

/// Resolve all four layers.
pub fn resolve_all(
    chart: &NatalChart,
    age: i64,
    gender: Gender,
    target_year: i64,
) -> TransformationSet {
    TransformationSet {
        natal: compute_natal(chart.year_stem()),
        decadal: compute_decadal(chart, age, gender),
        annual: compute_annual(target_year, chart.soul_branch()),
        minor_limit: compute_minor_limit(age, gender, chart.year_stem(), chart.soul_branch()),
    }
}

/// One ten-year span and the position it activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadalSpan {
    pub index: u32,
    pub start_age: u32,
    pub end_age: u32,
    pub position: Position,
}

/// All twelve decadal spans for a chart, in age order.
pub fn decadal_spans(element_class: ElementClass, gender: Gender, year_stem: Stem) -> Vec<DecadalSpan> {
    let forward = rotates_forward(year_stem, gender);
    (0..DECADE_COUNT)
        .map(|k| {
            let start_age = element_class.start_age() + k * DECADE_SPAN;
            DecadalSpan {
                index: k,
                start_age,
                end_age: start_age + DECADE_SPAN - 1,
                position: decadal_position(k, forward),
            }
        })
        .collect()
}

/// Stateless facade over the layer functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformationResolver;

impl TransformationResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(
        &self,
        chart: &NatalChart,
        age: i64,
        gender: Gender,
        target_year: i64,
    ) -> TransformationSet {
        resolve_all(chart, age, gender, target_year)
    }
}
