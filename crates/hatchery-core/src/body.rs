//! Unit bodies, part costs, and body composition.

use crate::config::ConfigError;
use crate::fixed::{Fixed64, f64_to_fixed64, scale_energy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most parts a single unit body may carry.
pub const MAX_BODY_PARTS: usize = 50;

/// Minimal worker body every composed body starts from.
pub const BASE_BODY: [PartType; 3] = [PartType::Work, PartType::Carry, PartType::Move];

// ---------------------------------------------------------------------------
// Part types
// ---------------------------------------------------------------------------

/// A single body part. Each has a fixed energy cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    Move,
    Work,
    Carry,
    Attack,
    RangedAttack,
    Heal,
    Claim,
    Tough,
}

impl PartType {
    pub const ALL: [PartType; 8] = [
        PartType::Move,
        PartType::Work,
        PartType::Carry,
        PartType::Attack,
        PartType::RangedAttack,
        PartType::Heal,
        PartType::Claim,
        PartType::Tough,
    ];

    /// Energy needed to produce one part of this type.
    pub fn cost(self) -> u32 {
        match self {
            PartType::Move => 50,
            PartType::Work => 100,
            PartType::Carry => 50,
            PartType::Attack => 80,
            PartType::RangedAttack => 150,
            PartType::Heal => 250,
            PartType::Claim => 600,
            PartType::Tough => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PartType::Move => "move",
            PartType::Work => "work",
            PartType::Carry => "carry",
            PartType::Attack => "attack",
            PartType::RangedAttack => "ranged_attack",
            PartType::Heal => "heal",
            PartType::Claim => "claim",
            PartType::Tough => "tough",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// Ordered list of parts defining a unit's capabilities and total cost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(Vec<PartType>);

impl Body {
    pub fn new(parts: Vec<PartType>) -> Self {
        Self(parts)
    }

    /// The `[work, carry, move]` starting body.
    pub fn base() -> Self {
        Self(BASE_BODY.to_vec())
    }

    pub fn parts(&self) -> &[PartType] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, part: PartType) {
        self.0.push(part);
    }

    /// Total energy cost of every part in the body.
    pub fn cost(&self) -> u32 {
        self.0.iter().map(|p| p.cost()).sum()
    }

    /// Number of parts of the given type.
    pub fn count(&self, part: PartType) -> usize {
        self.0.iter().filter(|&&p| p == part).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartType> {
        self.0.iter()
    }
}

impl From<Vec<PartType>> for Body {
    fn from(parts: Vec<PartType>) -> Self {
        Self(parts)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Body plan
// ---------------------------------------------------------------------------

/// Parameters for [`compose_body`]. Validated once at construction and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPlan {
    /// Parts appended per round, in order, each repeated `weight` times.
    priority: Vec<(PartType, u32)>,
    /// Share of the spare capacity spent on extra parts, in `[0, 1]`.
    fill_factor: Fixed64,
}

impl BodyPlan {
    pub fn new(priority: Vec<(PartType, u32)>, fill_factor: Fixed64) -> Result<Self, ConfigError> {
        if fill_factor < Fixed64::ZERO || fill_factor > Fixed64::ONE {
            return Err(ConfigError::FillFactorOutOfRange(fill_factor));
        }
        for (i, (part, _)) in priority.iter().enumerate() {
            if priority[..i].iter().any(|(p, _)| p == part) {
                return Err(ConfigError::DuplicatePart(*part));
            }
        }
        Ok(Self {
            priority,
            fill_factor,
        })
    }

    pub fn priority(&self) -> &[(PartType, u32)] {
        &self.priority
    }

    pub fn fill_factor(&self) -> Fixed64 {
        self.fill_factor
    }
}

impl Default for BodyPlan {
    fn default() -> Self {
        Self {
            priority: vec![
                (PartType::Work, 1),
                (PartType::Carry, 1),
                (PartType::Move, 1),
            ],
            fill_factor: f64_to_fixed64(0.5),
        }
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Build the largest body the plan allows for a room with the given energy
/// capacity.
///
/// Starts from [`BASE_BODY`] and spends `fill_factor` of the remaining
/// capacity on parts, walking `priority` round-robin. Every part is checked
/// against the remaining budget before it is appended, so the result never
/// costs more than the base body plus the budget. Composition stops at the
/// first part that does not fit or at [`MAX_BODY_PARTS`].
pub fn compose_body(energy_capacity: u32, plan: &BodyPlan) -> Body {
    let mut body = Body::base();
    let spare = energy_capacity.saturating_sub(body.cost());
    let mut remaining = scale_energy(spare, plan.fill_factor);

    'rounds: loop {
        let mut added = false;
        for &(part, weight) in &plan.priority {
            for _ in 0..weight {
                if body.len() >= MAX_BODY_PARTS || part.cost() > remaining {
                    break 'rounds;
                }
                body.push(part);
                remaining -= part.cost();
                added = true;
            }
        }
        if !added {
            break;
        }
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(priority: Vec<(PartType, u32)>, factor: f64) -> BodyPlan {
        BodyPlan::new(priority, f64_to_fixed64(factor)).unwrap()
    }

    #[test]
    fn part_costs() {
        assert_eq!(PartType::Work.cost(), 100);
        assert_eq!(PartType::Move.cost(), 50);
        assert_eq!(PartType::Claim.cost(), 600);
        assert_eq!(PartType::Tough.cost(), 10);
    }

    #[test]
    fn body_cost_sums_parts() {
        let body = Body::new(vec![PartType::Work, PartType::Work, PartType::Move]);
        assert_eq!(body.cost(), 250);
        assert_eq!(Body::base().cost(), 200);
        assert_eq!(Body::default().cost(), 0);
    }

    #[test]
    fn body_display_is_comma_separated() {
        let body = Body::new(vec![PartType::RangedAttack, PartType::Move]);
        assert_eq!(body.to_string(), "ranged_attack,move");
    }

    #[test]
    fn compose_base_only_when_no_spare() {
        let body = compose_body(200, &BodyPlan::default());
        assert_eq!(body, Body::base());

        let body = compose_body(150, &BodyPlan::default());
        assert_eq!(body, Body::base());
    }

    #[test]
    fn compose_default_plan_550() {
        // spare = 350, budget = 175: work (100) fits, carry (50) fits,
        // move (50) does not (25 left).
        let body = compose_body(550, &BodyPlan::default());
        assert_eq!(
            body.parts(),
            &[
                PartType::Work,
                PartType::Carry,
                PartType::Move,
                PartType::Work,
                PartType::Carry,
            ]
        );
        assert!(body.cost() <= 200 + 175);
    }

    #[test]
    fn compose_exact_budget_is_spent() {
        // spare = 400, budget = 200 = work + carry + move exactly.
        let body = compose_body(600, &BodyPlan::default());
        assert_eq!(body.len(), 6);
        assert_eq!(body.cost(), 400);
    }

    #[test]
    fn compose_respects_weights() {
        let plan = plan(vec![(PartType::Work, 2), (PartType::Move, 1)], 1.0);
        // spare = 250: work, work (50 left), move (0 left).
        let body = compose_body(450, &plan);
        assert_eq!(body.count(PartType::Work), 3);
        assert_eq!(body.count(PartType::Move), 2);
        assert_eq!(body.cost(), 450);
    }

    #[test]
    fn compose_caps_at_max_parts() {
        let plan = plan(vec![(PartType::Tough, 1)], 1.0);
        let body = compose_body(1_000_000, &plan);
        assert_eq!(body.len(), MAX_BODY_PARTS);
    }

    #[test]
    fn compose_zero_weights_stop() {
        let plan = plan(vec![(PartType::Work, 0)], 1.0);
        let body = compose_body(10_000, &plan);
        assert_eq!(body, Body::base());
    }

    #[test]
    fn compose_zero_fill_factor() {
        let body = compose_body(10_000, &plan(vec![(PartType::Work, 1)], 0.0));
        assert_eq!(body, Body::base());
    }

    #[test]
    fn plan_rejects_out_of_range_factor() {
        let err = BodyPlan::new(vec![], f64_to_fixed64(1.5)).unwrap_err();
        assert!(matches!(err, ConfigError::FillFactorOutOfRange(_)));
        let err = BodyPlan::new(vec![], f64_to_fixed64(-0.1)).unwrap_err();
        assert!(matches!(err, ConfigError::FillFactorOutOfRange(_)));
    }

    #[test]
    fn plan_rejects_duplicate_parts() {
        let err = BodyPlan::new(
            vec![(PartType::Work, 1), (PartType::Move, 1), (PartType::Work, 2)],
            f64_to_fixed64(0.5),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePart(PartType::Work)));
    }
}
