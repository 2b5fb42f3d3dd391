//! Pair search: find two indices whose values combine to a target
//!
//! Both strategies report the pair with the smallest right index `j`, and for
//! that `j` the smallest left index `i`. The hash strategy gets there by
//! keeping only the first index at which each value was seen, so the first
//! complement observed wins.

use super::Strategy;
use crate::snapshot::{InvariantViolation, PairAction as A, PairState, Recorder, Traced};

/// How two numbers combine into the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOp {
    Sum,
    Product,
}

/// What an earlier number must be for the current one to complete a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Complement {
    Exact(i64),
    /// `0 * x == 0` for every earlier `x`
    Any,
    Impossible,
}

impl PairOp {
    fn combine(self, a: i64, b: i64) -> Option<i64> {
        match self {
            PairOp::Sum => a.checked_add(b),
            PairOp::Product => a.checked_mul(b),
        }
    }

    fn complement(self, target: i64, num: i64) -> Complement {
        match self {
            PairOp::Sum => target
                .checked_sub(num)
                .map_or(Complement::Impossible, Complement::Exact),
            PairOp::Product if num == 0 => {
                if target == 0 {
                    Complement::Any
                } else {
                    Complement::Impossible
                }
            }
            PairOp::Product => match target.checked_rem(num) {
                Some(0) => target
                    .checked_div(num)
                    .map_or(Complement::Impossible, Complement::Exact),
                _ => Complement::Impossible,
            },
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            PairOp::Sum => "+",
            PairOp::Product => "*",
        }
    }

    fn name(self) -> &'static str {
        match self {
            PairOp::Sum => "sum",
            PairOp::Product => "product",
        }
    }
}

/// Indices `(i, j)`, `i < j`, with `nums[i] + nums[j] == target`
pub fn pair_sum(
    nums: &[i64],
    target: i64,
    strategy: Strategy,
) -> Result<Traced<Option<(usize, usize)>>, InvariantViolation> {
    pair_search(nums, target, PairOp::Sum, strategy)
}

/// Indices `(i, j)`, `i < j`, with `nums[i] * nums[j] == target`
pub fn pair_product(
    nums: &[i64],
    target: i64,
    strategy: Strategy,
) -> Result<Traced<Option<(usize, usize)>>, InvariantViolation> {
    pair_search(nums, target, PairOp::Product, strategy)
}

pub fn pair_search(
    nums: &[i64],
    target: i64,
    op: PairOp,
    strategy: Strategy,
) -> Result<Traced<Option<(usize, usize)>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = PairState {
        target,
        ..PairState::default()
    };

    rec.emit(
        A::Initialize,
        format!("Find two numbers whose {} is {}", op.name(), target),
        match strategy {
            Strategy::BruteForce => {
                "Try every earlier partner for each number: O(n²) time, O(1) space."
            }
            Strategy::SetOptimized => concat!(
                "Remember each number's index in a hash map and look up the complement: ",
                "O(n) time, O(n) space."
            ),
        },
        state.clone(),
    );

    let found = match strategy {
        Strategy::BruteForce => brute_force(nums, target, op, &mut rec, &mut state),
        Strategy::SetOptimized => hashed(nums, target, op, &mut rec, &mut state),
    };

    if let Some((i, j)) = found {
        state.pair = Some((i, j));
        rec.emit_result(
            A::PairFound,
            format!("nums[{}] {} nums[{}] = {}", i, op.symbol(), j, target),
            format!(
                "{} {} {} = {}. Return [{}, {}].",
                nums[i],
                op.symbol(),
                nums[j],
                target,
                i,
                j
            ),
            state,
            Some((i, j)),
        );
        return rec.finish(found);
    }

    state.index = None;
    state.inner_index = None;
    state.current = None;
    state.complement = None;
    rec.emit_result(
        A::Complete,
        format!("No pair has {} {}", op.name(), target),
        "Every number was checked without finding a partner.",
        state,
        None::<(usize, usize)>,
    );
    rec.finish(None)
}

fn brute_force(
    nums: &[i64],
    target: i64,
    op: PairOp,
    rec: &mut Recorder,
    state: &mut PairState,
) -> Option<(usize, usize)> {
    for j in 0..nums.len() {
        state.inner_index = Some(j);
        state.current = Some(nums[j]);
        for i in 0..j {
            state.index = Some(i);
            let combined = op.combine(nums[i], nums[j]);
            let hit = combined == Some(target);
            let detail = match combined {
                Some(v) => format!(
                    "{} {} {} = {}{}",
                    nums[i],
                    op.symbol(),
                    nums[j],
                    v,
                    if hit { ", a match." } else { ", not the target." }
                ),
                None => "The result overflows, so it cannot match.".to_string(),
            };
            rec.emit(
                A::Compare,
                format!("Try nums[{}] {} nums[{}]", i, op.symbol(), j),
                detail,
                state.clone(),
            );
            if hit {
                return Some((i, j));
            }
        }
    }
    None
}

fn hashed(
    nums: &[i64],
    target: i64,
    op: PairOp,
    rec: &mut Recorder,
    state: &mut PairState,
) -> Option<(usize, usize)> {
    for (j, &num) in nums.iter().enumerate() {
        state.index = Some(j);
        state.current = Some(num);

        let complement = op.complement(target, num);
        let partner = match complement {
            Complement::Exact(c) => state.previous.get(&c).copied(),
            Complement::Any if j > 0 => Some(0),
            _ => None,
        };
        state.complement = match complement {
            Complement::Exact(c) => Some(c),
            _ => None,
        };

        let detail = match (complement, partner) {
            (Complement::Exact(c), Some(i)) => format!("{} was seen at index {}.", c, i),
            (Complement::Exact(c), None) => format!("{} has not been seen yet.", c),
            (Complement::Any, Some(_)) => {
                "Any earlier number completes a zero product.".to_string()
            }
            (Complement::Any, None) => "No earlier number to pair with.".to_string(),
            (Complement::Impossible, _) => format!("No integer complement of {} exists.", num),
        };
        rec.emit(
            A::CheckComplement,
            format!("Check the complement of nums[{}] = {}", j, num),
            detail,
            state.clone(),
        );

        if let Some(i) = partner {
            state.index = Some(i);
            state.inner_index = Some(j);
            return Some((i, j));
        }

        let stored = *state.previous.entry(num).or_insert(j);
        let description = if stored == j {
            format!("Store {} -> index {}", num, j)
        } else {
            format!("Keep {} -> index {}", num, stored)
        };
        rec.emit(
            A::Store,
            description,
            "Keep going; a later number may need this one.",
            state.clone(),
        );
    }
    None
}
