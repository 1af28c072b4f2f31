// Lookup plan: which dictionary scans to run and where their results go

use hashbrown::HashMap;
use wordlist_core::Position;

use super::DedupPolicy;

/// Distinct dictionary scans plus the positions that receive their results.
///
/// Built sequentially in position order, then shortest candidate first, so
/// first-occurrence attribution does not depend on how the scans are later
/// executed.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct LookupPlan<'c> {
    /// Candidate strings to scan for, in planning order.
    pub lookups: Vec<&'c str>,
    /// `(position, lookup index)` in position/length order.
    pub assignments: Vec<(Position, usize)>,
    /// Candidates skipped because an earlier position already looked them up.
    pub skipped: usize,
}

impl<'c> LookupPlan<'c> {
    pub fn build(candidates: &'c [Vec<String>], dedup: DedupPolicy) -> Self {
        let mut plan = LookupPlan::default();
        let mut seen: HashMap<&'c str, usize> = HashMap::new();

        for (pos, list) in candidates.iter().enumerate() {
            for candidate in list {
                let candidate = candidate.as_str();
                match dedup {
                    DedupPolicy::Off => {
                        let idx = plan.push_lookup(candidate);
                        plan.assignments.push((pos, idx));
                    }
                    DedupPolicy::FirstOccurrence => {
                        if seen.contains_key(candidate) {
                            plan.skipped += 1;
                            continue;
                        }
                        let idx = plan.push_lookup(candidate);
                        seen.insert(candidate, idx);
                        plan.assignments.push((pos, idx));
                    }
                    DedupPolicy::Shared => {
                        let idx = match seen.get(candidate) {
                            Some(&idx) => idx,
                            None => {
                                let idx = plan.push_lookup(candidate);
                                seen.insert(candidate, idx);
                                idx
                            }
                        };
                        plan.assignments.push((pos, idx));
                    }
                }
            }
        }

        plan
    }

    fn push_lookup(&mut self, candidate: &'c str) -> usize {
        self.lookups.push(candidate);
        self.lookups.len() - 1
    }
}
