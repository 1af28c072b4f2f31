// Search engine: drives the expander and matcher and aggregates matches
// per input position.

mod plan;

use wordlist_core::{CharacterType, InputText, MatchSet};

use crate::dictionary::Dictionary;
use crate::expander::expand_bounded;
use crate::matcher::{EntryMatcher, MatchError};

use plan::LookupPlan;

/// Number of lookup workers used when none is configured.
pub const DEFAULT_THREADS: usize = 4;

/// How repeated candidates are treated within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DedupPolicy {
    /// A candidate string is looked up once. Only the first position
    /// (in position order, shortest candidate first) where it occurs
    /// receives its matches; later occurrences contribute nothing.
    #[default]
    FirstOccurrence,
    /// A candidate string is looked up once and its matches are recorded at
    /// every position where it occurs.
    Shared,
    /// Every candidate at every position is looked up. Same result as
    /// `Shared`, with repeated scans.
    Off,
}

impl std::str::FromStr for DedupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "first-occurrence" => Ok(DedupPolicy::FirstOccurrence),
            "shared" => Ok(DedupPolicy::Shared),
            "off" | "none" => Ok(DedupPolicy::Off),
            _ => Err(format!(
                "invalid dedup policy '{s}' (expected first, shared or off)"
            )),
        }
    }
}

/// Search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Dictionary field the candidates are matched against.
    pub character_type: CharacterType,
    /// Handling of repeated candidates.
    pub dedup: DedupPolicy,
    /// Longest candidate to look up, in characters. `None` is unbounded.
    pub max_word_length: Option<usize>,
    /// Number of lookup workers. `0` and `1` run sequentially. Ignored
    /// without the `parallel` feature.
    pub threads: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            character_type: CharacterType::default(),
            dedup: DedupPolicy::default(),
            max_word_length: None,
            threads: DEFAULT_THREADS,
        }
    }
}

/// Error that aborts a search. No partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Lookup(#[from] MatchError),

    #[error("failed to start lookup workers: {0}")]
    ThreadPool(String),
}

/// Searches every substring of an input text in a dictionary.
///
/// All per-search state (candidates, seen set, results) lives inside one
/// [`SearchEngine::search`] call.
pub struct SearchEngine<'a> {
    dictionary: &'a dyn Dictionary,
    options: SearchOptions,
}

impl<'a> SearchEngine<'a> {
    pub fn new(dictionary: &'a dyn Dictionary, options: SearchOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Find all dictionary lines matching a substring of `text`, keyed by
    /// the position where the substring starts.
    ///
    /// The result has exactly one slot per input character. For a fixed
    /// input, options and dictionary the result is deterministic, whether
    /// lookups run sequentially or in parallel.
    pub fn search(&self, text: &InputText) -> Result<MatchSet, SearchError> {
        let candidates = expand_bounded(text, self.options.max_word_length);
        let plan = LookupPlan::build(&candidates, self.options.dedup);
        let matcher = EntryMatcher::new(self.dictionary, self.options.character_type);

        let results = self.run_lookups(&matcher, &plan.lookups)?;

        let mut match_set = MatchSet::with_positions(text.len());
        for &(pos, idx) in &plan.assignments {
            for line in &results[idx] {
                match_set.push_unique(pos, line.clone());
            }
        }

        log::info!(
            "searched {} position(s), {} candidate(s): {} scan(s), {} skipped, {} match(es)",
            text.len(),
            candidates.iter().map(Vec::len).sum::<usize>(),
            plan.lookups.len(),
            plan.skipped,
            match_set.total_matches()
        );

        Ok(match_set)
    }

    /// Perform each planned scan. Results are indexed like `lookups`.
    fn run_lookups(
        &self,
        matcher: &EntryMatcher<'_>,
        lookups: &[&str],
    ) -> Result<Vec<Vec<String>>, SearchError> {
        #[cfg(feature = "parallel")]
        if self.options.threads > 1 && lookups.len() > 1 {
            return run_parallel(matcher, lookups, self.options.threads);
        }

        lookups
            .iter()
            .map(|candidate| matcher.match_candidate(candidate).map_err(SearchError::from))
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn run_parallel(
    matcher: &EntryMatcher<'_>,
    lookups: &[&str],
    threads: usize,
) -> Result<Vec<Vec<String>>, SearchError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| SearchError::ThreadPool(e.to_string()))?;

    log::debug!("running {} lookup(s) on {threads} worker(s)", lookups.len());

    // Indexed collect keeps results aligned with `lookups`.
    pool.install(|| {
        lookups
            .par_iter()
            .map(|candidate| matcher.match_candidate(candidate).map_err(SearchError::from))
            .collect()
    })
}
