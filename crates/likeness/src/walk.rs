//! Traversal state shared by the object and sequence comparers.
//!
//! A [`Walk`] is a depth-first search over the expected value's shape. The
//! path it tracks is used for logging and for the hardening errors only;
//! mismatch descriptions never include it.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use likeness_types::Mismatch;

use crate::comparable::Comparable;
use crate::config::CompareConfig;
use crate::error::{CompareError, CompareResult};

/// One step of the descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    Root,
    Member(&'static str),
    Position(usize),
}

/// State of one top-level comparison call.
pub(crate) struct Walk<'c> {
    pub(crate) config: &'c CompareConfig,
    path: Vec<Segment>,
    /// Identity pairs of shared nodes currently being compared.
    active: HashSet<(usize, usize)>,
}

impl<'c> Walk<'c> {
    pub(crate) fn new(config: &'c CompareConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            active: HashSet::new(),
        }
    }

    /// Descents below the root.
    pub(crate) fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Run `step` as the root of a comparison.
    pub(crate) fn root<F>(&mut self, step: F) -> CompareResult<()>
    where
        F: FnOnce(&mut Self) -> CompareResult<()>,
    {
        self.enter(Segment::Root, None, step)
    }

    /// Run `step` one level deeper, guarding against cycles and the
    /// configured depth limit.
    pub(crate) fn descend<F>(
        &mut self,
        segment: Segment,
        expected: &dyn Comparable,
        actual: &dyn Comparable,
        step: F,
    ) -> CompareResult<()>
    where
        F: FnOnce(&mut Self) -> CompareResult<()>,
    {
        let pair = expected.identity().zip(actual.identity());
        self.enter(segment, pair, step)
    }

    fn enter<F>(
        &mut self,
        segment: Segment,
        pair: Option<(usize, usize)>,
        step: F,
    ) -> CompareResult<()>
    where
        F: FnOnce(&mut Self) -> CompareResult<()>,
    {
        self.path.push(segment);

        if let Some(limit) = self.config.max_depth {
            if self.depth() > limit {
                let path = self.path_string();
                self.path.pop();
                debug!(%path, limit, "maximum comparison depth exceeded");
                return Err(CompareError::DepthExceeded { limit, path });
            }
        }

        if let Some(pair) = pair {
            if !self.active.insert(pair) {
                let path = self.path_string();
                self.path.pop();
                debug!(%path, "cycle detected");
                return Err(CompareError::Cycle { path });
            }
        }

        let result = step(self);

        if let Some(pair) = pair {
            self.active.remove(&pair);
        }
        self.path.pop();
        result
    }

    /// Record a divergence and turn it into the error that ends the walk.
    pub(crate) fn fail(&self, mismatch: Mismatch) -> CompareError {
        debug!(
            path = %self.path_string(),
            expected = %mismatch.expected,
            actual = %mismatch.actual,
            "mismatch detected"
        );
        CompareError::Mismatch(mismatch)
    }

    pub(crate) fn path_string(&self) -> String {
        Path(&self.path).to_string()
    }
}

struct Path<'a>(&'a [Segment]);

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "$");
        }
        for segment in self.0 {
            match segment {
                Segment::Root => write!(f, "$")?,
                Segment::Member(name) => write!(f, ".{name}")?,
                Segment::Position(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
