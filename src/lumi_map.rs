//! LumiMap maps a run number (kept as its string key) to the lumi-section ranges of that run.
//! Ranges are kept as raw json values so that whatever shape the producer sent survives
//! formatting untouched. Key order is insertion order.
use crate::error::LumiError;
use linear_map::LinearMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;

/// An inclusive `[start, end]` range of lumi sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct LumiRange {
    pub start: u64,
    pub end: u64,
}

impl LumiRange {
    pub fn new(start: u64, end: u64) -> Self {
        LumiRange { start, end }
    }

    #[inline]
    pub fn contains(&self, lumi: u64) -> bool {
        self.start <= lumi && lumi <= self.end
    }

    /// Number of lumi sections covered. An inverted range covers nothing and
    /// `[0, u64::MAX]` saturates at `u64::MAX`.
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a range back from its json form. Anything but a two element array of
    /// non-negative integers gives None.
    pub fn from_value(v: &Value) -> Option<Self> {
        match v.as_array()?.as_slice() {
            [start, end] => Some(LumiRange::new(start.as_u64()?, end.as_u64()?)),
            _ => None,
        }
    }
}

impl From<[u64; 2]> for LumiRange {
    fn from(pair: [u64; 2]) -> Self {
        LumiRange::new(pair[0], pair[1])
    }
}

impl From<LumiRange> for [u64; 2] {
    fn from(r: LumiRange) -> Self {
        [r.start, r.end]
    }
}

impl From<LumiRange> for Value {
    fn from(r: LumiRange) -> Self {
        Value::Array(vec![Value::from(r.start), Value::from(r.end)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LumiMap {
    runs: LinearMap<String, Vec<Value>>,
}

impl LumiMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a json object of the form `{"run": [[start, end], ...], ...}`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LumiError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Like `from_reader`, but a json `null` decodes to None.
    pub fn from_reader_nullable<R: Read>(reader: R) -> Result<Option<Self>, LumiError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, LumiError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Insert or replace the ranges of `run`. A replaced run keeps its position.
    pub fn insert<S: Into<String>>(&mut self, run: S, ranges: Vec<Value>) -> Option<Vec<Value>> {
        self.runs.insert(run.into(), ranges)
    }

    pub fn insert_ranges<S: Into<String>>(
        &mut self,
        run: S,
        ranges: &[LumiRange],
    ) -> Option<Vec<Value>> {
        self.insert(run, ranges.iter().copied().map(Value::from).collect())
    }

    pub fn get(&self, run: &str) -> Option<&[Value]> {
        self.runs.get(run).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.runs.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn runs(&self) -> impl Iterator<Item = &str> {
        self.runs.keys().map(|k| k.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Well-formed ranges of `run`. Malformed entries are skipped.
    pub fn ranges<'a>(&'a self, run: &str) -> impl Iterator<Item = LumiRange> + 'a {
        self.runs
            .get(run)
            .into_iter()
            .flatten()
            .filter_map(LumiRange::from_value)
    }

    /// Whether `lumi` of `run` is covered by any well-formed range.
    pub fn contains(&self, run: &str, lumi: u64) -> bool {
        self.ranges(run).any(|r| r.contains(lumi))
    }

    /// Total number of lumi sections covered by well-formed ranges, saturating at `u64::MAX`.
    pub fn lumi_count(&self) -> u64 {
        let mut total: u64 = 0;
        for (run, ranges) in self.iter() {
            for v in ranges {
                match LumiRange::from_value(v) {
                    Some(r) => total = total.saturating_add(r.len()),
                    None => log::warn!("ignoring malformed range {} for run {}", v, run),
                }
            }
        }
        total
    }
}
