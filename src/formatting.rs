//! Pretty-printing of lumi masks.
//!
//! The output looks like a json object with one run per line. Ranges of a run are
//! padded to the width of the longest range of that same run and wrapped every
//! `per_line` ranges, with continuation lines aligned under the opening bracket:
//!
//! ```text
//! {
//!   "315252": [[1,2],      [4,10],     [12,100],   [101,101],  [200,250],
//!              [300,301],  [1000,1200]]
//! }
//! ```
use crate::lumi_map::LumiMap;
use serde_json::Value;

/// Ranges printed on one line before wrapping.
pub const DEFAULT_PER_LINE: usize = 5;

/// Options for pretty-printing a lumi mask.
///
/// # Examples
///
/// ```
/// use lumimask::formatting::FormatOptions;
///
/// let options = FormatOptions::builder().per_line(10).build();
/// assert_eq!(options.per_line, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of ranges per line. 0 never wraps.
    pub per_line: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            per_line: DEFAULT_PER_LINE,
        }
    }
}

impl FormatOptions {
    pub fn builder() -> FormatOptionsBuilder {
        FormatOptionsBuilder::new()
    }
}

pub struct FormatOptionsBuilder {
    per_line: usize,
}

impl Default for FormatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatOptionsBuilder {
    pub fn new() -> Self {
        Self {
            per_line: DEFAULT_PER_LINE,
        }
    }

    /// Set the number of ranges per line
    pub fn per_line(mut self, per_line: usize) -> Self {
        self.per_line = per_line;
        self
    }

    pub fn build(self) -> FormatOptions {
        FormatOptions {
            per_line: self.per_line,
        }
    }
}

/// Lay out pre-serialized tokens. Each token is followed by a comma and then padded
/// with spaces to the width of the longest token. After every `per_line`-th token a
/// newline and `indent` are inserted. The trailing comma and padding of the last
/// token are left in place.
pub fn wrap_tokens(tokens: &[String], per_line: usize, indent: &str) -> String {
    let longest = tokens.iter().map(|t| t.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(token);
        out.push(',');
        out.push_str(&" ".repeat(longest - token.chars().count()));
        if per_line > 0 && (i + 1) % per_line == 0 {
            out.push('\n');
            out.push_str(indent);
        }
    }
    out
}

/// Drop trailing whitespace, then the last character.
/// On a run with no ranges this removes the opening bracket.
fn trim_trailing_comma(s: &mut String) {
    s.truncate(s.trim_end().len());
    s.pop();
}

/// Format a single run as `  "run": [...],\n`.
pub fn format_run(run: &str, ranges: &[Value], per_line: usize) -> String {
    let tokens: Vec<String> = ranges.iter().map(|r| r.to_string()).collect();
    let mut line = format!("  \"{}\": [", run);
    let indent = " ".repeat(line.chars().count());
    line.push_str(&wrap_tokens(&tokens, per_line, &indent));
    trim_trailing_comma(&mut line);
    line.push_str("],\n");
    line
}

/// Pretty-print `lumis` with the default options.
/// `None` gives an empty string, an empty map gives `{}`.
pub fn stringify_lumis(lumis: Option<&LumiMap>) -> String {
    stringify_lumis_with(lumis, &FormatOptions::default())
}

pub fn stringify_lumis_with(lumis: Option<&LumiMap>, options: &FormatOptions) -> String {
    let Some(lumis) = lumis else {
        return String::new();
    };
    let mut body: String = lumis
        .iter()
        .map(|(run, ranges)| format_run(run, ranges, options.per_line))
        .collect();
    if !lumis.is_empty() {
        trim_trailing_comma(&mut body);
        body.insert(0, '\n');
        body.push('\n');
    }
    format!("{{{}}}", body)
}
