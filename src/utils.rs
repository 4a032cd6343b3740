//! Small string helpers used when presenting requests and datasets.
use serde_json::Value;

const DAS_URL: &str =
    "https://cmsweb.cern.ch/das/request?view=list&limit=50&instance=prod%2Fglobal&input=dataset%3D";

const MISSING_ERROR_MESSAGE: &str = "Error message could not be found in response, most likely SSO cookie has expired. \
Try clicking <a href=\"/relval\" target=\"blank\">here</a>. \
This will open RelVal homepage in a new tab and hopefully refresh your SSO cookie. \
You can then close the newly opened tab, dismiss this alert and try performing same action again.";

/// Number of non-empty lines.
pub fn list_length(text: &str) -> usize {
    text.split('\n').filter(|l| !l.is_empty()).count()
}

/// Split on commas and newlines, trimming each item and dropping empty ones.
pub fn clean_split(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Link to the DAS listing of a dataset.
pub fn das_link(dataset: &str) -> String {
    format!("{}{}", DAS_URL, dataset)
}

/// Release name from a release path, e.g. `el8_amd64_gcc11/CMSSW_13_0_0` -> `CMSSW_13_0_0`.
pub fn parse_release(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// The `data.message` of an error response, or a hint about an expired SSO cookie
/// when the response carries none.
pub fn error_message(response: &Value) -> String {
    match response.pointer("/data/message").and_then(Value::as_str) {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => MISSING_ERROR_MESSAGE.to_string(),
    }
}
