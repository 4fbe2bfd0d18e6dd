use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{LongestSubstring, SearchError, Strategy};

impl From<SearchError> for PyErr {
    fn from(err: SearchError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Longest substring of `needle` found in `haystack`. `None` for either
/// argument raises `ValueError`, as does an unknown strategy name.
#[pyfunction]
#[pyo3(signature = (needle, haystack, strategy = "from-longest"))]
fn find_longest_substring(
    needle: Option<&str>,
    haystack: Option<&str>,
    strategy: &str,
) -> PyResult<String> {
    let strategy: Strategy = strategy.parse()?;
    Ok(strategy.find_checked(needle, haystack)?.to_string())
}

#[pyfunction]
fn strategies() -> Vec<&'static str> {
    Strategy::ALL.iter().map(|s| s.name()).collect()
}

#[pymodule]
fn longsub_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_longest_substring, m)?)?;
    m.add_function(wrap_pyfunction!(strategies, m)?)?;
    Ok(())
}
