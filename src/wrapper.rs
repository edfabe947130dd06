use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};
use pyo3::wrap_pyfunction;

use crate::{
    config::{ClosureCheck, MiningConfig},
    error::Error,
    miner::mine,
    output::ItemsetSupport,
};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn mining_config(min_support: f64, max_len: Option<usize>) -> MiningConfig {
    let config = MiningConfig::new(min_support);
    match max_len {
        Some(max_len) => config.with_max_len(max_len),
        None => config,
    }
}

/// `{frozenset(items): support}`
fn convert_itemset_supports(
    py: Python,
    patterns: Vec<ItemsetSupport<String>>,
) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    for pattern in patterns {
        let itemset = PyFrozenSet::new(py, &pattern.items)?;
        dict.set_item(itemset, pattern.support)?;
    }
    Ok(dict.into())
}

/// Frequent itemsets of a list of transactions.
#[pyfunction(max_len = "None")]
#[pyo3(text_signature = "(transactions, min_support, max_len=None)")]
fn frequent_itemsets(
    py: Python,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    max_len: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let result = mine(transactions, &mining_config(min_support, max_len))?;
    convert_itemset_supports(py, result.frequent_itemsets())
}

/// Closed frequent itemsets of a list of transactions.
///
/// `closure` is one of `next_level` (default), `all_levels` or `require_next_level`.
#[pyfunction(max_len = "None", closure = "None")]
#[pyo3(text_signature = "(transactions, min_support, max_len=None, closure=None)")]
fn closed_itemsets(
    py: Python,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    max_len: Option<usize>,
    closure: Option<&str>,
) -> PyResult<Py<PyDict>> {
    let closure = match closure {
        Some(closure) => closure.parse::<ClosureCheck>()?,
        None => ClosureCheck::default(),
    };
    let config = mining_config(min_support, max_len).with_closure(closure);
    let result = mine(transactions, &config)?;
    convert_itemset_supports(py, result.closed_itemsets())
}

#[pymodule]
fn closed_apriori(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    m.add_function(wrap_pyfunction!(closed_itemsets, m)?)?;
    Ok(())
}
