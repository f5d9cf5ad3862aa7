#![allow(clippy::useless_conversion)]
use pyo3::prelude::*;

use crate::analysis;
use crate::goal;
use crate::parser;
use crate::shanten;
use crate::types::{TileCounts, TILE_MAX};

fn to_counts(counts: Vec<i32>) -> PyResult<TileCounts> {
    let len = counts.len();
    counts.try_into().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err(format!(
            "expected {} tile counts, got {}",
            TILE_MAX, len
        ))
    })
}

#[pyclass(name = "Goal", frozen)]
#[derive(Debug, Clone)]
pub struct Goal {
    inner: goal::Goal,
}

#[pymethods]
impl Goal {
    #[getter]
    fn shanten(&self) -> i32 {
        self.inner.shanten
    }

    /// Blocks as `(kind, tiles)` tuples, e.g. `("sequence", [0, 1, 2])`.
    #[getter]
    fn blocks(&self) -> Vec<(String, Vec<u8>)> {
        self.inner
            .blocks
            .iter()
            .map(|b| (format!("{:?}", b.kind()).to_lowercase(), b.tiles()))
            .collect()
    }

    #[getter]
    fn count_vector(&self) -> Vec<i32> {
        self.inner.count_vector.to_vec()
    }

    #[getter]
    fn required_vector(&self) -> Vec<i32> {
        self.inner.required_vector.to_vec()
    }

    #[getter]
    fn throwable_vector(&self) -> Vec<i32> {
        self.inner.throwable_vector.to_vec()
    }

    fn __repr__(&self) -> String {
        let blocks: Vec<String> = self.inner.blocks.iter().map(|b| b.to_string()).collect();
        format!("Goal(shanten={}, blocks=[{}])", self.inner.shanten, blocks.join(", "))
    }
}

#[pyfunction]
#[pyo3(signature = (counts, slack=0, bound=8))]
pub fn analyze_shanten(counts: Vec<i32>, slack: i32, bound: i32) -> PyResult<(i32, Vec<Goal>)> {
    let hand = to_counts(counts)?;
    let analysis = shanten::analyze_shanten_with_option(&hand, slack, bound)?;
    let goals = analysis
        .goals
        .into_iter()
        .map(|inner| Goal { inner })
        .collect();
    Ok((analysis.shanten, goals))
}

#[pyfunction]
pub fn is_tenpai_general(counts: Vec<i32>) -> PyResult<bool> {
    Ok(analysis::is_tenpai_general(&to_counts(counts)?)?)
}

#[pyfunction]
pub fn parse_hand(text: &str) -> PyResult<Vec<i32>> {
    Ok(parser::parse_hand(text)?.to_vec())
}

/// 136-format tiles whose discard leaves the hand ready.
#[pyfunction]
pub fn check_riichi_candidates(tiles_136: Vec<u8>) -> PyResult<Vec<u32>> {
    let tiles_34: Vec<u8> = tiles_136.iter().map(|t| t / 4).collect();
    let hand = crate::types::counts_from_tiles(&tiles_34);
    let kinds = analysis::riichi_discard_candidates(&hand)?;

    Ok(tiles_136
        .iter()
        .filter(|&&t| kinds.contains(&((t / 4) as usize)))
        .map(|&t| t as u32)
        .collect())
}

#[pymodule]
fn shanten_engine(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Goal>()?;
    m.add_function(wrap_pyfunction!(analyze_shanten, m)?)?;
    m.add_function(wrap_pyfunction!(is_tenpai_general, m)?)?;
    m.add_function(wrap_pyfunction!(parse_hand, m)?)?;
    m.add_function(wrap_pyfunction!(check_riichi_candidates, m)?)?;
    Ok(())
}
