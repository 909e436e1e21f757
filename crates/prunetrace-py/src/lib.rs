#![allow(unsafe_op_in_unsafe_fn)]

use ::prunetrace_core::{
    GameNode, SearchOutcome, SearchStats, TraceEvent, TraceLog, TraceSnapshot, TreeError,
    search,
};
use ::prunetrace_gen::{GenError, TreeDocument, generate, load_tree_str};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

fn tree_err_to_py(err: TreeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn gen_err_to_py(err: GenError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Convert one event to the dict layout the viewer reads.
/// Infinite bounds become Python `float('inf')` / `float('-inf')`.
fn event_to_dict<'py>(py: Python<'py>, event: &TraceEvent) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("kind", event.kind.as_str())?;
    dict.set_item("node_id", event.node_id.as_str())?;
    if let Some(value) = event.value {
        dict.set_item("value", value)?;
    }
    dict.set_item("alpha", event.alpha)?;
    dict.set_item("beta", event.beta)?;
    dict.set_item("maximizing", event.maximizing)?;
    if let Some(pruned) = &event.pruned_children {
        let ids: Vec<&str> = pruned.iter().map(|id| id.as_str()).collect();
        dict.set_item("pruned_children", ids)?;
    }
    dict.set_item("description", event.description.as_str())?;
    Ok(dict)
}

#[pyclass(name = "GameTree", module = "prunetrace")]
#[derive(Clone)]
/// GameTree()
/// --
///
/// Immutable game tree produced by `generate_tree` or `load_tree_yaml`.
pub struct PyGameTree {
    inner: GameNode,
}

#[pymethods]
impl PyGameTree {
    /// root_id($self, /)
    /// --
    ///
    /// Return the id of the root node.
    #[pyo3(text_signature = "($self, /)")]
    fn root_id(&self) -> String {
        self.inner.id().to_string()
    }

    /// node_count($self, /)
    /// --
    ///
    /// Return the total number of nodes.
    #[pyo3(text_signature = "($self, /)")]
    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// leaf_values($self, /)
    /// --
    ///
    /// Return the leaf values in pre-order.
    #[pyo3(text_signature = "($self, /)")]
    fn leaf_values(&self) -> Vec<f64> {
        self.inner.leaf_values()
    }

    /// to_yaml($self, /)
    /// --
    ///
    /// Serialize the tree as a YAML tree document.
    #[pyo3(text_signature = "($self, /)")]
    fn to_yaml(&self) -> PyResult<String> {
        TreeDocument::from_tree(&self.inner)
            .to_yaml_string()
            .map_err(gen_err_to_py)
    }

    /// search($self, /)
    /// --
    ///
    /// Run alpha-beta from the root with open bounds and return the traced result.
    ///
    /// Raises:
    ///     ValueError: If the tree is malformed.
    #[pyo3(text_signature = "($self, /)")]
    fn search(&self) -> PyResult<PySearchResult> {
        let outcome = search(&self.inner).map_err(tree_err_to_py)?;
        Ok(PySearchResult {
            root: self.inner.clone(),
            outcome,
        })
    }
}

#[pyclass(name = "SearchResult", module = "prunetrace")]
/// SearchResult()
/// --
///
/// Game value and finished trace of one search run.
pub struct PySearchResult {
    root: GameNode,
    outcome: SearchOutcome,
}

#[pymethods]
impl PySearchResult {
    /// Game value of the root.
    #[getter]
    fn value(&self) -> f64 {
        self.outcome.value
    }

    fn __len__(&self) -> usize {
        self.outcome.log.len()
    }

    /// events($self, /)
    /// --
    ///
    /// Return every trace event as a list of dicts, in order.
    #[pyo3(text_signature = "($self, /)")]
    fn events<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        let list = PyList::empty_bound(py);
        for event in &self.outcome.log {
            list.append(event_to_dict(py, event)?)?;
        }
        Ok(list)
    }

    /// event($self, index, /)
    /// --
    ///
    /// Return one trace event as a dict.
    ///
    /// Raises:
    ///     IndexError: If `index` is out of range.
    #[pyo3(text_signature = "($self, index, /)")]
    fn event<'py>(&self, py: Python<'py>, index: usize) -> PyResult<Bound<'py, PyDict>> {
        let event = self
            .outcome
            .log
            .get(index)
            .ok_or_else(|| PyIndexError::new_err(format!("no event at step {index}")))?;
        event_to_dict(py, event)
    }

    /// stats($self, /)
    /// --
    ///
    /// Return run counters as a dict.
    #[pyo3(text_signature = "($self, /)")]
    fn stats<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let stats = SearchStats::from_log(&self.outcome.log);
        let dict = PyDict::new_bound(py);
        dict.set_item("events", stats.events)?;
        dict.set_item("nodes_visited", stats.nodes_visited)?;
        dict.set_item("leaves_evaluated", stats.leaves_evaluated)?;
        dict.set_item("value_updates", stats.value_updates)?;
        dict.set_item("bound_updates", stats.bound_updates)?;
        dict.set_item("prunes", stats.prunes)?;
        dict.set_item("pruned_children", stats.pruned_children)?;
        Ok(dict)
    }

    /// to_json($self, /)
    /// --
    ///
    /// Export the tree, trace and stats as a JSON snapshot.
    #[pyo3(text_signature = "($self, /)")]
    fn to_json(&self) -> PyResult<String> {
        TraceSnapshot::capture(&self.root, &self.outcome)
            .to_json()
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// replay($self, /)
    /// --
    ///
    /// Return a step cursor positioned at the first event.
    #[pyo3(text_signature = "($self, /)")]
    fn replay(&self) -> PyResult<PyReplay> {
        PyReplay::new(self.outcome.log.clone())
    }
}

#[pyclass(name = "Replay", module = "prunetrace")]
/// Replay()
/// --
///
/// Step cursor over a finished trace. Pruned children accumulate as the cursor moves forward.
pub struct PyReplay {
    log: TraceLog,
    step: usize,
}

impl PyReplay {
    fn new(log: TraceLog) -> PyResult<Self> {
        if !log.is_finished() {
            return Err(tree_err_to_py(TreeError::UnfinishedLog));
        }
        Ok(PyReplay { log, step: 0 })
    }

    fn last_step(&self) -> usize {
        self.log.len() - 1
    }
}

#[pymethods]
impl PyReplay {
    /// Current step index.
    #[getter]
    fn step(&self) -> usize {
        self.step
    }

    /// total_steps($self, /)
    /// --
    ///
    /// Return the number of events in the trace.
    #[pyo3(text_signature = "($self, /)")]
    fn total_steps(&self) -> usize {
        self.log.len()
    }

    /// next($self, /)
    /// --
    ///
    /// Advance one step. Returns `False` on the last step.
    #[pyo3(text_signature = "($self, /)")]
    fn next(&mut self) -> bool {
        if self.step < self.last_step() {
            self.step += 1;
            true
        } else {
            false
        }
    }

    /// prev($self, /)
    /// --
    ///
    /// Go back one step. Returns `False` on step 0.
    #[pyo3(text_signature = "($self, /)")]
    fn prev(&mut self) -> bool {
        if self.step > 0 {
            self.step -= 1;
            true
        } else {
            false
        }
    }

    /// seek($self, step, /)
    /// --
    ///
    /// Jump to `step`, clamped to the last event. Returns the new step.
    #[pyo3(text_signature = "($self, step, /)")]
    fn seek(&mut self, step: usize) -> usize {
        self.step = step.min(self.last_step());
        self.step
    }

    /// current($self, /)
    /// --
    ///
    /// Return the event at the current step as a dict.
    #[pyo3(text_signature = "($self, /)")]
    fn current<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        event_to_dict(py, &self.log.events()[self.step])
    }

    /// is_finish($self, /)
    /// --
    ///
    /// Return whether the cursor is on the final `finish` event.
    #[pyo3(text_signature = "($self, /)")]
    fn is_finish(&self) -> bool {
        self.step == self.last_step()
    }

    /// pruned($self, /)
    /// --
    ///
    /// Return the ids of every child pruned up to the current step, sorted.
    #[pyo3(text_signature = "($self, /)")]
    fn pruned(&self) -> Vec<String> {
        self.log
            .pruned_through(self.step)
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }
}

#[pyfunction]
#[pyo3(signature = (depth, branching_factor, values=None, seed=None))]
#[pyo3(text_signature = "(depth, branching_factor, values=None, seed=None, /)")]
/// generate_tree(depth, branching_factor, values=None, seed=None, /)
/// --
///
/// Build a balanced tree. Without `values`, leaves are drawn from 1..=99 using `seed`.
/// Missing trailing values default to 0.
///
/// Raises:
///     ValueError: If the shape is invalid or too large.
fn generate_tree(
    depth: u32,
    branching_factor: u32,
    values: Option<Vec<f64>>,
    seed: Option<u64>,
) -> PyResult<PyGameTree> {
    let inner =
        generate(depth, branching_factor, values.as_deref(), seed).map_err(gen_err_to_py)?;
    Ok(PyGameTree { inner })
}

#[pyfunction]
#[pyo3(text_signature = "(yaml, /)")]
/// load_tree_yaml(yaml, /)
/// --
///
/// Parse and validate an explicit tree from a YAML tree document.
fn load_tree_yaml(yaml: &str) -> PyResult<PyGameTree> {
    let inner = load_tree_str(yaml).map_err(gen_err_to_py)?;
    Ok(PyGameTree { inner })
}

#[pymodule]
fn prunetrace(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyGameTree>()?;
    module.add_class::<PySearchResult>()?;
    module.add_class::<PyReplay>()?;
    module.add_function(wrap_pyfunction!(generate_tree, module)?)?;
    module.add_function(wrap_pyfunction!(load_tree_yaml, module)?)?;
    Ok(())
}
