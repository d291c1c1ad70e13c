//! Demo entities driven through the dynamic invoker: a shape value and a
//! generic holder that forwards a call to it by name.

use std::any::Any;
use std::sync::{Arc, Mutex};

use crate::core::{DataType, InvokeError, Result, Signature, Value};
use crate::invoker::{Invoker, MethodRegistry, Reflect};

/// Sink for textual side output, injectable so callers can capture what an
/// invoked method prints.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Default sink: process stdout.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Collects written lines in memory.
#[derive(Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Triangle-like shape; immutable after construction.
pub struct Shape {
    height: f64,
    width: f64,
    sink: Arc<dyn OutputSink>,
}

impl Shape {
    pub fn new(height: f64, width: f64) -> Self {
        Self::with_sink(height, width, Arc::new(StdoutSink))
    }

    pub fn with_sink(height: f64, width: f64, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            height,
            width,
            sink,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Echoes the labels through the sink, then returns the area.
    pub fn compute_area(&self, labels: &[String]) -> f64 {
        if !labels.is_empty() {
            self.sink.write_line(&labels.join(" "));
        }
        (self.height * self.width) / 2.0
    }
}

impl Reflect for Shape {
    fn type_name() -> &'static str {
        "Shape"
    }

    fn register(registry: &mut MethodRegistry) {
        registry.register(
            "computeArea",
            Signature::new(vec![]).variadic(DataType::Text),
            |shape: &Shape, args: &[Value]| {
                let mut labels = Vec::with_capacity(args.len());
                for arg in args {
                    if let Value::Text(s) = arg {
                        labels.push(s.clone());
                    }
                }
                Ok(vec![Value::Float(shape.compute_area(&labels))])
            },
        );
    }
}

/// Wraps one opaque value; method calls against it go through the invoker.
pub struct Holder {
    value: Box<dyn Any + Send + Sync>,
}

impl Holder {
    pub fn new(value: impl Any + Send + Sync) -> Self {
        Self {
            value: Box::new(value),
        }
    }

    /// Derives the held value's area by invoking `computeArea` on it with
    /// three fixed labels, returning the first result as a float.
    ///
    /// Invoker failures propagate to the caller instead of collapsing to
    /// zero, so a holder over a value with no such method reports it.
    pub fn compute_derived(&self, invoker: &Invoker) -> Result<f64> {
        let results = invoker.invoke(
            self.value.as_ref(),
            "computeArea",
            &[
                Value::from("test1"),
                Value::from("test2"),
                Value::from("test3"),
            ],
        )?;
        results
            .first()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| {
                InvokeError::InvocationFailed(
                    "computeArea".to_string(),
                    "method returned no numeric result".into(),
                )
            })
    }
}
