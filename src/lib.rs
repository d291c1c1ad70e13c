// ============================================================================
// Dynvoke Library
// ============================================================================
//
// Late-bound method dispatch: methods are registered against a concrete
// receiver type under a runtime name, then resolved and called through
// `Invoker::invoke` with loosely-typed arguments that are coerced to the
// declared parameter types.

//! # Examples
//!
//! ```
//! use dynvoke::{Invoker, Shape, Value};
//!
//! # fn main() -> dynvoke::Result<()> {
//! let invoker = Invoker::with_demo_types();
//! let shape = Shape::new(4.0, 3.0);
//!
//! let results = invoker.invoke(&shape, "computeArea", &[Value::from("demo")])?;
//! assert_eq!(results, vec![Value::Float(6.0)]);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod invoker;
pub mod shapes;

// Re-export main types for convenience
pub use crate::core::{DataType, InvokeError, MethodError, Param, Result, Signature, Value};
pub use crate::invoker::{Invoker, Method, MethodRegistry, Reflect};
pub use crate::shapes::{CaptureSink, Holder, OutputSink, Shape, StdoutSink};
