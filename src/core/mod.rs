pub mod error;
pub mod types;
pub mod value;

pub use error::{InvokeError, MethodError, Result};
pub use types::{Param, Signature};
pub use value::{DataType, Value};
