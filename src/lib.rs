//! 可链式组合的单次消费流水线。
//!
//! [`Stream`]独占一组元素，`filter`只登记谓词，终结操作（`to_vec`、`find`、`reduce`等）执行全部过滤并消费流，
//! `map`消费当前流并产生一个元素类型不同的新流。

mod err;
pub mod forward_list;
mod input;
mod op;
mod output;
mod shape;
mod stream;

pub use err::{StreamErr, StreamRes};
pub use forward_list::ForwardList;
pub use op::Operation;
pub use output::{Recorder, Report, StdOut};
pub use shape::Shape;
pub use stream::{State, Stream};
