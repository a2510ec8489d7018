use std::fmt::{Debug, Formatter};

/// 过滤操作：对单个元素求值的谓词。
///
/// 操作由所属的[`Stream`](crate::Stream)独占，随流一起释放，不在多个流之间共享。
pub struct Operation<T> {
    predicate: Box<dyn Fn(&T) -> bool>,
}

impl<T> Operation<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + 'static) -> Operation<T> {
        Operation { predicate: Box::new(predicate) }
    }

    /// 对元素求值，返回`true`表示保留。
    #[inline]
    pub fn test(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<T> Debug for Operation<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Operation")
    }
}

/// 按注册顺序排列的过滤操作，多个操作之间为“与”关系。
pub(crate) struct Filters<T> {
    ops: Vec<Operation<T>>,
}

impl<T> Filters<T> {
    pub(crate) fn new() -> Filters<T> {
        Filters { ops: Vec::new() }
    }

    pub(crate) fn push(&mut self, op: Operation<T>) {
        self.ops.push(op);
    }

    pub(crate) fn len(&self) -> usize {
        self.ops.len()
    }

    /// 按注册顺序依次求值，遇到第一个不满足的操作即停止；没有任何操作时保留全部元素。
    pub(crate) fn retains(&self, item: &T) -> bool {
        self.ops.iter().all(|op| op.test(item))
    }
}

impl<T> Default for Filters<T> {
    fn default() -> Self {
        Filters::new()
    }
}

impl<T> Debug for Filters<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.ops).finish()
    }
}
