use crate::forward_list::ForwardList;
use crate::stream::Stream;
use std::collections::{LinkedList, VecDeque};

impl<T: Clone> Stream<T> {
    /// 复制借用的元素。
    pub fn from_slice(source: &[T]) -> Stream<T> {
        Stream::new(source.to_vec())
    }
}

/// 接管所有权，不复制。
impl<T> From<Vec<T>> for Stream<T> {
    fn from(source: Vec<T>) -> Self {
        Stream::new(source)
    }
}

impl<T: Clone> From<&[T]> for Stream<T> {
    fn from(source: &[T]) -> Self {
        Stream::from_slice(source)
    }
}

impl<T: Clone> From<&Vec<T>> for Stream<T> {
    fn from(source: &Vec<T>) -> Self {
        Stream::from_slice(source)
    }
}

impl<T, const N: usize> From<[T; N]> for Stream<T> {
    fn from(source: [T; N]) -> Self {
        Stream::new(Vec::from(source))
    }
}

impl<T> From<VecDeque<T>> for Stream<T> {
    fn from(source: VecDeque<T>) -> Self {
        Stream::new(Vec::from(source))
    }
}

impl<T> From<LinkedList<T>> for Stream<T> {
    fn from(source: LinkedList<T>) -> Self {
        Stream::of(source)
    }
}

/// 从首部到尾部依次读取。
impl<T> From<ForwardList<T>> for Stream<T> {
    fn from(source: ForwardList<T>) -> Self {
        Stream::of(source)
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stream::of(iter)
    }
}
