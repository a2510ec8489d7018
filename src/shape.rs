use crate::forward_list::ForwardList;
use std::collections::{LinkedList, VecDeque};

/// 终结收集的目标容器形态。
///
/// 所有形态共享同一份过滤求值，只决定保留下来的元素如何放入容器。
pub trait Shape<T>: Sized {
    /// 对应的终结操作名称，用于错误信息。
    const OP: &'static str;

    /// 按原始相对顺序接收保留的元素，构造容器。
    fn gather<I: Iterator<Item = T>>(retained: I) -> Self;
}

impl<T> Shape<T> for Vec<T> {
    const OP: &'static str = "to_vec";

    fn gather<I: Iterator<Item = T>>(retained: I) -> Self {
        retained.collect()
    }
}

impl<T> Shape<T> for LinkedList<T> {
    const OP: &'static str = "to_list";

    fn gather<I: Iterator<Item = T>>(retained: I) -> Self {
        retained.collect()
    }
}

impl<T> Shape<T> for VecDeque<T> {
    const OP: &'static str = "to_deque";

    fn gather<I: Iterator<Item = T>>(retained: I) -> Self {
        retained.collect()
    }
}

/// 逐个插入到链表首部，结果与原始相对顺序相反。
impl<T> Shape<T> for ForwardList<T> {
    const OP: &'static str = "to_forward_list";

    fn gather<I: Iterator<Item = T>>(retained: I) -> Self {
        let mut list = ForwardList::new();
        for item in retained {
            list.push_front(item);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_keeps_order() {
        assert_eq!(Vec::<i32>::gather([1, 2, 3].into_iter()), vec![1, 2, 3]);
        assert_eq!(LinkedList::<i32>::gather([1, 2, 3].into_iter()).into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(VecDeque::<i32>::gather([1, 2, 3].into_iter()), VecDeque::from([1, 2, 3]));
    }

    #[test]
    fn test_gather_forward_list_reversed() {
        let list = ForwardList::<i32>::gather([1, 2, 3].into_iter());
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_gather_empty() {
        assert!(Vec::<i32>::gather(std::iter::empty()).is_empty());
        assert!(ForwardList::<i32>::gather(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_op_names() {
        assert_eq!(<Vec<i32> as Shape<i32>>::OP, "to_vec");
        assert_eq!(<LinkedList<i32> as Shape<i32>>::OP, "to_list");
        assert_eq!(<VecDeque<i32> as Shape<i32>>::OP, "to_deque");
        assert_eq!(<ForwardList<i32> as Shape<i32>>::OP, "to_forward_list");
    }
}
