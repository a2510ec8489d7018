use std::fmt::{Debug, Formatter};

/// 单向链表，只支持在首部插入和移除。
pub struct ForwardList<T> {
    head: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> ForwardList<T> {
    pub fn new() -> ForwardList<T> {
        ForwardList { head: None, len: 0 }
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref(), remaining: self.len }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        ForwardList::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        // 逐个释放节点，避免长链表递归析构导致栈溢出
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        let mut values = self.iter().cloned().collect::<Vec<_>>();
        let mut list = ForwardList::new();
        while let Some(value) = values.pop() {
            list.push_front(value);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IntoIter<T>(ForwardList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_front() {
        let mut list = ForwardList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_iter() {
        let mut list = ForwardList::new();
        for x in 0..5 {
            list.push_front(x);
        }
        assert_eq!(list.iter().len(), 5);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
        assert_eq!((&list).into_iter().count(), 5);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_clone_keeps_order() {
        let mut list = ForwardList::new();
        list.push_front("c".to_string());
        list.push_front("b".to_string());
        list.push_front("a".to_string());
        let cloned = list.clone();
        assert_eq!(cloned, list);
        assert_eq!(format!("{:?}", cloned), r#"["a", "b", "c"]"#);
    }

    #[test]
    fn test_eq() {
        let mut l = ForwardList::new();
        let mut r = ForwardList::new();
        assert_eq!(l, r);
        l.push_front(1);
        assert_ne!(l, r);
        r.push_front(1);
        assert_eq!(l, r);
        l.push_front(2);
        r.push_front(3);
        assert_ne!(l, r);
    }

    #[test]
    fn test_drop_long_list() {
        let mut list = ForwardList::new();
        for x in 0..1_000_000 {
            list.push_front(x);
        }
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }
}
