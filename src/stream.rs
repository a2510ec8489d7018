use crate::err::{StreamErr, StreamRes};
use crate::forward_list::ForwardList;
use crate::op::{Filters, Operation};
use crate::output::{Report, StdOut};
use crate::shape::Shape;
use std::collections::{LinkedList, VecDeque};
use std::fmt::{Debug, Display, Formatter};
use std::mem;

/// 流的状态。
///
/// `Open --filter/peek--> Open`，`Open --其他终结操作--> Consumed`，`Consumed`不再接受`filter`或终结操作。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum State {
    Open,
    Consumed,
}

/// 可链式组合的流水线：独占一组元素以及按注册顺序排列的过滤操作，只能被终结操作消费一次。
///
/// `filter`只登记谓词，不做任何求值；每个终结操作各自对全部元素重新执行过滤。
/// `map`会立即求值并产生一个新的、没有过滤操作的流。
///
/// ```
/// use rstream::Stream;
///
/// let mut stream = Stream::from(vec![1, -2, 3, -4]);
/// let positive = stream.filter(|x| *x > 0)?.filter(|x| *x >= 3)?.to_vec()?;
/// assert_eq!(positive, vec![3]);
/// assert!(stream.is_consumed());
/// # Ok::<(), rstream::StreamErr>(())
/// ```
pub struct Stream<T> {
    elements: Vec<T>,
    filters: Filters<T>,
    state: State,
}

impl<T> Stream<T> {
    /// 接管元素的所有权，不做复制。
    pub fn new(elements: Vec<T>) -> Stream<T> {
        Stream { elements, filters: Filters::new(), state: State::Open }
    }

    pub fn empty() -> Stream<T> {
        Stream::new(Vec::new())
    }

    /// 从任意有序可迭代的容器构造。
    pub fn of(source: impl IntoIterator<Item = T>) -> Stream<T> {
        Stream::new(source.into_iter().collect())
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_consumed(&self) -> bool {
        self.state == State::Consumed
    }

    /// 已注册的过滤操作数量，消费后为0。
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// 源元素数量，消费后为0。
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// 注册一个过滤操作，不立即求值。
    ///
    /// 流已被消费时返回[`StreamErr::AlreadyConsumed`]，已注册的操作保持不变。
    pub fn filter(&mut self, predicate: impl Fn(&T) -> bool + 'static) -> StreamRes<&mut Self> {
        self.check_open("filter")?;
        self.filters.push(Operation::new(predicate));
        Ok(self)
    }

    /// 在不消费流的情况下，把每个保留的元素报告到标准输出。
    pub fn peek(&mut self) -> &mut Self
    where
        T: Display,
    {
        self.peek_into(&mut StdOut)
    }

    /// 在不消费流的情况下，把每个保留的元素按顺序报告给`report`，最后报告一次结束。
    ///
    /// 已被消费的流不再持有元素，此时什么也不报告。
    pub fn peek_into(&mut self, report: &mut impl Report) -> &mut Self
    where
        T: Display,
    {
        if self.is_consumed() {
            return self;
        }
        for item in self.elements.iter().filter(|item| self.filters.retains(item)) {
            report.element(&item.to_string());
        }
        report.end();
        self
    }

    /// 按目标容器形态收集保留的元素。
    pub fn collect_into<C: Shape<T>>(&mut self) -> StreamRes<C> {
        Ok(C::gather(self.consume(C::OP)?))
    }

    pub fn to_vec(&mut self) -> StreamRes<Vec<T>> {
        self.collect_into()
    }

    pub fn to_list(&mut self) -> StreamRes<LinkedList<T>> {
        self.collect_into()
    }

    pub fn to_deque(&mut self) -> StreamRes<VecDeque<T>> {
        self.collect_into()
    }

    /// 保留的元素逐个插入链表首部，顺序与[`Stream::to_vec`]相反。
    pub fn to_forward_list(&mut self) -> StreamRes<ForwardList<T>> {
        self.collect_into()
    }

    /// 对保留的元素逐个映射，产生一个新的、没有过滤操作的流，当前流被消费。
    pub fn map<R>(&mut self, mapping: impl FnMut(T) -> R) -> StreamRes<Stream<R>> {
        Ok(Stream::new(self.consume("map")?.map(mapping).collect()))
    }

    /// 第一个保留的元素，没有时为`None`。
    pub fn find(&mut self) -> StreamRes<Option<T>> {
        Ok(self.consume("find")?.next())
    }

    /// 是否至少保留了一个元素。
    pub fn any_matches(&mut self) -> StreamRes<bool> {
        Ok(self.consume("any_matches")?.next().is_some())
    }

    /// 是否保留了全部源元素，源为空时为`true`。
    pub fn all_match(&mut self) -> StreamRes<bool> {
        let retained = self.consume("all_match")?;
        let total = retained.source_len();
        Ok(retained.count() == total)
    }

    /// 以第一个保留的元素为初值，从左到右依次累积后续保留的元素。
    ///
    /// 没有保留任何元素时返回[`StreamErr::EmptyReduction`]。
    pub fn reduce(&mut self, combinator: impl FnMut(T, T) -> T) -> StreamRes<T> {
        self.consume("reduce")?.reduce(combinator).ok_or(StreamErr::EmptyReduction)
    }

    /// 对每个保留的元素按顺序执行`action`。
    pub fn foreach(&mut self, action: impl FnMut(T)) -> StreamRes<()> {
        self.consume("foreach")?.for_each(action);
        Ok(())
    }

    fn check_open(&self, op: &'static str) -> StreamRes<()> {
        match self.state {
            State::Open => Ok(()),
            State::Consumed => Err(StreamErr::AlreadyConsumed { op }),
        }
    }

    /// 切换为`Consumed`并交出元素和过滤操作，流本身不再持有任何数据。
    fn consume(&mut self, op: &'static str) -> StreamRes<Retained<T>> {
        self.check_open(op)?;
        self.state = State::Consumed;
        Ok(Retained::new(mem::take(&mut self.elements), mem::take(&mut self.filters)))
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::empty()
    }
}

impl<T: Debug> Debug for Stream<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("elements", &self.elements)
            .field("filters", &self.filters.len())
            .field("state", &self.state)
            .finish()
    }
}

/// 惰性执行过滤：按原始顺序依次产出满足全部过滤操作的元素。
struct Retained<T> {
    source: std::vec::IntoIter<T>,
    source_len: usize,
    filters: Filters<T>,
}

impl<T> Retained<T> {
    fn new(elements: Vec<T>, filters: Filters<T>) -> Retained<T> {
        Retained { source_len: elements.len(), source: elements.into_iter(), filters }
    }

    fn source_len(&self) -> usize {
        self.source_len
    }
}

impl<T> Iterator for Retained<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let filters = &self.filters;
        self.source.find(|item| filters.retains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}
