use crate::tier::{Base, DoubleEnded, SizedDoubleEnded, Tier};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// 有限序列上的共享游标，具备[`SizedDoubleEnded`]能力。
///
/// `share()`得到的句柄与原句柄指向同一位置，任一句柄的拉取对其他句柄可见。
/// 仅限单线程使用，`Rc`保证它不会被发送到其他线程。
pub struct Cursor<T> {
    state: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Cursor<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Cursor { state: Rc::new(RefCell::new(items.into_iter().collect())) }
    }

    /// 共享同一位置的新句柄，不复制任何元素。
    pub fn share(&self) -> Self {
        Cursor { state: Rc::clone(&self.state) }
    }

    /// 两个句柄是否指向同一游标。
    pub fn same_as(&self, other: &Cursor<T>) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.borrow().is_empty()
    }
}

impl<T> From<Vec<T>> for Cursor<T> {
    fn from(items: Vec<T>) -> Self {
        Cursor { state: Rc::new(RefCell::new(VecDeque::from(items))) }
    }
}

impl<T> Base for Cursor<T> {
    type Item = T;

    #[inline]
    fn pull_front(&mut self) -> Option<T> {
        self.state.borrow_mut().pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.state.borrow().len();
        (len, Some(len))
    }
}

impl<T> DoubleEnded for Cursor<T> {
    #[inline]
    fn pull_back(&mut self) -> Option<T> {
        self.state.borrow_mut().pop_back()
    }
}

impl<T> SizedDoubleEnded for Cursor<T> {
    fn remaining(&self) -> usize {
        self.state.borrow().len()
    }
}

impl<T> Debug for Cursor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").field("remaining", &self.remaining()).finish()
    }
}

/// 不透明生成器上的共享游标，仅具备[`Base`]能力，可以是无限的。
///
/// 生成器在游标借用期间执行，生成器内部不能再拉取同一个游标。
pub struct Stream<T> {
    state: Rc<RefCell<Box<dyn Iterator<Item = T>>>>,
}

impl<T> Stream<T> {
    pub fn new(generator: impl Iterator<Item = T> + 'static) -> Self {
        Stream { state: Rc::new(RefCell::new(Box::new(generator))) }
    }

    pub fn share(&self) -> Self {
        Stream { state: Rc::clone(&self.state) }
    }

    pub fn same_as(&self, other: &Stream<T>) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T> Base for Stream<T> {
    type Item = T;

    #[inline]
    fn pull_front(&mut self) -> Option<T> {
        self.state.borrow_mut().next()
    }
}

impl<T> Debug for Stream<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

/// 数据源，按数据源能支持的最高能力等级包装。
#[derive(Debug)]
pub enum Origin<T> {
    /// 已知长度的序列：[`Tier::SizedDoubleEnded`]。
    Seq(Cursor<T>),
    /// 不透明生成器：[`Tier::Base`]。
    Gen(Stream<T>),
}

impl<T> Origin<T> {
    pub fn from_seq(items: impl IntoIterator<Item = T>) -> Self {
        Origin::Seq(Cursor::new(items))
    }

    pub fn from_gen(generator: impl Iterator<Item = T> + 'static) -> Self {
        Origin::Gen(Stream::new(generator))
    }

    pub fn tier(&self) -> Tier {
        match self {
            Origin::Seq(_) => Tier::SizedDoubleEnded,
            Origin::Gen(_) => Tier::Base,
        }
    }

    pub fn share(&self) -> Self {
        match self {
            Origin::Seq(cursor) => Origin::Seq(cursor.share()),
            Origin::Gen(stream) => Origin::Gen(stream.share()),
        }
    }

    /// 剩余数量，仅已知长度的序列可用。
    pub fn remaining(&self) -> Option<usize> {
        match self {
            Origin::Seq(cursor) => Some(cursor.remaining()),
            Origin::Gen(_) => None,
        }
    }
}

impl<T> Base for Origin<T> {
    type Item = T;

    fn pull_front(&mut self) -> Option<T> {
        match self {
            Origin::Seq(cursor) => cursor.pull_front(),
            Origin::Gen(stream) => stream.pull_front(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Origin::Seq(cursor) => cursor.size_hint(),
            Origin::Gen(stream) => stream.size_hint(),
        }
    }
}
