use crate::adapter::{Enumerate, Filter, Map, Rev, Take};
use std::fmt::{Display, Formatter};

/// 迭代能力等级，按能力由弱到强排序。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tier {
    /// 仅能从头部拉取。
    Base,
    /// 可从头部或尾部拉取。
    DoubleEnded,
    /// 可从头部或尾部拉取，且精确知道剩余数量。
    SizedDoubleEnded,
}

impl Tier {
    #[inline]
    pub fn is_double_ended(self) -> bool {
        self >= Tier::DoubleEnded
    }

    #[inline]
    pub fn is_sized(self) -> bool {
        self == Tier::SizedDoubleEnded
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Base => write!(f, "base"),
            Tier::DoubleEnded => write!(f, "double-ended"),
            Tier::SizedDoubleEnded => write!(f, "sized-double-ended"),
        }
    }
}

/// 基础能力：只能从头部拉取。
///
/// 拉取不可撤销，返回`None`表示已耗尽，与任何“值为假或零”的元素都不同。
/// 组合方法（`map`、`filter`等）都是惰性的，只有终端操作（`to_vec`、`fold`）才会真正拉取。
pub trait Base {
    type Item;

    fn pull_front(&mut self) -> Option<Self::Item>;

    /// 剩余元素数量的上下界，语义同[`Iterator::size_hint`]。
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// 按拉取顺序编号。仅当内部迭代器为[`SizedDoubleEnded`]时结果才支持尾部拉取。
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    fn rev(self) -> Rev<Self>
    where
        Self: Sized + DoubleEnded,
    {
        Rev::new(self)
    }

    /// 借用当前迭代器构造适配器，适配器消耗的元素对原迭代器可见。
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// 转为标准库迭代器。
    fn pulls(self) -> Pulls<Self>
    where
        Self: Sized,
    {
        Pulls::new(self)
    }

    /// 从头部拉取直到耗尽，按拉取顺序收集剩余元素。
    fn to_vec(&mut self) -> Vec<Self::Item> {
        let mut items = Vec::with_capacity(self.size_hint().0);
        while let Some(item) = self.pull_front() {
            items.push(item);
        }
        items
    }

    /// 左折叠，拉取顺序与`to_vec`一致。
    fn fold<B, G>(&mut self, init: B, g: G) -> B
    where
        Self: Sized,
        G: FnMut(B, Self::Item) -> B,
    {
        Iterator::fold(Pulls::new(self), init, g)
    }

    /// 可失败的左折叠，遇到第一个错误即停止拉取。
    fn try_fold<B, E, G>(&mut self, init: B, g: G) -> Result<B, E>
    where
        Self: Sized,
        G: FnMut(B, Self::Item) -> Result<B, E>,
    {
        Iterator::try_fold(&mut Pulls::new(self), init, g)
    }

    /// 收集`Result`元素，遇到第一个错误即停止拉取，游标停在出错元素之后。
    fn try_to_vec<U, E>(&mut self) -> Result<Vec<U>, E>
    where
        Self: Sized + Base<Item = Result<U, E>>,
    {
        Pulls::new(self).collect()
    }
}

/// 双端能力：头尾拉取可任意交替，两端相遇时既不重复也不遗漏。
pub trait DoubleEnded: Base {
    fn pull_back(&mut self) -> Option<Self::Item>;
}

/// 双端且精确知道剩余数量：每次成功拉取恰好减一，两端都耗尽时恰好为零。
pub trait SizedDoubleEnded: DoubleEnded {
    fn remaining(&self) -> usize {
        let (lower, upper) = self.size_hint();
        debug_assert_eq!(upper, Some(lower));
        lower
    }
}

impl<I: Base + ?Sized> Base for &mut I {
    type Item = I::Item;

    #[inline]
    fn pull_front(&mut self) -> Option<Self::Item> {
        (**self).pull_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<I: DoubleEnded + ?Sized> DoubleEnded for &mut I {
    #[inline]
    fn pull_back(&mut self) -> Option<Self::Item> {
        (**self).pull_back()
    }
}

impl<I: SizedDoubleEnded + ?Sized> SizedDoubleEnded for &mut I {
    fn remaining(&self) -> usize {
        (**self).remaining()
    }
}

impl<I: Base + ?Sized> Base for Box<I> {
    type Item = I::Item;

    #[inline]
    fn pull_front(&mut self) -> Option<Self::Item> {
        (**self).pull_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<I: DoubleEnded + ?Sized> DoubleEnded for Box<I> {
    #[inline]
    fn pull_back(&mut self) -> Option<Self::Item> {
        (**self).pull_back()
    }
}

impl<I: SizedDoubleEnded + ?Sized> SizedDoubleEnded for Box<I> {
    fn remaining(&self) -> usize {
        (**self).remaining()
    }
}

/// 标准库迭代器桥接，按内部能力实现`Iterator`、`DoubleEndedIterator`和`ExactSizeIterator`。
#[derive(Debug)]
pub struct Pulls<I> {
    inner: I,
}

impl<I> Pulls<I> {
    pub(crate) fn new(inner: I) -> Self {
        Pulls { inner }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Base> Iterator for Pulls<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pull_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: DoubleEnded> DoubleEndedIterator for Pulls<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.pull_back()
    }
}

impl<I: SizedDoubleEnded> ExactSizeIterator for Pulls<I> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}
