use crate::tier::{Base, DoubleEnded, SizedDoubleEnded};

/// 按拉取顺序编号。
///
/// 头部拉取从0开始递增编号；尾部拉取从构造时的`剩余数量 - 1`开始递减编号。
/// 两端的计数器相互独立，因此`enumerate().rev()`与`rev().enumerate()`的结果不同。
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    inner: I,
    front: usize,
    back: usize,
}

impl<I: Base> Enumerate<I> {
    pub(crate) fn new(inner: I) -> Self {
        // 只有精确数量的内部迭代器才会被尾部拉取，此时下界即剩余数量
        let back = inner.size_hint().0;
        Enumerate { inner, front: 0, back }
    }
}

impl<I: Base> Base for Enumerate<I> {
    type Item = (usize, I::Item);

    fn pull_front(&mut self) -> Option<Self::Item> {
        let item = self.inner.pull_front()?;
        let index = self.front;
        self.front += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: SizedDoubleEnded> DoubleEnded for Enumerate<I> {
    fn pull_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.pull_back()?;
        self.back = self.back.saturating_sub(1);
        Some((self.back, item))
    }
}

impl<I: SizedDoubleEnded> SizedDoubleEnded for Enumerate<I> {
    fn remaining(&self) -> usize {
        self.inner.remaining()
    }
}
