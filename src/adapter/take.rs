use crate::tier::{Base, DoubleEnded, SizedDoubleEnded};
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

/// 只保留内部迭代器头部的前`n`个元素。
///
/// 头部拉取逐个转发到内部的头部。第一次尾部拉取时，把尚允许的元素一次性从内部头部取出缓存，
/// 之后两端都从缓存中拉取，因此无论从哪一端拉取，看到的都是同一组元素。
/// 内部若是共享游标，`Take`推进的就是那个共享位置，其他句柄随后从前`n`个元素之后继续。
pub struct Take<I: Base> {
    inner: I,
    n: usize,
    buffer: Option<VecDeque<I::Item>>,
}

impl<I: Base> Take<I> {
    pub(crate) fn new(inner: I, n: usize) -> Self {
        Take { inner, n, buffer: None }
    }

    fn buffered(&mut self) -> &mut VecDeque<I::Item> {
        let Take { inner, n, buffer } = self;
        buffer.get_or_insert_with(|| {
            let mut items = VecDeque::with_capacity((*n).min(inner.size_hint().0));
            while *n > 0 {
                let Some(item) = inner.pull_front() else { break };
                *n -= 1;
                items.push_back(item);
            }
            *n = 0;
            items
        })
    }
}

impl<I: Base + Debug> Debug for Take<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Take")
            .field("inner", &self.inner)
            .field("n", &self.n)
            .field("buffered", &self.buffer.as_ref().map(VecDeque::len))
            .finish()
    }
}

impl<I: Base> Base for Take<I> {
    type Item = I::Item;

    fn pull_front(&mut self) -> Option<I::Item> {
        if let Some(buffer) = &mut self.buffer {
            return buffer.pop_front();
        }
        if self.n == 0 {
            return None;
        }
        let item = self.inner.pull_front()?;
        self.n -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if let Some(buffer) = &self.buffer {
            return (buffer.len(), Some(buffer.len()));
        }
        if self.n == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.inner.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.n),
            None => self.n,
        };
        (lower.min(self.n), Some(upper))
    }
}

impl<I: DoubleEnded> DoubleEnded for Take<I> {
    fn pull_back(&mut self) -> Option<I::Item> {
        self.buffered().pop_back()
    }
}

impl<I: SizedDoubleEnded> SizedDoubleEnded for Take<I> {
    fn remaining(&self) -> usize {
        match &self.buffer {
            Some(buffer) => buffer.len(),
            None => self.inner.remaining().min(self.n),
        }
    }
}
