use crate::tier::{Base, DoubleEnded, SizedDoubleEnded};
use std::fmt::{Debug, Formatter};

/// 对每个拉取到的元素应用`f`，拉取哪一端就从内部的哪一端取。
#[derive(Clone)]
pub struct Map<I, F> {
    inner: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(inner: I, f: F) -> Self {
        Map { inner, f }
    }
}

impl<I: Debug, F> Debug for Map<I, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish()
    }
}

impl<U, I, F> Base for Map<I, F>
where
    I: Base,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn pull_front(&mut self) -> Option<U> {
        self.inner.pull_front().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<U, I, F> DoubleEnded for Map<I, F>
where
    I: DoubleEnded,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    fn pull_back(&mut self) -> Option<U> {
        self.inner.pull_back().map(&mut self.f)
    }
}

impl<U, I, F> SizedDoubleEnded for Map<I, F>
where
    I: SizedDoubleEnded,
    F: FnMut(I::Item) -> U,
{
    fn remaining(&self) -> usize {
        self.inner.remaining()
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{Cursor, Stream};
    use crate::tier::{Base, DoubleEnded, SizedDoubleEnded};

    #[test]
    fn test_map_addition() {
        assert_eq!(Cursor::from(vec![1, 2, 3]).map(|x| x + 1).to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_multiple_maps() {
        let mapped = Cursor::from(vec![1, 2, 3]).map(|x| x + 1).map(|x| x * 2).to_vec();
        assert_eq!(mapped, vec![4, 6, 8]);
    }

    #[test]
    fn test_map_mirrors_pull_end() {
        let mut mapped = Cursor::from(vec![1, 2, 3]).map(|x| x * 10);
        assert_eq!(mapped.remaining(), 3);
        assert_eq!(mapped.pull_back(), Some(30));
        assert_eq!(mapped.pull_front(), Some(10));
        assert_eq!(mapped.remaining(), 1);
        assert_eq!(mapped.to_vec(), vec![20]);
    }

    #[test]
    fn test_map_calls_once_per_pulled_element() {
        let mut calls = 0;
        let cursor = Cursor::from(vec!["a", "b", "c"]);
        let taken = cursor
            .share()
            .map(|s| {
                calls += 1;
                s.to_uppercase()
            })
            .take(2)
            .to_vec();
        assert_eq!(taken, vec!["A", "B"]);
        assert_eq!(calls, 2);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_map_over_stream() {
        let mut mapped = Stream::new(1..).map(|x: u64| x * x);
        assert_eq!(mapped.pull_front(), Some(1));
        assert_eq!(mapped.pull_front(), Some(4));
    }

    #[test]
    fn test_map_fold() {
        let folded = Cursor::from(vec![1, 2, 3]).map(|x| x + 1).fold(1, |acc, x| acc * x);
        assert_eq!(folded, 24);
    }
}
