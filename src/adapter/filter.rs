use crate::tier::{Base, DoubleEnded};
use std::fmt::{Debug, Formatter};

/// 只保留满足谓词的元素。
///
/// 每次拉取恰好产出一个保留的元素，但被丢弃的内部拉取次数没有上限，
/// 因此剩余数量不再精确，`Filter`从不提供[`SizedDoubleEnded`](crate::tier::SizedDoubleEnded)。
/// 内部可双端拉取时，尾部拉取从尾部向前查找。
#[derive(Clone)]
pub struct Filter<I, P> {
    inner: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(inner: I, predicate: P) -> Self {
        Filter { inner, predicate }
    }
}

impl<I: Debug, P> Debug for Filter<I, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").field("inner", &self.inner).finish()
    }
}

impl<I, P> Base for Filter<I, P>
where
    I: Base,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn pull_front(&mut self) -> Option<I::Item> {
        while let Some(item) = self.inner.pull_front() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<I, P> DoubleEnded for Filter<I, P>
where
    I: DoubleEnded,
    P: FnMut(&I::Item) -> bool,
{
    fn pull_back(&mut self) -> Option<I::Item> {
        while let Some(item) = self.inner.pull_back() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{Cursor, Stream};
    use crate::tier::{Base, DoubleEnded, SizedDoubleEnded};
    use std::cell::Cell;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_filter() {
        assert_eq!(Cursor::from(vec![1, 2, 3, 4, 5]).filter(is_even).to_vec(), vec![2, 4]);
    }

    #[test]
    fn test_filter_consecutive() {
        assert_eq!(Cursor::from(vec![2, 4, 6, 1, 2, 3]).filter(is_even).to_vec(), vec![2, 4, 6, 2]);
    }

    #[test]
    fn test_filter_negative_twice() {
        let filtered = Cursor::from(vec![1, 2, 3, 4, 5]).filter(|x| *x < 0).filter(|x| *x < 0).to_vec();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_twice_pulls_nothing_extra() {
        let outer_checks = Cell::new(0);
        let cursor = Cursor::from(vec![2, 4, 6, 8]);
        let mut twice = cursor.share().filter(is_even).filter(|x| {
            outer_checks.set(outer_checks.get() + 1);
            is_even(x)
        });
        assert_eq!(twice.pull_front(), Some(2));
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(outer_checks.get(), 1);
        assert_eq!(twice.to_vec(), vec![4, 6, 8]);
        assert_eq!(outer_checks.get(), 4);
    }

    #[test]
    fn test_filter_drains_discarded_elements() {
        let cursor = Cursor::from(vec![1, 3, 5, 6, 7]);
        let mut filtered = cursor.share().filter(is_even);
        assert_eq!(filtered.pull_front(), Some(6));
        assert_eq!(cursor.share().to_vec(), vec![7]);
        assert_eq!(filtered.pull_front(), None);
    }

    #[test]
    fn test_filter_from_back() {
        let mut filtered = Cursor::from(vec![1, 2, 3, 4, 5, 6, 7]).filter(is_even);
        assert_eq!(filtered.pull_back(), Some(6));
        assert_eq!(filtered.pull_front(), Some(2));
        assert_eq!(filtered.pull_back(), Some(4));
        assert_eq!(filtered.pull_front(), None);
        assert_eq!(filtered.pull_back(), None);
    }

    #[test]
    fn test_filter_rev() {
        assert_eq!(Cursor::from(vec![1, 2, 3, 4, 5]).filter(is_even).rev().to_vec(), vec![4, 2]);
    }

    #[test]
    fn test_filter_size_hint() {
        let filtered = Cursor::from(vec![1, 2, 3]).filter(is_even);
        assert_eq!(filtered.size_hint(), (0, Some(3)));
    }

    #[test]
    fn test_filter_over_unbounded_stream() {
        let mut odd_squares = Stream::new(0..).map(|x: i64| x * x).filter(|x| x % 2 == 1);
        assert_eq!(odd_squares.by_ref().take(3).to_vec(), vec![1, 9, 25]);
        assert_eq!(odd_squares.pull_front(), Some(49));
    }
}
