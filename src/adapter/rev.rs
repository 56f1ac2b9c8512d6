use crate::tier::{Base, DoubleEnded, SizedDoubleEnded};

/// 交换头尾：头部拉取转为内部的尾部拉取，反之亦然。
#[derive(Debug, Clone)]
pub struct Rev<I> {
    inner: I,
}

impl<I: DoubleEnded> Rev<I> {
    pub(crate) fn new(inner: I) -> Self {
        Rev { inner }
    }
}

impl<I: DoubleEnded> Base for Rev<I> {
    type Item = I::Item;

    #[inline]
    fn pull_front(&mut self) -> Option<I::Item> {
        self.inner.pull_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: DoubleEnded> DoubleEnded for Rev<I> {
    #[inline]
    fn pull_back(&mut self) -> Option<I::Item> {
        self.inner.pull_front()
    }
}

impl<I: SizedDoubleEnded> SizedDoubleEnded for Rev<I> {
    fn remaining(&self) -> usize {
        self.inner.remaining()
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;
    use crate::tier::{Base, DoubleEnded, SizedDoubleEnded};

    #[test]
    fn test_reverse() {
        assert_eq!(Cursor::from(vec![1, 2, 3]).rev().to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_reverse_twice() {
        assert_eq!(Cursor::from(vec![1, 2, 3]).rev().rev().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_map_reverse() {
        assert_eq!(Cursor::from(vec![1, 2, 3]).map(|x| x + 1).rev().to_vec(), vec![4, 3, 2]);
    }

    #[test]
    fn test_reverse_swaps_ends() {
        let mut reversed = Cursor::from(vec![1, 2, 3, 4]).rev();
        assert_eq!(reversed.remaining(), 4);
        assert_eq!(reversed.pull_back(), Some(1));
        assert_eq!(reversed.pull_front(), Some(4));
        assert_eq!(reversed.remaining(), 2);
    }

    #[test]
    fn test_reverse_shares_cursor() {
        let cursor = Cursor::from(vec![1, 2, 3, 4]);
        let mut reversed = cursor.share().rev();
        assert_eq!(reversed.pull_front(), Some(4));
        assert_eq!(cursor.share().to_vec(), vec![1, 2, 3]);
        assert_eq!(reversed.pull_front(), None);
    }
}
