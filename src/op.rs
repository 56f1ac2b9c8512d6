use crate::CombRes;
use crate::cursor::Origin;
use crate::err::CombErr;
use crate::tier::{Base, DoubleEnded, SizedDoubleEnded, Tier};
use op_help::OpHelp;
use std::fmt::{Debug, Formatter};

pub type MapFn<T, E> = Box<dyn FnMut(T) -> Result<T, E>>;
pub type PredicateFn<T, E> = Box<dyn FnMut(&T) -> Result<bool, E>>;
pub type IndexFn<T> = fn(usize, T) -> T;

/// 待执行的操作描述，由[`Pipeline`](crate::pipe::Pipeline)按追加顺序保存，终端操作时统一应用。
#[derive(OpHelp)]
pub enum Op<T, E> {
    /// 对每个元素应用变换函数，保持能力等级。变换失败时错误由触发拉取的终端操作返回。
    Map(MapFn<T, E>),
    /// 只保留满足谓词的元素。精确数量能力降为双端，其他等级保持不变。谓词失败时错误由触发拉取的终端操作返回。
    Filter(PredicateFn<T, E>),
    /// 按拉取顺序为元素编号。要求精确数量的双端能力，或者仅头部拉取。
    Enumerate(IndexFn<T>),
    /// 最多拉取指定次数（头尾合计），保持能力等级。
    Take(usize),
    /// 交换头尾，要求双端能力。
    Reverse,
}

impl<T, E> Op<T, E> {
    /// 在`tier`之上追加该操作所缺少的能力等级。
    pub(crate) fn missing(&self, tier: Tier) -> Option<Tier> {
        match self {
            Op::Enumerate(_) if tier == Tier::DoubleEnded => Some(Tier::SizedDoubleEnded),
            Op::Reverse if !tier.is_double_ended() => Some(Tier::DoubleEnded),
            _ => None,
        }
    }

    /// 在`tier`之上追加该操作后提供的能力等级。
    pub(crate) fn offered(&self, tier: Tier) -> Tier {
        match self {
            Op::Filter(_) => tier.min(Tier::DoubleEnded),
            _ => tier,
        }
    }

    pub(crate) fn check(&self, tier: Tier) -> CombRes<Tier> {
        match self.missing(tier) {
            Some(required) => Err(CombErr::capability(self.name(), required, tier)),
            None => Ok(self.offered(tier)),
        }
    }
}

impl<T, E> Debug for Op<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Take(n) => write!(f, "{}({n})", self.name()),
            _ => write!(f, "{}", self.name()),
        }
    }
}

type Pull<T, E> = Result<T, E>;

/// 操作应用后的求值链，按当前能力等级擦除具体类型。
pub(crate) enum Chain<T, E> {
    Sized(Box<dyn SizedDoubleEnded<Item = Pull<T, E>>>),
    DoubleEnded(Box<dyn DoubleEnded<Item = Pull<T, E>>>),
    Base(Box<dyn Base<Item = Pull<T, E>>>),
}

/// 保持能力等级不变地包装求值链。
macro_rules! same_tier {
    ($chain:expr, |$inner:ident| $wrap:expr) => {
        match $chain {
            Chain::Sized($inner) => Chain::Sized(Box::new($wrap)),
            Chain::DoubleEnded($inner) => Chain::DoubleEnded(Box::new($wrap)),
            Chain::Base($inner) => Chain::Base(Box::new($wrap)),
        }
    };
}

impl<T: 'static, E: 'static> Chain<T, E> {
    pub(crate) fn new(origin: Origin<T>) -> Self {
        match origin {
            Origin::Seq(cursor) => Chain::Sized(Box::new(cursor.map(Ok::<T, E>))),
            Origin::Gen(stream) => Chain::Base(Box::new(stream.map(Ok::<T, E>))),
        }
    }

    pub(crate) fn tier(&self) -> Tier {
        match self {
            Chain::Sized(_) => Tier::SizedDoubleEnded,
            Chain::DoubleEnded(_) => Tier::DoubleEnded,
            Chain::Base(_) => Tier::Base,
        }
    }

    /// 应用一个操作。能力等级已在追加时校验过。
    pub(crate) fn apply(self, op: Op<T, E>) -> Self {
        match op {
            Op::Map(mut f) => same_tier!(self, |inner| inner.map(move |item: Pull<T, E>| item.and_then(&mut f))),
            Op::Filter(mut predicate) => {
                // 丢弃的元素为`None`，错误元素总是保留，以便由终端操作返回
                let judge = move |item: Pull<T, E>| {
                    item.and_then(|value| predicate(&value).map(|keep| keep.then_some(value))).transpose()
                };
                let settle = |item: Option<Pull<T, E>>| item.unwrap_or_else(|| unreachable!("dropped item after filter"));
                match self {
                    Chain::Sized(inner) => {
                        Chain::DoubleEnded(Box::new(inner.map(judge).filter(Option::is_some).map(settle)))
                    }
                    Chain::DoubleEnded(inner) => {
                        Chain::DoubleEnded(Box::new(inner.map(judge).filter(Option::is_some).map(settle)))
                    }
                    Chain::Base(inner) => Chain::Base(Box::new(inner.map(judge).filter(Option::is_some).map(settle))),
                }
            }
            Op::Enumerate(index_fn) => {
                let indexed = move |(index, item): (usize, Pull<T, E>)| item.map(|value| index_fn(index, value));
                match self {
                    Chain::Sized(inner) => Chain::Sized(Box::new(inner.enumerate().map(indexed))),
                    Chain::Base(inner) => Chain::Base(Box::new(inner.enumerate().map(indexed))),
                    Chain::DoubleEnded(_) => unreachable!("enumerate over an unsized double-ended chain"),
                }
            }
            Op::Take(n) => same_tier!(self, |inner| inner.take(n)),
            Op::Reverse => match self {
                Chain::Sized(inner) => Chain::Sized(Box::new(inner.rev())),
                Chain::DoubleEnded(inner) => Chain::DoubleEnded(Box::new(inner.rev())),
                Chain::Base(_) => unreachable!("reverse over a base chain"),
            },
        }
    }
}

impl<T, E> Base for Chain<T, E> {
    type Item = Pull<T, E>;

    fn pull_front(&mut self) -> Option<Self::Item> {
        match self {
            Chain::Sized(inner) => inner.pull_front(),
            Chain::DoubleEnded(inner) => inner.pull_front(),
            Chain::Base(inner) => inner.pull_front(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Chain::Sized(inner) => inner.size_hint(),
            Chain::DoubleEnded(inner) => inner.size_hint(),
            Chain::Base(inner) => inner.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn ops() -> Vec<Op<i32, Infallible>> {
        vec![
            Op::Map(Box::new(Ok::<i32, Infallible>)),
            Op::Filter(Box::new(|_: &i32| Ok::<bool, Infallible>(true))),
            Op::Enumerate(|_, x| x),
            Op::Take(3),
            Op::Reverse,
        ]
    }

    #[test]
    fn test_op_names() {
        let names = ops().iter().map(Op::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["map", "filter", "enumerate", "take", "reverse"]);
        assert_eq!(Op::<i32, Infallible>::all_help().len(), 5);
        assert_eq!(format!("{:?}", Op::<i32, Infallible>::Take(3)), "take(3)");
        assert!(Op::<i32, Infallible>::Reverse.help().contains("交换头尾"));
    }

    #[test]
    fn test_op_check_tiers() {
        let [map, filter, enumerate, take, reverse]: [Op<i32, Infallible>; 5] =
            ops().try_into().unwrap_or_else(|_| unreachable!());
        assert_eq!(map.check(Tier::SizedDoubleEnded), Ok(Tier::SizedDoubleEnded));
        assert_eq!(filter.check(Tier::SizedDoubleEnded), Ok(Tier::DoubleEnded));
        assert_eq!(filter.check(Tier::Base), Ok(Tier::Base));
        assert_eq!(enumerate.check(Tier::SizedDoubleEnded), Ok(Tier::SizedDoubleEnded));
        assert_eq!(enumerate.check(Tier::Base), Ok(Tier::Base));
        assert_eq!(
            enumerate.check(Tier::DoubleEnded),
            Err(CombErr::capability("enumerate", Tier::SizedDoubleEnded, Tier::DoubleEnded))
        );
        assert_eq!(take.check(Tier::DoubleEnded), Ok(Tier::DoubleEnded));
        assert_eq!(reverse.check(Tier::DoubleEnded), Ok(Tier::DoubleEnded));
        assert_eq!(reverse.check(Tier::Base), Err(CombErr::capability("reverse", Tier::DoubleEnded, Tier::Base)));
    }

    #[test]
    fn test_chain_follows_tiers() {
        let chain: Chain<i32, Infallible> = Chain::new(Origin::from_seq(vec![1, 2, 3]));
        assert_eq!(chain.tier(), Tier::SizedDoubleEnded);
        let chain = chain.apply(Op::Filter(Box::new(|x: &i32| Ok::<bool, Infallible>(*x > 1))));
        assert_eq!(chain.tier(), Tier::DoubleEnded);
        let mut chain = chain.apply(Op::Reverse);
        assert_eq!(chain.tier(), Tier::DoubleEnded);
        assert_eq!(chain.try_to_vec(), Ok(vec![3, 2]));

        let chain: Chain<i32, Infallible> = Chain::new(Origin::from_gen(vec![1, 2, 3].into_iter()));
        assert_eq!(chain.tier(), Tier::Base);
        assert_eq!(chain.apply(Op::Take(2)).tier(), Tier::Base);
    }

    #[test]
    fn test_chain_keeps_errors_through_filter() {
        let chain: Chain<i32, String> = Chain::new(Origin::from_seq(vec![1, 2, 3]));
        let chain = chain.apply(Op::Map(Box::new(|x: i32| if x == 2 { Err("two".to_owned()) } else { Ok(x) })));
        let mut chain = chain.apply(Op::Filter(Box::new(|_: &i32| Ok::<bool, String>(false))));
        assert_eq!(chain.try_to_vec(), Err("two".to_owned()));
        assert_eq!(chain.try_to_vec(), Ok(vec![]));
    }

    #[test]
    fn test_chain_failing_predicate() {
        let chain: Chain<i32, String> = Chain::new(Origin::from_seq(vec![1, 2, 3, 4]));
        let predicate = |x: &i32| if *x == 3 { Err(format!("cannot judge {x}")) } else { Ok(*x % 2 == 0) };
        let mut chain = chain.apply(Op::Filter(Box::new(predicate))).apply(Op::Reverse);
        assert_eq!(chain.tier(), Tier::DoubleEnded);
        assert_eq!(chain.try_to_vec(), Err("cannot judge 3".to_owned()));
        assert_eq!(chain.try_to_vec(), Ok(vec![2]));
    }
}
