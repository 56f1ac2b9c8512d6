use crate::config::{Config, is_verbose};
use crate::cursor::Origin;
use crate::err::CombErr;
use crate::item::Indexed;
use crate::op::{Chain, Op};
use crate::tier::{Base, Tier};
use crate::{CombRes, Integer};
use itertools::Itertools;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt::{Debug, Formatter};
use tracing::{debug, info, trace};

/// 可变流水线：每次组合调用都在同一个句柄上追加一个待执行操作并返回该句柄本身，
/// 直到终端操作（`to_vec`、`fold`、`try_fold`）才按追加顺序应用到共享游标上。
///
/// 终端操作清空待执行操作并将[`uncalled`](Pipeline::uncalled)归零，句柄可继续使用，
/// 之后的调用只能看到游标上尚未消耗的元素。计算结果与逐次包装的适配器写法完全一致。
///
/// `E`为变换函数的错误类型，只使用不会失败的变换时保持默认即可。
pub struct Pipeline<T: 'static, E: 'static = Infallible> {
    origin: Origin<T>,
    pending: VecDeque<Op<T, E>>,
    tier: Tier,
    configs: Vec<Config>,
}

impl<T: 'static, E: 'static> Pipeline<T, E> {
    pub fn new(origin: Origin<T>) -> Self {
        let tier = origin.tier();
        Pipeline { origin, pending: VecDeque::new(), tier, configs: Vec::new() }
    }

    /// 从已知长度的序列创建，能力为[`Tier::SizedDoubleEnded`]。
    pub fn from_seq(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(Origin::from_seq(items))
    }

    /// 从不透明生成器创建，能力为[`Tier::Base`]。
    pub fn from_gen(generator: impl Iterator<Item = T> + 'static) -> Self {
        Self::new(Origin::from_gen(generator))
    }

    pub fn with_configs(mut self, configs: &[Config]) -> Self {
        self.configs.extend_from_slice(configs);
        self
    }

    /// 自上次终端操作以来追加的操作数量。
    pub fn uncalled(&self) -> usize {
        self.pending.len()
    }

    /// 待执行操作全部应用后提供的能力等级。
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// 待执行操作的名称，按追加顺序。
    pub fn describe(&self) -> Vec<&'static str> {
        self.pending.iter().map(Op::name).collect_vec()
    }

    /// 底层游标的剩余数量，不考虑待执行操作；仅已知长度的序列可用。
    pub fn remaining(&self) -> Option<usize> {
        self.origin.remaining()
    }

    /// 与本流水线共享同一游标的数据源句柄。
    pub fn origin(&self) -> Origin<T> {
        self.origin.share()
    }

    pub fn map(&mut self, mut f: impl FnMut(T) -> T + 'static) -> &mut Self {
        self.enqueue(Op::Map(Box::new(move |item: T| Ok::<T, E>(f(item)))))
    }

    /// 可失败的变换。失败时终端操作返回该错误，游标停在出错元素之后。
    pub fn try_map(&mut self, f: impl FnMut(T) -> Result<T, E> + 'static) -> &mut Self {
        self.enqueue(Op::Map(Box::new(f)))
    }

    pub fn filter(&mut self, mut predicate: impl FnMut(&T) -> bool + 'static) -> &mut Self {
        self.enqueue(Op::Filter(Box::new(move |item: &T| Ok::<bool, E>(predicate(item)))))
    }

    /// 可失败的过滤。失败时终端操作返回该错误，游标停在出错元素之后。
    pub fn try_filter(&mut self, predicate: impl FnMut(&T) -> Result<bool, E> + 'static) -> &mut Self {
        self.enqueue(Op::Filter(Box::new(predicate)))
    }

    /// 按拉取顺序编号，要求当前能力为精确数量的双端或仅头部拉取。
    pub fn enumerate(&mut self) -> CombRes<&mut Self>
    where
        T: Indexed,
    {
        self.push(Op::Enumerate(T::with_index))
    }

    /// 最多拉取`n`次，`n`不能为负数。
    pub fn take(&mut self, n: Integer) -> CombRes<&mut Self> {
        let n = usize::try_from(n).map_err(|_| CombErr::InvalidArgument {
            op: "take",
            arg: "count",
            value: n.to_string(),
            reason: "must not be negative",
        })?;
        self.push(Op::Take(n))
    }

    /// 交换头尾，要求当前能力至少为双端。
    pub fn rev(&mut self) -> CombRes<&mut Self> {
        self.push(Op::Reverse)
    }

    /// 从头部拉取直到耗尽，按拉取顺序收集。
    pub fn to_vec(&mut self) -> Result<Vec<T>, E> {
        self.bake().try_to_vec()
    }

    /// 左折叠，拉取顺序与`to_vec`一致。
    pub fn fold<B>(&mut self, init: B, mut g: impl FnMut(B, T) -> B) -> Result<B, E> {
        self.bake().try_fold(init, |acc, item| item.map(|value| g(acc, value)))
    }

    /// 可失败的左折叠，遇到第一个错误即停止拉取。
    pub fn try_fold<B>(&mut self, init: B, mut g: impl FnMut(B, T) -> Result<B, E>) -> Result<B, E> {
        self.bake().try_fold(init, |acc, item| item.and_then(|value| g(acc, value)))
    }

    fn push(&mut self, op: Op<T, E>) -> CombRes<&mut Self> {
        self.tier = op.check(self.tier)?;
        trace!(op = op.name(), tier = %self.tier, "op appended");
        self.pending.push_back(op);
        Ok(self)
    }

    /// 追加不要求任何能力的操作。
    fn enqueue(&mut self, op: Op<T, E>) -> &mut Self {
        self.tier = op.offered(self.tier);
        trace!(op = op.name(), tier = %self.tier, "op appended");
        self.pending.push_back(op);
        self
    }

    /// 取出全部待执行操作并构造求值链。
    fn bake(&mut self) -> Chain<T, E> {
        let ops = self.pending.drain(..).collect_vec();
        self.tier = self.origin.tier();
        if is_verbose(&self.configs) {
            info!(ops = %ops.iter().map(Op::name).join(" -> "), source = %self.tier, "pipeline");
        }
        let chain = ops.into_iter().fold(Chain::new(self.origin.share()), Chain::apply);
        debug!(source = %self.tier, chain = %chain.tier(), "evaluating pipeline");
        chain
    }
}

impl<T: Debug + 'static, E: 'static> Debug for Pipeline<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("origin", &self.origin)
            .field("pending", &self.pending)
            .field("tier", &self.tier)
            .field("configs", &self.configs)
            .finish()
    }
}
