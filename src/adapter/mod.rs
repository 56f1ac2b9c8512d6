//! 惰性适配器。每个适配器包装一个内部迭代器，根据内部迭代器的能力等级决定自身提供的能力：
//!
//! | 适配器      | 内部要求         | 提供能力                          |
//! |-------------|------------------|-----------------------------------|
//! | `Map`       | 任意             | 与内部相同                        |
//! | `Filter`    | 任意             | 与内部相同，但从不提供精确数量    |
//! | `Enumerate` | 任意             | 内部为`SizedDoubleEnded`时与其相同，否则为`Base` |
//! | `Take`      | 任意             | 与内部相同                        |
//! | `Rev`       | `DoubleEnded`    | 与内部相同                        |

mod enumerate;
mod filter;
mod map;
mod rev;
mod take;

pub use enumerate::Enumerate;
pub use filter::Filter;
pub use map::Map;
pub use rev::Rev;
pub use take::Take;
