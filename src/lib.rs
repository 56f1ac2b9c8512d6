//! 惰性迭代组合器。
//!
//! 两种组合方式共享同一套语义：
//!
//! * 逐次包装：[`Base`]上的`map`、`filter`、`enumerate`、`take`、`rev`每次返回一个新的适配器，
//!   适配器的能力等级（[`Base`]、[`DoubleEnded`]、[`SizedDoubleEnded`]）由内部迭代器的类型静态决定；
//! * 可变流水线：[`Pipeline`]在同一个句柄上追加待执行操作，终端操作时统一求值。
//!
//! 数据源包装为共享游标（[`Cursor`]、[`Stream`]），任意句柄的部分消耗对其他指向同一游标的句柄可见：
//!
//! ```
//! use rcomb::{Base, Cursor};
//!
//! let cursor = Cursor::from(vec![1, 2, 3, 4, 5]);
//! assert_eq!(cursor.share().take(2).to_vec(), vec![1, 2]);
//! assert_eq!(cursor.share().to_vec(), vec![3, 4, 5]);
//! ```
//!
//! 流水线支持的操作及其说明可通过[`Op::all_help`]列出，单个操作见[`Op::name`]和[`Op::help`]：
//!
//! ```
//! use rcomb::Op;
//! use std::convert::Infallible;
//!
//! let help = Op::<i32, Infallible>::all_help();
//! let names = help.iter().map(|(name, _)| *name).collect::<Vec<_>>();
//! assert_eq!(names, vec!["map", "filter", "enumerate", "take", "reverse"]);
//! assert!(Op::<i32, Infallible>::Reverse.help().contains("双端"));
//! ```

pub mod adapter;
mod config;
mod cursor;
mod err;
mod item;
mod op;
mod pipe;
mod tier;

pub use config::Config;
pub use cursor::{Cursor, Origin, Stream};
pub use err::CombErr;
pub use item::{Indexed, Item};
pub use op::{IndexFn, MapFn, Op, PredicateFn};
pub use pipe::Pipeline;
pub use tier::{Base, DoubleEnded, Pulls, SizedDoubleEnded, Tier};

/// 整数类型
pub type Integer = i64;
/// 浮点类型
pub type Float = f64;
/// 组合器结果
pub type CombRes<T> = Result<T, CombErr>;
