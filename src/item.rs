use crate::{Float, Integer};
use std::fmt::{Display, Formatter};

/// 元素如何吸收`enumerate`产生的编号。
///
/// [`Pipeline`](crate::pipe::Pipeline)中所有操作共享同一个元素类型，
/// 因此编号后的元素仍需是同一类型。
pub trait Indexed: Sized {
    fn with_index(index: usize, item: Self) -> Self;
}

/// 动态元素，供外部绑定层使用。
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Integer(Integer),
    Float(Float),
    Text(String),
    /// 编号及被编号的元素。
    Pair(usize, Box<Item>),
}

impl Indexed for Item {
    fn with_index(index: usize, item: Self) -> Self {
        Item::Pair(index, Box::new(item))
    }
}

impl Item {
    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Item::Integer(integer) => Some(*integer),
            _ => None,
        }
    }
}

impl From<Integer> for Item {
    fn from(value: Integer) -> Self {
        Item::Integer(value)
    }
}

impl From<Float> for Item {
    fn from(value: Float) -> Self {
        Item::Float(value)
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::Text(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Text(value.to_owned())
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Integer(integer) => write!(f, "{integer}"),
            Item::Float(float) => write!(f, "{float}"),
            Item::Text(text) => write!(f, "{text}"),
            Item::Pair(index, item) => write!(f, "({index}, {item})"),
        }
    }
}
