use crate::tier::Tier;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CombErr {
    #[error("[Capability] Op `{op}` requires at least `{required}` but the pipeline only offers `{actual}`")]
    CapabilityMismatch { op: &'static str, required: Tier, actual: Tier },

    #[error("[Bad Arg] Invalid value `{value}` in argument `{arg}` of op `{op}`: {reason}")]
    InvalidArgument { op: &'static str, arg: &'static str, value: String, reason: &'static str },
}

impl CombErr {
    pub(crate) fn capability(op: &'static str, required: Tier, actual: Tier) -> Self {
        CombErr::CapabilityMismatch { op, required, actual }
    }
}
