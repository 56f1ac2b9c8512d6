#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Config {
    /// 求值前打印待执行的操作链。
    Verbose,
}

#[inline]
pub(crate) fn is_verbose(configs: &[Config]) -> bool {
    configs.contains(&Config::Verbose)
}
