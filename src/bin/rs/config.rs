use cmd_help::CmdHelp;
use std::iter::Peekable;

#[derive(Debug, Clone, Copy, Eq, PartialEq, CmdHelp)]
pub(crate) enum Config {
    /// -h  打印帮助信息。
    Help,
    /// -V  打印版本信息。
    Version,
    /// -v  执行每一步流水线操作之前打印该操作。
    Verbose,
    /// -b  额外运行基准对比：手写循环与等价流水线分别计时。
    ///     基准数据为随机生成的整数，不使用命令行给出的数据。
    Bench,
}

/// 解析开头的全部配置标志，遇到第一个非配置参数时停止。
pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = args.peek().and_then(|arg| Config::from_flag(arg)) {
        args.next();
        if !configs.contains(&config) {
            configs.push(config);
        }
    }
    configs
}

#[inline]
pub(crate) fn is_verbose(configs: &[Config]) -> bool {
    configs.contains(&Config::Verbose)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
        args_line.split(' ').filter(|arg| !arg.is_empty()).map(String::from).peekable()
    }

    #[test]
    fn test_parse_configs() {
        let mut args = build_args("-v -b -v 1,2,3");
        assert_eq!(parse_configs(&mut args), vec![Config::Verbose, Config::Bench]);
        assert_eq!(args.next(), Some("1,2,3".to_string()));

        let mut args = build_args("1,2,3 -v");
        assert!(parse_configs(&mut args).is_empty());
        assert_eq!(args.count(), 2);

        assert!(parse_configs(&mut build_args("")).is_empty());
    }

    #[test]
    fn test_flags() {
        assert_eq!(Config::Help.flag(), "-h");
        assert_eq!(Config::from_flag("-V"), Some(Config::Version));
        assert_eq!(Config::from_flag("--verbose"), None);
        assert_eq!(Config::Verbose.help(), "执行每一步流水线操作之前打印该操作。");
        assert!(Config::Bench.help().contains('\n'));
        assert_eq!(Config::all_help().len(), 4);
    }
}
