use crate::err::RsErr;
use nom::character::complete::{char, i64, space0};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use std::iter::Peekable;

/// 解析逗号分隔的整数列表，允许元素两侧有空格。
///  - `1,-2,3,-4`
///  - `1, -2, 3`
pub(crate) fn integers(input: &str) -> IResult<&str, Vec<i64>> {
    separated_list1(char(','), delimited(space0, i64, space0)).parse(input)
}

/// 解析可选的源数据参数，未指定时使用默认数据，多余的参数视为错误。
pub(crate) fn parse_source(
    mut args: Peekable<impl Iterator<Item = String>>, default: &[i64],
) -> Result<Vec<i64>, RsErr> {
    let source = match args.next() {
        Some(arg_value) => match all_consuming(integers).parse(arg_value.as_str()) {
            Ok((_, values)) => values,
            Err(err) => Err(RsErr::ArgParseErr { arg: "source", arg_value: arg_value.clone(), error: err.to_string() })?,
        },
        None => default.to_vec(),
    };
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(RsErr::UnknownArgs { args: remaining }) } else { Ok(source) }
}
