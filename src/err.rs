use thiserror::Error;

/// 流水线错误。
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StreamErr {
    /// 流已被终结操作消费，不能再调用`filter`或任何终结操作。
    #[error("[Consumed] Stream has already been consumed, unable to call `{op}`")]
    AlreadyConsumed { op: &'static str },

    /// `reduce`时过滤后没有任何元素。
    #[error("[Reduce] No element retained by filters, nothing to reduce")]
    EmptyReduction,
}

pub type StreamRes<T> = Result<T, StreamErr>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StreamErr::AlreadyConsumed { op: "to_vec" }.to_string(),
            "[Consumed] Stream has already been consumed, unable to call `to_vec`"
        );
        assert_eq!(StreamErr::EmptyReduction.to_string(), "[Reduce] No element retained by filters, nothing to reduce");
    }
}
