use rstream::StreamErr;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum RsErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` as argument `{arg}`, error: {error}")]
    ArgParseErr { arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Bench] Pipeline result of `{case}` differs from the hand-written loop")]
    BenchMismatch { case: &'static str },

    #[error(transparent)]
    Stream(#[from] StreamErr),
}

impl Termination for RsErr {
    fn report(self) -> ExitCode {
        crate::println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl RsErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            RsErr::ArgParseErr { .. } => 1,
            RsErr::UnknownArgs { .. } => 2,
            RsErr::BenchMismatch { .. } => 3,
            RsErr::Stream(StreamErr::AlreadyConsumed { .. }) => 4,
            RsErr::Stream(StreamErr::EmptyReduction) => 5,
        }
    }
}
