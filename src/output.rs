use itertools::Itertools;
use std::mem;

/// `peek`的报告目标。
///
/// 每个保留下来的元素调用一次[`Report::element`]，全部元素报告完成后调用一次[`Report::end`]。
pub trait Report {
    fn element(&mut self, text: &str);

    fn end(&mut self);
}

/// 输出到标准输出：元素之间以空格分隔，结束时换行。
#[derive(Debug, Default, Clone, Copy)]
pub struct StdOut;

impl Report for StdOut {
    fn element(&mut self, text: &str) {
        print!("{text} ");
    }

    fn end(&mut self) {
        println!();
    }
}

/// 记录报告内容，每次`peek`（以结束标记为界）记录为一组。
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Recorder {
    pending: Vec<String>,
    reports: Vec<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// 已完成（收到结束标记）的报告。
    pub fn reports(&self) -> &[Vec<String>] {
        &self.reports
    }

    /// 已收到元素但尚未收到结束标记的部分。
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// 按`StdOut`的格式拼接已完成的报告。
    pub fn render(&self) -> String {
        self.reports.iter().map(|report| report.iter().map(|text| format!("{text} ")).join("") + "\n").join("")
    }
}

impl Report for Recorder {
    fn element(&mut self, text: &str) {
        self.pending.push(text.to_owned());
    }

    fn end(&mut self) {
        self.reports.push(mem::take(&mut self.pending));
    }
}
