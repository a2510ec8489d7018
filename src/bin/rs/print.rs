/// 标准错误为终端时使用给定的ANSI颜色输出。
#[macro_export]
macro_rules! colored {
    ($print:ident, $println:ident, $color:literal, $($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            $print!(concat!("\x1b[", $color, "m"));
            $print!($($arg)*);
            $println!("\x1b[0m");
        } else {
            $println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! println_err {
    ($($arg:tt)*) => {
        $crate::colored!(eprint, eprintln, "1;31", $($arg)*)
    };
}

#[macro_export]
macro_rules! println_info {
    ($($arg:tt)*) => {
        $crate::colored!(print, println, "1;34", $($arg)*)
    };
}

#[macro_export]
macro_rules! println_notice {
    ($($arg:tt)*) => {
        $crate::colored!(print, println, "35", $($arg)*)
    };
}
