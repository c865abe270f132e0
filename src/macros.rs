// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg: String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! stat_line {
    // StatLine shorthand: stat_line![Points => 31.0, Assists => 7.0]
    // Unlisted stats stay at 0.
    () => {
        $crate::model::StatLine::default()
    };
    ($($stat:ident => $val:expr),+ $(,)?) => {{
        let mut line = $crate::model::StatLine::default();
        $(
            line.set($crate::model::Stat::$stat, $val as f64);
        )+
        line
    }};
}
