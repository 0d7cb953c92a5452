// src/macros.rs

/// Owned `String` from anything `String::from` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

/// Concatenate string pieces left to right into one owned `String`.
///
/// `join!(stem, "_", date, ".xlsx")`
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $( out.push_str($tail); )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_builds_file_names() {
        let stem = s!("report");
        assert_eq!(join!(stem, "_", "2024-01-02", ".xlsx"), "report_2024-01-02.xlsx");
        assert_eq!(s!(), "");
    }
}
