// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Where a log call came from.

Method calls on a [Printer](crate::Printer) are `#[track_caller]` all the way down, so the location
the compiler reports is the user's call site rather than a convenience wrapper.  The compiler
can't tell us the function name though.  The logging macros fill that in with
[function_name!](crate::function_name).
*/

use std::fmt::Display;
use std::panic::Location;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    pub file: String,
    pub line: u32,
    pub function: Option<String>,
}

impl Origin {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            function: None,
        }
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// The location of whoever called the current `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// `file:line - function` as markup.
    pub(crate) fn markup(&self) -> String {
        let mut out = format!(
            "[cyan]{}[/]:[cyan]{}[/]",
            crate::markup::escape(&self.file),
            self.line
        );
        if let Some(function) = &self.function {
            out.push_str(&format!(
                " - [dim cyan]{}[/]",
                crate::markup::escape(function)
            ));
        }
        out
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(function) = &self.function {
            write!(f, " - {}", function)?;
        }
        Ok(())
    }
}

/// Trims a `type_name` path down to the bare function name, skipping closure frames.
#[doc(hidden)]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__f").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/**
Expands to the name of the enclosing function.

```
fn compute() -> &'static str {
    printwise::function_name!()
}
assert_eq!(compute(), "compute");
```
*/
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::origin::short_function_name(type_name_of(__f))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn wrapper() -> Origin {
        Origin::caller()
    }

    #[test]
    fn caller_sees_through_track_caller() {
        let line = line!() + 1;
        let origin = wrapper();
        assert_eq!(origin.line, line);
        assert!(origin.file.ends_with("origin.rs"));
        assert_eq!(origin.function, None);
    }

    #[test]
    fn display() {
        let origin = Origin::new("src/main.rs", 12);
        assert_eq!(origin.to_string(), "src/main.rs:12");
        assert_eq!(
            origin.clone().with_function("main").to_string(),
            "src/main.rs:12 - main"
        );
        assert_eq!(
            crate::markup::strip(&origin.with_function("main").markup()),
            "src/main.rs:12 - main"
        );
    }

    #[test]
    fn function_names() {
        assert_eq!(function_name!(), "function_names");
        let closure = || function_name!();
        assert_eq!(closure(), "function_names");
        assert_eq!(short_function_name("a::b::c::__f"), "c");
    }
}
