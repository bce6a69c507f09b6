//SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

/**
Where rendered text ends up.

The console hands a sink fully rendered text, line terminator included, one call per line.
*/
pub trait Sink: Debug + Send + Sync {
    /**
    Writes the text.

    Implementations swallow I/O errors; printing is never allowed to fail the caller.
    */
    fn write_text(&self, text: &str);

    /// Whether the sink is an interactive terminal, used to decide on color.
    fn is_terminal(&self) -> bool {
        false
    }

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn prepare_to_die(&self) {}
}

/*
Boilerplate notes.

# Sink

Clone on Sink doesn't make sense, sinks are shared through Arc.
PartialEq and Eq are possible but it's unclear if we mean data equality or the same destination.  Not implemented.
Default is not sensible for the trait.
Send/Sync is required since a console may be shared by the global printer.
*/
