pub(crate) mod impl_window_source;
mod procfs;
mod xorg;

pub(crate) use impl_window_source::{
    ImplWindowSource, cursor_position, foreground_window, running_processes,
};
