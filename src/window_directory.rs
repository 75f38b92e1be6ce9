use crate::{
    PeekShieldResult,
    platform::ImplWindowSource,
    window::{WindowRecord, WindowSource},
};

/// The desktop's own window list.
///
/// Every call to [`WindowSource::snapshot`] enumerates the windows afresh;
/// nothing is cached between captures.
#[derive(Debug, Clone)]
pub struct WindowDirectory {
    impl_window_source: ImplWindowSource,
}

impl WindowDirectory {
    pub fn new() -> Self {
        Self {
            impl_window_source: ImplWindowSource::new(),
        }
    }
}

impl Default for WindowDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSource for WindowDirectory {
    fn snapshot(&self) -> PeekShieldResult<Vec<WindowRecord>> {
        self.impl_window_source.snapshot()
    }
}
