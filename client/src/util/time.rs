//! Browser clock access that degrades gracefully off-browser.

/// Milliseconds since Unix epoch from the browser clock, or 0 during SSR
/// and tests. Timestamps only order chat turns, so 0 is harmless there.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
