//! Fixed UI pacing, in milliseconds. These delays drive animations and
//! redirects only; no network call is timed out or retried with them.

/// Delay between a successful login and the redirect, long enough for
/// the success notification to be seen.
pub const REDIRECT_DELAY_MS: u32 = 700;

/// The submit button leaves its loading state this long after a request
/// settles, whatever the outcome.
pub const LOADING_CLEAR_MS: u32 = 400;

/// Duration of the shake animation on a failed login.
pub const SHAKE_MS: u32 = 500;

/// Delay before a freshly created notification slides in, so the
/// off-screen position is committed first and the transition runs.
pub const NOTICE_SLIDE_IN_MS: u32 = 50;

/// How long a notification stays on screen before sliding back out.
pub const NOTICE_LINGER_MS: u32 = 3000;

/// Duration of the slide-out transition before the element is dropped.
pub const NOTICE_SLIDE_OUT_MS: u32 = 300;
