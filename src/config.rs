//! Fixed configuration for the page. Everything here is hand-set content,
//! not derived at runtime.

/// HTMW competition registration link, opened in a new tab.
pub const HTMW_REGISTER_URL: &str = "https://app.howthemarketworks.com/register/343878";

/// Google Form every participant must fill out after registering on HTMW.
pub const ENTRY_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfHwX6r2kgORMj8v_oUI4khJ-JMN6QuMfgs2zjoEb8wcUlaxw/viewform?usp=header";

/// HTMW homepage, linked inline from the hero and about sections.
pub const HTMW_HOME_URL: &str = "https://www.howthemarketworks.com/";

/// Password participants enter when joining the HTMW competition.
pub const REGISTRATION_PASSWORD: &str = "West100";

pub const CONTACT_EMAIL: &str = "marcushane@icloud.com";
pub const CONTACT_PHONE: &str = "914-374-2069";

/// Height of the fixed navbar; in-page scroll targets are offset by this so
/// section titles land below it.
pub const NAV_HEIGHT_PX: f64 = 72.0;

/// Scroll offset past which the navbar picks up its solid background.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 4.0;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;
