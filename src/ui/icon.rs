use leptos::prelude::*;

/// Inline stroke icon (24x24 viewBox)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let paths = icons::paths(name);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Icon names
pub mod icons {
    pub const SHIELD: &str = "shield";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const CLOCK: &str = "clock";
    pub const LOADER: &str = "loader";
    pub const LOG_OUT: &str = "log-out";
    pub const MAIL: &str = "mail";
    pub const USER: &str = "user";

    /// Path data for a named icon. Unknown names render empty.
    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            SHIELD => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            SUN => &[
                "M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
            ],
            MOON => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            EYE => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            EYE_OFF => &[
                "M9.88 9.88a3 3 0 1 0 4.24 4.24",
                "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
                "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
                "M2 2l20 20",
            ],
            ALERT_CIRCLE => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M12 8v4M12 16h.01",
            ],
            CHECK => &["M20 6L9 17l-5-5"],
            CLOCK => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
            LOADER => &["M21 12a9 9 0 1 1-6.219-8.56"],
            LOG_OUT => &[
                "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
                "M16 17l5-5-5-5M21 12H9",
            ],
            MAIL => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            USER => &[
                "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
                "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            ],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::icons;

    #[test]
    fn test_known_icons_have_paths() {
        for name in [
            icons::SHIELD,
            icons::SUN,
            icons::MOON,
            icons::EYE,
            icons::EYE_OFF,
            icons::ALERT_CIRCLE,
            icons::CHECK,
            icons::CLOCK,
            icons::LOADER,
            icons::LOG_OUT,
            icons::MAIL,
            icons::USER,
        ] {
            assert!(!icons::paths(name).is_empty(), "{name} has no paths");
        }
        assert!(icons::paths("unknown").is_empty());
    }
}
