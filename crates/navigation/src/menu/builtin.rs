//! Hand-authored navigation entries shipped with the application.
//!
//! Order is display order. Each row is `(title, target, icon)`.

pub(crate) const PRIMARY: &[(&str, &str, &str)] = &[
    ("Dashboard", "/dashboard", "LayoutGrid"),
    ("Users", "/users", "User"),
];

pub(crate) const FOOTER: &[(&str, &str, &str)] = &[
    (
        "React +Vite Frontend",
        "https://github.com/bjornleonhenry/react-laravel-frontend",
        "CirclePlay",
    ),
    (
        "Laravel Backend Api",
        "https://github.com/bjornleonhenry/react-laravel-backend",
        "SquareCode",
    ),
    (
        "Project Source Code",
        "https://github.com/bjornleonhenry/react-laravel-starter-kit",
        "Tractor",
    ),
];
