use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::provide_verification_handoff;
use crate::ui::pages::{
    DashboardPage, ForgotPasswordPage, LoginPage, NotFoundPage, OtpPage, ResetPasswordPage,
    SignupPage,
};
use crate::ui::provide_theme_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_theme_context();
    provide_verification_handoff();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/secureauth.css"/>

        <Title text="SecureAuth"/>

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route path=path!("/otp") view=OtpPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/forget-password") view=ForgotPasswordPage/>
                    <Route path=path!("/reset-password") view=ResetPasswordPage/>
                </Routes>
            </main>
        </Router>
    }
}
