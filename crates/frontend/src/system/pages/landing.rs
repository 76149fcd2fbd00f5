use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::auth_modal::{AuthMode, AuthModal};
use crate::shared::icons::icon;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth_mode = RwSignal::new(Option::<AuthMode>::None);

    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">"QueryLens"</span>
                <div class="landing__actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| auth_mode.set(Some(AuthMode::Login))
                    >
                        "Log in"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| auth_mode.set(Some(AuthMode::Signup))
                    >
                        "Sign up"
                    </Button>
                </div>
            </header>

            <section class="landing__hero">
                <h1>"Ask your database questions in plain language"</h1>
                <p>
                    "Connect a PostgreSQL data source, describe what you want to see, "
                    "and get the SQL, the rows and a chart you can save."
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| auth_mode.set(Some(AuthMode::Signup))
                >
                    "Get started"
                </Button>
            </section>

            <section class="landing__features">
                <div class="landing__feature">
                    {icon("database")}
                    <h3>"Connect"</h3>
                    <p>"Register PostgreSQL databases and test the connection before saving."</p>
                </div>
                <div class="landing__feature">
                    {icon("dashboard")}
                    <h3>"Query"</h3>
                    <p>"Turn a prompt into a SELECT statement, or write your own."</p>
                </div>
                <div class="landing__feature">
                    {icon("bar-chart")}
                    <h3>"Visualize"</h3>
                    <p>"Generate number, bar, line and pie charts and keep them for later."</p>
                </div>
            </section>

            {move || auth_mode.get().map(|_| view! { <AuthModal mode=auth_mode /> })}
        </div>
    }
}
