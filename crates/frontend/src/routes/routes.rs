use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d001_query_dashboard::ui::QueryDashboard;
use crate::domain::a001_datasource::ui::list::DatasourceList;
use crate::domain::a002_chart::ui::creation::ChartCreation;
use crate::domain::a002_chart::ui::list::ChartList;
use crate::layout::Shell;
use crate::system::auth::guard::ProtectedRoute;
use crate::system::pages::landing::LandingPage;

/// Signed-in area: session check first, then the shell with the page outlet.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Shell />
        </ProtectedRoute>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-not-found">
            <h2>"Page not found"</h2>
            <a href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("/dashboard") view=QueryDashboard />
                    <Route path=path!("/datasources") view=DatasourceList />
                    <Route path=path!("/charts") view=ChartList />
                    <Route path=path!("/charts/create") view=ChartCreation />
                    <Route path=path!("/charts/edit/:chartId") view=ChartCreation />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
