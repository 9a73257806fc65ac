//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_header::NavHeader, toast_stack::ToastStack};
use crate::pages::{
    calendar::CalendarPage,
    login::LoginPage,
    plans::{PlanPage, PlansIndexPage},
    recipe_detail::RecipeDetailPage,
    recipes::RecipesPage,
    shopping::ShoppingPage,
    signup::SignupPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, restores the session from the
/// stored token once hydrated, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::util::session::restore(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/mealplanner.css"/>
        <Title text="Meal Planner"/>

        <Router>
            <NavHeader/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RecipesPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("calendar") view=CalendarPage/>
                    <Route path=StaticSegment("plans") view=PlansIndexPage/>
                    <Route path=(StaticSegment("plans"), ParamSegment("id")) view=PlanPage/>
                    <Route path=StaticSegment("shopping") view=ShoppingPage/>
                    <Route path=(StaticSegment("recipe"), StaticSegment("local"), ParamSegment("id")) view=RecipeDetailPage/>
                    <Route
                        path=(
                            StaticSegment("recipe"),
                            StaticSegment("external"),
                            ParamSegment("provider"),
                            ParamSegment("external_id"),
                        )
                        view=RecipeDetailPage
                    />
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
