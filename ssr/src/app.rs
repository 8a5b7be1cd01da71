use crate::error_template::{AppError, ErrorTemplate};
use consts::COMPANY_NAME;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use page::root::LandingPage;
use state::theme::ThemeCtx;

#[component]
fn NotFound() -> impl IntoView {
    let mut outside_errors = Errors::default();
    outside_errors.insert_with_default_key(AppError::NotFound);
    view! { <ErrorTemplate outside_errors /> }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HashedStylesheet id="leptos" options=options.clone() />
                <Meta property="og:title" content=COMPANY_NAME />
                <Meta property="og:image" content="/img/hero-poster.webp" />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ThemeCtx::from_preference());

    view! {
        <Title text=COMPANY_NAME />
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg" />

        <Router>
            <main id="body">
                <Routes fallback=|| view! { <NotFound /> }.into_view()>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}
