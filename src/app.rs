mod contact;
mod homepage;
mod modal;
mod projects;
mod toasts;

pub use modal::{use_focusable, Modal};
pub use toasts::{provide_notifications, try_use_notifications, use_notifications, Notifications};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::HomePage;
use toasts::ToastRegion;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_notifications();

    view! {
        <Title formatter=|title| format!("Ahmed Ali - {title}") />

        <Router>
            <main class="flex flex-col flex-grow mx-auto w-full max-w-6xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
        <ToastRegion />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-xs text-muted">
            "Built with Leptos on " {env!("BUILD_DATE")}
        </footer>
    }
}
