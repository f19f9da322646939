//! App Root Component
//!
//! Main application component with routing.

use chrono::Datelike;
use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/activities" view=Activities />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/teams" view=Teams />
                        <Route path="/leaderboard" view=Leaderboard />
                        <Route path="/users" view=Users />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4 text-center text-sm text-gray-400">
            {format!("© {} OctoFit Tracker - Mergington High School Physical Education", year)}
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
