pub mod left;
pub mod top_header;

use crate::system::auth::RequireAuth;
use left::Sidebar;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Authenticated shell around every resource screen.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |         Outlet               |
/// +------------------------------------------+
/// ```
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="app-layout">
                <TopHeader />
                <div class="app-body">
                    <Sidebar />
                    <div class="app-main">
                        <Outlet />
                    </div>
                </div>
            </div>
        </RequireAuth>
    }
}
