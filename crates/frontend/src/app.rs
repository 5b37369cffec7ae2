use crate::domain::a001_empresa::ui::{details::EmpresaDetails, list::EmpresaList};
use crate::domain::a002_area::ui::{details::AreaDetails, list::AreaList};
use crate::domain::a003_actividad::ui::{details::ActividadDetails, list::ActividadList};
use crate::domain::a004_material::ui::{details::MaterialDetails, list::MaterialList};
use crate::domain::a005_motivo::ui::{details::MotivoDetails, list::MotivoList};
use crate::domain::a006_metodo::ui::{details::MetodoDetails, list::MetodoList};
use crate::domain::a007_zona::ui::{details::ZonaDetails, list::ZonaList};
use crate::domain::a008_checklist::ui::{
    details::ChecklistDetails, list::ChecklistList, view::ChecklistView,
};
use crate::layout::AppLayout;
use crate::system::auth::AuthProvider;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Every resource lives under `/{collection}` with `nuevo|nueva` and
/// `editar/:id` children; the route query carries the configuration scope.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AuthProvider>
                <Routes fallback=|| view! { <div class="page__not-found">"Página no encontrada"</div> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/") view=|| view! { <Redirect path="/empresas" /> } />

                    <ParentRoute path=path!("/empresas") view=AppLayout>
                        <Route path=path!("") view=EmpresaList />
                        <Route path=path!("nueva") view=EmpresaDetails />
                        <Route path=path!("editar/:id") view=EmpresaDetails />
                    </ParentRoute>

                    <ParentRoute path=path!("/areas") view=AppLayout>
                        <Route path=path!("") view=AreaList />
                        <Route path=path!("nueva") view=AreaDetails />
                        <Route path=path!("editar/:id") view=AreaDetails />
                    </ParentRoute>

                    <ParentRoute path=path!("/actividades") view=AppLayout>
                        <Route path=path!("") view=ActividadList />
                        <Route path=path!("nueva") view=ActividadDetails />
                        <Route path=path!("editar/:id") view=ActividadDetails />
                    </ParentRoute>

                    <ParentRoute path=path!("/materiales") view=AppLayout>
                        <Route path=path!("") view=MaterialList />
                        <Route path=path!("nuevo") view=MaterialDetails />
                        <Route path=path!("editar/:id") view=MaterialDetails />
                    </ParentRoute>

                    <ParentRoute path=path!("/motivos") view=AppLayout>
                        <Route path=path!("") view=MotivoList />
                        <Route path=path!("nuevo") view=MotivoDetails />
                        <Route path=path!("editar/:id") view=MotivoDetails />
                    </ParentRoute>

                    <ParentRoute path=path!("/metodos") view=AppLayout>
                        <Route path=path!("") view=MetodoList />
                        <Route path=path!("nuevo") view=MetodoDetails />
                        <Route path=path!("editar/:id") view=MetodoDetails />
                    </ParentRoute>

                    <ParentRoute path=path!("/zonas") view=AppLayout>
                        <Route path=path!("") view=ZonaList />
                        <Route path=path!("nueva") view=ZonaDetails />
                        <Route path=path!("editar/:id") view=ZonaDetails />
                    </ParentRoute>

                    <ParentRoute path=path!("/checklist") view=AppLayout>
                        <Route path=path!("") view=ChecklistList />
                        <Route path=path!("nuevo") view=ChecklistDetails />
                        <Route path=path!("editar/:id") view=ChecklistDetails />
                        <Route path=path!("detalle/:id") view=ChecklistView />
                    </ParentRoute>
                </Routes>
            </AuthProvider>
        </Router>
    }
}
