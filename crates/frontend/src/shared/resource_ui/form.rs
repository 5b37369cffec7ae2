use crate::shared::api_utils::api;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use client::{return_path, ApiError, RouteContext};
use contracts::domain::common::{
    payload_from_fields, payload_to_fields, EntityId, FieldKind, RecordId, Resource,
    ResourcePayload,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

/// Create form at `/{collection}/nuevo|nueva`, edit form at
/// `/{collection}/editar/:id`.
///
/// Fields come from [`Resource::form_fields`]; on success the user goes back
/// to `returnTo` (or the list).
pub fn resource_form_view<R: Resource>() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();

    let ctx = Memo::new(move |_| RouteContext::from_query(&location.search.get()));
    let record_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| RecordId::from_string(&raw).ok())
    });

    let base = RwSignal::new(R::Payload::default());
    let fields = RwSignal::new(payload_to_fields(&R::Payload::default()));
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let field_error = RwSignal::new(Option::<(String, String)>::None);
    let banner = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let Some(id) = record_id.get() else {
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match api().show::<R>(id).await {
                Ok(record) => {
                    let payload = record.to_payload();
                    fields.try_set(payload_to_fields(&payload));
                    base.try_set(payload);
                }
                Err(err) => {
                    log::warn!("{}: failed to load {}: {}", R::full_name(), id, err);
                    banner.try_set(Some(err.to_string()));
                }
            }
            loading.try_set(false);
        });
    });

    let set_field = move |key: &'static str, value: String| {
        fields.update(|f| {
            f.insert(key.to_string(), value);
        });
        if field_error.with_untracked(|e| e.as_ref().is_some_and(|(k, _)| k == key)) {
            field_error.set(None);
        }
    };

    let show_error = move |err: ApiError| {
        let on_form = err
            .field()
            .filter(|f| R::form_fields().iter().any(|spec| spec.key == *f))
            .map(str::to_string);
        match on_form {
            Some(field) => field_error.set(Some((field, err.to_string()))),
            None => banner.set(Some(err.to_string())),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || loading.get_untracked() {
            return;
        }
        field_error.set(None);
        banner.set(None);

        let payload = match payload_from_fields(
            &base.get_untracked(),
            R::form_fields(),
            &fields.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                banner.set(Some(message));
                return;
            }
        };
        if let Err(e) = payload.validate() {
            show_error(e.into());
            return;
        }

        saving.set(true);
        let ctx = ctx.get_untracked();
        let id = record_id.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api().update::<R>(id, &payload).await,
                None => api().store::<R>(ctx.scope(), &payload).await,
            };
            saving.try_set(false);
            match result {
                Ok(saved) => {
                    log::info!("{} {} saved", R::element_name(), saved.id());
                    navigate(&return_path::<R>(&ctx), Default::default());
                }
                Err(err) => {
                    if matches!(err, ApiError::DuplicateName { .. }) {
                        log::info!("{}: duplicate name rejected", R::full_name());
                    }
                    show_error(err);
                }
            }
        });
    };

    let title = move || match record_id.get() {
        Some(_) => format!("Editar {}", R::element_name()),
        None => format!(
            "{} {}",
            if R::is_feminine() { "Nueva" } else { "Nuevo" },
            R::element_name()
        ),
    };
    let busy = move || saving.get() || loading.get();

    let field_views = R::form_fields()
        .iter()
        .map(|spec| {
            let key = spec.key;
            let value = move || fields.with(|f| f.get(key).cloned().unwrap_or_default());
            let input = match spec.kind {
                FieldKind::Text => view! {
                    <input
                        type="text"
                        id=key
                        class="form__input"
                        prop:value=value
                        on:input=move |ev| set_field(key, event_target_value(&ev))
                        disabled=busy
                    />
                }
                .into_any(),
                FieldKind::TextArea => view! {
                    <textarea
                        id=key
                        class="form__textarea"
                        rows="3"
                        prop:value=value
                        on:input=move |ev| set_field(key, event_target_value(&ev))
                        disabled=busy
                    ></textarea>
                }
                .into_any(),
            };
            view! {
                <div class="form-group">
                    <label for=key>
                        {spec.label}
                        {spec.required.then_some(" *")}
                    </label>
                    {input}
                    {move || {
                        field_error
                            .get()
                            .filter(|(field, _)| field == key)
                            .map(|(_, message)| view! { <div class="form__error">{message}</div> })
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id=page_id(&R::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
            </div>

            <div class="page__content">
                {move || banner.get().map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })}

                <Show when=move || loading.get()>
                    <div class="page__loading">"Cargando..."</div>
                </Show>

                <form class="form" on:submit=on_submit>
                    {field_views}
                    <div class="form__actions">
                        <button type="submit" class="button button--primary" disabled=busy>
                            {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                        <a class="button button--secondary" href={move || return_path::<R>(&ctx.get())}>
                            "Cancelar"
                        </a>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
