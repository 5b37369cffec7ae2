//! In-memory REST backend for tests.
//!
//! Speaks the same contract as the real backend: paginated lists with
//! Laravel-style `meta.links`, `nombre`/`estado` filtering, duplicate-name
//! 422s on store/update, estado flipping on destroy and 401 for unknown tokens.

use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_PASSWORD: &str = "secret";

struct FakeState {
    tables: BTreeMap<String, Vec<Value>>,
    next_id: i64,
    per_page: usize,
    requests: Vec<HttpRequest>,
    fail_next: Option<(u16, String)>,
    fail_transport_next: Option<String>,
}

#[derive(Clone)]
pub struct FakeBackend {
    inner: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FakeState {
                tables: BTreeMap::new(),
                next_id: 1000,
                per_page: 10,
                requests: Vec::new(),
                fail_next: None,
                fail_transport_next: None,
            })),
        }
    }

    pub fn seed(&self, collection: &str, rows: Vec<Value>) {
        self.inner
            .borrow_mut()
            .tables
            .entry(collection.to_string())
            .or_default()
            .extend(rows);
    }

    /// Rows `1..=count` named "<collection> N", odd ids active, even inactive
    pub fn seed_named(&self, collection: &str, scope: i64, count: i64) {
        let rows = (1..=count)
            .map(|i| {
                json!({
                    "id": i,
                    "nombre": format!("{} {}", collection, i),
                    "descripcion": null,
                    "estado": i % 2 == 1,
                    "configuracion_id": scope,
                })
            })
            .collect();
        self.seed(collection, rows);
    }

    /// Next request gets this status and body instead of being routed
    pub fn fail_next(&self, status: u16, body: &str) {
        self.inner.borrow_mut().fail_next = Some((status, body.to_string()));
    }

    pub fn fail_transport_next(&self, message: &str) {
        self.inner.borrow_mut().fail_transport_next = Some(message.to_string());
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.borrow().requests.last().cloned()
    }

    pub fn clear_requests(&self) {
        self.inner.borrow_mut().requests.clear();
    }

    pub fn row(&self, collection: &str, id: i64) -> Option<Value> {
        self.inner
            .borrow()
            .tables
            .get(collection)
            .and_then(|rows| rows.iter().find(|r| r["id"] == json!(id)).cloned())
    }
}

fn respond(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}

fn not_found() -> HttpResponse {
    respond(404, json!({ "message": "Not Found" }))
}

fn duplicate() -> HttpResponse {
    respond(
        422,
        json!({
            "message": "nombre already exists",
            "errors": { "nombre": ["nombre already exists"] }
        }),
    )
}

impl FakeState {
    fn route(&mut self, request: &HttpRequest) -> HttpResponse {
        let segments: Vec<&str> = request
            .path
            .trim_start_matches("/api/")
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, [collection]) => self.list(collection, None, request),
            (Method::Get, [collection, scope]) => match scope.parse::<i64>() {
                Ok(scope) => self.list(collection, Some(scope), request),
                Err(_) => not_found(),
            },
            (Method::Get, [collection, "show" | "detalle", id]) => self.show(collection, id),
            (Method::Post, [collection, "store"]) => self.store(collection, None, request),
            (Method::Post, [collection, "store", scope]) => {
                self.store(collection, scope.parse().ok(), request)
            }
            (Method::Put, [collection, "update", id]) => self.update(collection, id, request),
            (Method::Delete, [collection, "destroy", id]) => self.toggle(collection, id),
            _ => not_found(),
        }
    }

    fn list(&self, collection: &str, scope: Option<i64>, request: &HttpRequest) -> HttpResponse {
        let params: BTreeMap<String, String> = request
            .query
            .as_deref()
            .and_then(|q| serde_qs::from_str(q).ok())
            .unwrap_or_default();
        let nombre = params.get("nombre").map(|n| n.to_lowercase());
        let estado = params.get("estado").map(|e| e == "1");
        let page: usize = params
            .get("page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
            .max(1);

        let rows: Vec<Value> = self
            .tables
            .get(collection)
            .map(|rows| {
                rows.iter()
                    .filter(|r| scope.map_or(true, |s| r["configuracion_id"] == json!(s)))
                    .filter(|r| {
                        nombre.as_deref().map_or(true, |n| {
                            r["nombre"].as_str().unwrap_or("").to_lowercase().contains(n)
                        })
                    })
                    .filter(|r| estado.map_or(true, |e| r["estado"] == json!(e)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let total = rows.len();
        let last_page = ((total + self.per_page - 1) / self.per_page).max(1);
        let data: Vec<Value> = rows
            .into_iter()
            .skip((page - 1) * self.per_page)
            .take(self.per_page)
            .collect();

        let url = |p: usize| json!(format!("http://fake/api/{}?page={}", collection, p));
        let prev_url = if page > 1 { url(page - 1) } else { Value::Null };
        let next_url = if page < last_page { url(page + 1) } else { Value::Null };
        let mut links = vec![json!({
            "url": prev_url,
            "label": "&laquo; Previous",
            "active": false,
        })];
        for p in 1..=last_page {
            let active = p == page;
            links.push(json!({ "url": url(p), "label": p.to_string(), "active": active }));
        }
        links.push(json!({
            "url": next_url,
            "label": "Next &raquo;",
            "active": false,
        }));

        respond(
            200,
            json!({
                "data": data,
                "meta": {
                    "current_page": page,
                    "last_page": last_page,
                    "per_page": self.per_page,
                    "total": total,
                    "links": links,
                },
                "links": { "first": url(1), "last": url(last_page) },
            }),
        )
    }

    fn find_mut(&mut self, collection: &str, id: &str) -> Option<&mut Value> {
        let id: i64 = id.parse().ok()?;
        self.tables
            .get_mut(collection)?
            .iter_mut()
            .find(|r| r["id"] == json!(id))
    }

    fn show(&mut self, collection: &str, id: &str) -> HttpResponse {
        match self.find_mut(collection, id) {
            Some(row) => respond(200, json!({ "data": row.clone() })),
            None => not_found(),
        }
    }

    fn name_taken(&self, collection: &str, scope: Option<i64>, nombre: &str, except: Option<i64>) -> bool {
        let nombre = nombre.trim().to_lowercase();
        self.tables.get(collection).map_or(false, |rows| {
            rows.iter().any(|r| {
                scope.map_or(true, |s| r["configuracion_id"] == json!(s))
                    && except.map_or(true, |id| r["id"] != json!(id))
                    && r["nombre"].as_str().map(|n| n.to_lowercase()) == Some(nombre.clone())
            })
        })
    }

    fn store(&mut self, collection: &str, scope: Option<i64>, request: &HttpRequest) -> HttpResponse {
        let body = match &request.body {
            Some(Value::Object(map)) => map.clone(),
            _ => return respond(422, json!({ "message": "invalid body" })),
        };
        let nombre = body.get("nombre").and_then(Value::as_str).unwrap_or("");
        if self.name_taken(collection, scope, nombre, None) {
            return duplicate();
        }

        self.next_id += 1;
        let mut row: Map<String, Value> = body;
        row.insert("id".into(), json!(self.next_id));
        row.insert("estado".into(), json!(true));
        if let Some(scope) = scope {
            row.insert("configuracion_id".into(), json!(scope));
        }
        let row = Value::Object(row);
        self.tables
            .entry(collection.to_string())
            .or_default()
            .push(row.clone());
        respond(201, json!({ "data": row }))
    }

    fn update(&mut self, collection: &str, id: &str, request: &HttpRequest) -> HttpResponse {
        let body = match &request.body {
            Some(Value::Object(map)) => map.clone(),
            _ => return respond(422, json!({ "message": "invalid body" })),
        };
        let (scope, numeric_id) = match self.find_mut(collection, id) {
            Some(row) => (row["configuracion_id"].as_i64(), row["id"].as_i64()),
            None => return not_found(),
        };
        let nombre = body.get("nombre").and_then(Value::as_str).unwrap_or("");
        if self.name_taken(collection, scope, nombre, numeric_id) {
            return duplicate();
        }
        match self.find_mut(collection, id) {
            Some(Value::Object(row)) => {
                for (key, value) in body {
                    row.insert(key, value);
                }
                respond(200, json!({ "data": Value::Object(row.clone()) }))
            }
            _ => not_found(),
        }
    }

    fn toggle(&mut self, collection: &str, id: &str) -> HttpResponse {
        match self.find_mut(collection, id) {
            Some(row) => {
                let active = row["estado"].as_bool().unwrap_or(false);
                row["estado"] = json!(!active);
                respond(200, json!({ "data": row.clone() }))
            }
            None => not_found(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut state = self.inner.borrow_mut();
        state.requests.push(request.clone());

        if let Some(message) = state.fail_transport_next.take() {
            return Err(message);
        }
        if let Some((status, body)) = state.fail_next.take() {
            return Ok(HttpResponse { status, body });
        }

        if request.path == "/api/login" {
            let password = request
                .body
                .as_ref()
                .and_then(|b| b.get("password"))
                .and_then(Value::as_str);
            return Ok(if password == Some(TEST_PASSWORD) {
                respond(200, json!({ "token": TEST_TOKEN }))
            } else {
                respond(401, json!({ "message": "Unauthenticated." }))
            });
        }

        if request.bearer.as_deref() != Some(TEST_TOKEN) {
            return Ok(respond(401, json!({ "message": "Unauthenticated." })));
        }

        Ok(state.route(&request))
    }
}
