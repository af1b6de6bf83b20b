use std::sync::{
    Arc,
    Mutex,
};

use axum::{
    extract::{
        Path,
        State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json,
    Router,
};
use serde_json::{
    json,
    Value,
};
use tokio::net::TcpListener;

use super::{
    HttpStudentApi,
    StudentApi,
};
use crate::core::{
    test_support::RecordingPrompt,
    ApiConfig,
    FormState,
    MahasiswaError,
    RecordManagerView,
    StudentRecord,
};

#[derive(Clone, Default)]
struct Backend {
    records: Arc<Mutex<Vec<StudentRecord>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

fn not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Mahasiswa tidak ditemukan" }))).into_response()
}

async fn list(State(backend): State<Backend>) -> Json<Vec<StudentRecord>> {
    Json(backend.records.lock().unwrap().clone())
}

async fn create(State(backend): State<Backend>, Json(body): Json<Value>) -> axum::response::Response {
    backend.bodies.lock().unwrap().push(body.clone());

    let nim = body["nim"].as_str().unwrap_or_default().to_string();
    let mut records = backend.records.lock().unwrap();
    if records.iter().any(|r| r.nim == nim) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "detail": "nim already exists" })))
            .into_response();
    }

    let created = StudentRecord {
        id: records.iter().map(|r| r.id).max().unwrap_or(0) + 1,
        nim,
        nama: body["nama"].as_str().unwrap_or_default().to_string(),
        jurusan: body["jurusan"].as_str().map(str::to_string),
        angkatan: body["angkatan"].as_i64(),
    };
    records.push(created.clone());
    Json(created).into_response()
}

async fn read(State(backend): State<Backend>, Path(id): Path<i64>) -> axum::response::Response {
    match backend.records.lock().unwrap().iter().find(|r| r.id == id) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found(),
    }
}

async fn update(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    backend.bodies.lock().unwrap().push(body.clone());

    let mut records = backend.records.lock().unwrap();
    let Some(record) = records.iter_mut().find(|r| r.id == id) else {
        return not_found();
    };
    if let Some(nama) = body["nama"].as_str() {
        record.nama = nama.to_string();
    }
    if let Some(jurusan) = body["jurusan"].as_str() {
        record.jurusan = Some(jurusan.to_string());
    }
    if let Some(angkatan) = body["angkatan"].as_i64() {
        record.angkatan = Some(angkatan);
    }
    Json(record.clone()).into_response()
}

async fn remove(State(backend): State<Backend>, Path(id): Path<i64>) -> axum::response::Response {
    let mut records = backend.records.lock().unwrap();
    let before = records.len();
    records.retain(|r| r.id != id);
    if records.len() == before {
        return not_found();
    }
    Json(json!({ "ok": true })).into_response()
}

fn backend_router(backend: Backend) -> Router {
    Router::new()
        .route("/mahasiswa/", get(list).post(create))
        .route("/mahasiswa/{id}", get(read).put(update).delete(remove))
        .with_state(backend)
}

async fn serve(router: Router) -> ApiConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiConfig::new(format!("http://{addr}/"))
}

async fn client_for(backend: &Backend) -> HttpStudentApi {
    HttpStudentApi::new(serve(backend_router(backend.clone())).await).unwrap()
}

fn draft(nim: &str, nama: &str, jurusan: &str, angkatan: &str) -> FormState {
    FormState {
        nim: nim.to_string(),
        nama: nama.to_string(),
        jurusan: jurusan.to_string(),
        angkatan: angkatan.to_string(),
    }
}

#[tokio::test]
async fn test_crud_round_against_server() {
    let backend = Backend::default();
    let api = client_for(&backend).await;

    assert!(api.list().await.unwrap().is_empty());

    let created = api.create(&draft("123", "Alice", "", "").to_payload()).await.unwrap().unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(backend.bodies.lock().unwrap()[0], json!({ "nim": "123", "nama": "Alice" }));

    let updated = api
        .update(created.id, &draft("123", "Alice W.", "Informatika", "2021").to_payload())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.nama, "Alice W.");
    assert_eq!(updated.angkatan, Some(2021));
    assert_eq!(
        backend.bodies.lock().unwrap()[1],
        json!({ "nim": "123", "nama": "Alice W.", "jurusan": "Informatika", "angkatan": 2021 })
    );

    assert_eq!(api.get(created.id).await.unwrap(), updated);
    assert_eq!(api.list().await.unwrap(), vec![updated]);

    api.delete(created.id).await.unwrap();
    assert!(api.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_create_carries_detail() {
    let backend = Backend::default();
    let api = client_for(&backend).await;
    api.create(&draft("123", "Alice", "", "").to_payload()).await.unwrap();

    let err = api.create(&draft("123", "Again", "", "").to_payload()).await.unwrap_err();

    match err {
        MahasiswaError::HttpStatus { status, detail } => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert_eq!(detail, "nim already exists");
        }
        other => panic!("Expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_item_is_not_found() {
    let backend = Backend::default();
    let api = client_for(&backend).await;

    let err = api.delete(5).await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    assert_eq!(err.detail(), "Mahasiswa tidak ditemukan");

    let err = api.get(5).await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_success_without_body_is_malformed() {
    let router = Router::new()
        .route("/mahasiswa/", axum::routing::post(|| async { StatusCode::OK }))
        .route("/mahasiswa/{id}", axum::routing::put(|| async { Json(Value::Null) }));
    let api = HttpStudentApi::new(serve(router).await).unwrap();

    let err = api.create(&draft("1", "A", "", "").to_payload()).await.unwrap_err();
    assert!(matches!(err, MahasiswaError::MalformedResponse));

    let err = api.update(1, &draft("1", "A", "", "").to_payload()).await.unwrap_err();
    assert!(matches!(err, MahasiswaError::MalformedResponse));
}

#[tokio::test]
async fn test_partial_success_body_is_accepted() {
    let router = Router::new()
        .route("/mahasiswa/", axum::routing::post(|| async { Json(json!({ "id": 5 })) }))
        .route("/mahasiswa/{id}", axum::routing::put(|| async { Json(json!({ "ok": true })) }));
    let api = HttpStudentApi::new(serve(router).await).unwrap();

    let created = api.create(&draft("1", "A", "", "").to_payload()).await.unwrap();
    assert_eq!(created, None);

    let updated = api.update(5, &draft("1", "A", "", "").to_payload()).await.unwrap();
    assert_eq!(updated, None);
}

#[tokio::test]
async fn test_partial_success_body_resyncs_view() {
    let backend = Backend::default();
    let router = Router::new()
        .route(
            "/mahasiswa/",
            get(list).post(|State(backend): State<Backend>, Json(body): Json<Value>| async move {
                let record = StudentRecord {
                    id: 5,
                    nim: body["nim"].as_str().unwrap_or_default().to_string(),
                    nama: body["nama"].as_str().unwrap_or_default().to_string(),
                    jurusan: None,
                    angkatan: None,
                };
                backend.records.lock().unwrap().push(record);
                Json(json!({ "id": 5 }))
            }),
        )
        .with_state(backend.clone());
    let config = serve(router).await;

    let prompt = Arc::new(RecordingPrompt::accepting());
    let view = RecordManagerView::with_config(config, prompt.clone()).unwrap();
    view.lock().form = draft("123", "Alice", "", "");

    view.submit_current().await.unwrap();

    assert_eq!(view.records().len(), 1);
    assert_eq!(view.records()[0].nim, "123");
    assert!(view.form().is_empty());
    assert!(prompt.notifications().is_empty());
}

#[tokio::test]
async fn test_delete_accepts_empty_success() {
    let router =
        Router::new().route("/mahasiswa/{id}", axum::routing::delete(|| async { StatusCode::NO_CONTENT }));
    let api = HttpStudentApi::new(serve(router).await).unwrap();

    api.delete(3).await.unwrap();
}

#[tokio::test]
async fn test_list_server_error_without_json() {
    let router = Router::new().route(
        "/mahasiswa/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let api = HttpStudentApi::new(serve(router).await).unwrap();

    let err = api.list().await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.detail(), "No JSON response");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpStudentApi::new(ApiConfig::new(format!("http://{addr}"))).unwrap();
    let err = api.list().await.unwrap_err();
    assert!(matches!(err, MahasiswaError::Transport(_)));
}
