//! Single binary web server: REST API for tournaments, groups and standings.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, INACTIVITY_TIMEOUT_HOURS; log level via RUST_LOG.

use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use competitions_web::{
    create_groups, generate_group_matches, group_statistics, group_winners, import_participants,
    record_match_sets, CategoryId, Config, DistributionMethod, Group, GroupError, GroupId, MatchId,
    ParticipantId, SetScore, Sport, Tournament, TournamentError, TournamentId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
/// The activity time has its own lock so reads can refresh it under the shared map lock.
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Mutex<Instant>,
}

impl TournamentEntry {
    fn new(tournament: Tournament) -> Self {
        Self {
            tournament,
            last_activity: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        if let Ok(mut last) = self.last_activity.lock() {
            *last = Instant::now();
        }
    }

    fn idle_for(&self) -> Duration {
        match self.last_activity.lock() {
            Ok(last) => last.elapsed(),
            Err(_) => Duration::ZERO,
        }
    }
}

/// In-memory state: all tournaments by ID.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct SportResponse {
    id: Sport,
    name: &'static str,
}

#[derive(Serialize)]
struct TournamentSummary {
    id: TournamentId,
    name: String,
    sport: Sport,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Serialize)]
struct WinnersResponse {
    winners: Vec<competitions_web::Winner>,
}

#[derive(Deserialize)]
struct TournamentBody {
    name: String,
    sport: Sport,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct AddCategoryBody {
    name: String,
}

#[derive(Deserialize)]
struct RegisterParticipantBody {
    category_id: CategoryId,
    name: String,
    #[serde(default)]
    rating: i32,
}

#[derive(Deserialize)]
struct CreateGroupsBody {
    category_id: CategoryId,
    #[serde(default)]
    method: DistributionMethod,
}

#[derive(Deserialize)]
struct RecordSetsBody {
    sets: Vec<SetScore>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TournamentParticipantPath {
    id: TournamentId,
    participant_id: ParticipantId,
}

#[derive(Deserialize)]
struct TournamentGroupPath {
    id: TournamentId,
    group_id: GroupId,
}

#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

/// 404 for unknown entities, 409 for duplicate registrations, 400 for rule violations.
fn error_response(e: TournamentError) -> HttpResponse {
    log::warn!("Rejected request: {}", e);
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::CategoryNotFound(_)
        | TournamentError::ParticipantNotFound(_)
        | TournamentError::GroupNotFound(_)
        | TournamentError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        TournamentError::DuplicateParticipant { .. } => HttpResponse::Conflict().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Look up a tournament under the write lock, refresh its activity time and run `f` on it.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.touch();
            f(&mut entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Like [`with_tournament`], but for reads: only the shared lock is taken.
fn read_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&Tournament) -> HttpResponse,
{
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(&id) {
        Some(entry) => {
            entry.touch();
            f(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "competitions-web",
    })
}

#[get("/api/sports")]
async fn api_list_sports() -> HttpResponse {
    let sports: Vec<SportResponse> = Sport::ALL
        .iter()
        .map(|&s| SportResponse { id: s, name: s.name() })
        .collect();
    HttpResponse::Ok().json(sports)
}

#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<TournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let tournament = match Tournament::new(body.name, body.sport, body.start_date, body.end_date) {
        Ok(t) => t,
        Err(e) => return error_response(e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {} ({})", tournament.id, tournament.name);
    let response = HttpResponse::Created().json(&tournament);
    g.insert(tournament.id, TournamentEntry::new(tournament));
    response
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut summaries: Vec<TournamentSummary> = g
        .values()
        .map(|e| TournamentSummary {
            id: e.tournament.id,
            name: e.tournament.name.clone(),
            sport: e.tournament.sport,
            start_date: e.tournament.start_date,
            end_date: e.tournament.end_date,
        })
        .collect();
    summaries.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.name.cmp(&b.name)));
    HttpResponse::Ok().json(summaries)
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Replace name, sport and dates; validated like creation.
#[put("/api/tournaments/{id}")]
async fn api_update_tournament(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TournamentBody>,
) -> HttpResponse {
    let body = body.into_inner();
    with_tournament(&state, path.id, |t| {
        match t.update(body.name, body.sport, body.start_date, body.end_date) {
            Ok(()) => {
                log::info!("Updated tournament {} ({})", t.id, t.name);
                HttpResponse::Ok().json(&*t)
            }
            Err(e) => error_response(e),
        }
    })
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[post("/api/tournaments/{id}/categories")]
async fn api_add_category(state: AppState, path: Path<TournamentPath>, body: Json<AddCategoryBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.add_category(body.name.as_str()) {
        Ok(_) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(e),
    })
}

#[post("/api/tournaments/{id}/participants")]
async fn api_register_participant(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RegisterParticipantBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        match t.register_participant(body.category_id, body.name.as_str(), body.rating) {
            Ok(_) => HttpResponse::Ok().json(&*t),
            Err(e) => error_response(e),
        }
    })
}

/// Bulk registration from a CSV roster (`name,category,rating`).
#[post("/api/tournaments/{id}/participants/import")]
async fn api_import_participants(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    with_tournament(&state, path.id, |t| match import_participants(t, body.as_bytes()) {
        Ok(imported) => HttpResponse::Ok().json(serde_json::json!({ "imported": imported })),
        Err(e) => error_response(e),
    })
}

#[delete("/api/tournaments/{id}/participants/{participant_id}")]
async fn api_withdraw_participant(state: AppState, path: Path<TournamentParticipantPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.withdraw_participant(path.participant_id) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(e),
    })
}

/// Split a category into groups (ranked snake seeding unless `method` says otherwise).
#[post("/api/tournaments/{id}/groups")]
async fn api_create_groups(state: AppState, path: Path<TournamentPath>, body: Json<CreateGroupsBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match create_groups(t, body.category_id, body.method) {
        Ok(groups) => HttpResponse::Created().json(groups),
        Err(e) => error_response(e),
    })
}

#[get("/api/tournaments/{id}/groups/{group_id}/statistics")]
async fn api_group_statistics(state: AppState, path: Path<TournamentGroupPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| match group_statistics(t, path.group_id) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => error_response(e),
    })
}

/// Top two of a group. Too few participants is informational, not an error.
#[get("/api/tournaments/{id}/groups/{group_id}/winners")]
async fn api_group_winners(state: AppState, path: Path<TournamentGroupPath>) -> HttpResponse {
    read_tournament(&state, path.id, |t| match group_winners(t, path.group_id) {
        Ok(winners) => HttpResponse::Ok().json(WinnersResponse { winners }),
        Err(TournamentError::Grouping(GroupError::InsufficientParticipants { .. })) => HttpResponse::Ok()
            .json(serde_json::json!({ "message": "Not enough participants to decide winners" })),
        Err(e) => error_response(e),
    })
}

#[post("/api/tournaments/{id}/groups/{group_id}/matches")]
async fn api_generate_group_matches(state: AppState, path: Path<TournamentGroupPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match generate_group_matches(t, path.group_id) {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => error_response(e),
    })
}

#[put("/api/tournaments/{id}/matches/{match_id}/sets")]
async fn api_record_match_sets(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<RecordSetsBody>,
) -> HttpResponse {
    let sets = body.into_inner().sets;
    with_tournament(&state, path.id, |t| match record_match_sets(t, path.match_id, sets) {
        Ok(()) => match t.matches.iter().find(|m| m.id == path.match_id) {
            Some(m) => HttpResponse::Ok().json(m),
            None => error_response(TournamentError::MatchNotFound(path.match_id)),
        },
        Err(e) => error_response(e),
    })
}

/// Register every API route.
fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_list_sports)
        .service(api_create_tournament)
        .service(api_list_tournaments)
        .service(api_get_tournament)
        .service(api_update_tournament)
        .service(api_delete_tournament)
        .service(api_add_category)
        .service(api_import_participants)
        .service(api_register_participant)
        .service(api_withdraw_participant)
        .service(api_create_groups)
        .service(api_group_statistics)
        .service(api_group_winners)
        .service(api_generate_group_matches)
        .service(api_record_match_sets);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments past the inactivity timeout
    let state_cleanup = state.clone();
    let inactivity_timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.idle_for() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(config.bind_addr())?
        .run()
        .await
}
