use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use petlog::config::AppConfig;
use petlog::error::AppError;
use petlog::telemetry;
use petlog::vitality::{ScoreInput, VitalityScoreEngine, VitalityScoreResult};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "PetLog Vitality",
    about = "Compute and serve PetLog Vitality Scores from pet health records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a record bundle from a JSON file and print the breakdown
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to a JSON record bundle (profile plus newest-first histories)
    #[arg(long)]
    input: PathBuf,
    /// Evaluation date for the score (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Include the per-pillar breakdown in the output
    #[arg(long)]
    breakdown: bool,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    #[serde(flatten)]
    input: ScoreInput,
    #[serde(default)]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => run_score(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/vitality/score", post(score_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "vitality score service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        today,
        breakdown,
    } = args;

    let raw = std::fs::read_to_string(input)?;
    let bundle: ScoreInput = serde_json::from_str(&raw)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let engine = VitalityScoreEngine::new();
    let result = engine.score(&bundle, today);
    render_score(&result, today, breakdown);

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn score_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<VitalityScoreResult>, AppError> {
    let ScoreRequest { input, today } = payload;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let engine = VitalityScoreEngine::new();
    Ok(Json(engine.score(&input, today)))
}

fn render_score(result: &VitalityScoreResult, today: NaiveDate, breakdown: bool) {
    println!("PetLog Vitality Score (evaluated {today})");
    println!("{} / 100 - {}", result.total, result.headline);
    println!("{}", result.subline);

    if let Some(age) = result.age_years {
        let senior_note = if result.is_senior { " (senior)" } else { "" };
        println!("Age: {age} year(s){senior_note}");
    }

    println!(
        "\nData: {} of 5 areas recorded, {} pending",
        result.pillars_with_data, result.missing_data_count
    );

    if breakdown {
        println!("\nPillars");
        for pillar in &result.pillars {
            let estimate_note = if pillar.is_estimated {
                " [estimated]"
            } else {
                ""
            };
            println!(
                "- {} {}: {}/{} ({}%){} | {}",
                pillar.emoji, pillar.name, pillar.score, pillar.max, pillar.pct, estimate_note,
                pillar.status
            );
            for tip in &pillar.tips {
                println!("    tip: {tip}");
            }
        }
    }

    if result.flags.is_empty() {
        println!("\nSuggestions: none");
    } else {
        println!("\nSuggestions");
        for flag in &result.flags {
            println!(
                "- [{}] {} ({})",
                flag.severity.label(),
                flag.message,
                flag.action
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petlog::vitality::{DataSufficiency, PetProfile, VetVisitRecord, WeightRecord};

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date")
    }

    #[tokio::test]
    async fn score_endpoint_returns_result_for_empty_bundle() {
        let request = ScoreRequest {
            input: ScoreInput::default(),
            today: Some(fixed_today()),
        };

        let Json(body) = super::score_endpoint(Json(request))
            .await
            .expect("score computes");

        assert_eq!(body.data_sufficiency, DataSufficiency::TooEarly);
        assert!(body.total <= 55);
        assert_eq!(body.pillars.len(), 5);
    }

    #[tokio::test]
    async fn score_endpoint_honors_supplied_date() {
        let input = ScoreInput {
            pet: PetProfile {
                breed: Some("Beagle".to_string()),
                ..PetProfile::default()
            },
            weight_records: vec![WeightRecord {
                weight_kg: 11.0,
                date: fixed_today() - chrono::Duration::days(10),
            }],
            vet_visits: vec![VetVisitRecord {
                visit_date: fixed_today() - chrono::Duration::days(30),
            }],
            ..ScoreInput::default()
        };
        let request = ScoreRequest {
            input,
            today: Some(fixed_today()),
        };

        let Json(body) = super::score_endpoint(Json(request))
            .await
            .expect("score computes");

        assert_eq!(body.data_sufficiency, DataSufficiency::Building);
        assert_eq!(body.subline, "Score based on 3 of 5 areas (2 pending)");
    }

    #[test]
    fn request_json_flattens_bundle_fields() {
        let raw = serde_json::json!({
            "pet": { "breed": "Beagle", "weight_kg": 11.0 },
            "weight_records": [],
            "vaccines": [],
            "vet_visits": [],
            "groomings": [],
            "adventures": [],
            "foods": [],
            "today": "2026-08-01"
        });
        let request: ScoreRequest =
            serde_json::from_value(raw).expect("request deserializes");
        assert_eq!(request.today, Some(fixed_today()));
        assert_eq!(request.input.pet.breed.as_deref(), Some("Beagle"));
    }
}
