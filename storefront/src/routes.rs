use axum::{
    body::Body,
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, Request, StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use url::Url;

use crate::client::{serve_visitor, Catalog, LeadSink};
use crate::forms::{
    ContactDraft, FormSession, LeadForm, Notice, Phase, QuoteDraft, RepairDraft, SellDraft,
    SwapDraft,
};
use crate::models::RepairService;
use crate::pages::{
    render_contact, render_home, render_not_found, render_repairs, render_sell, render_shop,
    render_swap, HomeContent, Route,
};
use crate::shop::{ShopQuery, ShopView};
use crate::whatsapp::WhatsApp;

/// Shared state of the storefront handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub sink: Arc<dyn LeadSink>,
    pub whatsapp: Arc<WhatsApp>,
}

type Fields = Vec<(String, String)>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/shop", get(shop))
        .route("/shop/quote", axum::routing::post(shop_quote))
        .route("/sell", get(sell_page).post(sell_submit))
        .route("/swap", get(swap_page).post(swap_submit))
        .route("/repairs", get(repairs_page).post(repairs_submit))
        .route("/contact", get(contact_page).post(contact_submit))
        .route("/health", get(|| async { StatusCode::OK }))
        .fallback(not_found)
        .layer(middleware::from_fn(forward_visitor))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// First X-Forwarded-For entry when a proxy sits in front, otherwise the peer address
fn visitor_address(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|first| first.trim().parse().ok())
        .or_else(|| peer.map(|addr| addr.ip()))
}

async fn forward_visitor(request: Request<Body>, next: Next<Body>) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    match visitor_address(request.headers(), peer) {
        Some(visitor) => serve_visitor(visitor, next.run(request)).await,
        None => next.run(request).await,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Submit,
    WhatsApp,
    Another,
}

fn take_field(fields: &mut Fields, name: &str) -> Option<String> {
    let position = fields.iter().position(|(k, _)| k == name)?;
    Some(fields.remove(position).1)
}

fn take_action(fields: &mut Fields) -> Action {
    match take_field(fields, "action").as_deref() {
        Some("whatsapp") => Action::WhatsApp,
        Some("another") => Action::Another,
        _ => Action::Submit,
    }
}

enum Outcome<F> {
    Redirect(Url),
    Render(FormSession<F>),
    Invalid(FormSession<F>),
}

/// Runs one posted lead form: WhatsApp redirect, "submit another" or submission
async fn run_lead_form<F: LeadForm>(state: &AppState, mut fields: Fields) -> Outcome<F> {
    let action = take_action(&mut fields);
    let draft = match F::from_fields(fields) {
        Ok(draft) => draft,
        Err(e) => {
            warn!("Rejected {} form: {}", F::ENDPOINT, e);
            return Outcome::Invalid(
                FormSession::default().with_notice(Notice::Error(F::FAILURE_MESSAGE)),
            );
        }
    };

    match action {
        Action::WhatsApp => Outcome::Redirect(state.whatsapp.link(&draft.whatsapp_message())),
        Action::Another => Outcome::Render(FormSession::submitted(draft).submit_another()),
        Action::Submit => {
            let mut session = FormSession::editing(draft);
            session.submit(state.sink.as_ref()).await;
            Outcome::Render(session)
        }
    }
}

fn respond<F>(outcome: Outcome<F>, render: impl FnOnce(&FormSession<F>) -> String) -> Response {
    match outcome {
        Outcome::Redirect(url) => Redirect::to(url.as_str()).into_response(),
        Outcome::Render(session) => Html(render(&session)).into_response(),
        Outcome::Invalid(session) => (StatusCode::BAD_REQUEST, Html(render(&session))).into_response(),
    }
}

async fn home(State(state): State<AppState>) -> Html<String> {
    let content = HomeContent::load(state.catalog.as_ref()).await;
    Html(render_home(&content, &state.whatsapp))
}

async fn shop(State(state): State<AppState>, Query(params): Query<Fields>) -> Html<String> {
    let view = ShopView::new(ShopQuery::from_pairs(params))
        .load(state.catalog.as_ref())
        .await;
    Html(render_shop(&view, &FormSession::default(), None, &state.whatsapp))
}

async fn shop_quote(State(state): State<AppState>, Form(mut fields): Form<Fields>) -> Response {
    let action = take_action(&mut fields);
    let product_id = take_field(&mut fields, "product_id").unwrap_or_default();

    let mut params = Vec::new();
    for key in ["category", "q"] {
        if let Some(value) = take_field(&mut fields, key) {
            params.push((key.to_string(), value));
        }
    }
    let listing_query = ShopQuery::from_pairs(params.clone());
    params.push(("quote".to_string(), product_id.clone()));
    let quote_query = ShopQuery::from_pairs(params);

    let product = match state.catalog.product(&product_id).await {
        Ok(product) => product,
        Err(e) => {
            error!("Failed to load product {:?} for a quote: {}", product_id, e);
            let view = ShopView::new(listing_query).load(state.catalog.as_ref()).await;
            let notice = Some(Notice::Error(QuoteDraft::FAILURE_MESSAGE));
            return Html(render_shop(&view, &FormSession::default(), notice, &state.whatsapp))
                .into_response();
        }
    };

    let mut session = FormSession::editing(QuoteDraft::for_product(&product));
    for (field, value) in fields {
        if let Err(e) = session.apply(&field, value) {
            warn!("Rejected price quote form: {}", e);
            let view = ShopView::new(quote_query).load(state.catalog.as_ref()).await;
            let session = session.with_notice(Notice::Error(QuoteDraft::FAILURE_MESSAGE));
            return (
                StatusCode::BAD_REQUEST,
                Html(render_shop(&view, &session, None, &state.whatsapp)),
            )
                .into_response();
        }
    }

    if action == Action::WhatsApp {
        return Redirect::to(state.whatsapp.link(&session.draft().whatsapp_message()).as_str())
            .into_response();
    }

    if session.submit(state.sink.as_ref()).await == Phase::Submitted {
        // Close and clear the quote form, keep the success notice
        let notice = session.notice();
        let view = ShopView::new(listing_query).load(state.catalog.as_ref()).await;
        return Html(render_shop(
            &view,
            &session.submit_another(),
            notice,
            &state.whatsapp,
        ))
        .into_response();
    }

    let view = ShopView::new(quote_query).load(state.catalog.as_ref()).await;
    Html(render_shop(&view, &session, None, &state.whatsapp)).into_response()
}

async fn sell_page(State(state): State<AppState>) -> Html<String> {
    Html(render_sell(&FormSession::default(), &state.whatsapp))
}

async fn sell_submit(State(state): State<AppState>, Form(fields): Form<Fields>) -> Response {
    let outcome = run_lead_form::<SellDraft>(&state, fields).await;
    respond(outcome, |session| render_sell(session, &state.whatsapp))
}

async fn swap_page(State(state): State<AppState>) -> Html<String> {
    Html(render_swap(&FormSession::default(), &state.whatsapp))
}

async fn swap_submit(State(state): State<AppState>, Form(fields): Form<Fields>) -> Response {
    let outcome = run_lead_form::<SwapDraft>(&state, fields).await;
    respond(outcome, |session| render_swap(session, &state.whatsapp))
}

#[derive(Debug, Default, Deserialize)]
struct RepairsQuery {
    service: Option<String>,
}

async fn load_repair_services(catalog: &dyn Catalog) -> Vec<RepairService> {
    catalog.repair_services().await.unwrap_or_else(|e| {
        error!("Error fetching services: {}", e);
        Vec::new()
    })
}

async fn repairs_page(
    State(state): State<AppState>,
    Query(query): Query<RepairsQuery>,
) -> Html<String> {
    let services = load_repair_services(state.catalog.as_ref()).await;
    let selected = query
        .service
        .as_deref()
        .and_then(|id| services.iter().find(|s| s.id == id));

    let draft = RepairDraft {
        issue: selected.map(|s| s.name.clone()).unwrap_or_default(),
        ..Default::default()
    };
    let selected_id = selected.map(|s| s.id.as_str());

    Html(render_repairs(
        &services,
        selected_id,
        &FormSession::editing(draft),
        &state.whatsapp,
    ))
}

async fn repairs_submit(State(state): State<AppState>, Form(fields): Form<Fields>) -> Response {
    let outcome = run_lead_form::<RepairDraft>(&state, fields).await;
    let services = match &outcome {
        Outcome::Render(session) if session.phase() == Phase::Submitted => Vec::new(),
        Outcome::Redirect(_) => Vec::new(),
        _ => load_repair_services(state.catalog.as_ref()).await,
    };
    respond(outcome, |session| {
        render_repairs(&services, None, session, &state.whatsapp)
    })
}

async fn contact_page(State(state): State<AppState>) -> Html<String> {
    Html(render_contact(&FormSession::default(), &state.whatsapp))
}

async fn contact_submit(State(state): State<AppState>, Form(fields): Form<Fields>) -> Response {
    let outcome = run_lead_form::<ContactDraft>(&state, fields).await;
    respond(outcome, |session| render_contact(session, &state.whatsapp))
}

/// Unknown paths; known pages with a stray trailing slash redirect to their canonical path
async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    match Route::from_path(uri.path()) {
        Route::NotFound => (
            StatusCode::NOT_FOUND,
            Html(render_not_found(uri.path(), &state.whatsapp)),
        )
            .into_response(),
        route => Redirect::permanent(route.path()).into_response(),
    }
}
