use std::env;

use fitfinder::api::schema::user::LoginRequest;
use fitfinder::config::Config;
use fitfinder::gyms::render_cards;
use fitfinder::search::{SearchController, SearchPhase, find_preset};
use fitfinder::session::UserContext;
use fitfinder::{AppState, api};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");
    let state = AppState::new(config).expect("Failed to build HTTP client");

    let mut args = env::args().skip(1);
    let Some(location) = args.next() else {
        eprintln!("Usage: fitfinder <location> [radius_m]");
        std::process::exit(2);
    };
    let radius: Option<u32> = args.next().and_then(|value| value.parse().ok());

    // 凭据可选：提供时先登录，管理员会在卡片上看到编辑入口
    if let (Ok(username), Ok(password)) = (
        env::var("FITFINDER_USERNAME"),
        env::var("FITFINDER_PASSWORD"),
    ) {
        let request = LoginRequest { username, password };
        if let Err(e) = api::operations::auth::login(&state.http, &request).await {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }
    let user_context = UserContext::load(&state).await;

    let mut controller = SearchController::new(state.clone());
    if let Some(radius) = radius {
        controller.set_radius(radius);
    }

    // 预设地点直接搜索，其余文本走地理编码
    let result = match find_preset(&location) {
        Some(preset) => controller.select_preset(preset).await,
        None => {
            controller.handle_input(&location);
            controller.submit().await
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match controller.phase() {
        SearchPhase::Ready { gyms, .. } => {
            println!("Found {} gyms near you", gyms.len());
            print!("{}", render_cards(gyms, user_context.is_admin));
        }
        phase => {
            tracing::warn!("搜索未进入 Ready 状态: {:?}", phase);
        }
    }
}
