// 路由守卫与会话查询：判定方向、不重试、缓存窗口内只问一次

mod common;

use fitfinder::session::{GuardDecision, UserContext, protected_route, public_route};

#[tokio::test]
async fn failed_session_redirects_protected_and_renders_public() {
    let backend = common::spawn().await;
    let state = common::test_state(backend.addr);

    assert_eq!(protected_route(&state).await, GuardDecision::RedirectToLogin);
    assert_eq!(public_route(&state).await, GuardDecision::Render);
}

#[tokio::test]
async fn present_session_renders_protected_and_redirects_public() {
    let backend = common::spawn().await;
    backend.set_session(Some(common::MockBackend::user_session()));
    let state = common::test_state(backend.addr);

    assert_eq!(protected_route(&state).await, GuardDecision::Render);
    assert_eq!(public_route(&state).await, GuardDecision::RedirectToHome);
}

#[tokio::test]
async fn session_query_never_retries_a_failure() {
    let backend = common::spawn().await;
    let state = common::test_state(backend.addr);

    let decision = protected_route(&state).await;

    assert_eq!(decision, GuardDecision::RedirectToLogin);
    // 一次判定恰好一次网络请求
    assert_eq!(backend.state.hits.count("me"), 1);
}

#[tokio::test]
async fn session_success_is_cached_across_guards() {
    let backend = common::spawn().await;
    backend.set_session(Some(common::MockBackend::admin_session()));
    let state = common::test_state(backend.addr);

    assert_eq!(protected_route(&state).await, GuardDecision::Render);
    assert_eq!(public_route(&state).await, GuardDecision::RedirectToHome);
    let context = UserContext::load(&state).await;

    // 两个守卫和用户上下文共用同一条缓存
    assert_eq!(backend.state.hits.count("me"), 1);
    assert!(context.is_admin);
    assert_eq!(context.user.unwrap().user_username, "admin");
}

#[tokio::test]
async fn failed_judgment_is_not_cached() {
    let backend = common::spawn().await;
    let state = common::test_state(backend.addr);

    assert_eq!(protected_route(&state).await, GuardDecision::RedirectToLogin);

    // 登录成功后守卫立刻改判，"已登出"不会被固化
    backend.set_session(Some(common::MockBackend::user_session()));
    assert_eq!(protected_route(&state).await, GuardDecision::Render);
    assert_eq!(backend.state.hits.count("me"), 2);
}
