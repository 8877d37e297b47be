use network::{InMemoryQuestionsApi, StatusCode};
use quiz_core::model::QuestionId;

use super::test_harness::{ViewKind, sample_questions, setup_view_harness};
use crate::vm::QuestionsIntent;

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_renders_start_button() {
    let mut harness = setup_view_harness(ViewKind::Welcome, InMemoryQuestionsApi::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome!"), "missing greeting in {html}");
    assert!(html.contains("Start survey"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_renders_first_question() {
    let api = InMemoryQuestionsApi::with_questions(sample_questions());
    let mut harness = setup_view_harness(ViewKind::Questions, api);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing position in {html}");
    assert!(html.contains("Questions submitted: 0"), "missing count in {html}");
    assert!(
        html.contains("What is your favourite colour?"),
        "missing question text in {html}"
    );
    assert_eq!(harness.api.fetch_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_navigates_between_questions() {
    let api = InMemoryQuestionsApi::with_questions(sample_questions());
    let mut harness = setup_view_harness(ViewKind::Questions, api);
    harness.rebuild();
    harness.settle().await;

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuestionsIntent::Next);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 2/3"), "missing position in {html}");
    assert!(html.contains("What is your favourite food?"), "missing text in {html}");

    dispatch.call(QuestionsIntent::Previous);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing position in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_submits_answer() {
    let api = InMemoryQuestionsApi::with_questions(sample_questions());
    let mut harness = setup_view_harness(ViewKind::Questions, api);
    harness.rebuild();
    harness.settle().await;

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuestionsIntent::EditAnswer("Blue".to_string()));
    harness.settle().await;
    assert!(harness.handles.session().navigation().submit_enabled);

    dispatch.call(QuestionsIntent::Submit);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Success!"), "missing success dialog in {html}");
    assert!(html.contains("Questions submitted: 1"), "missing count in {html}");
    assert!(html.contains("Already submitted"), "missing locked label in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");

    let submissions = harness.api.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].id, QuestionId::new(1));
    assert_eq!(submissions[0].answer, "Blue");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_failure_offers_retry() {
    let api = InMemoryQuestionsApi::with_questions(sample_questions());
    api.set_submit_status(Some(StatusCode::BAD_REQUEST));
    let mut harness = setup_view_harness(ViewKind::Questions, api);
    harness.rebuild();
    harness.settle().await;

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuestionsIntent::EditAnswer("Blue".to_string()));
    dispatch.call(QuestionsIntent::Submit);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failure!"), "missing failure dialog in {html}");
    assert!(html.contains("Retry"), "missing retry button in {html}");
    assert!(html.contains("Questions submitted: 0"), "missing count in {html}");

    harness.api.set_submit_status(None);
    dispatch.call(QuestionsIntent::Retry);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Success!"), "missing success dialog in {html}");
    assert!(html.contains("Questions submitted: 1"), "missing count in {html}");
    assert_eq!(harness.api.submissions().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_dismiss_hides_dialog() {
    let api = InMemoryQuestionsApi::with_questions(sample_questions());
    let mut harness = setup_view_harness(ViewKind::Questions, api);
    harness.rebuild();
    harness.settle().await;

    let dispatch = harness.handles.dispatch();
    dispatch.call(QuestionsIntent::EditAnswer("Blue".to_string()));
    dispatch.call(QuestionsIntent::Submit);
    harness.settle().await;
    assert!(harness.render().contains("Success!"));

    dispatch.call(QuestionsIntent::DismissOutcome);
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Success!"), "dialog still shown in {html}");
    assert!(html.contains("Questions submitted: 1"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_failed_fetch_keeps_placeholders() {
    let api = InMemoryQuestionsApi::with_questions(sample_questions());
    api.set_offline(true);
    let mut harness = setup_view_harness(ViewKind::Questions, api);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question ??/??"), "missing placeholder in {html}");
    assert!(!harness.handles.session().is_ready());

    harness.handles.dispatch().call(QuestionsIntent::Submit);
    harness.settle().await;
    assert!(harness.api.submissions().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_back_returns_to_previous_screen() {
    let api = InMemoryQuestionsApi::with_questions(sample_questions());
    let mut harness = setup_view_harness(ViewKind::WelcomeThenQuestions, api);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 1/3"), "missing questions screen in {html}");
    assert!(harness.navigator.get().can_go_back());

    harness.handles.dispatch().call(QuestionsIntent::Back);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Welcome!"), "missing welcome screen in {html}");
    assert!(!html.contains("Question 1/3"), "questions screen still shown in {html}");
    assert!(
        !harness.navigator.get().can_go_back(),
        "back added a history entry instead of popping one"
    );
}
