mod common;

use backend_application::commands::{bonus_commands, roulette_commands, score_commands};
use backend_application::queries::{bonus_queries, stats_queries};
use backend_application::AppError;
use backend_domain::{
    BonusHistoryQuery, HistoryQuery, RecordScoreRequest, RuntimeConfig, StatsQuery,
};

use common::{file_backed_state, start_day, test_state, user};

fn request(game_type: &str, score: i64, details: Option<&str>) -> RecordScoreRequest {
    RecordScoreRequest {
        game_type: game_type.to_string(),
        score,
        details: details.map(ToString::to_string),
    }
}

#[tokio::test]
async fn recorded_score_shows_up_in_history() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;
    let before = chrono::Utc::now().timestamp_millis();

    let entry = score_commands::record_score(
        &state,
        &user(1),
        request("puzzle", 42, Some("level:3")),
    )
    .await
    .expect("record");

    let history = stats_queries::get_history(&state, &user(1), HistoryQuery::default())
        .await
        .expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0], entry);
    assert_eq!(history[0].game_type, "puzzle");
    assert_eq!(history[0].score, 42);
    assert_eq!(history[0].details.as_deref(), Some("level:3"));
    assert!(history[0].played_at.timestamp_millis() >= before);
}

#[tokio::test]
async fn invalid_scores_are_rejected_before_the_store() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;
    let oversized = "x".repeat(501);

    for payload in [
        request("roulette", -5, None),
        request("", 5, None),
        request("roulette", 5, Some(oversized.as_str())),
        request("roulette", i64::MAX, None),
    ] {
        let err = score_commands::record_score(&state, &user(1), payload)
            .await
            .expect_err("invalid score");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    let stats = stats_queries::get_stats(&state, &user(1), StatsQuery::default())
        .await
        .expect("stats");
    assert_eq!(stats.total_games, 0);
}

#[tokio::test]
async fn stats_stay_readable_after_maximal_scores() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;
    for _ in 0..3 {
        score_commands::record_score(
            &state,
            &user(1),
            request("puzzle", score_commands::MAX_SCORE, None),
        )
        .await
        .expect("record");
    }

    let stats = stats_queries::get_stats(&state, &user(1), StatsQuery::default())
        .await
        .expect("stats");
    assert_eq!(stats.total_games, 3);
    assert_eq!(stats.total_score, 3 * score_commands::MAX_SCORE);
    assert_eq!(stats.best_score, score_commands::MAX_SCORE);
}

#[tokio::test]
async fn stats_without_entries_are_zero() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;
    let stats = stats_queries::get_stats(&state, &user(5), StatsQuery::default())
        .await
        .expect("stats");
    assert_eq!(stats.total_games, 0);
    assert_eq!(stats.total_score, 0);
    assert_eq!(stats.best_score, 0);
    assert_eq!(stats.average_score, 0.0);
    assert!(stats.recent_games.is_empty());
}

#[tokio::test]
async fn stats_aggregate_one_game_type() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;
    for score in [10, 0, 50] {
        score_commands::record_score(&state, &user(1), request("roulette", score, None))
            .await
            .expect("record");
    }
    score_commands::record_score(&state, &user(1), request("puzzle", 400, None))
        .await
        .expect("record");
    score_commands::record_score(&state, &user(2), request("roulette", 90, None))
        .await
        .expect("record");

    let stats = stats_queries::get_stats(
        &state,
        &user(1),
        StatsQuery {
            game_type: Some("roulette".to_string()),
        },
    )
    .await
    .expect("stats");
    assert_eq!(stats.total_games, 3);
    assert_eq!(stats.total_score, 60);
    assert_eq!(stats.best_score, 50);
    assert_eq!(stats.average_score, 20.0);
    let scores: Vec<i64> = stats.recent_games.iter().map(|entry| entry.score).collect();
    assert_eq!(scores, vec![50, 0, 10]);

    let all = stats_queries::get_stats(&state, &user(1), StatsQuery::default())
        .await
        .expect("stats");
    assert_eq!(all.total_games, 4);
    assert_eq!(all.best_score, 400);
}

#[tokio::test]
async fn recent_games_are_capped_at_ten() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;
    for score in 0..15 {
        score_commands::record_score(&state, &user(1), request("roulette", score, None))
            .await
            .expect("record");
    }
    let stats = stats_queries::get_stats(&state, &user(1), StatsQuery::default())
        .await
        .expect("stats");
    assert_eq!(stats.total_games, 15);
    assert_eq!(stats.recent_games.len(), 10);
    assert_eq!(stats.recent_games[0].score, 14);
}

#[tokio::test]
async fn history_filters_by_game_type_and_bounds_limit() {
    let config = RuntimeConfig {
        max_history_limit: 25,
        ..RuntimeConfig::default()
    };
    let (state, _clock) = test_state(config).await;
    for score in 0..30 {
        score_commands::record_score(&state, &user(1), request("roulette", score, None))
            .await
            .expect("record");
    }
    score_commands::record_score(&state, &user(1), request("puzzle", 7, None))
        .await
        .expect("record");

    let puzzle = stats_queries::get_history(
        &state,
        &user(1),
        HistoryQuery {
            game_type: Some("puzzle".to_string()),
            limit: None,
        },
    )
    .await
    .expect("history");
    assert_eq!(puzzle.len(), 1);
    assert_eq!(puzzle[0].game_type, "puzzle");

    let default_limit = stats_queries::get_history(&state, &user(1), HistoryQuery::default())
        .await
        .expect("history");
    assert_eq!(default_limit.len(), 20);
    assert_eq!(default_limit[0].game_type, "puzzle");

    let clamped = stats_queries::get_history(
        &state,
        &user(1),
        HistoryQuery {
            game_type: Some("roulette".to_string()),
            limit: Some(1000),
        },
    )
    .await
    .expect("history");
    assert_eq!(clamped.len(), 25);
}

#[tokio::test]
async fn daily_bonus_is_claimed_once_per_day() {
    let (state, clock) = test_state(RuntimeConfig::default()).await;

    let first = bonus_commands::claim_daily_bonus(&state, &user(1))
        .await
        .expect("first claim");
    assert_eq!(first.amount, 100);

    let second = bonus_commands::claim_daily_bonus(&state, &user(1))
        .await
        .expect_err("second claim");
    assert!(matches!(second, AppError::AlreadyClaimed));

    bonus_commands::claim_daily_bonus(&state, &user(2))
        .await
        .expect("other user claims independently");

    clock.advance_days(1);
    let next_day = bonus_commands::claim_daily_bonus(&state, &user(1))
        .await
        .expect("next day claim");
    assert_eq!(next_day.amount, 100);

    let history = bonus_queries::list_bonus_history(&state, &user(1), BonusHistoryQuery::default())
        .await
        .expect("history");
    let dates: Vec<_> = history.iter().map(|claim| claim.bonus_date).collect();
    assert_eq!(
        dates,
        vec![start_day() + chrono::Days::new(1), start_day()]
    );
}

#[tokio::test]
async fn daily_bonus_amount_comes_from_config() {
    let config = RuntimeConfig {
        daily_bonus_amount: 250,
        ..RuntimeConfig::default()
    };
    let (state, _clock) = test_state(config).await;
    let response = bonus_commands::claim_daily_bonus(&state, &user(1))
        .await
        .expect("claim");
    assert_eq!(response.amount, 250);

    let history = bonus_queries::list_bonus_history(&state, &user(1), BonusHistoryQuery::default())
        .await
        .expect("history");
    assert_eq!(history[0].bonus_amount, 250);
}

#[tokio::test]
async fn concurrent_claims_have_exactly_one_winner() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;

    let attempts = (0..12).map(|_| {
        let state = state.clone();
        tokio::spawn(async move { bonus_commands::claim_daily_bonus(&state, &user(3)).await })
    });
    let results = futures_util::future::join_all(attempts).await;

    let mut winners = 0;
    for result in results {
        match result.expect("join") {
            Ok(_) => winners += 1,
            Err(AppError::AlreadyClaimed) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(winners, 1);

    let history = bonus_queries::list_bonus_history(&state, &user(3), BonusHistoryQuery::default())
        .await
        .expect("history");
    assert_eq!(history.len(), 1);
    let metrics = state.metrics.render_prometheus();
    assert!(metrics.contains("playlab_bonus_claims_total 1\n"));
    assert!(metrics.contains("playlab_bonus_conflicts_total 11\n"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_claims_on_a_shared_database_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (state, _clock) = file_backed_state(RuntimeConfig::default(), dir.path()).await;

    let attempts = (0..16).map(|_| {
        let state = state.clone();
        tokio::spawn(async move { bonus_commands::claim_daily_bonus(&state, &user(8)).await })
    });
    let results = futures_util::future::join_all(attempts).await;

    let mut winners = 0;
    for result in results {
        match result.expect("join") {
            Ok(response) => {
                assert_eq!(response.amount, 100);
                winners += 1;
            }
            Err(AppError::AlreadyClaimed) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(winners, 1);

    let history = bonus_queries::list_bonus_history(&state, &user(8), BonusHistoryQuery::default())
        .await
        .expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].bonus_date, start_day());
}

#[tokio::test]
async fn roulette_spin_is_recorded_in_the_ledger() {
    let (state, _clock) = test_state(RuntimeConfig::default()).await;
    let result = roulette_commands::spin_roulette(&state, &user(1))
        .await
        .expect("spin");

    let history = stats_queries::get_history(
        &state,
        &user(1),
        HistoryQuery {
            game_type: Some("roulette".to_string()),
            limit: Some(5),
        },
    )
    .await
    .expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, result.score);
    assert_eq!(
        history[0].details.as_deref(),
        Some(format!("symbol:{},won:{}", result.symbol, result.won).as_str())
    );
    if !result.won {
        assert_eq!(result.score, 0);
    }
}
