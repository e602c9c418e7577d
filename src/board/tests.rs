//! Tests for the idea board: workflow enforcement, authorization and concurrency

use std::sync::Arc;

use crate::board::{Actor, IdeaBoard};
use crate::domain::{CommentPolicy, TransitionRequest};
use crate::errors::IdeaflowError;
use crate::schemas::{Config, IdeaStatus, NewIdea};

#[cfg(test)]
mod tests {
    use super::*;

    fn submitter() -> Actor {
        Actor::new("sam@example.com", Some("submitter"))
    }

    fn evaluator() -> Actor {
        Actor::new("eve@example.com", Some("evaluator"))
    }

    fn sample_idea() -> NewIdea {
        NewIdea::new("Solar roof", "Cover the car park with panels", "Sustainability")
    }

    async fn board_with_idea(status: IdeaStatus) -> (IdeaBoard, u64) {
        let board = IdeaBoard::default();
        let idea = board.submit_idea(&submitter(), sample_idea()).await.unwrap();
        if status != IdeaStatus::Submitted {
            board
                .update_status(idea.id, &evaluator(), TransitionRequest::new(IdeaStatus::UnderReview))
                .await
                .unwrap();
        }
        if matches!(status, IdeaStatus::Accepted | IdeaStatus::Rejected) {
            board
                .update_status(
                    idea.id,
                    &evaluator(),
                    TransitionRequest::new(status).with_comment("decided"),
                )
                .await
                .unwrap();
        }
        (board, idea.id)
    }

    // ===== SUBMISSION =====

    #[tokio::test]
    async fn test_submit_idea_starts_submitted() {
        let board = IdeaBoard::default();
        let idea = board.submit_idea(&submitter(), sample_idea()).await.unwrap();

        assert_eq!(idea.id, 1);
        assert_eq!(idea.status, IdeaStatus::Submitted);
        assert_eq!(idea.submitter, "sam@example.com");
        assert!(board.evaluation_history(idea.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_idea_trims_fields() {
        let board = IdeaBoard::default();
        let idea = board
            .submit_idea(&submitter(), NewIdea::new("  Solar roof ", " Panels ", " Green "))
            .await
            .unwrap();

        assert_eq!(idea.title, "Solar roof");
        assert_eq!(idea.description, "Panels");
        assert_eq!(idea.category, "Green");
    }

    #[tokio::test]
    async fn test_submit_idea_validates_fields() {
        let board = IdeaBoard::default();

        let err = board
            .submit_idea(&submitter(), NewIdea::new("   ", "desc", "cat"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Title is required"));

        let long_title = "x".repeat(256);
        let err = board
            .submit_idea(&submitter(), NewIdea::new(long_title, "desc", "cat"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Title cannot exceed 255"));

        let err = board
            .submit_idea(&submitter(), NewIdea::new("title", "", "cat"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Description is required"));

        let err = board
            .submit_idea(&submitter(), NewIdea::new("title", "desc", "c".repeat(51)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
        assert!(board.list_ideas().await.is_empty());
    }

    #[tokio::test]
    async fn test_evaluator_cannot_submit() {
        let board = IdeaBoard::default();
        let err = board.submit_idea(&evaluator(), sample_idea()).await.unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_admin_can_submit_and_evaluate() {
        let board = IdeaBoard::default();
        let admin = Actor::new("root@example.com", Some("Evaluator/Admin"));

        let idea = board.submit_idea(&admin, sample_idea()).await.unwrap();
        let update = board
            .update_status(idea.id, &admin, TransitionRequest::new(IdeaStatus::UnderReview))
            .await
            .unwrap();

        assert_eq!(update.idea.status, IdeaStatus::UnderReview);
        assert_eq!(update.evaluation.actor_role, "Admin (Evaluator)");
    }

    #[tokio::test]
    async fn test_list_ideas_ordered_by_id() {
        let board = IdeaBoard::default();
        for i in 0..3 {
            board
                .submit_idea(&submitter(), NewIdea::new(format!("Idea {}", i), "desc", "cat"))
                .await
                .unwrap();
        }

        let ids: Vec<u64> = board.list_ideas().await.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    // ===== STATUS UPDATES =====

    #[tokio::test]
    async fn test_submitted_to_accepted_is_invalid() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;

        let err = board
            .update_status(id, &evaluator(), TransitionRequest::new(IdeaStatus::Accepted))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IdeaflowError::InvalidTransition {
                from: IdeaStatus::Submitted,
                to: IdeaStatus::Accepted
            }
        ));
        assert_eq!(board.get_idea(id).await.unwrap().status, IdeaStatus::Submitted);
        assert!(board.evaluation_history(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reject_with_empty_comment_is_refused() {
        let (board, id) = board_with_idea(IdeaStatus::UnderReview).await;
        let history_before = board.evaluation_history(id).await.unwrap().len();

        let err = board
            .update_status(
                id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Rejected).with_comment(""),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IdeaflowError::CommentRequired { status: IdeaStatus::Rejected }
        ));
        assert_eq!(board.get_idea(id).await.unwrap().status, IdeaStatus::UnderReview);
        assert_eq!(board.evaluation_history(id).await.unwrap().len(), history_before);
    }

    #[tokio::test]
    async fn test_reject_with_comment_appends_one_record() {
        let (board, id) = board_with_idea(IdeaStatus::UnderReview).await;
        let history_before = board.evaluation_history(id).await.unwrap().len();

        let update = board
            .update_status(
                id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Rejected).with_comment("needs more detail"),
            )
            .await
            .unwrap();

        assert_eq!(update.idea.status, IdeaStatus::Rejected);
        assert_eq!(update.evaluation.status_snapshot, Some(IdeaStatus::Rejected));
        assert_eq!(update.evaluation.comment, "needs more detail");

        let history = board.evaluation_history(id).await.unwrap();
        assert_eq!(history.len(), history_before + 1);
        assert_eq!(history.last().unwrap(), &update.evaluation);
        assert_eq!(board.get_idea(id).await.unwrap().status, IdeaStatus::Rejected);
    }

    #[tokio::test]
    async fn test_terminal_idea_cannot_move() {
        let (board, id) = board_with_idea(IdeaStatus::Accepted).await;

        let err = board
            .update_status(
                id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Rejected).with_comment("changed our minds"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
    }

    #[tokio::test]
    async fn test_submitter_cannot_change_status() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;

        let err = board
            .update_status(id, &submitter(), TransitionRequest::new(IdeaStatus::UnderReview))
            .await
            .unwrap_err();
        assert!(matches!(err, IdeaflowError::Forbidden { .. }));
        assert_eq!(board.get_idea(id).await.unwrap().status, IdeaStatus::Submitted);
    }

    #[tokio::test]
    async fn test_missing_role_is_forbidden() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;
        let anonymous = Actor::new("anon", None);

        let err = board
            .update_status(id, &anonymous, TransitionRequest::new(IdeaStatus::UnderReview))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_unknown_idea() {
        let board = IdeaBoard::default();
        let err = board
            .update_status(42, &evaluator(), TransitionRequest::new(IdeaStatus::UnderReview))
            .await
            .unwrap_err();
        assert!(matches!(err, IdeaflowError::IdeaNotFound(42)));
        assert!(board.get_idea(42).await.is_err());
        assert!(board.evaluation_history(42).await.is_err());
    }

    #[tokio::test]
    async fn test_stale_version_is_refused() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;
        board
            .update_status(id, &evaluator(), TransitionRequest::new(IdeaStatus::UnderReview))
            .await
            .unwrap();

        // Caller still thinks the idea is at version 0
        let err = board
            .update_status(
                id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Accepted).with_expected_version(0),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IdeaflowError::VersionConflict { expected: 0, actual: 1, .. }
        ));
        assert_eq!(board.evaluation_history(id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_matching_version_is_accepted() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;
        let update = board
            .update_status(
                id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::UnderReview).with_expected_version(0),
            )
            .await
            .unwrap();
        assert_eq!(update.idea.version, 1);
    }

    #[tokio::test]
    async fn test_strict_policy_requires_comment_on_accept() {
        let config = Config {
            comment_policy: CommentPolicy::AcceptedAndRejected,
            ..Config::default()
        };
        let board = IdeaBoard::new(config);
        let idea = board.submit_idea(&submitter(), sample_idea()).await.unwrap();
        board
            .update_status(idea.id, &evaluator(), TransitionRequest::new(IdeaStatus::UnderReview))
            .await
            .unwrap();

        let err = board
            .update_status(idea.id, &evaluator(), TransitionRequest::new(IdeaStatus::Accepted))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            IdeaflowError::CommentRequired { status: IdeaStatus::Accepted }
        ));

        let update = board
            .update_status(
                idea.id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Accepted).with_comment("strong business case"),
            )
            .await
            .unwrap();
        assert_eq!(update.idea.status, IdeaStatus::Accepted);
    }

    #[tokio::test]
    async fn test_comment_length_limit() {
        let (board, id) = board_with_idea(IdeaStatus::UnderReview).await;

        let err = board
            .update_status(
                id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Rejected).with_comment("x".repeat(5001)),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            IdeaflowError::CommentTooLong { length: 5001, max: 5000 }
        ));
        assert_eq!(board.get_idea(id).await.unwrap().status, IdeaStatus::UnderReview);

        let ok = board.add_comment(id, &evaluator(), &"x".repeat(5000)).await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn test_illegal_edge_reported_before_comment_length() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;

        let err = board
            .update_status(
                id,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Accepted).with_comment("x".repeat(5001)),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TRANSITION");
        assert!(board.evaluation_history(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_idea_reported_before_comment_length() {
        let board = IdeaBoard::default();

        let err = board
            .update_status(
                99,
                &evaluator(),
                TransitionRequest::new(IdeaStatus::Rejected).with_comment("x".repeat(5001)),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "IDEA_NOT_FOUND");
    }

    // ===== COMMENTS =====

    #[tokio::test]
    async fn test_add_comment_keeps_status() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;

        let evaluation = board
            .add_comment(id, &evaluator(), "Interesting, will review next week")
            .await
            .unwrap();

        assert_eq!(evaluation.status_snapshot, None);
        assert_eq!(evaluation.actor, "eve@example.com");
        assert_eq!(evaluation.actor_role, "Evaluator");
        assert_eq!(board.get_idea(id).await.unwrap().status, IdeaStatus::Submitted);
        assert_eq!(board.get_idea(id).await.unwrap().version, 0);
    }

    #[tokio::test]
    async fn test_blank_comment_is_refused() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;
        let err = board.add_comment(id, &evaluator(), "   ").await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
        assert!(board.evaluation_history(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submitter_cannot_comment() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;
        let err = board.add_comment(id, &submitter(), "please look").await.unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_history_in_creation_order() {
        let (board, id) = board_with_idea(IdeaStatus::Submitted).await;
        board.add_comment(id, &evaluator(), "first").await.unwrap();
        board
            .update_status(id, &evaluator(), TransitionRequest::new(IdeaStatus::UnderReview))
            .await
            .unwrap();
        board.add_comment(id, &evaluator(), "third").await.unwrap();

        let history = board.evaluation_history(id).await.unwrap();
        let snapshots: Vec<_> = history.iter().map(|e| e.status_snapshot).collect();
        assert_eq!(snapshots, vec![None, Some(IdeaStatus::UnderReview), None]);
        assert!(history.windows(2).all(|w| w[0].id < w[1].id));
    }

    // ===== CONCURRENCY =====

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_transitions_from_same_status() {
        let board = Arc::new(IdeaBoard::default());
        let id = board.submit_idea(&submitter(), sample_idea()).await.unwrap().id;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let board = Arc::clone(&board);
            handles.push(tokio::spawn(async move {
                board
                    .update_status(id, &evaluator(), TransitionRequest::new(IdeaStatus::UnderReview))
                    .await
            }));
        }

        let mut successes = 0;
        let mut refusals = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(IdeaflowError::InvalidTransition { .. }) => refusals += 1,
                Err(other) => panic!("unexpected error: {}", other),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(refusals, 7);
        assert_eq!(board.evaluation_history(id).await.unwrap().len(), 1);
        assert_eq!(board.get_idea(id).await.unwrap().version, 1);
    }
}
